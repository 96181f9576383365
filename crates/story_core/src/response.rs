//! Interpretation of the model's free-form reply.
//!
//! Replies are parsed in two steps: the whole reply as JSON, then, when that
//! fails, the first balanced `{ ... }` block that is a valid JSON object.
//! The second step covers models that wrap the object in prose or markdown
//! code fences.

use engine_logging::{engine_debug, engine_warn};
use serde_json::{Map, Value};

use crate::prompt::NO_CHARACTERS_MESSAGE;
use crate::tally::CharacterTally;

const SENTINEL_KEY: &str = "error";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedResponse {
    Characters(CharacterTally),
    /// The model answered with the "no named characters" sentinel or `{}`.
    NoCharacters,
    Unparseable(String),
}

impl ParsedResponse {
    /// Collapses the response into a tally; failures contribute nothing.
    pub fn into_tally(self) -> CharacterTally {
        match self {
            ParsedResponse::Characters(tally) => tally,
            ParsedResponse::NoCharacters | ParsedResponse::Unparseable(_) => CharacterTally::new(),
        }
    }
}

pub fn parse_character_response(reply: &str) -> ParsedResponse {
    let trimmed = reply.trim();
    if trimmed.is_empty() {
        return ParsedResponse::Unparseable("empty response".to_string());
    }

    let value = match serde_json::from_str::<Value>(trimmed) {
        Ok(value) => value,
        Err(direct_err) => match find_embedded_object(trimmed) {
            Some(object) => Value::Object(object),
            None => {
                return ParsedResponse::Unparseable(format!(
                    "no JSON object in response: {direct_err}"
                ))
            }
        },
    };

    match value {
        Value::Object(object) => interpret_object(object),
        other => ParsedResponse::Unparseable(format!(
            "expected a JSON object, got {}",
            json_kind(&other)
        )),
    }
}

/// Returns the first balanced brace block in `text` that parses as an object.
fn find_embedded_object(text: &str) -> Option<Map<String, Value>> {
    text.char_indices()
        .filter(|&(_, ch)| ch == '{')
        .filter_map(|(start, _)| {
            let end = matching_brace(&text[start..])?;
            serde_json::from_str::<Map<String, Value>>(&text[start..start + end]).ok()
        })
        .next()
}

/// Byte length of the balanced block at the start of `text`, which must
/// begin with `{`. Braces inside string literals do not count.
fn matching_brace(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (idx, ch) in text.char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(idx + 1);
                }
            }
            _ => {}
        }
    }
    None
}

fn interpret_object(object: Map<String, Value>) -> ParsedResponse {
    if object.is_empty() {
        return ParsedResponse::NoCharacters;
    }
    if object.len() == 1 {
        if let Some(Value::String(message)) = object.get(SENTINEL_KEY) {
            if is_no_characters_message(message) {
                engine_debug!("Model reported no characters: {}", message);
                return ParsedResponse::NoCharacters;
            }
            return ParsedResponse::Unparseable(format!("model reported an error: {message}"));
        }
    }

    let mut tally = CharacterTally::new();
    for (name, value) in object {
        if name.trim().is_empty() {
            engine_warn!("Skipping character with empty name");
            continue;
        }
        match mention_count(&value) {
            Some(count) => tally.add(name, count),
            None => engine_warn!("Skipping character {:?}: unusable count {}", name, value),
        }
    }

    if tally.is_empty() {
        ParsedResponse::Unparseable("no usable character counts".to_string())
    } else {
        ParsedResponse::Characters(tally)
    }
}

/// Matches the sentinel message, ignoring case, surrounding whitespace and a
/// trailing period.
fn is_no_characters_message(message: &str) -> bool {
    let normalize = |text: &str| text.trim().trim_end_matches('.').trim_end().to_string();
    normalize(message).eq_ignore_ascii_case(&normalize(NO_CHARACTERS_MESSAGE))
}

fn mention_count(value: &Value) -> Option<u64> {
    match value {
        Value::Number(number) => number.as_u64().or_else(|| {
            number
                .as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0)
                .map(|f| f.round() as u64)
        }),
        Value::String(text) => text.trim().parse::<u64>().ok(),
        _ => None,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
