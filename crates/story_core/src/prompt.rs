/// Message carried by [`NO_CHARACTERS_SENTINEL`].
pub const NO_CHARACTERS_MESSAGE: &str = "No named characters found in the provided text.";

/// Reply the model is told to send when a passage names nobody.
pub const NO_CHARACTERS_SENTINEL: &str =
    r#"{"error": "No named characters found in the provided text."}"#;

/// Builds the character-extraction instruction for one chunk.
///
/// The chunk is embedded verbatim between fences so the model can tell the
/// instruction apart from the story.
pub fn build_prompt(chunk: &str) -> String {
    format!(
        "Identify every named character in the text below and count how many \
times each one is mentioned.\n\
Respond with ONLY a JSON object that maps each character name to its \
frequency, for example {{\"Alice\": 3, \"Bob\": 1}}. Do not add any \
explanation, markdown or extra keys.\n\
If the text contains no named characters, respond with exactly:\n\
{NO_CHARACTERS_SENTINEL}\n\n\
Text:\n\"\"\"\n{chunk}\n\"\"\"\n"
    )
}
