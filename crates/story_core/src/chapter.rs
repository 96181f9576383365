/// Returns chapter `number` of a markdown story whose chapters start with
/// `## {number} ` headings.
///
/// The chapter runs from its heading up to, but not including, the heading
/// of chapter `number + 1`, or to the end of the text. Line endings are kept.
pub fn extract_chapter(text: &str, number: u32) -> Option<String> {
    let start_marker = format!("## {number} ");
    let next_marker = format!("## {} ", number.saturating_add(1));

    let mut lines = text.split_inclusive('\n');
    let heading = lines.find(|line| line.starts_with(&start_marker))?;

    let mut chapter = String::from(heading);
    for line in lines.take_while(|line| !line.starts_with(&next_marker)) {
        chapter.push_str(line);
    }
    Some(chapter)
}
