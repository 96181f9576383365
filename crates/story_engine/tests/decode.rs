use pretty_assertions::assert_eq;
use story_engine::{decode_text, load_story, LoadError};
use tempfile::TempDir;

#[test]
fn plain_utf8_is_kept() {
    let decoded = decode_text("Zoë met D'Artagnan.".as_bytes()).unwrap();
    assert_eq!(decoded.text, "Zoë met D'Artagnan.");
    assert_eq!(decoded.encoding_label, "UTF-8");
}

#[test]
fn utf8_bom_is_stripped() {
    let decoded = decode_text(b"\xEF\xBB\xBFhello").unwrap();
    assert_eq!(decoded.text, "hello");
    assert_eq!(decoded.encoding_label, "UTF-8");
}

#[test]
fn utf16_bom_selects_utf16() {
    let decoded = decode_text(&[0xFF, 0xFE, b'h', 0x00, b'i', 0x00]).unwrap();
    assert_eq!(decoded.text, "hi");
    assert_eq!(decoded.encoding_label, "UTF-16LE");
}

#[test]
fn legacy_encoding_is_detected() {
    let decoded = decode_text(b"The caf\xe9 was quiet and the gar\xe7on smiled.").unwrap();
    assert_eq!(decoded.text, "The café was quiet and the garçon smiled.");
    assert_ne!(decoded.encoding_label, "UTF-8");
}

#[test]
fn load_story_reports_missing_file() {
    let temp = TempDir::new().unwrap();
    let err = load_story(&temp.path().join("missing.md")).unwrap_err();
    assert!(matches!(err, LoadError::NotFound(_)));
}

#[test]
fn load_story_reads_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("story.md");
    std::fs::write(&path, "Once upon a time.").unwrap();

    let story = load_story(&path).unwrap();
    assert_eq!(story.text, "Once upon a time.");
    assert_eq!(story.path, path);
}
