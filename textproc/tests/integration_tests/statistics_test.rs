// tests/integration_tests/statistics_test.rs
use super::common::create_test_file;
use anyhow::Result;
use tempfile::TempDir;
use textproc::{FrequencyTable, InputSource, SourceKind, Statistics, TextError, extract_words};

#[test]
fn test_hello_world_statistics() {
    let text = "Hello, hello WORLD!";
    assert_eq!(extract_words(text), vec!["hello", "hello", "world"]);

    let stats = Statistics::from_text(text);
    assert_eq!(stats.characters().count, 19);
    assert_eq!(stats.characters().exclude_spaces, 17);
    assert_eq!(
        stats.characters().most_used.to_string(),
        "Most used character: l (4 times)"
    );
    assert_eq!(stats.words().count, 3);
    assert_eq!(
        stats.words().most_used.to_string(),
        "Most used word: hello (2 times)"
    );
}

#[test]
fn test_distinct_items_have_no_most_used() {
    let table = FrequencyTable::from_items(["a", "b", "c"]);
    assert!(table.no_most_used());

    let stats = Statistics::from_text("abc def");
    assert!(stats.characters().most_used.is_empty());
    assert!(stats.words().most_used.is_empty());
    assert_eq!(stats.words().most_used.to_string(), "Most used word: -");
}

#[test]
fn test_statistics_from_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = create_test_file(temp_dir.path(), "notes.txt", "one two\ntwo three\n")?;
    let source = InputSource::File(path.clone());

    let stats = Statistics::from_source(&source)?;
    assert_eq!(stats.characters().count, 18);
    assert_eq!(stats.characters().exclude_spaces, 14);
    assert_eq!(stats.words().count, 4);
    assert_eq!(stats.words().most_used.elements, vec!["two"]);

    let entry = stats.into_entry(&source);
    assert_eq!(entry.kind, SourceKind::File);
    assert_eq!(entry.content, path.display().to_string());
    Ok(())
}

#[test]
fn test_statistics_missing_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let source = InputSource::File(temp_dir.path().join("nope.txt"));
    assert!(matches!(
        Statistics::from_source(&source),
        Err(TextError::FileNotFound(_))
    ));
    Ok(())
}
