// tests/integration_tests/history_test.rs
use super::common::create_test_file;
use anyhow::Result;
use tempfile::TempDir;
use textproc::{History, InputSource, Statistics, TextError};

#[test]
fn test_history_survives_restart() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("history.json");
    let source = InputSource::Text(String::from("to be or not to be"));

    {
        let mut history = History::load(&path)?;
        let entry = Statistics::from_source(&source)?.into_entry(&source);
        let added = history.add(entry.clone())?;
        assert_eq!(added, &entry);
    }

    let history = History::load(&path)?;
    assert_eq!(history.len(), 1);
    let entry = history.last_entry().unwrap();
    assert_eq!(entry.content, "to be or not to be");
    assert_eq!(entry.words.count, 6);
    assert_eq!(
        entry.words.most_used.to_string(),
        "Most used words: to, be (2 times)"
    );
    Ok(())
}

#[test]
fn test_corrupt_history_is_reported() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = create_test_file(temp_dir.path(), "history.json", r#"[{"type": "pdf"}]"#)?;

    let err = History::load(&path).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<TextError>(),
        Some(TextError::MalformedHistory { .. })
    ));
    Ok(())
}
