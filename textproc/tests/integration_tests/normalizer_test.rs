// tests/integration_tests/normalizer_test.rs
use super::common::create_test_file;
use anyhow::Result;
use tempfile::TempDir;
use textproc::{InputSource, normalize};

#[test]
fn test_normalize_paragraph() {
    let text = "this is a sentence ,with bad spacing.and a second one !\n\
                  (  bracketed  )text ;  more text ?yes";
    assert_eq!(
        normalize(text),
        "This is a sentence, with bad spacing. And a second one!\n\
         (Bracketed) text; more text? Yes"
    );
}

#[test]
fn test_normalize_file_source() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = create_test_file(temp_dir.path(), "draft.txt", "hi there.how are you ?\n")?;

    let text = InputSource::File(path).resolve()?;
    assert_eq!(normalize(&text), "Hi there. How are you?\n");
    Ok(())
}

#[test]
fn test_normalize_is_idempotent() {
    let inputs = [
        "hello   world ( foo )  .",
        "a{b}c [ d ]e",
        "what?no!yes.  maybe ; perhaps : fine",
        "ab(c(d",
        "(a)b)c",
    ];
    for input in inputs {
        let once = normalize(input);
        assert_eq!(normalize(&once), once, "second pass changed {input:?}");
    }
}

#[test]
fn test_nested_brackets_spaced() {
    assert_eq!(normalize("call(f(x)[y])then"), "Call (f (x) [y]) then");
}
