//! Tests for script source and style selection.

use std::io::Write;
use storyboard::{ArtStyle, SAMPLE_SCRIPT, ScriptSource, resolve_style};

#[test]
fn test_source_precedence() {
    let file = Some("script.txt".into());
    let text = Some("SCENE 1".to_string());

    assert!(matches!(
        ScriptSource::from_args(file, text.clone()),
        ScriptSource::File(_)
    ));
    assert_eq!(
        ScriptSource::from_args(None, text),
        ScriptSource::Text("SCENE 1".to_string())
    );
    assert_eq!(ScriptSource::from_args(None, None), ScriptSource::Sample);
}

#[test]
fn test_load_sample_and_inline() -> anyhow::Result<()> {
    assert_eq!(ScriptSource::Sample.load()?, SAMPLE_SCRIPT);
    assert_eq!(
        ScriptSource::Text("INT. DINER - NIGHT".to_string()).load()?,
        "INT. DINER - NIGHT"
    );
    Ok(())
}

#[test]
fn test_load_from_file() -> anyhow::Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(file, "SCENE 1\nEXT. PIER - DAWN")?;

    let source = ScriptSource::File(file.path().to_path_buf());
    assert_eq!(source.load()?, "SCENE 1\nEXT. PIER - DAWN");
    Ok(())
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.txt");

    let err = ScriptSource::File(path).load().unwrap_err();
    let message = err.user_message();
    assert!(message.starts_with("Failed to read script from"));
    assert!(message.contains("missing.txt"));
    assert!(err.to_string().contains("IO Error"));
}

#[test]
fn test_resolve_style() -> anyhow::Result<()> {
    assert_eq!(resolve_style(None, None)?, ArtStyle::default().to_string());
    assert_eq!(resolve_style(None, Some(1))?, ArtStyle::CinematicSketch.to_string());
    assert_eq!(resolve_style(None, Some(8))?, ArtStyle::VintageCartoon.to_string());
    assert_eq!(
        resolve_style(Some("Charcoal on butcher paper".to_string()), Some(2))?,
        "Charcoal on butcher paper"
    );
    // Blank free text falls through to the preset
    assert_eq!(resolve_style(Some("  ".to_string()), Some(7))?, "Cyberpunk neon noir");
    Ok(())
}

#[test]
fn test_resolve_style_out_of_range() {
    for preset in [0, 9] {
        let err = resolve_style(None, Some(preset)).unwrap_err();
        assert_eq!(
            err.user_message(),
            format!("Unknown style preset {} (expected 1 to 8)", preset)
        );
    }
}
