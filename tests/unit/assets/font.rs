use std::io::Write;

use super::*;

#[test]
fn missing_font_file_is_font_load_error() {
    let cache = FontCache::new();
    let err = cache
        .load(std::path::Path::new("/nonexistent/anton.ttf"))
        .unwrap_err();
    assert!(matches!(err, MemeforgeError::FontLoad(_)), "{err}");
}

#[test]
fn corrupt_font_data_is_font_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.ttf");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(b"definitely not a font").unwrap();

    let cache = FontCache::new();
    let err = cache.load(&path).unwrap_err();
    assert!(matches!(err, MemeforgeError::FontLoad(_)), "{err}");
}

#[test]
fn failed_loads_are_not_cached() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("late.ttf");

    let cache = FontCache::new();
    assert!(cache.load(&path).is_err());
    // The path stays loadable once the asset appears; a cached failure would
    // keep returning the stale error. Parsing still fails here because the
    // bytes are garbage, but the error message changes from read to parse.
    std::fs::write(&path, b"garbage").unwrap();
    let err = cache.load(&path).unwrap_err();
    assert!(err.to_string().contains("failed to parse"), "{err}");
}

// Positive-path loading and glyph metrics need a real font face on disk and
// are exercised by integration tests run against bundled assets.
