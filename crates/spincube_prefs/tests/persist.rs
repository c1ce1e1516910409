use pretty_assertions::assert_eq;
use spincube_prefs::{InterpolateFn, Preferences};

#[test]
fn test_user_file_overrides_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.yaml");
    std::fs::write(
        &path,
        "animation:\n  twist_duration: 0.5\n  twist_interpolation: cosine\n",
    )
    .unwrap();

    let prefs = Preferences::load_from(Some(&path));
    assert_eq!(prefs.animation.twist_duration, 0.5);
    assert_eq!(prefs.animation.twist_interpolation, InterpolateFn::Cosine);
    // Unspecified values come from the defaults.
    assert_eq!(prefs.animation.scramble_twist_duration, 0.2);
    assert_eq!(prefs.interaction, Preferences::default().interaction);
}

#[test]
fn test_missing_user_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let prefs = Preferences::load_from(Some(&dir.path().join("nonexistent.yaml")));
    assert_eq!(prefs, Preferences::default());
}

#[test]
fn test_save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("prefs.yaml");

    let mut prefs = Preferences::default();
    prefs.animation.twist_interpolation = InterpolateFn::CubicOut;
    prefs.interaction.hover_highlight = false;
    prefs.save_to(&path).unwrap();

    assert_eq!(Preferences::load_from(Some(&path)), prefs);
}

#[test]
fn test_invalid_user_file_is_backed_up() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.yaml");
    std::fs::write(&path, "animation:\n  twist_interpolation: wobbly\n").unwrap();

    let prefs = Preferences::load_from(Some(&path));
    assert_eq!(prefs, Preferences::default());
    assert!(!path.exists());
    assert!(dir.path().join("prefs.bak.yaml").exists());
}
