use std::io::Write;

use fixture_model::{CollisionFilter, MIN_DENSITY};
use fixture_sandbox::config::{PhysicsConfig, SandboxConfig};

#[test]
fn shipped_config_parses_cleanly() {
    let cfg = SandboxConfig::load_from_file(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/config/sandbox.ron"))
        .expect("parse shipped config");
    assert!(cfg.validate().is_empty(), "{:?}", cfg.validate());
    assert_eq!(cfg.editor.icon.as_deref(), Some("+"));
    assert!(cfg.editor.defaults.filter.is_default());
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    let sample = r#"(editor: (defaults: (name: "Hull")))"#;
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(sample.as_bytes()).unwrap();
    let cfg = SandboxConfig::load_from_file(file.path()).expect("parse config");
    assert_eq!(cfg.editor.defaults.name, "Hull");
    assert_eq!(cfg.physics, PhysicsConfig::default());
    assert_eq!(cfg.editor.edit_title, "Edit Fixture");
}

#[test]
fn category_filter_default_parses() {
    let sample = r"(editor: (defaults: (filter: Category(category: 2, mask: 5))))";
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(sample.as_bytes()).unwrap();
    let cfg = SandboxConfig::load_from_file(file.path()).expect("parse config");
    assert_eq!(cfg.editor.defaults.filter, CollisionFilter::category_filter(2, 5));
}

#[test]
fn non_positive_default_density_warns_and_clamps() {
    let sample = r"(editor: (defaults: (density: -3.0, restitution: 2.0)))";
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(sample.as_bytes()).unwrap();
    let cfg = SandboxConfig::load_from_file(file.path()).expect("parse config");
    let warnings = cfg.validate();
    assert!(warnings.iter().any(|w| w.contains("editor.defaults.density")), "{warnings:?}");
    assert!(warnings.iter().any(|w| w.contains("editor.defaults.restitution")), "{warnings:?}");
    assert_eq!(cfg.editor.defaults.draft().density, MIN_DENSITY);
}

#[test]
fn broken_file_reports_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"(window: (width: \"wide\"))").unwrap();
    let (cfg, err) = SandboxConfig::load_or_default(file.path());
    assert!(err.is_some_and(|e| e.starts_with("parse RON")));
    assert_eq!(cfg, SandboxConfig::default());
}
