#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

fn temp_dir() -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("gen_test_{}_{}", std::process::id(), nanos));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn config_in(dir: &PathBuf, max: u32) -> GeneratorConfig {
    GeneratorConfig {
        max_component_count: max,
        template_dir: dir.clone(),
        template_name: "t.j2".to_string(),
        output_path: dir.join("output").join("generated.rs"),
    }
}

#[test]
fn test_generate_writes_rendered_output() {
    let dir = temp_dir();
    fs::write(
        dir.join("t.j2"),
        "{{ get_component_names(max_component_count) | join(\"+\") }}",
    )
    .unwrap();

    let config = config_in(&dir, 4);
    let path = generate(&config).unwrap();
    assert_eq!(path, config.output_path);
    assert_eq!(fs::read_to_string(&path).unwrap(), "C1+C2+C3+C4");

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_generate_overwrites_previous_output() {
    let dir = temp_dir();
    fs::write(dir.join("t.j2"), "{{ max_component_count }}").unwrap();

    let config = config_in(&dir, 2);
    fs::create_dir_all(config.output_path.parent().unwrap()).unwrap();
    fs::write(&config.output_path, "stale contents from an earlier run").unwrap();

    generate(&config).unwrap();
    assert_eq!(fs::read_to_string(&config.output_path).unwrap(), "2");

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_generate_rejects_zero_count() {
    let dir = temp_dir();
    fs::write(dir.join("t.j2"), "unused").unwrap();

    let config = config_in(&dir, 0);
    let err = generate(&config).unwrap_err();
    assert!(matches!(err, GenerateError::InvalidConfig(_)));
    // Rejected before rendering, so nothing was written
    assert!(!config.output_path.exists());

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_generate_missing_template_leaves_no_output() {
    let dir = temp_dir();
    let config = config_in(&dir, 3);
    let err = generate(&config).unwrap_err();
    assert!(matches!(err, GenerateError::TemplateNotFound { .. }));
    assert!(!config.output_path.exists());
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_default_config_values() {
    let config = GeneratorConfig::default();
    assert_eq!(config.max_component_count, 5);
    assert_eq!(config.template_name, "query_overloads.rs.j2");
    assert_eq!(config.template_dir, PathBuf::from("templates"));
    assert_eq!(
        config.output_path,
        PathBuf::from("output/query_overloads.rs")
    );
}
