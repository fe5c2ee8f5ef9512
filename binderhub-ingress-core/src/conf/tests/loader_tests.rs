use crate::conf::{
    ConfigError, LoadRequest, load_render_config, load_values, resolve_render_config,
};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn load_yaml_values_file() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = write(
        &dir,
        "values.yaml",
        r#"
ingress:
  enabled: true
  host: a.b.com
  annotations:
    foo: bar
"#,
    );

    // Act
    let values = load_values(&path).unwrap();

    // Assert
    assert!(values.ingress.enabled);
    assert_eq!(values.ingress.host, "a.b.com");
    assert_eq!(values.ingress.annotations["foo"], "bar");
}

#[test]
fn load_toml_values_file() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = write(
        &dir,
        "values.toml",
        r#"
[ingress]
enabled = true
host = "a.b.com"

[ingress.https]
enabled = true
type = "kube-lego"

[ingress.annotations]
"kubernetes.io/ingress.class" = "nginx"
"#,
    );

    // Act
    let values = load_values(&path).unwrap();

    // Assert
    assert!(values.ingress.https.enabled);
    assert_eq!(values.ingress.https.kind, "kube-lego");
    assert_eq!(values.ingress.annotations["kubernetes.io/ingress.class"], "nginx");
}

#[test]
fn load_hcl_values_file() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = write(
        &dir,
        "values.hcl",
        r#"
ingress = {
  enabled = true
  host    = "a.b.com"
  https = {
    enabled = false
    type    = "kube-lego"
  }
}
"#,
    );

    // Act
    let values = load_values(&path).unwrap();

    // Assert
    assert!(values.ingress.enabled);
    assert_eq!(values.ingress.host, "a.b.com");
    assert!(!values.ingress.https.enabled);
}

#[test]
fn empty_values_file_yields_defaults() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = write(&dir, "values.yaml", "");

    // Act
    let values = load_values(&path).unwrap();

    // Assert
    assert!(!values.ingress.enabled);
}

#[test]
fn unsupported_extension_is_rejected() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = write(&dir, "values.ini", "enabled=true");

    // Act
    let err = load_values(&path).unwrap_err();

    // Assert
    assert!(matches!(err, ConfigError::UnsupportedFormat { .. }));
}

#[test]
fn missing_file_is_read_error() {
    // Arrange
    let dir = tempdir().unwrap();

    // Act
    let err = load_values(&dir.path().join("missing.yaml")).unwrap_err();

    // Assert
    assert!(matches!(err, ConfigError::ReadFile { .. }));
}

#[test]
fn malformed_yaml_is_parse_error() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = write(&dir, "values.yaml", "ingress: [unterminated\n");

    // Act
    let err = load_values(&path).unwrap_err();

    // Assert
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("values.yaml"));
}

#[test]
fn wrong_field_type_is_schema_error() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = write(&dir, "values.yaml", "ingress:\n  enabled: [1, 2]\n");

    // Act
    let err = load_values(&path).unwrap_err();

    // Assert
    assert!(matches!(err, ConfigError::Schema { .. }));
}

#[test]
fn no_sources_resolves_to_disabled_ingress() {
    // Act
    let config = resolve_render_config(&LoadRequest::default()).unwrap();

    // Assert
    assert!(!config.ingress_enabled);
    assert_eq!(config.https_type, "kube-lego");
}

#[test]
fn files_layer_and_overrides_apply_last() {
    // Arrange
    let dir = tempdir().unwrap();
    let base = write(
        &dir,
        "values.yaml",
        "ingress:\n  enabled: true\n  host: base.example.com\n  annotations:\n    a: '1'\n",
    );
    let prod = write(
        &dir,
        "prod.toml",
        "[ingress]\nhost = \"prod.example.com\"\n\n[ingress.annotations]\nb = \"2\"\n",
    );
    let request = LoadRequest {
        values_files: vec![base, prod],
        overrides: vec!["ingress.https.enabled=true".to_owned()],
        release_name: Some("rel1".to_owned()),
    };

    // Act
    let config = resolve_render_config(&request).unwrap();

    // Assert
    assert_eq!(config.host, "prod.example.com");
    assert_eq!(config.annotations.len(), 2);
    assert!(config.https_enabled);
    assert!(config.tls_enabled());
    assert_eq!(config.release_name, "rel1");
}

#[test]
fn load_render_config_rejects_invalid_values() {
    // Arrange
    let request = LoadRequest {
        overrides: vec!["ingress.enabled=true".to_owned()],
        ..Default::default()
    };

    // Act
    let err = load_render_config(&request).unwrap_err();

    // Assert
    let ConfigError::Validation { report } = err else {
        panic!("expected validation error, got {err:?}");
    };
    let fields: Vec<_> = report.errors.iter().map(|i| i.field.as_str()).collect();
    assert_eq!(fields, vec!["ingress.host", "releaseName"]);
}

#[test]
fn load_render_config_keeps_warnings() {
    // Arrange
    let request = LoadRequest {
        overrides: vec![
            "ingress.enabled=true".to_owned(),
            "ingress.host=a.b.com".to_owned(),
            "ingress.https.enabled=true".to_owned(),
            "ingress.https.type=none".to_owned(),
        ],
        release_name: Some("rel1".to_owned()),
        ..Default::default()
    };

    // Act
    let validated = load_render_config(&request).unwrap();

    // Assert
    assert!(validated.validation.errors.is_empty());
    assert_eq!(validated.validation.warnings.len(), 1);
    assert!(!validated.config.tls_enabled());
}

#[test]
fn bad_override_fails_before_validation() {
    // Arrange
    let request = LoadRequest {
        overrides: vec!["ingress.enabled".to_owned()],
        ..Default::default()
    };

    // Act
    let err = resolve_render_config(&request).unwrap_err();

    // Assert
    assert!(matches!(err, ConfigError::InvalidOverride { .. }));
}
