use crate::cli::{init, template};
use crate::conf::{LoadRequest, load_render_config, load_values};
use crate::render::render;
use std::fs;
use tempfile::tempdir;

#[test]
fn init_writes_sample_values() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("values.yaml");

    // Act
    init(path.clone()).unwrap();

    // Assert
    let values = load_values(&path).unwrap();
    assert!(values.ingress.enabled);
    assert_eq!(values.ingress.host, "binder.example.org");
    assert_eq!(values.ingress.https.kind, "kube-lego");
}

#[test]
fn init_creates_parent_directories() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("deploy").join("prod").join("values.yaml");

    // Act
    init(path.clone()).unwrap();

    // Assert
    assert!(path.is_file());
}

#[test]
fn init_refuses_to_overwrite() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("values.yaml");
    fs::write(&path, "ingress: {}\n").unwrap();

    // Act
    let result = init(path.clone());

    // Assert
    let err = result.unwrap_err();
    assert!(err.to_string().contains("already exists"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "ingress: {}\n");
}

#[test]
fn sample_values_render_a_tls_ingress() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("values.yaml");
    fs::write(&path, template("values.yaml").unwrap()).unwrap();
    let request = LoadRequest {
        values_files: vec![path],
        release_name: Some("binder".to_owned()),
        ..Default::default()
    };

    // Act
    let validated = load_render_config(&request).unwrap();
    let ingress = render(&validated.config).unwrap();

    // Assert
    assert!(validated.validation.warnings.is_empty());
    let tls = ingress.spec.tls.unwrap();
    assert_eq!(tls[0].secret_name, "kubelego-tls-binder-binder");
    assert_eq!(ingress.metadata.annotations.unwrap().len(), 2);
}

#[test]
fn missing_template_is_an_error() {
    assert!(template("nope.yaml").is_err());
}
