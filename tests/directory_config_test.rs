use pitstop::config::toml_config::load_directory;
use std::fs;
use tempfile::TempDir;

fn write_directory(dir: &TempDir, contents: &str) -> String {
    let path = dir.path().join("centers.toml");
    fs::write(&path, contents).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn loads_directory_from_toml_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_directory(
        &temp_dir,
        r#"
            [[center]]
            id = 1
            name = "Main Street Garage"
            address = "1 Main St, Springfield"
            lat = 40.7589
            lng = -73.9851
            specialties = ["Brake System", "General Maintenance"]
            phone = "(555) 111-2222"

            [[center]]
            id = 2
            name = "Uptown Motors"
            address = "99 High St, Springfield"
            lat = 40.7614
            lng = -73.9776
            specialties = ["Air Filter"]
            phone = "(555) 333-4444"
        "#,
    );

    let directory = load_directory(&path).unwrap();
    assert_eq!(directory.centers().len(), 2);
    assert_eq!(directory.centers()[0].name, "Main Street Garage");
    assert_eq!(directory.centers()[1].location.lat, 40.7614);
    assert!(directory.centers()[1].has_specialty("Air Filter"));
}

#[test]
fn rejects_directory_without_wildcard_center() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_directory(
        &temp_dir,
        r#"
            [[center]]
            id = 1
            name = "Brakes Only"
            address = "1 Main St"
            lat = 40.0
            lng = -73.0
            specialties = ["Brake System"]
            phone = "(555) 111-2222"
        "#,
    );

    let err = load_directory(&path).unwrap_err();
    assert!(err.to_string().contains("General Maintenance"));
}

#[test]
fn rejects_empty_directory_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_directory(&temp_dir, "");

    assert!(load_directory(&path).is_err());
}

#[test]
fn rejects_malformed_toml() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_directory(&temp_dir, "[[center]]\nid = \"oops");

    assert!(load_directory(&path).is_err());
}

#[test]
fn missing_file_is_an_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nope.toml");

    let err = load_directory(&path).unwrap_err();
    assert!(matches!(err, pitstop::LocatorError::IoError(_)));
}
