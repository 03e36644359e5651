use super::*;
use tempfile::TempDir;

#[test]
fn test_reset_dir_removes_previous_contents() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("csv_dir");
    fs::create_dir(&target).unwrap();
    fs::write(target.join("csv_1.csv"), "id,level\nA,1\n").unwrap();

    reset_dir(&target).unwrap();

    assert!(target.is_dir());
    assert_eq!(fs::read_dir(&target).unwrap().count(), 0);
}

#[test]
fn test_reset_dir_creates_missing_directory() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("a").join("b");

    reset_dir(&target).unwrap();
    assert!(target.is_dir());
}

#[test]
fn test_ensure_dir_keeps_contents() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("keep.txt"), "x").unwrap();

    ensure_dir(dir.path()).unwrap();
    assert!(dir.path().join("keep.txt").exists());
}

#[test]
fn test_file_in_place_of_directory_is_configuration_error() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("not_a_dir");
    fs::write(&file, "x").unwrap();

    assert!(matches!(ensure_dir(&file), Err(PipelineError::Configuration(_))));
    assert!(matches!(reset_dir(&file), Err(PipelineError::Configuration(_))));
    assert!(file.is_file());
}
