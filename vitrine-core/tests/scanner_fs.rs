use std::fs;

use tempfile::TempDir;
use vitrine_core::{
    CatalogError, CatalogScanner, DirectoryPolicy, MediaCategory, decode_address,
};

fn populate(dir: &TempDir, names: &[&str]) {
    for name in names {
        fs::write(dir.path().join(name), b"fake content").unwrap();
    }
}

#[test]
fn scan_real_directory_in_natural_order() {
    let temp_dir = TempDir::new().unwrap();
    populate(
        &temp_dir,
        &["b.png", "a.PNG", "c.mp4", "notes.txt", "img10.jpg", "img2.jpg"],
    );

    let scanner = CatalogScanner::new("/Media");
    let catalog = scanner.scan(temp_dir.path()).unwrap();

    let summary: Vec<(&str, MediaCategory)> = catalog
        .iter()
        .map(|e| (e.name.as_str(), e.category))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("a.PNG", MediaCategory::Image),
            ("b.png", MediaCategory::Image),
            ("c.mp4", MediaCategory::Video),
            ("img2.jpg", MediaCategory::Image),
            ("img10.jpg", MediaCategory::Image),
            ("notes.txt", MediaCategory::Document),
        ]
    );
}

#[test]
fn scan_empty_directory() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = CatalogScanner::default().scan(temp_dir.path()).unwrap();
    assert!(catalog.is_empty());
}

#[test]
fn repeated_scans_of_unchanged_directory_are_identical() {
    let temp_dir = TempDir::new().unwrap();
    populate(&temp_dir, &["x 1.png", "x 10.png", "x 2.png", "Émile.pdf"]);

    let scanner = CatalogScanner::new("/Media");
    let first = scanner.scan(temp_dir.path()).unwrap();
    let second = scanner.scan(temp_dir.path()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn rescan_reflects_directory_changes() {
    let temp_dir = TempDir::new().unwrap();
    populate(&temp_dir, &["one.png"]);
    let scanner = CatalogScanner::new("/Media");

    assert_eq!(scanner.scan(temp_dir.path()).unwrap().len(), 1);

    populate(&temp_dir, &["two.png"]);
    fs::remove_file(temp_dir.path().join("one.png")).unwrap();

    let names: Vec<String> = scanner
        .scan(temp_dir.path())
        .unwrap()
        .into_iter()
        .map(|e| e.name)
        .collect();
    assert_eq!(names, vec!["two.png".to_string()]);
}

#[test]
fn addresses_decode_to_on_disk_names() {
    let temp_dir = TempDir::new().unwrap();
    let names = ["space name.jpg", "hash#tag.mp4", "日本語.txt", "50% off.pdf"];
    populate(&temp_dir, &names);

    let catalog = CatalogScanner::new("/Media").scan(temp_dir.path()).unwrap();
    for entry in &catalog {
        assert_eq!(decode_address("/Media", &entry.url).unwrap(), entry.name);
        assert!(temp_dir.path().join(&entry.name).exists());
    }
}

#[test]
fn subdirectories_follow_policy() {
    let temp_dir = TempDir::new().unwrap();
    populate(&temp_dir, &["clip.mp4"]);
    fs::create_dir(temp_dir.path().join("nested.jpg")).unwrap();
    fs::write(temp_dir.path().join("nested.jpg").join("inner.png"), b"x").unwrap();

    let included = CatalogScanner::new("/Media").scan(temp_dir.path()).unwrap();
    assert_eq!(included.len(), 2);
    let nested = included.iter().find(|e| e.name == "nested.jpg").unwrap();
    assert_eq!(nested.category, MediaCategory::Other);
    assert!(included.iter().all(|e| e.name != "inner.png"));

    let skipped = CatalogScanner::new("/Media")
        .with_directory_policy(DirectoryPolicy::Skip)
        .scan(temp_dir.path())
        .unwrap();
    assert_eq!(skipped.len(), 1);
    assert_eq!(skipped[0].name, "clip.mp4");
}

#[test]
fn missing_directory_is_a_read_error() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("does-not-exist");

    let result = CatalogScanner::default().scan(&missing);
    match result {
        Err(CatalogError::DirectoryRead { path, .. }) => assert_eq!(path, missing),
        other => panic!("Expected DirectoryRead error, got {other:?}"),
    }
}

#[test]
fn file_path_is_not_a_directory() {
    let temp_dir = TempDir::new().unwrap();
    populate(&temp_dir, &["plain.txt"]);

    let result = CatalogScanner::default().scan(temp_dir.path().join("plain.txt"));
    assert!(matches!(result, Err(CatalogError::DirectoryRead { .. })));
}
