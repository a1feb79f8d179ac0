use std::fs;
use tempfile::TempDir;
use tidyfile_core::OpError;
use tidyfile_scan::{ScanOptions, list_directory, scan};

#[test]
fn test_list_directory_sorts_by_name() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    // Created out of order on purpose
    fs::write(root.join("b.txt"), "b").unwrap();
    fs::write(root.join("a.txt"), "a").unwrap();
    fs::write(root.join("c.txt"), "c").unwrap();
    fs::create_dir(root.join("sub")).unwrap();

    let entries = list_directory(root).unwrap();
    let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();

    assert_eq!(names, vec!["a.txt", "b.txt", "c.txt", "sub"]);
}

#[test]
fn test_shallow_by_default_recursive_on_request() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    fs::write(root.join("top.txt"), "top").unwrap();
    fs::create_dir(root.join("sub")).unwrap();
    fs::write(root.join("sub").join("inner.txt"), "inner").unwrap();

    let shallow = list_directory(root).unwrap();
    let names: Vec<&str> = shallow.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["sub", "top.txt"]);

    let deep = scan(root, &ScanOptions::recursive()).unwrap();
    let names: Vec<&str> = deep.iter().map(|e| e.name.as_str()).collect();
    // Parent-first: the directory comes before its contents
    assert_eq!(names, vec!["sub", "inner.txt", "top.txt"]);
}

#[test]
fn test_hidden_filtering_prunes_whole_subtree() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    fs::write(root.join("visible.txt"), "x").unwrap();
    fs::write(root.join(".secret"), "x").unwrap();
    fs::create_dir(root.join(".cache")).unwrap();
    fs::write(root.join(".cache").join("blob.bin"), "x").unwrap();

    // Hidden entries are included by default
    let all = scan(root, &ScanOptions::recursive()).unwrap();
    let names: Vec<&str> = all.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec![".cache", "blob.bin", ".secret", "visible.txt"]);

    // Excluding hidden entries also skips files inside hidden directories
    let options = ScanOptions::builder()
        .include_hidden(false)
        .max_depth(None)
        .build()
        .unwrap();
    let filtered = scan(root, &options).unwrap();
    let names: Vec<&str> = filtered.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["visible.txt"]);
}

#[test]
fn test_entry_fields() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    fs::write(root.join("Report.PDF"), "12345").unwrap();
    fs::create_dir(root.join("archive.d")).unwrap();

    let entries = list_directory(root).unwrap();
    assert_eq!(entries.len(), 2);

    let file = entries.iter().find(|e| e.name == "Report.PDF").unwrap();
    assert!(file.is_file());
    assert_eq!(file.size, 5);
    assert_eq!(file.extension.as_deref(), Some(".pdf"));
    assert!(file.path.ends_with("Report.PDF"));

    let dir = entries.iter().find(|e| e.name == "archive.d").unwrap();
    assert!(dir.is_dir);
    assert_eq!(dir.size, 0);
    assert_eq!(dir.extension, None);
}

#[test]
fn test_missing_root_is_not_found() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("no-such-dir");

    let err = scan(&missing, &ScanOptions::default()).unwrap_err();
    assert!(matches!(err, OpError::NotFound { .. }));
}

#[test]
fn test_root_must_be_a_directory() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("plain.txt");
    fs::write(&file, "not a dir").unwrap();

    let err = scan(&file, &ScanOptions::default()).unwrap_err();
    assert!(matches!(err, OpError::Io { .. }));
}

#[cfg(unix)]
#[test]
fn test_symlinks_skipped_unless_followed() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    fs::write(root.join("target.txt"), "payload").unwrap();
    std::os::unix::fs::symlink(root.join("target.txt"), root.join("link.txt")).unwrap();

    // Unfollowed symlinks are non-regular nodes and get skipped
    let entries = list_directory(root).unwrap();
    let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["target.txt"]);

    // Followed symlinks resolve to their target's metadata
    let options = ScanOptions::builder().follow_symlinks(true).build().unwrap();
    let entries = scan(root, &options).unwrap();
    let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["link.txt", "target.txt"]);

    let link = entries.iter().find(|e| e.name == "link.txt").unwrap();
    assert_eq!(link.size, 7);
}
