use std::fs;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tempfile::TempDir;
use tidyfile_core::Operation;
use tidyfile_ops::{
    BatchRunner, CANCELLED_MESSAGE, copy_path, copy_recursive, create_file, create_folder,
    delete_path, execute, move_path, rename_path, run_batch,
};

#[test]
fn test_report_counts_and_order() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    let ops = vec![
        Operation::create_folder(root.join("a")),
        Operation::delete(root.join("does-not-exist")),
        Operation::create_file(root.join("a").join("note.txt"), "hi"),
    ];
    let report = run_batch(ops.clone());

    assert_eq!(report.total, 3);
    assert_eq!(report.successful, 2);
    assert_eq!(report.failed, 1);
    assert_eq!(report.successful + report.failed, report.total);

    // Results come back in input order
    for (result, op) in report.results.iter().zip(&ops) {
        assert_eq!(&result.operation, op);
    }
    assert!(report.results[0].success);
    assert!(!report.results[1].success);
    assert!(report.results[2].success);
}

#[test]
fn test_failure_does_not_stop_the_batch() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::write(root.join("real.txt"), "x").unwrap();

    // Failing operation first
    let report = run_batch(vec![
        Operation::delete(root.join("missing.txt")),
        Operation::copy(root.join("real.txt"), root.join("copy1.txt")),
    ]);
    assert!(!report.results[0].success);
    assert!(report.results[1].success);
    assert!(root.join("copy1.txt").exists());

    // Failing operation second
    let report = run_batch(vec![
        Operation::copy(root.join("real.txt"), root.join("copy2.txt")),
        Operation::delete(root.join("missing.txt")),
    ]);
    assert!(report.results[0].success);
    assert!(!report.results[1].success);
    assert!(root.join("copy2.txt").exists());
}

#[test]
fn test_copy_directory_tree() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    // source/
    //   top.txt
    //   nested/
    //     deep/
    //       leaf.txt
    let source = root.join("source");
    fs::create_dir_all(source.join("nested").join("deep")).unwrap();
    fs::write(source.join("top.txt"), "top content").unwrap();
    fs::write(
        source.join("nested").join("deep").join("leaf.txt"),
        "leaf content",
    )
    .unwrap();

    let dest = root.join("dest");
    let result = execute(Operation::copy(&source, &dest));
    assert!(result.success, "copy failed: {:?}", result.error);

    // Destination mirrors the source tree and contents
    assert_eq!(fs::read_to_string(dest.join("top.txt")).unwrap(), "top content");
    assert_eq!(
        fs::read_to_string(dest.join("nested").join("deep").join("leaf.txt")).unwrap(),
        "leaf content"
    );

    // Source is untouched
    assert_eq!(
        fs::read_to_string(source.join("top.txt")).unwrap(),
        "top content"
    );
    assert!(source.join("nested").join("deep").join("leaf.txt").exists());
}

#[cfg(unix)]
#[test]
fn test_copy_skips_symlinks() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    let source = root.join("source");
    fs::create_dir(&source).unwrap();
    fs::write(source.join("real.txt"), "payload").unwrap();
    std::os::unix::fs::symlink(source.join("real.txt"), source.join("link.txt")).unwrap();

    let dest = root.join("dest");
    let result = execute(Operation::copy(&source, &dest));
    assert!(result.success, "copy failed: {:?}", result.error);

    // Regular contents arrive, the symlink does not, and the source keeps it
    assert_eq!(fs::read_to_string(dest.join("real.txt")).unwrap(), "payload");
    assert!(dest.join("link.txt").symlink_metadata().is_err());
    assert!(source.join("link.txt").symlink_metadata().is_ok());

    // The byte count covers regular files only
    let bytes = copy_recursive(&source, &root.join("dest2")).unwrap();
    assert_eq!(bytes, "payload".len() as u64);
}

#[test]
fn test_delete_directory_tree() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    let target = root.join("target");
    fs::create_dir_all(target.join("a").join("b")).unwrap();
    fs::write(target.join("a").join("file1.txt"), "1").unwrap();
    fs::write(target.join("a").join("b").join("file2.txt"), "2").unwrap();

    // A non-empty directory deletes fine because children go first
    let result = execute(Operation::delete(&target));
    assert!(result.success, "delete failed: {:?}", result.error);
    assert!(!target.exists());
}

#[test]
fn test_create_folder_is_idempotent() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("deeply").join("nested").join("dir");

    let first = execute(Operation::create_folder(&path));
    let second = execute(Operation::create_folder(&path));

    assert!(first.success);
    assert!(second.success);
    assert!(path.is_dir());
}

#[test]
fn test_create_file_truncates_and_creates_parents() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("new-dir").join("note.txt");

    let result = execute(Operation::create_file(&path, "first version"));
    assert!(result.success);
    assert_eq!(fs::read_to_string(&path).unwrap(), "first version");

    // Writing again replaces the content entirely
    let result = execute(Operation::create_file(&path, "v2"));
    assert!(result.success);
    assert_eq!(fs::read_to_string(&path).unwrap(), "v2");
}

#[test]
fn test_move_file_and_directory() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    fs::write(root.join("file.txt"), "payload").unwrap();
    let result = execute(Operation::move_to(
        root.join("file.txt"),
        root.join("moved.txt"),
    ));
    assert!(result.success);
    assert!(!root.join("file.txt").exists());
    assert_eq!(fs::read_to_string(root.join("moved.txt")).unwrap(), "payload");

    let dir = root.join("dir");
    fs::create_dir(&dir).unwrap();
    fs::write(dir.join("inner.txt"), "inner").unwrap();
    let result = execute(Operation::move_to(&dir, root.join("relocated")));
    assert!(result.success);
    assert!(!dir.exists());
    assert_eq!(
        fs::read_to_string(root.join("relocated").join("inner.txt")).unwrap(),
        "inner"
    );
}

#[test]
fn test_move_into_own_subtree_fails_cleanly() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("dir");
    fs::create_dir(&dir).unwrap();
    fs::write(dir.join("keep.txt"), "keep").unwrap();

    let result = execute(Operation::move_to(&dir, dir.join("sub")));

    assert!(!result.success);
    assert!(dir.join("keep.txt").exists());
}

#[test]
fn test_rename() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::write(root.join("draft.txt"), "text").unwrap();

    let result = execute(Operation::rename(
        root.join("draft.txt"),
        root.join("final.txt"),
    ));
    assert!(result.success);
    assert!(!root.join("draft.txt").exists());
    assert!(root.join("final.txt").exists());
}

#[test]
fn test_end_to_end_scenario() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    let x = root.join("x");
    let y = root.join("y");

    let report = run_batch(vec![
        Operation::create_folder(&x),
        Operation::create_file(x.join("a.txt"), "hello"),
        Operation::copy(&x, &y),
        Operation::delete(&x),
    ]);

    assert_eq!(report.total, 4);
    assert_eq!(report.successful, 4);
    assert_eq!(report.failed, 0);
    assert!(report.is_success());

    assert!(!x.exists());
    assert_eq!(fs::read_to_string(y.join("a.txt")).unwrap(), "hello");
}

#[test]
fn test_missing_source_reports_not_found() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nope.txt");

    let result = execute(Operation::delete(&missing));
    assert!(!result.success);
    let message = result.error.unwrap();
    assert!(message.contains("not found"), "unexpected error: {message}");
}

#[test]
fn test_all_failures_still_produce_a_report() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    let report = run_batch(vec![
        Operation::delete(root.join("ghost1")),
        Operation::delete(root.join("ghost2")),
        Operation::move_to(root.join("ghost3"), root.join("anywhere")),
    ]);

    assert_eq!(report.total, 3);
    assert_eq!(report.successful, 0);
    assert_eq!(report.failed, 3);
    assert!(report.results.iter().all(|r| r.error.is_some()));
}

#[test]
fn test_cancel_flag_records_remaining_operations() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    let cancel = Arc::new(AtomicBool::new(false));
    cancel.store(true, Ordering::Relaxed);

    let runner = BatchRunner::with_cancel_flag(cancel);
    let report = runner.run(vec![
        Operation::create_folder(root.join("never-made")),
        Operation::create_file(root.join("never-made").join("x.txt"), ""),
    ]);

    // Nothing ran, but the report still accounts for every operation
    assert_eq!(report.total, 2);
    assert_eq!(report.successful, 0);
    assert_eq!(report.failed, 2);
    assert!(!root.join("never-made").exists());
    for result in &report.results {
        assert_eq!(result.error.as_deref(), Some(CANCELLED_MESSAGE));
    }
}

#[test]
fn test_single_call_variants() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    assert!(create_folder(root.join("f")).success);
    assert!(create_file(root.join("f").join("a.txt"), "a").success);
    assert!(copy_path(root.join("f").join("a.txt"), root.join("f").join("b.txt")).success);
    assert!(rename_path(root.join("f").join("b.txt"), root.join("f").join("c.txt")).success);
    assert!(move_path(root.join("f").join("c.txt"), root.join("d.txt")).success);
    assert!(delete_path(root.join("d.txt")).success);

    // Failures surface as records, not panics
    let result = delete_path(root.join("not-there"));
    assert!(!result.success);
    assert!(result.error.is_some());
}
