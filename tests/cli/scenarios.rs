use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use pocdedup::collect::collect_pocs;
use pocdedup::error::DedupError;
use pocdedup::resolve::SharedFilePolicy;
use pocdedup::tooling::cli::RunRequest;
use tempfile::TempDir;

use crate::cli::support::{context, text_request, write_poc};

#[test]
fn newer_file_is_kept_and_older_deleted() {
    let temp = TempDir::new().unwrap();
    let a = write_poc(temp.path(), "a.yaml", "name: A\npath: p1\n", 2_000);
    let b = write_poc(temp.path(), "b.yaml", "name: B\npath: p1\n", 1_000);

    let report = context(temp.path()).execute(&text_request()).unwrap();
    assert!(report.starts_with("Detected 1 duplicated path groups:\n"));
    assert!(report.contains("\nPath: p1\n"));
    assert!(report.contains(&format!("  * keep: {}\n", a.display())));
    assert!(report.contains("Run again with --delete"));
    assert!(b.exists(), "report-only run must not delete");

    let request = RunRequest {
        delete: true,
        ..text_request()
    };
    let output = context(temp.path()).execute(&request).unwrap();
    assert!(output.contains("Duplicate files deleted"));
    assert!(a.exists());
    assert!(!b.exists());

    let rerun = context(temp.path()).execute(&request).unwrap();
    assert_eq!(rerun, "No duplicate PoCs detected based on path.\n");
}

#[test]
fn literally_repeated_path_counts_once() {
    let temp = TempDir::new().unwrap();
    write_poc(temp.path(), "twice.yaml", "path: p1\nname: twice\npath: p1\n", 1);

    let collection = collect_pocs(temp.path()).unwrap();
    assert_eq!(collection.records.len(), 1);
    assert_eq!(collection.records[0].identifier, "p1");

    let output = context(temp.path()).execute(&text_request()).unwrap();
    assert_eq!(output, "No duplicate PoCs detected based on path.\n");
}

#[test]
fn file_without_path_is_skipped_and_run_succeeds() {
    let temp = TempDir::new().unwrap();
    write_poc(temp.path(), "missing.yaml", "name: no target\n", 1);
    write_poc(temp.path(), "one.yaml", "path: /one\n", 1);
    write_poc(temp.path(), "two.yaml", "path: /one\n", 2);

    let collection = collect_pocs(temp.path()).unwrap();
    assert_eq!(collection.skipped.len(), 1);
    assert!(collection.skipped[0].path.ends_with("missing.yaml"));

    let output = context(temp.path()).execute(&text_request()).unwrap();
    assert!(output.contains("Path: /one"));
}

#[test]
fn export_mirrors_layout_under_output_root() {
    let scan = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write_poc(scan.path(), "sub/x.yaml", "path: /x\n", 10);
    write_poc(scan.path(), "y.yaml", "path: /y\n", 10);

    let request = RunRequest {
        out: Some(out.path().join("b")),
        ..text_request()
    };
    let output = context(scan.path()).execute(&request).unwrap();
    assert!(output.contains("No duplicate PoCs detected based on path."));
    assert!(output.contains("Deduplicated PoCs copied to"));

    let exported = out.path().join("b");
    assert_eq!(
        fs::read_to_string(exported.join("sub/x.yaml")).unwrap(),
        "path: /x\n"
    );
    assert!(exported.join("y.yaml").is_file());

    // re-running overwrites in place
    context(scan.path()).execute(&request).unwrap();
    assert!(exported.join("sub/x.yaml").is_file());
}

#[test]
fn shared_file_is_deleted_once_across_groups() {
    let temp = TempDir::new().unwrap();
    let keep1 = write_poc(temp.path(), "keep1.yaml", "path: p1\n", 300);
    let keep2 = write_poc(temp.path(), "keep2.yaml", "path: p2\n", 300);
    let stale = write_poc(
        temp.path(),
        "stale.yaml",
        "requests:\n  - path: p1\n  - method: GET\n    path: p2\n",
        100,
    );

    let request = RunRequest {
        delete: true,
        ..text_request()
    };
    context(temp.path()).execute(&request).unwrap();
    assert!(keep1.exists());
    assert!(keep2.exists());
    assert!(!stale.exists());
}

#[test]
fn protect_kept_keeps_cross_group_winner() {
    let temp = TempDir::new().unwrap();
    let shared = write_poc(temp.path(), "shared.yaml", "- path: p1\n- path: p2\n", 200);
    write_poc(temp.path(), "p1_newest.yaml", "path: p1\n", 300);
    let p2_old = write_poc(temp.path(), "p2_old.yaml", "path: p2\n", 100);
    let out = TempDir::new().unwrap();

    let request = RunRequest {
        delete: true,
        out: Some(out.path().to_path_buf()),
        policy: SharedFilePolicy::ProtectKept,
        ..text_request()
    };
    context(temp.path()).execute(&request).unwrap();
    assert!(shared.exists());
    assert!(!p2_old.exists());
    assert!(out.path().join("shared.yaml").is_file());
    assert!(out.path().join("p1_newest.yaml").is_file());
}

#[test]
fn empty_tree_reports_no_files() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("readme.md"), "path: not a poc").unwrap();

    let output = context(temp.path()).execute(&text_request()).unwrap();
    assert_eq!(output, "No PoC files found.\n");
}

#[test]
fn unreadable_root_is_fatal() {
    let temp = TempDir::new().unwrap();
    let err = context(&temp.path().join("missing"))
        .execute(&text_request())
        .unwrap_err();
    assert!(matches!(err, DedupError::Traversal { .. }));
}

#[test]
fn differently_spelled_numbers_are_different_paths() {
    let temp = TempDir::new().unwrap();
    let pairs = [("1.10", "1.1"), ("0x1F", "31"), ("True", "true")];
    for (index, (first, second)) in pairs.iter().enumerate() {
        write_poc(temp.path(), &format!("{}a.yaml", index), &format!("path: {}\n", first), 2);
        write_poc(temp.path(), &format!("{}b.yaml", index), &format!("path: {}\n", second), 1);
    }

    let request = RunRequest {
        delete: true,
        ..text_request()
    };
    let output = context(temp.path()).execute(&request).unwrap();
    assert_eq!(output, "No duplicate PoCs detected based on path.\n");
    for index in 0..pairs.len() {
        assert!(temp.path().join(format!("{}a.yaml", index)).exists());
        assert!(temp.path().join(format!("{}b.yaml", index)).exists());
    }
}

/// Stdout stand-in that removes a file as soon as the first line of output arrives.
struct RemoveOnFirstWrite {
    target: Option<PathBuf>,
    written: Vec<u8>,
}

impl Write for RemoveOnFirstWrite {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Some(target) = self.target.take() {
            fs::remove_file(target)?;
        }
        self.written.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn report_is_written_before_a_failed_deletion() {
    let temp = TempDir::new().unwrap();
    let keep = write_poc(temp.path(), "a.yaml", "name: A\npath: p1\n", 2_000);
    let stale = write_poc(temp.path(), "b.yaml", "name: B\npath: p1\n", 1_000);

    let mut out = RemoveOnFirstWrite {
        target: Some(stale.clone()),
        written: Vec::new(),
    };
    let request = RunRequest {
        delete: true,
        ..text_request()
    };
    let err = context(temp.path())
        .execute_to(&request, &mut out)
        .unwrap_err();

    assert!(matches!(err, DedupError::Deletion { ref path, .. } if *path == stale));
    let written = String::from_utf8(out.written).unwrap();
    assert!(written.starts_with("Detected 1 duplicated path groups:\n"));
    assert!(written.contains(&format!("  * keep: {}\n", keep.display())));
    assert!(!written.contains("Duplicate files deleted"));
    assert!(keep.exists());
}
