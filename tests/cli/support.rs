use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, UNIX_EPOCH};

use pocdedup::config::DedupConfig;
use pocdedup::tooling::cli::{CliContext, RunRequest};

/// Write a PoC below `root` and pin its modification time.
pub fn write_poc(root: &Path, relative: &str, content: &str, mtime_secs: u64) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    fs::File::options()
        .write(true)
        .open(&path)
        .unwrap()
        .set_modified(UNIX_EPOCH + Duration::from_secs(mtime_secs))
        .unwrap();
    path
}

/// Context with default configuration, independent of the caller's environment files.
pub fn context(root: &Path) -> CliContext {
    CliContext::with_config(root.to_path_buf(), DedupConfig::default())
}

pub fn text_request() -> RunRequest {
    RunRequest {
        format: Some("text".to_string()),
        ..RunRequest::default()
    }
}

pub fn json_request() -> RunRequest {
    RunRequest {
        format: Some("json".to_string()),
        ..RunRequest::default()
    }
}
