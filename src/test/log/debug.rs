use super::{DebugLogger, create_private_directory, open_private_append_file};
use crate::log::LogLevel;
use std::{
    fs,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

fn temp_path(prefix: &str) -> PathBuf {
    let unique = SystemTime::now().duration_since(UNIX_EPOCH).expect("clock should be after epoch").as_nanos();
    std::env::temp_dir().join(format!("sshm-log-debug-{prefix}-{unique}"))
}

#[test]
fn writes_formatted_lines_to_log_file() {
    let root = temp_path("write");
    let log_path = root.join("logs").join("sshm.log");
    let logger = DebugLogger::with_path(log_path.clone());

    logger.log(LogLevel::Debug, "first").expect("write first line");
    logger.log(LogLevel::Error, "second").expect("write second line");
    logger.flush().expect("flush");

    let contents = fs::read_to_string(&log_path).expect("read log");
    assert_eq!(contents, "[DEBUG] first\n[ERROR] second\n");

    let _ = fs::remove_dir_all(root);
}

#[cfg(unix)]
#[test]
fn private_directory_and_file_permissions_are_restrictive() {
    let root = temp_path("permissions");
    let log_dir = root.join("logs");
    let log_path = log_dir.join("sshm.log");

    create_private_directory(&log_dir).expect("create private log directory");
    let _file = open_private_append_file(&log_path).expect("create private log file");

    let dir_mode = fs::metadata(&log_dir).expect("directory metadata").permissions().mode() & 0o777;
    let file_mode = fs::metadata(&log_path).expect("file metadata").permissions().mode() & 0o777;

    assert_eq!(dir_mode, 0o700);
    assert_eq!(file_mode, 0o600);

    let _ = fs::remove_dir_all(root);
}
