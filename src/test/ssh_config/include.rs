use super::{expand_include_pattern, resolve_include_fields, resolve_include_pattern};
use crate::ssh_config::diagnostics::{LoadDiagnostics, LoadEvent, SkipReason};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

fn test_dir(name: &str) -> io::Result<PathBuf> {
    let nanos = SystemTime::now().duration_since(UNIX_EPOCH).expect("clock drift").as_nanos();
    let serial = TEST_COUNTER.fetch_add(1, Ordering::Relaxed);
    let dir = std::env::temp_dir().join(format!("sshm_include_{name}_{nanos}_{serial}"));
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent");
    }
    fs::write(path, "").expect("write file");
}

#[test]
fn relative_patterns_resolve_against_including_directory() {
    let base = Path::new("/etc/ssh");
    let relative = resolve_include_pattern("conf.d/*.conf", base);
    assert_eq!(relative.glob, "/etc/ssh/conf.d/*.conf");
    assert_eq!(relative.path, PathBuf::from("/etc/ssh/conf.d/*.conf"));
    assert!(relative.has_meta);

    let absolute = resolve_include_pattern("/abs/file", base);
    assert_eq!(absolute.glob, "/abs/file");
    assert!(!absolute.has_meta);
}

#[test]
fn glob_expansion_returns_sorted_files_only() {
    let dir = test_dir("sorted").expect("temp dir");
    touch(&dir.join("conf.d/20-b.conf"));
    touch(&dir.join("conf.d/10-a.conf"));
    touch(&dir.join("conf.d/notes.txt"));
    fs::create_dir_all(dir.join("conf.d/99-dir.conf")).expect("create dir");

    let pattern = resolve_include_pattern("conf.d/*.conf", &dir);
    let matched = expand_include_pattern(&pattern).expect("glob matches");
    let names: Vec<String> = matched.iter().map(|path| path.file_name().unwrap().to_string_lossy().to_string()).collect();
    assert_eq!(names, vec!["10-a.conf", "20-b.conf"]);

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn literal_path_matches_when_file_exists() {
    let dir = test_dir("literal").expect("temp dir");
    touch(&dir.join("other.conf"));

    let pattern = resolve_include_pattern("other.conf", &dir);
    assert_eq!(expand_include_pattern(&pattern), Ok(vec![dir.join("other.conf")]));

    let missing = resolve_include_pattern("missing.conf", &dir);
    assert_eq!(expand_include_pattern(&missing), Err(SkipReason::Missing));

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn unmatched_glob_and_bad_pattern_are_reported_not_fatal() {
    let dir = test_dir("unmatched").expect("temp dir");
    let mut diagnostics = LoadDiagnostics::new();
    let fields = vec!["nothing/*.conf".to_string(), "[unclosed".to_string(), "gone.conf".to_string()];

    let resolved = resolve_include_fields(&fields, &dir, &mut diagnostics);
    assert!(resolved.is_empty());

    let reasons: Vec<&SkipReason> = diagnostics.skipped_includes().map(|(_, reason)| reason).collect();
    assert_eq!(reasons.len(), 3);
    assert_eq!(reasons[0], &SkipReason::NoMatch);
    assert!(matches!(reasons[1], SkipReason::InvalidPattern(_)));
    assert_eq!(reasons[2], &SkipReason::Missing);
    assert!(diagnostics.events.iter().all(|event| matches!(event, LoadEvent::IncludeSkipped { .. })));

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn multiple_patterns_on_one_line_keep_their_order() {
    let dir = test_dir("multi").expect("temp dir");
    touch(&dir.join("z.conf"));
    touch(&dir.join("a.conf"));

    let mut diagnostics = LoadDiagnostics::new();
    let fields = vec!["z.conf".to_string(), "a.conf".to_string()];
    let resolved = resolve_include_fields(&fields, &dir, &mut diagnostics);
    assert_eq!(resolved, vec![dir.join("z.conf"), dir.join("a.conf")]);
    assert!(diagnostics.events.is_empty());

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn glob_characters_in_the_including_directory_are_literal() {
    let dir = test_dir("bracket").expect("temp dir").join("team[1]");
    touch(&dir.join("other.conf"));
    touch(&dir.join("conf.d/a.conf"));

    let mut diagnostics = LoadDiagnostics::new();
    let fields = vec!["other.conf".to_string(), "conf.d/*.conf".to_string()];
    let resolved = resolve_include_fields(&fields, &dir, &mut diagnostics);
    assert_eq!(resolved, vec![dir.join("other.conf"), dir.join("conf.d/a.conf")]);
    assert!(diagnostics.events.is_empty());

    let pattern = resolve_include_pattern("other.conf", &dir);
    assert!(!pattern.has_meta);
    assert!(pattern.glob.contains("team[[]1[]]"));

    let _ = fs::remove_dir_all(dir.parent().expect("test root"));
}
