//! SSH config file parser and include traversal.
//!
//! Files are walked with an explicit stack instead of recursion. When a file
//! hits an `Include`, its reader is parked on the stack underneath the included
//! files, so the included hosts are produced before the rest of the including
//! file (depth-first at the point of the directive).

use super::diagnostics::{LoadDiagnostics, LoadEvent, SkipReason};
use super::errors::SshConfigError;
use super::include::resolve_include_fields;
use super::model::HostEntry;
use super::scanner::{ScannedLine, scan_line};
use super::values::{parse_bool, parse_int};
use crate::log_debug;
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Cursor};
use std::mem;
use std::path::{Path, PathBuf};

/// Host block state for a single file.
#[derive(Debug, Default)]
enum EntryState {
    #[default]
    NoOpenEntry,
    BuildingEntry { seq: usize, entry: HostEntry },
}

impl EntryState {
    /// Flush the open entry and start a new one for `patterns`.
    fn open(&mut self, patterns: Vec<String>, collector: &mut EntryCollector) {
        self.flush(collector);
        *self = EntryState::BuildingEntry {
            seq: collector.reserve(),
            entry: HostEntry::new(patterns),
        };
    }

    fn flush(&mut self, collector: &mut EntryCollector) {
        if let EntryState::BuildingEntry { seq, entry } = mem::take(self) {
            collector.finished.push((seq, entry));
        }
    }

    fn current_mut(&mut self) -> Option<&mut HostEntry> {
        match self {
            EntryState::NoOpenEntry => None,
            EntryState::BuildingEntry { entry, .. } => Some(entry),
        }
    }
}

/// Entries finished across all files, tagged with the order their `Host` line was seen.
#[derive(Debug, Default)]
struct EntryCollector {
    next_seq: usize,
    finished: Vec<(usize, HostEntry)>,
}

impl EntryCollector {
    fn reserve(&mut self) -> usize {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    fn into_entries(mut self) -> Vec<HostEntry> {
        self.finished.sort_unstable_by_key(|(seq, _)| *seq);
        self.finished.into_iter().map(|(_, entry)| entry).collect()
    }
}

struct FileFrame {
    path: PathBuf,
    /// Directory used to resolve relative includes; `None` disables includes.
    base_dir: Option<PathBuf>,
    reader: Box<dyn BufRead>,
    buf: Vec<u8>,
    state: EntryState,
}

impl FileFrame {
    fn new(path: PathBuf, base_dir: Option<PathBuf>, reader: Box<dyn BufRead>) -> Self {
        Self {
            path,
            base_dir,
            reader,
            buf: Vec::new(),
            state: EntryState::NoOpenEntry,
        }
    }

    /// Read the next line without its terminator. Bytes that are not UTF-8 are replaced.
    fn next_line(&mut self) -> io::Result<Option<String>> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        if self.buf.ends_with(b"\n") {
            self.buf.pop();
            if self.buf.ends_with(b"\r") {
                self.buf.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&self.buf).into_owned()))
    }
}

enum Work {
    Visit(PathBuf),
    Resume(FileFrame),
}

enum FrameStep {
    Include(Vec<PathBuf>),
    Finished,
}

/// Load `config_path` and every file it includes.
pub(super) fn load_tree(config_path: &Path, diagnostics: &mut LoadDiagnostics) -> Result<Vec<HostEntry>, SshConfigError> {
    let canonical = config_path.canonicalize().map_err(|err| root_open_error(config_path, err))?;
    let file = File::open(&canonical).map_err(|err| root_open_error(config_path, err))?;

    let mut visited = HashSet::new();
    visited.insert(canonical.clone());
    diagnostics.visited_files.push(canonical.clone());

    let base_dir = canonical.parent().map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from("."));
    let root = FileFrame::new(canonical, Some(base_dir), Box::new(BufReader::new(file)));

    let mut collector = EntryCollector::default();
    let mut stack = vec![Work::Resume(root)];

    while let Some(work) = stack.pop() {
        let mut frame = match work {
            Work::Resume(frame) => frame,
            Work::Visit(path) => match open_included(&path, &mut visited, diagnostics)? {
                Some(frame) => frame,
                None => continue,
            },
        };

        match scan_frame(&mut frame, &mut collector, diagnostics)? {
            FrameStep::Include(paths) => {
                stack.push(Work::Resume(frame));
                stack.extend(paths.into_iter().rev().map(Work::Visit));
            }
            FrameStep::Finished => frame.state.flush(&mut collector),
        }
    }

    Ok(collector.into_entries())
}

/// Parse in-memory config text. `Include` lines are ignored.
pub fn parse_config_str(contents: &str) -> Vec<HostEntry> {
    let reader: Box<dyn BufRead> = Box::new(Cursor::new(contents.to_string()));
    let mut frame = FileFrame::new(PathBuf::from("<memory>"), None, reader);
    let mut collector = EntryCollector::default();
    let mut diagnostics = LoadDiagnostics::new();

    // Reading from memory cannot fail and includes are disabled, so this only finishes.
    if let Ok(FrameStep::Finished) = scan_frame(&mut frame, &mut collector, &mut diagnostics) {
        frame.state.flush(&mut collector);
    }
    collector.into_entries()
}

fn root_open_error(path: &Path, err: io::Error) -> SshConfigError {
    // A path through a regular file (ENOTDIR) is as absent as a missing one.
    if err.kind() == io::ErrorKind::NotFound || !path.exists() {
        SshConfigError::NotFound(path.to_path_buf())
    } else {
        SshConfigError::Open {
            path: path.to_path_buf(),
            source: err,
        }
    }
}

/// Open an included file unless it was already read during this load.
fn open_included(path: &Path, visited: &mut HashSet<PathBuf>, diagnostics: &mut LoadDiagnostics) -> Result<Option<FileFrame>, SshConfigError> {
    let Ok(canonical) = path.canonicalize() else {
        diagnostics.push(LoadEvent::IncludeSkipped {
            pattern: path.to_string_lossy().to_string(),
            reason: SkipReason::Missing,
        });
        return Ok(None);
    };

    if !visited.insert(canonical.clone()) {
        log_debug!("Skipping already visited SSH include file (possible include cycle): {}", canonical.display());
        diagnostics.push(LoadEvent::AlreadyVisited(canonical));
        return Ok(None);
    }

    let file = match File::open(&canonical) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            diagnostics.push(LoadEvent::IncludeSkipped {
                pattern: canonical.to_string_lossy().to_string(),
                reason: SkipReason::Missing,
            });
            return Ok(None);
        }
        Err(err) => {
            return Err(SshConfigError::Open {
                path: canonical,
                source: err,
            });
        }
    };

    log_debug!("Reading SSH include file: {}", canonical.display());
    diagnostics.visited_files.push(canonical.clone());
    let base_dir = canonical.parent().map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from("."));
    Ok(Some(FileFrame::new(canonical, Some(base_dir), Box::new(BufReader::new(file)))))
}

/// Consume lines until the file ends or an `Include` yields files to descend into.
fn scan_frame(frame: &mut FileFrame, collector: &mut EntryCollector, diagnostics: &mut LoadDiagnostics) -> Result<FrameStep, SshConfigError> {
    while let Some(line) = frame.next_line().map_err(|err| SshConfigError::Scan {
        path: frame.path.clone(),
        source: err,
    })? {

        let ScannedLine::Directive { keyword, fields } = scan_line(&line) else {
            continue;
        };

        match keyword.as_str() {
            "include" => {
                let Some(base_dir) = frame.base_dir.as_deref() else {
                    continue;
                };
                let paths = resolve_include_fields(&fields, base_dir, diagnostics);
                if !paths.is_empty() {
                    return Ok(FrameStep::Include(paths));
                }
            }
            "host" => frame.state.open(fields, collector),
            _ => {
                if let Some(entry) = frame.state.current_mut() {
                    apply_directive(entry, &keyword, &fields);
                }
            }
        }
    }

    Ok(FrameStep::Finished)
}

/// Set the field named by `keyword`. Unknown keywords and unparseable typed values are dropped.
fn apply_directive(entry: &mut HostEntry, keyword: &str, fields: &[String]) {
    let value = ScannedLine::value(fields);
    match keyword {
        "hostname" => entry.host_name = Some(value),
        "user" => entry.user = Some(value),
        "port" => entry.port = Some(value),
        "identityfile" => entry.identity_file = Some(value),
        "proxyjump" => entry.proxy_jump = Some(value),
        "serveraliveinterval" => set_parsed(&mut entry.server_alive_interval, parse_int(&value)),
        "serveralivecountmax" => set_parsed(&mut entry.server_alive_count_max, parse_int(&value)),
        "forwardagent" => set_parsed(&mut entry.forward_agent, parse_bool(&value)),
        "identitiesonly" => set_parsed(&mut entry.identities_only, parse_bool(&value)),
        _ => {}
    }
}

fn set_parsed<T>(field: &mut Option<T>, parsed: Option<T>) {
    if parsed.is_some() {
        *field = parsed;
    }
}

#[cfg(test)]
#[path = "../test/ssh_config/parser.rs"]
mod tests;
