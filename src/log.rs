use std::{fmt::Display, fs::OpenOptions, path::Path};

use anyhow::{anyhow, Context};
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;

use crate::event::EventMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogId(usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogEntry {
    Initialized {
        names: usize,
        tokens: usize,
    },
    Applied {
        effect: &'static str,
        before: usize,
        after: usize,
    },
    Skipped {
        effect: &'static str,
    },
}

impl Display for LogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogEntry::Initialized { names, tokens } => {
                write!(f, "Start: {tokens} tokens across {names} types")
            }
            LogEntry::Applied {
                effect,
                before,
                after,
            } => write!(f, "{effect}: {before} -> {after} tokens"),
            LogEntry::Skipped { effect } => write!(f, "{effect}: no change"),
        }
    }
}

/// The state of an event at each stage boundary of its resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Log {
    pub entries: Vec<(LogId, LogEntry)>,

    current_id: usize,
}

impl Log {
    pub(crate) fn initialized(&mut self, event: &EventMap) {
        self.push(LogEntry::Initialized {
            names: event.len(),
            tokens: event.total(),
        });
    }

    pub(crate) fn applied(&mut self, effect: &'static str, before: usize, after: usize) {
        self.push(LogEntry::Applied {
            effect,
            before,
            after,
        });
    }

    pub(crate) fn skipped(&mut self, effect: &'static str) {
        self.push(LogEntry::Skipped { effect });
    }

    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().map(|(_, entry)| entry)
    }

    fn push(&mut self, entry: LogEntry) {
        event!(Level::DEBUG, ?entry);
        self.current_id += 1;
        self.entries.push((LogId(self.current_id), entry));
    }
}

/// Sends tracing output to `path`, truncating it first.
///
/// Logging stops once the returned guard is dropped.
pub fn init_file_logging(path: impl AsRef<Path>) -> anyhow::Result<WorkerGuard> {
    let path = path.as_ref();
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .with_context(|| format!("Opening log file: {}", path.display()))?;

    let (writer, guard) = tracing_appender::non_blocking(file);
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_line_number(true)
        .with_file(true)
        .with_target(false)
        .with_writer(writer)
        .try_init()
        .map_err(|e| anyhow!(e.to_string()))?;

    Ok(guard)
}
