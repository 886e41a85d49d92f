use std::fs::{self, OpenOptions};
use std::sync::{Mutex, Once};

use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Where log lines go for a given way of running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LogTarget {
    /// Interactive mode: a file in the data directory, never the terminal.
    File,
    /// One-shot commands: stderr.
    Stderr,
}

impl LogTarget {
    /// Pick the target from the arguments left after settings are parsed:
    /// none means the interactive UI.
    pub(crate) fn for_args(rest: &[String]) -> Self {
        if rest.is_empty() {
            Self::File
        } else {
            Self::Stderr
        }
    }

    fn default_directive(self) -> &'static str {
        match self {
            Self::File => "budgetledger=info",
            Self::Stderr => "budgetledger=warn",
        }
    }
}

pub(crate) fn init(target: LogTarget) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(target.default_directive()));

        match target {
            LogTarget::Stderr => {
                let _ = fmt()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .try_init();
            }
            LogTarget::File => {
                // No usable data directory means no log file; the UI still runs.
                let Some(file) = open_log_file() else {
                    return;
                };
                let _ = fmt()
                    .with_env_filter(filter)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file))
                    .try_init();
            }
        }
        tracing::debug!(?target, "logging initialized");
    });
}

fn open_log_file() -> Option<fs::File> {
    let dirs = directories::ProjectDirs::from("", "", "budgetledger")?;
    let dir = dirs.data_local_dir();
    fs::create_dir_all(dir).ok()?;
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("budgetledger.log"))
        .ok()
}
