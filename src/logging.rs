use std::fmt::{self, Display};

/// Severity of a log record, ordered from most to least verbose.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Error,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Error => "ERROR",
        }
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Writes `<level>: <message>` records to stderr, dropping anything below
/// the threshold.
#[derive(Clone, Copy, Debug)]
pub struct Logger {
    threshold: Level,
}

impl Logger {
    pub fn new(verbose: bool) -> Self {
        let threshold = if verbose { Level::Debug } else { Level::Info };
        Self { threshold }
    }

    pub fn debug(&self, message: impl Display) {
        self.log(Level::Debug, message);
    }

    pub fn error(&self, message: impl Display) {
        self.log(Level::Error, message);
    }

    pub fn enabled(&self, level: Level) -> bool {
        level >= self.threshold
    }

    pub fn threshold(&self) -> Level {
        self.threshold
    }

    fn log(&self, level: Level, message: impl Display) {
        if self.enabled(level) {
            eprintln!("{}", format_record(level, message));
        }
    }
}

/// Level name right-aligned to seven columns, then the message.
pub fn format_record(level: Level, message: impl Display) -> String {
    format!("{:>7}: {message}", level.as_str())
}
