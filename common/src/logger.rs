use chrono::Local;
use colored::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
    Error,
}

/// Per-component console logger. Every line carries a timestamp, the level and
/// the upper-cased component name.
#[derive(Debug, Clone)]
pub struct Logger {
    pub name: String,
    pub info_color: Color,
}

impl Logger {
    pub fn new(name: impl Into<String>, info_color: Color) -> Self {
        Self {
            name: name.into().to_uppercase(),
            info_color,
        }
    }

    fn timestamp() -> String {
        Local::now().format("%H:%M:%S").to_string()
    }

    fn header(&self, level: Level) -> ColoredString {
        let tag = match level {
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        };
        let header = format!("[{}][{}][{}]", Self::timestamp(), tag, self.name).bold();
        match level {
            Level::Info => header.color(self.info_color),
            Level::Warn => header.yellow(),
            Level::Error => header.bright_red(),
        }
    }

    pub fn log(&self, level: Level, msg: impl AsRef<str>) {
        let line = format!("{} {} {}", self.header(level), "→".dimmed(), msg.as_ref());
        if level == Level::Error {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }
    }

    pub fn info(&self, msg: impl AsRef<str>) {
        self.log(Level::Info, msg);
    }

    pub fn warn(&self, msg: impl AsRef<str>) {
        self.log(Level::Warn, msg);
    }

    pub fn error(&self, msg: impl AsRef<str>) {
        self.log(Level::Error, msg);
    }
}
