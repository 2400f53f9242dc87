//! # Chat Log
//!
//! File: cli/src/bot/chat_log.rs
//!
//! ## Overview
//!
//! Durable, append-only record of every exchange, kept as a CSV file that a
//! spreadsheet or a text editor can open:
//!
//! ```csv
//! User Input,Chatbot Response,Timestamp
//! hello,Hey!,2024-05-01 09:30:12
//! "hi, bot","Hello, human!",2024-05-01 09:31:40
//! ```
//!
//! ## Behaviour
//!
//! - `append` opens the file for appending (creating it and its directory when
//!   needed), writes the header if the file is empty, writes one row and
//!   flushes. The handle is dropped on every path, including write failures.
//! - `read_all` returns the rows after the header in file order. A missing,
//!   empty or header-only file is simply an empty history.
//!
//! There is no locking: one writer at a time is assumed. Two processes
//! appending to the same file can interleave rows.
//!
use crate::common::fs::io;
use crate::core::error::{ChatbotError, Result};
use anyhow::anyhow;
use chrono::NaiveDateTime;
use csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const HEADER: [&str; 3] = ["User Input", "Chatbot Response", "Timestamp"];
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One recorded exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTurn {
    pub user_text: String,
    pub response_text: String,
    /// `YYYY-MM-DD HH:MM:SS`, as written.
    pub timestamp: String,
}

impl ChatTurn {
    fn from_record(record: &StringRecord) -> Self {
        let field = |i: usize| record.get(i).unwrap_or_default().to_string();
        Self {
            user_text: field(0),
            response_text: field(1),
            timestamp: field(2),
        }
    }
}

/// Handle to the CSV chat log at a fixed path.
#[derive(Debug, Clone)]
pub struct ChatLog {
    path: PathBuf,
}

impl ChatLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one turn stamped with `now`.
    ///
    /// # Errors
    ///
    /// `ChatbotError::Storage` if the directory, file or row cannot be written.
    pub fn append(&self, user_text: &str, response_text: &str, now: NaiveDateTime) -> Result<()> {
        self.try_append(user_text, response_text, now).map_err(|e| {
            anyhow!(ChatbotError::Storage(format!(
                "cannot write chat log {}: {:#}",
                self.path.display(),
                e
            )))
        })
    }

    fn try_append(&self, user_text: &str, response_text: &str, now: NaiveDateTime) -> Result<()> {
        io::ensure_parent_dir(&self.path)?;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let needs_header = file.metadata()?.len() == 0;

        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .terminator(Terminator::CRLF)
            .from_writer(file);
        if needs_header {
            debug!("Initialising chat log {}", self.path.display());
            writer.write_record(HEADER)?;
        }
        let timestamp = now.format(TIMESTAMP_FORMAT).to_string();
        writer.write_record([user_text, response_text, timestamp.as_str()])?;
        writer.flush()?;
        debug!("Appended turn to {} at {}", self.path.display(), timestamp);
        Ok(())
    }

    /// Reads every turn in append order.
    ///
    /// # Errors
    ///
    /// `ChatbotError::Storage` if the file exists but cannot be read or parsed.
    pub fn read_all(&self) -> Result<Vec<ChatTurn>> {
        if !self.path.exists() {
            debug!("No chat log at {}", self.path.display());
            return Ok(Vec::new());
        }
        self.try_read_all().map_err(|e| {
            anyhow!(ChatbotError::Storage(format!(
                "cannot read chat log {}: {:#}",
                self.path.display(),
                e
            )))
        })
    }

    fn try_read_all(&self) -> Result<Vec<ChatTurn>> {
        let file = fs::File::open(&self.path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(file);

        let mut turns = Vec::new();
        for record in reader.records() {
            let record = record?;
            if record.len() < HEADER.len() {
                warn!(
                    "Chat log row {} has {} fields, padding the rest",
                    turns.len() + 1,
                    record.len()
                );
            }
            turns.push(ChatTurn::from_record(&record));
        }
        Ok(turns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::category;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    fn is_well_formed(ts: &str) -> bool {
        NaiveDateTime::parse_from_str(ts, TIMESTAMP_FORMAT).is_ok() && ts.len() == 19
    }

    #[test]
    fn missing_log_reads_as_empty() {
        let dir = tempdir().unwrap();
        let log = ChatLog::new(dir.path().join("chat_log.csv"));
        assert!(log.read_all().unwrap().is_empty());
        assert!(!log.path().exists());
    }

    #[test]
    fn empty_and_header_only_logs_read_as_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("chat_log.csv");

        fs::write(&path, "").unwrap();
        assert!(ChatLog::new(&path).read_all().unwrap().is_empty());

        fs::write(&path, "User Input,Chatbot Response,Timestamp\r\n").unwrap();
        assert!(ChatLog::new(&path).read_all().unwrap().is_empty());
    }

    #[test]
    fn first_append_writes_header() {
        let dir = tempdir().unwrap();
        let log = ChatLog::new(dir.path().join("chat_log.csv"));
        log.append("hello", "Hey!", at(9, 30, 12)).unwrap();

        let raw = fs::read_to_string(log.path()).unwrap();
        assert_eq!(
            raw,
            "User Input,Chatbot Response,Timestamp\r\nhello,Hey!,2024-05-01 09:30:12\r\n"
        );
    }

    #[test]
    fn append_then_read_round_trips() {
        let dir = tempdir().unwrap();
        let log = ChatLog::new(dir.path().join("chat_log.csv"));
        log.append("hi, bot", "Hello, \"human\"!\nHow are you?", at(10, 0, 0))
            .unwrap();

        let turns = log.read_all().unwrap();
        let last = turns.last().unwrap();
        assert_eq!(last.user_text, "hi, bot");
        assert_eq!(last.response_text, "Hello, \"human\"!\nHow are you?");
        assert_eq!(last.timestamp, "2024-05-01 10:00:00");
    }

    #[test]
    fn three_appends_keep_insertion_order() {
        let dir = tempdir().unwrap();
        let log = ChatLog::new(dir.path().join("chat_log.csv"));
        log.append("one", "1", at(8, 0, 1)).unwrap();
        log.append("two", "2", at(8, 0, 2)).unwrap();
        log.append("three", "3", at(8, 0, 3)).unwrap();

        let turns = log.read_all().unwrap();
        assert_eq!(turns.len(), 3);
        let inputs: Vec<_> = turns.iter().map(|t| t.user_text.as_str()).collect();
        assert_eq!(inputs, vec!["one", "two", "three"]);
        assert!(turns.iter().all(|t| is_well_formed(&t.timestamp)));

        let raw = fs::read_to_string(log.path()).unwrap();
        assert_eq!(raw.matches("User Input").count(), 1);
    }

    #[test]
    fn append_creates_missing_directories() {
        let dir = tempdir().unwrap();
        let log = ChatLog::new(dir.path().join("logs/nested/chat_log.csv"));
        log.append("hello", "Hey!", at(12, 0, 0)).unwrap();
        assert_eq!(log.read_all().unwrap().len(), 1);
    }

    #[test]
    fn append_to_header_only_file_does_not_repeat_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("chat_log.csv");
        fs::write(&path, "User Input,Chatbot Response,Timestamp\r\n").unwrap();
        let log = ChatLog::new(&path);
        log.append("hello", "Hey!", at(12, 0, 0)).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert_eq!(raw.matches("User Input").count(), 1);
        assert_eq!(log.read_all().unwrap().len(), 1);
    }

    #[test]
    fn short_rows_are_padded() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("chat_log.csv");
        fs::write(&path, "User Input,Chatbot Response,Timestamp\nhello,Hey!\n").unwrap();
        let turns = ChatLog::new(&path).read_all().unwrap();
        assert_eq!(turns[0].response_text, "Hey!");
        assert_eq!(turns[0].timestamp, "");
    }

    #[test]
    fn unwritable_location_is_storage_error() {
        let dir = tempdir().unwrap();
        // The log path is an existing directory, so it cannot be opened as a file.
        let log = ChatLog::new(dir.path());
        let err = log.append("hello", "Hey!", at(12, 0, 0)).unwrap_err();
        assert!(matches!(category(&err), Some(ChatbotError::Storage(_))));
    }

    #[test]
    fn unreadable_log_is_storage_error() {
        let dir = tempdir().unwrap();
        let err = ChatLog::new(dir.path()).read_all().unwrap_err();
        assert!(matches!(category(&err), Some(ChatbotError::Storage(_))));
    }
}
