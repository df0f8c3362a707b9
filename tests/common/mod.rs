//! Shared helpers for FileKV integration tests

#![allow(dead_code)]

use std::fmt;
use std::sync::Arc;

use filekv::{Config, Logger, RecordStore};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tempfile::TempDir;

/// Level a message was logged at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Fatal,
    Error,
    Info,
    Debug,
}

/// Logger that keeps every message for later assertions
#[derive(Debug, Default)]
pub struct RecordingLogger {
    messages: Mutex<Vec<(Level, String)>>,
}

impl RecordingLogger {
    pub fn messages(&self) -> Vec<(Level, String)> {
        self.messages.lock().clone()
    }

    pub fn at(&self, level: Level) -> Vec<String> {
        self.messages
            .lock()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    fn push(&self, level: Level, args: fmt::Arguments<'_>) {
        self.messages.lock().push((level, args.to_string()));
    }
}

impl Logger for RecordingLogger {
    fn fatal(&self, args: fmt::Arguments<'_>) {
        self.push(Level::Fatal, args);
    }

    fn error(&self, args: fmt::Arguments<'_>) {
        self.push(Level::Error, args);
    }

    fn info(&self, args: fmt::Arguments<'_>) {
        self.push(Level::Info, args);
    }

    fn debug(&self, args: fmt::Arguments<'_>) {
        self.push(Level::Debug, args);
    }
}

/// Sample payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct User {
    pub name: String,
    pub age: u32,
    pub company: String,
    pub address: String,
}

pub fn user(name: &str, age: u32) -> User {
    User {
        name: name.to_string(),
        age,
        company: "Acme".to_string(),
        address: "1 Main St".to_string(),
    }
}

pub fn setup_temp_store() -> (TempDir, RecordStore) {
    let temp_dir = TempDir::new().unwrap();
    let store = RecordStore::open_path(temp_dir.path()).unwrap();
    (temp_dir, store)
}

pub fn setup_logged_store() -> (TempDir, RecordStore, Arc<RecordingLogger>) {
    let temp_dir = TempDir::new().unwrap();
    let logger = Arc::new(RecordingLogger::default());
    let config = Config::builder()
        .data_dir(temp_dir.path().join("db"))
        .logger(logger.clone())
        .build();
    let store = RecordStore::open(config).unwrap();
    (temp_dir, store, logger)
}
