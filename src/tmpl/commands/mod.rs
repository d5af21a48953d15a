use std::path::PathBuf;

pub mod copy;
pub mod select;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Files written, in copy order
    pub copied_paths: Vec<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_copied_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.copied_paths = paths;
        self
    }

    pub fn copied(&self) -> usize {
        self.copied_paths.len()
    }
}

/// "Copied N template(s)." as reported after a run, complete or not.
pub fn copied_message(count: usize) -> String {
    format!("Copied {} template(s).", count)
}
