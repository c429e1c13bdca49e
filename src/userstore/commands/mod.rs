use crate::model::User;

pub mod add;
pub mod find;
pub mod list;
pub mod remove;

/// What an operation produced, for callers that need to branch on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Bytes to hand back to the caller, possibly empty.
    Payload(Vec<u8>),
    /// The collection was rewritten.
    Written,
    /// A record with this id already exists; nothing was written.
    Conflict { id: String },
    /// No record with this id; nothing was written.
    NotFound { id: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
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

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug)]
pub struct CmdResult {
    pub outcome: Outcome,
    pub affected_users: Vec<User>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn new(outcome: Outcome) -> Self {
        Self {
            outcome,
            affected_users: Vec::new(),
            messages: Vec::new(),
        }
    }

    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_users(mut self, users: Vec<User>) -> Self {
        self.affected_users = users;
        self
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.add_message(message);
        self
    }

    /// The payload bytes, empty for outcomes that carry none.
    pub fn payload(&self) -> &[u8] {
        match &self.outcome {
            Outcome::Payload(bytes) => bytes,
            _ => &[],
        }
    }

    pub fn is_written(&self) -> bool {
        self.outcome == Outcome::Written
    }
}

pub fn conflict_message(id: &str) -> String {
    format!("Item with id {} already exists", id)
}

pub fn not_found_message(id: &str) -> String {
    format!("Item with id {} not found", id)
}
