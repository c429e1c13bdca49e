use crate::error::{Result, UserStoreError};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// File used when no file name is given.
pub const DEFAULT_FILE_NAME: &str = "users.json";

/// Environment variable consulted for the file name when no flag is given.
pub const FILE_ENV_VAR: &str = "USERSTORE_FILE";

/// Parameters for one invocation, one field per recognized parameter.
///
/// Values are kept as given by the caller; [`Request::from_params`] is the
/// single place they are validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Params {
    pub operation: Option<String>,
    pub file_name: String,
    pub item: Option<String>,
    pub id: Option<String>,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            operation: None,
            file_name: DEFAULT_FILE_NAME.to_string(),
            item: None,
            id: None,
        }
    }
}

impl Params {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: Some(operation.into()),
            ..Self::default()
        }
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    pub fn with_item(mut self, item: impl Into<String>) -> Self {
        self.item = Some(item.into());
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// The recognized operation names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    List,
    Add,
    Remove,
    FindById,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OperationKind::List => "list",
            OperationKind::Add => "add",
            OperationKind::Remove => "remove",
            OperationKind::FindById => "findById",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for OperationKind {
    type Err = UserStoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "list" => Ok(OperationKind::List),
            "add" => Ok(OperationKind::Add),
            "remove" => Ok(OperationKind::Remove),
            "findById" => Ok(OperationKind::FindById),
            "" => Err(UserStoreError::MissingParameter("operation")),
            other => Err(UserStoreError::UnknownOperation(other.to_string())),
        }
    }
}

/// A validated operation with the parameters it needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    List,
    Add { item: String },
    Remove { id: String },
    FindById { id: String },
}

impl Operation {
    pub fn kind(&self) -> OperationKind {
        match self {
            Operation::List => OperationKind::List,
            Operation::Add { .. } => OperationKind::Add,
            Operation::Remove { .. } => OperationKind::Remove,
            Operation::FindById { .. } => OperationKind::FindById,
        }
    }
}

/// A fully validated invocation: which file, which operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub file_name: PathBuf,
    pub operation: Operation,
}

impl Request {
    pub fn from_params(params: &Params) -> Result<Self> {
        let kind: OperationKind = params.operation.as_deref().unwrap_or_default().parse()?;

        let operation = match kind {
            OperationKind::List => {
                if params.file_name.is_empty() {
                    return Err(UserStoreError::MissingParameter("fileName"));
                }
                Operation::List
            }
            OperationKind::Add => Operation::Add {
                item: required(params.item.as_deref(), "item")?,
            },
            OperationKind::Remove => Operation::Remove {
                id: required(params.id.as_deref(), "id")?,
            },
            OperationKind::FindById => Operation::FindById {
                id: required(params.id.as_deref(), "id")?,
            },
        };

        Ok(Self {
            file_name: PathBuf::from(&params.file_name),
            operation,
        })
    }
}

fn required(value: Option<&str>, name: &'static str) -> Result<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(UserStoreError::MissingParameter(name)),
    }
}
