use crate::domain::column::LeafType;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlatTreeError {
    #[error("Can't add {record} data because {io} is not bound to tree")]
    NotBound {
        record: &'static str,
        io: &'static str,
    },

    #[error("Branch '{branch}' is already defined in tree '{tree}'")]
    BranchConflict { tree: String, branch: String },

    #[error("Branch '{branch}' is not defined in tree '{tree}'")]
    UnknownBranch { tree: String, branch: String },

    #[error("Branch '{branch}' was not filled for entry {entry} of tree '{tree}'")]
    MissingBranch {
        tree: String,
        branch: String,
        entry: u64,
    },

    #[error("Branch '{branch}' holds {expected} but was filled with {actual}")]
    LeafMismatch {
        branch: String,
        expected: LeafType,
        actual: LeafType,
    },

    #[error("Failed to parse event on line {line}: {source}")]
    EventParse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to open input '{path}': {source}")]
    InputOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Bad input or configuration; the user can fix and rerun.
    Medium,
    /// Programming error in the binding sequence.
    High,
    /// The environment failed underneath us (disk, permissions).
    Critical,
}

impl FlatTreeError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            FlatTreeError::NotBound { .. }
            | FlatTreeError::BranchConflict { .. }
            | FlatTreeError::UnknownBranch { .. }
            | FlatTreeError::MissingBranch { .. }
            | FlatTreeError::LeafMismatch { .. } => ErrorSeverity::High,
            FlatTreeError::InputOpen { .. }
            | FlatTreeError::IoError(_)
            | FlatTreeError::CsvError(_) => ErrorSeverity::Critical,
            FlatTreeError::EventParse { .. }
            | FlatTreeError::SerializationError(_)
            | FlatTreeError::ConfigError { .. }
            | FlatTreeError::ConfigValidationError { .. }
            | FlatTreeError::InvalidConfigValueError { .. }
            | FlatTreeError::MissingConfigError { .. } => ErrorSeverity::Medium,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FlatTreeError::NotBound { .. } => "Call bind_to_tree before adding records",
            FlatTreeError::BranchConflict { .. } => {
                "Bind each record IO only once, or give the tree a fresh instance"
            }
            FlatTreeError::UnknownBranch { .. }
            | FlatTreeError::MissingBranch { .. }
            | FlatTreeError::LeafMismatch { .. } => {
                "Fill the tree with exactly the IOs that were bound to it"
            }
            FlatTreeError::EventParse { .. } => {
                "Check that the input is JSON lines with one event object per line"
            }
            FlatTreeError::InputOpen { .. } => {
                "Check the input path; unset ${VAR} references are not expanded"
            }
            FlatTreeError::IoError(_) | FlatTreeError::CsvError(_) => {
                "Check that the input exists and the output directory is writable"
            }
            FlatTreeError::SerializationError(_) => "Check the event data for invalid values",
            FlatTreeError::ConfigError { .. }
            | FlatTreeError::ConfigValidationError { .. }
            | FlatTreeError::InvalidConfigValueError { .. }
            | FlatTreeError::MissingConfigError { .. } => {
                "Review the configuration file and command line arguments"
            }
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, FlatTreeError>;
