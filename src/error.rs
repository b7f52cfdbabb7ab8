use thiserror::Error;

/// Everything that can go wrong while loading a dataset or ranking areas.
#[derive(Error, Debug)]
pub enum TradeError {
    #[error("Failed to load file:\n{0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to load file:\n{0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to load file:\n{0}")]
    Parse(String),

    /// Always names the full required set, not just the missing columns.
    #[error("Dataset must contain: {}", .required.join(", "))]
    Schema { required: Vec<String> },

    #[error("Failed to load file:\nrow {row}: could not convert '{value}' in column '{column}' to a number")]
    Numeric {
        row: usize,
        column: String,
        value: String,
    },

    #[error("Please load a dataset first.")]
    NoDataset,

    #[error("Please select an item from the dropdown.")]
    NoSelection,

    #[error("Export failed: {0}")]
    Export(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl TradeError {
    pub fn severity(&self) -> Severity {
        match self {
            TradeError::NoSelection => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

pub type Result<T> = std::result::Result<T, TradeError>;
