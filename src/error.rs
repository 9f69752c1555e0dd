use thiserror::Error;

#[derive(Error, Debug)]
pub enum FinderError {
    /// The only domain failure: a search was triggered below the budget floor.
    #[error("Your budget is too low for any meal. Please increase it.")]
    BudgetTooLow { budget: u32, minimum: u32 },

    #[error("Invalid budget: {0}")]
    InvalidBudget(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML serialization error: {0}")]
    YamlSerialization(#[from] serde_yaml_ng::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Generic error: {0}")]
    Generic(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, FinderError>;
