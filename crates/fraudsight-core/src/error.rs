//! Error types for FraudSight

/// Result type alias using FraudSight's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for FraudSight operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Rule catalog validation or loading errors
    #[error("catalog error: {0}")]
    Catalog(String),

    /// Classifier collaborator errors
    #[error("classifier error: {0}")]
    Classifier(String),

    /// Advisor registry lookup errors
    #[error("registry error: {0}")]
    Registry(String),

    /// OCR collaborator errors
    #[error("ocr error: {0}")]
    Ocr(String),

    /// Input rejected by the orchestration layer
    #[error("invalid input: {0}")]
    Input(String),

    /// Network/IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic internal errors
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new catalog error
    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }

    /// Create a new classifier error
    pub fn classifier(msg: impl Into<String>) -> Self {
        Self::Classifier(msg.into())
    }

    /// Create a new registry error
    pub fn registry(msg: impl Into<String>) -> Self {
        Self::Registry(msg.into())
    }

    /// Create a new OCR error
    pub fn ocr(msg: impl Into<String>) -> Self {
        Self::Ocr(msg.into())
    }

    /// Create a new input error
    pub fn input(msg: impl Into<String>) -> Self {
        Self::Input(msg.into())
    }

    /// Create a new internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
