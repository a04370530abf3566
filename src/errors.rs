use std::fmt;

/// Application-specific error types.
#[derive(Debug)]
pub enum AppError {
    /// CSV parse or serialization errors.
    CsvError(csv::Error),
    /// Filesystem-related errors.
    IoError(std::io::Error),
    /// A column the pipeline relies on is absent from the dataset header.
    MissingColumn(String),
    /// A cell holds a value the pipeline cannot accept (bad count, bad flag).
    InvalidField {
        /// 1-based data row number (excluding the header).
        row: usize,
        /// Column name as it appears in the header.
        column: String,
        /// What was wrong with the value.
        message: String,
    },
    /// Error with context chain for better debugging.
    WithContext {
        /// The underlying source of the error.
        source: Box<AppError>,
        /// Additional context message.
        context: String,
    },
}

impl fmt::Display for AppError {
    /// Formats the error for display.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::CsvError(e) => write!(f, "CSV error: {}", e),
            AppError::IoError(e) => write!(f, "I/O error: {}", e),
            AppError::MissingColumn(name) => {
                write!(f, "Missing required column: {}", name)
            }
            AppError::InvalidField {
                row,
                column,
                message,
            } => {
                write!(
                    f,
                    "Invalid value in row {}, column '{}': {}",
                    row, column, message
                )
            }
            AppError::WithContext { source, context } => {
                write!(f, "{}: {}", context, source)
            }
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::CsvError(e) => Some(e),
            AppError::IoError(e) => Some(e),
            AppError::WithContext { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl From<csv::Error> for AppError {
    /// Converts a `csv::Error` into an `AppError`.
    fn from(err: csv::Error) -> Self {
        AppError::CsvError(err)
    }
}

impl From<std::io::Error> for AppError {
    /// Converts a `std::io::Error` into an `AppError`.
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err)
    }
}

/// Extension trait for adding context to errors.
/// Similar to `anyhow::Context` but for our `AppError` type.
pub trait ResultExt<T> {
    /// Add context to an error.
    ///
    /// # Arguments
    ///
    /// * `context` - The context message to add.
    fn context(self, context: impl Into<String>) -> Result<T, AppError>;

    /// Add context lazily (only evaluated on error).
    ///
    /// # Arguments
    ///
    /// * `f` - A closure that produces the context message.
    #[allow(dead_code)]
    fn with_context<F>(self, f: F) -> Result<T, AppError>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T, AppError> {
    fn context(self, context: impl Into<String>) -> Result<T, AppError> {
        self.map_err(|e| AppError::WithContext {
            source: Box::new(e),
            context: context.into(),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T, AppError>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::WithContext {
            source: Box::new(e),
            context: f(),
        })
    }
}

/// Extension for csv::Error to add context
impl<T> ResultExt<T> for Result<T, csv::Error> {
    fn context(self, context: impl Into<String>) -> Result<T, AppError> {
        self.map_err(|e| AppError::WithContext {
            source: Box::new(AppError::CsvError(e)),
            context: context.into(),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T, AppError>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::WithContext {
            source: Box::new(AppError::CsvError(e)),
            context: f(),
        })
    }
}
