/// Custom error types for the converter session
///
/// The first three variants are user input problems: their `Display` text is
/// exactly what the session prints before carrying on.
#[derive(Debug, thiserror::Error)]
pub enum ConverterError {
    #[error("Invalid timezone. Please try again.")]
    UnrecognizedZone { zone: String },
    #[error("Invalid time format. Please try again.")]
    MalformedDateTime { input: String },
    #[error("Invalid input. Please try again.")]
    UnrecognizedCommand { input: String },
    #[error("Input stream closed")]
    InputClosed,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Logging initialization failed
    #[error("Logging initialization failed: {0}")]
    LoggingInitialization(String),
}

impl ConverterError {
    /// Whether the error is recovered locally by reporting it to the user
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            ConverterError::UnrecognizedZone { .. }
                | ConverterError::MalformedDateTime { .. }
                | ConverterError::UnrecognizedCommand { .. }
        )
    }
}

pub type ConverterResult<T> = Result<T, ConverterError>;
