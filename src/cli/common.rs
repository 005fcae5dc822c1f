//! Shared error and exit-code types for headless commands.

use crate::palette::PaletteError;

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command succeeded
    Success = 0,
    /// Command failed
    Failure = 1,
}

impl ExitCode {
    /// Numeric code passed to the OS.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// A failed CLI command.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Bad input or configuration
    #[error("{0}")]
    Validation(String),
    /// Reading, writing or serializing failed
    #[error("{0}")]
    Io(String),
    /// Palette generation failed
    #[error(transparent)]
    Palette(#[from] PaletteError),
}

impl CliError {
    /// Validation error with `message`.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// I/O error with `message`.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(message.into())
    }

    /// Exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        ExitCode::Failure
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_error_passes_through() {
        let err = CliError::from(PaletteError::EmptyResponse);
        assert_eq!(err.to_string(), "No response from Gemini");
        assert_eq!(err.exit_code().code(), 1);
        assert_eq!(ExitCode::Success.code(), 0);
    }
}
