//! Errors from palette generation.

/// Why a palette could not be generated.
#[derive(thiserror::Error, Debug)]
pub enum PaletteError {
    #[error("Prompt is empty")]
    EmptyPrompt,

    #[error("API key not set: export {var}")]
    MissingCredential { var: String },

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Service returned HTTP {code}: {body}")]
    Status { code: u16, body: String },

    #[error("No response from Gemini")]
    EmptyResponse,

    #[error("Invalid response format: {0}")]
    InvalidFormat(String),

    #[error("Generation stopped before producing a result")]
    Interrupted,
}
