//! Error types for the code-image pipeline

use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while turning source text into an image
#[derive(Error, Debug)]
pub enum Error {
    /// Input file missing, stdin not piped, or input empty
    #[error("Input error: {0}")]
    Input(String),

    /// Syntax highlighting failed
    #[error("Highlighting failed: {0}")]
    Highlight(String),

    /// The headless browser failed to launch, load, or screenshot
    #[error("Rendering failed: {0}")]
    Render(String),

    /// Writing the output image failed
    #[error("Failed to write output: {0}")]
    Output(String),

    /// Clipboard transfer failed (non-fatal at the CLI boundary)
    #[error("Clipboard transfer failed: {0}")]
    Clipboard(String),
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Render(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anyhow_errors_surface_as_render_errors() {
        let err: Error = anyhow::anyhow!("browser went away").into();
        assert!(matches!(err, Error::Render(_)));
        assert!(err.to_string().contains("browser went away"));
    }
}
