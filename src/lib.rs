//! Codeshot
//!
//! Renders syntax-highlighted source code as a styled HTML document inside a
//! simulated application window and rasterizes it to a PNG with headless
//! Chrome. The `snap` and `snatch` binaries are thin flag mappers over the
//! one pipeline exposed here.
//!
//! # Example
//!
//! ```no_run
//! use codeshot::{generate, RenderOptions};
//!
//! # fn main() -> codeshot::Result<()> {
//! let opts = RenderOptions {
//!     language: Some("rust".to_string()),
//!     output: Some("hello.png".into()),
//!     ..Default::default()
//! };
//! generate("fn main() { println!(\"hi\"); }", &opts)?;
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

pub mod error;
pub use error::{Error, Result};

pub mod chrome;
pub mod clipboard;
pub mod color;
pub mod compose;
pub mod highlight;

pub use chrome::INSTALL_HINT;
pub use highlight::{available_themes, Highlighted, DEFAULT_THEME};

/// Resolved configuration for one invocation.
///
/// Every field has a default; unknown language or theme names degrade to
/// defaults with a warning instead of failing.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Explicit language name for highlighting, if any
    pub language: Option<String>,
    /// Input filename, used for extension-based syntax detection
    pub filename: Option<PathBuf>,
    /// Theme name; unknown names fall back to [`DEFAULT_THEME`]
    pub theme: String,
    /// Font size in pixels
    pub font_size: u32,
    /// Padding inside the window in pixels
    pub padding: u32,
    /// Margin around the window in pixels
    pub margin: u32,
    /// Show a line-number column
    pub show_line_numbers: bool,
    /// Draw the colored window title bar
    pub show_frame: bool,
    /// Draw the three status dots in the title bar area
    pub show_decorations: bool,
    /// Write the image to this path, if set
    pub output: Option<PathBuf>,
    /// Also transfer the image to the system clipboard
    pub copy_to_clipboard: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            language: None,
            filename: None,
            theme: DEFAULT_THEME.to_string(),
            font_size: 12,
            padding: 20,
            margin: 40,
            show_line_numbers: true,
            show_frame: true,
            show_decorations: true,
            output: None,
            copy_to_clipboard: false,
        }
    }
}

/// Read source text from a file, else from piped stdin.
///
/// Errors on a missing file, on a terminal stdin with nothing piped, and on
/// whitespace-only input.
pub fn read_source(path: Option<&Path>) -> Result<String> {
    let code = match path {
        Some(p) => std::fs::read_to_string(p).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => {
                Error::Input(format!("File '{}' not found", p.display()))
            }
            _ => Error::Input(format!("Could not read '{}': {}", p.display(), e)),
        })?,
        None => {
            use std::io::{IsTerminal, Read};
            let mut stdin = std::io::stdin();
            if stdin.is_terminal() {
                return Err(Error::Input(
                    "No input provided. Use -f for file input or pipe content via stdin.".into(),
                ));
            }
            let mut buf = String::new();
            stdin
                .read_to_string(&mut buf)
                .map_err(|e| Error::Input(format!("Failed to read stdin: {}", e)))?;
            buf
        }
    };

    if code.trim().is_empty() {
        return Err(Error::Input("Input is empty".into()));
    }
    Ok(code)
}

/// Highlight and compose without rendering. Exposed for tests and for
/// callers that want the document itself.
pub fn compose_document(code: &str, opts: &RenderOptions) -> Result<String> {
    let hl = highlight::highlight(
        code,
        opts.language.as_deref(),
        opts.filename.as_deref(),
        &opts.theme,
        opts.show_line_numbers,
    )?;
    Ok(compose::compose(&hl, opts))
}

/// Run the full pipeline for one invocation: highlight, compose, render,
/// then write the file and/or copy to the clipboard.
///
/// Clipboard failure degrades to a warning on stderr; render and file-write
/// failures are returned to the caller.
pub fn generate(code: &str, opts: &RenderOptions) -> Result<()> {
    let document = compose_document(code, opts)?;

    if opts.copy_to_clipboard {
        // clipboard needs the bytes in memory; the file write shares them
        let png = chrome::render_png(&document)?;
        if let Some(path) = &opts.output {
            std::fs::write(path, &png)
                .map_err(|e| Error::Output(format!("{}: {}", path.display(), e)))?;
            println!("Image saved to {}", path.display());
        }
        match clipboard::copy_png(&png) {
            Ok(()) => println!("Image copied to clipboard"),
            Err(e) => eprintln!("Warning: {}", e),
        }
    } else if let Some(path) = &opts.output {
        chrome::render_to_file(&document, path)?;
        println!("Image saved to {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let opts = RenderOptions::default();
        assert_eq!(opts.theme, DEFAULT_THEME);
        assert_eq!(opts.font_size, 12);
        assert_eq!(opts.padding, 20);
        assert_eq!(opts.margin, 40);
        assert!(opts.show_line_numbers);
        assert!(opts.show_frame);
        assert!(opts.show_decorations);
        assert!(opts.output.is_none());
        assert!(!opts.copy_to_clipboard);
    }

    #[test]
    fn read_source_reports_missing_file() {
        let err = read_source(Some(Path::new("/no/such/file.rs"))).unwrap_err();
        assert!(matches!(err, Error::Input(_)));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn read_source_keeps_non_missing_io_errors_distinct() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.txt");
        // 0xe9 is not valid UTF-8, so read_to_string fails with InvalidData
        std::fs::write(&path, [0x66u8, 0xe9, 0x6c]).unwrap();
        let msg = read_source(Some(&path)).unwrap_err().to_string();
        assert!(!msg.contains("not found"), "{msg}");
        assert!(msg.contains("latin1.txt"));
    }

    #[test]
    fn read_source_rejects_blank_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blank.txt");
        std::fs::write(&path, "  \n\t\n").unwrap();
        let err = read_source(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn compose_document_is_a_full_page() {
        let doc = compose_document("print('hi')", &RenderOptions::default()).unwrap();
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("code-container"));
        assert!(doc.contains("print"));
    }
}
