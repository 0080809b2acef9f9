//! Clipboard transfer for rendered images
//!
//! Dispatch order: the portable `arboard` clipboard first, then one
//! platform-specific command selected by a single OS check at startup. A
//! command-driven transfer buffers the PNG bytes to a temp file that is
//! deleted on drop, success or not.

use std::io::Write;
use std::path::Path;
use std::process::Command;

use log::warn;

use crate::error::{Error, Result};

/// One per-OS clipboard capability. Implementations shell out to whatever
/// the platform ships for putting image data on the clipboard.
pub trait ClipboardTool {
    /// Short tool name for diagnostics
    fn name(&self) -> &'static str;

    /// Copy the PNG at `path` to the system clipboard
    fn copy_png_file(&self, path: &Path) -> Result<()>;
}

fn run(tool: &'static str, cmd: &mut Command) -> Result<()> {
    let output = cmd.output().map_err(|e| {
        Error::Clipboard(format!("could not run '{}': {} (is it installed?)", tool, e))
    })?;
    if output.status.success() {
        Ok(())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        Err(Error::Clipboard(format!(
            "'{}' exited with {}: {}",
            tool,
            output.status,
            stderr.trim()
        )))
    }
}

/// macOS: AppleScript bridge reading the file as PNG class data
struct Osascript;

impl ClipboardTool for Osascript {
    fn name(&self) -> &'static str {
        "osascript"
    }

    fn copy_png_file(&self, path: &Path) -> Result<()> {
        let script = format!(
            "set the clipboard to (read (POSIX file \"{}\") as \u{ab}class PNGf\u{bb})",
            path.display()
        );
        run("osascript", Command::new("osascript").args(["-e", &script]))
    }
}

/// Linux/X11: selection-manipulation utility
struct Xclip;

impl ClipboardTool for Xclip {
    fn name(&self) -> &'static str {
        "xclip"
    }

    fn copy_png_file(&self, path: &Path) -> Result<()> {
        run(
            "xclip",
            Command::new("xclip")
                .args(["-selection", "clipboard", "-t", "image/png", "-i"])
                .arg(path),
        )
    }
}

/// Windows: PowerShell image-clipboard call (needs an STA thread)
struct PowerShell;

impl ClipboardTool for PowerShell {
    fn name(&self) -> &'static str {
        "powershell"
    }

    fn copy_png_file(&self, path: &Path) -> Result<()> {
        let script = format!(
            "Add-Type -AssemblyName System.Windows.Forms; \
             Add-Type -AssemblyName System.Drawing; \
             $img = [System.Drawing.Image]::FromFile('{}'); \
             [System.Windows.Forms.Clipboard]::SetImage($img); \
             $img.Dispose()",
            path.display()
        );
        run(
            "powershell",
            Command::new("powershell").args(["-NoProfile", "-STA", "-Command", &script]),
        )
    }
}

/// Select the clipboard command for the running platform, once.
pub fn platform_tool() -> Option<Box<dyn ClipboardTool>> {
    match std::env::consts::OS {
        "macos" => Some(Box::new(Osascript)),
        "linux" => Some(Box::new(Xclip)),
        "windows" => Some(Box::new(PowerShell)),
        _ => None,
    }
}

fn copy_via_arboard(png: &[u8]) -> Result<()> {
    let decoded = image::load_from_memory(png)
        .map_err(|e| Error::Clipboard(format!("could not decode PNG: {}", e)))?
        .to_rgba8();
    let (width, height) = decoded.dimensions();

    let mut clipboard = arboard::Clipboard::new()
        .map_err(|e| Error::Clipboard(format!("clipboard unavailable: {}", e)))?;
    clipboard
        .set_image(arboard::ImageData {
            width: width as usize,
            height: height as usize,
            bytes: decoded.into_raw().into(),
        })
        .map_err(|e| Error::Clipboard(format!("could not set image: {}", e)))
}

/// Copy PNG bytes to the system clipboard, trying each backend in order.
/// Best-effort: both backends can fail for the same environmental reason
/// (e.g. no graphical session).
pub fn copy_png(png: &[u8]) -> Result<()> {
    let portable_err = match copy_via_arboard(png) {
        Ok(()) => return Ok(()),
        Err(e) => e,
    };
    warn!("portable clipboard failed ({}), trying platform tool", portable_err);

    let tool = platform_tool().ok_or_else(|| {
        Error::Clipboard(format!(
            "no clipboard support for platform '{}'",
            std::env::consts::OS
        ))
    })?;

    let mut tmp = tempfile::Builder::new()
        .prefix("codeshot-")
        .suffix(".png")
        .tempfile()
        .map_err(|e| Error::Clipboard(format!("could not create temp file: {}", e)))?;
    tmp.write_all(png)
        .and_then(|_| tmp.flush())
        .map_err(|e| Error::Clipboard(format!("could not write temp file: {}", e)))?;

    // tmp is deleted on drop whether or not the command succeeds
    tool.copy_png_file(tmp.path())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_platforms_have_a_tool() {
        let tool = platform_tool();
        match std::env::consts::OS {
            "macos" => assert_eq!(tool.unwrap().name(), "osascript"),
            "linux" => assert_eq!(tool.unwrap().name(), "xclip"),
            "windows" => assert_eq!(tool.unwrap().name(), "powershell"),
            _ => assert!(tool.is_none()),
        }
    }

    #[test]
    fn portable_path_rejects_non_png_bytes() {
        // Decode happens before any clipboard handle is opened, so this
        // fails the same way with or without a graphical session.
        assert!(matches!(
            copy_via_arboard(b"definitely not a png"),
            Err(Error::Clipboard(_))
        ));
    }
}
