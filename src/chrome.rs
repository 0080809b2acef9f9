//! Headless Chrome adapter
//!
//! Launches one browser per invocation, loads the composed document from a
//! `data:` URL, and captures the body element at a fixed 3x device scale.
//! The browser is torn down when the render returns; nothing is pooled or
//! reused across invocations.

use std::path::Path;
use std::time::Duration;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as Base64Engine;
use headless_chrome::protocol::cdp::Page;
use headless_chrome::types::Bounds;
use headless_chrome::{Browser, LaunchOptions, Tab};
use log::debug;

use crate::error::{Error, Result};

/// Device pixel-density multiplier applied to the screenshot clip.
pub const DEVICE_SCALE: f64 = 3.0;

const INITIAL_WINDOW: (u32, u32) = (1280, 720);

/// Guidance appended by the CLIs when the engine fails.
pub const INSTALL_HINT: &str =
    "Make sure Chrome or Chromium is installed and discoverable on your PATH.";

/// Border box of the document body, measured in the page.
struct BodyBounds {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

fn measure_body(tab: &Tab) -> Result<BodyBounds> {
    // getBoundingClientRect is more dependable than the CDP box model for
    // inline-block bodies
    let script = r#"
        (function() {
            const rect = document.body.getBoundingClientRect();
            return JSON.stringify({
                x: rect.x,
                y: rect.y,
                width: rect.width,
                height: rect.height
            });
        })()
    "#;

    let bounds_json = tab
        .evaluate(script, false)
        .map_err(|e| Error::Render(format!("Failed to measure content: {}", e)))?
        .value
        .ok_or_else(|| Error::Render("No value returned when measuring content".into()))?;

    let bounds: serde_json::Value = serde_json::from_str(
        bounds_json
            .as_str()
            .ok_or_else(|| Error::Render("Invalid bounds payload".into()))?,
    )
    .map_err(|e| Error::Render(format!("Invalid bounds JSON: {}", e)))?;

    Ok(BodyBounds {
        x: bounds["x"].as_f64().unwrap_or(0.0),
        y: bounds["y"].as_f64().unwrap_or(0.0),
        width: bounds["width"].as_f64().unwrap_or(0.0),
        height: bounds["height"].as_f64().unwrap_or(0.0),
    })
}

/// Render the composed document and return PNG bytes.
///
/// The document's body is `display: inline-block`, so its border box is the
/// natural content size; the window is grown to fit before capture so the
/// clip never extends past the viewport.
pub fn render_png(html: &str) -> Result<Vec<u8>> {
    let launch_options = LaunchOptions::default_builder()
        .headless(true)
        .window_size(Some(INITIAL_WINDOW))
        .build()
        .map_err(|e| Error::Render(format!("Failed to build launch options: {}", e)))?;

    // headless_chrome reports launch failures as anyhow errors; those map
    // straight onto Error::Render
    let browser = Browser::new(launch_options)?;
    let tab = browser.new_tab()?;

    let url = format!("data:text/html;base64,{}", STANDARD.encode(html));
    tab.navigate_to(&url)
        .map_err(|e| Error::Render(format!("Navigation failed: {}", e)))?;
    tab.wait_until_navigated()
        .map_err(|e| Error::Render(format!("Wait for navigation failed: {}", e)))?;

    // Let layout and font rasterization settle
    std::thread::sleep(Duration::from_millis(200));

    let mut bounds = measure_body(&tab)?;

    let need_w = (bounds.x + bounds.width).ceil() as u32;
    let need_h = (bounds.y + bounds.height).ceil() as u32;
    if need_w > INITIAL_WINDOW.0 || need_h > INITIAL_WINDOW.1 {
        debug!("growing window to {}x{} for content", need_w, need_h);
        tab.set_bounds(Bounds::Normal {
            left: Some(0),
            top: Some(0),
            width: Some(need_w as f64),
            height: Some(need_h as f64),
        })
        .map_err(|e| Error::Render(format!("Failed to resize window: {}", e)))?;
        std::thread::sleep(Duration::from_millis(100));

        // Layout may shift once the viewport stops clipping the content
        bounds = measure_body(&tab)?;
    }

    let png = tab
        .capture_screenshot(
            Page::CaptureScreenshotFormatOption::Png,
            None,
            Some(Page::Viewport {
                x: bounds.x,
                y: bounds.y,
                width: bounds.width,
                height: bounds.height,
                scale: DEVICE_SCALE,
            }),
            true,
        )
        .map_err(|e| Error::Render(format!("Screenshot failed: {}", e)))?;

    Ok(png)
}

/// Render the composed document straight to a file at `path`.
pub fn render_to_file(html: &str, path: &Path) -> Result<()> {
    let png = render_png(html)?;
    std::fs::write(path, &png)
        .map_err(|e| Error::Output(format!("{}: {}", path.display(), e)))
}
