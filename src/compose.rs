//! Composes the styled HTML document handed to the render engine
//!
//! Pure string substitution into a static template: highlighted markup,
//! theme CSS, colors derived from the theme background, and the layout
//! parameters from [`RenderOptions`](crate::RenderOptions).

use crate::color::{darken, lighten};
use crate::highlight::Highlighted;
use crate::RenderOptions;

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <style>
        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }

        body {
            background: radial-gradient(ellipse at center, {gradient_start} 0%, {gradient_end} 100%);
            padding: {margin}px;
            display: inline-block;
            -webkit-font-smoothing: antialiased;
        }

        .window {
            background: {bg_color};
            border-radius: 8px;
            overflow: hidden;
            display: inline-block;
            box-shadow: 0 20px 68px rgba(0, 0, 0, 0.55);
        }

        .window-header-chrome {
            background: {window_color};
            height: 35px;
            display: flex;
            align-items: center;
            padding-left: 12px;
            gap: 6px;
        }

        .window-header-clear {
            background: {bg_color};
            height: 35px;
            display: flex;
            align-items: center;
            padding-left: 12px;
            gap: 6px;
            margin-bottom: -0.5em;
        }

        .window-button {
            width: 10px;
            height: 10px;
            border-radius: 50%;
        }

        .window-button.red { background: #ff5f56; }
        .window-button.yellow { background: #ffbd2e; }
        .window-button.green { background: #27c93f; }

        .code-container {
            background: {bg_color};
            padding: {padding}px;
            font-family: 'Monaco', 'Menlo', 'Ubuntu Mono', 'Consolas', 'Courier New', monospace;
            font-size: {font_size}px;
            line-height: 1.5;
            overflow-x: auto;

            /* Crisp text rendering */
            -webkit-font-smoothing: antialiased;
            -moz-osx-font-smoothing: grayscale;
            text-rendering: geometricPrecision;
            font-smooth: never;
            image-rendering: crisp-edges;
        }

        .highlight pre {
            margin: 0;
            padding: 0;
        }

        /* Override all backgrounds so the code block matches the window */
        .highlight,
        .highlight *,
        .highlighttable,
        .highlighttable * {
            background-color: {bg_color} !important;
            background: {bg_color} !important;
            border: none !important;
        }

        .highlighttable .linenos {
            padding-right: 0.5em !important;
            user-select: none;
            text-align: right;
            vertical-align: top;
        }

        {theme_css}
    </style>
</head>
<body>
    <div class="window">
        {window_header}
        <div class="code-container">
            {highlighted_code}
        </div>
    </div>
</body>
</html>
"#;

const DOTS: &str = r#"
            <div class="window-button red"></div>
            <div class="window-button yellow"></div>
            <div class="window-button green"></div>
"#;

fn window_header(show_frame: bool, show_decorations: bool) -> String {
    match (show_frame, show_decorations) {
        (true, true) => format!("<div class=\"window-header-chrome\">{DOTS}</div>"),
        (true, false) => "<div class=\"window-header-chrome\"></div>".to_string(),
        (false, true) => format!("<div class=\"window-header-clear\">{DOTS}</div>"),
        (false, false) => String::new(),
    }
}

/// Build the full document for one invocation. Deterministic for identical
/// inputs. Scalar tokens are substituted before the highlighted markup and
/// theme CSS so token-like text inside user code is never rewritten.
pub fn compose(hl: &Highlighted, opts: &RenderOptions) -> String {
    let bg = &hl.background;
    let header = window_header(opts.show_frame, opts.show_decorations);

    TEMPLATE
        .replace("{bg_color}", bg)
        .replace("{window_color}", &lighten(bg, 0.15))
        .replace("{gradient_start}", &lighten(bg, 0.1))
        .replace("{gradient_end}", &darken(bg, 0.2))
        .replace("{font_size}", &opts.font_size.to_string())
        .replace("{padding}", &opts.padding.to_string())
        .replace("{margin}", &opts.margin.to_string())
        .replace("{window_header}", &header)
        .replace("{theme_css}", &hl.css)
        .replace("{highlighted_code}", &hl.html)
}
