//! Syntax highlighting adapter built on syntect
//!
//! Resolves a syntax (explicit language, then filename extension, then a
//! first-line guess, then plain text) and a theme (requested name or the
//! default), and produces class-annotated HTML plus the theme's CSS.

use std::path::Path;

use once_cell::sync::Lazy;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::{css_for_theme_with_class_style, ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

use crate::error::{Error, Result};

/// Theme substituted when the requested name is unknown.
pub const DEFAULT_THEME: &str = "base16-ocean.dark";

const CLASS_STYLE: ClassStyle = ClassStyle::Spaced;

static SYNTAXES: Lazy<SyntaxSet> = Lazy::new(SyntaxSet::load_defaults_newlines);
static THEMES: Lazy<ThemeSet> = Lazy::new(ThemeSet::load_defaults);

/// Output of one highlighting pass
#[derive(Debug, Clone)]
pub struct Highlighted {
    /// Class-annotated markup, wrapped for the composer's stylesheet
    pub html: String,
    /// Theme style rules for the classes used in `html`
    pub css: String,
    /// Theme background color as `#rrggbb`
    pub background: String,
    /// Name of the syntax that was resolved (e.g. "Rust")
    pub syntax_name: String,
}

/// All bundled theme names, alphabetically sorted.
pub fn available_themes() -> Vec<String> {
    // BTreeMap iteration is already ordered
    THEMES.themes.keys().cloned().collect()
}

fn resolve_syntax(
    code: &str,
    language: Option<&str>,
    filename: Option<&Path>,
) -> &'static SyntaxReference {
    if let Some(lang) = language {
        if let Some(syntax) = SYNTAXES.find_syntax_by_token(&lang.to_ascii_lowercase()) {
            return syntax;
        }
        eprintln!("Warning: Unknown language '{lang}', falling back to auto-detection");
    }

    if let Some(ext) = filename.and_then(|p| p.extension()).and_then(|e| e.to_str()) {
        if let Some(syntax) = SYNTAXES.find_syntax_by_extension(ext) {
            return syntax;
        }
    }

    let first_line = code.lines().next().unwrap_or("");
    SYNTAXES
        .find_syntax_by_first_line(first_line)
        .unwrap_or_else(|| SYNTAXES.find_syntax_plain_text())
}

fn resolve_theme(name: &str) -> &'static Theme {
    THEMES.themes.get(name).unwrap_or_else(|| {
        eprintln!("Warning: Unknown theme '{name}', falling back to '{DEFAULT_THEME}'");
        &THEMES.themes[DEFAULT_THEME]
    })
}

fn background_color(theme: &Theme) -> String {
    match theme.settings.background {
        Some(c) => format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b),
        None => "#ffffff".to_string(),
    }
}

/// Highlight `code`, resolving syntax and theme as described in the module
/// docs, and wrap the result in the markup structure the composer styles.
pub fn highlight(
    code: &str,
    language: Option<&str>,
    filename: Option<&Path>,
    theme_name: &str,
    show_line_numbers: bool,
) -> Result<Highlighted> {
    let syntax = resolve_syntax(code, language, filename);
    let theme = resolve_theme(theme_name);

    // syntect expects every line to end with a newline
    let mut code = code.to_string();
    if !code.ends_with('\n') {
        code.push('\n');
    }

    let mut generator = ClassedHTMLGenerator::new_with_class_style(syntax, &SYNTAXES, CLASS_STYLE);
    for line in LinesWithEndings::from(&code) {
        generator
            .parse_html_for_line_which_includes_newline(line)
            .map_err(|e| Error::Highlight(format!("{} ({})", e, syntax.name)))?;
    }
    let body = generator.finalize();

    let html = if show_line_numbers {
        let numbers = (1..=code.lines().count())
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        format!(
            "<table class=\"highlighttable\"><tr>\
             <td class=\"linenos\"><div class=\"linenodiv\"><pre>{numbers}</pre></div></td>\
             <td class=\"code\"><div class=\"highlight\"><pre>{body}</pre></div></td>\
             </tr></table>"
        )
    } else {
        format!("<div class=\"highlight\"><pre>{body}</pre></div>")
    };

    let css = css_for_theme_with_class_style(theme, CLASS_STYLE)
        .map_err(|e| Error::Highlight(format!("theme CSS generation: {e}")))?;

    Ok(Highlighted {
        html,
        css,
        background: background_color(theme),
        syntax_name: syntax.name.clone(),
    })
}
