//! `snatch` - generate presentable images of code snippets from the terminal
//!
//! Variant of `snap` that separates the window frame from its dot
//! decorations and can copy the result straight to the clipboard.

use std::path::PathBuf;

use clap::Parser;
use codeshot::{Error, RenderOptions};

const EPILOG: &str = "\
Examples:
  # From stdin (pipe) - auto-detect language
  cat script.py | snatch -o output.png

  # Straight to the clipboard, no file
  cat script.py | snatch -c

  # Explicit language and theme
  echo 'print(\"hello\")' | snatch -l python -t base16-ocean.dark -o hello.png

  # With custom settings
  cat code.js | snatch -t InspiredGitHub --font-size 16 -m 80 -o code.png

  # No line numbers or window chrome
  snatch -f code.py --no-line-numbers --no-chrome -o code.png

  # List all available themes
  snatch --list-themes

Installation:
  snatch needs Chrome or Chromium on your PATH for rendering.";

#[derive(Parser, Debug)]
#[command(
    name = "snatch",
    about = "Generate presentable images of code snippets",
    after_help = EPILOG
)]
struct Cli {
    /// Input file (if not using stdin)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Output file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Copy the image to the system clipboard
    #[arg(short, long)]
    copy: bool,

    /// Language for syntax highlighting (e.g. python, javascript)
    #[arg(short, long)]
    language: Option<String>,

    /// Theme name (any bundled theme)
    #[arg(short = 't', long = "theme", default_value = codeshot::DEFAULT_THEME)]
    theme: String,

    /// List all available themes and exit
    #[arg(long)]
    list_themes: bool,

    /// Font size in pixels
    #[arg(long, default_value_t = 12)]
    font_size: u32,

    /// Padding inside window in pixels
    #[arg(short, long, default_value_t = 20)]
    padding: u32,

    /// Margin around window in pixels
    #[arg(short, long, default_value_t = 40)]
    margin: u32,

    /// Hide line numbers
    #[arg(long)]
    no_line_numbers: bool,

    /// Hide the colored window bar
    #[arg(long)]
    no_chrome: bool,

    /// Hide the window decorations (the three dots)
    #[arg(long)]
    no_decorations: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.list_themes {
        println!("Available themes:");
        println!();
        for theme in codeshot::available_themes() {
            println!("  {theme}");
        }
        println!();
        println!("Usage: snatch -t <theme> -f <file> -o <output>");
        return;
    }

    if cli.output.is_none() && !cli.copy {
        eprintln!("Error: No output method specified. Use -o for file output or -c to copy to clipboard.");
        eprintln!("Try 'snatch --help' for more information.");
        std::process::exit(1);
    }

    let code = match codeshot::read_source(cli.file.as_deref()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("Try 'snatch --help' for more information.");
            std::process::exit(1);
        }
    };

    let opts = RenderOptions {
        language: cli.language,
        filename: cli.file,
        theme: cli.theme,
        font_size: cli.font_size,
        padding: cli.padding,
        margin: cli.margin,
        show_line_numbers: !cli.no_line_numbers,
        show_frame: !cli.no_chrome,
        show_decorations: !cli.no_decorations,
        output: cli.output,
        copy_to_clipboard: cli.copy,
    };

    if let Err(e) = codeshot::generate(&code, &opts) {
        eprintln!("Error generating image: {e}");
        if matches!(e, Error::Render(_)) {
            eprintln!();
            eprintln!("{}", codeshot::INSTALL_HINT);
        }
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_surface() {
        let cli = Cli::try_parse_from(["snatch"]).unwrap();
        assert!(cli.file.is_none());
        assert!(cli.output.is_none());
        assert!(!cli.copy);
        assert!(cli.language.is_none());
        assert_eq!(cli.theme, codeshot::DEFAULT_THEME);
        assert!(!cli.list_themes);
        assert_eq!(cli.font_size, 12);
        assert_eq!(cli.padding, 20);
        assert_eq!(cli.margin, 40);
        assert!(!cli.no_line_numbers);
        assert!(!cli.no_chrome);
        assert!(!cli.no_decorations);
    }

    #[test]
    fn theme_flag_has_short_and_long_forms() {
        let short = Cli::try_parse_from(["snatch", "-t", "InspiredGitHub"]).unwrap();
        let long = Cli::try_parse_from(["snatch", "--theme", "InspiredGitHub"]).unwrap();
        assert_eq!(short.theme, "InspiredGitHub");
        assert_eq!(long.theme, short.theme);
    }

    #[test]
    fn copy_flag_short_and_long_forms() {
        assert!(Cli::try_parse_from(["snatch", "-c"]).unwrap().copy);
        assert!(Cli::try_parse_from(["snatch", "--copy"]).unwrap().copy);
    }

    #[test]
    fn every_flag_parses() {
        let cli = Cli::try_parse_from([
            "snatch",
            "-f",
            "script.py",
            "-o",
            "out.png",
            "-c",
            "-l",
            "python",
            "--font-size",
            "16",
            "-p",
            "32",
            "-m",
            "64",
            "--no-line-numbers",
            "--no-chrome",
            "--no-decorations",
            "--list-themes",
        ])
        .unwrap();
        assert_eq!(cli.file.as_deref(), Some(std::path::Path::new("script.py")));
        assert_eq!(cli.output, Some(PathBuf::from("out.png")));
        assert!(cli.copy);
        assert_eq!(cli.language.as_deref(), Some("python"));
        assert_eq!(cli.font_size, 16);
        assert_eq!(cli.padding, 32);
        assert_eq!(cli.margin, 64);
        assert!(cli.no_line_numbers);
        assert!(cli.no_chrome);
        assert!(cli.no_decorations);
        assert!(cli.list_themes);
    }

    #[test]
    fn snap_only_flags_are_rejected() {
        assert!(Cli::try_parse_from(["snatch", "--no-window"]).is_err());
        assert!(Cli::try_parse_from(["snatch", "--style", "x"]).is_err());
    }
}
