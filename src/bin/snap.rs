//! `snap` - generate beautiful images of code snippets from the terminal

use std::path::PathBuf;

use clap::Parser;
use codeshot::{Error, RenderOptions};

const EPILOG: &str = "\
Examples:
  # From stdin (pipe) - auto-detect language
  cat script.py | snap -o output.png

  # From file - language detected from extension
  snap -f script.py -o output.png

  # Explicit language and style
  echo 'print(\"hello\")' | snap -l python -t base16-ocean.dark -o hello.png

  # With custom settings
  cat code.js | snap -t InspiredGitHub --font-size 16 -m 80 -o code.png

  # No line numbers or window chrome
  snap -f code.py --no-line-numbers --no-window -o code.png

  # List all available styles
  snap --list-styles

Installation:
  snap needs Chrome or Chromium on your PATH for rendering.";

#[derive(Parser, Debug)]
#[command(
    name = "snap",
    about = "Generate beautiful images of code snippets",
    after_help = EPILOG
)]
struct Cli {
    /// Input file (if not using stdin)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Output file
    #[arg(short, long, default_value = "code.png")]
    output: PathBuf,

    /// Language for syntax highlighting (e.g. python, javascript)
    #[arg(short, long)]
    language: Option<String>,

    /// Style name (any bundled theme)
    #[arg(short = 't', long = "style", default_value = codeshot::DEFAULT_THEME)]
    style: String,

    /// List all available styles and exit
    #[arg(long)]
    list_styles: bool,

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

    /// Hide window chrome
    #[arg(long)]
    no_window: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.list_styles {
        println!("Available styles:");
        println!();
        for style in codeshot::available_themes() {
            println!("  {style}");
        }
        println!();
        println!("Usage: snap -t <style> -f <file> -o <output>");
        return;
    }

    let code = match codeshot::read_source(cli.file.as_deref()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("Try 'snap --help' for more information.");
            std::process::exit(1);
        }
    };

    let show_window = !cli.no_window;
    let opts = RenderOptions {
        language: cli.language,
        filename: cli.file,
        theme: cli.style,
        font_size: cli.font_size,
        padding: cli.padding,
        margin: cli.margin,
        show_line_numbers: !cli.no_line_numbers,
        // snap has a single window toggle: frame and dots go together
        show_frame: show_window,
        show_decorations: show_window,
        output: Some(cli.output),
        copy_to_clipboard: false,
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
