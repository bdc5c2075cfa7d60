//! sage-highlight - highlight a source file in the terminal

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use crossterm::style::{self, Attribute, ContentStyle, StyledContent, Stylize};
use crossterm::QueueableCommand;

use sage_highlight::config::Config;
use sage_highlight::content::{ContentSource, FsContentSource};
use sage_highlight::syntax::{Color, GrammarRegistry, Selection, Style, Theme};
use sage_highlight::{logging, ChangeOrigin, DocumentHighlighter, LanguageId, Result};

#[derive(Parser, Debug)]
#[command(name = "sage-highlight", version, about = "Highlight a source file in the terminal")]
struct Args {
    /// File to highlight
    #[arg(required_unless_present = "list")]
    file: Option<PathBuf>,

    /// Language id, overriding the file extension (html, css, js, py, php, java)
    #[arg(short, long)]
    lang: Option<String>,

    /// Config file (default: ~/.sage-highlight.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the classified runs instead of styled text
    #[arg(long)]
    spans: bool,

    /// List a directory with the language of each file
    #[arg(long, value_name = "DIR", conflicts_with = "file")]
    list: Option<PathBuf>,
}

fn main() {
    logging::init();
    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let source = FsContentSource;

    if let Some(dir) = &args.list {
        return list(&source, dir);
    }
    let Some(path) = &args.file else {
        return Ok(());
    };

    let text = source.read(path)?;
    let language = match &args.lang {
        Some(lang) => LanguageId::parse(lang),
        None => LanguageId::from_file_name(path),
    };

    let registry = Arc::new(GrammarRegistry::with_builtins()?);
    let mut highlighter = DocumentHighlighter::new(registry, language, config.debounce());
    highlighter.set_enabled(config.enabled);

    let now = Instant::now();
    highlighter.on_buffer_changed(text, language, Selection::caret(0), ChangeOrigin::Opened, now);
    let Some(update) = highlighter.poll(now) else {
        return Ok(());
    };

    let mut out = io::stdout().lock();
    if args.spans {
        for run in update.attributed.runs() {
            writeln!(out, "{}..{}\t{}", run.start, run.end, run.classification.name())?;
        }
    } else {
        let theme = config.theme();
        print_styled(&mut out, &update.attributed.segments(), &theme)?;
    }
    out.flush()?;
    Ok(())
}

fn list(source: &impl ContentSource, dir: &Path) -> Result<()> {
    let mut out = io::stdout().lock();
    for item in source.list(dir)? {
        if item.is_dir {
            writeln!(out, "{}/", item.name)?;
        } else {
            writeln!(out, "{}\t{}\t{}", item.name, item.size, item.kind_name())?;
        }
    }
    Ok(())
}

fn print_styled(
    out: &mut impl Write,
    segments: &[(&str, Option<sage_highlight::syntax::Classification>)],
    theme: &Theme,
) -> Result<()> {
    for (piece, classification) in segments {
        let style = theme.style(*classification);
        if style.is_default() {
            write!(out, "{}", piece)?;
        } else {
            out.queue(style::PrintStyledContent(styled(piece, style)))?;
        }
    }
    Ok(())
}

fn styled<'a>(piece: &'a str, style: Style) -> StyledContent<&'a str> {
    let mut content = StyledContent::new(ContentStyle::new(), piece);
    if let Some(fg) = term_color(style.fg) {
        content = content.with(fg);
    }
    if let Some(bg) = term_color(style.bg) {
        content = content.on(bg);
    }
    if style.bold {
        content = content.attribute(Attribute::Bold);
    }
    if style.italic {
        content = content.attribute(Attribute::Italic);
    }
    if style.underline {
        content = content.attribute(Attribute::Underlined);
    }
    content
}

fn term_color(color: Color) -> Option<style::Color> {
    let color = match color {
        Color::Default => return None,
        Color::Black => style::Color::Black,
        Color::Red => style::Color::DarkRed,
        Color::Green => style::Color::DarkGreen,
        Color::Yellow => style::Color::DarkYellow,
        Color::Blue => style::Color::DarkBlue,
        Color::Magenta => style::Color::DarkMagenta,
        Color::Cyan => style::Color::DarkCyan,
        Color::White => style::Color::Grey,
        Color::BrightBlack => style::Color::DarkGrey,
        Color::BrightRed => style::Color::Red,
        Color::BrightGreen => style::Color::Green,
        Color::BrightYellow => style::Color::Yellow,
        Color::BrightBlue => style::Color::Blue,
        Color::BrightMagenta => style::Color::Magenta,
        Color::BrightCyan => style::Color::Cyan,
        Color::BrightWhite => style::Color::White,
        Color::Rgb(r, g, b) => style::Color::Rgb { r, g, b },
    };
    Some(color)
}
