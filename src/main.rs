//! CV Renderer CLI
//!
//! Usage:
//!   cv-renderer [OPTIONS] [FILE]
//!
//! Options:
//!   --template <ID>          Override the record's template
//!   --format <FORMAT>        Output format: html, json or outline
//!   -s, --stylesheet <FILE>  Stylesheet file for the neutral palette (TOML format)
//!   --fragment               Emit HTML without the surrounding document
//!   --allow-mismatch         Render even if template and language disagree
//!   --list-templates         List the template catalog
//!   -h, --help               Print help

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cv_renderer::renderer::render_html;
use cv_renderer::{
    render_with_config, HtmlConfig, RenderConfig, Resume, Stylesheet, TemplateRef,
    TemplateRegistry,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Print-ready HTML page
    Html,
    /// The visual tree as JSON
    Json,
    /// Indented outline of roles and keys
    Outline,
}

#[derive(Parser)]
#[command(name = "cv-renderer")]
#[command(about = "Bilingual résumé renderer with twenty templates")]
struct Cli {
    /// Record file, TOML or JSON by extension (reads JSON from stdin if not provided)
    input: Option<PathBuf>,

    /// Template id to use instead of the record's own
    #[arg(long, value_name = "ID")]
    template: Option<String>,

    #[arg(long, value_enum, default_value_t = Format::Html)]
    format: Format,

    /// Stylesheet file for the neutral palette (TOML format)
    #[arg(short, long)]
    stylesheet: Option<PathBuf>,

    /// Emit an HTML fragment instead of a full page
    #[arg(long)]
    fragment: bool,

    /// Render even when the template belongs to the other language
    #[arg(long)]
    allow_mismatch: bool,

    /// List every template and exit
    #[arg(long)]
    list_templates: bool,

    /// Debug mode: print the tree outline to stderr
    #[arg(short, long)]
    debug: bool,

    /// Log template resolution to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    if cli.list_templates {
        print_templates();
        return;
    }

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    // Load stylesheet
    let stylesheet = match &cli.stylesheet {
        Some(path) => match Stylesheet::from_file(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error loading stylesheet '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Stylesheet::default(),
    };

    // Read record
    let loaded = match &cli.input {
        Some(path) => Resume::from_file(path),
        None => {
            let mut buffer = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buffer) {
                eprintln!("Error reading from stdin: {}", e);
                std::process::exit(1);
            }
            Resume::from_json_str(&buffer)
        }
    };
    let mut resume = match loaded {
        Ok(resume) => resume,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // Typed on the command line, so case and padding are forgiven here only
    if let Some(id) = &cli.template {
        resume.template = TemplateRef::parse(&id.trim().to_ascii_uppercase());
    }

    if !cli.allow_mismatch {
        if let Err(e) = resume.validate() {
            eprintln!("Error: {}", e);
            eprintln!("Pass --allow-mismatch to render anyway.");
            std::process::exit(1);
        }
    }

    let config = RenderConfig::new()
        .with_stylesheet(stylesheet)
        .with_html(HtmlConfig::new().with_standalone(!cli.fragment))
        .with_debug(cli.debug);
    let document = render_with_config(&resume, &config);

    match cli.format {
        Format::Html => print!("{}", render_html(&document, &config.html, &config.stylesheet)),
        Format::Outline => print!("{}", document.outline()),
        Format::Json => match serde_json::to_string_pretty(&document) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
    }
}

/// Install a stderr subscriber; `RUST_LOG` wins over `--verbose`
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("cv_renderer={}", level))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn print_templates() {
    println!(
        "{:<18} {:<4} {:<10} {:<14} NAME",
        "ID", "LANG", "CATEGORY", "ARCHETYPE"
    );
    for (id, config) in TemplateRegistry::new().entries() {
        let archetype = config.archetype();
        println!(
            "{:<18} {:<4} {:<10} {:<14} {}",
            id.as_str(),
            id.language().code(),
            id.category().as_str(),
            archetype.as_str(),
            id.display_name()
        );
    }
}

fn print_intro() {
    println!(
        r#"CV Renderer - Bilingual résumé renderer

USAGE:
    cv-renderer [OPTIONS] [FILE]
    cat resume.json | cv-renderer

OPTIONS:
    --template <ID>       Override the record's template (unknown ids fall back)
    --format <FORMAT>     html (default), json or outline
    -s, --stylesheet      Custom neutral palette (TOML file)
    --fragment            HTML without <head>, for embedding
    --allow-mismatch      Render an Arabic template for an English record, or vice versa
    --list-templates      Show every template id
    -d, --debug           Print the tree outline to stderr
    -v, --verbose         Log template resolution
    -h, --help            Print help

QUICK START:
    echo '{{"fullName": "Ahmed Ali", "language": "ar", "templateId": "AR_ATS"}}' | cv-renderer > cv.html

This renders a right-to-left single-column page ready to print to A4."#
    );
}
