//! replymark - render assistant replies as HTML

use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use replymark_config::{Config, RenderSettings};
use replymark_engine::{
    HtmlOptions, HtmlRenderer, InlineFormatter, InlineOptions, Reply, Row, RowsRenderer,
    parse_document,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// HTML fragment
    Html,
    /// Flat key/value rows as JSON
    Rows,
    /// Parsed block tree as JSON
    Blocks,
}

#[derive(Parser)]
#[command(name = "replymark")]
#[command(version, about = "Render loosely formatted assistant replies as safe HTML", long_about = None)]
#[command(after_help = "EXAMPLES:
    replymark reply.md                   Render a reply to HTML on stdout
    replymark --json payload.json        Render the reply text of a JSON payload
    cat reply.md | replymark -f rows     Print flat rows as JSON")]
struct Cli {
    /// Reply file to read (stdin when omitted)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Treat the input as a JSON reply payload
    #[arg(long)]
    json: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Html)]
    format: Format,

    /// Config file (defaults to ~/.config/replymark/config.toml)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write output here instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Log debug output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    log::debug!("Config path: {}", config_path.display());
    let config = match Config::load_from_path(&config_path)? {
        Some(config) => config,
        None => {
            log::debug!("No config file found, using defaults");
            Config::default()
        }
    };

    let source = read_input(cli.input.as_deref())?;
    let rendered = run(&source, cli.json, cli.format, &config.render)?;

    match cli.output.or(config.output_path) {
        Some(path) => {
            fs::write(&path, rendered)
                .with_context(|| format!("Failed to write output to {}", path.display()))?;
            log::info!("Wrote {}", path.display());
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input from {}", path.display())),
        None => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .context("Failed to read input from stdin")?;
            Ok(source)
        }
    }
}

fn html_options(settings: &RenderSettings) -> HtmlOptions {
    HtmlOptions {
        empty_placeholder: settings.empty_placeholder.clone(),
        code_labels: settings.code_labels,
        inline: InlineOptions {
            external_links: settings.external_links,
        },
    }
}

fn rows_renderer(settings: &RenderSettings) -> RowsRenderer {
    RowsRenderer::new(
        settings.long_value_threshold,
        settings.empty_placeholder.as_str(),
        InlineFormatter::new(html_options(settings).inline),
    )
}

/// Renders `source` in the requested format.
///
/// With `json`, the source is decoded as a reply payload first. Its metadata
/// rows are appended in `rows` format and logged otherwise.
fn run(source: &str, json: bool, format: Format, settings: &RenderSettings) -> Result<String> {
    let (text, metadata) = if json {
        let reply = Reply::from_json_str_with_threshold(source, settings.long_value_threshold)?;
        (reply.text, reply.metadata)
    } else {
        (source.to_string(), Vec::new())
    };

    let doc = parse_document(&text);
    let output = match format {
        Format::Html => HtmlRenderer::new(html_options(settings)).render(&doc.blocks),
        Format::Blocks => serde_json::to_string_pretty(&doc.blocks)?,
        Format::Rows => {
            let mut rows = rows_renderer(settings).render(&doc.blocks);
            rows.extend(metadata.iter().cloned());
            serde_json::to_string_pretty(&rows)?
        }
    };

    if format != Format::Rows {
        log_metadata(&metadata);
    }
    Ok(output)
}

fn log_metadata(metadata: &[Row]) {
    for row in metadata {
        log::info!("{}: {}", row.key, row.value);
    }
}
