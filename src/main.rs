#![doc = include_str!("../README.md")]

use clap::Parser;
use core::error::Error;
use domlet::{
    CreationOutput, Document, DocumentConfig, Metrics, RenderFormat, RenderOptions,
    compile_config, read_config, render_creation,
};
use log::{LevelFilter, info};
use std::{path::PathBuf, process::exit};
use tabled::{
    Table,
    settings::{Color, Style, themes::Colorization},
};
use tokio::io::{AsyncWriteExt, stdout};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Arguments {
    /// Element names.
    #[arg(required(true))]
    names: Vec<String>,
    /// Uses a configuration file.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Creates elements without failing on malformed names.
    #[arg(long)]
    unchecked: bool,
    /// Sets a value on elements created with `--unchecked`.
    #[arg(long, requires = "unchecked")]
    value: bool,
    /// Sets an output format.
    #[arg(long, default_value = "text")]
    format: RenderFormat,
    /// Becomes verbose.
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("{error}");
        exit(1)
    }
}

async fn run() -> Result<(), Box<dyn Error>> {
    let Arguments {
        names,
        config,
        unchecked,
        value,
        format,
        verbose,
    } = Arguments::parse();

    env_logger::Builder::new()
        .filter_level(if verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        })
        .parse_default_env()
        .init();

    let config = if let Some(path) = &config {
        info!("reading configuration from {}", path.display());
        compile_config(read_config(path).await?)?
    } else {
        DocumentConfig::default()
    };
    let document = Document::with_config(config)?;
    let options = RenderOptions::new()
        .set_format(format)
        .set_verbose(verbose);
    let mut output = stdout();
    let mut metrics = Metrics::default();

    for name in names {
        let result = if unchecked {
            Ok(document.create_element_with_value(&name, value))
        } else {
            document.create_element(&name)
        };

        metrics.add(result.is_err());
        render_creation(&CreationOutput::new(name, result), &options, &mut output).await?;
    }

    output.flush().await?;

    eprintln!();
    eprintln!("{}", render_summary(&metrics, document.unchecked_count()));

    if metrics.has_error() {
        Err(domlet::Error::Creation(metrics.error()).into())
    } else {
        Ok(())
    }
}

fn render_summary(metrics: &Metrics, unchecked: usize) -> Table {
    let mut table = Table::from_iter(
        [vec![
            "item".to_string(),
            "created".into(),
            "rejected".into(),
            "unchecked".into(),
            "total".into(),
        ]]
        .into_iter()
        .chain([vec![
            "element".into(),
            metrics.success().to_string(),
            metrics.error().to_string(),
            unchecked.to_string(),
            metrics.total().to_string(),
        ]]),
    );

    table.with(Style::markdown()).with(Colorization::columns([
        Color::FG_WHITE,
        Color::FG_GREEN,
        Color::FG_RED,
        Color::FG_YELLOW,
        Color::FG_WHITE,
    ]));

    table
}
