use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use color_eyre::Result;

use code_tooltip::config::{self, Config};
use code_tooltip::{AnnotationCache, SourceBlock, TooltipPlugin};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Html,
    Json,
}

/// Annotate a code block read from stdin with keyword tooltips
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Config file (defaults to ~/.config/code-tooltip/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Block metadata; defaults to the configured marker
    #[arg(short, long)]
    meta: Option<String>,

    /// Print the base styles and exit
    #[arg(long)]
    styles: bool,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Html)]
    format: OutputFormat,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init();

    let args = Args::parse();

    let config: Config = match &args.config {
        Some(path) => config::load_config_from_path(path)?,
        None => config::load_config()?,
    };
    let plugin = TooltipPlugin::from_config(&config)?;

    if args.styles {
        print!("{}", plugin.base_styles());
        return Ok(());
    }

    let mut code = String::new();
    io::stdin().read_to_string(&mut code)?;

    let meta = args.meta.unwrap_or_else(|| plugin.marker().to_string());
    let mut block = SourceBlock::new(meta, &code);
    let mut cache = AnnotationCache::new();
    plugin.preprocess_code(&mut block, &mut cache);

    match args.format {
        OutputFormat::Html => println!("{}", block.to_html()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(block.lines())?),
    }

    Ok(())
}
