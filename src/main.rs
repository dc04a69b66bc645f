//! Fleet View CLI
//!
//! Usage:
//!   fleet-view [OPTIONS] [BODY]
//!
//! Options:
//!   -c, --config <FILE>      Site configuration (TOML format)
//!   -s, --set <KEY=VALUE>    Request property available to `${key}` placeholders
//!   -m, --map <NAME>         Map provider to describe on the page
//!   -h, --help               Print help

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use fleet_view::page::write_page;
use fleet_view::template::RequestContext;
use fleet_view::{ResponseBuffer, SiteConfig, ViewError};

#[derive(Parser)]
#[command(name = "fleet-view")]
#[command(about = "Render a decorated fleet console page")]
struct Cli {
    /// Page body file (reads from stdin if not provided)
    body: Option<PathBuf>,

    /// Site configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Request property as KEY=VALUE, may be repeated
    #[arg(short, long = "set", value_parser = parse_key_val)]
    set: Vec<(String, String)>,

    /// Map provider name (defaults to the configured one)
    #[arg(short, long)]
    map: Option<String>,
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{s}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty key in '{s}'"));
    }
    Ok((key.to_string(), value.to_string()))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path),
        None => SiteConfig::default(),
    };

    let body = match &cli.body {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    process::exit(1);
                }
            }
        }
    };

    let mut ctx: RequestContext = cli.set.into_iter().collect();
    let map_name = cli.map.or_else(|| config.maps.default.clone());

    if let Err(e) = render(&config, &mut ctx, map_name.as_deref(), &body) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn load_config(path: &Path) -> SiteConfig {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error loading config '{}': {}", path.display(), e);
            process::exit(1);
        }
    };
    match SiteConfig::from_str(&source) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e.format(&source, &path.display().to_string()));
            process::exit(1);
        }
    }
}

/// Describe the chosen map provider in the context, then render the page to stdout
fn render(
    config: &SiteConfig,
    ctx: &mut RequestContext,
    map_name: Option<&str>,
    body: &str,
) -> Result<(), ViewError> {
    if let Some(name) = map_name {
        let factory = config.build_map_factory();
        let provider = factory.try_get_map_provider(name)?;
        ctx.set("mapProvider", provider.name());
        let size = provider
            .dimension()
            .map(|d| d.to_string())
            .unwrap_or_else(|| "fill".to_string());
        ctx.set("mapSize", size);
    }

    let decor = config.build_decorations();
    let mut response = ResponseBuffer::new();
    response.set_content_type("text/html; charset=UTF-8");
    write_page(&decor, &*ctx, body, &mut response.output_stream()?)?;
    io::stdout().write_all(&response.into_bytes())?;
    Ok(())
}
