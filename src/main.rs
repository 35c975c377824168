//! Logo Maker CLI
//!
//! Usage:
//!   logo-maker [OPTIONS]
//!
//! Options:
//!   -s, --spec <FILE>    Read the logo from a TOML file instead of prompting
//!   -o, --output <FILE>  SVG output path [default: logo.svg]
//!   --png <FILE>         Also write the raster canvas as PNG
//!   -h, --help           Print help

use std::path::PathBuf;

use clap::Parser;

use logo_maker::output::{self, DEFAULT_SVG_PATH};
use logo_maker::{prompt, render, LogoError, LogoSpec};

#[derive(Parser)]
#[command(name = "logo-maker")]
#[command(about = "Render a three-character logo to SVG")]
struct Cli {
    /// Logo spec file (TOML); prompts interactively if not provided
    #[arg(short, long)]
    spec: Option<PathBuf>,

    /// SVG output file
    #[arg(short, long, default_value = DEFAULT_SVG_PATH)]
    output: PathBuf,

    /// Also write the raster canvas as a PNG file
    #[arg(long)]
    png: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        log::error!("run failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), LogoError> {
    let spec = match &cli.spec {
        Some(path) => LogoSpec::from_file(path)?,
        None => prompt::collect_from_terminal()?,
    };
    log::info!("rendering {:?}", spec);

    let logo = render(&spec)?;

    output::write_svg(&cli.output, &logo.svg)?;
    println!("Generated {}", cli.output.display());

    if let Some(png) = &cli.png {
        output::write_png(png, &logo.raster)?;
        println!("Generated {}", png.display());
    }

    Ok(())
}
