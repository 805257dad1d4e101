//! huepath - color conversion and color difference from the command line

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "huepath")]
#[command(author, version, about = "Color conversion and color difference")]
#[command(long_about = "
Converts color values between representations and computes color
differences.

Spaces are given as a white point (d50, d65, ...) for CIE types, an RGB
preset (srgb, adobe-rgb, prophoto, ...) for the RGB family, `gray` or
`gray:<white>` for gray, and `icc:<file>` for ICC profiles.

Examples:
  huepath convert lab 50,20,-10 --to rgb
  huepath convert rgb 0.2,0.4,0.6 --space adobe-rgb --to lch-ab --to-space d50
  huepath convert xyz 0.3,0.4,0.5 --to rgb --adaptation VonKries
  huepath delta 50,2.5,0 58,24,15 --formula ciede2000
  huepath delta 50,20,30 55,25,60 --kind lch99 --formula din99
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a color to another type or space
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),

    /// Color difference between two colors
    #[command(visible_alias = "d")]
    Delta(DeltaArgs),

    /// List color types, white points and RGB presets
    #[command(visible_alias = "ls")]
    List,
}

#[derive(Args)]
struct ConvertArgs {
    /// Source color type (xyz, lab, lch-ab, rgb, hsv, cmyk, gray, ...)
    kind: String,

    /// Comma separated channel values
    #[arg(allow_hyphen_values = true)]
    values: String,

    /// Source space
    #[arg(short, long)]
    space: Option<String>,

    /// Target color type
    #[arg(short, long)]
    to: String,

    /// Target space
    #[arg(long)]
    to_space: Option<String>,

    /// Chromatic adaptation method
    #[arg(short, long, default_value = "Bradford")]
    adaptation: String,

    /// Connection space used by ICC profiles: xyz or lab
    #[arg(long, default_value = "lab")]
    pcs: String,
}

#[derive(Args)]
struct DeltaArgs {
    /// First color, comma separated
    #[arg(allow_hyphen_values = true)]
    first: String,

    /// Second color, comma separated
    #[arg(allow_hyphen_values = true)]
    second: String,

    /// Color type of both operands (lab, luv, lch-ab, lch-uv, lch99, ...)
    #[arg(short, long, default_value = "lab")]
    kind: String,

    /// Reference white of both operands
    #[arg(short, long, default_value = "d65")]
    white: String,

    /// Formula: cie76, cie94, ciede2000, cmc, din99
    #[arg(short, long, default_value = "ciede2000")]
    formula: String,

    /// CIE94 application: graphic-arts or textiles
    #[arg(long, default_value = "graphic-arts")]
    application: String,

    /// CMC l:c ratio
    #[arg(long, default_value = "1:1")]
    ratio: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Convert(args) => commands::convert::run(args, cli.verbose),
        Commands::Delta(args) => commands::delta::run(args, cli.verbose),
        Commands::List => commands::list::run(),
    }
}

/// `RUST_LOG` wins; otherwise `-v` turns on debug output for the library crates.
fn init_logging(verbose: bool) {
    let fallback = if verbose {
        "warn,huepath_convert=debug,huepath_diff=debug,huepath_cli=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
