use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use indexed_palette::{ChannelEdit, PaletteFormat, Session};
use twobit::models::{slug, ExportConfig, NamedPalette};
use twobit::services::{open_session, Exporter};

#[derive(Parser)]
#[command(name = "twobit")]
#[command(about = "Recolor four-color pixel art and export its palette")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Quantize an image and print its four palette entries
    Inspect {
        /// Source PNG with exactly four colors
        image: PathBuf,
    },
    /// Quantize, recolor and write palette files
    Export {
        /// Source PNG with exactly four colors
        image: PathBuf,

        /// Output directory for palette files
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,

        /// Format to export (repeatable): png, png-1, png-8, png-32, pal,
        /// photoshop-ase, paint, gimp, hex
        #[arg(short, long = "format")]
        formats: Vec<String>,

        /// Channel edit (repeatable), e.g. "2:s=40" or "4:v="
        #[arg(short, long = "edit")]
        edits: Vec<String>,

        /// Named palette: JSON file or name looked up in the palette directory
        #[arg(short, long)]
        palette: Option<String>,

        /// Also write the recolored image to this path
        #[arg(long)]
        recolored: Option<PathBuf>,

        /// YAML configuration file (default: $TWOBIT_CONFIG)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// List export format identifiers
    Formats,
    /// Print the lookup key for a palette name
    Slug {
        /// Palette name, e.g. "Ice Cream GB"
        query: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "twobit=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    match cli.command {
        Commands::Inspect { image } => run_inspect_command(&image),
        Commands::Export {
            image,
            out_dir,
            formats,
            edits,
            palette,
            recolored,
            config,
        } => run_export_command(
            &image,
            out_dir,
            formats,
            edits,
            palette,
            recolored.as_deref(),
            config.as_deref(),
        ),
        Commands::Formats => {
            run_formats_command();
            Ok(())
        }
        Commands::Slug { query } => {
            println!("{}", slug(&query));
            Ok(())
        }
    }
}

/// Print index, HSV, hex and CSS color of every entry
fn run_inspect_command(image: &Path) -> anyhow::Result<()> {
    let session = open_session(image)?;
    print_palette(&session);
    Ok(())
}

fn print_palette(session: &Session) {
    let counts = session.image().histogram();
    for (entry, pixels) in session.palette().iter().zip(counts) {
        let c = entry.color;
        println!(
            "{}  hsv({}, {}%, {}%)  #{}  {}  {} px",
            entry.index,
            c.h,
            c.s,
            c.v,
            c.to_hex(),
            c.to_hsl().to_css(),
            pixels
        );
    }
}

/// Quantize, apply named palette and edits, write exports
fn run_export_command(
    image: &Path,
    out_dir: PathBuf,
    cli_formats: Vec<String>,
    cli_edits: Vec<String>,
    cli_palette: Option<String>,
    recolored: Option<&Path>,
    config_path: Option<&Path>,
) -> anyhow::Result<()> {
    let mut config = ExportConfig::load(config_path)?;
    if !cli_formats.is_empty() {
        config.formats = cli_formats;
    }
    if cli_palette.is_some() {
        config.palette = cli_palette;
    }
    config.edits.extend(cli_edits);

    let formats: Vec<PaletteFormat> = config.resolve_formats()?;
    let edits: Vec<ChannelEdit> = config.parse_edits()?;

    let mut session = open_session(image)?;

    if let Some(query) = config.palette.as_deref() {
        let named = NamedPalette::locate(query, &config.palette_dir)?;
        println!("{} {}", named.name, named.byline());
        named.apply(&mut session)?;
    }
    for edit in &edits {
        session.apply_edit(edit)?;
    }

    let exporter = Exporter::from_config(&config, out_dir);
    for file in exporter.export(&session, &formats)? {
        println!("Wrote {} ({} bytes)", file.path.display(), file.bytes);
    }
    if let Some(path) = recolored {
        let file = exporter.write_recolored(&session, path)?;
        println!("Wrote {} ({} bytes)", file.path.display(), file.bytes);
    }

    print_palette(&session);
    Ok(())
}

fn run_formats_command() {
    for format in PaletteFormat::menu() {
        println!("{:<14} .{}", format.to_string(), format.extension());
    }
}
