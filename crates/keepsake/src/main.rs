//! Chess keepsake command-line tool.
//!
//! # Commands
//!
//! - `keepsake qr <LINK>` - write the extruded QR plaque
//! - `keepsake board <FEN>` - write the board with pieces placed
//! - `keepsake compose <BOARD> <PLAQUE>` - register a plaque STL onto a board STL
//! - `keepsake build <LINK> <FEN>` - all of the above in one go
//!
//! Set `RUST_LOG` to control log output (default `info`).

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use keepsake::{
    KeepsakeConfig, build_board, build_keepsake, build_qr_plaque, compose_files, ensure_parent_dir,
};
use tracing_subscriber::EnvFilter;

/// Turn a game link and a chess position into one printable model.
#[derive(Parser)]
#[command(name = "keepsake")]
#[command(about = "Generate chess keepsake STL models", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory containing board.stl and pieces/
    #[arg(long, global = true)]
    assets: Option<PathBuf>,

    /// Write ASCII STL instead of binary
    #[arg(long, global = true)]
    ascii: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a link and write the extruded QR plaque
    Qr {
        /// Text to encode
        link: String,

        /// Output STL
        #[arg(short, long, default_value = "qrcode.stl")]
        output: PathBuf,
    },

    /// Place a FEN position on the board and write it
    Board {
        /// FEN string; only the piece-placement field is used
        fen: String,

        /// Output STL
        #[arg(short, long, default_value = "chessMoment.stl")]
        output: PathBuf,
    },

    /// Register an existing plaque STL onto an existing board STL
    Compose {
        /// Board (with pieces) STL
        board: PathBuf,

        /// QR plaque STL
        plaque: PathBuf,

        /// Output STL (default: config output)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Build the full keepsake model
    Build {
        /// Text to encode
        link: String,

        /// FEN string
        fen: String,

        /// Output STL (default: config output)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also write the bare QR plaque here
        #[arg(long)]
        qr_output: Option<PathBuf>,

        /// Also write the board with pieces here
        #[arg(long)]
        board_output: Option<PathBuf>,
    },
}

fn load_config(cli: &Cli) -> Result<KeepsakeConfig> {
    let mut config = match &cli.config {
        Some(path) => KeepsakeConfig::load(path)?,
        None => KeepsakeConfig::default(),
    };
    if let Some(assets) = &cli.assets {
        config.assets_dir.clone_from(assets);
    }
    if cli.ascii {
        config.binary_stl = false;
    }
    config.validate().context("invalid configuration")?;
    Ok(config)
}

fn run(command: Commands, mut config: KeepsakeConfig) -> Result<()> {
    match command {
        Commands::Qr { link, output } => {
            ensure_parent_dir(&output)?;
            config.qr_output = Some(output.clone());
            let plaque = build_qr_plaque(&link, &config).context("failed to build QR plaque")?;
            println!("{}: {} triangles", output.display(), plaque.faces.len());
        }
        Commands::Board { fen, output } => {
            ensure_parent_dir(&output)?;
            config.board_output = Some(output.clone());
            let report = build_board(&fen, &config).context("failed to place pieces")?;
            println!("{}: {report}", output.display());
        }
        Commands::Compose {
            board,
            plaque,
            output,
        } => {
            if let Some(output) = output {
                config.output = output;
            }
            ensure_parent_dir(&config.output)?;
            let composition = compose_files(&board, &plaque, &config).context("failed to compose")?;
            println!("{}: {composition}", config.output.display());
        }
        Commands::Build {
            link,
            fen,
            output,
            qr_output,
            board_output,
        } => {
            if let Some(output) = output {
                config.output = output;
            }
            config.qr_output = qr_output.or(config.qr_output);
            config.board_output = board_output.or(config.board_output);
            config.create_output_dirs()?;
            let summary = build_keepsake(&link, &fen, &config).context("failed to build keepsake")?;
            println!("{summary}");
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    run(cli.command, config)
}
