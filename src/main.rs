use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ditherme::models::{AppConfig, DuotoneConfig, CONFIG_ENV};
use ditherme::server;
use ditherme::services::{dither_image_with, DitherOptions};

#[derive(Parser)]
#[command(name = "ditherme")]
#[command(about = "DitherMe - classic black-and-white dithering for PNG images")]
struct Cli {
    /// YAML configuration file (defaults to $DITHERME_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Dither a PNG file
    Dither(DitherArgs),
    /// List available algorithms
    List,
    /// Start the HTTP server
    Serve {
        /// Listen address (overrides config)
        #[arg(short, long)]
        bind: Option<String>,
    },
}

#[derive(Args)]
struct DitherArgs {
    /// Input PNG file path
    #[arg(short, long)]
    input: PathBuf,

    /// Output PNG file path
    #[arg(short, long)]
    output: PathBuf,

    /// Algorithm name or alias (see `ditherme list`)
    #[arg(short, long)]
    algorithm: Option<String>,

    /// Contrast factor around the mean luma
    #[arg(long)]
    contrast: Option<f32>,

    /// Gamma applied before dithering
    #[arg(long)]
    midtones: Option<f32>,

    /// Gain applied after the gamma curve
    #[arg(long)]
    highlights: Option<f32>,

    /// Gaussian blur sigma
    #[arg(long)]
    blur: Option<f32>,

    /// Dither at this percent of the original size, then scale back
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=100))]
    scale: Option<u32>,

    /// Pixelation block size
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pixelation: Option<u32>,

    /// Noise amplitude (0-255)
    #[arg(long)]
    noise: Option<u8>,

    /// Seed for reproducible noise
    #[arg(long)]
    seed: Option<u64>,

    /// Convert to grayscale before dithering
    #[arg(long)]
    grayscale: bool,

    /// Foreground color for bright pixels, e.g. "#ffffff"
    #[arg(long)]
    foreground: Option<String>,

    /// Background color for dark pixels, e.g. "#000000"
    #[arg(long)]
    background: Option<String>,

    /// Foreground opacity (0-255)
    #[arg(long)]
    foreground_opacity: Option<u8>,

    /// Background opacity (0-255)
    #[arg(long)]
    background_opacity: Option<u8>,

    /// Recompress the output with oxipng
    #[arg(long)]
    optimize: bool,
}

impl DitherArgs {
    /// Merge command-line values over the configured defaults.
    fn options(&self, config: &AppConfig) -> DitherOptions {
        let mut options = DitherOptions::from_config(config);
        let adjust = &mut options.adjust;
        if let Some(v) = self.contrast {
            adjust.contrast = v;
        }
        if let Some(v) = self.midtones {
            adjust.midtones = v;
        }
        if let Some(v) = self.highlights {
            adjust.highlights = v;
        }
        if let Some(v) = self.blur {
            adjust.blur = v.max(0.0);
        }
        if let Some(v) = self.scale {
            adjust.scale = v;
        }
        if let Some(v) = self.pixelation {
            adjust.pixelation = v;
        }
        if let Some(v) = self.noise {
            adjust.noise = v;
        }
        if self.seed.is_some() {
            adjust.seed = self.seed;
        }
        adjust.grayscale |= self.grayscale;
        options.optimize |= self.optimize;

        let wants_duotone = self.foreground.is_some()
            || self.background.is_some()
            || self.foreground_opacity.is_some()
            || self.background_opacity.is_some();
        if wants_duotone {
            let duotone = options.duotone.get_or_insert_with(DuotoneConfig::default);
            if let Some(v) = &self.foreground {
                duotone.foreground = v.clone();
            }
            if let Some(v) = &self.background {
                duotone.background = v.clone();
            }
            if let Some(v) = self.foreground_opacity {
                duotone.foreground_opacity = v;
            }
            if let Some(v) = self.background_opacity {
                duotone.background_opacity = v;
            }
        }
        options
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Dither(args)) => run_dither_command(cli.config.as_deref(), &args),
        Some(Commands::List) => {
            run_list_command();
            Ok(())
        }
        Some(Commands::Serve { bind }) => run_server(cli.config.as_deref(), bind).await,
        None => {
            run_status_command(cli.config.as_deref());
            Ok(())
        }
    }
}

/// Minimal logging for CLI commands
fn init_cli_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ditherme=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

/// Dither a PNG file (no server needed)
fn run_dither_command(config_path: Option<&Path>, args: &DitherArgs) -> anyhow::Result<()> {
    init_cli_tracing();

    let config = AppConfig::resolve(config_path);
    let algorithm = args.algorithm.as_deref().unwrap_or(&config.algorithm);
    let options = args.options(&config);

    let input = std::fs::read(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let png_bytes = dither_image_with(&input, algorithm, &options)?;
    std::fs::write(&args.output, &png_bytes)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    println!(
        "Dithered {} with {} ({} bytes)",
        args.output.display(),
        algorithm,
        png_bytes.len()
    );
    Ok(())
}

/// Print the algorithm registry
fn run_list_command() {
    for info in ditherme::api::algorithm_list() {
        if info.aliases.is_empty() {
            println!("{:<24} {}", info.name, info.family);
        } else {
            println!(
                "{:<24} {:<16} (aliases: {})",
                info.name,
                info.family,
                info.aliases.join(", ")
            );
        }
    }
}

/// Display status and configuration information
fn run_status_command(config_path: Option<&Path>) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let env_config = std::env::var(CONFIG_ENV).ok();

    println!("DitherMe v{VERSION}");
    println!("Black-and-white dithering for PNG images\n");

    println!("Environment Variables:");
    println!(
        "  {CONFIG_ENV} = {}",
        env_config.as_deref().unwrap_or("(not set)")
    );

    let source = match (config_path, env_config.as_deref()) {
        (Some(path), _) => path.display().to_string(),
        (None, Some(path)) => path.to_string(),
        (None, None) => "built-in defaults".to_string(),
    };
    let config = AppConfig::resolve(config_path);

    println!("\nConfiguration:");
    println!("  Source:    {source}");
    println!("  Algorithm: {}", config.algorithm);
    println!("  Bind:      {}", config.server.bind);
    println!(
        "  Algorithms available: {}",
        halftone::registry::entries().len()
    );

    println!("\nCommands:");
    println!("  ditherme dither   Dither a PNG file");
    println!("  ditherme list     List available algorithms");
    println!("  ditherme serve    Start the HTTP server");
    println!("\nRun 'ditherme --help' for more details.");
}

/// Run the HTTP server
async fn run_server(config_path: Option<&Path>, bind: Option<String>) -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ditherme=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::resolve(config_path);
    let bind_addr = bind.unwrap_or_else(|| config.server.bind.clone());

    tracing::info!(
        algorithm = %config.algorithm,
        max_upload_bytes = config.server.max_upload_bytes,
        optimize = config.optimize,
        "Configuration loaded"
    );

    let app = server::build_router(server::create_app_state(config));

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {bind_addr}"))?;
    tracing::info!(addr = %bind_addr, "DitherMe server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
