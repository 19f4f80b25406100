//! MapStitch CLI - Command-line interface
//!
//! Fetches the aerial imagery tiles covering a bounding box and writes
//! the stitched mosaic to an image file.

use clap::Parser;
use mapstitch::coord::{MAX_DETAIL, MIN_DETAIL};
use mapstitch::grid::TileGrid;
use mapstitch::orchestrator::MosaicOrchestrator;
use mapstitch::provider::{AsyncReqwestClient, BingMapsProvider, TileProvider};
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mapstitch")]
#[command(about = "Stitch an aerial imagery mosaic for a bounding box", long_about = None)]
#[command(allow_negative_numbers = true)]
struct Args {
    /// Latitude of the first corner in decimal degrees
    lat1: f64,

    /// Longitude of the first corner in decimal degrees
    lon1: f64,

    /// Latitude of the second corner in decimal degrees
    lat2: f64,

    /// Longitude of the second corner in decimal degrees
    lon2: f64,

    /// Detail (zoom) level (1 to 23)
    #[arg(long, default_value = "17")]
    level: u8,

    /// Output image path (format from extension: .jpg/.png)
    #[arg(long, default_value = "mosaic.jpg")]
    output: String,

    /// Maximum number of concurrent tile fetches
    #[arg(long, default_value = "8")]
    parallel: usize,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    // Validate detail level
    if args.level < MIN_DETAIL || args.level > MAX_DETAIL {
        eprintln!(
            "Error: Detail level must be between {} and {}",
            MIN_DETAIL, MAX_DETAIL
        );
        process::exit(1);
    }

    // Plan the tile grid
    let grid = match TileGrid::from_corners(args.lat1, args.lon1, args.lat2, args.lon2, args.level)
    {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("Error planning tile grid: {}", e);
            process::exit(1);
        }
    };

    println!("Building mosaic for:");
    println!("  Corner A: {}, {}", args.lat1, args.lon1);
    println!("  Corner B: {}, {}", args.lat2, args.lon2);
    println!("  Detail level: {}", args.level);
    println!(
        "  Tiles: {} ({} columns × {} rows)",
        grid.tile_count(),
        grid.columns(),
        grid.rows()
    );
    println!();

    // Create HTTP client and provider
    let http_client = match AsyncReqwestClient::new() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error creating HTTP client: {}", e);
            process::exit(1);
        }
    };

    let provider = BingMapsProvider::new(http_client);
    if !provider.supports_detail(args.level) {
        eprintln!(
            "Error: {} supports detail levels {} to {}",
            provider.name(),
            provider.min_detail(),
            provider.max_detail()
        );
        process::exit(1);
    }

    println!("Using provider: {}", provider.name());
    println!(
        "Fetching {} tiles ({} in parallel)...",
        grid.tile_count(),
        args.parallel
    );

    let orchestrator = MosaicOrchestrator::new(provider, args.parallel);
    let start = std::time::Instant::now();

    let mosaic = match orchestrator.download_grid(&grid).await {
        Ok(image) => image,
        Err(e) => {
            eprintln!("Error building mosaic: {}", e);
            process::exit(1);
        }
    };

    println!(
        "Fetched and assembled in {:.2}s",
        start.elapsed().as_secs_f64()
    );
    println!("Mosaic size: {}×{}", mosaic.width(), mosaic.height());

    // JPEG has no alpha channel, so always write RGB
    let rgb = image::DynamicImage::ImageRgba8(mosaic).to_rgb8();
    if let Err(e) = rgb.save(&args.output) {
        eprintln!("Error writing {}: {}", args.output, e);
        process::exit(1);
    }

    println!("Wrote {}", args.output);
}
