use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use grade_core::AdjustmentParams;
use gradecast::api;
use gradecast::server;
use gradecast::services::codec;

#[derive(Parser)]
#[command(name = "gradecast")]
#[command(about = "Interactive color-adjustment preview server")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Apply the adjustment chain to a PNG file without starting the server
    Adjust {
        /// Input PNG file path
        #[arg(short, long)]
        input: PathBuf,

        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,

        /// Exposure in stops, -4..=4
        #[arg(long, default_value_t = 0.0)]
        exposure: f32,

        /// Brightness multiplier, 0..=2
        #[arg(long, default_value_t = 1.0)]
        brightness: f32,

        /// Contrast, 0..=3
        #[arg(long, default_value_t = 1.0)]
        contrast: f32,

        /// Gamma, 0..=5
        #[arg(long, default_value_t = 1.0)]
        gamma: f32,

        /// Shadow lift point, 0..=0.99
        #[arg(long, default_value_t = 0.0)]
        shadows: f32,

        /// Midtone gamma, 0.1..=3
        #[arg(long, default_value_t = 1.0)]
        midtones: f32,

        /// Highlight scale, 0..=2
        #[arg(long, default_value_t = 1.0)]
        highlights: f32,

        /// Hue rotation in degrees, -180..=180
        #[arg(long, default_value_t = 0.0)]
        hue: f32,

        /// Saturation multiplier, 0..=2
        #[arg(long, default_value_t = 1.0)]
        saturation: f32,

        /// Value multiplier, 0..=2
        #[arg(long, default_value_t = 1.0)]
        value: f32,

        /// Vibrance, 0..=2
        #[arg(long, default_value_t = 1.0)]
        vibrance: f32,
    },
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "gradecast API",
        description = "Interactive color-adjustment preview server",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(api::handle_preview, api::handle_commit),
    components(schemas(
        api::AdjustmentFields,
        api::PreviewResponse,
        api::CommitRequest,
        api::CommitResponse,
    )),
    tags(
        (name = "Preview", description = "Interactive preview re-rendering"),
        (name = "Commit", description = "Full-resolution image commits")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Adjust {
            input,
            output,
            exposure,
            brightness,
            contrast,
            gamma,
            shadows,
            midtones,
            highlights,
            hue,
            saturation,
            value,
            vibrance,
        }) => run_adjust_command(
            &input,
            &output,
            AdjustmentParams {
                exposure,
                brightness,
                contrast,
                gamma,
                shadows,
                midtones,
                highlights,
                hue,
                saturation,
                value,
                vibrance,
            },
        ),
        Some(Commands::Serve { port }) => run_server(port).await,
        None => run_server(3000).await,
    }
}

async fn run_server(port: u16) -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gradecast=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = server::create_app_state();
    let app = server::build_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "gradecast listening");
    axum::serve(listener, app).await?;

    Ok(())
}

fn run_adjust_command(
    input: &Path,
    output: &Path,
    params: AdjustmentParams,
) -> anyhow::Result<()> {
    let bytes = std::fs::read(input)?;
    let image = codec::decode_png(&bytes)
        .map_err(|e| anyhow::anyhow!("failed to decode {}: {e}", input.display()))?;

    let adjusted = grade_core::adjust::apply(&image, params);

    let png_bytes = codec::encode_png(&adjusted)?;
    std::fs::write(output, png_bytes)?;

    println!(
        "Wrote {}x{} adjusted image to {}",
        adjusted.width(),
        adjusted.height(),
        output.display()
    );
    Ok(())
}
