use chromascale::io::{chart_file_name, load_rgb_image, resized_file_name, save_chart, save_grid};
use chromascale::{process_image, ChartLayout, Interpolation, PipelineConfig, ScaleFactor};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

const SCHEMA_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.schema.json"));
const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "ChromaScale CLI: resize an image and chart its RGB histograms")]
struct Cli {
    /// Path to an optional JSON configuration file.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Input image; overrides `image_path` from the config.
    #[arg(short, long, value_name = "FILE")]
    image: Option<PathBuf>,
    /// Scale factor as a decimal string; overrides `scale` from the config.
    #[arg(short, long)]
    scale: Option<String>,
    /// Output directory; overrides `output_dir` from the config.
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,
    /// Print the JSON schema and exit.
    #[arg(long)]
    print_schema: bool,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum InterpolationConfig {
    Nearest,
    Bilinear,
}

impl From<InterpolationConfig> for Interpolation {
    fn from(value: InterpolationConfig) -> Self {
        match value {
            InterpolationConfig::Nearest => Interpolation::Nearest,
            InterpolationConfig::Bilinear => Interpolation::Bilinear,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct Config {
    image_path: String,
    output_dir: String,
    scale: f64,
    interpolation: InterpolationConfig,
    parallel: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            image_path: String::new(),
            output_dir: ".".to_string(),
            scale: ScaleFactor::default().get(),
            interpolation: InterpolationConfig::Nearest,
            parallel: false,
        }
    }
}

#[derive(Debug, Serialize)]
struct ImageRecord {
    path: String,
    width: usize,
    height: usize,
}

#[derive(Debug, Serialize)]
struct Output {
    scale: f64,
    original: ImageRecord,
    resized: ImageRecord,
    original_chart: String,
    resized_chart: String,
}

fn display(path: &Path) -> String {
    path.display().to_string()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive("chromascale=info".parse()?),
            )
            .with_target(false)
            .init();
    }

    if cli.print_schema {
        println!("{SCHEMA_JSON}");
        return Ok(());
    }
    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => serde_json::from_str::<Config>(&fs::read_to_string(path)?)?,
        None => Config::default(),
    };
    if let Some(image) = &cli.image {
        config.image_path = display(image);
    }
    if let Some(dir) = &cli.output_dir {
        config.output_dir = display(dir);
    }
    let scale = match cli.scale.as_deref() {
        Some(text) if !text.trim().is_empty() => text.parse::<ScaleFactor>()?,
        _ => ScaleFactor::new(config.scale)?,
    };
    if config.image_path.is_empty() {
        return Err("image_path must be set in the config or via --image".into());
    }

    let image_path = PathBuf::from(&config.image_path);
    let file_name = image_path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or("image_path must name a file")?
        .to_string();
    let output_dir = PathBuf::from(&config.output_dir);
    fs::create_dir_all(&output_dir)?;

    let grid = load_rgb_image(&image_path)?;
    let pipeline = PipelineConfig {
        interpolation: config.interpolation.into(),
        layout: ChartLayout::default(),
        parallel: config.parallel,
    };
    let out = {
        let _span = tracing::info_span!("cli", image = %image_path.display(), scale = scale.get())
            .entered();
        process_image(&grid, scale, &pipeline)?
    };

    let resized_path = output_dir.join(resized_file_name(&file_name));
    let original_chart = output_dir.join(chart_file_name("original"));
    let resized_chart = output_dir.join(chart_file_name("resized"));
    save_grid(&out.resized, &resized_path)?;
    save_chart(&out.original_chart, &original_chart)?;
    save_chart(&out.resized_chart, &resized_chart)?;
    tracing::info!(
        resized = %resized_path.display(),
        original_chart = %original_chart.display(),
        resized_chart = %resized_chart.display(),
        "outputs written"
    );

    let output = Output {
        scale: scale.get(),
        original: ImageRecord {
            path: display(&image_path),
            width: grid.width(),
            height: grid.height(),
        },
        resized: ImageRecord {
            path: display(&resized_path),
            width: out.resized.width(),
            height: out.resized.height(),
        },
        original_chart: display(&original_chart),
        resized_chart: display(&resized_chart),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
