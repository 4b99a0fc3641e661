use clap::Parser;
use edgefx::io::{load_rgb_image, save_gray_image};
use edgefx::{Filter, OwnedImage};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

const SCHEMA_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.schema.json"));
const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "edgefx CLI (JSON config driven)")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,
    /// Print the JSON schema and exit.
    #[arg(long)]
    print_schema: bool,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// List the filter catalog and exit.
    #[arg(long)]
    list_filters: bool,
    /// Enable tracing output.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct Config {
    image_path: String,
    output_dir: PathBuf,
    filters: Vec<String>,
    parallel: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            image_path: String::new(),
            output_dir: PathBuf::from("."),
            filters: Filter::ALL.iter().map(|f| f.name().to_string()).collect(),
            parallel: false,
        }
    }
}

#[derive(Debug, Serialize)]
struct FilterRecord {
    filter: &'static str,
    path: String,
    width: usize,
    height: usize,
}

#[derive(Debug, Serialize)]
struct CatalogRecord {
    name: &'static str,
    kernel: Option<[[f64; 3]; 3]>,
    invert: bool,
}

#[derive(Debug, Serialize)]
struct Output {
    image_path: String,
    outputs: Vec<FilterRecord>,
}

fn output_path(dir: &Path, image_path: &str, filter: Filter) -> PathBuf {
    let stem = Path::new(image_path)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("image");
    dir.join(format!("{stem}_{}.png", filter.name()))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive("edgefx=info".parse()?))
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
    if cli.list_filters {
        let catalog: Vec<CatalogRecord> = Filter::ALL
            .iter()
            .map(|f| CatalogRecord {
                name: f.name(),
                kernel: f.kernel().map(|k| *k.weights()),
                invert: f.inverts(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&catalog)?);
        return Ok(());
    }

    let config_text = fs::read_to_string(&cli.config)?;
    let config: Config = serde_json::from_str(&config_text)?;
    if config.image_path.is_empty() {
        return Err("image_path must be set in the config".into());
    }
    let filters = config
        .filters
        .iter()
        .map(|name| name.parse::<Filter>())
        .collect::<Result<Vec<_>, _>>()?;
    if filters.is_empty() {
        return Err("filters must name at least one filter".into());
    }

    let image = load_rgb_image(&config.image_path)?;
    fs::create_dir_all(&config.output_dir)?;

    let mut outputs = Vec::with_capacity(filters.len());
    for filter in filters {
        let result: OwnedImage<u8> = if config.parallel {
            edgefx::apply_par(filter, image.view())?
        } else {
            edgefx::apply(filter, image.view())?
        };
        let path = output_path(&config.output_dir, &config.image_path, filter);
        save_gray_image(&path, &result)?;
        tracing::info!(
            filter = filter.name(),
            path = %path.display(),
            width = result.width(),
            height = result.height(),
            "wrote filter output"
        );
        outputs.push(FilterRecord {
            filter: filter.name(),
            path: path.display().to_string(),
            width: result.width(),
            height: result.height(),
        });
    }

    let output = Output {
        image_path: config.image_path,
        outputs,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
