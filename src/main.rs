// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use nasa_media::{
    Config, JsonExporter, MediaType, QueryClient, SearchQuery, SurveyPipeline, Validator,
};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "nasa_media")]
#[command(version = "0.1.0")]
#[command(about = "Search the NASA image and video library and classify asset renditions", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    /// Write a JSON report of each survey into this directory
    #[arg(long, value_name = "DIR")]
    export_dir: Option<PathBuf>,

    #[arg(long, requires = "export_dir")]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the original rendition of each matching image
    Images(ImageArgs),

    /// Split matching video records by whether they carry a video file
    Videos(VideoArgs),

    /// Run the default image survey followed by the default video survey
    Survey,
}

#[derive(Args)]
struct ImageArgs {
    #[arg(long, default_value = "planet Mars surface, image")]
    description: String,

    #[arg(long, default_value = "Mars, Mars surface")]
    keywords: String,

    #[arg(long, default_value = "Mars")]
    title: String,

    #[arg(long, default_value = "2018")]
    year_start: String,

    #[arg(long, default_value = "2018")]
    year_end: String,

    /// Number of originals to print; defaults to survey.image_count
    #[arg(short = 'n', long, value_name = "NUM")]
    count: Option<usize>,
}

impl Default for ImageArgs {
    fn default() -> Self {
        Self {
            description: "planet Mars surface, image".to_string(),
            keywords: "Mars, Mars surface".to_string(),
            title: "Mars".to_string(),
            year_start: "2018".to_string(),
            year_end: "2018".to_string(),
            count: None,
        }
    }
}

impl ImageArgs {
    fn query(&self) -> SearchQuery {
        SearchQuery::new(
            &self.keywords,
            &self.title,
            MediaType::Image,
            &self.year_start,
            &self.year_end,
        )
        .with_description(&self.description)
    }
}

#[derive(Args)]
struct VideoArgs {
    #[arg(long, default_value = "Mars")]
    keywords: String,

    #[arg(long, default_value = "Mars")]
    title: String,

    #[arg(long, default_value = "2018")]
    year_start: String,

    #[arg(long, default_value = "2018")]
    year_end: String,

    /// Contributor tag to flag; defaults to survey.contributor_tag
    #[arg(long, value_name = "TAG")]
    contributor: Option<String>,
}

impl Default for VideoArgs {
    fn default() -> Self {
        Self {
            keywords: "Mars".to_string(),
            title: "Mars".to_string(),
            year_start: "2018".to_string(),
            year_end: "2018".to_string(),
            contributor: None,
        }
    }
}

impl VideoArgs {
    fn query(&self) -> SearchQuery {
        SearchQuery::new(
            &self.keywords,
            &self.title,
            MediaType::Video,
            &self.year_start,
            &self.year_end,
        )
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    nasa_media::utils::logging::init_logger(cli.color, cli.verbose);

    info!("Loading configuration from: {}", cli.config.display());

    let config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using built-in defaults and environment",
            cli.config.display()
        );
        Config::load(None).context("Failed to load configuration")?
    };

    Validator::validate_url(&config.api.search_endpoint)?;

    let exporter = cli
        .export_dir
        .as_ref()
        .map(JsonExporter::new)
        .transpose()
        .context("Failed to create export directory")?;

    let client = QueryClient::new(&config.api).context("Failed to create HTTP client")?;
    let pipeline = SurveyPipeline::new(client, config.survey.clone(), cli.color);

    match cli.command {
        Commands::Images(args) => {
            cmd_images(&pipeline, &args, exporter.as_ref(), cli.pretty).await?;
        }
        Commands::Videos(args) => {
            cmd_videos(&pipeline, &args, exporter.as_ref(), cli.pretty).await?;
        }
        Commands::Survey => {
            cmd_images(&pipeline, &ImageArgs::default(), exporter.as_ref(), cli.pretty).await?;
            cmd_videos(&pipeline, &VideoArgs::default(), exporter.as_ref(), cli.pretty).await?;
        }
    }

    Ok(())
}

async fn cmd_images(
    pipeline: &SurveyPipeline,
    args: &ImageArgs,
    exporter: Option<&JsonExporter>,
    pretty: bool,
) -> Result<()> {
    let query = args.query();
    Validator::validate_query(&query)?;

    let count = args.count.unwrap_or(pipeline.config().image_count);
    Validator::validate_count(count)?;

    info!("Running image survey for \"{}\"", query.title());

    let mut stdout = io::stdout().lock();
    let survey = pipeline
        .run_images(&query, count, &mut stdout)
        .await
        .context("Image survey failed")?;
    stdout.flush()?;

    info!("{}", survey.stats.summary());

    if let Some(exporter) = exporter {
        let path = exporter.export_images(&survey, pretty)?;
        info!("Image report written to {}", path.display());
    }

    Ok(())
}

async fn cmd_videos(
    pipeline: &SurveyPipeline,
    args: &VideoArgs,
    exporter: Option<&JsonExporter>,
    pretty: bool,
) -> Result<()> {
    let query = args.query();
    Validator::validate_query(&query)?;

    let contributor = args
        .contributor
        .clone()
        .unwrap_or_else(|| pipeline.config().contributor_tag.clone());

    info!("Running video survey for \"{}\"", query.title());

    let mut stdout = io::stdout().lock();
    let survey = pipeline
        .run_videos(&query, &contributor, &mut stdout)
        .await
        .context("Video survey failed")?;
    stdout.flush()?;

    info!("{}", survey.stats.summary());

    if let Some(exporter) = exporter {
        let path = exporter.export_videos(&survey, pretty)?;
        info!("Video report written to {}", path.display());
    }

    Ok(())
}
