use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use perspectize::OutputFormat;
use perspectize::commands::{self, QueryOptions};
use perspectize::config;
use perspectize::logging;

#[derive(Parser)]
#[command(name = "perspectize")]
#[command(about = "YouTube video metadata and equipment comparison tables")]
#[command(version)]
struct Cli {
    #[arg(long, value_enum, global = true, default_value = "text", help = "Output format")]
    format: OutputFormat,
    #[arg(long, global = true, help = "Bypass the query cache")]
    no_cache: bool,
    #[arg(short, long, global = true, help = "Log progress to stderr")]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the video metadata table
    Video {
        #[arg(long, help = "YouTube video ID (defaults to youtube.video_id)")]
        id: Option<String>,
    },
    /// Show the kettlebell vs dumbbell comparison table
    Equipment,
    /// Show both tables (default)
    Dashboard,
    /// Format an ISO-8601 duration such as PT8M20S
    Duration {
        #[arg(help = "ISO-8601 duration")]
        iso: String,
    },
    /// Inspect configuration
    Config(ConfigArgs),
    /// Manage the query cache
    Cache(CacheArgs),
}

#[derive(Args)]
struct ConfigArgs {
    #[command(subcommand)]
    action: ConfigAction,
}

#[derive(Subcommand)]
enum ConfigAction {
    List,
    Get { key: String },
}

#[derive(Args)]
struct CacheArgs {
    #[command(subcommand)]
    action: CacheAction,
}

#[derive(Subcommand)]
enum CacheAction {
    /// Remove every cached query result
    Clear,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    let opts = QueryOptions {
        no_cache: cli.no_cache,
    };
    let format = cli.format;

    // Formatting needs no config
    if let Some(Commands::Duration { iso }) = &cli.command {
        return commands::duration::duration(iso, format);
    }

    let config = config::load()?;

    match cli.command.unwrap_or(Commands::Dashboard) {
        Commands::Video { id } => commands::video::video(&config, id, format, opts)?,
        Commands::Equipment => commands::equipment::equipment(&config, format, opts)?,
        Commands::Dashboard => commands::dashboard::dashboard(&config, format, opts)?,
        Commands::Duration { iso } => commands::duration::duration(&iso, format)?,
        Commands::Config(args) => match args.action {
            ConfigAction::List => commands::config::list(&config)?,
            ConfigAction::Get { key } => commands::config::get(&key, &config)?,
        },
        Commands::Cache(args) => match args.action {
            CacheAction::Clear => commands::cache::clear(&config)?,
        },
    }

    Ok(())
}
