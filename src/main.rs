use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;

use anyhow::Result;
use bubbletrace::config::MAX_ARRAY_SIZE;
use bubbletrace::{generate, parse_array, util, write_trace, App, ArraySource, Config, DumpFormat};
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "bubbletrace", version, about = "Watch bubble sort, one step at a time")]
struct Cli {
    /// Data directory for config and logs (default: ~/.bubbletrace)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(flatten)]
    array: ArrayArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Args)]
struct ArrayArgs {
    /// Sort this array instead of a random one, e.g. 5,3,8,1
    #[arg(long, global = true)]
    array: Option<String>,

    /// Number of random values per session
    #[arg(long, global = true)]
    size: Option<usize>,

    /// Seed for reproducible random arrays
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Initial speed dial, 20 (slow) to 980 (fast)
    #[arg(long, global = true)]
    speed: Option<i64>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the full trace of one run and exit
    Trace {
        #[arg(long, value_enum, default_value_t = DumpFormat::Text)]
        format: DumpFormat,
    },
}

impl ArrayArgs {
    fn apply(&self, mut config: Config) -> Result<Config> {
        if let Some(size) = self.size {
            config = config.with_size(size);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(speed) = self.speed {
            config = config.with_speed(speed);
        }
        if let Some(raw) = &self.array {
            config = config.with_array(parse_array(raw, MAX_ARRAY_SIZE)?);
        }
        Ok(config)
    }
}

fn init_logging() -> Result<()> {
    // Initialize logging to file (~/.bubbletrace/logs/bubbletrace.log)
    fs::create_dir_all(util::logs_dir())?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(util::log_file_path())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(log_file)
        .with_ansi(false) // Disable ANSI colors in log file
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    util::init_data_dir(cli.data_dir.clone());
    init_logging()?;

    let config = cli.array.apply(Config::load())?;
    tracing::debug!(?config, "Loaded config");

    match cli.command {
        Some(Command::Trace { format }) => {
            let array = config.array.source().next_array();
            let steps = generate(&array);
            let stdout = io::stdout();
            write_trace(&mut stdout.lock(), &steps, format)?;
        }
        None => {
            bubbletrace::ui::install_panic_hook();
            let mut app = App::new(&config);
            app.run().await?;
        }
    }

    Ok(())
}
