use clap::{Parser as ClapParser, Subcommand};
use persian_normalizer::{batch, normalize_with, server, StopWords};
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(ClapParser)]
#[command(author, version, about = "Persian text normalizer")]
struct Cli {
    /// Log at debug level
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize text from an argument, a file or stdin
    Normalize {
        #[arg(long, conflicts_with = "input")]
        text: Option<String>,

        #[arg(long)]
        input: Option<PathBuf>,

        #[arg(long)]
        stop_words: Option<PathBuf>,

        /// Normalize every line on its own
        #[arg(long)]
        lines: bool,
    },
    /// Normalize every file of a directory into a JSON Lines file
    Batch {
        #[arg(long)]
        input: PathBuf,

        #[arg(long)]
        out: PathBuf,

        #[arg(long)]
        limit: Option<usize>,

        #[arg(long)]
        stop_words: Option<PathBuf>,
    },
    /// Serve the normalizer over HTTP
    Serve {
        #[arg(long, default_value = "127.0.0.1:8080")]
        host: String,

        #[arg(long)]
        stop_words: Option<PathBuf>,

        #[arg(long, default_value_t = 1024 * 1024)]
        max_payload: usize,
    },
}

fn load_stop_words(path: Option<&Path>) -> anyhow::Result<Option<StopWords>> {
    path.map(StopWords::load).transpose()
}

fn read_input(text: Option<String>, input: Option<&Path>) -> anyhow::Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    match input {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match cli.command {
        Commands::Normalize {
            text,
            input,
            stop_words,
            lines,
        } => {
            let sw = load_stop_words(stop_words.as_deref())?;
            let raw = read_input(text, input.as_deref())?;

            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            if lines {
                for line in raw.lines() {
                    writeln!(out, "{}", normalize_with(line, sw.as_ref()))?;
                }
            } else {
                writeln!(out, "{}", normalize_with(&raw, sw.as_ref()))?;
            }
            out.flush()?;
        }
        Commands::Batch {
            input,
            out,
            limit,
            stop_words,
        } => {
            log::info!("Input Path: {:?}", input.display());
            let sw = load_stop_words(stop_words.as_deref())?;

            let start_time = Instant::now();
            let stats = batch::run_batch(&input, &out, limit, sw.as_ref())?;
            let duration = start_time.elapsed();

            let separator = "=".repeat(40);
            println!("\n{}", separator);
            println!("Normalization completed.");
            println!("Time Elapsed: {:.2?}", duration);
            println!(
                "Documents: {} written, {} empty, {} skipped (of {})",
                stats.written, stats.empty, stats.skipped, stats.found
            );
            println!("Saved to: {:?}", out.display());
            println!("{}", separator);
        }
        Commands::Serve {
            host,
            stop_words,
            max_payload,
        } => {
            let sw = load_stop_words(stop_words.as_deref())?;
            server::run_server(sw, host, max_payload).await?;
        }
    }

    Ok(())
}
