mod collector;
mod config;
mod data_source;
mod error;
mod export;
mod github;
mod normalize;
mod prompt;
#[cfg(test)]
mod test_utils;

use clap::Parser;
use config::{CliOverrides, Config};
use error::Result;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "devstats", about = "Export GitHub repository stats for an account to CSV")]
struct Cli {
    #[arg(long, short, help = "GitHub account whose repositories are exported")]
    account: Option<String>,

    #[arg(long, short, help = "Destination CSV file [default: devstats.csv]")]
    output: Option<PathBuf>,

    #[arg(long, help = "Repositories requested per page (1-100)")]
    per_page: Option<u8>,
}

// one request in flight at a time, no need for worker threads
#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::load(CliOverrides {
        account: cli.account,
        output_path: cli.output,
        per_page: cli.per_page,
    });

    if let Err(e) = run(config).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<()> {
    let account = match config.account.clone() {
        Some(account) => account,
        None => {
            let mut stdin = std::io::stdin().lock();
            prompt::prompt_account(&mut stdin, &mut std::io::stdout())?
        }
    };

    let client = data_source::init_github_client(&config)?;
    let remote =
        collector::collect_repositories(&client, &account, config.page_size()).await?;
    let records = normalize::normalize_all(&remote)?;
    export::export_to_file(&config.output_path, &records)?;

    tracing::info!(
        "exported {} repositories to {}",
        records.len(),
        config.output_path.display()
    );
    Ok(())
}
