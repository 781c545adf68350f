use anyhow::{bail, Result};
use capital_quest::api::server::serve;
use capital_quest::cli::repl::{print_match, run_repl};
use capital_quest::directory::regions::{Country, REGION_DIRECTORY};
use capital_quest::enrich::wikipedia::Enricher;
use capital_quest::resolve::resolver::{pick_random, resolve};
use capital_quest::service::log_service::setup_logging;
use clap::{Parser, Subcommand};
use dotenv::dotenv;

#[derive(Parser)]
#[command(name = "capital-quest", about = "Capital lookup for US, India, and UK regions")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Look up the capital for a state/region name
    Find {
        /// Country key (us|india|uk)
        #[arg(short, long, default_value = "us")]
        country: String,
        /// State/region name, matched exact, then prefix, then substring
        state: String,
    },
    /// Pick a random state/region and show its capital
    Random {
        /// Country key (us|india|uk)
        #[arg(short, long, default_value = "us")]
        country: String,
    },
    /// Interactive prompt
    Repl,
    /// Run the REST API server
    Serve,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    setup_logging().await?;

    let cli = Cli::parse();
    match cli.command {
        Command::Find { country, state } => {
            let country = parse_country(&country)?;
            match resolve(&REGION_DIRECTORY, &state, country) {
                Some(hit) => print_match(&Enricher::new().await?, hit).await,
                None => println!(
                    "No match found. Try a full state name like \"California\" or \"Karnataka\"."
                ),
            }
        }
        Command::Random { country } => {
            let country = parse_country(&country)?;
            let hit = pick_random(&REGION_DIRECTORY, country);
            print_match(&Enricher::new().await?, hit).await;
        }
        Command::Repl => run_repl().await?,
        Command::Serve => serve().await?,
    }

    Ok(())
}

fn parse_country(key: &str) -> Result<Country> {
    match Country::from_key(key) {
        Some(country) => Ok(country),
        None => bail!("Unknown country key: {} (use us, india, or uk)", key),
    }
}
