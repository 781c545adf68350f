use crate::directory::regions::{Country, REGION_DIRECTORY};
use crate::enrich::wikipedia::Enricher;
use crate::resolve::resolver::{pick_random, resolve, RegionMatch};
use anyhow::Result;
use std::io::{self, BufRead, Write};

/// Small interactive prompt: switch country, look up a region, or draw a
/// random one. Reads stdin line by line until EOF or quit.
pub async fn run_repl() -> Result<()> {
    let enricher = Enricher::new().await?;
    let mut country = Country::UnitedStates;

    println!("Capital Quest (CLI) — US, India, UK");
    println!("Type commands or \"help\" for instructions.");

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("[{}]> ", country.display_name());
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let cmd = line.trim();
        if cmd.is_empty() {
            continue;
        }

        let (verb, arg) = match cmd.split_once(char::is_whitespace) {
            Some((verb, arg)) => (verb.to_lowercase(), Some(arg.trim())),
            None => (cmd.to_lowercase(), None),
        };

        match (verb.as_str(), arg) {
            ("quit", _) | ("exit", _) => {
                println!("Goodbye!");
                break;
            }
            ("help", _) | ("?", _) => print_help(),
            ("country", Some(key)) => match Country::from_key(key) {
                Some(switched) => {
                    country = switched;
                    println!("Switched to {}", country.display_name());
                }
                None => println!("Unknown country. Use us, india, or uk."),
            },
            ("find", Some(name)) => match resolve(&REGION_DIRECTORY, name, country) {
                Some(hit) => print_match(&enricher, hit).await,
                None => println!("No match found. Try a fuller name or use \"random\"."),
            },
            ("random", _) => print_match(&enricher, pick_random(&REGION_DIRECTORY, country)).await,
            _ => println!("Unknown command. Type \"help\" for instructions."),
        }
    }

    Ok(())
}

pub async fn print_match(enricher: &Enricher, hit: RegionMatch) {
    println!("State/Region: {}", hit.region);
    println!("Capital: {}", hit.capital);

    let enriched = enricher.enrich(hit.capital).await;
    println!("\nFun fact: {}", enriched.fact);
    if !enriched.wikipedia_summary.is_empty() {
        println!("\nMore info: {}", enriched.wikipedia_summary);
    }
}

fn print_help() {
    println!("Commands:");
    println!("  country [us|india|uk]   - switch country");
    println!("  find <state name>       - lookup capital for state");
    println!("  random                  - pick a random state and show capital");
    println!("  quit/exit               - exit");
}
