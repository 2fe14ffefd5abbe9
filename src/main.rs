use std::env;
use std::process::ExitCode;

use cocktail_finder::render::render_outcome;
use cocktail_finder::{CocktailFinder, FinderConfig, SearchOutcome};
use log::debug;

const USAGE: &str = "Usage: cocktail-finder [--json] <search <name or ingredient>|random|lookup <id>>";

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut args: Vec<String> = env::args().skip(1).collect();
    let json = match args.iter().position(|a| a == "--json") {
        Some(i) => {
            args.remove(i);
            true
        }
        None => false,
    };

    let (command, rest) = args.split_first().ok_or(USAGE)?;

    let config = FinderConfig::load()?;
    debug!("Using API at {}", config.base_url);
    let resolver = CocktailFinder::builder().config(&config).build()?;

    let outcome = match command.as_str() {
        "search" => resolver.resolve_by_text(&rest.join(" ")).await,
        "random" => resolver.resolve_random().await,
        "lookup" => {
            let id = rest.first().ok_or(USAGE)?;
            resolver.resolve_details_by_id(id).await
        }
        _ => return Err(USAGE.into()),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(exit_code(&outcome));
    }

    match render_outcome(&outcome) {
        Ok(text) => print!("{}", text),
        Err(message) => eprintln!("{}", message),
    }
    Ok(exit_code(&outcome))
}

fn exit_code(outcome: &SearchOutcome) -> ExitCode {
    match outcome {
        SearchOutcome::Single(_) | SearchOutcome::Many(_) => ExitCode::SUCCESS,
        SearchOutcome::Empty | SearchOutcome::Failed(_) => ExitCode::FAILURE,
    }
}
