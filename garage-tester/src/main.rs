mod bot;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use colored::Colorize;

use bot::{BotPolicy, RunReport, run_session};
use garage_game::{GameEngine, MemoryLeaderboard};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Scenario {
    /// Build every order exactly as the customer asked
    Perfect,
    /// Build the same cheap sedan for everyone
    Sloppy,
    /// Take no orders; rely on the assistant if affordable
    Idle,
}

impl From<Scenario> for BotPolicy {
    fn from(value: Scenario) -> Self {
        match value {
            Scenario::Perfect => Self::Perfect,
            Scenario::Sloppy => Self::Sloppy,
            Scenario::Idle => Self::Idle,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "garage-tester", version = "0.1.0")]
#[command(about = "Automated QA for Garage Master - scripted headless sessions")]
struct Args {
    /// Scenarios to run
    #[arg(long, value_enum, value_delimiter = ',', default_value = "perfect")]
    scenarios: Vec<Scenario>,

    /// Seeds to run (comma-separated)
    #[arg(long, default_value = "1337")]
    seeds: String,

    /// Emit the reports as JSON instead of the console table
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn parse_seeds(raw: &str) -> Result<Vec<u64>> {
    let mut seeds = Vec::new();
    for part in raw.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        seeds.push(
            part.parse::<u64>()
                .with_context(|| format!("invalid seed '{part}'"))?,
        );
    }
    if seeds.is_empty() {
        bail!("no seeds given");
    }
    Ok(seeds)
}

fn print_table(reports: &[RunReport]) {
    println!(
        "{}",
        format!(
            "{:<10} {:<9} {:>4} {:>8} {:>6} {:>8} {:>7}",
            "seed", "policy", "day", "score", "cars", "perfect", "coins"
        )
        .bold()
    );
    for report in reports {
        let day = if report.final_day >= 4 {
            report.final_day.to_string().green()
        } else {
            report.final_day.to_string().yellow()
        };
        println!(
            "{:<10} {:<9} {:>4} {:>8} {:>6} {:>8} {:>7}",
            report.seed,
            report.policy,
            day,
            report.score,
            report.cars_built,
            report.perfect_cars,
            report.coins
        );
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut builder = env_logger::Builder::from_default_env();
    if args.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();

    let seeds = parse_seeds(&args.seeds)?;
    let engine = GameEngine::new(MemoryLeaderboard::new());
    let mut reports = Vec::new();

    for &seed in &seeds {
        for &scenario in &args.scenarios {
            let policy = BotPolicy::from(scenario);
            log::info!("running seed {seed} with the {} bot", policy.as_str());
            let report = run_session(&engine, seed, policy)
                .with_context(|| format!("seed {seed}, policy {}", policy.as_str()))?;
            reports.push(report);
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        print_table(&reports);
        let top = engine.top(10).context("leaderboard store unavailable")?;
        if !top.is_empty() {
            println!();
            println!("{}", "leaderboard".bold());
            for (rank, entry) in top.iter().enumerate() {
                println!(
                    "{:>2}. {:<24} {:>8}  day {:<2} ({} cars, {} perfect)",
                    rank + 1,
                    entry.name,
                    entry.score,
                    entry.day,
                    entry.cars_built,
                    entry.perfect_cars
                );
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_parsing_accepts_csv_and_rejects_garbage() {
        assert_eq!(parse_seeds("1, 2,3").unwrap(), vec![1, 2, 3]);
        assert!(parse_seeds("").is_err());
        assert!(parse_seeds("one").is_err());
    }
}
