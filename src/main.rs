// Main entry point for the soccerdb CLI
// Each invocation opens the dataset, runs one query and prints the result

use anyhow::Result;
use clap::{Parser, Subcommand};
use soccerdb::{QueryExecutor, Report, DATABASE_PATH, DEFAULT_QUERY};
use tracing::Level;

/// A simple CLI to run different operations on the soccer dataset
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print all the tables in the dataset
    #[command(name = "describe")]
    Describe,
    /// Find all countries in the database
    #[command(name = "find_countries")]
    FindCountries,
    /// Find all leagues in the database
    #[command(name = "find_leagues")]
    FindLeagues,
    /// Find the first 10 teams in the database
    #[command(name = "show_teams")]
    ShowTeams,
    /// Find the first 10 detailed matches in the database
    #[command(name = "show_matches")]
    ShowMatches,
    /// Find detailed information for each league in each season
    #[command(name = "season_info")]
    SeasonInfo,
    /// Query the database with your own queries
    #[command(name = "myquery")]
    Myquery {
        /// Input your sql query
        #[arg(long = "q", default_value = DEFAULT_QUERY)]
        q: String,
    },
}

fn main() -> Result<()> {
    // Diagnostics go to stderr so stdout only ever carries the report
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(Level::WARN)
        .init();

    let args = Args::parse();

    let executor = QueryExecutor::open(DATABASE_PATH)?;
    let result = match args.command {
        Command::Describe => executor.run(Report::Describe)?,
        Command::FindCountries => executor.run(Report::FindCountries)?,
        Command::FindLeagues => executor.run(Report::FindLeagues)?,
        Command::ShowTeams => executor.run(Report::ShowTeams)?,
        Command::ShowMatches => executor.run(Report::ShowMatches)?,
        Command::SeasonInfo => executor.run(Report::SeasonInfo)?,
        Command::Myquery { q } => executor.run_user_query(&q)?,
    };

    println!("{}", result.format());
    Ok(())
}
