mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::locale::{FormatAmountArgs, ParseAmountArgs};
use commands::projection::{
    BreakdownArgs, ChartArgs, FutureValueArgs, GoalArgs, ProjectArgs, RealValueArgs,
};
use commands::share::{DecodeQueryArgs, EncodeQueryArgs};

/// Compound-interest projections
#[derive(Parser)]
#[command(
    name = "compound",
    version,
    about = "Compound-interest projections",
    long_about = "Project the future value of a lump sum plus periodic contributions, \
                  adjust it for inflation, find how long a savings goal takes and \
                  produce a year-by-year breakdown for charts and export."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full projection (future value, real value, goal, breakdown)
    Project(ProjectArgs),
    /// Closed-form future value with contribution attribution
    FutureValue(FutureValueArgs),
    /// Deflate an amount by cumulative inflation
    RealValue(RealValueArgs),
    /// Years needed to reach a target amount
    Goal(GoalArgs),
    /// Year-by-year breakdown rounded to cents, ready for export
    Breakdown(BreakdownArgs),
    /// Numeric series for the growth chart
    Chart(ChartArgs),
    /// Encode projection inputs as a shareable query string
    EncodeQuery(EncodeQueryArgs),
    /// Decode projection inputs from a query string
    DecodeQuery(DecodeQueryArgs),
    /// Parse a localized currency string into a number
    ParseAmount(ParseAmountArgs),
    /// Format a number as a localized currency string
    FormatAmount(FormatAmountArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Project(args) => commands::projection::run_project(args),
        Commands::FutureValue(args) => commands::projection::run_future_value(args),
        Commands::RealValue(args) => commands::projection::run_real_value(args),
        Commands::Goal(args) => commands::projection::run_goal(args),
        Commands::Breakdown(args) => commands::projection::run_breakdown(args),
        Commands::Chart(args) => commands::projection::run_chart(args),
        Commands::EncodeQuery(args) => commands::share::run_encode_query(args),
        Commands::DecodeQuery(args) => commands::share::run_decode_query(args),
        Commands::ParseAmount(args) => commands::locale::run_parse_amount(args),
        Commands::FormatAmount(args) => commands::locale::run_format_amount(args),
        Commands::Version => {
            println!("compound {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
