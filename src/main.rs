use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use compound::api;
use compound::core::{ScenarioInputs, format_currency, project};

#[derive(Parser, Debug)]
#[command(
    name = "compound",
    about = "Investment growth calculator (compound interest with contributions, Fisher-adjusted real values)"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the web calculator and JSON API
    Serve {
        #[arg(long, default_value_t = 8080)]
        port: u16,
    },
    /// Print a single projection to stdout
    Project {
        #[arg(long, default_value_t = 10_000.0)]
        initial_investment: f64,
        #[arg(long, default_value_t = 0.0)]
        monthly_contribution: f64,
        /// Expected annual return, percent
        #[arg(long, default_value_t = 7.0)]
        annual_return: f64,
        /// Expected annual inflation, percent
        #[arg(long, default_value_t = 3.0)]
        inflation_rate: f64,
        #[arg(long, default_value_t = 10)]
        years: u32,
        /// Emit the yearly points as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match Cli::parse().command {
        Command::Serve { port } => {
            if let Err(e) = api::run_http_server(port).await {
                eprintln!("Server error: {e}");
                std::process::exit(1);
            }
        }
        Command::Project {
            initial_investment,
            monthly_contribution,
            annual_return,
            inflation_rate,
            years,
            json,
        } => {
            let inputs = ScenarioInputs {
                initial_investment,
                monthly_contribution,
                annual_return_percent: annual_return,
                inflation_percent: inflation_rate,
                years,
            };
            if let Err(msg) = inputs.validate() {
                eprintln!("{msg}");
                std::process::exit(2);
            }
            let points = project(&inputs);
            if json {
                match serde_json::to_string_pretty(&points) {
                    Ok(out) => println!("{out}"),
                    Err(e) => {
                        eprintln!("Failed to serialize projection: {e}");
                        std::process::exit(1);
                    }
                }
            } else {
                println!("{:>4}  {:>16}  {:>16}", "year", "nominal", "real");
                for point in &points {
                    println!(
                        "{:>4}  {:>16}  {:>16}",
                        point.year,
                        format_currency(point.nominal_value),
                        format_currency(point.real_value)
                    );
                }
            }
        }
    }
}
