use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use loan_conveyor::application::batch::{CHUNK_SIZE, evaluate_batch, next_chunk, quote_batch};
use loan_conveyor::application::evaluator::CreditEvaluator;
use loan_conveyor::application::offers::OfferGenerator;
use loan_conveyor::config::RunConfig;
use loan_conveyor::error::ConveyorError;
use loan_conveyor::interfaces::csv::application_reader::ApplicationReader;
use loan_conveyor::interfaces::json::result_writer::ResultWriter;
use loan_conveyor::telemetry;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Evaluation date (YYYY-MM-DD) used for ages and due dates. Defaults to today.
    #[arg(long, global = true)]
    as_of: Option<NaiveDate>,

    /// Log level or filter directive, e.g. `debug` or `loan_conveyor=trace`.
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Quote the four preliminary offers for each loan request in a CSV file
    Offers {
        /// Input loan requests CSV file
        input: PathBuf,
    },
    /// Fully underwrite each applicant profile in a CSV file
    Score {
        /// Input scoring profiles CSV file
        input: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = RunConfig::resolve(cli.as_of, cli.log_level);
    telemetry::init(&config.telemetry).into_diagnostic()?;

    let stdout = io::stdout();
    let mut writer = ResultWriter::new(stdout.lock());

    match cli.command {
        Command::Offers { input } => {
            let file = File::open(input).into_diagnostic()?;
            let mut requests = ApplicationReader::new(file).requests();
            let generator = OfferGenerator::default();

            let mut quoted = 0;
            while let Some(chunk) = next_chunk(&mut requests, CHUNK_SIZE, report_invalid) {
                quoted += chunk.len();
                let quotes = quote_batch(generator, chunk).await.into_diagnostic()?;
                for offers in &quotes {
                    writer.write_offers(offers).into_diagnostic()?;
                }
            }
            info!(count = quoted, "quoted offers");
        }
        Command::Score { input } => {
            let file = File::open(input).into_diagnostic()?;
            let mut profiles = ApplicationReader::new(file).profiles();
            let evaluator = CreditEvaluator::default();
            info!(as_of = %config.as_of, "scoring applications");

            let mut scored = 0;
            while let Some(chunk) = next_chunk(&mut profiles, CHUNK_SIZE, report_invalid) {
                scored += chunk.len();
                let decisions = evaluate_batch(evaluator, chunk, config.as_of)
                    .await
                    .into_diagnostic()?;
                for decision in &decisions {
                    writer.write_decision(decision).into_diagnostic()?;
                }
            }
            info!(count = scored, "scored applications");
        }
    }

    writer.flush().into_diagnostic()?;
    Ok(())
}

fn report_invalid(e: ConveyorError) {
    eprintln!("Error reading application: {}", e);
}
