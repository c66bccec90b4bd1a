use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use csv_sieve::app::{self, Request};
use csv_sieve::data::loader::LoadOptions;
use csv_sieve::render::OutputFormat;

/// Filter and aggregate delimited text files.
#[derive(Debug, Parser)]
#[command(
    version,
    after_help = "Examples:\n  csv-sieve data.csv --filter \"price=gt=500\"\n  csv-sieve data.csv --aggregate \"rating=avg\"\n  csv-sieve data.csv --filter \"brand=eq=apple\" --aggregate \"price=max\""
)]
struct Cli {
    /// Path to the CSV file
    file: PathBuf,

    /// Filter as column=operator=value (operators: eq, gt, lt)
    #[arg(short, long)]
    filter: Option<String>,

    /// Aggregation as column=function (functions: avg, min, max)
    #[arg(short, long)]
    aggregate: Option<String>,

    /// Field delimiter
    #[arg(short, long, default_value = ",", value_parser = parse_delimiter)]
    delimiter: u8,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

impl Cli {
    fn into_request(self) -> Request {
        Request {
            path: self.file,
            filter: self.filter,
            aggregate: self.aggregate,
            load: LoadOptions {
                delimiter: self.delimiter,
            },
            format: self.format,
        }
    }
}

fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s.as_bytes() {
        [b] if b.is_ascii() => Ok(*b),
        _ => Err(format!("delimiter must be a single ASCII character, got {s:?}")),
    }
}

fn main() -> ExitCode {
    env_logger::init();

    match try_main(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn try_main(cli: Cli) -> anyhow::Result<()> {
    let outcome = app::run(&cli.into_request())?;
    println!("{}", outcome.message());
    Ok(())
}
