use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;
use unit_convert_core::{
    run_checks, AreaUnit, BatchEntry, BatchRunner, ConsoleFormatter, ConversionService,
    DistanceUnit, ResultFormatter, Unit,
};

/// Distance and area unit converter
#[derive(Parser, Debug)]
#[command(name = "unit-convert-demo")]
#[command(about = "Convert between kilometers, miles, meters, feet, hectares and acres", long_about = None)]
struct Args {
    /// Log every conversion (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a single value, e.g. `convert 10 km mi`
    Convert {
        /// Value to convert
        #[arg(allow_negative_numbers = true)]
        value: f64,
        /// Source unit (km, mi, m, ft, ha, ac or full name)
        from: Unit,
        /// Target unit
        to: Unit,
    },

    /// Convert the fixed test values between every pair of units
    Batch {
        /// Emit entries as JSON instead of formatted lines
        #[arg(long)]
        json: bool,
    },

    /// Run the canonical conversion checks
    Check,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    // stdout carries results (and JSON); logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Print the canonical checks, returning whether all passed
fn print_checks(service: &ConversionService) -> bool {
    println!("=== Running Tests ===");
    let outcomes = run_checks(service);
    for (index, outcome) in outcomes.iter().enumerate() {
        match &outcome.actual {
            Ok(result) => println!(
                "Test {} ({}): {:.4} - {}",
                index + 1,
                outcome.name,
                result,
                if outcome.passed { "PASS" } else { "FAIL" }
            ),
            Err(e) => println!("Test {} FAILED: {}", index + 1, e),
        }
    }
    println!("=== Tests Completed ===");

    let passed = outcomes.iter().filter(|o| o.passed).count();
    info!("{}/{} checks passed", passed, outcomes.len());
    passed == outcomes.len()
}

fn print_entries(entries: &[BatchEntry], formatter: &ConsoleFormatter) {
    for entry in entries {
        match &entry.outcome {
            Ok(result) => println!(
                "{}",
                formatter.format_success(entry.value, &entry.from, *result, &entry.to)
            ),
            Err(e) => println!(
                "{} ({})",
                formatter.format_error(&entry.from, &entry.to),
                e
            ),
        }
    }
}

fn run_convert(
    service: &ConversionService,
    formatter: &ConsoleFormatter,
    value: f64,
    from: Unit,
    to: Unit,
) -> ExitCode {
    match service.convert(value, from, to) {
        Ok(result) => {
            println!("{}", formatter.format_success(value, &from, result, &to));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} ({})", formatter.format_error(&from, &to), e);
            ExitCode::FAILURE
        }
    }
}

fn run_batch(service: &ConversionService, formatter: &ConsoleFormatter, json: bool) -> Result<()> {
    let runner = BatchRunner::new(service);
    let distance = runner.run_distance();
    let area = runner.run_area();

    if json {
        let entries: Vec<&BatchEntry> = distance.iter().chain(area.iter()).collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!("Processing distance conversions...");
    print_entries(&distance, formatter);
    println!("\nProcessing area conversions...");
    print_entries(&area, formatter);
    Ok(())
}

/// Full walkthrough: checks, sample conversions, then both batches
fn run_demo(service: &ConversionService, formatter: &ConsoleFormatter) -> Result<ExitCode> {
    println!("=== Unit Converter ===\n");

    let checks_passed = print_checks(service);

    println!("\n--- Distance Conversions ---");
    let miles = service.convert_distance(10.0, DistanceUnit::Kilometers, DistanceUnit::Miles)?;
    println!("{}", formatter.format_success(10.0, &"km", miles, &"miles"));
    let feet = service.convert_distance(5.0, DistanceUnit::Meters, DistanceUnit::Feet)?;
    println!("{}", formatter.format_success(5.0, &"meters", feet, &"feet"));

    println!("\n--- Area Conversions ---");
    let acres = service.convert_area(2.0, AreaUnit::Hectares, AreaUnit::Acres)?;
    println!("{}", formatter.format_success(2.0, &"hectares", acres, &"acres"));

    println!("\n--- Batch Processing ---");
    run_batch(service, formatter, false)?;

    println!("\n=== Program Completed ===");
    Ok(if checks_passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let service = ConversionService::new();
    let formatter = ConsoleFormatter::default();

    match args.command {
        Some(Command::Convert { value, from, to }) => {
            Ok(run_convert(&service, &formatter, value, from, to))
        }
        Some(Command::Batch { json }) => {
            run_batch(&service, &formatter, json)?;
            Ok(ExitCode::SUCCESS)
        }
        Some(Command::Check) => Ok(if print_checks(&service) {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }),
        None => run_demo(&service, &formatter),
    }
}
