use clap::Parser;
use serde::Serialize;
use std::time::Instant;

use ltifilter::filter::{Realization, RealizationKind};
use ltifilter::simulation::{random_stable_coefficients, white_noise};
use ltifilter::{ApplyMode, Filter};

#[derive(Parser, Debug)]
#[command(name = "compare_realizations")]
#[command(about = "Compare direct-form and delay-line realizations on random stable filters", long_about = None)]
struct Args {
    /// Filter orders to test (poles per filter)
    #[arg(short = 'o', long, value_delimiter = ',', default_value = "2,8,31,64")]
    orders: Vec<usize>,

    /// Number of samples per test signal
    #[arg(short = 'n', long, default_value = "48000")]
    samples: usize,

    /// Random seed for coefficients and noise
    #[arg(long, default_value = "1")]
    seed: u64,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Increase output verbosity
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Serialize)]
struct RealizationResult {
    realization: RealizationKind,
    elapsed_ms: f64,
    max_deviation: f64,
}

#[derive(Debug, Serialize)]
struct OrderReport {
    order: usize,
    coefficient_count: usize,
    auto_choice: RealizationKind,
    results: Vec<RealizationResult>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let signal = white_noise(48000, args.samples, 1.0, args.seed);

    let reports = args
        .orders
        .iter()
        .map(|&order| -> anyhow::Result<OrderReport> {
            let (b, a) = random_stable_coefficients(order, args.seed.wrapping_add(order as u64));
            let filter = Filter::new(b, a)?;
            let auto_choice = filter.select_realization(ApplyMode::Auto)?;
            let reference = filter.apply_direct(&signal);

            let results = RealizationKind::ALL
                .iter()
                .map(|&kind| {
                    let start = Instant::now();
                    let output = kind.realization().apply(filter.coefficients(), &signal);
                    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

                    let max_deviation = output
                        .samples()
                        .iter()
                        .zip(reference.samples())
                        .map(|(y, r)| (y - r).abs())
                        .fold(0.0, f64::max);

                    log::debug!("order {} {}: {:.3} ms", order, kind, elapsed_ms);
                    RealizationResult {
                        realization: kind,
                        elapsed_ms,
                        max_deviation,
                    }
                })
                .collect();

            Ok(OrderReport {
                order,
                coefficient_count: filter.coefficients().len(),
                auto_choice,
                results,
            })
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    match args.format {
        OutputFormat::Text => print_text(&reports, args.samples),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
    }

    Ok(())
}

fn print_text(reports: &[OrderReport], samples: usize) {
    println!("{} samples of white noise per filter\n", samples);
    for report in reports {
        println!(
            "order {:>3} ({} coefficients, auto -> {})",
            report.order, report.coefficient_count, report.auto_choice
        );
        for result in &report.results {
            println!(
                "  {:<20} {:>9.3} ms   max |dev| {:.3e}",
                result.realization.to_string(),
                result.elapsed_ms,
                result.max_deviation
            );
        }
    }
}
