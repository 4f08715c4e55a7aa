use anyhow::{Context, bail};
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

use ltifilter::config::parse_coefficient_list;
use ltifilter::{ApplyMode, FilterConfig, read_wav, write_wav};

#[derive(Parser, Debug)]
#[command(name = "ltifilter")]
#[command(about = "Apply a rational transfer-function (IIR) filter to a WAV file", long_about = None)]
struct Args {
    /// Input WAV file
    input: PathBuf,

    /// Output WAV file (32-bit float)
    output: PathBuf,

    /// TOML filter description (coefficients, mode, impulse response length)
    #[arg(short = 'c', long, conflicts_with_all = ["b", "a"])]
    config: Option<PathBuf>,

    /// Numerator coefficients, e.g. "0.2,0.2"
    #[arg(short = 'b', long, requires = "a", allow_hyphen_values = true)]
    b: Option<String>,

    /// Denominator coefficients, e.g. "1,-0.6"
    #[arg(short = 'a', long, requires = "b", allow_hyphen_values = true)]
    a: Option<String>,

    /// Realization selection (overrides the config file)
    #[arg(short = 'm', long, value_enum)]
    mode: Option<ApplyMode>,

    /// Print the magnitude response at this many frequencies up to Nyquist
    #[arg(long)]
    response_points: Option<usize>,

    /// Increase output verbosity
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
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

    let mut config = load_config(&args)?;
    if let Some(mode) = args.mode {
        config.mode = mode;
    }

    let filter = config.build().context("Invalid filter coefficients")?;
    log::info!("B = {:?}", filter.b());
    log::info!("A = {:?}", filter.a());

    let channels = read_wav(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let sampling_rate = channels.first().map_or(0, |c| c.sampling_rate());

    if let Some(points) = args.response_points {
        print_magnitude_response(&filter, points, sampling_rate as f64);
    }

    let start = Instant::now();
    let filtered = channels
        .iter()
        .map(|channel| filter.apply_to(channel, config.mode))
        .collect::<Result<Vec<_>, _>>()
        .context("Filtering failed")?;
    log::info!(
        "Filtered {} channel(s) in {:.3} ms",
        filtered.len(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    write_wav(&args.output, &filtered)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    Ok(())
}

fn load_config(args: &Args) -> anyhow::Result<FilterConfig> {
    if let Some(path) = &args.config {
        return FilterConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()));
    }

    match (&args.b, &args.a) {
        (Some(b), Some(a)) => {
            let b = parse_coefficient_list(b).context("Invalid numerator")?;
            let a = parse_coefficient_list(a).context("Invalid denominator")?;
            Ok(FilterConfig::new(b, a))
        }
        _ => bail!("Specify either --config or both --b and --a"),
    }
}

fn print_magnitude_response(filter: &ltifilter::Filter, points: usize, sampling_rate: f64) {
    if points == 0 || sampling_rate <= 0.0 {
        return;
    }
    let nyquist = sampling_rate / 2.0;
    let freqs: Vec<f64> = (0..points)
        .map(|i| nyquist * i as f64 / (points.max(2) - 1) as f64)
        .collect();
    let magnitudes = filter.magnitude_response_db(&freqs, sampling_rate);

    println!("{:>12}  {:>10}", "freq_hz", "gain_db");
    for (freq, db) in freqs.iter().zip(&magnitudes) {
        println!("{:>12.1}  {:>10.2}", freq, db);
    }
}
