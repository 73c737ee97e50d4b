use anyhow::{Context, bail};
use clap::Parser;
use clap::ValueEnum;
use montyhall::{DEFAULT_SEED, DEFAULT_TRIALS, Summary, Trials, report, seeded_rng};
use std::fs;
use std::io::Write;

#[derive(Parser)]
struct Cli {
    /// Number of trials.
    #[clap(long, short = 'n', default_value_t = DEFAULT_TRIALS)]
    trials: usize,
    /// Seed for the random number generator.
    #[clap(long, short = 's', default_value_t = DEFAULT_SEED)]
    seed: u64,
    /// Path to output file. If not provided, outputs to stdout.
    #[clap(long, short = 'o', default_value = "")]
    output: String,
    /// Output format: text transcript or json summary.
    #[clap(long, short = 'f', default_value = "text")]
    format: Format,
    /// Compact json.
    #[clap(long, short = 'c', default_value_t = false)]
    compact: bool,
}

#[derive(Default, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    #[default]
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    if args.compact && args.format != Format::Json {
        bail!("--compact only applies to json output. Add -f json.");
    }

    let t0 = std::time::Instant::now();
    let mut rng = seeded_rng(args.seed);
    let trials = Trials::simulate(args.trials, &mut rng);
    eprintln!(
        "[simulate] trials={} seed={} reveal_passes={} switch_passes={} elapsed={:.3}s",
        trials.len(),
        args.seed,
        trials.reveal_passes,
        trials.switch_passes,
        t0.elapsed().as_secs_f64()
    );

    let mut w: Box<dyn Write> = if args.output.is_empty() {
        Box::new(std::io::stdout())
    } else {
        Box::new(
            fs::File::create(&args.output)
                .with_context(|| format!("Failed to create {}", args.output))?,
        )
    };

    match args.format {
        Format::Text => {
            w.write_all(report::render_text(&trials).as_bytes())?;
        }
        Format::Json => {
            let summary = Summary::from_trials(&trials, args.seed);
            if args.compact {
                serde_json::to_writer(&mut w, &summary)?;
            } else {
                serde_json::to_writer_pretty(&mut w, &summary)?;
            }
            writeln!(w)?;
        }
    }
    w.flush()?;
    Ok(())
}
