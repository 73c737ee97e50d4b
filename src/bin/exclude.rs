use anyhow::Context;
use clap::Parser;
use montyhall::{DEFAULT_SEED, constrained_assign_counted, report, seeded_rng};

/// Draws one door per position avoiding both given doors.
#[derive(Parser)]
struct Cli {
    /// First exclusion, comma separated (e.g. 1,1,2).
    a: String,
    /// Second exclusion, comma separated (e.g. 2,1,0).
    b: String,
    /// Seed for the random number generator.
    #[clap(long, short = 's', default_value_t = DEFAULT_SEED)]
    seed: u64,
}

fn parse_doors(s: &str) -> anyhow::Result<Vec<usize>> {
    if s.trim().is_empty() {
        return Ok(vec![]);
    }
    s.split(',')
        .map(|t| {
            t.trim()
                .parse::<usize>()
                .with_context(|| format!("Not a door number: {:?}", t))
        })
        .collect()
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    let a = parse_doors(&args.a).context("Failed to parse first exclusion")?;
    let b = parse_doors(&args.b).context("Failed to parse second exclusion")?;
    let mut rng = seeded_rng(args.seed);
    let assignment = constrained_assign_counted(&a, &b, &mut rng)?;
    eprintln!(
        "[exclude] n={} seed={} passes={}",
        assignment.doors.len(),
        args.seed,
        assignment.passes
    );
    println!("{}", report::format_doors(&assignment.doors));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_door_lists() {
        assert_eq!(parse_doors("1,1,2").unwrap(), vec![1, 1, 2]);
        assert_eq!(parse_doors(" 2, 1 ,0 ").unwrap(), vec![2, 1, 0]);
        assert!(parse_doors("").unwrap().is_empty());
        assert!(parse_doors("1,x").is_err());
        assert!(parse_doors("1,-1").is_err());
    }
}
