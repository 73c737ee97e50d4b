//! Text rendering of a simulated batch.

use crate::simulate::Trials;
use itertools::Itertools;

/// Arrays longer than this are elided to their ends.
pub const ELIDE_THRESHOLD: usize = 1000;
/// Entries kept on each side of an elided array.
pub const EDGE_ITEMS: usize = 3;

/// Renders doors as `[0 2 1]`, or `[0 2 1 ..., 1 0 2]` for long batches.
pub fn format_doors(doors: &[usize]) -> String {
    if doors.len() <= ELIDE_THRESHOLD {
        return format!("[{}]", doors.iter().join(" "));
    }
    format!(
        "[{} ..., {}]",
        doors[..EDGE_ITEMS].iter().join(" "),
        doors[doors.len() - EDGE_ITEMS..].iter().join(" ")
    )
}

/// The run transcript: trial arrays followed by each strategy's win rate.
pub fn render_text(trials: &Trials) -> String {
    let mut out = String::new();
    out.push_str(&format!("prize  is  {}\n", format_doors(&trials.prizes)));
    out.push_str(&format!("guess  is  {}\n", format_doors(&trials.guesses)));
    out.push('\n');
    out.push_str(&format!(
        "if contestant stays, percentage is  {:.2}\n",
        trials.win_percentage_stay()
    ));
    out.push('\n');
    out.push_str(&format!("reveal is  {}\n", format_doors(&trials.reveals)));
    out.push_str(&format!("switch made {}\n", format_doors(&trials.switches)));
    out.push('\n');
    out.push_str(&format!(
        "if contestant switches, percentage is  {:.2}\n",
        trials.win_percentage_switch()
    ));
    out
}
