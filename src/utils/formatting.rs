//! Formatting utilities used by the reports.

use crate::core::stats::{DurationBreakdown, MeanBreakdown};

/// e.g. `3d 4h 5m 6s`
pub fn total_duration(d: &DurationBreakdown) -> String {
    format!("{}d {}h {}m {}s", d.days, d.hours, d.minutes, d.seconds)
}

/// e.g. `12m 30s`
pub fn mean_duration(d: &MeanBreakdown) -> String {
    format!("{}m {}s", d.minutes, d.seconds)
}

/// Trip duration cell: integers without decimals, fractions with up to 3.
pub fn duration_cell(secs: f64) -> String {
    if secs.fract() == 0.0 {
        format!("{}", secs as u64)
    } else {
        format!("{:.3}", secs)
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}

/// Aligned `label  count` lines of a frequency distribution.
pub fn counts_block(counts: &[(String, usize)]) -> String {
    let width = counts
        .iter()
        .map(|(label, _)| crate::utils::table::display_width(label))
        .max()
        .unwrap_or(0);

    counts
        .iter()
        .map(|(label, count)| {
            format!(
                "{}    {}",
                crate::utils::table::pad_right(label, width),
                count
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
