//! Text rendering and CSV export of simulation results.
//!
//! These helpers back the `cpu-sched-sim` command-line program.
//!
//! Presentation helpers only: they read outcomes and never alter them.

use std::fmt::Write as _;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::metrics::RunMetrics;
use crate::models::{ProcessRecord, Timeline};
use crate::simulation::Comparison;

/// CSV header written by [`write_csv`].
pub const CSV_HEADER: &str = "Algorithm,Process_ID,Arrival,Burst,Priority,Finish,Turnaround,Waiting";

/// Renders a timeline as `[0]--P1--[5]--P2--[8]`.
///
/// Returns `(empty)` for an empty timeline.
pub fn format_gantt(timeline: &Timeline) -> String {
    let Some(end) = timeline.end() else {
        return "(empty)".to_string();
    };

    let mut out = String::new();
    for entry in timeline {
        let _ = write!(out, "[{}]--{}--", entry.start, entry.occupant);
    }
    let _ = write!(out, "[{end}]");
    out
}

const TABLE_HEADERS: [&str; 6] = ["ID", "Arrival", "Burst", "Finish", "TAT", "WT"];
const TABLE_WIDTHS: [usize; 6] = [8, 7, 6, 6, 6, 6];

fn table_rule() -> String {
    let dashes: Vec<String> = TABLE_WIDTHS.iter().map(|w| "-".repeat(w + 2)).collect();
    format!("+{}+", dashes.join("+"))
}

fn table_row(cells: &[String]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(TABLE_WIDTHS)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect();
    format!("| {} |", padded.join(" | "))
}

/// Renders completed records as a fixed-width table, sorted by ID.
pub fn format_process_table(records: &[ProcessRecord]) -> String {
    let rule = table_rule();
    let mut sorted: Vec<&ProcessRecord> = records.iter().collect();
    sorted.sort_by(|a, b| a.id().cmp(b.id()));

    let header: Vec<String> = TABLE_HEADERS.iter().map(|h| h.to_string()).collect();
    let mut out = String::new();
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "{}", table_row(&header));
    let _ = writeln!(out, "{rule}");
    for r in sorted {
        let finish = r.finish_time.map_or_else(|| "-".to_string(), |f| f.to_string());
        let cells = [
            r.id().to_string(),
            r.arrival_time().to_string(),
            r.burst_time().to_string(),
            finish,
            r.turnaround_time.to_string(),
            r.waiting_time.to_string(),
        ];
        let _ = writeln!(out, "{}", table_row(&cells));
    }
    let _ = writeln!(out, "{rule}");
    out
}

/// Renders the per-run averages and CPU utilization.
///
/// ```text
/// Average Turnaround Time: 8.67
/// Average Waiting Time: 3.33
/// CPU Utilization: 100.00%
/// ```
///
/// An empty run renders a single "no processes" line instead of averages.
pub fn format_summary(metrics: &RunMetrics) -> String {
    let mut out = String::new();
    if metrics.process_count == 0 {
        let _ = writeln!(out, "No processes to calculate averages.");
    } else {
        let _ = writeln!(out, "Average Turnaround Time: {:.2}", metrics.avg_turnaround_time);
        let _ = writeln!(out, "Average Waiting Time: {:.2}", metrics.avg_waiting_time);
    }
    let _ = writeln!(out, "CPU Utilization: {:.2}%", metrics.cpu_utilization);
    out
}

/// Renders the average waiting time of every discipline and the winner.
///
/// Returns an empty string for an empty comparison.
pub fn format_recommendation(comparison: &Comparison) -> String {
    let Some(best) = comparison.best() else {
        return String::new();
    };

    let mut out = String::new();
    let _ = writeln!(out, "Average Waiting Times:");
    for (name, avg_wait) in comparison.average_waiting_times() {
        let _ = writeln!(out, "  {name:<20} : {avg_wait:.2} time units");
    }
    let _ = writeln!(
        out,
        "Best algorithm: {} (lowest average waiting time {:.2})",
        best.algorithm, best.metrics.avg_waiting_time
    );
    out
}

/// Writes every completed record of every discipline as CSV.
///
/// Rows follow execution order of the disciplines and are sorted by
/// process ID within each. A missing priority is written as `N/A`.
///
/// # Errors
/// `ErrorKind::Io` if the writer fails.
pub fn write_csv<W: Write>(comparison: &Comparison, mut writer: W) -> Result<()> {
    writeln!(writer, "{CSV_HEADER}")?;
    write_csv_rows(comparison, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Appends CSV rows to a results file, writing the header only when the
/// file is new or empty.
///
/// # Errors
/// `ErrorKind::Io` if the file cannot be opened or written.
pub fn append_csv(comparison: &Comparison, path: impl AsRef<Path>) -> Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    if file.metadata()?.len() == 0 {
        writeln!(file, "{CSV_HEADER}")?;
    }
    write_csv_rows(comparison, &mut file)?;
    file.flush()?;
    Ok(())
}

fn write_csv_rows<W: Write>(comparison: &Comparison, writer: &mut W) -> Result<()> {
    for result in comparison.iter() {
        let mut records: Vec<&ProcessRecord> = result.outcome.completed.iter().collect();
        records.sort_by(|a, b| a.id().cmp(b.id()));
        for r in records {
            let priority = r
                .process
                .priority
                .map_or_else(|| "N/A".to_string(), |p| p.to_string());
            let finish = r.finish_time.map_or_else(String::new, |f| f.to_string());
            writeln!(
                writer,
                "{},{},{},{},{},{},{},{}",
                result.algorithm,
                r.id(),
                r.arrival_time(),
                r.burst_time(),
                priority,
                finish,
                r.turnaround_time,
                r.waiting_time
            )?;
        }
    }
    Ok(())
}
