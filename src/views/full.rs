//! The default sectioned view: today's times, day length with a day/night
//! bar, and the projection table.
//!
//! Colors are only applied in "pretty mode", when stdout is a terminal at
//! least [`PRETTY_MIN_WIDTH`] columns wide. Otherwise the same layout is
//! printed as plain text.

use crossterm::style::Stylize;
use std::io::IsTerminal;

use crate::constants::{DAY_BAR_CELLS, PRETTY_MIN_WIDTH};
use crate::report::TodayReport;

const RULE_WIDTH: usize = 60;

/// Whether stdout can show the colored layout.
pub fn use_pretty_mode() -> bool {
    if !std::io::stdout().is_terminal() {
        return false;
    }
    match crossterm::terminal::size() {
        Ok((width, _)) => width >= PRETTY_MIN_WIDTH,
        Err(_) => false,
    }
}

/// Which cells of the day bar are daylight.
///
/// A cell counts as daylight when its midpoint falls between sunrise and
/// sunset. When sunset is earlier on the local clock than sunrise the
/// daylight wraps around midnight.
pub fn day_bar_cells(start_ratio: f64, end_ratio: f64, cells: usize) -> Vec<bool> {
    (0..cells)
        .map(|i| {
            let midpoint = (i as f64 + 0.5) / cells as f64;
            if end_ratio >= start_ratio {
                midpoint >= start_ratio && midpoint < end_ratio
            } else {
                midpoint >= start_ratio || midpoint < end_ratio
            }
        })
        .collect()
}

struct Painter {
    pretty: bool,
}

impl Painter {
    fn title(&self, text: &str) -> String {
        let rule = "═".repeat(RULE_WIDTH);
        if self.pretty {
            format!("{}\n{}", text.yellow().bold(), rule.yellow())
        } else {
            format!("{text}\n{rule}")
        }
    }

    fn highlight(&self, text: &str) -> String {
        if self.pretty {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn change(&self, diff: &str) -> String {
        if !self.pretty {
            return diff.to_string();
        }
        match diff.chars().next() {
            Some('+') => diff.green().to_string(),
            Some('-') => diff.magenta().to_string(),
            _ => diff.to_string(),
        }
    }

    fn bar(&self, cells: &[bool]) -> String {
        cells
            .iter()
            .map(|&day| match (day, self.pretty) {
                (true, true) => "█".yellow().to_string(),
                (false, true) => "█".dark_blue().to_string(),
                (true, false) => "█".to_string(),
                (false, false) => "░".to_string(),
            })
            .collect()
    }

    fn dim(&self, text: &str) -> String {
        if self.pretty {
            text.dark_grey().to_string()
        } else {
            text.to_string()
        }
    }
}

/// Render the full view.
pub fn render(report: &TodayReport, pretty: bool) -> String {
    let p = Painter { pretty };
    let mut lines = vec![String::new()];

    if report.source.is_offline() {
        lines.push(p.dim("Offline mode"));
        lines.push(String::new());
    }

    lines.push(p.title("Today's daylight"));
    lines.push(format!("  {:<16}{:<16}{:<16}", "Sunrise", "Noon", "Sunset"));
    lines.push(format!(
        "  {}{}{}",
        p.highlight(&format!("{:<16}", report.rises)),
        p.highlight(&format!("{:<16}", report.noon)),
        p.highlight(&format!("{:<16}", report.sets)),
    ));
    lines.push(String::new());

    lines.push(p.title("Day length"));
    lines.push(format!(
        "  {}  ({} vs yesterday)",
        p.highlight(&report.length),
        p.change(&report.diff)
    ));
    let cells = day_bar_cells(report.day_start_ratio, report.day_end_ratio, DAY_BAR_CELLS);
    lines.push(format!("  {}", p.bar(&cells)));
    lines.push(format!(
        "  {}",
        p.dim(&format!(
            "{:<12}{:<12}{:<12}{:<11}{}",
            "00:00", "06:00", "12:00", "18:00", "24:00"
        ))
    ));
    lines.push(String::new());

    lines.push(p.title(&format!("Next {} days", report.next_days.len())));
    lines.push(format!(
        "  {:<14}{:<9}{:<9}{}",
        "Date", "Rises", "Sets", "Length"
    ));
    lines.extend(report.next_days.iter().map(|day| {
        format!(
            "  {:<14}{:<9}{:<9}{}",
            day.day, day.rises, day.sets, day.length
        )
    }));
    lines.push(String::new());

    lines.push(p.dim(&format!(
        "{}, {} · {} · IP {}",
        report.latitude,
        report.longitude,
        report.timezone.name(),
        report.source.label()
    )));

    let mut doc = lines.join("\n");
    doc.push('\n');
    doc
}
