//! Four-line summary for narrow terminals and `--short`.

use crate::report::TodayReport;

pub fn render(report: &TodayReport) -> String {
    format!(
        "Rises:  {}\nSets:   {}\nLength: {}\nChange: {}\n",
        report.rises, report.sets, report.length, report.diff
    )
}
