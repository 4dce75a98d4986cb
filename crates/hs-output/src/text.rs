//! Human-readable statistics block for one run.

use std::fmt;

use hs_sim::SimReport;

const RULE_WIDTH: usize = 63;

/// Renders a [`SimReport`] as the per-truck / per-station statistics block.
///
/// ```text
/// ==== 1 trucks, 1 stations ====
///
/// ==================== Simulation Statistics ====================
/// Truck 0 Statistics:
///   Loads Delivered: 17
///   Total Wait Time (min): 0
///   ...
/// Station 0 Statistics:
///   Total Busy Time (min): 85
///   Utilization: 1.97 %
/// ===============================================================
/// ```
pub struct TextReport<'a> {
    title:  &'a str,
    report: &'a SimReport,
}

impl<'a> TextReport<'a> {
    pub fn new(title: &'a str, report: &'a SimReport) -> Self {
        Self { title, report }
    }
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "==== {} ====", self.title)?;
        writeln!(f)?;
        writeln!(f, "{:=^width$}", " Simulation Statistics ", width = RULE_WIDTH)?;

        for t in &self.report.trucks {
            writeln!(f, "Truck {} Statistics:", t.id.0)?;
            writeln!(f, "  Loads Delivered: {}", t.loads_delivered)?;
            writeln!(f, "  Total Wait Time (min): {}", t.total_wait)?;
            writeln!(f, "  Total Travel Time (min): {}", t.total_travel)?;
            writeln!(f, "  Total Mining Time (min): {}", t.total_mining)?;
            writeln!(f, "  Total Unload Time (min): {}", t.total_unload)?;
            writeln!(f)?;
        }

        for s in &self.report.stations {
            writeln!(f, "Station {} Statistics:", s.id.0)?;
            writeln!(f, "  Total Busy Time (min): {}", s.total_busy)?;
            writeln!(f, "  Utilization: {:.2} %", s.utilization_pct)?;
            writeln!(f)?;
        }

        writeln!(
            f,
            "Totals: {} loads, {} events, mean utilization {:.2} %",
            self.report.total_loads(),
            self.report.events_dispatched,
            self.report.mean_utilization()
        )?;
        writeln!(f, "{}", "=".repeat(RULE_WIDTH))
    }
}
