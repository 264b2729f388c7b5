//! Output formatting utilities for CLI.

use boomtown::survey::SurveyReport;
use serde::Serialize;

/// JSON-serializable survey result.
#[derive(Debug, Serialize)]
pub(super) struct JsonSurveyResult<'a> {
    /// Seed of the first town.
    base_seed: u64,
    /// Raw aggregate counts.
    report: &'a SurveyReport,
    /// Fraction of towns that were tough.
    tough_rate: f64,
    /// Fraction of searches that found a fight.
    trouble_rate: f64,
    /// Fraction of fights won.
    win_rate: f64,
    /// Fraction of digs that struck gold.
    dig_rate: f64,
    /// Fraction of crossings that broke the item.
    breakage_rate: f64,
}

impl<'a> JsonSurveyResult<'a> {
    /// Create from an aggregate report.
    pub(super) fn from_report(report: &'a SurveyReport, base_seed: u64) -> Self {
        Self {
            base_seed,
            report,
            tough_rate: report.tough_rate(),
            trouble_rate: report.trouble_rate(),
            win_rate: report.win_rate(),
            dig_rate: report.dig_rate(),
            breakage_rate: report.breakage_rate(),
        }
    }
}

/// Format a survey report as human-readable text.
pub(super) fn format_survey_text(report: &SurveyReport) -> String {
    let mut output = String::new();

    output.push_str(&format!("Survey Results ({} towns)\n", report.towns));
    output.push_str("========================================\n\n");

    output.push_str(&format!(
        "Tough towns: {} ({:.1}%)\n\n",
        report.tough_towns,
        report.tough_rate() * 100.0
    ));

    output.push_str("Trouble:\n");
    output.push_str(&format!(
        "  Found: {} of {} searches ({:.1}%)\n",
        report.brawls_found,
        report.searches,
        report.trouble_rate() * 100.0
    ));
    output.push_str(&format!(
        "  Won: {} ({:.1}%), Lost: {}\n",
        report.brawls_won,
        report.win_rate() * 100.0,
        report.brawls_lost
    ));
    output.push_str(&format!("  Net gold: {}\n\n", report.brawl_gold));

    output.push_str("Digging:\n");
    output.push_str(&format!(
        "  Struck gold: {} of {} digs ({:.1}%)\n",
        report.digs_struck,
        report.digs,
        report.dig_rate() * 100.0
    ));
    output.push_str(&format!("  Gold dug: {}\n\n", report.dig_gold));

    output.push_str("Treasure:\n");
    output.push_str(&format!(
        "  Found: {}, Duplicates: {}, Dust: {} ({} hunts)\n\n",
        report.treasures_found, report.duplicates, report.dust, report.hunts
    ));

    output.push_str("Leaving:\n");
    output.push_str(&format!(
        "  Departed: {}, Stranded: {}\n",
        report.departures, report.strandings
    ));
    output.push_str(&format!(
        "  Items lost: {} ({:.1}% of crossings)\n\n",
        report.items_lost,
        report.breakage_rate() * 100.0
    ));

    output.push_str("Terrain:\n");
    for (terrain, count) in &report.terrains {
        output.push_str(&format!("  {terrain}: {count}\n"));
    }

    output
}

/// Format a survey report as CSV, one row per terrain plus a total row.
pub(super) fn format_survey_csv(report: &SurveyReport) -> String {
    let mut output = String::new();

    output.push_str("terrain,towns\n");
    for (terrain, count) in &report.terrains {
        output.push_str(&format!("{terrain},{count}\n"));
    }
    output.push_str(&format!("total,{}\n\n", report.towns));

    output.push_str(
        "tough_rate,trouble_rate,win_rate,dig_rate,breakage_rate,brawl_gold,dig_gold,treasures_found,departures,strandings\n",
    );
    output.push_str(&format!(
        "{:.4},{:.4},{:.4},{:.4},{:.4},{},{},{},{},{}\n",
        report.tough_rate(),
        report.trouble_rate(),
        report.win_rate(),
        report.dig_rate(),
        report.breakage_rate(),
        report.brawl_gold,
        report.dig_gold,
        report.treasures_found,
        report.departures,
        report.strandings
    ));

    output
}
