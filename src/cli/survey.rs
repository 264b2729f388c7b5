//! Survey command implementation.

use super::output::{JsonSurveyResult, format_survey_csv, format_survey_text};
use super::{CliError, SurveyFormat, seed_or_clock};
use boomtown::GameConfig;
use boomtown::survey::{SurveyConfig, run_survey_observed};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Instant;

/// Execute the survey command.
///
/// # Errors
///
/// Returns an error if the settings are invalid or a town fails.
pub(crate) fn execute(
    game: GameConfig,
    towns: u64,
    visits: u32,
    seed: Option<u64>,
    threads: Option<usize>,
    format: SurveyFormat,
    progress: bool,
) -> Result<(), CliError> {
    // Set thread pool size if specified
    if let Some(num_threads) = threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .ok(); // Ignore error if already initialized
    }

    let config = SurveyConfig {
        towns,
        visits,
        base_seed: seed_or_clock(seed),
        game,
    };

    let pb = if progress {
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} towns ({per_sec})")
            .map_err(|e| CliError::new(format!("Invalid progress template: {e}")))?
            .progress_chars("=>-");
        let pb = ProgressBar::new(towns);
        pb.set_style(style);
        Some(pb)
    } else {
        None
    };

    let start = Instant::now();

    let report = run_survey_observed(&config, || {
        if let Some(pb) = &pb {
            pb.inc(1);
        }
    })?;

    if let Some(pb) = pb {
        pb.finish_with_message("done");
    }

    let duration = start.elapsed();

    #[allow(clippy::cast_precision_loss)]
    let towns_per_sec = if duration.as_secs_f64() > 0.0 {
        report.towns as f64 / duration.as_secs_f64()
    } else {
        0.0
    };

    match format {
        SurveyFormat::Text => {
            println!();
            print!("{}", format_survey_text(&report));
            println!();
            println!("Duration: {:.2}s ({:.0} towns/sec)", duration.as_secs_f64(), towns_per_sec);
        }
        SurveyFormat::Json => {
            let json_result = JsonSurveyResult::from_report(&report, config.base_seed);
            let json = serde_json::to_string_pretty(&json_result)
                .map_err(|e| CliError::new(format!("JSON serialization failed: {e}")))?;
            println!("{json}");
        }
        SurveyFormat::Csv => {
            print!("{}", format_survey_csv(&report));
        }
    }

    Ok(())
}
