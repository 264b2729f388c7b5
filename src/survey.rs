//! Town surveys: many seeded towns, one scripted visit each, aggregated.
//!
//! Provides a pure function interface: `(seed, config) -> TownReport`.
//! [`run_survey`] fans the towns out over rayon and folds the per-town
//! reports into a single [`SurveyReport`]. The same config and base seed
//! always produce the same report, regardless of thread count.

use std::collections::BTreeMap;

use rayon::prelude::*;
use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::config::{ConfigError, GameConfig};
use crate::error::TownError;
use crate::game::{
    Adventurer, BrawlOutcome, DigOutcome, HuntOutcome, Hunter, SeededRolls, TownSession,
};

/// Name given to every surveying hunter.
pub const SURVEYOR: &str = "Surveyor";

/// Error type for survey runs.
#[derive(Debug, Error)]
pub enum SurveyError {
    /// The game settings are invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// A town rejected an operation.
    #[error("town {seed} failed: {source}")]
    Town {
        /// Seed of the failing town.
        seed: u64,
        /// Underlying error.
        #[source]
        source: TownError,
    },
}

/// Configuration for a survey.
#[derive(Debug, Clone, PartialEq)]
pub struct SurveyConfig {
    /// Number of towns to visit.
    pub towns: u64,
    /// Rounds of trouble, digging and hunting per town before leaving.
    pub visits: u32,
    /// Seed of the first town; town `i` uses `base_seed + i`.
    pub base_seed: u64,
    /// Game settings shared by every town.
    pub game: GameConfig,
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            towns: 1000,
            visits: 3,
            base_seed: 0,
            game: GameConfig::default(),
        }
    }
}

/// What happened in one surveyed town.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TownReport {
    /// Seed the town was built from.
    pub seed: u64,
    /// Terrain around the town.
    pub terrain: String,
    /// Whether the town was tough.
    pub tough: bool,
    /// Fights found.
    pub brawls_found: u32,
    /// Fights won.
    pub brawls_won: u32,
    /// Fights lost.
    pub brawls_lost: u32,
    /// Net gold change from fights.
    pub brawl_gold: i64,
    /// Digs that turned up gold.
    pub digs_struck: u32,
    /// Gold dug up.
    pub dig_gold: u64,
    /// Fresh treasures found.
    pub treasures_found: u32,
    /// Hunts that hit an already-taken treasure.
    pub duplicates: u32,
    /// Hunts that found dust.
    pub dust: u32,
    /// Whether the surveyor made it out.
    pub departed: bool,
    /// Whether the crossing item broke on the way out.
    pub item_lost: bool,
    /// Gold on hand at the end of the visit.
    pub final_gold: i64,
}

/// Aggregate over many towns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SurveyReport {
    /// Towns surveyed.
    pub towns: u64,
    /// Tough towns among them.
    pub tough_towns: u64,
    /// Searches for trouble.
    pub searches: u64,
    /// Fights found.
    pub brawls_found: u64,
    /// Fights won.
    pub brawls_won: u64,
    /// Fights lost.
    pub brawls_lost: u64,
    /// Net gold change from fights.
    pub brawl_gold: i64,
    /// Digs attempted.
    pub digs: u64,
    /// Digs that turned up gold.
    pub digs_struck: u64,
    /// Gold dug up.
    pub dig_gold: u64,
    /// Hunts attempted.
    pub hunts: u64,
    /// Fresh treasures found.
    pub treasures_found: u64,
    /// Hunts that hit an already-taken treasure.
    pub duplicates: u64,
    /// Hunts that found dust.
    pub dust: u64,
    /// Surveyors who made it out.
    pub departures: u64,
    /// Surveyors stuck for lack of an item.
    pub strandings: u64,
    /// Crossing items that broke.
    pub items_lost: u64,
    /// Towns per terrain name.
    pub terrains: BTreeMap<String, u64>,
}

impl SurveyReport {
    /// Fold one town into the aggregate.
    pub fn add(&mut self, town: &TownReport, visits: u32) {
        let visits = u64::from(visits);
        self.towns += 1;
        self.tough_towns += u64::from(town.tough);
        self.searches += visits;
        self.brawls_found += u64::from(town.brawls_found);
        self.brawls_won += u64::from(town.brawls_won);
        self.brawls_lost += u64::from(town.brawls_lost);
        self.brawl_gold += town.brawl_gold;
        self.digs += visits;
        self.digs_struck += u64::from(town.digs_struck);
        self.dig_gold += town.dig_gold;
        self.hunts += visits;
        self.treasures_found += u64::from(town.treasures_found);
        self.duplicates += u64::from(town.duplicates);
        self.dust += u64::from(town.dust);
        if town.departed {
            self.departures += 1;
        } else {
            self.strandings += 1;
        }
        self.items_lost += u64::from(town.item_lost);
        *self.terrains.entry(town.terrain.clone()).or_default() += 1;
    }

    /// Combine two partial aggregates.
    pub fn merge(&mut self, other: &Self) {
        self.towns += other.towns;
        self.tough_towns += other.tough_towns;
        self.searches += other.searches;
        self.brawls_found += other.brawls_found;
        self.brawls_won += other.brawls_won;
        self.brawls_lost += other.brawls_lost;
        self.brawl_gold += other.brawl_gold;
        self.digs += other.digs;
        self.digs_struck += other.digs_struck;
        self.dig_gold += other.dig_gold;
        self.hunts += other.hunts;
        self.treasures_found += other.treasures_found;
        self.duplicates += other.duplicates;
        self.dust += other.dust;
        self.departures += other.departures;
        self.strandings += other.strandings;
        self.items_lost += other.items_lost;
        for (terrain, count) in &other.terrains {
            *self.terrains.entry(terrain.clone()).or_default() += count;
        }
    }

    /// Fraction of towns that were tough.
    #[must_use]
    pub fn tough_rate(&self) -> f64 {
        ratio(self.tough_towns, self.towns)
    }

    /// Fraction of searches that found a fight.
    #[must_use]
    pub fn trouble_rate(&self) -> f64 {
        ratio(self.brawls_found, self.searches)
    }

    /// Fraction of fights won.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        ratio(self.brawls_won, self.brawls_found)
    }

    /// Fraction of digs that struck gold.
    #[must_use]
    pub fn dig_rate(&self) -> f64 {
        ratio(self.digs_struck, self.digs)
    }

    /// Fraction of crossings that broke the item.
    #[must_use]
    pub fn breakage_rate(&self) -> f64 {
        ratio(self.items_lost, self.departures)
    }
}

#[allow(clippy::cast_precision_loss)]
fn ratio(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

/// Survey a single town.
///
/// A surveyor arrives with the configured kit and gold, then for each visit
/// looks for trouble, digs and hunts. Finally it tries to leave.
///
/// # Errors
///
/// Returns [`SurveyError::Town`] if the town rejects the configuration.
pub fn run_town(seed: u64, config: &SurveyConfig) -> Result<TownReport, SurveyError> {
    let town_err = |source| SurveyError::Town { seed, source };
    let game = &config.game;

    let mut town = TownSession::new(
        game.outfitter(),
        game.toughness,
        game.equipment_available,
        SeededRolls::new(seed),
    )
    .map_err(town_err)?;

    let hunter = Adventurer::with_kit(
        SURVEYOR,
        game.starting_gold,
        game.starting_kit.iter().cloned(),
    );
    let starting_gold = hunter.gold();
    town.arrive(hunter).map_err(|rejected| town_err(rejected.into()))?;

    let mut report = TownReport {
        seed,
        terrain: town.terrain().name().to_string(),
        tough: town.is_tough(),
        ..TownReport::default()
    };

    for _ in 0..config.visits {
        let gold_before = town.hunter().map_or(0, Hunter::gold);
        match town.look_for_trouble().map_err(town_err)? {
            BrawlOutcome::NoTrouble => {}
            BrawlOutcome::Won { .. } => {
                report.brawls_found += 1;
                report.brawls_won += 1;
            }
            BrawlOutcome::Lost { .. } => {
                report.brawls_found += 1;
                report.brawls_lost += 1;
            }
        }
        report.brawl_gold += town.hunter().map_or(0, Hunter::gold) - gold_before;

        if let DigOutcome::Gold(amount) = town.dig().map_err(town_err)? {
            report.digs_struck += 1;
            report.dig_gold += u64::from(amount);
        }

        match town.hunt().map_err(town_err)? {
            HuntOutcome::Found(_) => report.treasures_found += 1,
            HuntOutcome::Duplicate(_) => report.duplicates += 1,
            HuntOutcome::Dust => report.dust += 1,
        }
    }

    let item = town.terrain().required_item().to_string();
    report.final_gold = town.hunter().map_or(starting_gold, Hunter::gold);

    if let Some(hunter) = town.leave(game.easy_mode).map_err(town_err)?.into_hunter() {
        report.departed = true;
        report.item_lost = !hunter.has_item(&item);
    }

    Ok(report)
}

/// Survey many towns in parallel.
///
/// # Errors
///
/// Returns an error if the game settings are invalid or any town fails.
pub fn run_survey(config: &SurveyConfig) -> Result<SurveyReport, SurveyError> {
    run_survey_observed(config, || {})
}

/// Survey many towns in parallel, calling `on_town` after each one finishes.
///
/// # Errors
///
/// Returns an error if the game settings are invalid or any town fails.
pub fn run_survey_observed<F>(
    config: &SurveyConfig,
    on_town: F,
) -> Result<SurveyReport, SurveyError>
where
    F: Fn() + Sync + Send,
{
    config.game.validate()?;
    info!(
        towns = config.towns,
        visits = config.visits,
        base_seed = config.base_seed,
        "survey started"
    );

    let report = (0..config.towns)
        .into_par_iter()
        .map(|i| -> Result<SurveyReport, SurveyError> {
            let town = run_town(config.base_seed.wrapping_add(i), config)?;
            on_town();
            let mut partial = SurveyReport::default();
            partial.add(&town, config.visits);
            Ok(partial)
        })
        .try_reduce(SurveyReport::default, |mut a, b| {
            a.merge(&b);
            Ok(a)
        })?;

    info!(towns = report.towns, departures = report.departures, "survey finished");
    Ok(report)
}
