// Allow unwrap and unreadable literals in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::unreadable_literal))]
//! Boomtown: the town at the heart of a turn-based treasure hunt.
//!
//! A hunter arrives in town, shops, picks fights, digs for gold, hunts for
//! treasure and eventually tries to cross the surrounding terrain. This crate
//! provides:
//! - Pure, seedable encounter odds
//! - A town session state machine enforcing one visitor at a time
//! - Parallel surveys of many towns for balancing
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │     CLI (play) / Survey runner      │
//! ├─────────────────────────────────────┤
//! │           Town session              │
//! ├─────────────────────────────────────┤
//! │   Encounter odds  │  Roll sources   │
//! └─────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod game;
pub mod survey;

pub use config::{ConfigError, GameConfig};
pub use error::{TownError, TownResult, VisitState};

// Re-export key game types at crate root for convenience
pub use game::{
    Adventurer, Departure, Hunter, Narrative, Outfitter, Rejected, RollSource, ScriptedRolls,
    SeededRolls, ShopChoice, ShopGateway, Terrain, Tone, TownSession, Treasure,
};

/// A town built from a seed, stocked with the reference shop and hunter.
pub type SeededTown = TownSession<Adventurer, Outfitter, SeededRolls>;

/// Build a town for the given seed and settings.
///
/// # Errors
///
/// Returns [`TownError::InvalidArgument`] if the configured toughness is not
/// a probability.
pub fn seeded_town(seed: u64, config: &GameConfig, shop: Outfitter) -> TownResult<SeededTown> {
    TownSession::new(
        shop,
        config.toughness,
        config.equipment_available,
        SeededRolls::new(seed),
    )
}
