//! Game layer for Boomtown.
//!
//! Implements the rules of a single town:
//! - Terrain around the town and the item needed to cross it
//! - Encounter odds (brawls, digging, treasure hunts, item wear)
//! - The town session state machine
//! - Contracts for the hunter and the shop, with reference implementations

mod encounter;
mod hunter;
mod narrative;
mod rolls;
mod shop;
mod terrain;
mod town;

pub use encounter::{
    BrawlOutcome, BrawlRolls, DIG_SUCCESS_CHANCE, DigOutcome, HuntOutcome, ITEM_BREAK_CHANCE,
    MAX_BRAWL_GOLD, MAX_DIG_GOLD, QUIET_TOWN_THRESHOLD, TERRAINS, TOUGH_TOWN_THRESHOLD,
    Treasure, TreasureFlags, generate_terrain, item_breaks, resolve_brawl, resolve_dig,
    resolve_hunt, trouble_threshold,
};
pub use hunter::{Adventurer, Hunter};
pub use narrative::{Narrative, Segment, Tone};
pub use rolls::{RollSource, ScriptedRolls, SeededRolls};
pub use shop::{DEFAULT_PRICES, Outfitter, Receipt, SWORD, ShopChoice, ShopGateway};
pub use terrain::Terrain;
pub use town::{Departure, Rejected, TownSession};
