//! Encounter resolution.
//!
//! Every function here is pure: the caller passes in uniform draws from
//! `[0, 1)` and gets the same outcome for the same draws. Sessions own the
//! randomness; this module owns the odds.
//!
//! Town toughness drives two knobs at once. A tough town has a *lower* bar
//! for finding a fight, and the same bar is reused when deciding whether an
//! unarmed hunter wins one.

use std::fmt;

use serde::Serialize;

use crate::game::Terrain;

/// Threshold a trouble draw must exceed in a tough town.
pub const TOUGH_TOWN_THRESHOLD: f64 = 0.66;

/// Threshold a trouble draw must exceed in a quiet town.
pub const QUIET_TOWN_THRESHOLD: f64 = 0.33;

/// Draws below this break the item used to cross terrain.
pub const ITEM_BREAK_CHANCE: f64 = 0.5;

/// Draws below this turn up gold when digging.
pub const DIG_SUCCESS_CHANCE: f64 = 0.5;

/// Most gold that can change hands in a brawl.
pub const MAX_BRAWL_GOLD: u32 = 10;

/// Most gold a single dig can turn up.
pub const MAX_DIG_GOLD: u32 = 20;

/// Terrains in generation order, with the item each one requires.
pub const TERRAINS: [(&str, &str); 6] = [
    ("Mountains", "Rope"),
    ("Ocean", "Boat"),
    ("Plains", "Horse"),
    ("Desert", "Water"),
    ("Jungle", "Machete"),
    ("Marsh", "Boots"),
];

/// Map a draw onto `0..buckets`, clamping stray values into range.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn bucket(unit: f64, buckets: u32) -> u32 {
    if !unit.is_finite() || unit <= 0.0 {
        return 0;
    }
    ((unit * f64::from(buckets)).floor() as u32).min(buckets - 1)
}

/// Pick the terrain surrounding a new town.
///
/// The unit interval is split into six equal buckets. Comparison is strict,
/// so a draw of exactly `k/6` lands in bucket `k`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn generate_terrain(unit: f64) -> Terrain {
    let index = (1..TERRAINS.len())
        .find(|&k| unit < k as f64 / TERRAINS.len() as f64)
        .map_or(TERRAINS.len() - 1, |k| k - 1);
    let (name, item) = TERRAINS[index];
    Terrain::preset(name, item)
}

/// Whether the item used for a crossing breaks.
#[must_use]
pub fn item_breaks(unit: f64) -> bool {
    unit < ITEM_BREAK_CHANCE
}

/// The threshold a trouble draw must beat for a town of the given toughness.
#[must_use]
pub const fn trouble_threshold(tough_town: bool) -> f64 {
    if tough_town {
        TOUGH_TOWN_THRESHOLD
    } else {
        QUIET_TOWN_THRESHOLD
    }
}

/// The three draws a brawl consumes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrawlRolls {
    /// Decides whether any trouble turns up.
    pub trouble: f64,
    /// Decides how much gold is at stake.
    pub purse: f64,
    /// Decides the fight for an unarmed hunter.
    pub victory: f64,
}

/// How a search for trouble played out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum BrawlOutcome {
    /// Nobody took the bait.
    NoTrouble,
    /// The hunter won and collected gold.
    Won {
        /// Gold collected.
        gold: u32,
        /// The brawler backed off at the sight of a sword.
        by_sword: bool,
    },
    /// The hunter lost and paid up.
    Lost {
        /// Gold owed.
        gold: u32,
    },
}

impl BrawlOutcome {
    /// Whether a fight happened at all.
    #[must_use]
    pub const fn found(self) -> bool {
        !matches!(self, BrawlOutcome::NoTrouble)
    }

    /// Whether the hunter came out ahead.
    #[must_use]
    pub const fn won(self) -> bool {
        matches!(self, BrawlOutcome::Won { .. })
    }

    /// Signed change to the hunter's gold.
    #[must_use]
    pub fn gold_delta(self) -> i64 {
        match self {
            BrawlOutcome::NoTrouble => 0,
            BrawlOutcome::Won { gold, .. } => i64::from(gold),
            BrawlOutcome::Lost { gold } => -i64::from(gold),
        }
    }
}

/// Resolve a search for trouble.
///
/// Trouble turns up when `rolls.trouble` exceeds the town's threshold. A
/// sword always wins. Without one, `rolls.victory` must exceed the same
/// threshold.
#[must_use]
pub fn resolve_brawl(tough_town: bool, has_sword: bool, rolls: BrawlRolls) -> BrawlOutcome {
    let threshold = trouble_threshold(tough_town);

    if rolls.trouble <= threshold {
        return BrawlOutcome::NoTrouble;
    }

    let gold = bucket(rolls.purse, MAX_BRAWL_GOLD) + 1;

    if has_sword {
        BrawlOutcome::Won {
            gold,
            by_sword: true,
        }
    } else if rolls.victory > threshold {
        BrawlOutcome::Won {
            gold,
            by_sword: false,
        }
    } else {
        BrawlOutcome::Lost { gold }
    }
}

/// What a dig turned up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "result", content = "gold", rename_all = "snake_case")]
pub enum DigOutcome {
    /// Gold, in the given amount.
    Gold(u32),
    /// Nothing but dirt.
    Dirt,
}

impl DigOutcome {
    /// Gold found, zero for dirt.
    #[must_use]
    pub const fn amount(self) -> u32 {
        match self {
            DigOutcome::Gold(amount) => amount,
            DigOutcome::Dirt => 0,
        }
    }
}

/// Resolve a dig.
#[must_use]
pub fn resolve_dig(unit: f64, gold_unit: f64) -> DigOutcome {
    if unit < DIG_SUCCESS_CHANCE {
        DigOutcome::Gold(bucket(gold_unit, MAX_DIG_GOLD) + 1)
    } else {
        DigOutcome::Dirt
    }
}

/// A collectible treasure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Treasure {
    /// A crown.
    Crown,
    /// A trophy.
    Trophy,
    /// A gem.
    Gem,
}

impl Treasure {
    /// Every treasure, in hunt-bucket order.
    pub const ALL: [Treasure; 3] = [Treasure::Crown, Treasure::Trophy, Treasure::Gem];

    /// Lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Treasure::Crown => "crown",
            Treasure::Trophy => "trophy",
            Treasure::Gem => "gem",
        }
    }
}

impl fmt::Display for Treasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which treasures a town has already given up.
///
/// Flags only ever go from unset to set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TreasureFlags {
    crown: bool,
    trophy: bool,
    gem: bool,
}

impl TreasureFlags {
    /// Whether the treasure has been found here.
    #[must_use]
    pub const fn is_found(self, treasure: Treasure) -> bool {
        match treasure {
            Treasure::Crown => self.crown,
            Treasure::Trophy => self.trophy,
            Treasure::Gem => self.gem,
        }
    }

    /// Mark a treasure as found.
    pub fn mark(&mut self, treasure: Treasure) {
        match treasure {
            Treasure::Crown => self.crown = true,
            Treasure::Trophy => self.trophy = true,
            Treasure::Gem => self.gem = true,
        }
    }

    /// Number of treasures found.
    #[must_use]
    pub fn count(self) -> usize {
        Treasure::ALL.iter().filter(|&&t| self.is_found(t)).count()
    }
}

/// What a treasure hunt turned up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "result", content = "treasure", rename_all = "snake_case")]
pub enum HuntOutcome {
    /// A treasure not yet taken from this town.
    Found(Treasure),
    /// A treasure this town already gave up.
    Duplicate(Treasure),
    /// Dust.
    Dust,
}

/// Resolve a treasure hunt against what the town has already given up.
///
/// The draw picks one of four equal buckets: crown, trophy, gem, dust.
#[must_use]
pub fn resolve_hunt(unit: f64, already_found: TreasureFlags) -> HuntOutcome {
    let Some(&treasure) = Treasure::ALL.get(bucket(unit, 4) as usize) else {
        return HuntOutcome::Dust;
    };

    if already_found.is_found(treasure) {
        HuntOutcome::Duplicate(treasure)
    } else {
        HuntOutcome::Found(treasure)
    }
}
