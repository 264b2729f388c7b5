//! Town session: one location, one visiting hunter at a time.
//!
//! A session moves between two states. It starts `Empty`, becomes
//! `Occupied` when a hunter arrives, and returns to `Empty` once the hunter
//! manages to cross the surrounding terrain. Hunter-scoped operations fail
//! with [`TownError::InvalidState`] while the town is empty.

use std::fmt;

use tracing::{debug, warn};

use crate::error::{TownError, TownResult, VisitState};
use crate::game::{
    BrawlOutcome, BrawlRolls, DigOutcome, HuntOutcome, Hunter, Narrative, RollSource,
    ShopChoice, ShopGateway, Terrain, Tone, TreasureFlags, generate_terrain, item_breaks,
    resolve_brawl, resolve_dig, resolve_hunt,
};

const BRAWL_OPENING: &str = "You want trouble, stranger!  You got it!\nOof! Umph! Ow!\n";

/// Who is in town.
#[derive(Debug, Clone)]
enum Visit<H> {
    Empty,
    Occupied(H),
}

impl<H> Visit<H> {
    const fn state(&self) -> VisitState {
        match self {
            Visit::Empty => VisitState::Empty,
            Visit::Occupied(_) => VisitState::Occupied,
        }
    }

    fn occupant(&mut self, operation: &'static str) -> TownResult<&mut H> {
        match self {
            Visit::Occupied(hunter) => Ok(hunter),
            Visit::Empty => Err(TownError::InvalidState {
                operation,
                expected: VisitState::Occupied,
                actual: VisitState::Empty,
            }),
        }
    }
}

/// Result of trying to leave town.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Departure<H> {
    /// The hunter lacks the item the terrain requires and stays put.
    Stranded,
    /// The hunter crossed the terrain and is handed back to the caller.
    Departed(H),
}

impl<H> Departure<H> {
    /// Whether the hunter got out.
    #[must_use]
    pub const fn departed(&self) -> bool {
        matches!(self, Departure::Departed(_))
    }

    /// The departed hunter, if any.
    #[must_use]
    pub fn into_hunter(self) -> Option<H> {
        match self {
            Departure::Departed(hunter) => Some(hunter),
            Departure::Stranded => None,
        }
    }
}

/// A hunter turned away at the gate, handed back with the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejected<H> {
    /// Why the hunter was turned away.
    pub error: TownError,
    /// The hunter that was turned away.
    pub hunter: H,
}

impl<H> Rejected<H> {
    /// Take the hunter back.
    #[must_use]
    pub fn into_hunter(self) -> H {
        self.hunter
    }
}

impl<H> fmt::Display for Rejected<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl<H: fmt::Debug> std::error::Error for Rejected<H> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

impl<H> From<Rejected<H>> for TownError {
    fn from(rejected: Rejected<H>) -> Self {
        rejected.error
    }
}

/// A single town and whoever is visiting it.
///
/// Terrain and toughness are fixed when the town is built. Treasure flags
/// belong to the town, so a treasure taken by one hunter is gone for every
/// later visitor.
#[derive(Debug)]
pub struct TownSession<H, S, R> {
    shop: S,
    rolls: R,
    terrain: Terrain,
    tough: bool,
    equipment_available: bool,
    treasures: TreasureFlags,
    visit: Visit<H>,
    message: Narrative,
}

impl<H: Hunter, S: ShopGateway, R: RollSource> TownSession<H, S, R> {
    /// Build a town.
    ///
    /// Draws the terrain first, then toughness: the town is tough when the
    /// second draw falls below `toughness`.
    ///
    /// # Errors
    ///
    /// Returns [`TownError::InvalidArgument`] if `toughness` is not a
    /// probability in `[0, 1]`.
    pub fn new(
        shop: S,
        toughness: f64,
        equipment_available: bool,
        mut rolls: R,
    ) -> TownResult<Self> {
        if !(0.0..=1.0).contains(&toughness) {
            return Err(TownError::InvalidArgument(format!(
                "toughness {toughness} is not a probability"
            )));
        }

        let terrain = generate_terrain(rolls.next_unit());
        let tough = rolls.next_unit() < toughness;
        debug!(terrain = terrain.name(), tough, "town built");

        Ok(Self {
            shop,
            rolls,
            terrain,
            tough,
            equipment_available,
            treasures: TreasureFlags::default(),
            visit: Visit::Empty,
            message: Narrative::new(),
        })
    }

    /// Welcome a hunter.
    ///
    /// # Errors
    ///
    /// Returns [`Rejected`] if another hunter is already here. The newcomer
    /// travels back inside the error.
    pub fn arrive(&mut self, hunter: H) -> Result<(), Rejected<H>> {
        if let Visit::Occupied(_) = self.visit {
            return Err(Rejected {
                error: TownError::InvalidState {
                    operation: "arrive",
                    expected: VisitState::Empty,
                    actual: VisitState::Occupied,
                },
                hunter,
            });
        }

        self.message.clear();
        self.message
            .push(format!("Welcome to town, {}.", hunter.name()))
            .line(if self.tough {
                "It's pretty rough around here, so watch yourself."
            } else {
                "We're just a sleepy little town with mild mannered folk."
            });

        debug!(hunter = hunter.name(), tough = self.tough, "hunter arrived");
        self.visit = Visit::Occupied(hunter);
        Ok(())
    }

    /// Change the town-local sword flag. Allowed in any state.
    pub fn set_equipment_available(&mut self, available: bool) {
        self.equipment_available = available;
    }

    /// Try to cross the terrain out of town.
    ///
    /// The check looks at the hunter's kit right now. In easy mode the item
    /// never wears out; otherwise it breaks on a coin flip.
    ///
    /// # Errors
    ///
    /// Returns [`TownError::InvalidState`] if nobody is in town.
    pub fn leave(&mut self, easy_mode: bool) -> TownResult<Departure<H>> {
        let hunter = self.visit.occupant("leave")?;
        let item = self.terrain.required_item();
        self.message.clear();

        if !self.terrain.can_cross(&*hunter) {
            self.message.push(format!(
                "You can't leave town, {}. You don't have a {item}.",
                hunter.name()
            ));
            warn!(hunter = hunter.name(), item, "stranded");
            return Ok(Departure::Stranded);
        }

        self.message.push(format!(
            "You used your {item} to cross the {}.",
            self.terrain.name()
        ));

        if !easy_mode && item_breaks(self.rolls.next_unit()) {
            hunter.remove_item_from_kit(item);
            self.message.line(format!("Unfortunately, you lost your {item}"));
            debug!(hunter = hunter.name(), item, "item broke");
        }

        match std::mem::replace(&mut self.visit, Visit::Empty) {
            Visit::Occupied(hunter) => {
                debug!(hunter = hunter.name(), terrain = self.terrain.name(), "hunter left");
                Ok(Departure::Departed(hunter))
            }
            Visit::Empty => Err(TownError::InvalidState {
                operation: "leave",
                expected: VisitState::Occupied,
                actual: VisitState::Empty,
            }),
        }
    }

    /// Send the hunter into the shop.
    ///
    /// # Errors
    ///
    /// Returns [`TownError::InvalidState`] if nobody is in town.
    pub fn enter_shop(&mut self, choice: ShopChoice) -> TownResult<()> {
        let hunter = self.visit.occupant("enter the shop")?;
        self.message.clear();
        self.shop.enter(hunter, choice);
        Ok(())
    }

    /// Pick a fight for gold.
    ///
    /// Always consumes three draws: trouble, purse and victory. The hunter
    /// counts as armed if either the town flag or the shop says so.
    ///
    /// # Errors
    ///
    /// Returns [`TownError::InvalidState`] if nobody is in town.
    pub fn look_for_trouble(&mut self) -> TownResult<BrawlOutcome> {
        let hunter = self.visit.occupant("look for trouble")?;
        self.message.clear();

        let rolls = BrawlRolls {
            trouble: self.rolls.next_unit(),
            purse: self.rolls.next_unit(),
            victory: self.rolls.next_unit(),
        };
        let armed = self.equipment_available || self.shop.has_sword();
        let outcome = resolve_brawl(self.tough, armed, rolls);

        match outcome {
            BrawlOutcome::NoTrouble => {
                self.message.push("You couldn't find any trouble");
            }
            BrawlOutcome::Won { gold, by_sword } => {
                self.message
                    .push_toned(Tone::Danger, BRAWL_OPENING)
                    .push_toned(
                        Tone::Danger,
                        if by_sword {
                            "the brawler, seeing your sword, realizes he picked a losing fight and gives you his gold"
                        } else {
                            "Okay, stranger! You proved yer mettle. Here, take my gold."
                        },
                    )
                    .line("You won the brawl and receive ")
                    .push_toned(Tone::Gold, gold.to_string())
                    .push(" gold.");
            }
            BrawlOutcome::Lost { gold } => {
                self.message
                    .push_toned(Tone::Danger, BRAWL_OPENING)
                    .push_toned(
                        Tone::Danger,
                        "That'll teach you to go lookin' fer trouble in MY town! Now pay up!",
                    )
                    .line(format!("You lost the brawl and pay {gold} gold."));
            }
        }

        hunter.change_gold(outcome.gold_delta());
        debug!(hunter = hunter.name(), ?outcome, "brawl resolved");
        Ok(outcome)
    }

    /// Dig for gold. Consumes two draws.
    ///
    /// # Errors
    ///
    /// Returns [`TownError::InvalidState`] if nobody is in town.
    pub fn dig(&mut self) -> TownResult<DigOutcome> {
        let hunter = self.visit.occupant("dig")?;
        self.message.clear();

        let unit = self.rolls.next_unit();
        let gold_unit = self.rolls.next_unit();
        let outcome = resolve_dig(unit, gold_unit);

        match outcome {
            DigOutcome::Gold(amount) => {
                hunter.change_gold(i64::from(amount));
                self.message
                    .push("You dug up ")
                    .push_toned(Tone::Gold, amount.to_string())
                    .push(" gold!");
            }
            DigOutcome::Dirt => {
                self.message.push("You dug but only found dirt");
            }
        }

        debug!(hunter = hunter.name(), ?outcome, "dig resolved");
        Ok(outcome)
    }

    /// Hunt for treasure. Consumes one draw.
    ///
    /// Each treasure can be taken from a town only once.
    ///
    /// # Errors
    ///
    /// Returns [`TownError::InvalidState`] if nobody is in town.
    pub fn hunt(&mut self) -> TownResult<HuntOutcome> {
        let hunter = self.visit.occupant("hunt")?;
        self.message.clear();

        let outcome = resolve_hunt(self.rolls.next_unit(), self.treasures);

        match outcome {
            HuntOutcome::Found(treasure) => {
                self.treasures.mark(treasure);
                hunter.add_treasure(treasure);
                self.message.push(format!("You found a {treasure}!"));
            }
            HuntOutcome::Duplicate(_) => {
                self.message.push("You already collected this treasure");
            }
            HuntOutcome::Dust => {
                self.message.push("You found dust");
            }
        }

        debug!(hunter = hunter.name(), ?outcome, "hunt resolved");
        Ok(outcome)
    }
}

impl<H, S, R> TownSession<H, S, R> {
    /// Narrative from the most recent operation.
    #[must_use]
    pub fn latest_message(&self) -> &Narrative {
        &self.message
    }

    /// One-line description of the town.
    #[must_use]
    pub fn describe(&self) -> String {
        format!(
            "This nice little town is surrounded by {}.",
            self.terrain.name()
        )
    }

    /// The surrounding terrain.
    #[must_use]
    pub fn terrain(&self) -> &Terrain {
        &self.terrain
    }

    /// Whether this is a tough town.
    #[must_use]
    pub const fn is_tough(&self) -> bool {
        self.tough
    }

    /// The town-local sword flag.
    #[must_use]
    pub const fn equipment_available(&self) -> bool {
        self.equipment_available
    }

    /// Treasures this town has already given up.
    #[must_use]
    pub const fn treasure_flags(&self) -> TreasureFlags {
        self.treasures
    }

    /// Current visit state.
    #[must_use]
    pub const fn state(&self) -> VisitState {
        self.visit.state()
    }

    /// Whether a hunter is in town.
    #[must_use]
    pub const fn is_occupied(&self) -> bool {
        matches!(self.visit, Visit::Occupied(_))
    }

    /// The hunter in town, if any.
    #[must_use]
    pub fn hunter(&self) -> Option<&H> {
        match &self.visit {
            Visit::Occupied(hunter) => Some(hunter),
            Visit::Empty => None,
        }
    }

    /// Mutable access to the hunter in town, if any.
    #[must_use]
    pub fn hunter_mut(&mut self) -> Option<&mut H> {
        match &mut self.visit {
            Visit::Occupied(hunter) => Some(hunter),
            Visit::Empty => None,
        }
    }

    /// The town's shop.
    #[must_use]
    pub fn shop(&self) -> &S {
        &self.shop
    }

    /// Tear the town down and keep its shop, e.g. to stock the next town.
    #[must_use]
    pub fn into_shop(self) -> S {
        self.shop
    }
}

impl<H, S, R> fmt::Display for TownSession<H, S, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Adventurer, Outfitter, SWORD, ScriptedRolls, Treasure};

    type TestTown = TownSession<Adventurer, Outfitter, ScriptedRolls>;

    /// Build a town whose construction draws are `terrain` and `tough`, followed by `rest`.
    fn town(terrain: f64, tough: bool, rest: &[f64]) -> TestTown {
        let mut script = vec![terrain, if tough { 0.0 } else { 0.99 }];
        script.extend_from_slice(rest);
        TownSession::new(Outfitter::default(), 0.5, false, ScriptedRolls::new(script)).unwrap()
    }

    #[test]
    fn test_new_town_draws_terrain_and_toughness() {
        let town = town(0.0, true, &[]);
        assert_eq!(town.terrain().name(), "Mountains");
        assert!(town.is_tough());
        assert!(!town.is_occupied());
        assert_eq!(town.describe(), "This nice little town is surrounded by Mountains.");
        assert_eq!(town.to_string(), town.describe());
    }

    #[test]
    fn test_new_town_rejects_bad_toughness() {
        for toughness in [-0.1, 1.5, f64::NAN] {
            let result: TownResult<TestTown> = TownSession::new(
                Outfitter::default(),
                toughness,
                false,
                ScriptedRolls::new(vec![0.5]),
            );
            assert!(matches!(result, Err(TownError::InvalidArgument(_))));
        }
    }

    #[test]
    fn test_arrive_welcome_messages() {
        let mut rough = town(0.0, true, &[]);
        rough.arrive(Adventurer::new("Mara", 10)).unwrap();
        assert_eq!(
            rough.latest_message().to_string(),
            "Welcome to town, Mara.\nIt's pretty rough around here, so watch yourself."
        );

        let mut sleepy = town(0.0, false, &[]);
        sleepy.arrive(Adventurer::new("Mara", 10)).unwrap();
        assert!(sleepy.latest_message().to_string().ends_with("mild mannered folk."));
        assert_eq!(sleepy.state(), VisitState::Occupied);
    }

    #[test]
    fn test_second_arrival_rejected() {
        let mut town = town(0.0, false, &[]);
        town.arrive(Adventurer::new("Mara", 10)).unwrap();
        let rejected = town.arrive(Adventurer::with_kit("Theo", 7, ["Boat"])).unwrap_err();
        assert!(matches!(
            rejected.error,
            TownError::InvalidState {
                expected: VisitState::Empty,
                ..
            }
        ));
        assert_eq!(
            rejected.to_string(),
            "cannot arrive: town is occupied, expected empty"
        );
        assert_eq!(town.hunter().unwrap().name(), "Mara");

        let theo = rejected.into_hunter();
        assert_eq!(theo.name(), "Theo");
        assert_eq!(theo.gold(), 7);
        assert!(theo.has_item("Boat"));
    }

    #[test]
    fn test_rejection_converts_to_town_error() {
        let mut town = town(0.0, false, &[]);
        town.arrive(Adventurer::new("Mara", 10)).unwrap();
        let err: TownError = town.arrive(Adventurer::new("Theo", 10)).unwrap_err().into();
        assert_eq!(err.to_string(), "cannot arrive: town is occupied, expected empty");
    }

    #[test]
    fn test_operations_require_hunter() {
        let mut town = town(0.0, false, &[]);
        assert!(matches!(town.leave(false), Err(TownError::InvalidState { .. })));
        assert!(matches!(town.dig(), Err(TownError::InvalidState { .. })));
        assert!(matches!(town.hunt(), Err(TownError::InvalidState { .. })));
        assert!(matches!(
            town.look_for_trouble(),
            Err(TownError::InvalidState { .. })
        ));
        assert!(matches!(
            town.enter_shop(ShopChoice::Buy),
            Err(TownError::InvalidState { .. })
        ));
    }

    #[test]
    fn test_leave_without_item() {
        let mut town = town(0.0, false, &[]);
        town.arrive(Adventurer::with_kit("Mara", 10, ["Boat"])).unwrap();

        let departure = town.leave(false).unwrap();

        assert_eq!(departure, Departure::Stranded);
        assert!(town.is_occupied());
        assert_eq!(
            town.latest_message().to_string(),
            "You can't leave town, Mara. You don't have a Rope."
        );
        let hunter = town.hunter().unwrap();
        assert_eq!(hunter.gold(), 10);
        assert_eq!(hunter.kit_items(), vec!["Boat".to_string()]);
    }

    #[test]
    fn test_leave_item_breaks() {
        let mut town = town(0.0, false, &[0.1]);
        town.arrive(Adventurer::with_kit("Mara", 10, ["Rope"])).unwrap();

        let hunter = town.leave(false).unwrap().into_hunter().unwrap();

        assert!(!hunter.has_item("Rope"));
        assert!(!town.is_occupied());
        assert_eq!(
            town.latest_message().to_string(),
            "You used your Rope to cross the Mountains.\nUnfortunately, you lost your Rope"
        );
    }

    #[test]
    fn test_leave_item_survives() {
        let mut town = town(0.0, false, &[0.7]);
        town.arrive(Adventurer::with_kit("Mara", 10, ["Rope"])).unwrap();

        let hunter = town.leave(false).unwrap().into_hunter().unwrap();

        assert!(hunter.has_item("Rope"));
        assert_eq!(
            town.latest_message().to_string(),
            "You used your Rope to cross the Mountains."
        );
    }

    #[test]
    fn test_leave_easy_mode_never_breaks() {
        let mut rolls = ScriptedRolls::new(vec![0.0, 0.99, 0.0]);
        let mut town = TownSession::new(Outfitter::default(), 0.5, false, &mut rolls).unwrap();
        town.arrive(Adventurer::with_kit("Mara", 10, ["Rope"])).unwrap();

        let departure = town.leave(true).unwrap();

        assert!(departure.departed());
        assert!(departure.into_hunter().unwrap().has_item("Rope"));
        drop(town);
        // Easy mode skips the wear draw: only terrain and toughness were drawn.
        assert_eq!(rolls.consumed(), 2);
    }

    #[test]
    fn test_leave_normal_mode_makes_wear_draw() {
        let mut rolls = ScriptedRolls::new(vec![0.0, 0.99, 0.9]);
        let mut town = TownSession::new(Outfitter::default(), 0.5, false, &mut rolls).unwrap();
        town.arrive(Adventurer::with_kit("Mara", 10, ["Rope"])).unwrap();

        assert!(town.leave(false).unwrap().departed());
        drop(town);
        assert_eq!(rolls.consumed(), 3);
    }

    #[test]
    fn test_town_accepts_next_visitor() {
        let mut town = town(0.0, false, &[0.9]);
        town.arrive(Adventurer::with_kit("Mara", 10, ["Rope"])).unwrap();
        assert!(town.leave(false).unwrap().departed());

        town.arrive(Adventurer::new("Theo", 3)).unwrap();
        assert_eq!(town.hunter().unwrap().name(), "Theo");
    }

    #[test]
    fn test_trouble_with_town_sword() {
        let mut town = town(0.0, false, &[0.9, 0.45, 0.0]);
        town.set_equipment_available(true);
        town.arrive(Adventurer::new("Mara", 10)).unwrap();

        let outcome = town.look_for_trouble().unwrap();

        assert_eq!(
            outcome,
            BrawlOutcome::Won {
                gold: 5,
                by_sword: true
            }
        );
        assert_eq!(town.hunter().unwrap().gold(), 15);
        let message = town.latest_message().to_string();
        assert!(message.contains("seeing your sword"));
        assert!(message.ends_with("You won the brawl and receive 5 gold."));
        assert!(
            town.latest_message()
                .segments()
                .iter()
                .any(|s| s.tone == Tone::Gold && s.text == "5")
        );
    }

    #[test]
    fn test_trouble_with_shop_sword() {
        let mut shop_town = TownSession::new(
            Outfitter::with_prices([(SWORD.to_string(), 10)]),
            0.0,
            false,
            ScriptedRolls::new(vec![0.0, 0.5, 0.9, 0.0, 0.0]),
        )
        .unwrap();
        shop_town.arrive(Adventurer::new("Mara", 10)).unwrap();
        shop_town.enter_shop(ShopChoice::Buy).unwrap();
        assert!(shop_town.shop().has_sword());
        assert!(shop_town.latest_message().is_empty());

        let outcome = shop_town.look_for_trouble().unwrap();
        assert!(outcome.won());
        assert_eq!(shop_town.hunter().unwrap().gold(), 1);
    }

    #[test]
    fn test_trouble_not_found() {
        let mut town = town(0.0, true, &[0.5, 0.5, 0.5]);
        town.arrive(Adventurer::new("Mara", 10)).unwrap();

        let outcome = town.look_for_trouble().unwrap();

        assert_eq!(outcome, BrawlOutcome::NoTrouble);
        assert_eq!(town.latest_message().to_string(), "You couldn't find any trouble");
        assert_eq!(town.hunter().unwrap().gold(), 10);
    }

    #[test]
    fn test_trouble_lost() {
        let mut town = town(0.0, true, &[0.8, 0.25, 0.1]);
        town.arrive(Adventurer::new("Mara", 10)).unwrap();

        let outcome = town.look_for_trouble().unwrap();

        assert_eq!(outcome, BrawlOutcome::Lost { gold: 3 });
        assert_eq!(town.hunter().unwrap().gold(), 7);
        assert!(
            town.latest_message()
                .to_string()
                .ends_with("You lost the brawl and pay 3 gold.")
        );
    }

    #[test]
    fn test_dig_gold_and_dirt() {
        let mut town = town(0.0, false, &[0.2, 0.5, 0.8, 0.5]);
        town.arrive(Adventurer::new("Mara", 0)).unwrap();

        assert_eq!(town.dig().unwrap(), DigOutcome::Gold(11));
        assert_eq!(town.latest_message().to_string(), "You dug up 11 gold!");
        assert_eq!(town.hunter().unwrap().gold(), 11);

        assert_eq!(town.dig().unwrap(), DigOutcome::Dirt);
        assert_eq!(town.latest_message().to_string(), "You dug but only found dirt");
        assert_eq!(town.hunter().unwrap().gold(), 11);
    }

    #[test]
    fn test_hunt_grants_each_treasure_once() {
        let mut town = town(0.0, false, &[0.1, 0.1, 0.1]);
        town.arrive(Adventurer::new("Mara", 0)).unwrap();

        assert_eq!(town.hunt().unwrap(), HuntOutcome::Found(Treasure::Crown));
        assert_eq!(town.latest_message().to_string(), "You found a crown!");
        assert_eq!(
            town.hunt().unwrap(),
            HuntOutcome::Duplicate(Treasure::Crown)
        );
        assert_eq!(
            town.latest_message().to_string(),
            "You already collected this treasure"
        );
        town.hunt().unwrap();

        assert_eq!(town.hunter().unwrap().treasures(), &[Treasure::Crown]);
        assert!(town.treasure_flags().is_found(Treasure::Crown));
    }

    #[test]
    fn test_hunt_dust() {
        let mut town = town(0.0, false, &[0.8]);
        town.arrive(Adventurer::new("Mara", 0)).unwrap();

        assert_eq!(town.hunt().unwrap(), HuntOutcome::Dust);
        assert_eq!(town.latest_message().to_string(), "You found dust");
        assert_eq!(town.treasure_flags().count(), 0);
    }

    #[test]
    fn test_treasure_flags_persist_across_visitors() {
        let mut town = town(0.0, false, &[0.6, 0.9, 0.6]);
        town.arrive(Adventurer::with_kit("Mara", 0, ["Rope"])).unwrap();
        assert_eq!(town.hunt().unwrap(), HuntOutcome::Found(Treasure::Gem));
        assert!(town.leave(false).unwrap().departed());

        town.arrive(Adventurer::new("Theo", 0)).unwrap();
        assert_eq!(town.hunt().unwrap(), HuntOutcome::Duplicate(Treasure::Gem));
        assert!(town.hunter().unwrap().treasures().is_empty());
    }

    #[test]
    fn test_into_shop_keeps_sword_state() {
        let mut town = TownSession::<Adventurer, _, _>::new(
            Outfitter::with_prices([(SWORD.to_string(), 1)]),
            0.0,
            false,
            ScriptedRolls::new(vec![0.0]),
        )
        .unwrap();
        town.arrive(Adventurer::new("Mara", 5)).unwrap();
        town.enter_shop(ShopChoice::Buy).unwrap();

        let shop = town.into_shop();
        assert!(shop.has_sword());
    }
}
