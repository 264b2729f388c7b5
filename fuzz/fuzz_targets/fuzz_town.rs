#![no_main]

use arbitrary::Arbitrary;
use boomtown::game::HuntOutcome;
use boomtown::{Adventurer, Hunter, Outfitter, ScriptedRolls, ShopChoice, TownSession, Treasure};
use libfuzzer_sys::fuzz_target;

/// One step a hunter (or the town) can take.
#[derive(Arbitrary, Debug, Clone, Copy)]
enum Step {
    Arrive { gold: u16, with_item: bool },
    Shop { buy: bool },
    Trouble,
    Dig,
    Hunt,
    Leave { easy: bool },
    ToggleSword,
}

/// Structured input for town fuzzing.
#[derive(Arbitrary, Debug)]
struct TownInput {
    /// Probability that the town is tough.
    toughness: f64,
    /// Draws fed to the town, cycled.
    draws: Vec<f64>,
    /// Operations to apply.
    steps: Vec<Step>,
}

fuzz_target!(|input: TownInput| {
    let toughness = if input.toughness.is_finite() {
        input.toughness.abs().fract()
    } else {
        0.5
    };
    let steps = &input.steps[..input.steps.len().min(500)];

    let Ok(mut town) = TownSession::new(
        Outfitter::default(),
        toughness,
        false,
        ScriptedRolls::new(input.draws),
    ) else {
        return;
    };
    let item = town.terrain().required_item().to_string();
    let mut granted = 0usize;
    let mut visitors = 0u32;

    for &step in steps {
        let flags = town.treasure_flags();
        let occupied = town.is_occupied();

        match step {
            Step::Arrive { gold, with_item } => {
                visitors += 1;
                let mut hunter = Adventurer::new(format!("H{visitors}"), u32::from(gold));
                if with_item {
                    hunter.add_item(item.as_str());
                }
                assert_eq!(town.arrive(hunter).is_ok(), !occupied);
            }
            Step::Shop { buy } => {
                let choice = if buy { ShopChoice::Buy } else { ShopChoice::Sell };
                assert_eq!(town.enter_shop(choice).is_ok(), occupied);
            }
            Step::Trouble => {
                let before = town.hunter().map(Hunter::gold);
                let result = town.look_for_trouble();
                assert_eq!(result.is_ok(), occupied);
                if let (Ok(outcome), Some(before)) = (result, before) {
                    let after = town.hunter().map_or(0, Hunter::gold);
                    assert_eq!(after, (before + outcome.gold_delta()).max(0));
                }
            }
            Step::Dig => assert_eq!(town.dig().is_ok(), occupied),
            Step::Hunt => {
                let result = town.hunt();
                assert_eq!(result.is_ok(), occupied);
                if let Ok(HuntOutcome::Found(treasure)) = result {
                    assert!(!flags.is_found(treasure));
                    granted += 1;
                }
            }
            Step::Leave { easy } => {
                let can_cross = town.hunter().is_some_and(|h| h.has_item(&item));
                let result = town.leave(easy);
                assert_eq!(result.is_ok(), occupied);
                if let Ok(departure) = result {
                    assert_eq!(departure.departed(), can_cross);
                    assert_eq!(town.is_occupied(), !can_cross);
                }
            }
            Step::ToggleSword => {
                let current = town.equipment_available();
                town.set_equipment_available(!current);
            }
        }

        // Flags only ever get set.
        let after = town.treasure_flags();
        for treasure in Treasure::ALL {
            assert!(!flags.is_found(treasure) || after.is_found(treasure));
        }
        assert_eq!(town.terrain().required_item(), item);
    }

    assert_eq!(town.treasure_flags().count(), granted);
});
