//! Play command implementation.

use super::{CliError, seed_or_clock};
use boomtown::{
    Adventurer, GameConfig, Hunter, Narrative, Outfitter, SeededTown, ShopChoice, Tone, TownError,
    seeded_town,
};
use crossterm::style::Stylize;
use std::io::{self, BufRead, Write};

const MENU: &str = "\
(B)uy something at the shop.
(S)ell something at the shop.
(M)ove on to a different town.
(L)ook for trouble!
(D)ig for gold.
(H)unt for treasure.
Give up the hunt and e(X)it.";

/// Write a narrative, coloring each toned run.
fn render(out: &mut impl Write, narrative: &Narrative) -> io::Result<()> {
    for segment in narrative.segments() {
        let text = segment.text.as_str();
        match segment.tone {
            Tone::Plain => write!(out, "{text}")?,
            Tone::Danger => write!(out, "{}", text.red())?,
            Tone::Gold => write!(out, "{}", text.yellow())?,
        }
    }
    writeln!(out)
}

/// Write the hunter's purse, kit and treasures.
fn render_status(out: &mut impl Write, hunter: &Adventurer) -> io::Result<()> {
    let kit = if hunter.kit().is_empty() {
        "none".to_string()
    } else {
        hunter.kit_items().join(", ")
    };
    let treasures = if hunter.treasures().is_empty() {
        "none".to_string()
    } else {
        hunter
            .treasures()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    };

    writeln!(
        out,
        "{} has {} gold",
        hunter.name(),
        hunter.purse().to_string().yellow()
    )?;
    writeln!(out, "Kit: {kit}")?;
    writeln!(out, "Treasures found: {treasures}")
}

/// Build the next town and walk the hunter into it.
fn enter_town(
    out: &mut impl Write,
    seed: u64,
    config: &GameConfig,
    shop: Outfitter,
    hunter: Adventurer,
) -> Result<SeededTown, CliError> {
    let mut town = seeded_town(seed, config, shop)?;
    town.arrive(hunter).map_err(TownError::from)?;
    writeln!(out)?;
    render(out, town.latest_message())?;
    Ok(town)
}

/// Execute the play command.
///
/// Reads one menu choice per line from stdin until the hunter exits, stdin
/// closes, or every treasure has been collected.
///
/// # Errors
///
/// Returns an error if a town cannot be built or the terminal fails.
pub(crate) fn execute(config: &GameConfig, seed: Option<u64>, name: &str) -> Result<(), CliError> {
    let seed = seed_or_clock(seed);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut out = io::stdout().lock();

    let hunter = Adventurer::with_kit(
        name,
        config.starting_gold,
        config.starting_kit.iter().cloned(),
    );
    let mut towns_visited: u64 = 0;
    let mut town = enter_town(&mut out, seed, config, config.outfitter(), hunter)?;

    loop {
        writeln!(out)?;
        writeln!(out, "{town}")?;
        if let Some(hunter) = town.hunter() {
            render_status(&mut out, hunter)?;
        }
        writeln!(out)?;
        writeln!(out, "{MENU}")?;
        write!(out, "What's your next move? ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let choice = line?.trim().to_ascii_lowercase();
        writeln!(out)?;

        match choice.as_str() {
            "b" | "s" => {
                let choice: ShopChoice = choice.parse()?;
                town.enter_shop(choice)?;
                if let Some(receipt) = town.shop().last_receipt() {
                    writeln!(out, "{receipt}")?;
                }
            }
            "m" => {
                let departure = town.leave(config.easy_mode)?;
                render(&mut out, town.latest_message())?;
                if let Some(hunter) = departure.into_hunter() {
                    towns_visited += 1;
                    let shop = town.into_shop();
                    town = enter_town(
                        &mut out,
                        seed.wrapping_add(towns_visited),
                        config,
                        shop,
                        hunter,
                    )?;
                }
            }
            "l" => {
                town.look_for_trouble()?;
                render(&mut out, town.latest_message())?;
            }
            "d" => {
                town.dig()?;
                render(&mut out, town.latest_message())?;
            }
            "h" => {
                town.hunt()?;
                render(&mut out, town.latest_message())?;
                if town.hunter().is_some_and(Adventurer::has_full_collection) {
                    writeln!(out)?;
                    writeln!(
                        out,
                        "{}",
                        "You found the last of the three treasures, you win!".yellow()
                    )?;
                    break;
                }
            }
            "x" => {
                writeln!(out, "Fare thee well, {name}!")?;
                break;
            }
            _ => writeln!(out, "Yikes! That's an invalid option! Try again.")?,
        }
    }

    Ok(())
}
