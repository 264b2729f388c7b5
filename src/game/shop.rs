//! Shop contract and the reference outfitter.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use crate::error::TownError;
use crate::game::Hunter;

/// Item that makes every brawl a sure win.
pub const SWORD: &str = "Sword";

/// Default outfitter prices in gold.
pub const DEFAULT_PRICES: [(&str, u32); 7] = [
    ("Water", 2),
    ("Rope", 4),
    ("Machete", 6),
    ("Boots", 8),
    (SWORD, 10),
    ("Horse", 12),
    ("Boat", 20),
];

/// What the hunter wants to do at the shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopChoice {
    /// Buy something.
    Buy,
    /// Sell something.
    Sell,
}

impl FromStr for ShopChoice {
    type Err = TownError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "buy" | "b" => Ok(Self::Buy),
            "sell" | "s" => Ok(Self::Sell),
            other => Err(TownError::InvalidArgument(format!(
                "unknown shop choice '{other}'"
            ))),
        }
    }
}

/// A town shop as seen by the town.
pub trait ShopGateway {
    /// Let the hunter trade. The shop does its own bookkeeping on gold and kit.
    fn enter(&mut self, hunter: &mut dyn Hunter, choice: ShopChoice);

    /// Whether the shop has armed the hunter with a sword.
    fn has_sword(&self) -> bool;
}

/// Outcome of the last visit to an [`Outfitter`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum Receipt {
    /// The hunter bought an item.
    Bought {
        /// Item bought.
        item: String,
        /// Gold paid.
        price: u32,
    },
    /// The hunter sold an item.
    Sold {
        /// Item sold.
        item: String,
        /// Gold received.
        price: u32,
    },
    /// Nothing the hunter lacks is affordable.
    NothingAffordable,
    /// The hunter carries nothing the shop buys.
    NothingToSell,
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Receipt::Bought { item, price } => {
                write!(f, "You bought a {item} for {price} gold.")
            }
            Receipt::Sold { item, price } => write!(f, "You sold your {item} for {price} gold."),
            Receipt::NothingAffordable => write!(f, "There's nothing here you can afford."),
            Receipt::NothingToSell => write!(f, "You have nothing the shop wants."),
        }
    }
}

/// A no-haggling general store.
///
/// Buying picks the cheapest affordable item the hunter lacks. Selling parts
/// with the hunter's most valuable item for half its price.
#[derive(Debug, Clone)]
pub struct Outfitter {
    prices: BTreeMap<String, u32>,
    has_sword: bool,
    last_receipt: Option<Receipt>,
}

impl Default for Outfitter {
    fn default() -> Self {
        Self::with_prices(
            DEFAULT_PRICES
                .iter()
                .map(|&(item, price)| (item.to_string(), price)),
        )
    }
}

impl Outfitter {
    /// Create an outfitter with a custom price list.
    #[must_use]
    pub fn with_prices(prices: impl IntoIterator<Item = (String, u32)>) -> Self {
        Self {
            prices: prices.into_iter().collect(),
            has_sword: false,
            last_receipt: None,
        }
    }

    /// Price of an item, if the shop stocks it.
    #[must_use]
    pub fn price(&self, item: &str) -> Option<u32> {
        self.prices.get(item).copied()
    }

    /// Full price list.
    #[must_use]
    pub fn prices(&self) -> &BTreeMap<String, u32> {
        &self.prices
    }

    /// What happened on the last visit.
    #[must_use]
    pub fn last_receipt(&self) -> Option<&Receipt> {
        self.last_receipt.as_ref()
    }

    fn buy(&mut self, hunter: &mut dyn Hunter) -> Receipt {
        let gold = hunter.gold();
        let choice = self
            .prices
            .iter()
            .filter(|&(item, &price)| !hunter.has_item(item) && i64::from(price) <= gold)
            .min_by_key(|&(_, &price)| price);

        let Some((item, &price)) = choice else {
            return Receipt::NothingAffordable;
        };

        hunter.change_gold(-i64::from(price));
        hunter.add_item_to_kit(item);
        if item == SWORD {
            self.has_sword = true;
        }

        Receipt::Bought {
            item: item.clone(),
            price,
        }
    }

    fn sell(&mut self, hunter: &mut dyn Hunter) -> Receipt {
        let choice = hunter
            .kit_items()
            .into_iter()
            .filter_map(|item| self.price(&item).map(|price| (item, price)))
            .max_by_key(|&(_, price)| price);

        let Some((item, price)) = choice else {
            return Receipt::NothingToSell;
        };

        let payout = price / 2;
        hunter.remove_item_from_kit(&item);
        hunter.change_gold(i64::from(payout));
        if item == SWORD {
            self.has_sword = false;
        }

        Receipt::Sold {
            item,
            price: payout,
        }
    }
}

impl ShopGateway for Outfitter {
    fn enter(&mut self, hunter: &mut dyn Hunter, choice: ShopChoice) {
        let receipt = match choice {
            ShopChoice::Buy => self.buy(hunter),
            ShopChoice::Sell => self.sell(hunter),
        };
        debug!(hunter = hunter.name(), ?receipt, "shop visit");
        self.last_receipt = Some(receipt);
    }

    fn has_sword(&self) -> bool {
        self.has_sword
    }
}
