//! Terrain surrounding a town.

use std::fmt;

use serde::Serialize;

use crate::error::{TownError, TownResult};
use crate::game::Hunter;

/// The obstacle around a town and the one item needed to cross it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Terrain {
    name: String,
    required_item: String,
}

impl Terrain {
    /// Create a terrain.
    ///
    /// # Errors
    ///
    /// Returns [`TownError::InvalidArgument`] if either string is empty.
    pub fn new(name: impl Into<String>, required_item: impl Into<String>) -> TownResult<Self> {
        let name = name.into();
        let required_item = required_item.into();

        if name.is_empty() {
            return Err(TownError::InvalidArgument("terrain name is empty".into()));
        }
        if required_item.is_empty() {
            return Err(TownError::InvalidArgument(format!(
                "required item for {name} is empty"
            )));
        }

        Ok(Self {
            name,
            required_item,
        })
    }

    /// Build one of the built-in terrains. Both names are known non-empty.
    pub(crate) fn preset(name: &'static str, required_item: &'static str) -> Self {
        Self {
            name: name.to_string(),
            required_item: required_item.to_string(),
        }
    }

    /// Name of the terrain, e.g. "Mountains".
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Item a hunter must carry to cross.
    #[must_use]
    pub fn required_item(&self) -> &str {
        &self.required_item
    }

    /// Check whether the hunter currently carries the required item.
    #[must_use]
    pub fn can_cross<H: Hunter + ?Sized>(&self, hunter: &H) -> bool {
        hunter.has_item(&self.required_item)
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Adventurer;

    #[test]
    fn test_terrain_accessors() {
        let terrain = Terrain::new("Jungle", "Machete").unwrap();
        assert_eq!(terrain.name(), "Jungle");
        assert_eq!(terrain.required_item(), "Machete");
        assert_eq!(terrain.to_string(), "Jungle");
    }

    #[test]
    fn test_terrain_rejects_empty_name() {
        let err = Terrain::new("", "Rope").unwrap_err();
        assert!(matches!(err, TownError::InvalidArgument(_)));
    }

    #[test]
    fn test_terrain_rejects_empty_item() {
        let err = Terrain::new("Mountains", "").unwrap_err();
        assert!(matches!(err, TownError::InvalidArgument(_)));
    }

    #[test]
    fn test_can_cross_checks_kit() {
        let terrain = Terrain::new("Ocean", "Boat").unwrap();
        let mut hunter = Adventurer::new("Ahab", 10);
        assert!(!terrain.can_cross(&hunter));

        hunter.add_item("Boat");
        assert!(terrain.can_cross(&hunter));
    }
}
