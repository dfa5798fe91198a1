//! Game sets used to filter which cards get loaded
//!
//! A card's value text may mention the set it was printed in. Loading can be
//! restricted to cards that mention at least one of an allow-list of sets.
//! See <https://boardgamegeek.com/wiki/page/Apples_to_Apples_Series>.

use crate::{CiderError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Known game sets, in their canonical order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    CoreSet,
    CoreExpansion1,
    CoreExpansion2,
    CoreExpansion3,
    CoreExpansion4,
    PartyBox,
    PartyBoxExpansion1,
    KidsSet,
    JuniorSet,
}

impl Category {
    /// Every set, indexed the same way `from_index` reads them
    pub const ALL: [Category; 9] = [
        Category::CoreSet,
        Category::CoreExpansion1,
        Category::CoreExpansion2,
        Category::CoreExpansion3,
        Category::CoreExpansion4,
        Category::PartyBox,
        Category::PartyBoxExpansion1,
        Category::KidsSet,
        Category::JuniorSet,
    ];

    /// The name as it appears inside card text
    pub fn name(self) -> &'static str {
        match self {
            Category::CoreSet => "Core Set",
            Category::CoreExpansion1 => "Core Expansion 1",
            Category::CoreExpansion2 => "Core Expansion 2",
            Category::CoreExpansion3 => "Core Expansion 3",
            Category::CoreExpansion4 => "Core Expansion 4",
            Category::PartyBox => "Party Box",
            Category::PartyBoxExpansion1 => "Party Box Expansion 1",
            Category::KidsSet => "Kids Set",
            Category::JuniorSet => "Junior Set",
        }
    }

    /// Position in `ALL`
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Category> {
        Self::ALL.get(index).copied()
    }

    /// Lowercase, dash-separated form of the name (e.g. `party-box-expansion-1`)
    pub fn slug(self) -> String {
        self.name().to_lowercase().replace(' ', "-")
    }

    /// Does this card text mention the set?
    ///
    /// Plain substring match, so `Party Box` also matches text naming
    /// `Party Box Expansion 1`.
    pub fn matches(self, text: &str) -> bool {
        text.contains(self.name())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = CiderError;

    /// Accepts the display name (any case), the slug, or the index
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();

        if let Ok(index) = s.parse::<usize>() {
            return Category::from_index(index)
                .ok_or_else(|| CiderError::UnknownCategory(s.to_string()));
        }

        let wanted = s.to_lowercase().replace(['-', '_'], " ");
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.name().to_lowercase() == wanted)
            .ok_or_else(|| CiderError::UnknownCategory(s.to_string()))
    }
}

/// Does `text` mention any set in `allowed`?
///
/// An empty allow-list accepts everything.
pub fn is_allowed(text: &str, allowed: &[Category]) -> bool {
    allowed.is_empty() || allowed.iter().any(|c| c.matches(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
            assert_eq!(Category::from_index(i), Some(*category));
        }
        assert_eq!(Category::from_index(9), None);
    }

    #[test]
    fn test_parse_by_name_slug_and_index() {
        assert_eq!("Core Set".parse::<Category>().unwrap(), Category::CoreSet);
        assert_eq!("kids set".parse::<Category>().unwrap(), Category::KidsSet);
        assert_eq!(
            "party-box-expansion-1".parse::<Category>().unwrap(),
            Category::PartyBoxExpansion1
        );
        assert_eq!("8".parse::<Category>().unwrap(), Category::JuniorSet);
    }

    #[test]
    fn test_parse_unknown() {
        assert!(matches!(
            "Deluxe Set".parse::<Category>(),
            Err(CiderError::UnknownCategory(name)) if name == "Deluxe Set"
        ));
        assert!("9".parse::<Category>().is_err());
    }

    #[test]
    fn test_slug() {
        assert_eq!(Category::CoreExpansion3.slug(), "core-expansion-3");
        assert_eq!(Category::JuniorSet.slug(), "junior-set");
    }

    #[test]
    fn test_substring_match_is_not_exclusive() {
        let text = "Loud and crowded. (Party Box Expansion 1)";
        assert!(Category::PartyBoxExpansion1.matches(text));
        assert!(Category::PartyBox.matches(text));
        assert!(!Category::CoreSet.matches(text));
    }

    #[test]
    fn test_is_allowed() {
        let text = "They think for you. (Core Set)";
        assert!(is_allowed(text, &[]));
        assert!(is_allowed(text, &[Category::KidsSet, Category::CoreSet]));
        assert!(!is_allowed(text, &[Category::KidsSet]));
    }
}
