pub mod presets;

use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

pub use presets::*;

pub const NA: &str = "NA";
pub const CUSTOM: &str = "custom";

pub fn is_sentinel(value: &str) -> bool {
    value == NA || value == CUSTOM
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Genre {
    #[default]
    Realistic,
    Fantasy,
}

impl Genre {
    pub const ALL: [Genre; 2] = [Genre::Realistic, Genre::Fantasy];

    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Realistic => "realistic",
            Genre::Fantasy => "fantasy",
        }
    }

    pub fn other(&self) -> Genre {
        match self {
            Genre::Realistic => Genre::Fantasy,
            Genre::Fantasy => Genre::Realistic,
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Genre {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "realistic" => Ok(Genre::Realistic),
            "fantasy" => Ok(Genre::Fantasy),
            other => Err(anyhow!("Unknown genre '{}'", other)),
        }
    }
}

pub fn ethnicities(genre: Genre) -> &'static [&'static str] {
    match genre {
        Genre::Realistic => ETHNICITIES_REALISTIC,
        Genre::Fantasy => RACES_FANTASY,
    }
}

pub fn all_ethnicities() -> Vec<&'static str> {
    let mut merged: Vec<&'static str> = Vec::new();
    for &value in ETHNICITIES_REALISTIC.iter().chain(RACES_FANTASY.iter()) {
        if !merged.contains(&value) {
            merged.push(value);
        }
    }
    merged
}

pub fn locations(genre: Genre) -> &'static [&'static str] {
    match genre {
        Genre::Realistic => LOCATIONS_REALISTIC,
        Genre::Fantasy => LOCATIONS_FANTASY,
    }
}

pub fn accessories(genre: Genre) -> &'static [&'static str] {
    match genre {
        Genre::Realistic => ACCESSORIES_REALISTIC,
        Genre::Fantasy => ACCESSORIES_FANTASY,
    }
}

pub fn footwear(genre: Genre) -> &'static [&'static str] {
    match genre {
        Genre::Realistic => FOOTWEAR_REALISTIC,
        Genre::Fantasy => FOOTWEAR_FANTASY,
    }
}

pub fn era(genre: Genre) -> &'static str {
    match genre {
        Genre::Realistic => "modern",
        Genre::Fantasy => "fantasy",
    }
}

pub fn sampling_pool(options: &'static [&'static str]) -> Vec<&'static str> {
    options
        .iter()
        .copied()
        .filter(|value| !is_sentinel(value))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutfitCategory {
    Casual,
    Formal,
    Athletic,
    Common,
    Noble,
    Warrior,
    Magic,
}

impl OutfitCategory {
    /// Category draw population. The everyday category is listed twice so it
    /// comes up at twice the rate of each other category.
    pub fn population(genre: Genre) -> &'static [OutfitCategory] {
        match genre {
            Genre::Realistic => &[
                OutfitCategory::Casual,
                OutfitCategory::Casual,
                OutfitCategory::Formal,
                OutfitCategory::Athletic,
            ],
            Genre::Fantasy => &[
                OutfitCategory::Common,
                OutfitCategory::Common,
                OutfitCategory::Noble,
                OutfitCategory::Warrior,
                OutfitCategory::Magic,
            ],
        }
    }

    pub fn genre(&self) -> Genre {
        match self {
            OutfitCategory::Casual | OutfitCategory::Formal | OutfitCategory::Athletic => {
                Genre::Realistic
            }
            _ => Genre::Fantasy,
        }
    }

    pub fn options(&self) -> &'static [&'static str] {
        match self {
            OutfitCategory::Casual => OUTFITS_CASUAL,
            OutfitCategory::Formal => OUTFITS_FORMAL,
            OutfitCategory::Athletic => OUTFITS_ATHLETIC,
            OutfitCategory::Common => OUTFITS_FANTASY_COMMON,
            OutfitCategory::Noble => OUTFITS_FANTASY_NOBLE,
            OutfitCategory::Warrior => OUTFITS_FANTASY_WARRIOR,
            OutfitCategory::Magic => OUTFITS_FANTASY_MAGIC,
        }
    }
}

pub fn outfits(genre: Genre) -> Vec<&'static str> {
    let mut categories = OutfitCategory::population(genre).to_vec();
    categories.dedup();
    categories
        .into_iter()
        .flat_map(|category| category.options().iter().copied())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shared(a: &[&str], b: &[&str]) -> Vec<String> {
        a.iter()
            .filter(|value| b.contains(value))
            .map(|value| value.to_string())
            .collect()
    }

    #[test]
    fn ethnicity_catalogues_only_share_sentinels() {
        let overlap = shared(ETHNICITIES_REALISTIC, RACES_FANTASY);
        assert_eq!(overlap, vec![NA.to_string(), CUSTOM.to_string()]);
    }

    #[test]
    fn locations_and_outfits_are_disjoint_between_genres() {
        assert!(shared(LOCATIONS_REALISTIC, LOCATIONS_FANTASY).is_empty());
        assert!(shared(&outfits(Genre::Realistic), &outfits(Genre::Fantasy)).is_empty());
    }

    #[test]
    fn sampling_pool_drops_sentinels_only() {
        let pool = sampling_pool(GENDERS);
        assert_eq!(pool, vec!["female", "male", "non-binary"]);
        assert_eq!(sampling_pool(BODY_TYPES).len(), BODY_TYPES.len() - 2);
    }

    #[test]
    fn all_ethnicities_keeps_first_occurrence_order() {
        let merged = all_ethnicities();
        assert_eq!(merged.first(), Some(&NA));
        assert_eq!(merged.iter().filter(|value| **value == CUSTOM).count(), 1);
        assert_eq!(
            merged.len(),
            ETHNICITIES_REALISTIC.len() + RACES_FANTASY.len() - 2
        );
    }

    #[test]
    fn everyday_outfit_category_has_double_weight() {
        let realistic = OutfitCategory::population(Genre::Realistic);
        let casual = realistic
            .iter()
            .filter(|c| **c == OutfitCategory::Casual)
            .count();
        assert_eq!(casual, 2);
        assert_eq!(realistic.len(), 4);

        let fantasy = OutfitCategory::population(Genre::Fantasy);
        let common = fantasy
            .iter()
            .filter(|c| **c == OutfitCategory::Common)
            .count();
        assert_eq!(common, 2);
        assert!(fantasy.iter().all(|c| c.genre() == Genre::Fantasy));
    }

    #[test]
    fn genre_parses_case_insensitively() {
        assert_eq!("Fantasy".parse::<Genre>().unwrap(), Genre::Fantasy);
        assert!("scifi".parse::<Genre>().is_err());
        assert_eq!(Genre::Realistic.other(), Genre::Fantasy);
    }
}
