//! Seasonal context derived from the calendar month.

use std::fmt;

use jiff::Zoned;
use serde::{Deserialize, Serialize};

/// Northern-hemisphere season.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    /// Maps a calendar month (1-12) to its season. Out-of-range months are
    /// treated as winter.
    pub fn from_month(month: i8) -> Self {
        match month {
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            9..=11 => Season::Fall,
            _ => Season::Winter,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
            Season::Winter => "Winter",
        }
    }

    /// Representative in-season ingredients, most characteristic first.
    pub fn ingredients(&self) -> &'static [&'static str] {
        match self {
            Season::Spring => &[
                "asparagus",
                "peas",
                "radishes",
                "spring onions",
                "spinach",
                "artichokes",
                "new potatoes",
                "rhubarb",
                "strawberries",
                "fresh herbs",
                "lamb",
            ],
            Season::Summer => &[
                "tomatoes",
                "zucchini",
                "corn",
                "bell peppers",
                "eggplant",
                "cucumbers",
                "green beans",
                "berries",
                "peaches",
                "basil",
                "watermelon",
            ],
            Season::Fall => &[
                "butternut squash",
                "pumpkin",
                "sweet potatoes",
                "apples",
                "brussels sprouts",
                "cauliflower",
                "mushrooms",
                "kale",
                "pears",
                "cranberries",
                "parsnips",
            ],
            Season::Winter => &[
                "cabbage",
                "leeks",
                "root vegetables",
                "citrus fruits",
                "kale",
                "turnips",
                "carrots",
                "beets",
                "pomegranates",
                "winter squash",
                "celeriac",
            ],
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A season together with its featured ingredients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonContext {
    pub season: Season,
    pub ingredients: &'static [&'static str],
}

impl SeasonContext {
    /// Season context for a calendar month.
    pub fn for_month(month: i8) -> Self {
        let season = Season::from_month(month);
        Self {
            season,
            ingredients: season.ingredients(),
        }
    }

    /// Season context for today in the system time zone.
    pub fn current() -> Self {
        Self::for_month(Zoned::now().month())
    }

    /// The first `n` featured ingredients.
    pub fn featured(&self, n: usize) -> &'static [&'static str] {
        &self.ingredients[..n.min(self.ingredients.len())]
    }
}
