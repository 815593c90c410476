//! Formula categories for synthetic history.
//!
//! # Examples
//!
//! ```
//! use series_core::types::Category;
//!
//! assert_eq!(Category::from_tag("tariff"), Category::Tariff);
//! assert_eq!(Category::from_tag("Shipping"), Category::Shipping);
//!
//! // Unknown tags fall back rather than fail
//! assert_eq!(Category::from_tag("weather"), Category::Unclassified);
//! ```

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Domain tag selecting which synthetic-value formula the generator applies.
///
/// The six named variants mirror the dashboard's data families.
/// `Unclassified` is the fallback arm for any tag outside that set;
/// no card in the sample catalogue uses it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Category {
    /// Raw materials: wide band plus a slow sine swing
    Commodity,
    /// Freight indices: elevated band for months 37-47
    Shipping,
    /// FX rates: band with a linear upward drift
    Exchange,
    /// Policy and market rates: flat, then stepped, then banded
    Interest,
    /// Macro indicators and equities: narrow band plus a gentle sine
    #[default]
    Economy,
    /// Tariff rates: fixed 25, stepped cut, then current level
    Tariff,
    /// Anything else: plain band around the baseline
    #[cfg_attr(feature = "serde", serde(other))]
    Unclassified,
}

impl Category {
    /// The named categories, excluding the fallback arm.
    pub const KNOWN: [Category; 6] = [
        Category::Commodity,
        Category::Shipping,
        Category::Exchange,
        Category::Interest,
        Category::Economy,
        Category::Tariff,
    ];

    /// Maps a tag to its category, case-insensitively.
    ///
    /// Never fails: unrecognised tags map to [`Category::Unclassified`].
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "commodity" => Category::Commodity,
            "shipping" => Category::Shipping,
            "exchange" => Category::Exchange,
            "interest" => Category::Interest,
            "economy" => Category::Economy,
            "tariff" => Category::Tariff,
            _ => Category::Unclassified,
        }
    }

    /// Returns the lowercase tag for this category.
    pub fn tag(&self) -> &'static str {
        match self {
            Category::Commodity => "commodity",
            Category::Shipping => "shipping",
            Category::Exchange => "exchange",
            Category::Interest => "interest",
            Category::Economy => "economy",
            Category::Tariff => "tariff",
            Category::Unclassified => "unclassified",
        }
    }
}

impl FromStr for Category {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Category::from_tag(s))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
