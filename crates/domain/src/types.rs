// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Deserializer, Serialize};

/// A price as carried by a rendered control.
///
/// The value is kept verbatim as it was displayed. The backend is the source
/// of truth for final pricing, so no re-validation happens client-side.
/// The wire form is always a JSON string; numbers are accepted on input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PriceTag(String);

impl PriceTag {
    /// Creates a price tag from its displayed value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Creates a price tag from a whole-dollar amount.
    #[must_use]
    pub fn from_amount(amount: u32) -> Self {
        Self(amount.to_string())
    }

    /// Returns the verbatim value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the numeric amount, if the value is a whole number.
    #[must_use]
    pub fn amount(&self) -> Option<u32> {
        self.0.trim().parse().ok()
    }
}

impl std::fmt::Display for PriceTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${}", self.0)
    }
}

impl<'de> Deserialize<'de> for PriceTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Integer(i64),
            Float(f64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => Self(s),
            Raw::Integer(n) => Self(n.to_string()),
            Raw::Float(n) => Self(n.to_string()),
        })
    }
}

/// A course as offered by the backend catalog.
///
/// This is a read-only snapshot taken once per page load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseOffering {
    /// The backend identifier.
    pub id: i64,
    /// The course name; also the key used by the availability and video maps.
    pub name: String,
    /// Price in whole dollars.
    pub price: u32,
    /// Number of sessions, if published.
    #[serde(default)]
    pub sessions: Option<u32>,
    /// Meeting frequency (free text), if published.
    #[serde(default)]
    pub frequency: Option<String>,
    /// Remaining seats, if the catalog endpoint reports them.
    #[serde(default)]
    pub remaining: Option<i64>,
}

/// One selected course or supply in a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// The item name.
    pub name: String,
    /// The price as displayed on the control.
    pub price: PriceTag,
}

impl LineItem {
    /// Creates a new line item.
    #[must_use]
    pub fn new(name: impl Into<String>, price: PriceTag) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// A purchasable supply item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Supply {
    /// The item name as recorded by the backend.
    pub name: &'static str,
    /// Price in whole dollars.
    pub price: u32,
}

/// Supplies offered alongside courses.
///
/// There is no catalog endpoint for supplies, so the list is fixed.
const SUPPLIES: &[Supply] = &[
    Supply {
        name: "全套舞蹈服裝",
        price: 1400,
    },
    Supply {
        name: "舞衣",
        price: 700,
    },
    Supply {
        name: "舞鞋",
        price: 250,
    },
    Supply {
        name: "舞襪",
        price: 150,
    },
    Supply {
        name: "舞袋",
        price: 300,
    },
];

/// Returns the fixed supply catalog in display order.
#[must_use]
pub const fn default_supplies() -> &'static [Supply] {
    SUPPLIES
}
