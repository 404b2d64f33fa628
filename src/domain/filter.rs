// src/domain/filter.rs

use crate::domain::property::{PropertyRecord, PropertyStatus};
use serde::{Deserialize, Serialize};

/// Inclusive `[min, max]` range over a numeric attribute.
///
/// Construction does not enforce `min <= max`; callers that accept user input
/// go through [`ValueRange::clamped`] first. An inverted range simply matches
/// nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: u64,
    pub max: u64,
}

impl ValueRange {
    pub const fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: u64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Orders the two bounds and pulls both inside `outer`.
    pub fn clamped(self, outer: ValueRange) -> Self {
        let (lo, hi) = if self.min <= self.max {
            (self.min, self.max)
        } else {
            (self.max, self.min)
        };
        Self {
            min: lo.clamp(outer.min, outer.max),
            max: hi.clamp(outer.min, outer.max),
        }
    }
}

/// Full slider extents for the listing page, taken from the fixture set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureBounds {
    pub square_footage: ValueRange,
    pub square_footage_step: u64,
    pub price: ValueRange,
    pub price_step: u64,
}

fn ceil_to_step(value: u64, step: u64) -> u64 {
    value.div_ceil(step).saturating_mul(step)
}

impl FixtureBounds {
    /// Default extents, widened so every record in `records` fits.
    ///
    /// Each upper bound is the largest value rounded up to its step, never
    /// below the default.
    pub fn covering(records: &[PropertyRecord]) -> Self {
        let base = Self::default();
        let largest_area = records.iter().map(|r| r.square_footage).max().unwrap_or(0);
        let largest_price = records.iter().map(|r| r.total_price).max().unwrap_or(0);
        Self {
            square_footage: ValueRange::new(
                base.square_footage.min,
                ceil_to_step(largest_area, base.square_footage_step).max(base.square_footage.max),
            ),
            price: ValueRange::new(
                base.price.min,
                ceil_to_step(largest_price, base.price_step).max(base.price.max),
            ),
            ..base
        }
    }
}

impl Default for FixtureBounds {
    fn default() -> Self {
        Self {
            square_footage: ValueRange::new(0, 150_000),
            square_footage_step: 5_000,
            price: ValueRange::new(0, 600_000_000),
            price_step: 10_000_000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(PropertyStatus),
}

impl StatusFilter {
    pub fn accepts(&self, status: PropertyStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    /// Unknown values fall back to `All`.
    pub fn parse_lenient(raw: &str) -> Self {
        raw.parse::<PropertyStatus>()
            .map(StatusFilter::Only)
            .unwrap_or_default()
    }
}

/// User-adjustable criteria for the listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search_query: String,
    pub status: StatusFilter,
    pub square_footage: ValueRange,
    pub price: ValueRange,
}

impl FilterCriteria {
    /// Criteria that let every record in the fixture bounds through.
    pub fn unrestricted(bounds: &FixtureBounds) -> Self {
        Self {
            search_query: String::new(),
            status: StatusFilter::All,
            square_footage: bounds.square_footage,
            price: bounds.price,
        }
    }

    /// True when the text query or the status narrows the results.
    ///
    /// Ranges are left out on purpose: the reset affordance on the listing
    /// page only shows up for these two.
    pub fn narrows_by_text_or_status(&self) -> bool {
        !self.search_query.is_empty() || self.status != StatusFilter::All
    }
}

fn text_matches(record: &PropertyRecord, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    [&record.name, &record.city, &record.submarket]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Whether a single record passes every criterion.
pub fn matches(record: &PropertyRecord, criteria: &FilterCriteria) -> bool {
    text_matches(record, &criteria.search_query)
        && criteria.status.accepts(record.status)
        && criteria.square_footage.contains(record.square_footage)
        && criteria.price.contains(record.total_price)
}

/// Stable filter: matching records in their original order.
pub fn filter_all<'a>(
    records: &'a [PropertyRecord],
    criteria: &FilterCriteria,
) -> Vec<&'a PropertyRecord> {
    records.iter().filter(|r| matches(r, criteria)).collect()
}
