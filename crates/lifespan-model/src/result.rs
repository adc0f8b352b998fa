//! Estimation output types.

use chrono::NaiveDate;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::enums::Factor;

/// One signed year delta applied to the baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adjustment {
    pub factor: Factor,
    pub years: f64,
}

/// Ordered factor breakdown.
///
/// Insertion order is presentation order. Serializes as a JSON object keyed
/// by factor name, preserving that order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Adjustments {
    entries: Vec<Adjustment>,
}

impl Adjustments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an adjustment. A second entry for the same factor replaces the
    /// first in place.
    pub fn push(&mut self, factor: Factor, years: f64) {
        match self.entries.iter_mut().find(|entry| entry.factor == factor) {
            Some(entry) => entry.years = years,
            None => self.entries.push(Adjustment { factor, years }),
        }
    }

    pub fn get(&self, factor: Factor) -> Option<f64> {
        self.entries
            .iter()
            .find(|entry| entry.factor == factor)
            .map(|entry| entry.years)
    }

    pub fn contains(&self, factor: Factor) -> bool {
        self.get(factor).is_some()
    }

    /// Sum of all deltas.
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|entry| entry.years).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Adjustment> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Copy with every delta mapped through `f`.
    pub fn map_years(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .map(|entry| Adjustment {
                    factor: entry.factor,
                    years: f(entry.years),
                })
                .collect(),
        }
    }
}

impl FromIterator<Adjustment> for Adjustments {
    fn from_iter<I: IntoIterator<Item = Adjustment>>(iter: I) -> Self {
        let mut adjustments = Self::new();
        for adjustment in iter {
            adjustments.push(adjustment.factor, adjustment.years);
        }
        adjustments
    }
}

impl Serialize for Adjustments {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(entry.factor.as_str(), &entry.years)?;
        }
        map.end()
    }
}

/// The estimate returned to callers. Numeric fields are rounded to two
/// decimals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionResult {
    pub name: Option<String>,
    pub birth_date: NaiveDate,
    pub current_age_years: f64,
    pub predicted_lifespan_years: f64,
    pub predicted_death_date: NaiveDate,
    pub remaining_years: f64,
    /// Integer score in 50..=90.
    pub confidence: u8,
    pub factors: Adjustments,
}
