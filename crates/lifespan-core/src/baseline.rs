//! Baseline life expectancy by country and gender.
//!
//! The table is a `static` and never mutated, so it can be read from any
//! number of threads without synchronisation.

use lifespan_model::{Country, Gender};

/// Baseline years for one country, one value per gender.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountryBaseline {
    pub country: Country,
    pub male: f64,
    pub female: f64,
    pub unspecified: f64,
}

impl CountryBaseline {
    pub fn for_gender(&self, gender: Gender) -> f64 {
        match gender {
            Gender::Male => self.male,
            Gender::Female => self.female,
            Gender::Unspecified => self.unspecified,
        }
    }
}

const GLOBAL: CountryBaseline = CountryBaseline {
    country: Country::Global,
    male: 71.0,
    female: 75.6,
    unspecified: 73.3,
};

/// Baselines in years. Every country defines all three genders.
pub static BASELINE_TABLE: [CountryBaseline; 6] = [
    GLOBAL,
    CountryBaseline {
        country: Country::Usa,
        male: 73.2,
        female: 79.1,
        unspecified: 76.2,
    },
    CountryBaseline {
        country: Country::Uk,
        male: 79.0,
        female: 82.9,
        unspecified: 81.0,
    },
    CountryBaseline {
        country: Country::India,
        male: 67.5,
        female: 70.7,
        unspecified: 69.1,
    },
    CountryBaseline {
        country: Country::Japan,
        male: 81.5,
        female: 87.6,
        unspecified: 84.5,
    },
    CountryBaseline {
        country: Country::Nigeria,
        male: 53.5,
        female: 55.2,
        unspecified: 54.4,
    },
];

/// Returns the row for `country`, falling back to the global row.
pub fn country_baseline(country: Country) -> &'static CountryBaseline {
    BASELINE_TABLE
        .iter()
        .find(|row| row.country == country)
        .unwrap_or(&GLOBAL)
}

/// Baseline life expectancy in years for a country and gender.
pub fn baseline_years(country: Country, gender: Gender) -> f64 {
    country_baseline(country).for_gender(gender)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_country_has_a_row() {
        for country in Country::ALL {
            assert_eq!(country_baseline(country).country, country);
        }
        assert_eq!(BASELINE_TABLE.len(), Country::ALL.len());
    }

    #[test]
    fn lookups_match_table() {
        assert_eq!(baseline_years(Country::Usa, Gender::Male), 73.2);
        assert_eq!(baseline_years(Country::Japan, Gender::Female), 87.6);
        assert_eq!(baseline_years(Country::Nigeria, Gender::Unspecified), 54.4);
        assert_eq!(baseline_years(Country::Global, Gender::Unspecified), 73.3);
    }

    #[test]
    fn unspecified_lies_between_male_and_female() {
        for row in &BASELINE_TABLE {
            assert!(row.male <= row.unspecified && row.unspecified <= row.female);
        }
    }
}
