//! Federal Poverty Level lookups based on the 2025 HHS poverty guidelines.

use serde::Serialize;

/// Publication year of the guideline figures below.
pub const GUIDELINE_YEAR: i32 = 2025;

/// HHS publishes separate guideline tables for Alaska and Hawaii.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PovertyRegion {
    Contiguous,
    Alaska,
    Hawaii,
}

impl PovertyRegion {
    pub fn for_state(state_code: &str) -> Self {
        let code = state_code.trim();
        if code.eq_ignore_ascii_case("AK") {
            Self::Alaska
        } else if code.eq_ignore_ascii_case("HI") {
            Self::Hawaii
        } else {
            Self::Contiguous
        }
    }

    /// Guideline for a single-person household.
    pub const fn base(self) -> u32 {
        match self {
            Self::Contiguous => 15_650,
            Self::Alaska => 19_560,
            Self::Hawaii => 18_000,
        }
    }

    pub const fn per_additional_person(self) -> u32 {
        match self {
            Self::Contiguous => 5_550,
            Self::Alaska => 6_940,
            Self::Hawaii => 6_390,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Contiguous => "48 contiguous states and DC",
            Self::Alaska => "Alaska",
            Self::Hawaii => "Hawaii",
        }
    }
}

/// Annual poverty guideline in dollars for the household size and state.
pub fn federal_poverty_level(household_size: u32, state_code: &str) -> u32 {
    let region = PovertyRegion::for_state(state_code);
    if household_size <= 1 {
        return region.base();
    }
    let additional = (household_size - 1).saturating_mul(region.per_additional_person());
    region.base().saturating_add(additional)
}

/// Income as a percentage of the applicable poverty guideline. Not rounded.
pub fn percent_of_fpl(annual_income: f64, household_size: u32, state_code: &str) -> f64 {
    let fpl = f64::from(federal_poverty_level(household_size, state_code));
    annual_income / fpl * 100.0
}

/// Annual income corresponding to `percent` of the guideline, rounded to whole dollars.
pub fn income_at_percent(percent: f64, household_size: u32, state_code: &str) -> u32 {
    let fpl = f64::from(federal_poverty_level(household_size, state_code));
    (fpl * percent / 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screening::states::STATES;

    #[test]
    fn single_person_households_use_base_amount() {
        assert_eq!(federal_poverty_level(1, "TX"), 15_650);
        assert_eq!(federal_poverty_level(0, "TX"), 15_650);
        assert_eq!(federal_poverty_level(1, "AK"), 19_560);
        assert_eq!(federal_poverty_level(1, "HI"), 18_000);
    }

    #[test]
    fn larger_households_add_per_person_increment() {
        assert_eq!(federal_poverty_level(3, "TX"), 26_750);
        assert_eq!(federal_poverty_level(4, "NY"), 32_300);
        assert_eq!(federal_poverty_level(2, "ak"), 26_500);
        assert_eq!(federal_poverty_level(5, "HI"), 43_560);
    }

    #[test]
    fn guideline_is_monotonic_in_household_size() {
        for state in STATES {
            let mut previous = federal_poverty_level(1, state.code);
            for size in 2..=12 {
                let current = federal_poverty_level(size, state.code);
                assert!(current >= previous, "{} size {size}", state.code);
                previous = current;
            }
        }
    }

    #[test]
    fn oversized_households_saturate_instead_of_wrapping() {
        assert_eq!(federal_poverty_level(1_000_000, "TX"), u32::MAX);
        assert_eq!(federal_poverty_level(u32::MAX, "AK"), u32::MAX);
        assert!(percent_of_fpl(50_000.0, 1_000_000, "TX") < 1.0);
    }

    #[test]
    fn percent_matches_direct_division() {
        let percent = percent_of_fpl(30_000.0, 3, "TX");
        assert_eq!(percent, 30_000.0 / 26_750.0 * 100.0);
        assert!((percent - 112.149).abs() < 0.01);
    }

    #[test]
    fn income_at_percent_rounds_to_nearest_dollar() {
        assert_eq!(income_at_percent(138.0, 1, "CA"), 21_597);
        assert_eq!(income_at_percent(100.0, 3, "TX"), 26_750);
        assert_eq!(income_at_percent(130.0, 2, "HI"), 31_707);
    }
}
