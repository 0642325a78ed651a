use serde::Serialize;

/// Registry entry for a state (or DC) the screener supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UsState {
    pub code: &'static str,
    pub name: &'static str,
    pub medicaid_expansion: bool,
}

impl UsState {
    const fn new(code: &'static str, name: &'static str, medicaid_expansion: bool) -> Self {
        Self {
            code,
            name,
            medicaid_expansion,
        }
    }
}

pub static STATES: &[UsState] = &[
    UsState::new("AL", "Alabama", false),
    UsState::new("AK", "Alaska", true),
    UsState::new("AZ", "Arizona", true),
    UsState::new("AR", "Arkansas", true),
    UsState::new("CA", "California", true),
    UsState::new("CO", "Colorado", true),
    UsState::new("CT", "Connecticut", true),
    UsState::new("DE", "Delaware", true),
    UsState::new("DC", "District of Columbia", true),
    UsState::new("FL", "Florida", false),
    UsState::new("GA", "Georgia", false),
    UsState::new("HI", "Hawaii", true),
    UsState::new("ID", "Idaho", true),
    UsState::new("IL", "Illinois", true),
    UsState::new("IN", "Indiana", true),
    UsState::new("IA", "Iowa", true),
    UsState::new("KS", "Kansas", false),
    UsState::new("KY", "Kentucky", true),
    UsState::new("LA", "Louisiana", true),
    UsState::new("ME", "Maine", true),
    UsState::new("MD", "Maryland", true),
    UsState::new("MA", "Massachusetts", true),
    UsState::new("MI", "Michigan", true),
    UsState::new("MN", "Minnesota", true),
    UsState::new("MS", "Mississippi", false),
    UsState::new("MO", "Missouri", true),
    UsState::new("MT", "Montana", true),
    UsState::new("NE", "Nebraska", true),
    UsState::new("NV", "Nevada", true),
    UsState::new("NH", "New Hampshire", true),
    UsState::new("NJ", "New Jersey", true),
    UsState::new("NM", "New Mexico", true),
    UsState::new("NY", "New York", true),
    UsState::new("NC", "North Carolina", true),
    UsState::new("ND", "North Dakota", true),
    UsState::new("OH", "Ohio", true),
    UsState::new("OK", "Oklahoma", true),
    UsState::new("OR", "Oregon", true),
    UsState::new("PA", "Pennsylvania", true),
    UsState::new("RI", "Rhode Island", true),
    UsState::new("SC", "South Carolina", false),
    UsState::new("SD", "South Dakota", true),
    UsState::new("TN", "Tennessee", false),
    UsState::new("TX", "Texas", false),
    UsState::new("UT", "Utah", true),
    UsState::new("VT", "Vermont", true),
    UsState::new("VA", "Virginia", true),
    UsState::new("WA", "Washington", true),
    UsState::new("WV", "West Virginia", true),
    UsState::new("WI", "Wisconsin", false),
    UsState::new("WY", "Wyoming", false),
];

/// Looks up a state by its two-letter code. Matching is case-insensitive.
pub fn state_by_code(code: &str) -> Option<&'static UsState> {
    let code = code.trim();
    STATES
        .iter()
        .find(|state| state.code.eq_ignore_ascii_case(code))
}

/// Unknown codes are treated as non-expansion states.
pub fn is_medicaid_expansion_state(code: &str) -> bool {
    state_by_code(code)
        .map(|state| state.medicaid_expansion)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn registry_covers_fifty_states_and_dc() {
        assert_eq!(STATES.len(), 51);
        let codes: HashSet<_> = STATES.iter().map(|state| state.code).collect();
        assert_eq!(codes.len(), STATES.len());
        assert!(codes.contains("DC"));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let texas = state_by_code("tx").expect("texas present");
        assert_eq!(texas.name, "Texas");
        assert!(state_by_code(" CA ").is_some());
        assert!(state_by_code("ZZ").is_none());
    }

    #[test]
    fn expansion_flags_follow_registry() {
        assert!(is_medicaid_expansion_state("CA"));
        assert!(!is_medicaid_expansion_state("TX"));
        assert!(!is_medicaid_expansion_state("WI"));
        assert!(!is_medicaid_expansion_state("PR"));
    }
}
