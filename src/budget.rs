//! Budget Ranges
//!
//! The slider value is an index into a fixed table of spending brackets.

/// Budget bracket labels, indexed by slider value
pub const BUDGET_RANGES: &[&str] = &["0원", "1만원", "1-2만원", "2-3만원", "3-5만원", "5만원 이상"];

/// Slider position the page starts at (and the backend's default)
pub const DEFAULT_BUDGET_RANGE: u8 = 2;

/// A slider position in `0..BUDGET_RANGES.len()`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetRange(u8);

impl BudgetRange {
    pub fn new(index: u8) -> Option<Self> {
        ((index as usize) < BUDGET_RANGES.len()).then_some(Self(index))
    }

    /// Parse a slider or query-string value such as `"3"`
    pub fn parse(raw: &str) -> Option<Self> {
        raw.trim().parse::<u8>().ok().and_then(Self::new)
    }

    pub fn index(&self) -> u8 {
        self.0
    }

    pub fn label(&self) -> &'static str {
        BUDGET_RANGES[self.0 as usize]
    }
}

impl Default for BudgetRange {
    fn default() -> Self {
        Self(DEFAULT_BUDGET_RANGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_position_maps_to_its_label() {
        for (i, label) in BUDGET_RANGES.iter().enumerate() {
            let range = BudgetRange::new(i as u8).unwrap();
            assert_eq!(range.label(), *label);
        }
        assert_eq!(BudgetRange::parse("2").unwrap().label(), "1-2만원");
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert!(BudgetRange::new(6).is_none());
        assert!(BudgetRange::parse("-1").is_none());
        assert!(BudgetRange::parse("two").is_none());
    }

    #[test]
    fn test_default_is_middle_bracket() {
        assert_eq!(BudgetRange::default().index(), 2);
    }
}
