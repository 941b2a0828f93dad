//! Campaign calendar
//!
//! The campaign advances one day at a time. Dates are stamped on discoveries,
//! career-history entries, and the daily stat-growth ledger.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single campaign day, counted from the start of the campaign
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct CampaignDate(pub u32);

impl CampaignDate {
    pub fn day(&self) -> u32 {
        self.0
    }

    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for CampaignDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Day {}", self.0)
    }
}

/// Calendar tracks the current campaign day
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Calendar {
    today: CampaignDate,
}

impl Calendar {
    pub fn new(start: CampaignDate) -> Self {
        Self { today: start }
    }

    pub fn advance(&mut self) {
        self.today = self.today.next();
    }

    pub fn today(&self) -> CampaignDate {
        self.today
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calendar_advances() {
        let mut cal = Calendar::new(CampaignDate(10));
        cal.advance();
        cal.advance();
        assert_eq!(cal.today(), CampaignDate(12));
    }

    #[test]
    fn test_date_display() {
        assert_eq!(CampaignDate(3).to_string(), "Day 3");
    }
}
