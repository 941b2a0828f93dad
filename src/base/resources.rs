//! Base resource pool
//!
//! Fuel and ammunition stocks plus the facility ratings the strategic layer
//! maintains. The engine spends stocks and reads ratings; it never upgrades
//! facilities.

use serde::{Deserialize, Serialize};

/// Lowest facility rating
pub const MIN_RATING: u8 = 1;

/// Highest facility rating
pub const MAX_RATING: u8 = 5;

/// Facility ratings, each 1-5
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacilityRatings {
    pub operations: u8,
    pub training: u8,
    pub runway: u8,
    pub maintenance: u8,
}

impl FacilityRatings {
    pub fn new(operations: u8, training: u8, runway: u8, maintenance: u8) -> Self {
        let clamp = |r: u8| r.clamp(MIN_RATING, MAX_RATING);
        Self {
            operations: clamp(operations),
            training: clamp(training),
            runway: clamp(runway),
            maintenance: clamp(maintenance),
        }
    }
}

impl Default for FacilityRatings {
    fn default() -> Self {
        Self::new(1, 1, 1, 1)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseResourcePool {
    pub fuel: u32,
    pub ammo: u32,
    pub facilities: FacilityRatings,
    /// Base-derived cost reduction in [0, 1]
    pub efficiency_bonus: f32,
}

impl BaseResourcePool {
    pub fn new(fuel: u32, ammo: u32, facilities: FacilityRatings) -> Self {
        Self {
            fuel,
            ammo,
            facilities,
            efficiency_bonus: 0.0,
        }
    }

    pub fn with_efficiency(mut self, bonus: f32) -> Self {
        self.efficiency_bonus = bonus.clamp(0.0, 1.0);
        self
    }

    pub fn can_afford(&self, fuel: u32, ammo: u32) -> bool {
        self.fuel >= fuel && self.ammo >= ammo
    }

    /// Deduct stocks, saturating at zero
    pub fn spend(&mut self, fuel: u32, ammo: u32) {
        self.fuel = self.fuel.saturating_sub(fuel);
        self.ammo = self.ammo.saturating_sub(ammo);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratings_clamped() {
        let ratings = FacilityRatings::new(0, 9, 3, 5);
        assert_eq!(ratings.operations, 1);
        assert_eq!(ratings.training, 5);
        assert_eq!(ratings.runway, 3);
    }

    #[test]
    fn test_spend_and_afford() {
        let mut pool = BaseResourcePool::new(100, 50, FacilityRatings::default());
        assert!(pool.can_afford(100, 50));
        assert!(!pool.can_afford(101, 0));
        pool.spend(30, 60);
        assert_eq!(pool.fuel, 70);
        assert_eq!(pool.ammo, 0);
    }
}
