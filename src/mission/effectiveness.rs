//! Effectiveness scoring
//!
//! Friendly strength sums each flight's aircraft, crew and pilot skills with
//! stress and crewing penalties, plus base facility bonuses. Opposing
//! strength scales with distance and contact intensity.

use serde::{Deserialize, Serialize};

use super::contact::ContactIntensity;
use super::dice::Dice;
use crate::aircraft::AircraftUnit;
use crate::base::FacilityRatings;
use crate::crew::{pilot_skills, CrewSeats, PositiveTrait};
use crate::sortie::{MissionType, SpecialEvent};

/// Airframe stress tolerated before a penalty applies
const STRESS_THRESHOLD: f32 = 20.0;

/// Stress points per point of penalty
const STRESS_DIVISOR: f32 = 30.0;

/// Fraction of the stress penalty a Sturdy pilot still suffers
const STURDY_STRESS_FACTOR: f32 = 0.25;

/// Weight of rear firepower when a gunner mans it
const REAR_GUN_WEIGHT: f32 = 0.5;

/// Penalty for a multi-seat aircraft flown with the pilot alone
const SOLO_TWO_SEATER_PENALTY: f32 = 2.0;

/// Opposition noise, inclusive on both ends
const OPPOSITION_NOISE: (i32, i32) = (-3, 3);

/// Breakdown of one flight's contribution
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FlightScore {
    pub aircraft: f32,
    pub rear_gun: f32,
    pub crew: f32,
    pub skills: f32,
    pub stress_penalty: f32,
    pub solo_penalty: f32,
}

impl FlightScore {
    pub fn total(&self) -> f32 {
        self.aircraft + self.rear_gun + self.crew + self.skills - self.stress_penalty - self.solo_penalty
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scores {
    pub friendly: f32,
    pub opposing: f32,
    pub flights: Vec<FlightScore>,
    pub base_bonus: f32,
}

/// Penalty for airframe stress; a Sturdy pilot takes a quarter of it
pub fn stress_penalty(stress: f32, sturdy: bool) -> f32 {
    if stress <= STRESS_THRESHOLD {
        return 0.0;
    }
    let penalty = (stress - STRESS_THRESHOLD) / STRESS_DIVISOR;
    if sturdy {
        penalty * STURDY_STRESS_FACTOR
    } else {
        penalty
    }
}

pub fn flight_score(mission_type: MissionType, unit: &AircraftUnit, seats: &CrewSeats) -> FlightScore {
    let profile = mission_type.profile();
    let aircraft_type = &unit.aircraft_type;

    let rear_gun = if aircraft_type.is_multi_seat() && seats.gunner.is_some() {
        REAR_GUN_WEIGHT * aircraft_type.rear_firepower
    } else {
        0.0
    };

    let crew = seats.combined(profile.crew_blend) / profile.crew_blend.score_divisor();

    let skills: f32 = pilot_skills(seats.pilot).iter().map(|s| s.score_bonus()).sum();

    let sturdy = seats.pilot.traits.has_positive(PositiveTrait::Sturdy);
    let stress_penalty = stress_penalty(unit.airframe_stress(), sturdy);

    let solo_penalty = if aircraft_type.is_multi_seat() && !seats.has_secondary() {
        SOLO_TWO_SEATER_PENALTY
    } else {
        0.0
    };

    FlightScore {
        aircraft: aircraft_type.role_effectiveness(profile.aircraft_role),
        rear_gun,
        crew,
        skills,
        stress_penalty,
        solo_penalty,
    }
}

/// Facility bonus added once per sortie
pub fn base_bonus(facilities: &FacilityRatings) -> f32 {
    0.5 * facilities.training as f32 + 0.3 * facilities.operations as f32
}

/// Sum of flight scores plus the base bonus
pub fn friendly_score(flights: &[FlightScore], facilities: &FacilityRatings) -> f32 {
    flights.iter().map(FlightScore::total).sum::<f32>() + base_bonus(facilities)
}

/// Opposition before noise
pub fn opposing_base(distance: f32, intensity: ContactIntensity, special: Option<SpecialEvent>) -> f32 {
    let base = (5.0 + 0.2 * distance) * intensity.level().max(1) as f32;
    match special {
        Some(event) => base * event.opposition_multiplier(),
        None => base,
    }
}

/// Opposition with one noise roll, floored at 1
pub fn opposing_score(
    distance: f32,
    intensity: ContactIntensity,
    special: Option<SpecialEvent>,
    dice: &mut dyn Dice,
) -> f32 {
    let noise = dice.range_i32(OPPOSITION_NOISE.0, OPPOSITION_NOISE.1) as f32;
    (opposing_base(distance, intensity, special) + noise).max(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aircraft::AircraftType;
    use crate::crew::{CrewMember, CrewStats};
    use crate::mission::dice::ScriptedDice;
    use std::sync::Arc;

    fn pilot(value: u8) -> CrewMember {
        CrewMember::new("Pilot", CrewStats::uniform(value))
    }

    #[test]
    fn test_stress_penalty() {
        assert_eq!(stress_penalty(20.0, false), 0.0);
        assert!((stress_penalty(50.0, false) - 1.0).abs() < 1e-6);
        assert!((stress_penalty(50.0, true) - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_scout_patrol_score() {
        let unit = AircraftUnit::new(Arc::new(AircraftType::scout()));
        let p = pilot(50);
        let score = flight_score(MissionType::Patrol, &unit, &CrewSeats::solo(&p));
        assert!((score.aircraft - 28.5).abs() < 1e-4);
        assert!((score.crew - 5.0).abs() < 1e-4);
        assert_eq!(score.skills, 0.0);
        assert_eq!(score.stress_penalty, 0.0);
        assert_eq!(score.solo_penalty, 0.0);
        assert!((score.total() - 33.5).abs() < 1e-4);
    }

    #[test]
    fn test_solo_two_seater_penalized() {
        let unit = AircraftUnit::new(Arc::new(AircraftType::two_seater()));
        let p = pilot(50);
        let g = pilot(50);
        let solo = flight_score(MissionType::Reconnaissance, &unit, &CrewSeats::solo(&p));
        let crewed = flight_score(
            MissionType::Reconnaissance,
            &unit,
            &CrewSeats { pilot: &p, gunner: Some(&g), observer: None },
        );
        assert_eq!(solo.solo_penalty, 2.0);
        assert_eq!(crewed.solo_penalty, 0.0);
        assert!((crewed.rear_gun - 2.5).abs() < 1e-6);
    }

    #[test]
    fn test_escort_crew_uses_wider_divisor() {
        let unit = AircraftUnit::new(Arc::new(AircraftType::scout()));
        let p = pilot(60);
        let score = flight_score(MissionType::Escort, &unit, &CrewSeats::solo(&p));
        assert!((score.crew - 3.0).abs() < 1e-4);
    }

    #[test]
    fn test_skills_add_bonus() {
        let unit = AircraftUnit::new(Arc::new(AircraftType::scout()));
        let veteran = pilot(80);
        let score = flight_score(MissionType::Patrol, &unit, &CrewSeats::solo(&veteran));
        assert!((score.skills - 5.5).abs() < 1e-6);
    }

    #[test]
    fn test_base_bonus() {
        let facilities = FacilityRatings::new(2, 4, 1, 1);
        assert!((base_bonus(&facilities) - 2.6).abs() < 1e-5);
    }

    #[test]
    fn test_opposition_scaling() {
        // (5 + 0.2*50) = 15
        assert!((opposing_base(50.0, ContactIntensity::None, None) - 15.0).abs() < 1e-4);
        assert!((opposing_base(50.0, ContactIntensity::Ambush, None) - 45.0).abs() < 1e-4);
        assert!(
            (opposing_base(50.0, ContactIntensity::Skirmish, Some(SpecialEvent::Zeppelin)) - 45.0).abs() < 1e-4
        );
        assert!(
            (opposing_base(50.0, ContactIntensity::Skirmish, Some(SpecialEvent::AceEncounter)) - 37.5).abs()
                < 1e-4
        );
    }

    #[test]
    fn test_opposition_noise_and_floor() {
        let mut low = ScriptedDice::new([0.0]);
        assert!((opposing_score(50.0, ContactIntensity::Skirmish, None, &mut low) - 12.0).abs() < 1e-4);

        let mut high = ScriptedDice::new([0.999]);
        assert!((opposing_score(50.0, ContactIntensity::Skirmish, None, &mut high) - 18.0).abs() < 1e-4);

        let mut short = ScriptedDice::new([0.0]);
        let score = opposing_score(1.0, ContactIntensity::Skirmish, None, &mut short);
        assert!(score >= 1.0);
        assert!((score - 2.2).abs() < 1e-4);
    }
}
