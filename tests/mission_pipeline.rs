//! Sortie resolution integration tests

use std::sync::Arc;

use proptest::prelude::*;
use sortie_engine::aircraft::{AircraftStatus, AircraftType, AircraftUnit, Hangar};
use sortie_engine::base::{BaseResourcePool, FacilityRatings};
use sortie_engine::campaign::{CampaignMap, Captain, DailyDirective, MapLocation};
use sortie_engine::core::error::{Result, SortieError};
use sortie_engine::core::types::{AircraftId, CrewId, LocationId, Vec2};
use sortie_engine::core::{CampaignDate, EngineConfig};
use sortie_engine::crew::{
    CrewMember, CrewStats, CrewStatus, NegativeTrait, PersonnelService, Roster, Stat,
};
use sortie_engine::mission::{
    finalize_band, sortie_costs, AircraftFate, ContactIntensity, CrewFate, Dice, MissionEngine,
    RngDice, ScriptedDice, SortieContext, SortieReport,
};
use sortie_engine::sortie::{
    CasualtyCounts, CrewRole, FlightAssignment, MissionType, ResourceUsage, ResultBand, RiskPosture, Sortie,
    SortieStatus,
};

const TODAY: CampaignDate = CampaignDate(5);

/// One scout, one pilot, a small base
struct Squadron {
    base: BaseResourcePool,
    hangar: Hangar,
    roster: Roster,
    captain: Captain,
    map: CampaignMap,
    aircraft: AircraftId,
    pilot: CrewId,
}

impl Squadron {
    fn new(fuel: u32, ammo: u32, pilot_stats: CrewStats) -> Self {
        let mut hangar = Hangar::new();
        let aircraft = hangar.add(AircraftUnit::new(Arc::new(AircraftType::scout())));
        let mut roster = Roster::new();
        let pilot = roster.enlist(CrewMember::new("Hale", pilot_stats));
        Self {
            base: BaseResourcePool::new(fuel, ammo, FacilityRatings::new(1, 1, 3, 2)),
            hangar,
            roster,
            captain: Captain::new("Whitcombe"),
            map: CampaignMap::default(),
            aircraft,
            pilot,
        }
    }

    fn sortie(&self, mission_type: MissionType, distance: f32) -> Sortie {
        Sortie::new(mission_type, distance, RiskPosture::Standard)
            .with_assignment(FlightAssignment::new(self.aircraft, self.pilot))
    }

    fn fly(
        &mut self,
        sortie: &mut Sortie,
        directive: Option<&DailyDirective>,
        dice: &mut dyn Dice,
    ) -> Result<SortieReport> {
        let mut ctx = SortieContext::new(
            &mut self.base,
            &mut self.hangar,
            &mut self.roster,
            &mut self.map,
            TODAY,
        )
        .with_command(&mut self.captain);
        ctx.directive = directive;
        MissionEngine::new().resolve(sortie, &mut ctx, dice)
    }

    fn pilot(&self) -> &CrewMember {
        self.roster.crew(self.pilot).expect("pilot on roster")
    }

    /// Add a two-seater and a gunner for it
    fn add_two_seater(&mut self) -> (AircraftId, CrewId) {
        let aircraft = self.hangar.add(AircraftUnit::new(Arc::new(AircraftType::two_seater())));
        let gunner = self.roster.enlist(CrewMember::new("Dunn", CrewStats::uniform(50)));
        (aircraft, gunner)
    }
}

#[test]
fn test_quiet_patrol_end_to_end() {
    let mut squadron = Squadron::new(100, 100, CrewStats::uniform(50));
    let mut sortie = squadron.sortie(MissionType::Patrol, 20.0);

    // Every draw is 99.9%: no ace, no contact, no losses, no trait
    let mut dice = ScriptedDice::constant(0.999);
    let report = squadron.fly(&mut sortie, None, &mut dice).unwrap();

    assert_eq!(report.status, SortieStatus::Resolved);
    assert_eq!(report.band, Some(ResultBand::Success));
    assert_eq!(report.intensity, Some(ContactIntensity::None));
    assert!(report.scores.is_none());

    let scout = AircraftType::scout();
    let expected = sortie_costs(&[&scout], MissionType::Patrol, 20.0, 0.0, &EngineConfig::default());
    assert_eq!(expected, ResourceUsage { fuel: 14, ammo: 8 });
    assert_eq!(report.consumed, expected);
    assert_eq!(sortie.consumed, expected);
    assert_eq!(squadron.base.fuel, 86);
    assert_eq!(squadron.base.ammo, 92);

    assert_eq!(sortie.log.last_line(), Some("Result: Success"));
    assert_eq!(sortie.result, Some(ResultBand::Success));

    // special, contact, aircraft, pilot seat, trait, narrative; no noise roll
    assert_eq!(dice.drawn(), 6);

    let pilot = squadron.pilot();
    assert_eq!(pilot.career.missions_flown, 1);
    assert!((pilot.fatigue - 40.0).abs() < 1e-4);
    assert_eq!(pilot.merit, 10);
    assert_eq!(pilot.history.len(), 1);
    assert_eq!(pilot.history[0].kills, 0);
    assert_eq!(pilot.history[0].date, TODAY);

    assert_eq!(squadron.hangar.get(squadron.aircraft).unwrap().status, AircraftStatus::Ready);
}

#[test]
fn test_readiness_abort_mutates_nothing() {
    let mut squadron = Squadron::new(5, 100, CrewStats::uniform(50));
    let mut sortie = squadron.sortie(MissionType::Patrol, 20.0);
    let mut dice = ScriptedDice::constant(0.999);

    let report = squadron.fly(&mut sortie, None, &mut dice).unwrap();

    assert_eq!(report.status, SortieStatus::Aborted);
    assert_eq!(sortie.status, SortieStatus::Aborted);
    assert_eq!(report.band, None);
    assert!(!report.blocked.is_empty());
    assert_eq!(squadron.base.fuel, 5);
    assert_eq!(squadron.base.ammo, 100);
    assert_eq!(dice.drawn(), 0);
    assert!(sortie.log.contains("insufficient fuel"));
    assert_eq!(sortie.log.last_line(), Some("Result: Aborted"));

    assert_eq!(squadron.pilot().career.missions_flown, 0);
    assert!(squadron.pilot().history.is_empty());
    assert_eq!(squadron.hangar.get(squadron.aircraft).unwrap().status, AircraftStatus::Ready);
}

#[test]
fn test_contract_violations_are_errors() {
    let mut squadron = Squadron::new(100, 100, CrewStats::uniform(50));
    let mut dice = ScriptedDice::constant(0.999);

    let mut empty = Sortie::new(MissionType::Patrol, 20.0, RiskPosture::Standard);
    assert!(matches!(
        squadron.fly(&mut empty, None, &mut dice),
        Err(SortieError::NoAssignments)
    ));

    let mut flown = squadron.sortie(MissionType::Patrol, 20.0);
    flown.status = SortieStatus::Resolved;
    assert!(matches!(
        squadron.fly(&mut flown, None, &mut dice),
        Err(SortieError::NotPlanned(SortieStatus::Resolved))
    ));

    let stranger = CrewId::new();
    let mut unknown = Sortie::new(MissionType::Patrol, 20.0, RiskPosture::Standard)
        .with_assignment(FlightAssignment::new(squadron.aircraft, squadron.pilot).with_gunner(stranger));
    assert!(matches!(
        squadron.fly(&mut unknown, None, &mut dice),
        Err(SortieError::UnknownCrew(id)) if id == stranger
    ));

    assert_eq!(squadron.base.fuel, 100);
    assert_eq!(dice.drawn(), 0);
}

#[test]
fn test_interception_scores_kills() {
    let mut squadron = Squadron::new(100, 100, CrewStats::uniform(50));
    let mut sortie = squadron.sortie(MissionType::Interception, 20.0);

    let mut dice = ScriptedDice::new([
        0.5,  // no ace encounter
        0.10, // contact 10 against 59: skirmish
        0.5,  // opposition noise 0
        0.99, // aircraft unharmed
        0.99, // pilot unharmed
        0.0,  // two kills
        0.0,  // first kill to the only flight
        0.0,  // second kill
    ]);
    let report = squadron.fly(&mut sortie, None, &mut dice).unwrap();

    assert_eq!(report.intensity, Some(ContactIntensity::Skirmish));
    let scores = report.scores.as_ref().unwrap();
    assert!((scores.opposing - 9.0).abs() < 1e-4);
    assert!((scores.friendly - 34.3).abs() < 1e-3);
    assert_eq!(report.band, Some(ResultBand::DecisiveSuccess));

    assert_eq!(report.casualties.enemy_kills, 2);
    assert_eq!(sortie.assignments[0].kills_this_sortie, 2);
    assert_eq!(squadron.captain.merit, 10);

    let pilot = squadron.pilot();
    assert_eq!(pilot.career.victories, 2);
    // Two kills at half learning rate: 0.5 + 0.5 GUN makes one whole point
    assert_eq!(pilot.stats[Stat::Gun], 51);
    assert_eq!(pilot.merit, 15);
    assert_eq!(pilot.history[0].kills, 2);
    assert_eq!(sortie.log.last_line(), Some("Result: Decisive Success"));
}

#[test]
fn test_disaster_kills_pilot_and_skips_discovery() {
    let mut squadron = Squadron::new(100, 100, CrewStats::uniform(10));
    squadron.map.add(MapLocation::hidden(LocationId(1), "Dump", Vec2::new(50.0, 2.0)));
    let mut sortie = squadron
        .sortie(MissionType::Patrol, 150.0)
        .with_waypoints(vec![Vec2::new(0.0, 0.0), Vec2::new(150.0, 0.0)]);

    let mut dice = ScriptedDice::new([
        0.99,  // no ace encounter
        0.79,  // contact 79 against 80: ambush
        0.999, // opposition noise +3
        0.0,   // aircraft lost
        0.0,   // pilot killed
        0.0,   // narrative template
    ]);
    let report = squadron.fly(&mut sortie, None, &mut dice).unwrap();

    assert_eq!(report.intensity, Some(ContactIntensity::Ambush));
    assert_eq!(report.band, Some(ResultBand::Disaster));
    assert_eq!(report.casualties.aircraft_lost, 1);
    assert_eq!(report.casualties.crew_killed, 1);
    assert!(report.discovery.is_none());
    assert_eq!(dice.drawn(), 6);

    let pilot = squadron.pilot();
    assert_eq!(pilot.status, CrewStatus::Killed);
    assert_eq!(pilot.career.times_shot_down, 1);
    assert_eq!(pilot.fatigue, 0.0);
    assert_eq!(pilot.history.len(), 1);
    assert!(pilot.history[0].shot_down);

    assert_eq!(squadron.hangar.get(squadron.aircraft).unwrap().status, AircraftStatus::Lost);
    assert!(!squadron.map.get(LocationId(1)).unwrap().discovered);
}

#[test]
fn test_breakdown_keeps_longer_wound_and_damages_aircraft() {
    let mut squadron = Squadron::new(100, 100, CrewStats::uniform(10));
    if let Some(pilot) = squadron.roster.crew_mut(squadron.pilot) {
        pilot.traits.add_negative(NegativeTrait::Reckless);
        pilot.traits.add_negative(NegativeTrait::Reckless);
        pilot.traits.add_negative(NegativeTrait::Superstitious);
    }
    let mut sortie = squadron.sortie(MissionType::Patrol, 150.0);

    let mut dice = ScriptedDice::new([
        0.99,  // no ace encounter
        0.79,  // contact 79 against 80: ambush
        0.999, // opposition noise +3
        0.5,   // aircraft roll 50 against 80: damaged
        0.0,   // 10 points of damage
        0.30,  // pilot roll 30: wounded
        0.999, // out for 10 days
        0.0,   // trait breakout
        0.0,   // Jittery, the fourth negative trait
        0.0,   // 7 days in hospital
        0.0,   // narrative template
    ]);
    let report = squadron.fly(&mut sortie, None, &mut dice).unwrap();

    assert_eq!(report.band, Some(ResultBand::Disaster));
    assert_eq!(report.flights[0].aircraft_fate, AircraftFate::Damaged { points: 10 });
    assert_eq!(report.flights[0].pilot_fate(), CrewFate::Wounded { days: 10 });
    assert_eq!(report.casualties.crew_wounded, 1);
    assert_eq!(report.casualties.aircraft_lost, 0);
    assert_eq!(dice.drawn(), 11);

    let unit = squadron.hangar.get(squadron.aircraft).unwrap();
    assert_eq!(unit.status, AircraftStatus::Damaged);
    assert!((unit.condition - 90.0).abs() < 1e-4);

    assert!(sortie.log.contains("out for 10 days"));
    assert!(sortie.log.contains("hospitalized for 7 days"));

    let pilot = squadron.pilot();
    assert_eq!(pilot.status, CrewStatus::Hospitalized { recovery_days: 10 });
    assert_eq!(pilot.traits.negative.len(), 4);
    assert_eq!(pilot.traits.negative[3], NegativeTrait::Jittery);
    assert_eq!(pilot.career.times_wounded, 1);
    assert!(pilot.history[0].wounded);
    assert!(!pilot.history[0].shot_down);
    assert_eq!(sortie.log.last_line(), Some("Result: Disaster"));
}

#[test]
fn test_gunner_seat_uses_reduced_loss_chance() {
    let mut squadron = Squadron::new(100, 100, CrewStats::uniform(50));
    let (two_seater, gunner) = squadron.add_two_seater();
    let mut sortie = Sortie::new(MissionType::Patrol, 20.0, RiskPosture::Standard)
        .with_assignment(FlightAssignment::new(two_seater, squadron.pilot).with_gunner(gunner));

    // Success band, loss chance 10: a pilot rolling 2.2 would be killed,
    // the gunner's chance of 8 only wounds below 4
    let mut dice = ScriptedDice::new([
        0.99,  // no ace encounter
        0.99,  // no contact
        0.99,  // aircraft unharmed
        0.99,  // pilot unharmed
        0.022, // gunner roll 2.2
        0.0,   // out for 3 days
        0.99,  // no trait
        0.0,   // narrative template
    ]);
    let report = squadron.fly(&mut sortie, None, &mut dice).unwrap();

    assert_eq!(report.band, Some(ResultBand::Success));
    assert_eq!(
        report.flights[0].crew[1],
        (CrewRole::Gunner, gunner, CrewFate::Wounded { days: 3 })
    );
    assert_eq!(report.casualties.crew_wounded, 1);
    assert_eq!(report.casualties.crew_killed, 0);
    assert_eq!(dice.drawn(), 8);

    let dunn = squadron.roster.crew(gunner).unwrap();
    assert_eq!(dunn.status, CrewStatus::Wounded { recovery_days: 3 });
    assert_eq!(dunn.career.missions_flown, 1);
    assert!((dunn.fatigue - 40.0).abs() < 1e-4);
    assert!(dunn.history.is_empty());

    let pilot = squadron.pilot();
    assert_eq!(pilot.career.missions_flown, 1);
    assert_eq!(pilot.history.len(), 1);
}

#[test]
fn test_strafing_credits_ground_targets() {
    let mut squadron = Squadron::new(100, 100, CrewStats::uniform(50));
    let mut sortie = squadron.sortie(MissionType::Strafing, 20.0);
    let mut dice = ScriptedDice::constant(0.999);

    let report = squadron.fly(&mut sortie, None, &mut dice).unwrap();

    assert_eq!(report.band, Some(ResultBand::Success));
    // contact, aircraft, pilot seat, trait, narrative; strafing has no special event
    assert_eq!(dice.drawn(), 5);

    let pilot = squadron.pilot();
    assert_eq!(pilot.career.ground_targets_destroyed, 1);
    assert_eq!(pilot.career.victories, 0);
}

#[test]
fn test_discovery_radius_boundary() {
    let mut squadron = Squadron::new(100, 100, CrewStats::uniform(50));
    squadron.map.add(MapLocation::hidden(LocationId(1), "Near", Vec2::new(10.0, 14.9)));
    squadron.map.add(MapLocation::hidden(LocationId(2), "Far", Vec2::new(10.0, 15.1)));
    let mut sortie = squadron
        .sortie(MissionType::Patrol, 20.0)
        .with_waypoints(vec![Vec2::new(0.0, 0.0), Vec2::new(20.0, 0.0)]);

    let mut dice = ScriptedDice::new([
        0.99, // no ace encounter
        0.99, // no contact
        0.99, // aircraft unharmed
        0.99, // pilot unharmed
        0.99, // no trait
        0.0,  // narrative template
        0.0,  // discovery roll succeeds
        0.0,  // first candidate
    ]);
    let report = squadron.fly(&mut sortie, None, &mut dice).unwrap();

    let found = report.discovery.expect("location discovered");
    assert_eq!(found.location, LocationId(1));
    assert!(sortie.log.contains("Discovered: Near"));

    let near = squadron.map.get(LocationId(1)).unwrap();
    assert!(near.discovered);
    assert_eq!(near.discovered_on, Some(TODAY));
    assert!(!squadron.map.get(LocationId(2)).unwrap().discovered);
    assert_eq!(sortie.log.last_line(), Some("Result: Success"));
}

#[test]
fn test_followed_orders_reward_pilot_and_captain() {
    let mut squadron = Squadron::new(100, 100, CrewStats::uniform(50));
    let mut sortie = squadron.sortie(MissionType::Patrol, 20.0);
    let directive = DailyDirective::priority("Patrol the sector", vec![MissionType::Patrol]);
    let mut dice = ScriptedDice::constant(0.999);

    squadron.fly(&mut sortie, Some(&directive), &mut dice).unwrap();

    assert!(sortie.orders.followed);
    assert_eq!(sortie.orders.bonus, 10);
    assert!(sortie.log.contains("Patrol the sector"));
    assert_eq!(squadron.captain.merit, 2);
    assert_eq!(squadron.pilot().merit, 15);
}

#[test]
fn test_exchange_ratio_downgrade() {
    let casualties = CasualtyCounts {
        crew_killed: 2,
        enemy_kills: 1,
        ..Default::default()
    };
    let band = finalize_band(ResultBand::Success, &casualties);
    assert_eq!(band, ResultBand::Stalemate);
    assert!(band <= ResultBand::MarginalFailure);
}

#[test]
fn test_seeded_runs_replay_exactly() {
    let run = |seed: u64| {
        let mut squadron = Squadron::new(200, 200, CrewStats::uniform(55));
        let mut sortie = squadron.sortie(MissionType::Interception, 60.0);
        let mut dice = RngDice::seeded(seed);
        let report = squadron.fly(&mut sortie, None, &mut dice).unwrap();
        (report.band, report.casualties, report.log)
    };
    assert_eq!(run(1234), run(1234));
}

fn band_strategy() -> impl Strategy<Value = ResultBand> {
    (0u8..7).prop_map(ResultBand::from_severity)
}

proptest! {
    #[test]
    fn prop_finalization_never_improves_band(
        band in band_strategy(),
        killed in 0u32..6,
        kills in 0u32..8,
    ) {
        let casualties = CasualtyCounts { crew_killed: killed, enemy_kills: kills, ..Default::default() };
        let finalized = finalize_band(band, &casualties);
        prop_assert!(finalized >= band);
        if band.is_success() {
            prop_assert!(finalized <= ResultBand::MarginalFailure);
        } else {
            prop_assert_eq!(finalized, band);
        }
    }

    #[test]
    fn prop_resolution_always_ends_with_result(seed in any::<u64>(), distance in 1.0f32..150.0) {
        let mut squadron = Squadron::new(500, 500, CrewStats::uniform(60));
        let mut sortie = squadron.sortie(MissionType::Patrol, distance);
        let mut dice = RngDice::seeded(seed);
        let report = squadron.fly(&mut sortie, None, &mut dice).unwrap();

        prop_assert_eq!(report.status, SortieStatus::Resolved);
        let band = report.band.unwrap();
        let expected = format!("Result: {}", band);
        prop_assert_eq!(sortie.log.last_line(), Some(expected.as_str()));
        prop_assert_eq!(squadron.base.fuel, 500 - report.consumed.fuel);
    }
}
