//! Consequences
//!
//! Burns resources, rolls aircraft and crew losses against the band's loss
//! chance, and credits enemy kills to surviving flights.

use serde::{Deserialize, Serialize};

use super::contact::ContactReport;
use super::dice::Dice;
use super::engine::SortieContext;
use crate::aircraft::AircraftStatus;
use crate::core::config::EngineConfig;
use crate::core::types::{AircraftId, CrewId};
use crate::crew::{PersonnelService, Stat};
use crate::sortie::{CrewRole, MissionLog, Phase, ResourceUsage, ResultBand, Sortie};

/// Damage range for a hit that does not bring the aircraft down
const DAMAGE_POINTS: (u32, u32) = (10, 40);

/// Loss chance multiplier for gunners and observers
const SECONDARY_SEAT_FACTOR: f32 = 0.8;

/// Captain merit per enemy aircraft destroyed
const CAPTAIN_MERIT_PER_KILL: i32 = 5;

/// Stat gains for the pilot credited with a kill
const KILL_GAINS: [(Stat, f32); 3] = [(Stat::Gun, 1.0), (Stat::Oa, 0.5), (Stat::Cmp, 0.5)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AircraftFate {
    Returned,
    Damaged { points: u32 },
    Lost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrewFate {
    Unhurt,
    Wounded { days: u32 },
    Killed,
}

/// What happened to one flight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightOutcome {
    pub aircraft: AircraftId,
    pub aircraft_fate: AircraftFate,
    pub crew: Vec<(CrewRole, CrewId, CrewFate)>,
    pub kills: u32,
}

impl FlightOutcome {
    pub fn aircraft_lost(&self) -> bool {
        self.aircraft_fate == AircraftFate::Lost
    }

    pub fn pilot_fate(&self) -> CrewFate {
        self.crew
            .iter()
            .find(|(role, _, _)| *role == CrewRole::Pilot)
            .map_or(CrewFate::Unhurt, |(_, _, fate)| *fate)
    }
}

/// Aircraft roll: below a third of the chance is a loss, below the chance is
/// damage
pub fn aircraft_fate(roll: f32, loss_chance: f32) -> Option<AircraftFate> {
    if roll < loss_chance / 3.0 {
        Some(AircraftFate::Lost)
    } else if roll < loss_chance {
        None
    } else {
        Some(AircraftFate::Returned)
    }
}

/// Chance a seat is hit, before the killed/wounded split
pub fn seat_chance(role: CrewRole, loss_chance: f32) -> f32 {
    match role {
        CrewRole::Pilot => loss_chance,
        CrewRole::Gunner | CrewRole::Observer => loss_chance * SECONDARY_SEAT_FACTOR,
    }
}

fn crew_name(roster: &dyn PersonnelService, id: CrewId) -> String {
    roster.crew(id).map_or_else(|| "Unknown airman".to_string(), |c| c.display_name())
}

#[allow(clippy::too_many_arguments)]
pub fn resolve_consequences(
    sortie: &mut Sortie,
    band: ResultBand,
    contact: &ContactReport,
    costs: ResourceUsage,
    ctx: &mut SortieContext<'_>,
    config: &EngineConfig,
    dice: &mut dyn Dice,
    log: &mut MissionLog,
) -> Vec<FlightOutcome> {
    ctx.base.spend(costs.fuel, costs.ammo);
    sortie.consumed = costs;
    log.push(
        Phase::Consequences,
        format!("Consumed {} fuel and {} ammunition", costs.fuel, costs.ammo),
    );

    let loss_chance = band.loss_chance();
    let mut outcomes = Vec::with_capacity(sortie.assignments.len());

    for assignment in &sortie.assignments {
        let pilot_name = crew_name(&*ctx.roster, assignment.pilot);

        let fate = match aircraft_fate(dice.percent(), loss_chance) {
            Some(fate) => fate,
            None => AircraftFate::Damaged {
                points: dice.range_u32(DAMAGE_POINTS.0, DAMAGE_POINTS.1),
            },
        };

        if let Some(unit) = ctx.hangar.get_mut(assignment.aircraft) {
            match fate {
                AircraftFate::Lost => {
                    unit.mark_lost();
                    sortie.casualties.aircraft_lost += 1;
                    log.push(
                        Phase::Consequences,
                        format!("{}'s {} was shot down", pilot_name, unit.aircraft_type.name),
                    );
                }
                AircraftFate::Damaged { points } => {
                    unit.apply_damage(points as f32);
                    log.push(
                        Phase::Consequences,
                        format!("{}'s {} took {}% damage", pilot_name, unit.aircraft_type.name, points),
                    );
                }
                AircraftFate::Returned => unit.status = AircraftStatus::Ready,
            }
        }

        let mut crew = Vec::new();
        for (role, id) in assignment.seats() {
            let chance = seat_chance(role, loss_chance);
            let roll = dice.percent();
            let crew_fate = if roll < chance / 4.0 {
                CrewFate::Killed
            } else if roll < chance / 2.0 {
                CrewFate::Wounded {
                    days: dice.range_u32(config.wound_days.0, config.wound_days.1),
                }
            } else {
                CrewFate::Unhurt
            };

            let name = crew_name(&*ctx.roster, id);
            match crew_fate {
                CrewFate::Killed => {
                    ctx.roster.kill(id);
                    sortie.casualties.crew_killed += 1;
                    log.push(Phase::Consequences, format!("{} ({}) was killed in action", name, role));
                }
                CrewFate::Wounded { days } => {
                    ctx.roster.wound(id, days);
                    sortie.casualties.crew_wounded += 1;
                    log.push(
                        Phase::Consequences,
                        format!("{} ({}) was wounded, out for {} days", name, role, days),
                    );
                }
                CrewFate::Unhurt => {}
            }

            if fate == AircraftFate::Lost {
                if let Some(member) = ctx.roster.crew_mut(id) {
                    member.career.times_shot_down += 1;
                }
            }

            crew.push((role, id, crew_fate));
        }

        outcomes.push(FlightOutcome {
            aircraft: assignment.aircraft,
            aircraft_fate: fate,
            crew,
            kills: 0,
        });
    }

    if !contact.is_quiet() && band.is_success() {
        attribute_kills(sortie, band, &mut outcomes, ctx, dice, log);
    }

    tracing::debug!(
        "Consequences: {} aircraft lost, {} wounded, {} killed, {} enemy kills",
        sortie.casualties.aircraft_lost,
        sortie.casualties.crew_wounded,
        sortie.casualties.crew_killed,
        sortie.casualties.enemy_kills
    );

    outcomes
}

/// Spread the band's kill roll across flights that came home with a live pilot
fn attribute_kills(
    sortie: &mut Sortie,
    band: ResultBand,
    outcomes: &mut [FlightOutcome],
    ctx: &mut SortieContext<'_>,
    dice: &mut dyn Dice,
    log: &mut MissionLog,
) {
    let (lo, hi) = band.kill_range();
    let kills = dice.range_i32(lo, hi).max(0) as u32;

    let eligible: Vec<usize> = outcomes
        .iter()
        .enumerate()
        .filter(|(_, o)| !o.aircraft_lost() && o.pilot_fate() != CrewFate::Killed)
        .map(|(i, _)| i)
        .collect();

    if eligible.is_empty() {
        return;
    }

    for _ in 0..kills {
        let index = eligible[dice.index(eligible.len())];
        let assignment = &mut sortie.assignments[index];
        assignment.kills_this_sortie += 1;
        outcomes[index].kills += 1;
        sortie.casualties.enemy_kills += 1;

        if let Some(pilot) = ctx.roster.crew_mut(assignment.pilot) {
            pilot.career.victories += 1;
            pilot.improve(ctx.date, &KILL_GAINS);
            log.push(
                Phase::Consequences,
                format!("{} credited with a victory ({} total)", pilot.display_name(), pilot.career.victories),
            );
        }

        if let Some(command) = ctx.command.as_deref_mut() {
            command.add_merit(CAPTAIN_MERIT_PER_KILL);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aircraft_fate_thresholds() {
        // Stalemate: loss 30, lost below 10, damaged below 30
        assert_eq!(aircraft_fate(9.9, 30.0), Some(AircraftFate::Lost));
        assert_eq!(aircraft_fate(10.0, 30.0), None);
        assert_eq!(aircraft_fate(29.9, 30.0), None);
        assert_eq!(aircraft_fate(30.0, 30.0), Some(AircraftFate::Returned));
    }

    #[test]
    fn test_secondary_seats_safer() {
        assert_eq!(seat_chance(CrewRole::Pilot, 50.0), 50.0);
        assert_eq!(seat_chance(CrewRole::Gunner, 50.0), 40.0);
        assert_eq!(seat_chance(CrewRole::Observer, 50.0), 40.0);
    }

    #[test]
    fn test_pilot_fate_lookup() {
        let pilot = CrewId::new();
        let outcome = FlightOutcome {
            aircraft: AircraftId::new(),
            aircraft_fate: AircraftFate::Returned,
            crew: vec![(CrewRole::Pilot, pilot, CrewFate::Wounded { days: 4 })],
            kills: 0,
        };
        assert_eq!(outcome.pilot_fate(), CrewFate::Wounded { days: 4 });
        assert!(!outcome.aircraft_lost());
    }
}
