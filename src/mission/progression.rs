//! Crew progression
//!
//! After the band is final, every pilot who came home grows: counters,
//! fatigue, stat gains, merit and the occasional trait. Every pilot gets a
//! line of career history; gunners and observers only log the sortie.

use super::consequence::{CrewFate, FlightOutcome};
use super::contact::ContactReport;
use super::dice::Dice;
use super::engine::SortieContext;
use super::narrative::{compose, history_entry, NarrativeCategory};
use crate::core::config::EngineConfig;
use crate::crew::{CrewMember, NegativeTrait, PositiveTrait, Stat, NEGATIVE_POOL, POSITIVE_POOL};
use crate::sortie::{
    CrewRole, MissionLog, MissionType, OrderCompliance, Phase, ResultBand, RiskPosture, Sortie,
};

/// Gains every surviving pilot receives for flying at all
const BASE_GAINS: [(Stat, f32); 2] = [(Stat::Lrn, 0.1), (Stat::Sta, 0.3)];

/// Composure for bringing the aircraft home
const SURVIVAL_GAIN: (Stat, f32) = (Stat::Cmp, 0.3);

/// Discipline for flying what HQ asked for
const ORDERS_GAIN: (Stat, f32) = (Stat::Dis, 0.5);

const ORDERS_PILOT_MERIT: i32 = 5;
const ORDERS_CAPTAIN_MERIT: i32 = 2;

/// Fatigue above which breakdowns become likelier
const EXHAUSTION_THRESHOLD: f32 = 80.0;
const EXHAUSTION_TRAIT_BONUS: f32 = 10.0;
const DISASTER_TRAIT_BONUS: f32 = 15.0;
const TRIUMPH_TRAIT_BONUS: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraitChange {
    Positive(PositiveTrait),
    Negative {
        acquired: NegativeTrait,
        /// Set when this trait was the one that broke the pilot
        hospital_days: Option<u32>,
    },
}

/// Fatigue added by one sortie
pub fn fatigue_gain(distance: f32, risk: RiskPosture, config: &EngineConfig) -> f32 {
    (config.fatigue_base + config.fatigue_per_distance * distance) * risk.fatigue_factor()
}

/// Raw stat gains for a surviving pilot
pub fn pilot_gains(mission_type: MissionType, aircraft_survived: bool, orders_rewarded: bool) -> Vec<(Stat, f32)> {
    let mut gains = BASE_GAINS.to_vec();
    gains.extend_from_slice(mission_type.profile().pilot_gains);
    if aircraft_survived {
        gains.push(SURVIVAL_GAIN);
    }
    if orders_rewarded {
        gains.push(ORDERS_GAIN);
    }
    gains
}

pub fn orders_rewarded(orders: &OrderCompliance) -> bool {
    orders.followed && orders.bonus > 0
}

/// Percent chance of a trait appearing this sortie
pub fn breakout_chance(fatigue: f32, band: ResultBand, config: &EngineConfig) -> f32 {
    let mut chance = config.trait_base_chance;
    if fatigue > EXHAUSTION_THRESHOLD {
        chance += EXHAUSTION_TRAIT_BONUS;
    }
    match band {
        ResultBand::Disaster => chance += DISASTER_TRAIT_BONUS,
        ResultBand::DecisiveSuccess => chance += TRIUMPH_TRAIT_BONUS,
        _ => {}
    }
    chance
}

/// Roll for a new trait. Returns the change only if a trait was acquired.
pub fn roll_trait_breakout(
    pilot: &mut CrewMember,
    band: ResultBand,
    config: &EngineConfig,
    dice: &mut dyn Dice,
) -> Option<TraitChange> {
    if !dice.chance(breakout_chance(pilot.fatigue, band, config)) {
        return None;
    }

    let positive = match band {
        ResultBand::Disaster => false,
        ResultBand::DecisiveSuccess => true,
        _ => dice.coin(),
    };

    if positive {
        let candidate = POSITIVE_POOL[dice.index(POSITIVE_POOL.len())];
        pilot.traits.add_positive(candidate).then_some(TraitChange::Positive(candidate))
    } else {
        let candidate = NEGATIVE_POOL[dice.index(NEGATIVE_POOL.len())];
        if !pilot.traits.add_negative(candidate) {
            return None;
        }
        let hospital_days = pilot
            .traits
            .at_breaking_point()
            .then(|| dice.range_u32(config.hospital_days.0, config.hospital_days.1));
        Some(TraitChange::Negative {
            acquired: candidate,
            hospital_days,
        })
    }
}

fn format_gains(applied: &[(Stat, u8)]) -> String {
    applied
        .iter()
        .map(|(stat, points)| format!("+{} {}", points, stat))
        .collect::<Vec<_>>()
        .join(", ")
}

#[allow(clippy::too_many_arguments)]
pub fn progress_crew(
    sortie: &Sortie,
    band: ResultBand,
    contact: &ContactReport,
    outcomes: &[FlightOutcome],
    ctx: &mut SortieContext<'_>,
    config: &EngineConfig,
    dice: &mut dyn Dice,
    log: &mut MissionLog,
) {
    let fatigue = fatigue_gain(sortie.target_distance, sortie.risk, config);
    let rewarded = orders_rewarded(&sortie.orders);
    let profile = sortie.mission_type.profile();
    let today = ctx.date;

    for (assignment, outcome) in sortie.assignments.iter().zip(outcomes) {
        let pilot_fate = outcome.pilot_fate();
        let mut hospital = None;

        if let Some(pilot) = ctx.roster.crew_mut(assignment.pilot) {
            let name = pilot.display_name();
            pilot.career.missions_flown += 1;

            if pilot_fate != CrewFate::Killed {
                let gains = pilot_gains(sortie.mission_type, !outcome.aircraft_lost(), rewarded);
                let applied = pilot.improve(today, &gains);
                if !applied.is_empty() {
                    log.push(Phase::Progression, format!("{} improved: {}", name, format_gains(&applied)));
                }

                pilot.add_fatigue(fatigue);

                if profile.ground_attack {
                    pilot.career.ground_targets_destroyed += 1;
                }

                let mut merit = band.outcome_merit();
                if rewarded {
                    merit += ORDERS_PILOT_MERIT;
                }
                pilot.merit += merit;

                match roll_trait_breakout(pilot, band, config, dice) {
                    Some(TraitChange::Positive(t)) => {
                        log.push(Phase::Progression, format!("{} has shown themselves {}", name, t));
                    }
                    Some(TraitChange::Negative { acquired, hospital_days }) => {
                        log.push(Phase::Progression, format!("{} has grown {}", name, acquired));
                        hospital = hospital_days;
                    }
                    None => {}
                }
            }

            let category = NarrativeCategory::select(band, outcome.kills, !contact.is_quiet());
            let narrative = compose(category, &name, sortie.mission_type, outcome.kills, dice);
            pilot.history.push(history_entry(
                today,
                sortie.mission_type,
                narrative,
                outcome.kills,
                matches!(pilot_fate, CrewFate::Wounded { .. }),
                outcome.aircraft_lost(),
            ));
        }

        if let Some(days) = hospital {
            ctx.roster.hospitalize(assignment.pilot, days);
            log.push(Phase::Progression, format!("Pilot broken by strain, hospitalized for {} days", days));
        }

        if pilot_fate != CrewFate::Killed && rewarded {
            if let Some(command) = ctx.command.as_deref_mut() {
                command.add_merit(ORDERS_CAPTAIN_MERIT);
            }
        }

        for (role, id, fate) in &outcome.crew {
            if *role == CrewRole::Pilot {
                continue;
            }
            if let Some(member) = ctx.roster.crew_mut(*id) {
                member.career.missions_flown += 1;
                if *fate != CrewFate::Killed {
                    member.add_fatigue(fatigue);
                }
            }
        }
    }

    tracing::debug!("Progression applied to {} flights", outcomes.len());
}
