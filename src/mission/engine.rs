//! Mission resolution engine
//!
//! Runs one Planned sortie through the full pipeline: orders, readiness,
//! contact, scoring, outcome, consequences, finalization, progression and
//! discovery. Every roll comes from the caller's `Dice`; every mutation goes
//! through the collaborators in `SortieContext`.

use serde::Serialize;
use std::sync::Arc;

use super::consequence::{resolve_consequences, FlightOutcome};
use super::contact::{simulate_contact, ContactIntensity, ContactReport};
use super::dice::Dice;
use super::discovery::{resolve_discovery, Discovery};
use super::effectiveness::{base_bonus, flight_score, friendly_score, opposing_score, Scores};
use super::finalize::finalize;
use super::orders::evaluate_orders;
use super::outcome::{classify, short_circuit};
use super::progression::progress_crew;
use super::readiness::{check_readiness, BlockReason, Readiness};
use crate::aircraft::{AircraftStatus, AircraftType, Hangar};
use crate::base::BaseResourcePool;
use crate::campaign::{CommandService, DailyDirective, MapService};
use crate::core::calendar::CampaignDate;
use crate::core::config::EngineConfig;
use crate::core::error::{Result, SortieError};
use crate::crew::{CrewSeats, PersonnelService};
use crate::sortie::{
    CasualtyCounts, MissionLog, OrderCompliance, Phase, ResourceUsage, ResultBand, Sortie,
    SortieStatus, SpecialEvent,
};

/// The collaborators one resolution reads and mutates
pub struct SortieContext<'a> {
    pub base: &'a mut BaseResourcePool,
    pub hangar: &'a mut Hangar,
    pub roster: &'a mut dyn PersonnelService,
    pub command: Option<&'a mut dyn CommandService>,
    pub map: &'a mut dyn MapService,
    pub directive: Option<&'a DailyDirective>,
    pub date: CampaignDate,
}

impl<'a> SortieContext<'a> {
    pub fn new(
        base: &'a mut BaseResourcePool,
        hangar: &'a mut Hangar,
        roster: &'a mut dyn PersonnelService,
        map: &'a mut dyn MapService,
        date: CampaignDate,
    ) -> Self {
        Self {
            base,
            hangar,
            roster,
            command: None,
            map,
            directive: None,
            date,
        }
    }

    pub fn with_command(mut self, command: &'a mut dyn CommandService) -> Self {
        self.command = Some(command);
        self
    }

    pub fn with_directive(mut self, directive: &'a DailyDirective) -> Self {
        self.directive = Some(directive);
        self
    }
}

/// Everything a caller needs to display or persist after resolution
#[derive(Debug, Clone, Serialize)]
pub struct SortieReport {
    pub status: SortieStatus,
    pub band: Option<ResultBand>,
    pub intensity: Option<ContactIntensity>,
    pub special_event: Option<SpecialEvent>,
    /// Absent when the sortie was quiet or aborted
    pub scores: Option<Scores>,
    pub orders: OrderCompliance,
    pub blocked: Vec<BlockReason>,
    pub consumed: ResourceUsage,
    pub casualties: CasualtyCounts,
    pub flights: Vec<FlightOutcome>,
    pub discovery: Option<Discovery>,
    pub log: MissionLog,
}

#[derive(Debug, Clone, Default)]
pub struct MissionEngine {
    config: EngineConfig,
}

impl MissionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Result<Self> {
        config.validate().map_err(SortieError::InvalidConfig)?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Reject sorties the caller should never have submitted. Runs before
    /// anything is mutated.
    fn validate(&self, sortie: &Sortie, ctx: &SortieContext<'_>) -> Result<()> {
        if sortie.status != SortieStatus::Planned {
            return Err(SortieError::NotPlanned(sortie.status));
        }
        if sortie.assignments.is_empty() {
            return Err(SortieError::NoAssignments);
        }
        for assignment in &sortie.assignments {
            if ctx.hangar.get(assignment.aircraft).is_none() {
                return Err(SortieError::UnknownAircraft(assignment.aircraft));
            }
            if let Some((_, id)) = assignment.seats().find(|(_, id)| ctx.roster.crew(*id).is_none()) {
                return Err(SortieError::UnknownCrew(id));
            }
        }
        Ok(())
    }

    /// Resolve one sortie.
    ///
    /// Returns `Err` only for contract violations, before any state changes.
    /// A readiness failure is not an error: the sortie comes back Aborted
    /// with the pool, hangar and roster untouched.
    pub fn resolve(
        &self,
        sortie: &mut Sortie,
        ctx: &mut SortieContext<'_>,
        dice: &mut dyn Dice,
    ) -> Result<SortieReport> {
        self.validate(sortie, ctx)?;

        sortie.status = SortieStatus::Active;
        let mut log = MissionLog::new();
        log.push(
            Phase::Orders,
            format!(
                "{}: {} flight(s), target distance {:.0}, {} posture",
                sortie.mission_type,
                sortie.assignments.len(),
                sortie.target_distance,
                sortie.risk
            ),
        );

        sortie.orders = evaluate_orders(sortie.mission_type, ctx.directive);
        if !sortie.orders.message.is_empty() {
            log.push(Phase::Orders, sortie.orders.message.clone());
        }

        let types: Vec<Arc<AircraftType>> = sortie
            .assignments
            .iter()
            .filter_map(|a| ctx.hangar.get(a.aircraft))
            .map(|unit| Arc::clone(&unit.aircraft_type))
            .collect();
        let type_refs: Vec<&AircraftType> = types.iter().map(Arc::as_ref).collect();

        let costs = match check_readiness(sortie, &type_refs, ctx.base, &self.config, &mut log) {
            Readiness::Blocked { reasons } => {
                sortie.status = SortieStatus::Aborted;
                log.push(Phase::Summary, "Result: Aborted");
                tracing::warn!(
                    "{} sortie aborted at readiness: {}",
                    sortie.mission_type,
                    reasons.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
                );
                sortie.log = log.clone();
                return Ok(SortieReport {
                    status: sortie.status,
                    band: None,
                    intensity: None,
                    special_event: None,
                    scores: None,
                    orders: sortie.orders.clone(),
                    blocked: reasons,
                    consumed: ResourceUsage::default(),
                    casualties: CasualtyCounts::default(),
                    flights: Vec::new(),
                    discovery: None,
                    log,
                });
            }
            Readiness::Green { costs, strained } => {
                if strained {
                    tracing::warn!(
                        "{} flights exceed maintenance capacity {}",
                        sortie.assignments.len(),
                        ctx.base.facilities.maintenance
                    );
                }
                costs
            }
        };

        for assignment in &sortie.assignments {
            if let Some(unit) = ctx.hangar.get_mut(assignment.aircraft) {
                unit.status = AircraftStatus::Assigned;
            }
        }

        let contact = simulate_contact(
            sortie.mission_type,
            sortie.target_distance,
            ctx.base.facilities.operations,
            &self.config,
            dice,
            &mut log,
        );

        let (band, scores) = match short_circuit(&contact) {
            Some(band) => {
                log.push(Phase::Outcome, "The sky stayed empty");
                (band, None)
            }
            None => {
                let scores = self.score(sortie, &contact, ctx, dice);
                log.push(
                    Phase::Scoring,
                    format!("Strength: {:.1} friendly vs {:.1} opposing", scores.friendly, scores.opposing),
                );
                let band = classify(scores.friendly, scores.opposing, sortie.risk);
                log.push(Phase::Outcome, format!("Engagement: {}", band));
                (band, Some(scores))
            }
        };

        let flights =
            resolve_consequences(sortie, band, &contact, costs, ctx, &self.config, dice, &mut log);

        let band = finalize(band, &sortie.casualties, &mut log);
        sortie.result = Some(band);

        progress_crew(sortie, band, &contact, &flights, ctx, &self.config, dice, &mut log);

        let discovery = resolve_discovery(sortie, &flights, ctx, &self.config, dice, &mut log);

        sortie.status = SortieStatus::Resolved;
        log.push(Phase::Summary, format!("Result: {}", band));
        tracing::info!(
            "{} resolved: {} ({} kills, {} lost, {} killed)",
            sortie.mission_type,
            band,
            sortie.casualties.enemy_kills,
            sortie.casualties.aircraft_lost,
            sortie.casualties.crew_killed
        );

        sortie.log = log.clone();
        Ok(SortieReport {
            status: sortie.status,
            band: Some(band),
            intensity: Some(contact.intensity),
            special_event: contact.special_event,
            scores,
            orders: sortie.orders.clone(),
            blocked: Vec::new(),
            consumed: sortie.consumed,
            casualties: sortie.casualties,
            flights,
            discovery,
            log,
        })
    }

    fn score(
        &self,
        sortie: &Sortie,
        contact: &ContactReport,
        ctx: &SortieContext<'_>,
        dice: &mut dyn Dice,
    ) -> Scores {
        let flights: Vec<_> = sortie
            .assignments
            .iter()
            .filter_map(|a| {
                let unit = ctx.hangar.get(a.aircraft)?;
                let seats = CrewSeats {
                    pilot: ctx.roster.crew(a.pilot)?,
                    gunner: a.gunner.and_then(|id| ctx.roster.crew(id)),
                    observer: a.observer.and_then(|id| ctx.roster.crew(id)),
                };
                Some(flight_score(sortie.mission_type, unit, &seats))
            })
            .collect();

        let friendly = friendly_score(&flights, &ctx.base.facilities);
        let opposing = opposing_score(sortie.target_distance, contact.intensity, contact.special_event, dice);
        tracing::debug!("Scoring: friendly {:.2} opposing {:.2}", friendly, opposing);

        Scores {
            friendly,
            opposing,
            flights,
            base_bonus: base_bonus(&ctx.base.facilities),
        }
    }
}
