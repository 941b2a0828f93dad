//! Career narrative
//!
//! One line of prose per pilot per sortie, picked from a small template pool
//! by outcome category and filed in the pilot's history.

use super::dice::Dice;
use crate::core::calendar::CampaignDate;
use crate::crew::HistoryEntry;
use crate::sortie::{MissionType, ResultBand};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NarrativeCategory {
    Disaster,
    Kill,
    Contact,
    Quiet,
}

impl NarrativeCategory {
    /// Disaster outranks a kill, a kill outranks contact
    pub fn select(band: ResultBand, kills: u32, had_contact: bool) -> Self {
        if band == ResultBand::Disaster {
            NarrativeCategory::Disaster
        } else if kills > 0 {
            NarrativeCategory::Kill
        } else if had_contact {
            NarrativeCategory::Contact
        } else {
            NarrativeCategory::Quiet
        }
    }

    fn templates(&self) -> &'static [&'static str] {
        match self {
            NarrativeCategory::Disaster => &[
                "The {mission} went badly wrong; {pilot} was lucky to see the aerodrome again.",
                "Caught out on the {mission}, {pilot} watched the flight torn apart around them.",
                "A black day. The {mission} cost dearly and gained nothing.",
            ],
            NarrativeCategory::Kill => &[
                "{pilot} sent {kills} enemy machine(s) down during the {mission}.",
                "On the {mission}, {pilot} got on a Hun's tail and did not let go. {kills} confirmed.",
                "A sharp fight on the {mission}; {pilot} claimed {kills}.",
            ],
            NarrativeCategory::Contact => &[
                "{pilot} traded shots with enemy scouts on the {mission} but scored nothing.",
                "Archie and a brief scrap marked the {mission}; {pilot} came home empty-handed.",
                "The enemy showed on the {mission}. {pilot} held formation and broke off clean.",
            ],
            NarrativeCategory::Quiet => &[
                "A quiet {mission}. {pilot} saw nothing but cloud and mud.",
                "{pilot} flew the {mission} without sighting a single enemy machine.",
                "Uneventful {mission}; {pilot} logged the hours and the weather.",
            ],
        }
    }
}

/// Pick and fill a template for this pilot
pub fn compose(
    category: NarrativeCategory,
    pilot: &str,
    mission_type: MissionType,
    kills: u32,
    dice: &mut dyn Dice,
) -> String {
    let templates = category.templates();
    let template = templates[dice.index(templates.len())];
    template
        .replace("{pilot}", pilot)
        .replace("{mission}", &mission_type.to_string().to_lowercase())
        .replace("{kills}", &kills.to_string())
}

/// History entry recording one sortie
pub fn history_entry(
    date: CampaignDate,
    mission_type: MissionType,
    narrative: String,
    kills: u32,
    wounded: bool,
    shot_down: bool,
) -> HistoryEntry {
    HistoryEntry {
        date,
        mission_type,
        narrative,
        kills,
        wounded,
        shot_down,
    }
}
