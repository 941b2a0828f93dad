//! Personnel service
//!
//! The engine looks crew up by identity and reports casualties through
//! `PersonnelService`. `Roster` is the in-memory implementation.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use super::member::{CrewMember, CrewStatus};
use crate::core::types::CrewId;

pub trait PersonnelService {
    fn crew(&self, id: CrewId) -> Option<&CrewMember>;

    fn crew_mut(&mut self, id: CrewId) -> Option<&mut CrewMember>;

    /// Take a crew member off the flying list for `recovery_days`
    fn wound(&mut self, id: CrewId, recovery_days: u32);

    fn kill(&mut self, id: CrewId);

    /// Admit a crew member to hospital after a breakdown. An open wound or
    /// earlier stay keeps its longer recovery.
    fn hospitalize(&mut self, id: CrewId, recovery_days: u32);
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    members: AHashMap<CrewId, CrewMember>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a crew member, returning their id
    pub fn enlist(&mut self, member: CrewMember) -> CrewId {
        let id = member.id;
        self.members.insert(id, member);
        id
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CrewMember> {
        self.members.values()
    }
}

impl PersonnelService for Roster {
    fn crew(&self, id: CrewId) -> Option<&CrewMember> {
        self.members.get(&id)
    }

    fn crew_mut(&mut self, id: CrewId) -> Option<&mut CrewMember> {
        self.members.get_mut(&id)
    }

    fn wound(&mut self, id: CrewId, recovery_days: u32) {
        if let Some(member) = self.members.get_mut(&id) {
            if member.is_alive() {
                member.status = CrewStatus::Wounded { recovery_days };
                member.career.times_wounded += 1;
            }
        }
    }

    fn kill(&mut self, id: CrewId) {
        if let Some(member) = self.members.get_mut(&id) {
            member.status = CrewStatus::Killed;
        }
    }

    fn hospitalize(&mut self, id: CrewId, recovery_days: u32) {
        if let Some(member) = self.members.get_mut(&id) {
            let recovery_days = match member.status {
                CrewStatus::Killed => return,
                CrewStatus::Wounded { recovery_days: open }
                | CrewStatus::Hospitalized { recovery_days: open } => open.max(recovery_days),
                CrewStatus::Active => recovery_days,
            };
            member.status = CrewStatus::Hospitalized { recovery_days };
        }
    }
}
