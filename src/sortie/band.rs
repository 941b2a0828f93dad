//! Result bands
//!
//! Seven discrete outcomes with a total severity order. Finalization may only
//! move a band toward greater severity.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Outcome of a resolved sortie, least severe first
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ResultBand {
    #[display(fmt = "Decisive Success")]
    DecisiveSuccess,
    #[display(fmt = "Success")]
    Success,
    #[display(fmt = "Marginal Success")]
    MarginalSuccess,
    #[display(fmt = "Stalemate")]
    Stalemate,
    #[display(fmt = "Marginal Failure")]
    MarginalFailure,
    #[display(fmt = "Failure")]
    Failure,
    #[display(fmt = "Disaster")]
    Disaster,
}

impl ResultBand {
    pub const ALL: [ResultBand; 7] = [
        ResultBand::DecisiveSuccess,
        ResultBand::Success,
        ResultBand::MarginalSuccess,
        ResultBand::Stalemate,
        ResultBand::MarginalFailure,
        ResultBand::Failure,
        ResultBand::Disaster,
    ];

    /// Severity index, 0 (DecisiveSuccess) through 6 (Disaster)
    pub fn severity(&self) -> u8 {
        *self as u8
    }

    pub fn from_severity(severity: u8) -> Self {
        Self::ALL[(severity as usize).min(Self::ALL.len() - 1)]
    }

    /// Move `steps` toward greater severity without passing `cap`.
    ///
    /// A band already more severe than `cap` is returned unchanged.
    pub fn downgrade(self, steps: u8, cap: ResultBand) -> Self {
        if self >= cap {
            return self;
        }
        Self::from_severity(self.severity().saturating_add(steps)).min(cap)
    }

    /// True for DecisiveSuccess, Success, and MarginalSuccess
    pub fn is_success(&self) -> bool {
        *self <= ResultBand::MarginalSuccess
    }

    /// Percent chance used for aircraft and crew loss rolls
    pub fn loss_chance(&self) -> f32 {
        match self {
            Self::DecisiveSuccess => 5.0,
            Self::Success => 10.0,
            Self::MarginalSuccess => 20.0,
            Self::Stalemate => 30.0,
            Self::MarginalFailure => 40.0,
            Self::Failure => 60.0,
            Self::Disaster => 80.0,
        }
    }

    /// Inclusive range of enemy aircraft credited when contact occurred
    pub fn kill_range(&self) -> (i32, i32) {
        match self {
            Self::DecisiveSuccess => (2, 4),
            Self::Success => (1, 2),
            Self::MarginalSuccess => (0, 1),
            _ => (0, 0),
        }
    }

    /// Merit awarded to each participating pilot
    pub fn outcome_merit(&self) -> i32 {
        match self {
            Self::DecisiveSuccess => 15,
            Self::Success => 10,
            Self::MarginalSuccess => 5,
            Self::Stalemate => 2,
            _ => 0,
        }
    }

    /// Map a risk-adjusted score ratio onto a band
    pub fn from_ratio(ratio: f32) -> Self {
        if ratio > 2.0 {
            Self::DecisiveSuccess
        } else if ratio > 1.5 {
            Self::Success
        } else if ratio > 1.1 {
            Self::MarginalSuccess
        } else if ratio > 0.9 {
            Self::Stalemate
        } else if ratio > 0.7 {
            Self::MarginalFailure
        } else if ratio > 0.4 {
            Self::Failure
        } else {
            Self::Disaster
        }
    }
}
