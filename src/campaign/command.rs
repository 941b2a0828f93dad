//! Command service
//!
//! The squadron's commanding captain banks merit when pilots score or follow
//! orders.

use serde::{Deserialize, Serialize};

pub trait CommandService {
    fn add_merit(&mut self, amount: i32);
}

/// In-memory commanding officer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Captain {
    pub name: String,
    pub merit: i32,
}

impl Captain {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            merit: 0,
        }
    }
}

impl CommandService for Captain {
    fn add_merit(&mut self, amount: i32) {
        self.merit += amount;
    }
}
