//! Order compliance
//!
//! Scores the sortie against today's directive. Never fails and has no side
//! effects beyond the returned record.

use crate::campaign::DailyDirective;
use crate::sortie::{MissionType, OrderCompliance};

/// Penalty for flying against orders or while told to conserve resources
pub const ORDERS_PENALTY: i32 = -5;

pub const CONSERVE_MESSAGE: &str = "HQ ordered resources conserved today; the sortie was flown anyway.";

pub fn evaluate_orders(mission_type: MissionType, directive: Option<&DailyDirective>) -> OrderCompliance {
    let Some(directive) = directive else {
        return OrderCompliance {
            followed: true,
            bonus: 0,
            message: String::new(),
        };
    };

    if directive.conserve_resources {
        return OrderCompliance {
            followed: false,
            bonus: ORDERS_PENALTY,
            message: CONSERVE_MESSAGE.to_string(),
        };
    }

    if directive.matches(mission_type) {
        OrderCompliance {
            followed: true,
            bonus: mission_type.profile().order_bonus,
            message: format!("{} supports today's priority: {}.", mission_type, directive.priority),
        }
    } else {
        OrderCompliance {
            followed: false,
            bonus: ORDERS_PENALTY,
            message: format!("{} ignores today's priority: {}.", mission_type, directive.priority),
        }
    }
}
