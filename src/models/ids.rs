//! Strongly-typed ID wrappers for all entity types
//!
//! Ids are time-derived (Unix milliseconds at creation) and strictly
//! increasing within a collection: when the clock has not moved past the last
//! issued id, the next one is `last + 1`. Sorting by id therefore sorts by
//! creation order.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Wrap a raw id value
            pub const fn from_raw(raw: u64) -> Self {
                Self(raw)
            }

            /// Get the underlying value
            pub const fn value(&self) -> u64 {
                self.0
            }

            /// Parse an ID from a string, with or without the display prefix
            pub fn parse(s: &str) -> Result<Self, ParseIntError> {
                s.parse()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(s.parse()?))
            }
        }
    };
}

define_id!(TransactionId, "txn-");
define_id!(GoalId, "goal-");

/// Next id after `last_issued`, given the current time in milliseconds
pub fn next_id_after(last_issued: u64, now_millis: u64) -> u64 {
    now_millis.max(last_issued.saturating_add(1))
}

/// Next id after `last_issued`, using the system clock
pub fn next_id(last_issued: u64) -> u64 {
    let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
    next_id_after(last_issued, now)
}
