//! Composite `event::matcher::index` identifiers.
//!
//! Hook records carry no stable id of their own, so they are named by their
//! event, their matcher and their ordinal within the matcher group. A matcher
//! containing `::` cannot be decoded.

use crate::error::CcmError;
use crate::hook::HookEvent;
use serde::{Serialize, Serializer};
use std::fmt;

pub const DELIMITER: &str = "::";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HookId {
    pub event: HookEvent,
    pub matcher: String,
    pub index: usize,
}

impl HookId {
    pub fn new(event: HookEvent, matcher: impl Into<String>, index: usize) -> Self {
        Self {
            event,
            matcher: matcher.into(),
            index,
        }
    }

    pub fn encode(&self) -> String {
        self.to_string()
    }

    pub fn decode(raw: &str) -> Result<Self, CcmError> {
        raw.parse()
    }
}

impl fmt::Display for HookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{DELIMITER}{}{DELIMITER}{}",
            self.event, self.matcher, self.index
        )
    }
}

impl std::str::FromStr for HookId {
    type Err = CcmError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = || CcmError::InvalidHookId(raw.to_string());
        let parts: Vec<&str> = raw.split(DELIMITER).collect();
        let [event, matcher, index] = parts.as_slice() else {
            return Err(invalid());
        };
        let event: HookEvent = event.parse().map_err(|_| invalid())?;
        // usize::from_str accepts a leading '+'; identifiers are digits only.
        if index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let index: usize = index.parse().map_err(|_| invalid())?;
        Ok(HookId::new(event, *matcher, index))
    }
}

impl Serialize for HookId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
