use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

// ---------------------------------------------------------------------------
// HookEvent
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HookEvent {
    PreToolUse,
    PostToolUse,
    UserPromptSubmit,
    Notification,
    Stop,
    SubagentStop,
    SessionStart,
    SessionEnd,
    PreCompact,
    PermissionRequest,
}

impl HookEvent {
    pub fn all() -> &'static [HookEvent] {
        &[
            HookEvent::PreToolUse,
            HookEvent::PostToolUse,
            HookEvent::UserPromptSubmit,
            HookEvent::Notification,
            HookEvent::Stop,
            HookEvent::SubagentStop,
            HookEvent::SessionStart,
            HookEvent::SessionEnd,
            HookEvent::PreCompact,
            HookEvent::PermissionRequest,
        ]
    }

    /// Events whose records are grouped by a tool matcher.
    pub fn is_matcher_scoped(self) -> bool {
        matches!(self, HookEvent::PreToolUse | HookEvent::PostToolUse)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HookEvent::PreToolUse => "PreToolUse",
            HookEvent::PostToolUse => "PostToolUse",
            HookEvent::UserPromptSubmit => "UserPromptSubmit",
            HookEvent::Notification => "Notification",
            HookEvent::Stop => "Stop",
            HookEvent::SubagentStop => "SubagentStop",
            HookEvent::SessionStart => "SessionStart",
            HookEvent::SessionEnd => "SessionEnd",
            HookEvent::PreCompact => "PreCompact",
            HookEvent::PermissionRequest => "PermissionRequest",
        }
    }
}

impl fmt::Display for HookEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for HookEvent {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HookEvent::all()
            .iter()
            .copied()
            .find(|e| e.as_str() == s)
            .ok_or(())
    }
}

// ---------------------------------------------------------------------------
// HookType
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HookType {
    #[default]
    Command,
    Prompt,
}

impl HookType {
    pub fn as_str(self) -> &'static str {
        match self {
            HookType::Command => "command",
            HookType::Prompt => "prompt",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "command" => Some(HookType::Command),
            "prompt" => Some(HookType::Prompt),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// HookRecord
// ---------------------------------------------------------------------------

/// One entry in the array under an event key.
///
/// The record is held as the JSON object read from disk. Typed fields are
/// read leniently through accessors and written only by [`HookRecord::merge`],
/// so a record that is never merged is written back exactly as it was read,
/// including `null` values and types this tool does not know.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HookRecord(Map<String, Value>);

impl HookRecord {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn matcher(&self) -> Option<&str> {
        self.get("matcher").and_then(Value::as_str)
    }

    /// Matcher with absent normalized to the empty string.
    pub fn matcher_or_empty(&self) -> &str {
        self.matcher().unwrap_or("")
    }

    /// The raw `type` string, `command` when absent.
    pub fn type_name(&self) -> &str {
        self.get("type")
            .and_then(Value::as_str)
            .unwrap_or(HookType::Command.as_str())
    }

    /// `Command` when `type` is absent; `None` when it is set to something
    /// other than `command` or `prompt`.
    pub fn effective_type(&self) -> Option<HookType> {
        match self.get("type") {
            None => Some(HookType::Command),
            Some(v) => v.as_str().and_then(HookType::parse),
        }
    }

    pub fn command(&self) -> Option<&str> {
        self.get("command").and_then(Value::as_str)
    }

    pub fn timeout(&self) -> Option<u64> {
        self.get("timeout").and_then(Value::as_u64)
    }

    pub fn enabled(&self) -> Option<bool> {
        self.get("enabled").and_then(Value::as_bool)
    }

    /// Overwrite every field that is present in `update`. Other keys are
    /// left as they are.
    ///
    /// An empty matcher is not written onto a record that has none.
    pub fn merge(&mut self, update: &HookUpdate) {
        if let Some(m) = &update.matcher {
            if !m.is_empty() || self.matcher().is_some() {
                self.set("matcher", Value::String(m.clone()));
            }
        }
        if let Some(t) = update.hook_type {
            self.set("type", Value::String(t.as_str().to_string()));
        }
        if let Some(c) = &update.command {
            self.set("command", Value::String(c.clone()));
        }
        if let Some(t) = update.timeout {
            self.set("timeout", Value::from(t));
        }
        for (key, flag) in [
            ("enabled", update.enabled),
            ("suppressOutput", update.suppress_output),
            ("continue", update.continue_),
        ] {
            if let Some(b) = flag {
                self.set(key, Value::Bool(b));
            }
        }
    }

    fn set(&mut self, key: &str, value: Value) {
        self.0.insert(key.to_string(), value);
    }
}

// ---------------------------------------------------------------------------
// HookUpdate
// ---------------------------------------------------------------------------

/// Partial update restricted to the mutable fields of a hook record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HookUpdate {
    pub matcher: Option<String>,
    pub hook_type: Option<HookType>,
    pub command: Option<String>,
    pub timeout: Option<u64>,
    pub enabled: Option<bool>,
    pub suppress_output: Option<bool>,
    pub continue_: Option<bool>,
}
