use crate::error::Result;
use crate::hook::{HookEvent, HookRecord};
use crate::io::atomic_write;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::Path;

// ---------------------------------------------------------------------------
// SettingsDocument
// ---------------------------------------------------------------------------

/// A `settings.json` file. Only `hooks` is interpreted; every other
/// top-level key round-trips through `other` unchanged.
///
/// Event keys are kept as strings so that events this tool does not know
/// about survive a rewrite.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SettingsDocument {
    #[serde(default)]
    pub hooks: BTreeMap<String, Vec<HookRecord>>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl SettingsDocument {
    /// Load the document at `path`. A missing file is an empty document.
    pub fn read(path: &Path) -> Result<Self> {
        let data = match std::fs::read_to_string(path) {
            Ok(d) => d,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "settings file missing, using empty document");
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };
        let doc: SettingsDocument = serde_json::from_str(&data)?;
        tracing::debug!(path = %path.display(), events = doc.hooks.len(), "loaded settings");
        Ok(doc)
    }

    /// Pretty-print with two-space indentation and replace `path` atomically.
    pub fn write(&self, path: &Path) -> Result<()> {
        let data = serde_json::to_string_pretty(self)?;
        atomic_write(path, data.as_bytes())?;
        tracing::debug!(path = %path.display(), "wrote settings");
        Ok(())
    }

    /// Records under `event`, empty when the key is absent.
    pub fn event_hooks(&self, event: HookEvent) -> &[HookRecord] {
        self.hooks
            .get(event.as_str())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Replace the records under `event`, dropping the key when `records` is empty.
    pub fn set_event_hooks(&mut self, event: HookEvent, records: Vec<HookRecord>) {
        if records.is_empty() {
            self.hooks.remove(event.as_str());
        } else {
            self.hooks.insert(event.as_str().to_string(), records);
        }
    }
}
