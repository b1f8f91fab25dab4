use crate::error::{CcmError, Result};
use crate::hook::{HookRecord, HookUpdate};
use crate::hook_id::HookId;
use crate::locate::{identify_at, locate};
use crate::settings::SettingsDocument;

/// Result of [`apply`]: the merged record and its identifier after the move.
#[derive(Debug, Clone, PartialEq)]
pub struct Applied {
    pub record: HookRecord,
    pub id: HookId,
}

/// Merge `update` into the hook named by `id`, in place.
///
/// Changing the matcher of a matcher-scoped hook moves it to the end of the
/// event's array, which makes it the last member of its new group. Only the
/// moved hook's identifier changes; the returned `id` is recomputed from the
/// post-mutation array. The document is untouched when the hook is missing.
pub fn apply(doc: &mut SettingsDocument, id: &HookId, update: &HookUpdate) -> Result<Applied> {
    let event = id.event;
    let (position, mut merged) = {
        let found = locate(doc.event_hooks(event), id)
            .ok_or_else(|| CcmError::HookNotFound(id.encode()))?;
        (found.position, found.record.clone())
    };
    let relocate = event.is_matcher_scoped()
        && update
            .matcher
            .as_deref()
            .is_some_and(|m| m != merged.matcher_or_empty());
    merged.merge(update);

    let mut records = doc.event_hooks(event).to_vec();
    let new_position = if relocate {
        records.remove(position);
        records.push(merged.clone());
        records.len() - 1
    } else {
        records[position] = merged.clone();
        position
    };
    let new_id = identify_at(&records, event, new_position)
        .ok_or_else(|| CcmError::HookNotFound(id.encode()))?;
    doc.set_event_hooks(event, records);

    tracing::info!(from = %id, to = %new_id, relocated = relocate, "updated hook");
    Ok(Applied {
        record: merged,
        id: new_id,
    })
}

/// Splice the hook named by `id` out of its event's array and return it.
/// The event key is dropped when its array becomes empty.
pub fn remove(doc: &mut SettingsDocument, id: &HookId) -> Result<HookRecord> {
    let position = locate(doc.event_hooks(id.event), id)
        .ok_or_else(|| CcmError::HookNotFound(id.encode()))?
        .position;
    let mut records = doc.event_hooks(id.event).to_vec();
    let removed = records.remove(position);
    doc.set_event_hooks(id.event, records);
    tracing::info!(hook = %id, "removed hook");
    Ok(removed)
}
