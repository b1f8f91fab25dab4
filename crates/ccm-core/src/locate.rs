//! Resolve identifiers to array slots and back.
//!
//! For matcher-scoped events the identifier's index counts only records that
//! share its matcher, so the logical index and the physical array position
//! can differ. Mutations must always splice by physical position.

use crate::hook::{HookEvent, HookRecord};
use crate::hook_id::HookId;
use crate::settings::SettingsDocument;

/// A located hook: the record and its true position in the event's array.
#[derive(Debug, Clone, Copy)]
pub struct Located<'a> {
    pub record: &'a HookRecord,
    pub position: usize,
}

/// Find the record named by `id` in the event's array.
pub fn locate<'a>(records: &'a [HookRecord], id: &HookId) -> Option<Located<'a>> {
    let position = if id.event.is_matcher_scoped() {
        records
            .iter()
            .enumerate()
            .filter(|(_, r)| r.matcher_or_empty() == id.matcher)
            .nth(id.index)
            .map(|(pos, _)| pos)?
    } else {
        id.index
    };
    records.get(position).map(|record| Located { record, position })
}

/// [`locate`] against the event's array in a whole document.
pub fn locate_in<'a>(doc: &'a SettingsDocument, id: &HookId) -> Option<Located<'a>> {
    locate(doc.event_hooks(id.event), id)
}

/// Identifier of the record at physical `position` in `records`.
///
/// Returns `None` when `position` is out of range.
pub fn identify_at(records: &[HookRecord], event: HookEvent, position: usize) -> Option<HookId> {
    let record = records.get(position)?;
    if event.is_matcher_scoped() {
        let matcher = record.matcher_or_empty();
        let index = records[..position]
            .iter()
            .filter(|r| r.matcher_or_empty() == matcher)
            .count();
        Some(HookId::new(event, matcher, index))
    } else {
        Some(HookId::new(event, record.matcher_or_empty(), position))
    }
}

/// Every known-event record in the document with its identifier, in event
/// order then array order.
pub fn identify_all(doc: &SettingsDocument) -> Vec<(HookId, &HookRecord)> {
    let mut out = Vec::new();
    for &event in HookEvent::all() {
        let records = doc.event_hooks(event);
        for position in 0..records.len() {
            if let Some(id) = identify_at(records, event, position) {
                out.push((id, &records[position]));
            }
        }
    }
    out
}
