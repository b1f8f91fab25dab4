//! One read–validate–modify–write cycle per call against a settings file.
//!
//! Each cycle holds the file's entry in [`SettingsLocks`] from the read until
//! the rename, so concurrent callers sharing the same locks cannot interleave.

use crate::error::{CcmError, Result};
use crate::hook::{HookEvent, HookRecord};
use crate::hook_id::HookId;
use crate::locate::{identify_all, locate_in};
use crate::lock::{acquire, SettingsLocks};
use crate::mutate;
use crate::settings::SettingsDocument;
use crate::validate::validate_update;
use serde::Serialize;
use std::path::Path;

/// A hook record as presented to clients: its fields plus `event` and `hookId`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HookView {
    #[serde(flatten)]
    pub record: HookRecord,
    pub event: HookEvent,
    pub hook_id: HookId,
}

impl HookView {
    pub fn new(id: HookId, record: HookRecord) -> Self {
        Self {
            record,
            event: id.event,
            hook_id: id,
        }
    }
}

/// Every hook in the settings file at `path`.
pub fn list_hooks(path: &Path) -> Result<Vec<HookView>> {
    let doc = SettingsDocument::read(path)?;
    Ok(identify_all(&doc)
        .into_iter()
        .map(|(id, record)| HookView::new(id, record.clone()))
        .collect())
}

/// Decode `raw_id`, validate `body` against the hook it names, apply it and
/// persist. Nothing is written unless every check passes.
pub fn update_hook(
    locks: &SettingsLocks,
    path: &Path,
    raw_id: &str,
    body: &serde_json::Value,
) -> Result<HookView> {
    let id = HookId::decode(raw_id)?;
    let mutex = locks.for_path(path);
    let _guard = acquire(&mutex);

    let mut doc = SettingsDocument::read(path)?;
    let existing = locate_in(&doc, &id)
        .ok_or_else(|| CcmError::HookNotFound(id.encode()))?
        .record;
    let update = validate_update(id.event, body, existing)?;
    let applied = mutate::apply(&mut doc, &id, &update)?;
    doc.write(path)?;

    Ok(HookView::new(applied.id, applied.record))
}

/// Remove the hook named by `raw_id` and persist. Returns the removed hook
/// under the identifier it had before removal.
pub fn delete_hook(locks: &SettingsLocks, path: &Path, raw_id: &str) -> Result<HookView> {
    let id = HookId::decode(raw_id)?;
    let mutex = locks.for_path(path);
    let _guard = acquire(&mutex);

    let mut doc = SettingsDocument::read(path)?;
    let removed = mutate::remove(&mut doc, &id)?;
    doc.write(path)?;

    Ok(HookView::new(id, removed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use tempfile::TempDir;

    fn settings(dir: &TempDir, raw: Value) -> std::path::PathBuf {
        let path = dir.path().join(".claude/settings.json");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, serde_json::to_string_pretty(&raw).unwrap()).unwrap();
        path
    }

    fn on_disk(path: &Path) -> Value {
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn session_end_timeout_update() {
        let dir = TempDir::new().unwrap();
        let path = settings(
            &dir,
            json!({ "hooks": { "SessionEnd": [ { "command": "echo a", "timeout": 1000 } ] } }),
        );
        let view = update_hook(
            &SettingsLocks::new(),
            &path,
            "SessionEnd::::0",
            &json!({ "timeout": 5000 }),
        )
        .unwrap();

        assert_eq!(
            serde_json::to_value(&view).unwrap(),
            json!({
                "command": "echo a",
                "timeout": 5000,
                "event": "SessionEnd",
                "hookId": "SessionEnd::::0"
            })
        );
        assert_eq!(
            on_disk(&path),
            json!({ "hooks": { "SessionEnd": [ { "command": "echo a", "timeout": 5000 } ] } })
        );
    }

    #[test]
    fn matcher_change_reports_new_id() {
        let dir = TempDir::new().unwrap();
        let path = settings(
            &dir,
            json!({ "hooks": { "PreToolUse": [
                { "matcher": "Bash", "command": "b0" },
                { "matcher": "Write", "command": "w0" },
                { "matcher": "Bash", "command": "b1" }
            ]}}),
        );
        let view = update_hook(
            &SettingsLocks::new(),
            &path,
            "PreToolUse::Bash::0",
            &json!({ "matcher": "Write" }),
        )
        .unwrap();
        assert_eq!(view.hook_id.encode(), "PreToolUse::Write::1");

        let listed: Vec<String> = list_hooks(&path)
            .unwrap()
            .into_iter()
            .map(|h| h.hook_id.encode())
            .collect();
        assert_eq!(
            listed,
            ["PreToolUse::Write::0", "PreToolUse::Bash::0", "PreToolUse::Write::1"]
        );
    }

    #[test]
    fn update_leaves_unmanaged_records_unchanged() {
        let dir = TempDir::new().unwrap();
        let raw = json!({ "hooks": {
            "Stop": [ { "type": "agent", "prompt": "summarize" } ],
            "Notification": [ { "command": "n", "timeout": null } ],
            "SessionEnd": [ { "command": "echo a", "timeout": 1000 } ]
        }});
        let path = settings(&dir, raw.clone());

        update_hook(
            &SettingsLocks::new(),
            &path,
            "SessionEnd::::0",
            &json!({ "timeout": 5000 }),
        )
        .unwrap();

        let mut expected = raw;
        expected["hooks"]["SessionEnd"][0]["timeout"] = json!(5000);
        assert_eq!(on_disk(&path), expected);

        let listed = list_hooks(&path).unwrap();
        assert_eq!(listed.len(), 3);
        let stop = listed.iter().find(|h| h.event == HookEvent::Stop).unwrap();
        assert_eq!(stop.record.type_name(), "agent");
    }

    #[test]
    fn invalid_update_does_not_touch_file() {
        let dir = TempDir::new().unwrap();
        let raw = json!({ "hooks": { "Stop": [ { "command": "x" } ] } });
        let path = settings(&dir, raw.clone());
        let before = std::fs::read_to_string(&path).unwrap();

        let err = update_hook(
            &SettingsLocks::new(),
            &path,
            "Stop::::0",
            &json!({ "timeout": 0, "enabled": "no" }),
        )
        .unwrap_err();
        assert!(matches!(err, CcmError::ValidationFailed(ref v) if v.len() == 2));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn bad_id_and_missing_hook_are_distinct_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".claude/settings.json");
        let locks = SettingsLocks::new();

        assert!(matches!(
            update_hook(&locks, &path, "Stop::0", &json!({})),
            Err(CcmError::InvalidHookId(_))
        ));
        assert!(matches!(
            update_hook(&locks, &path, "Stop::::0", &json!({})),
            Err(CcmError::HookNotFound(_))
        ));
        assert!(!path.exists());
    }

    #[test]
    fn delete_removes_and_persists() {
        let dir = TempDir::new().unwrap();
        let path = settings(
            &dir,
            json!({ "model": "sonnet", "hooks": { "Stop": [ { "command": "x" } ] } }),
        );
        let view = delete_hook(&SettingsLocks::new(), &path, "Stop::::0").unwrap();
        assert_eq!(view.record.command(), Some("x"));
        assert_eq!(on_disk(&path), json!({ "model": "sonnet", "hooks": {} }));
    }

    #[test]
    fn concurrent_updates_on_one_file_are_serialized() {
        let dir = TempDir::new().unwrap();
        let path = settings(
            &dir,
            json!({ "hooks": { "Stop": [ { "command": "a" }, { "command": "b" } ] } }),
        );
        let locks = SettingsLocks::new();

        std::thread::scope(|s| {
            for i in 0..8u64 {
                let locks = locks.clone();
                let path = path.clone();
                s.spawn(move || {
                    let id = format!("Stop::::{}", i % 2);
                    update_hook(&locks, &path, &id, &json!({ "timeout": i + 1 })).unwrap();
                });
            }
        });

        let hooks = list_hooks(&path).unwrap();
        assert_eq!(hooks.len(), 2);
        assert!(hooks.iter().all(|h| h.record.timeout().is_some()));
    }
}
