use crate::error::{CcmError, FieldError, Result};
use crate::hook::{HookEvent, HookRecord, HookType, HookUpdate};
use serde_json::Value;

/// Check a raw update body against the hook it targets and convert it to a
/// typed [`HookUpdate`].
///
/// Every violation is collected before returning. Keys outside the mutable
/// field set are ignored; `event` is accepted only when unchanged.
pub fn validate_update(event: HookEvent, body: &Value, existing: &HookRecord) -> Result<HookUpdate> {
    let Some(obj) = body.as_object() else {
        return Err(CcmError::ValidationFailed(vec![FieldError::new(
            "body",
            "must be a JSON object",
        )]));
    };

    let mut errors = Vec::new();
    let mut update = HookUpdate::default();

    if let Some(v) = obj.get("event") {
        if v.as_str() != Some(event.as_str()) {
            errors.push(FieldError::new("event", "is read-only and cannot be changed"));
        }
    }

    if let Some(v) = obj.get("matcher") {
        match v.as_str() {
            Some(m) if event.is_matcher_scoped() && m.trim().is_empty() => errors.push(
                FieldError::new("matcher", format!("is required for {event} hooks")),
            ),
            Some(m) if !event.is_matcher_scoped() && !m.is_empty() => errors.push(
                FieldError::new("matcher", format!("is not supported for {event} hooks")),
            ),
            Some(m) => update.matcher = Some(m.to_string()),
            None => errors.push(FieldError::new("matcher", "must be a string")),
        }
    }

    if let Some(v) = obj.get("type") {
        match v.as_str().and_then(HookType::parse) {
            Some(t) => update.hook_type = Some(t),
            None => errors.push(FieldError::new("type", "must be 'command' or 'prompt'")),
        }
    }

    let effective_type = update.hook_type.or_else(|| existing.effective_type());

    match obj.get("command") {
        Some(v) => match v.as_str() {
            Some(c) if effective_type == Some(HookType::Command) && c.trim().is_empty() => errors.push(
                FieldError::new("command", "is required when type is 'command'"),
            ),
            Some(c) => update.command = Some(c.to_string()),
            None => errors.push(FieldError::new("command", "must be a string")),
        },
        None => {
            let has_command = existing.command().is_some_and(|c| !c.trim().is_empty());
            if effective_type == Some(HookType::Command) && !has_command {
                errors.push(FieldError::new(
                    "command",
                    "is required when type is 'command'",
                ));
            }
        }
    }

    if let Some(v) = obj.get("timeout") {
        match v.as_u64() {
            Some(t) if t > 0 => update.timeout = Some(t),
            _ => errors.push(FieldError::new("timeout", "must be a positive integer")),
        }
    }

    for (key, slot) in [
        ("enabled", &mut update.enabled),
        ("suppressOutput", &mut update.suppress_output),
        ("continue", &mut update.continue_),
    ] {
        if let Some(v) = obj.get(key) {
            match v.as_bool() {
                Some(b) => *slot = Some(b),
                None => errors.push(FieldError::new(key, "must be a boolean")),
            }
        }
    }

    if errors.is_empty() {
        Ok(update)
    } else {
        Err(CcmError::ValidationFailed(errors))
    }
}
