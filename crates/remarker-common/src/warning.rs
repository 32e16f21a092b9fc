//! Extraction warnings with colored terminal output.
//!
//! Provides deduplication so a reference document with a recurring quirk
//! reports it once instead of once per row. Used by the markup reader and the
//! vocabulary parsers to surface rows and entities that were silently dropped.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

fn key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Warn about a suspicious input (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("Elements", "inline element 'TT' missing from the element table");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let should_print = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key(component, message));

    if should_print {
        eprintln!("{}", format!("[Remarker {component}] ⚠ {message}").yellow());
    }
}

/// Returns true if this exact warning has been emitted since the last clear.
#[must_use]
pub fn has_warned(component: &str, message: &str) -> bool {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
        .is_some_and(|set| set.contains(&key(component, message)))
}

/// Clear all recorded warnings (call before re-reading a document set)
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_is_recorded_once() {
        warn_once("Test", "recorded warning");
        warn_once("Test", "recorded warning");
        assert!(has_warned("Test", "recorded warning"));
        assert!(!has_warned("Other", "recorded warning"));

        clear_warnings();
        assert!(!has_warned("Test", "recorded warning"));
    }
}
