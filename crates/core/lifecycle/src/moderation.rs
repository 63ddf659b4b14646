use crate::HiddenBy;

/// Whether the pending report count warrants hiding an event
pub fn crosses_threshold(pending: u64, threshold: u64) -> bool {
    pending >= threshold
}

/// Whether a hidden event may be restored after a report was dismissed
///
/// Only automatically hidden events are restorable, and only once the
/// pending report count has dropped back below the threshold. Events
/// hidden by an administrator or by a ban stay hidden.
pub fn may_auto_restore(hidden_by: Option<&HiddenBy>, pending: u64, threshold: u64) -> bool {
    matches!(hidden_by, Some(HiddenBy::Automatic)) && pending < threshold
}
