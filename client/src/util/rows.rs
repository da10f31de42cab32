//! Index-addressed edits for dialog row lists.
//!
//! The dialogs edit copied lists (link URLs, category rows) addressed by
//! row index. Out-of-range indexes are ignored rather than panicking since
//! a stale event can fire for a row that was just removed.

#[cfg(test)]
#[path = "rows_test.rs"]
mod rows_test;

/// Replace the row at `index`. No-op when `index` is out of range.
pub fn set_row<T>(rows: &mut [T], index: usize, value: T) {
    if let Some(slot) = rows.get_mut(index) {
        *slot = value;
    }
}

/// Remove the row at `index`. No-op when `index` is out of range or when
/// only one row remains; the dialogs keep at least one row on screen and
/// hide or disable the remove control at that point.
pub fn remove_row<T>(rows: &mut Vec<T>, index: usize) {
    if rows.len() > 1 && index < rows.len() {
        rows.remove(index);
    }
}
