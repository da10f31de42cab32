use super::*;

fn rows() -> Vec<String> {
    vec!["a".to_owned(), "b".to_owned(), "c".to_owned()]
}

// =============================================================
// set_row
// =============================================================

#[test]
fn set_row_replaces_in_place() {
    let mut list = rows();
    set_row(&mut list, 1, "edited".to_owned());
    assert_eq!(list, ["a", "edited", "c"]);
}

#[test]
fn set_row_out_of_range_is_ignored() {
    let mut list = rows();
    set_row(&mut list, 3, "edited".to_owned());
    assert_eq!(list, ["a", "b", "c"]);
}

// =============================================================
// remove_row
// =============================================================

#[test]
fn remove_row_deletes_by_index() {
    let mut list = rows();
    remove_row(&mut list, 1);
    assert_eq!(list, ["a", "c"]);
}

#[test]
fn remove_row_out_of_range_is_ignored() {
    let mut list = rows();
    remove_row(&mut list, 3);
    assert_eq!(list, ["a", "b", "c"]);
}

#[test]
fn remove_row_keeps_the_last_row() {
    let mut list = vec!["only".to_owned()];
    remove_row(&mut list, 0);
    assert_eq!(list, ["only"]);
}
