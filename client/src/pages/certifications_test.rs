use super::*;

#[test]
fn escape_closes_modal() {
    assert!(closes_modal("Escape"));
    assert!(closes_modal("Esc"));
}

#[test]
fn other_keys_keep_modal_open() {
    for key in ["Enter", "Tab", " ", "e", "ArrowDown"] {
        assert!(!closes_modal(key), "{key:?} should not close the modal");
    }
}
