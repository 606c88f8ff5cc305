use super::*;

#[test]
fn view_mode_survives_storage_encoding() {
    for mode in [ViewMode::Grid, ViewMode::List] {
        assert_eq!(decode_view_mode(&encode_view_mode(mode)), Some(mode));
    }
}

#[test]
fn garbage_is_no_preference() {
    assert_eq!(decode_view_mode("carousel"), None);
    assert_eq!(decode_view_mode(""), None);
    assert_eq!(decode_view_mode("\"Tiles\""), None);
}

#[test]
fn nothing_is_remembered_outside_the_browser() {
    save_view_mode(ViewMode::List);
    assert_eq!(load_view_mode(), None);
}
