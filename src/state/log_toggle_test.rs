use super::*;

#[test]
fn hidden_full_element_means_short_view() {
    assert_eq!(LogView::from_full_display("none"), LogView::Short);
}

#[test]
fn any_other_display_means_full_view() {
    assert_eq!(LogView::from_full_display("block"), LogView::Full);
    assert_eq!(LogView::from_full_display(""), LogView::Full);
}

#[test]
fn toggling_short_shows_full_with_collapse_label() {
    let next = LogView::Short.toggled();
    assert_eq!(next, LogView::Full);
    assert_eq!(next.full_display(), "block");
    assert_eq!(next.short_display(), "none");
    assert_eq!(next.label(), COLLAPSE_LABEL);
}

#[test]
fn toggling_full_shows_short_with_expand_label() {
    let next = LogView::Full.toggled();
    assert_eq!(next, LogView::Short);
    assert_eq!(next.full_display(), "none");
    assert_eq!(next.short_display(), "block");
    assert_eq!(next.label(), EXPAND_LABEL);
}

#[test]
fn toggling_twice_returns_to_start() {
    for start in [LogView::Short, LogView::Full] {
        assert_eq!(start.toggled().toggled(), start);
    }
}

#[test]
fn applied_display_round_trips_through_detection() {
    for view in [LogView::Short, LogView::Full] {
        assert_eq!(LogView::from_full_display(view.full_display()), view);
    }
}
