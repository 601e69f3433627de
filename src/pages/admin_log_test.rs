use super::*;

#[test]
fn toggle_element_ids_use_row_id() {
    assert_eq!(
        toggle_element_ids("42"),
        ("short_msg_42".to_owned(), "full_msg_42".to_owned(), "toggle_link_42".to_owned())
    );
}

#[test]
fn numeric_log_id_is_formatted_without_fraction() {
    assert_eq!(normalize_log_id(None, Some(42.0)), Ok("42".to_owned()));
}

#[test]
fn string_log_id_is_used_as_is() {
    assert_eq!(normalize_log_id(Some("7".to_owned()), None), Ok("7".to_owned()));
}

#[test]
fn missing_or_empty_log_id_is_rejected() {
    assert_eq!(normalize_log_id(None, None), Err(ToggleError::InvalidId));
    assert_eq!(normalize_log_id(Some(String::new()), None), Err(ToggleError::InvalidId));
}
