use super::*;

#[test]
fn format_hhmm_zero_pads_both_fields() {
    assert_eq!(format_hhmm(9, 5), "09:05");
    assert_eq!(format_hhmm(0, 0), "00:00");
    assert_eq!(format_hhmm(23, 59), "23:59");
}

#[test]
fn now_hhmm_has_clock_shape() {
    let stamp = now_hhmm();
    assert_eq!(stamp.len(), 5);
    assert_eq!(&stamp[2..3], ":");
    let hours: u32 = stamp[..2].parse().unwrap();
    let minutes: u32 = stamp[3..].parse().unwrap();
    assert!(hours < 24);
    assert!(minutes < 60);
}
