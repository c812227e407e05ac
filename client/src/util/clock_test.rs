use super::*;

#[test]
fn format_time_of_day_pads_and_uses_twelve_hour_clock() {
    assert_eq!(format_time_of_day(14, 30), "02:30 PM");
    assert_eq!(format_time_of_day(9, 5), "09:05 AM");
}

#[test]
fn format_time_of_day_handles_midnight_and_noon() {
    assert_eq!(format_time_of_day(0, 0), "12:00 AM");
    assert_eq!(format_time_of_day(12, 0), "12:00 PM");
    assert_eq!(format_time_of_day(23, 59), "11:59 PM");
}

#[test]
fn time_of_day_has_label_shape() {
    let label = time_of_day();
    assert_eq!(label.len(), 8);
    assert!(label.ends_with("AM") || label.ends_with("PM"));
    assert_eq!(&label[2..3], ":");
}
