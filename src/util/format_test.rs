use super::*;

// =============================================================
// format_peso
// =============================================================

#[test]
fn zero_formats_with_two_decimals() {
    assert_eq!(format_peso(0.0), "₱0.00");
}

#[test]
fn thousands_grouped_with_spaces() {
    assert_eq!(format_peso(1_234_567.5), "₱1 234 567.50");
}

#[test]
fn small_amounts_are_ungrouped() {
    assert_eq!(format_peso(999.99), "₱999.99");
}

#[test]
fn negative_amounts_carry_a_leading_minus() {
    assert_eq!(format_peso(-1500.0), "-₱1 500.00");
}

#[test]
fn non_finite_values_render_as_zero() {
    assert_eq!(format_peso(f64::NAN), "₱0.00");
    assert_eq!(format_peso(f64::INFINITY), "₱0.00");
}

// =============================================================
// format_time_12h
// =============================================================

#[test]
fn midnight_half_hour_is_twelve_am() {
    assert_eq!(format_time_12h("00:30"), "12:30 AM");
}

#[test]
fn afternoon_hours_wrap_to_pm() {
    assert_eq!(format_time_12h("13:05"), "1:05 PM");
}

#[test]
fn noon_is_twelve_pm() {
    assert_eq!(format_time_12h("12:00"), "12:00 PM");
}

#[test]
fn morning_hour_drops_leading_zero() {
    assert_eq!(format_time_12h("09:15"), "9:15 AM");
}

#[test]
fn seconds_suffix_is_accepted_and_dropped() {
    assert_eq!(format_time_12h("14:30:59"), "2:30 PM");
}

#[test]
fn pattern_mismatch_passes_through() {
    assert_eq!(format_time_12h("9:15"), "9:15");
    assert_eq!(format_time_12h("not a time"), "not a time");
    assert_eq!(format_time_12h(""), "");
}
