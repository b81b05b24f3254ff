use super::*;

// =============================================================
// Currency
// =============================================================

#[test]
fn format_currency_groups_millions() {
    assert_eq!(format_currency(1_000_000.0), "Gs.\u{a0}1.000.000");
}

#[test]
fn format_currency_is_stable_across_calls() {
    let first = format_currency(1_000_000.0);
    for _ in 0..10 {
        assert_eq!(format_currency(1_000_000.0), first);
    }
}

#[test]
fn format_currency_rounds_fraction_digits_away() {
    assert_eq!(format_currency(2_500.4), "Gs.\u{a0}2.500");
    assert_eq!(format_currency(2_500.5), "Gs.\u{a0}2.501");
}

#[test]
fn format_currency_small_values_have_no_separator() {
    assert_eq!(format_currency(0.0), "Gs.\u{a0}0");
    assert_eq!(format_currency(999.0), "Gs.\u{a0}999");
    assert_eq!(format_currency(1_000.0), "Gs.\u{a0}1.000");
}

#[test]
fn format_currency_negative_keeps_sign_before_symbol() {
    assert_eq!(format_currency(-150_000.0), "-Gs.\u{a0}150.000");
    assert_eq!(format_currency(-0.2), "Gs.\u{a0}0");
}

#[test]
fn format_currency_non_finite_is_placeholder() {
    assert_eq!(format_currency(f64::NAN), "-");
    assert_eq!(format_currency(f64::INFINITY), "-");
}

#[test]
fn format_optional_currency_handles_missing_amount() {
    assert_eq!(format_optional_currency(None), "-");
    assert_eq!(format_optional_currency(Some(75_000.0)), "Gs.\u{a0}75.000");
}

// =============================================================
// Calendar helpers
// =============================================================

#[test]
fn month_name_is_one_based() {
    assert_eq!(month_name(1), Some("Enero"));
    assert_eq!(month_name(12), Some("Diciembre"));
    assert_eq!(month_name(0), None);
    assert_eq!(month_name(13), None);
}

#[test]
fn year_options_run_newest_first_down_to_first_year() {
    assert_eq!(year_options(2023), vec![2023, 2022, 2021, 2020]);
}

#[test]
fn year_options_before_first_year_only_offers_current() {
    assert_eq!(year_options(2019), vec![2019]);
}

#[test]
fn period_key_zero_pads_month() {
    assert_eq!(period_key(2024, 3), "2024-03");
    assert_eq!(period_key(2024, 11), "2024-11");
}

#[test]
fn format_iso_date_reorders_iso_dates() {
    assert_eq!(format_iso_date("2024-03-09"), "09/03/2024");
}

#[test]
fn format_iso_date_passes_through_display_dates() {
    assert_eq!(format_iso_date("09/03/2024"), "09/03/2024");
    assert_eq!(format_iso_date("2024-03-09T08:15:00"), "2024-03-09T08:15:00");
    assert_eq!(format_iso_date(""), "");
}

#[test]
fn format_iso_date_leaves_impossible_dates_alone() {
    assert_eq!(format_iso_date("2024-13-45"), "2024-13-45");
    assert_eq!(format_iso_date("2023-02-30"), "2023-02-30");
    assert_eq!(format_iso_date("2024-02-29"), "29/02/2024");
}

#[test]
fn text_or_dash_replaces_blank_values() {
    assert_eq!(text_or_dash(None), "-");
    assert_eq!(text_or_dash(Some("   ")), "-");
    assert_eq!(text_or_dash(Some("ok")), "ok");
}

#[test]
fn parse_amount_accepts_thousands_separators() {
    assert_eq!(parse_amount("1.500.000"), 1_500_000.0);
    assert_eq!(parse_amount(" 250000 "), 250_000.0);
}

#[test]
fn parse_amount_yields_nan_for_garbage() {
    assert!(parse_amount("abc").is_nan());
    assert!(parse_amount("").is_nan());
}
