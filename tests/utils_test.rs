use chrono::{FixedOffset, NaiveDate, TimeZone, Timelike, Utc};
use spotstats::utils::*;

#[test]
fn test_bar_length_scales_linearly() {
    assert_eq!(bar_length(5.0, 10.0, 20), 10);
    assert_eq!(bar_length(10.0, 10.0, 20), 20);
    assert_eq!(bar_length(1.0, 4.0, 40), 10);
}

#[test]
fn test_bar_length_rounds_to_nearest() {
    // 1/3 * 10 = 3.33 -> 3, 2/3 * 10 = 6.67 -> 7
    assert_eq!(bar_length(1.0, 3.0, 10), 3);
    assert_eq!(bar_length(2.0, 3.0, 10), 7);
    // exactly half rounds away from zero
    assert_eq!(bar_length(1.0, 8.0, 4), 1);
}

#[test]
fn test_bar_length_degenerate_inputs() {
    assert_eq!(bar_length(0.0, 10.0, 20), 0);
    assert_eq!(bar_length(5.0, 0.0, 20), 0);
    assert_eq!(bar_length(-1.0, 10.0, 20), 0);
    assert_eq!(bar_length(5.0, 10.0, 0), 0);
}

#[test]
fn test_bar_length_never_exceeds_scale() {
    assert_eq!(bar_length(15.0, 10.0, 20), 20);
    assert_eq!(bar_length(1.0, 1e-300, 40), 40);
    assert_eq!(bar_length(f64::INFINITY, 1.0, 8), 8);
    assert_eq!(bar_length(f64::NAN, 1.0, 8), 0);
}

#[test]
fn test_render_bar_value_above_max() {
    assert_eq!(render_bar(1.0, 1e-300, 40), "█".repeat(40));
    assert_eq!(render_bar(3.0, 2.0, 5).chars().count(), 5);
}

#[test]
fn test_render_heat_row() {
    assert_eq!(render_heat_row(&[0, 1, 2, 3, 4], 4), " ░▒▓█");
    assert_eq!(render_heat_row(&[0, 0], 0), "  ");
    assert_eq!(render_heat_row(&[], 10), "");
}

#[test]
fn test_render_bar() {
    assert_eq!(render_bar(3.0, 6.0, 4), "██");
    assert_eq!(render_bar(0.0, 6.0, 4), "");
}

#[test]
fn test_render_bar_chart_aligns_labels() {
    let entries = vec![("Radiohead".to_string(), 10.0), ("ABBA".to_string(), 5.0)];
    let lines = render_bar_chart(&entries, 10);

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], format!("Radiohead {} 10", "█".repeat(10)));
    assert_eq!(lines[1], format!("{:<9} {} 5", "ABBA", "█".repeat(5)));
}

#[test]
fn test_render_bar_chart_fractional_values() {
    let entries = vec![("2022".to_string(), 1.5), ("2023".to_string(), 3.0)];
    let lines = render_bar_chart(&entries, 4);

    assert_eq!(lines[0], "2022 ██ 1.50");
    assert_eq!(lines[1], "2023 ████ 3");
}

#[test]
fn test_render_bar_chart_empty() {
    assert!(render_bar_chart(&[], 10).is_empty());
}

#[test]
fn test_truncate_label() {
    assert_eq!(truncate_label("abc", 4), "abc");
    assert_eq!(truncate_label("abcd", 4), "abcd");
    assert_eq!(truncate_label("abcdef", 4), "abc…");
    assert_eq!(truncate_label("Sigur Rós", 6), "Sigur…");
}

#[test]
fn test_parse_timestamp_rfc3339() {
    let expected = Utc.with_ymd_and_hms(2021, 3, 4, 12, 34, 56).unwrap();
    assert_eq!(parse_timestamp("2021-03-04T12:34:56Z"), Some(expected));

    let with_millis = parse_timestamp("2021-03-04T12:34:56.789Z").unwrap();
    assert_eq!(with_millis.timestamp(), expected.timestamp());
    assert_eq!(with_millis.timestamp_subsec_millis(), 789);

    let with_offset = parse_timestamp("2021-03-04T12:34:56+02:00").unwrap();
    assert_eq!(with_offset.hour(), 10);
}

#[test]
fn test_parse_timestamp_legacy_format() {
    let expected = Utc.with_ymd_and_hms(2020, 1, 2, 10, 5, 0).unwrap();
    assert_eq!(parse_timestamp("2020-01-02 10:05"), Some(expected));
    assert_eq!(parse_timestamp(" 2020-01-02 10:05:00 "), Some(expected));
}

#[test]
fn test_parse_timestamp_invalid() {
    assert_eq!(parse_timestamp(""), None);
    assert_eq!(parse_timestamp("   "), None);
    assert_eq!(parse_timestamp("yesterday"), None);
    assert_eq!(parse_timestamp("2021-13-40T00:00:00Z"), None);
}

#[test]
fn test_parse_listening_zone() {
    assert_eq!(parse_listening_zone("local").unwrap(), ListeningZone::Local);
    assert_eq!(parse_listening_zone("UTC").unwrap(), ListeningZone::utc());
    assert_eq!(parse_listening_zone("z").unwrap(), ListeningZone::utc());
    assert_eq!(
        parse_listening_zone("-05:00").unwrap(),
        ListeningZone::Fixed(FixedOffset::west_opt(5 * 3600).unwrap())
    );
    assert_eq!(
        parse_listening_zone("+0530").unwrap(),
        ListeningZone::Fixed(FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap())
    );
    assert_eq!(
        parse_listening_zone("+9").unwrap(),
        ListeningZone::Fixed(FixedOffset::east_opt(9 * 3600).unwrap())
    );
}

#[test]
fn test_parse_listening_zone_invalid() {
    assert!(parse_listening_zone("").is_err());
    assert!(parse_listening_zone("05:00").is_err());
    assert!(parse_listening_zone("+25:00").is_err());
    assert!(parse_listening_zone("+05:75").is_err());
    assert!(parse_listening_zone("+ab:00").is_err());
}

#[test]
fn test_listening_zone_localize() {
    let ts = Utc.with_ymd_and_hms(2021, 3, 4, 3, 0, 0).unwrap();
    let zone = parse_listening_zone("-05:00").unwrap();
    let local = zone.localize(&ts);

    assert_eq!(
        local,
        NaiveDate::from_ymd_opt(2021, 3, 3)
            .unwrap()
            .and_hms_opt(22, 0, 0)
            .unwrap()
    );
    assert_eq!(ListeningZone::utc().localize(&ts), ts.naive_utc());
}

#[test]
fn test_listening_zone_display() {
    assert_eq!(ListeningZone::Local.to_string(), "local");
    assert_eq!(parse_listening_zone("-05:00").unwrap().to_string(), "UTC-05:00");
}

#[test]
fn test_hours_helpers() {
    assert_eq!(ms_to_hours(3_600_000), 1.0);
    assert_eq!(format_hours(ms_to_hours(5_400_000)), "1.50");
}
