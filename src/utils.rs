use std::fmt;

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, Offset, Utc};

pub const MS_PER_HOUR: f64 = 1000.0 * 60.0 * 60.0;
pub const MAX_LABEL_WIDTH: usize = 28;

/// Zone in which plays are bucketed into hours, months and years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListeningZone {
    Local,
    Fixed(FixedOffset),
}

impl ListeningZone {
    pub fn utc() -> Self {
        ListeningZone::Fixed(Utc.fix())
    }

    pub fn localize(&self, ts: &DateTime<Utc>) -> NaiveDateTime {
        match self {
            ListeningZone::Local => ts.with_timezone(&Local).naive_local(),
            ListeningZone::Fixed(offset) => ts.with_timezone(offset).naive_local(),
        }
    }
}

impl fmt::Display for ListeningZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListeningZone::Local => write!(f, "local"),
            ListeningZone::Fixed(offset) => write!(f, "UTC{}", offset),
        }
    }
}

/// Parses a listening zone from `local`, `UTC`/`Z`, or a `+HH:MM` / `-HHMM` offset.
pub fn parse_listening_zone(raw: &str) -> Result<ListeningZone, String> {
    let s = raw.trim();
    if s.is_empty() {
        return Err("zone cannot be empty".to_string());
    }
    if s.eq_ignore_ascii_case("local") {
        return Ok(ListeningZone::Local);
    }
    if s.eq_ignore_ascii_case("utc") || s.eq_ignore_ascii_case("z") {
        return Ok(ListeningZone::utc());
    }

    let (sign, rest) = match s.as_bytes()[0] {
        b'+' => (1, &s[1..]),
        b'-' => (-1, &s[1..]),
        _ => return Err(format!("invalid offset '{s}': expected +HH:MM or -HH:MM")),
    };

    let (hours, minutes) = match rest.split_once(':') {
        Some((h, m)) => (h, m),
        None if rest.len() == 4 && rest.is_ascii() => rest.split_at(2),
        None => (rest, "0"),
    };

    let hours: i32 = hours
        .parse()
        .map_err(|_| format!("invalid offset '{s}': bad hours"))?;
    let minutes: i32 = minutes
        .parse()
        .map_err(|_| format!("invalid offset '{s}': bad minutes"))?;
    if !(0..=14).contains(&hours) || !(0..60).contains(&minutes) {
        return Err(format!("invalid offset '{s}': out of range"));
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
        .map(ListeningZone::Fixed)
        .ok_or_else(|| format!("invalid offset '{s}': out of range"))
}

/// Parses a play timestamp into an absolute UTC time.
///
/// Accepts RFC 3339 (`2021-03-04T12:34:56Z`, fractional seconds, explicit
/// offsets) and the naive `YYYY-MM-DD HH:MM[:SS]` form of legacy exports,
/// which is already UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    None
}

pub fn ms_to_hours(ms: u64) -> f64 {
    ms as f64 / MS_PER_HOUR
}

pub fn format_hours(hours: f64) -> String {
    format!("{:.2}", hours)
}

/// Length of an ASCII bar: `round(value / max_value * scale)`.
///
/// Values above `max_value` get a full bar, so the result never exceeds
/// `scale`.
///
/// # Arguments
///
/// * `value` - The value the bar stands for
/// * `max_value` - The value drawn as a full-length bar
/// * `scale` - Length in characters of a full-length bar
///
/// # Returns
///
/// The bar length in characters, 0 for non-positive values or maxima.
///
/// # Example
///
/// ```
/// assert_eq!(bar_length(5.0, 10.0, 20), 10);
/// assert_eq!(bar_length(1.0, 3.0, 10), 3);
/// ```
pub fn bar_length(value: f64, max_value: f64, scale: usize) -> usize {
    if !(max_value > 0.0) || !(value > 0.0) {
        return 0;
    }
    let ratio = (value / max_value).min(1.0);
    ((ratio * scale as f64).round() as usize).min(scale)
}

pub fn render_bar(value: f64, max_value: f64, scale: usize) -> String {
    "█".repeat(bar_length(value, max_value, scale))
}

/// Renders labelled values as fixed-width ASCII bars, one line per entry.
///
/// Bars are scaled against the largest value in `entries`.
pub fn render_bar_chart(entries: &[(String, f64)], scale: usize) -> Vec<String> {
    let max_value = entries.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);
    let labels: Vec<String> = entries
        .iter()
        .map(|(label, _)| truncate_label(label, MAX_LABEL_WIDTH))
        .collect();
    let width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);

    labels
        .into_iter()
        .zip(entries)
        .map(|(label, (_, value))| {
            format!(
                "{label:<width$} {bar} {value}",
                label = label,
                width = width,
                bar = render_bar(*value, max_value, scale),
                value = format_value(*value)
            )
        })
        .collect()
}

/// Shades used for heatmap cells, from no plays to the busiest cell.
pub const HEAT_SHADES: [char; 5] = [' ', '░', '▒', '▓', '█'];

/// Renders counts as one row of heatmap cells, one character per count.
///
/// Each cell is shaded by `round(count / max * 4)`, so only counts equal to
/// `max` get the darkest shade and zero counts stay blank.
pub fn render_heat_row(counts: &[usize], max: usize) -> String {
    let top = HEAT_SHADES.len() - 1;
    counts
        .iter()
        .map(|count| HEAT_SHADES[bar_length(*count as f64, max as f64, top)])
        .collect()
}

pub fn truncate_label(label: &str, max: usize) -> String {
    if label.chars().count() <= max {
        return label.to_string();
    }
    let mut short: String = label.chars().take(max.saturating_sub(1)).collect();
    short.push('…');
    short
}

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}
