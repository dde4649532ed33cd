use chrono::{Datelike, NaiveDate, Weekday};

use crate::model::{DailyForecastEntry, DailySeries, celsius_label};

/// Display bucket for a WMO weather code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconCategory {
    Clear,
    PartlyCloudy,
    Overcast,
    Fog,
    Drizzle,
    FreezingDrizzle,
    Rain,
    FreezingRain,
    Snow,
    Showers,
    Thunderstorm,
    ThunderstormHail,
    Unknown,
}

impl IconCategory {
    /// Total over all codes; anything unlisted is `Unknown`.
    pub const fn from_code(code: i32) -> Self {
        match code {
            0 => IconCategory::Clear,
            1 | 2 => IconCategory::PartlyCloudy,
            3 => IconCategory::Overcast,
            45 | 48 => IconCategory::Fog,
            51 | 53 | 55 => IconCategory::Drizzle,
            56 | 57 => IconCategory::FreezingDrizzle,
            61 | 63 | 65 => IconCategory::Rain,
            66 | 67 => IconCategory::FreezingRain,
            71 | 73 | 75 | 77 | 85 | 86 => IconCategory::Snow,
            80..=82 => IconCategory::Showers,
            95 => IconCategory::Thunderstorm,
            96 | 99 => IconCategory::ThunderstormHail,
            _ => IconCategory::Unknown,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            IconCategory::Clear => "clear",
            IconCategory::PartlyCloudy => "partly-cloudy",
            IconCategory::Overcast => "overcast",
            IconCategory::Fog => "fog",
            IconCategory::Drizzle => "drizzle",
            IconCategory::FreezingDrizzle => "freezing-drizzle",
            IconCategory::Rain => "rain",
            IconCategory::FreezingRain => "freezing-rain",
            IconCategory::Snow => "snow",
            IconCategory::Showers => "showers",
            IconCategory::Thunderstorm => "thunderstorm",
            IconCategory::ThunderstormHail => "thunderstorm-hail",
            IconCategory::Unknown => "unknown",
        }
    }

    pub const fn all() -> &'static [IconCategory] {
        &[
            IconCategory::Clear,
            IconCategory::PartlyCloudy,
            IconCategory::Overcast,
            IconCategory::Fog,
            IconCategory::Drizzle,
            IconCategory::FreezingDrizzle,
            IconCategory::Rain,
            IconCategory::FreezingRain,
            IconCategory::Snow,
            IconCategory::Showers,
            IconCategory::Thunderstorm,
            IconCategory::ThunderstormHail,
            IconCategory::Unknown,
        ]
    }
}

impl std::fmt::Display for IconCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bucket name for a weather code.
pub fn icon_category_of(code: i32) -> String {
    IconCategory::from_code(code).as_str().to_string()
}

/// Turn a daily series into display rows, one per day, in input order.
///
/// An absent series maps to no rows.
pub fn map_daily_series<F, S>(series: Option<&DailySeries>, icon_category_of: F) -> Vec<DailyForecastEntry>
where
    F: Fn(i32) -> S,
    S: Into<String>,
{
    let Some(series) = series else {
        return Vec::new();
    };

    series
        .dates()
        .iter()
        .zip(series.minima())
        .zip(series.maxima())
        .zip(series.codes())
        .map(|(((date, min), max), code)| DailyForecastEntry {
            date: date.clone(),
            icon_category: icon_category_of(*code).into(),
            temperature_range_label: format!("{} / {}", celsius_label(*min), celsius_label(*max)),
        })
        .collect()
}

/// `"Today"` for `today`, otherwise the weekday name. Input that is not `YYYY-MM-DD`
/// comes back unchanged.
pub fn day_label(raw_date: &str, today: NaiveDate) -> String {
    match NaiveDate::parse_from_str(raw_date, "%Y-%m-%d") {
        Ok(date) if date == today => "Today".to_string(),
        Ok(date) => weekday_name(date.weekday()).to_string(),
        Err(_) => raw_date.to_string(),
    }
}

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
