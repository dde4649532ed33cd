use chrono::NaiveDate;
use cityweather_core::{City, CityDetail, CityWeatherResult, day_label};

pub fn cities(cities: &[City]) -> String {
    cities
        .iter()
        .map(|city| format!("{:<12} {:>9.4} {:>9.4}\n", city.name, city.latitude, city.longitude))
        .collect()
}

pub fn city_list(results: &[CityWeatherResult]) -> String {
    let mut out = list_line("City", "Temp", "Status");
    for row in results {
        out.push_str(&list_line(&row.city_name, &row.temperature_label, &row.status_description));
    }
    out
}

fn list_line(city: &str, temperature: &str, status: &str) -> String {
    format!("{city:<12} {temperature:>6}  {status}\n")
}

pub fn city_detail(detail: &CityDetail, today: NaiveDate) -> String {
    let mut out = format!(
        "{}: {} ({})\n",
        detail.city, detail.current_temperature_label, detail.current_icon_category
    );

    if detail.forecasts.is_empty() {
        out.push_str("No forecast available.\n");
        return out;
    }

    for day in &detail.forecasts {
        out.push_str(&format!(
            "  {:<10} {:<18} {}\n",
            day_label(&day.date, today),
            day.icon_category,
            day.temperature_range_label
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use cityweather_core::{DailyForecastEntry, catalog};

    #[test]
    fn list_has_header_and_one_line_per_row() {
        let rows = vec![
            CityWeatherResult {
                city_name: "Athens".into(),
                temperature_label: "31°C".into(),
                status_description: "Code: 0".into(),
            },
            CityWeatherResult {
                city_name: "Berlin".into(),
                temperature_label: "--".into(),
                status_description: "Error: timeout".into(),
            },
        ];

        let text = city_list(&rows);
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("City"));
        assert!(lines[1].starts_with("Athens"));
        assert!(lines[1].ends_with("Code: 0"));
        assert!(lines[2].ends_with("Error: timeout"));
    }

    #[test]
    fn detail_uses_day_labels() {
        let detail = CityDetail {
            city: "Kyiv".into(),
            current_temperature_label: "17°C".into(),
            current_icon_category: "partly-cloudy".into(),
            forecasts: vec![
                DailyForecastEntry {
                    date: "2025-06-14".into(),
                    icon_category: "rain".into(),
                    temperature_range_label: "10°C / 19°C".into(),
                },
                DailyForecastEntry {
                    date: "2025-06-15".into(),
                    icon_category: "clear".into(),
                    temperature_range_label: "12°C / 24°C".into(),
                },
            ],
        };
        let today = NaiveDate::from_ymd_opt(2025, 6, 14).expect("valid date");

        let text = city_detail(&detail, today);

        assert!(text.starts_with("Kyiv: 17°C (partly-cloudy)"));
        assert!(text.contains("Today"));
        assert!(text.contains("Sunday"));
        assert!(text.contains("10°C / 19°C"));
    }

    #[test]
    fn detail_without_forecast_says_so() {
        let detail = CityDetail {
            city: "Rome".into(),
            current_temperature_label: "--".into(),
            current_icon_category: "unknown".into(),
            forecasts: Vec::new(),
        };
        let today = NaiveDate::from_ymd_opt(2025, 6, 14).expect("valid date");

        assert!(city_detail(&detail, today).contains("No forecast available."));
    }

    #[test]
    fn cities_lists_whole_catalog() {
        let text = cities(catalog::all());
        assert_eq!(text.lines().count(), 14);
        assert!(text.contains("Lisbon"));
    }
}
