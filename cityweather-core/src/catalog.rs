use serde::Serialize;

/// A named location with fixed coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct City {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

impl City {
    const fn new(name: &'static str, latitude: f64, longitude: f64) -> Self {
        Self { name, latitude, longitude }
    }
}

impl std::fmt::Display for City {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}

/// Supported cities, in declaration order.
pub static CITIES: [City; 14] = [
    City::new("London", 51.5074, -0.1278),
    City::new("Paris", 48.8566, 2.3522),
    City::new("Berlin", 52.52, 13.4050),
    City::new("Rome", 41.9028, 12.4964),
    City::new("Madrid", 40.4168, -3.7038),
    City::new("Vienna", 48.2082, 16.3738),
    City::new("Amsterdam", 52.3676, 4.9041),
    City::new("Prague", 50.0755, 14.4378),
    City::new("Budapest", 47.4979, 19.0402),
    City::new("Lisbon", 38.7223, -9.1393),
    City::new("Athens", 37.9838, 23.7275),
    City::new("Barcelona", 41.38, 2.17),
    City::new("Warsaw", 52.23, 21.01),
    City::new("Kyiv", 50.45, 30.52),
];

/// The full catalog. Order is for iteration only; display order is decided by callers.
pub fn all() -> &'static [City] {
    &CITIES
}

/// Exact, case-insensitive lookup by name.
pub fn resolve(name: &str) -> Option<City> {
    resolve_in(&CITIES, name)
}

pub fn resolve_in(cities: &[City], name: &str) -> Option<City> {
    cities.iter().copied().find(|city| city.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_ignores_case() {
        let city = resolve("bERLin").expect("Berlin is in the catalog");
        assert_eq!(city.name, "Berlin");
        assert_eq!(city.latitude, 52.52);
        assert_eq!(city.longitude, 13.405);
    }

    #[test]
    fn resolve_requires_exact_match() {
        assert!(resolve("Ber").is_none());
        assert!(resolve(" Berlin").is_none());
        assert!(resolve("").is_none());
    }

    #[test]
    fn catalog_has_unique_names() {
        let cities = all();
        assert_eq!(cities.len(), 14);

        for (i, a) in cities.iter().enumerate() {
            for b in &cities[i + 1..] {
                assert!(!a.name.eq_ignore_ascii_case(b.name), "duplicate city {a}");
            }
        }
    }

    #[test]
    fn every_catalog_entry_resolves_to_itself() {
        for city in all() {
            assert_eq!(resolve(&city.name.to_uppercase()), Some(*city));
        }
    }
}
