use std::sync::{Arc, PoisonError, RwLock};

use crate::model::CityWeatherResult;

/// Single-slot, in-memory store for the last aggregated city list.
///
/// Clones share the same slot. Entries never expire; they are replaced by the next
/// `set` (last writer wins) or dropped with `clear`.
#[derive(Debug, Clone, Default)]
pub struct ResultCache {
    slot: Arc<RwLock<Option<Vec<CityWeatherResult>>>>,
}

impl ResultCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<Vec<CityWeatherResult>> {
        let slot = self.slot.read().unwrap_or_else(PoisonError::into_inner);
        match slot.as_ref() {
            Some(results) => {
                tracing::debug!(entries = results.len(), "result cache hit");
                Some(results.clone())
            }
            None => {
                tracing::debug!("result cache empty");
                None
            }
        }
    }

    pub fn set(&self, results: Vec<CityWeatherResult>) {
        tracing::debug!(entries = results.len(), "storing results in cache");
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = Some(results);
    }

    pub fn clear(&self) {
        tracing::debug!("clearing result cache");
        self.slot.write().unwrap_or_else(PoisonError::into_inner).take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(city: &str) -> CityWeatherResult {
        CityWeatherResult {
            city_name: city.to_string(),
            temperature_label: "12°C".to_string(),
            status_description: "Code: 1".to_string(),
        }
    }

    #[test]
    fn starts_empty() {
        assert_eq!(ResultCache::new().get(), None);
    }

    #[test]
    fn get_returns_what_was_set() {
        let cache = ResultCache::new();
        let results = vec![row("Athens"), row("Berlin")];

        cache.set(results.clone());

        assert_eq!(cache.get(), Some(results.clone()));
        assert_eq!(cache.get(), Some(results));
    }

    #[test]
    fn last_set_wins() {
        let cache = ResultCache::new();
        cache.set(vec![row("Athens")]);
        cache.set(vec![row("Kyiv")]);

        assert_eq!(cache.get(), Some(vec![row("Kyiv")]));
    }

    #[test]
    fn clones_share_the_slot() {
        let cache = ResultCache::new();
        let handle = cache.clone();

        handle.set(vec![row("Rome")]);
        assert_eq!(cache.get(), Some(vec![row("Rome")]));

        cache.clear();
        assert_eq!(handle.get(), None);
    }

    #[test]
    fn separate_instances_are_isolated() {
        let a = ResultCache::new();
        let b = ResultCache::new();

        a.set(vec![row("Paris")]);
        assert_eq!(b.get(), None);
    }
}
