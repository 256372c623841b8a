use std::collections::{HashMap, HashSet};

use serde_json::Value;

use super::keys::{QueryKey, QueryTag};

/// Outcome of a finished fetch, as stored in the cache.
pub type CachedResult = Result<Value, String>;

/// A cached query result plus its staleness flag.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry {
    pub result: CachedResult,
    pub stale: bool,
}

/// Client-side cache of query results keyed by `(tag, param)`.
///
/// Entries are replaced wholesale when a fetch finishes; staleness is only
/// ever set by mutation invalidation. The in-flight set deduplicates
/// concurrent interest in one key.
#[derive(Debug, Default)]
pub struct QueryCache {
    entries: HashMap<QueryKey, CacheEntry>,
    in_flight: HashSet<QueryKey>,
}

impl QueryCache {
    /// The cached entry for `key`, if any.
    #[must_use]
    pub fn get(&self, key: &QueryKey) -> Option<&CacheEntry> {
        self.entries.get(key)
    }

    /// Whether a fetch for `key` is currently running.
    #[must_use]
    pub fn is_in_flight(&self, key: &QueryKey) -> bool {
        self.in_flight.contains(key)
    }

    /// Claim the fetch for `key`. Returns `false` when one is already
    /// running, in which case the caller must not issue a request.
    pub fn begin(&mut self, key: QueryKey) -> bool {
        self.in_flight.insert(key)
    }

    /// Record a finished fetch, releasing the in-flight claim.
    pub fn finish(&mut self, key: &QueryKey, result: CachedResult) {
        self.in_flight.remove(key);
        self.entries.insert(
            key.clone(),
            CacheEntry {
                result,
                stale: false,
            },
        );
    }

    /// Mark every entry under `tag` stale, returning the touched keys.
    pub fn invalidate_tag(&mut self, tag: QueryTag) -> Vec<QueryKey> {
        let mut touched = Vec::new();
        for (key, entry) in &mut self.entries {
            if key.tag == tag && !entry.stale {
                entry.stale = true;
                touched.push(key.clone());
            }
        }
        touched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_finish_stores_fresh_entry() {
        let mut cache = QueryCache::default();
        let key = QueryKey::of(QueryTag::RecentPosts);

        assert!(cache.begin(key.clone()));
        cache.finish(&key, Ok(json!([1, 2, 3])));

        let entry = cache.get(&key).unwrap();
        assert!(!entry.stale);
        assert_eq!(entry.result, Ok(json!([1, 2, 3])));
        assert!(!cache.is_in_flight(&key));
    }

    #[test]
    fn test_begin_deduplicates() {
        let mut cache = QueryCache::default();
        let key = QueryKey::of(QueryTag::SavedPosts);

        assert!(cache.begin(key.clone()));
        assert!(!cache.begin(key.clone()));
        cache.finish(&key, Ok(Value::Null));
        assert!(cache.begin(key));
    }

    #[test]
    fn test_invalidate_tag_marks_all_params_stale() {
        let mut cache = QueryCache::default();
        let first = QueryKey::with_param(QueryTag::UserById, "1");
        let second = QueryKey::with_param(QueryTag::UserById, "2");
        let other = QueryKey::of(QueryTag::RecentPosts);
        cache.finish(&first, Ok(Value::Null));
        cache.finish(&second, Ok(Value::Null));
        cache.finish(&other, Ok(Value::Null));

        let mut touched = cache.invalidate_tag(QueryTag::UserById);
        touched.sort_by_key(|key| key.to_string());

        assert_eq!(touched, vec![first.clone(), second.clone()]);
        assert!(cache.get(&first).unwrap().stale);
        assert!(cache.get(&second).unwrap().stale);
        assert!(!cache.get(&other).unwrap().stale);
    }

    #[test]
    fn test_invalidate_tag_skips_already_stale() {
        let mut cache = QueryCache::default();
        let key = QueryKey::of(QueryTag::RecentPosts);
        cache.finish(&key, Ok(Value::Null));

        assert_eq!(cache.invalidate_tag(QueryTag::RecentPosts).len(), 1);
        assert!(cache.invalidate_tag(QueryTag::RecentPosts).is_empty());
    }

    #[test]
    fn test_refetch_clears_staleness() {
        let mut cache = QueryCache::default();
        let key = QueryKey::of(QueryTag::RecentPosts);
        cache.finish(&key, Ok(json!(["old"])));
        cache.invalidate_tag(QueryTag::RecentPosts);
        assert!(cache.get(&key).unwrap().stale);

        cache.finish(&key, Ok(json!(["new"])));
        let entry = cache.get(&key).unwrap();
        assert!(!entry.stale);
        assert_eq!(entry.result, Ok(json!(["new"])));
    }

    #[test]
    fn test_errors_are_cached_results() {
        let mut cache = QueryCache::default();
        let key = QueryKey::with_param(QueryTag::PostById, "9");
        cache.finish(&key, Err("Request failed with status 404".to_string()));

        let entry = cache.get(&key).unwrap();
        assert_eq!(entry.result, Err("Request failed with status 404".to_string()));
    }
}
