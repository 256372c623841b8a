use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use once_cell::unsync::OnceCell;
use yew::Callback;

use super::cache::{CacheEntry, CachedResult, QueryCache};
use super::invalidation::Mutation;
use super::keys::QueryKey;

thread_local! {
    static SHARED_QUERY_CLIENT: OnceCell<Rc<QueryClient>> = OnceCell::new();
}

/// Identifier handed back by [`QueryClient::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(usize);

/// Process-wide owner of the query cache.
///
/// Queries read and populate entries; mutations invalidate them through
/// the fixed table. Subscribers are notified whenever a key they watch is
/// written or marked stale, so mounted queries refetch without polling.
#[derive(Debug, Default)]
pub struct QueryClient {
    cache: RefCell<QueryCache>,
    subscribers: RefCell<HashMap<QueryKey, Vec<(SubscriptionId, Callback<()>)>>>,
    next_subscription: Cell<usize>,
}

impl QueryClient {
    fn new() -> Self {
        Self::default()
    }

    /// The process-wide client, created on first use.
    #[must_use]
    pub fn shared() -> Rc<Self> {
        SHARED_QUERY_CLIENT.with(|cell| cell.get_or_init(|| Rc::new(Self::new())).clone())
    }

    /// A clone of the cached entry for `key`, if any.
    #[must_use]
    pub fn entry(&self, key: &QueryKey) -> Option<CacheEntry> {
        self.cache.borrow().get(key).cloned()
    }

    /// Whether a fetch for `key` is currently running.
    #[must_use]
    pub fn is_in_flight(&self, key: &QueryKey) -> bool {
        self.cache.borrow().is_in_flight(key)
    }

    /// Claim the fetch for `key`; `false` means another query already has
    /// it in flight and the caller should wait for the notification.
    pub fn begin_fetch(&self, key: &QueryKey) -> bool {
        self.cache.borrow_mut().begin(key.clone())
    }

    /// Store a finished fetch and wake everything watching `key`.
    pub fn finish_fetch(&self, key: &QueryKey, result: CachedResult) {
        self.cache.borrow_mut().finish(key, result);
        self.notify(key);
    }

    /// Run the invalidation table for `mutation`, waking the watchers of
    /// every touched key.
    pub fn apply_invalidations(&self, mutation: Mutation) {
        let mut touched = Vec::new();
        {
            let mut cache = self.cache.borrow_mut();
            for tag in mutation.invalidates() {
                touched.extend(cache.invalidate_tag(*tag));
            }
        }
        for key in touched {
            self.notify(&key);
        }
    }

    /// Register interest in `key`. The callback fires after every write or
    /// invalidation of that key until [`Self::unsubscribe`] is called.
    pub fn subscribe(&self, key: &QueryKey, callback: Callback<()>) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription.get());
        self.next_subscription.set(id.0 + 1);
        self.subscribers
            .borrow_mut()
            .entry(key.clone())
            .or_default()
            .push((id, callback));
        id
    }

    /// Drop a subscription registered with [`Self::subscribe`].
    pub fn unsubscribe(&self, key: &QueryKey, id: SubscriptionId) {
        let mut subscribers = self.subscribers.borrow_mut();
        if let Some(entries) = subscribers.get_mut(key) {
            entries.retain(|(entry_id, _)| *entry_id != id);
            if entries.is_empty() {
                subscribers.remove(key);
            }
        }
    }

    // Callbacks are collected before emitting so a subscriber that reads
    // the cache re-entrantly does not hit the borrow.
    fn notify(&self, key: &QueryKey) {
        let callbacks: Vec<Callback<()>> = self
            .subscribers
            .borrow()
            .get(key)
            .map(|entries| entries.iter().map(|(_, callback)| callback.clone()).collect())
            .unwrap_or_default();
        for callback in callbacks {
            callback.emit(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::keys::QueryTag;
    use serde_json::json;

    fn counter() -> (Rc<Cell<u32>>, Callback<()>) {
        let count = Rc::new(Cell::new(0));
        let callback = {
            let count = count.clone();
            Callback::from(move |()| count.set(count.get() + 1))
        };
        (count, callback)
    }

    #[test]
    fn test_finish_fetch_notifies_watchers() {
        let client = QueryClient::new();
        let key = QueryKey::of(QueryTag::RecentPosts);
        let (count, callback) = counter();
        client.subscribe(&key, callback);

        assert!(client.begin_fetch(&key));
        client.finish_fetch(&key, Ok(json!([])));

        assert_eq!(count.get(), 1);
        assert!(!client.entry(&key).unwrap().stale);
    }

    #[test]
    fn test_mutation_marks_stale_and_notifies() {
        let client = QueryClient::new();
        let key = QueryKey::of(QueryTag::RecentPosts);
        client.finish_fetch(&key, Ok(json!(["post"])));

        let (count, callback) = counter();
        client.subscribe(&key, callback);
        client.apply_invalidations(Mutation::LikePost);

        assert_eq!(count.get(), 1);
        assert!(client.entry(&key).unwrap().stale);
    }

    #[test]
    fn test_mutation_without_rows_notifies_nothing() {
        let client = QueryClient::new();
        let key = QueryKey::of(QueryTag::RecentPosts);
        client.finish_fetch(&key, Ok(json!([])));

        let (count, callback) = counter();
        client.subscribe(&key, callback);
        client.apply_invalidations(Mutation::CreateComment);

        assert_eq!(count.get(), 0);
        assert!(!client.entry(&key).unwrap().stale);
    }

    #[test]
    fn test_invalidation_only_touches_matching_tag() {
        let client = QueryClient::new();
        let profile = QueryKey::with_param(QueryTag::UserById, "7");
        let recent = QueryKey::of(QueryTag::RecentPosts);
        client.finish_fetch(&profile, Ok(json!({})));
        client.finish_fetch(&recent, Ok(json!([])));

        client.apply_invalidations(Mutation::FollowUserToggle);

        assert!(client.entry(&profile).unwrap().stale);
        assert!(!client.entry(&recent).unwrap().stale);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let client = QueryClient::new();
        let key = QueryKey::of(QueryTag::SavedPosts);
        let (count, callback) = counter();
        let id = client.subscribe(&key, callback);

        client.finish_fetch(&key, Ok(json!([])));
        client.unsubscribe(&key, id);
        client.finish_fetch(&key, Ok(json!([])));

        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_begin_fetch_dedupes_until_finished() {
        let client = QueryClient::new();
        let key = QueryKey::of(QueryTag::LikedPosts);

        assert!(client.begin_fetch(&key));
        assert!(!client.begin_fetch(&key));
        assert!(client.is_in_flight(&key));

        client.finish_fetch(&key, Ok(json!([])));
        assert!(!client.is_in_flight(&key));
        assert!(client.begin_fetch(&key));
    }
}
