use std::future::Future;
use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::models::{ApiError, Post, PostPage};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::cache::CacheEntry;
use super::client::QueryClient;
use super::invalidation::Mutation;
use super::keys::QueryKey;
use super::pagination::{self, FIRST_PAGE};

/// Snapshot of a query's lifecycle as seen by a component.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult<T: Clone + PartialEq> {
    /// The last successful response, if any.
    pub data: Option<T>,
    /// Whether a request is in flight.
    pub loading: bool,
    /// Message from the last failure.
    pub error: Option<String>,
}

impl<T: Clone + PartialEq> QueryResult<T> {
    fn idle() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
        }
    }

    fn loading() -> Self {
        Self {
            data: None,
            loading: true,
            error: None,
        }
    }
}

impl<T: DeserializeOwned + Clone + PartialEq> QueryResult<T> {
    fn from_entry(entry: &CacheEntry) -> Self {
        match &entry.result {
            Ok(value) => match serde_json::from_value::<T>(value.clone()) {
                Ok(data) => Self {
                    data: Some(data),
                    loading: false,
                    error: None,
                },
                Err(err) => Self {
                    data: None,
                    loading: false,
                    error: Some(err.to_string()),
                },
            },
            Err(message) => Self {
                data: None,
                loading: false,
                error: Some(message.clone()),
            },
        }
    }
}

// Reads the cache for `key` and settles the hook state: a fresh entry is
// served as-is, anything else triggers a deduplicated refetch whose result
// comes back through the subscription.
fn sync_query<T, F, Fut>(key: &QueryKey, fetch: &Rc<F>, state: &UseStateHandle<QueryResult<T>>)
where
    T: Serialize + DeserializeOwned + Clone + PartialEq + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let client = QueryClient::shared();
    match client.entry(key) {
        Some(entry) if !entry.stale => state.set(QueryResult::from_entry(&entry)),
        _ => {
            if client.begin_fetch(key) {
                let key = key.clone();
                let fetch = fetch.clone();
                spawn_local(async move {
                    let result = match fetch().await {
                        Ok(data) => serde_json::to_value(&data).map_err(|err| err.to_string()),
                        Err(err) => Err(err.to_string()),
                    };
                    QueryClient::shared().finish_fetch(&key, result);
                });
            }
            state.set(QueryResult::loading());
        }
    }
}

/// Cache-backed query hook.
///
/// A disabled query issues no request at all. Stale or missing entries
/// trigger a fetch, deduplicated per key; a mutation invalidating the key
/// wakes the hook and it refetches.
#[hook]
pub fn use_app_query<T, F, Fut>(key: QueryKey, enabled: bool, fetch: F) -> QueryResult<T>
where
    T: Serialize + DeserializeOwned + Clone + PartialEq + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let state = use_state(QueryResult::<T>::idle);

    {
        let state = state.clone();
        use_effect_with((key, enabled), move |(key, enabled)| {
            let mut registration = None;
            if *enabled {
                let client = QueryClient::shared();
                let fetch = Rc::new(fetch);
                let watcher = {
                    let key = key.clone();
                    let fetch = fetch.clone();
                    let state = state.clone();
                    Callback::from(move |()| sync_query(&key, &fetch, &state))
                };
                let subscription = client.subscribe(key, watcher);
                sync_query(key, &fetch, &state);
                registration = Some((client, key.clone(), subscription));
            } else {
                state.set(QueryResult::idle());
            }
            move || {
                if let Some((client, key, subscription)) = registration {
                    client.unsubscribe(&key, subscription);
                }
            }
        });
    }

    (*state).clone()
}

/// Handle returned by [`use_app_mutation`].
pub struct UseMutationHandle<I, T: Clone + PartialEq> {
    state: UseStateHandle<QueryResult<T>>,
    run: Rc<dyn Fn(I)>,
}

impl<I, T: Clone + PartialEq> UseMutationHandle<I, T> {
    /// Issue the mutation. Overlapping calls race; the last response to
    /// resolve wins.
    pub fn mutate(&self, input: I) {
        (self.run)(input);
    }

    /// The last successful response body.
    #[must_use]
    pub fn data(&self) -> Option<T> {
        self.state.data.clone()
    }

    /// Whether a request is in flight.
    #[must_use]
    pub fn loading(&self) -> bool {
        self.state.loading
    }

    /// Message from the last failure.
    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.state.error.clone()
    }
}

impl<I, T: Clone + PartialEq> Clone for UseMutationHandle<I, T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            run: self.run.clone(),
        }
    }
}

impl<I, T: Clone + PartialEq> PartialEq for UseMutationHandle<I, T> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state && Rc::ptr_eq(&self.run, &other.run)
    }
}

/// Mutation hook.
///
/// Runs the fetcher and, on success, applies the invalidation table for
/// `mutation` to the shared cache before settling the handle state.
#[hook]
pub fn use_app_mutation<I, T, F, Fut>(mutation: Mutation, run: F) -> UseMutationHandle<I, T>
where
    I: 'static,
    T: Clone + PartialEq + 'static,
    F: Fn(I) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let state = use_state(QueryResult::<T>::idle);

    let runner: Rc<dyn Fn(I)> = {
        let state = state.clone();
        let run = Rc::new(run);
        Rc::new(move |input: I| {
            let state = state.clone();
            let run = run.clone();
            state.set(QueryResult::loading());
            spawn_local(async move {
                match run(input).await {
                    Ok(data) => {
                        QueryClient::shared().apply_invalidations(mutation);
                        state.set(QueryResult {
                            data: Some(data),
                            loading: false,
                            error: None,
                        });
                    }
                    Err(err) => {
                        state.set(QueryResult {
                            data: None,
                            loading: false,
                            error: Some(err.to_string()),
                        });
                    }
                }
            });
        })
    };

    UseMutationHandle {
        state,
        run: runner,
    }
}

/// Pages of the infinite feed plus request status.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeedState {
    pages: Vec<PostPage>,
    loading: bool,
    error: Option<String>,
}

enum FeedAction {
    Started,
    Loaded(PostPage),
    Failed(String),
}

impl Reducible for FeedState {
    type Action = FeedAction;

    fn reduce(self: Rc<Self>, action: FeedAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FeedAction::Started => next.loading = true,
            FeedAction::Loaded(page) => {
                next.pages.push(page);
                next.loading = false;
                next.error = None;
            }
            FeedAction::Failed(message) => {
                next.loading = false;
                next.error = Some(message);
            }
        }
        Rc::new(next)
    }
}

/// Handle returned by [`use_feed_query`].
#[derive(Clone, PartialEq)]
pub struct UseFeedHandle {
    state: UseReducerHandle<FeedState>,
    fetch_next: Callback<()>,
}

impl UseFeedHandle {
    /// Every post fetched so far, in feed order.
    #[must_use]
    pub fn posts(&self) -> Vec<Post> {
        self.state
            .pages
            .iter()
            .flat_map(|page| page.results.clone())
            .collect()
    }

    /// Pages fetched so far.
    #[must_use]
    pub fn pages(&self) -> &[PostPage] {
        &self.state.pages
    }

    /// Whether a page request is in flight.
    #[must_use]
    pub fn loading(&self) -> bool {
        self.state.loading
    }

    /// Message from the last failed page request.
    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.state.error.clone()
    }

    /// Whether the server reported a further page.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        pagination::next_page_param(&self.state.pages).is_some()
    }

    /// Request the next page, if one exists and none is in flight.
    pub fn fetch_next_page(&self) {
        self.fetch_next.emit(());
    }
}

/// Infinite feed hook.
///
/// Pages live in hook state rather than the shared cache, so the cursor
/// starts over on reload and mutations do not invalidate it.
#[hook]
pub fn use_feed_query<F, Fut>(fetch_page: F) -> UseFeedHandle
where
    F: Fn(u32) -> Fut + 'static,
    Fut: Future<Output = Result<PostPage, ApiError>> + 'static,
{
    let state = use_reducer(FeedState::default);
    let fetch_page = Rc::new(fetch_page);

    {
        let dispatcher = state.dispatcher();
        let fetch_page = fetch_page.clone();
        use_effect_with((), move |_| {
            launch_page_fetch(FIRST_PAGE, &dispatcher, &fetch_page);
        });
    }

    let fetch_next = {
        let state = state.clone();
        Callback::from(move |()| {
            if state.loading {
                return;
            }
            if let Some(page) = pagination::next_page_param(&state.pages) {
                launch_page_fetch(page, &state.dispatcher(), &fetch_page);
            }
        })
    };

    UseFeedHandle { state, fetch_next }
}

fn launch_page_fetch<F, Fut>(
    page: u32,
    dispatcher: &UseReducerDispatcher<FeedState>,
    fetch_page: &Rc<F>,
) where
    F: Fn(u32) -> Fut + 'static,
    Fut: Future<Output = Result<PostPage, ApiError>> + 'static,
{
    dispatcher.dispatch(FeedAction::Started);
    let dispatcher = dispatcher.clone();
    let fetch_page = fetch_page.clone();
    spawn_local(async move {
        match fetch_page(page).await {
            Ok(page) => dispatcher.dispatch(FeedAction::Loaded(page)),
            Err(err) => dispatcher.dispatch(FeedAction::Failed(err.to_string())),
        }
    });
}
