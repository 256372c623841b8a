use yew::prelude::*;

use crate::components::{Loading, PostGrid};
use crate::queries::{use_get_posts, use_get_recent_posts};

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let feed = use_get_posts();
    let recent = use_get_recent_posts();

    let on_load_more = {
        let feed = feed.clone();
        Callback::from(move |_: MouseEvent| feed.fetch_next_page())
    };

    html! {
        <div class="flex flex-col items-center gap-8 p-6">
            <div class="w-full max-w-5xl">
                <h2 class="text-2xl font-bold mb-4">{"Recent"}</h2>
                {
                    match &recent.data {
                        Some(posts) => html! { <PostGrid posts={posts.clone()} /> },
                        None if recent.loading => html! { <Loading /> },
                        None => html! {
                            <p class="text-base-content/60">
                                { recent.error.clone().unwrap_or_else(|| "Nothing here yet".to_string()) }
                            </p>
                        },
                    }
                }
            </div>
            <div class="w-full max-w-5xl">
                <h2 class="text-2xl font-bold mb-4">{"Feed"}</h2>
                <PostGrid posts={feed.posts()} />
                if let Some(message) = feed.error() {
                    <div class="alert alert-error mt-4">
                        <span>{message}</span>
                    </div>
                }
                <div class="flex justify-center mt-6">
                    if feed.loading() {
                        <span class="loading loading-dots loading-md"></span>
                    } else {
                        if feed.has_next_page() {
                            <button class="btn btn-outline" onclick={on_load_more}>
                                {"Load more"}
                            </button>
                        }
                    }
                </div>
            </div>
        </div>
    }
}
