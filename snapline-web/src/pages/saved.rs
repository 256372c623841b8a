use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yewdux::prelude::use_selector;

use crate::auth::SessionState;
use crate::components::{Loading, PostGrid};
use crate::queries::use_saved_posts;

#[function_component(SavedPage)]
pub fn saved_page() -> Html {
    let saved = use_saved_posts();
    let user = use_selector(|state: &SessionState| state.user_info.clone());

    html! {
        <div class="flex flex-col items-center gap-6 p-6">
            <div class="flex gap-2 w-full max-w-5xl items-center">
                <Icon icon_id={IconId::HeroiconsSolidBookmark} width={"36"} height={"36"} />
                <h2 class="text-2xl font-bold text-left w-full">{"Saved Posts"}</h2>
            </div>
            {
                if user.is_none() {
                    html! { <Loading /> }
                } else {
                    match &saved.data {
                        Some(posts) if posts.is_empty() => html! {
                            <p class="text-base-content/60">{"No available posts"}</p>
                        },
                        Some(posts) => html! {
                            <PostGrid posts={posts.clone()} show_stats={false} />
                        },
                        None => html! {
                            <PostGrid posts={Vec::new()} show_stats={false} />
                        },
                    }
                }
            }
        </div>
    }
}
