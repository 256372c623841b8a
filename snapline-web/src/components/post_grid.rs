use shared::models::Post;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PostGridProps {
    pub posts: Vec<Post>,
    #[prop_or(true)]
    pub show_stats: bool,
}

#[function_component(PostGrid)]
pub fn post_grid(props: &PostGridProps) -> Html {
    html! {
        <ul class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6 w-full max-w-5xl">
            { for props.posts.iter().map(|post| render_post(post, props.show_stats)) }
        </ul>
    }
}

fn render_post(post: &Post, show_stats: bool) -> Html {
    let image = post.text_field("image").unwrap_or_default().to_string();
    let caption = post.text_field("caption").unwrap_or_default().to_string();
    let likes = post
        .fields
        .get("likes_count")
        .and_then(serde_json::Value::as_i64)
        .unwrap_or(0);

    html! {
        <li key={post.id} class="relative rounded-xl overflow-hidden bg-base-200">
            <img src={image} alt={caption.clone()} class="object-cover w-full h-64" />
            if show_stats {
                <div class="absolute bottom-0 w-full p-2 bg-base-300/70 flex justify-between">
                    <span class="text-sm truncate">{caption}</span>
                    <span class="text-sm">{format!("{likes} likes")}</span>
                </div>
            }
        </li>
    }
}
