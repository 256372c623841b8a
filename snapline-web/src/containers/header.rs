use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::use_store;

use crate::auth::{self, SessionState};
use crate::queries::use_sign_out_account;
use crate::routes::MainRoute;

#[function_component(Header)]
pub fn header() -> Html {
    let (session, dispatch) = use_store::<SessionState>();
    let sign_out = use_sign_out_account();

    let on_sign_out = {
        let dispatch = dispatch.clone();
        let sign_out = sign_out.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            // The request path clears the persisted blob; the reset only
            // restores in-memory state.
            sign_out.mutate(());
            auth::reset_user_info(&dispatch);
        })
    };

    html! {
        <nav class="navbar justify-between bg-base-300">
            <a class="btn btn-ghost text-lg">
                <Link<MainRoute> to={MainRoute::Home} classes="text-lg">
                    {"Snapline"}
                </Link<MainRoute>>
            </a>
            <ul class="menu menu-horizontal gap-2">
                <li>
                    <Link<MainRoute> to={MainRoute::Home}>{"Home"}</Link<MainRoute>>
                </li>
                <li>
                    <Link<MainRoute> to={MainRoute::Saved}>{"Saved"}</Link<MainRoute>>
                </li>
            </ul>
            <div class="flex items-center gap-2">
                {
                    session.user_info.as_ref().map_or_else(
                        || html! {
                            <Link<MainRoute> to={MainRoute::Login} classes="btn btn-primary btn-sm">
                                {"Sign in"}
                            </Link<MainRoute>>
                        },
                        |user| html! {
                            <>
                                <span class="text-sm text-base-content/80 mr-2">{ &user.username }</span>
                                <button class="btn btn-ghost btn-sm" onclick={on_sign_out.clone()}>
                                    {"Sign out"}
                                </button>
                            </>
                        },
                    )
                }
            </div>
        </nav>
    }
}
