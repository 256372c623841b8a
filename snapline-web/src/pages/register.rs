use shared::models::RegisterRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yew_router::prelude::Link;
use yewdux::prelude::use_store;

use crate::auth::{self, SessionState};
use crate::routes::MainRoute;

fn text_setter(handle: UseStateHandle<String>) -> Callback<InputEvent> {
    Callback::from(move |event: InputEvent| {
        if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
            handle.set(input.value());
        }
    })
}

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let name = use_state(String::new);
    let username = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let confirm_password = use_state(String::new);
    let (session, dispatch) = use_store::<SessionState>();
    let navigator = use_navigator();

    {
        let navigator = navigator.clone();
        use_effect_with(session.user_info.is_some(), move |signed_in| {
            if *signed_in {
                if let Some(nav) = navigator {
                    nav.push(&MainRoute::Home);
                }
            }
        });
    }

    let onsubmit = {
        let name = name.clone();
        let username = username.clone();
        let email = email.clone();
        let password = password.clone();
        let confirm_password = confirm_password.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            // Both password fields go to the backend as typed; matching
            // them is the serializer's job.
            let request = RegisterRequest {
                name: (*name).clone(),
                username: (*username).clone(),
                email: (*email).clone(),
                password: (*password).clone(),
                confirm_password: (*confirm_password).clone(),
            };
            let dispatch = dispatch.clone();
            spawn_local(async move {
                auth::register(dispatch, request).await;
            });
        })
    };

    let is_busy = session.loading;
    let disable_submit = (*username).is_empty()
        || (*email).is_empty()
        || (*password).is_empty()
        || (*confirm_password).is_empty()
        || is_busy;

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" onsubmit={onsubmit}>
                    <h2 class="card-title text-2xl">{"Create account"}</h2>
                    if let Some(message) = &session.error {
                        <div class="alert alert-error whitespace-pre-line">
                            <span>{message.clone()}</span>
                        </div>
                    }
                    <div class="form-control">
                        <label class="label" for="name">
                            <span class="label-text">{"Name"}</span>
                        </label>
                        <input
                            id="name"
                            class="input input-bordered"
                            type="text"
                            value={(*name).clone()}
                            oninput={text_setter(name.clone())}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="username">
                            <span class="label-text">{"Username"}</span>
                        </label>
                        <input
                            id="username"
                            class="input input-bordered"
                            type="text"
                            required=true
                            value={(*username).clone()}
                            oninput={text_setter(username.clone())}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="email">
                            <span class="label-text">{"Email"}</span>
                        </label>
                        <input
                            id="email"
                            class="input input-bordered"
                            type="email"
                            required=true
                            value={(*email).clone()}
                            oninput={text_setter(email.clone())}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="password">
                            <span class="label-text">{"Password"}</span>
                        </label>
                        <input
                            id="password"
                            class="input input-bordered"
                            type="password"
                            required=true
                            value={(*password).clone()}
                            oninput={text_setter(password.clone())}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="confirm-password">
                            <span class="label-text">{"Confirm password"}</span>
                        </label>
                        <input
                            id="confirm-password"
                            class="input input-bordered"
                            type="password"
                            required=true
                            value={(*confirm_password).clone()}
                            oninput={text_setter(confirm_password.clone())}
                        />
                    </div>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                            {if is_busy { "Creating account..." } else { "Register" }}
                        </button>
                    </div>
                    <p class="text-sm text-center mt-2">
                        {"Already registered? "}
                        <Link<MainRoute> to={MainRoute::Login} classes="link link-primary">
                            {"Sign in"}
                        </Link<MainRoute>>
                    </p>
                </form>
            </div>
        </div>
    }
}
