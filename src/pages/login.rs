use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::{use_api, use_session};
use crate::services::auth;
use crate::Route;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let session = use_session();
    let navigator = use_navigator();
    let api = use_api();

    let email = use_state(|| "".to_string());
    let password = use_state(|| "".to_string());
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);

    let on_submit = {
        let session = session.clone();
        let navigator = navigator.clone();
        let api = api.clone();
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let loading = loading.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let email_val = (*email).clone();
            let password_val = (*password).clone();

            if email_val.is_empty() || password_val.is_empty() {
                error.set(Some("Email and password are required".to_string()));
                return;
            }

            loading.set(true);
            error.set(None);

            let session = session.clone();
            let navigator = navigator.clone();
            let api = api.clone();
            let error = error.clone();
            let loading = loading.clone();
            spawn_local(async move {
                match auth::login(&api, &email_val, &password_val).await {
                    Ok(resp) => {
                        session.login(resp.user, resp.token);
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Dashboard);
                        }
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                loading.set(false);
            });
        })
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-background p-4">
            <div class="w-full max-w-md bg-card border border-border rounded-2xl shadow-lg p-8">
                <div class="text-center mb-6">
                    <h1 class="text-2xl font-bold text-foreground">{"Login to FinTrack"}</h1>
                    <p class="text-sm text-muted-foreground mt-2">{"Sign in to continue."}</p>
                </div>

                if let Some(msg) = &*error {
                    <div class="text-sm text-red-500 mb-4">{ msg.clone() }</div>
                }

                <form class="space-y-4" onsubmit={on_submit}>
                    <div class="space-y-1">
                        <label class="text-sm font-medium text-foreground">{"Email"}</label>
                        <input
                            type="email"
                            class="w-full px-4 py-2 bg-input border border-input rounded-lg text-foreground focus:outline-none focus:ring-2 focus:ring-primary"
                            value={(*email).clone()}
                            oninput={{
                                let email = email.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                    email.set(input.value());
                                })
                            }}
                        />
                    </div>
                    <div class="space-y-1">
                        <label class="text-sm font-medium text-foreground">{"Password"}</label>
                        <input
                            type="password"
                            class="w-full px-4 py-2 bg-input border border-input rounded-lg text-foreground focus:outline-none focus:ring-2 focus:ring-primary"
                            value={(*password).clone()}
                            oninput={{
                                let password = password.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                    password.set(input.value());
                                })
                            }}
                        />
                    </div>

                    <button
                        type="submit"
                        class="w-full bg-primary text-primary-foreground py-2 rounded-lg font-semibold hover:opacity-90 transition-opacity"
                        disabled={*loading}
                    >
                        { if *loading { "Logging in..." } else { "Login" } }
                    </button>
                </form>

                <div class="mt-6 text-center text-sm text-muted-foreground">
                    {"Don't have an account?"}
                    <Link<Route> to={Route::Register} classes="ml-2 text-primary font-semibold hover:underline">
                        {"Register"}
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}
