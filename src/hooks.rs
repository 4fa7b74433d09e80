use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::ApiClient;
use crate::config;
use crate::session::SessionHandle;
use crate::Route;

#[hook]
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>().expect("SessionProvider missing from component tree")
}

/// Client bound to the current token, with the 401/403 signal wired to a
/// full logout plus a jump to the login screen. Built per render so the
/// token is always the session's current one.
#[hook]
pub fn use_api() -> ApiClient {
    let session = use_session();
    let navigator = use_navigator();

    let on_unauthorized = {
        let session = session.clone();
        Callback::from(move |_| {
            session.logout();
            if let Some(navigator) = navigator.clone() {
                navigator.push(&Route::Login);
            }
        })
    };

    ApiClient::new(config::api_base_url(), session.token(), on_unauthorized)
}
