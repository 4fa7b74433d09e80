use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_session;
use crate::Route;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardState {
    Loading,
    Authorized,
    Unauthorized,
}

/// Pure gate function: re-evaluated on every render, no stored state.
pub(crate) fn classify(loading: bool, authenticated: bool) -> GuardState {
    if loading {
        GuardState::Loading
    } else if authenticated {
        GuardState::Authorized
    } else {
        GuardState::Unauthorized
    }
}

#[derive(Properties, PartialEq)]
pub struct RequireAuthProps {
    pub children: Children,
}

/// Blocks protected pages until the stored session has been read, then
/// either renders them or bounces the visitor to the login screen.
#[function_component(RequireAuth)]
pub fn require_auth(props: &RequireAuthProps) -> Html {
    let session = use_session();

    match classify(session.loading(), session.is_authenticated()) {
        GuardState::Loading => html! {
            <div class="min-h-screen flex items-center justify-center bg-background">
                <div class="animate-spin rounded-full h-12 w-12 border-t-2 border-b-2 border-primary"></div>
            </div>
        },
        GuardState::Unauthorized => html! { <Redirect<Route> to={Route::Login} /> },
        GuardState::Authorized => html! { <>{ for props.children.iter() }</> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_wins_regardless_of_token() {
        assert_eq!(classify(true, true), GuardState::Loading);
        assert_eq!(classify(true, false), GuardState::Loading);
    }

    #[test]
    fn resolves_by_token_presence_once_loaded() {
        assert_eq!(classify(false, true), GuardState::Authorized);
        assert_eq!(classify(false, false), GuardState::Unauthorized);
    }
}
