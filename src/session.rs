use std::rc::Rc;

use yew::prelude::*;

use crate::models::User;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// Who is logged in. `loading` is true only while the initial restore from
/// localStorage is pending and flips to false exactly once per page load.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub user: Option<User>,
    pub token: Option<String>,
    pub loading: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            user: None,
            token: None,
            loading: true,
        }
    }
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().map_or(false, |t| !t.is_empty())
    }
}

pub enum SessionAction {
    Restored {
        user: Option<User>,
        token: Option<String>,
    },
    Login {
        user: User,
        token: String,
    },
    Logout,
}

impl Reducible for Session {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: SessionAction) -> Rc<Self> {
        match action {
            SessionAction::Restored { user, token } => Rc::new(Session {
                user,
                token,
                loading: false,
            }),
            SessionAction::Login { user, token } => Rc::new(Session {
                user: Some(user),
                token: Some(token),
                loading: false,
            }),
            SessionAction::Logout => Rc::new(Session {
                user: None,
                token: None,
                loading: false,
            }),
        }
    }
}

/// Context handle exposing the login/logout mutations. State lives in the
/// reducer; this wrapper keeps localStorage in step with every transition.
#[derive(Clone, PartialEq)]
pub struct SessionHandle {
    inner: UseReducerHandle<Session>,
}

impl SessionHandle {
    pub fn loading(&self) -> bool {
        self.inner.loading
    }

    pub fn token(&self) -> Option<String> {
        self.inner.token.clone()
    }

    pub fn user(&self) -> Option<User> {
        self.inner.user.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.is_authenticated()
    }

    pub fn login(&self, user: User, token: String) {
        storage::persist(&user, &token);
        self.inner.dispatch(SessionAction::Login { user, token });
    }

    pub fn logout(&self) {
        storage::clear();
        self.inner.dispatch(SessionAction::Logout);
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let session = use_reducer(Session::default);

    {
        let session = session.clone();
        use_effect_with_deps(
            move |_| {
                let (token, user) = storage::restore();
                session.dispatch(SessionAction::Restored { user, token });
                || ()
            },
            (),
        );
    }

    let handle = SessionHandle { inner: session };

    html! {
        <ContextProvider<SessionHandle> context={handle}>
            { for props.children.iter() }
        </ContextProvider<SessionHandle>>
    }
}

/// A stored user value must be real JSON; some earlier builds wrote the
/// literal string "undefined" into the key.
pub(crate) fn parse_stored_user(raw: &str) -> Option<User> {
    if raw == "undefined" {
        return None;
    }
    serde_json::from_str(raw).ok()
}

mod storage {
    use super::{parse_stored_user, TOKEN_KEY, USER_KEY};
    use crate::models::User;

    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    /// One-shot read at startup. A corrupt user entry discards the whole
    /// stored session instead of failing the load.
    pub fn restore() -> (Option<String>, Option<User>) {
        let Some(storage) = local_storage() else {
            return (None, None);
        };
        let token = storage
            .get_item(TOKEN_KEY)
            .ok()
            .flatten()
            .filter(|t| !t.is_empty());
        match storage.get_item(USER_KEY).ok().flatten() {
            Some(raw) => match parse_stored_user(&raw) {
                Some(user) => (token, Some(user)),
                None => {
                    log::warn!("discarding corrupt stored session data");
                    let _ = storage.remove_item(USER_KEY);
                    let _ = storage.remove_item(TOKEN_KEY);
                    (None, None)
                }
            },
            None => (token, None),
        }
    }

    pub fn persist(user: &User, token: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
            if let Ok(raw) = serde_json::to_string(user) {
                let _ = storage.set_item(USER_KEY, &raw);
            }
        }
    }

    pub fn clear() {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(USER_KEY);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;

    fn user(id: i64, name: &str) -> User {
        User {
            id,
            name: name.to_string(),
            email: None,
        }
    }

    #[test]
    fn starts_loading_and_unauthenticated() {
        let session = Session::default();
        assert!(session.loading);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn restore_completes_loading_even_when_empty() {
        let session = Rc::new(Session::default()).reduce(SessionAction::Restored {
            user: None,
            token: None,
        });
        assert!(!session.loading);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn login_sets_user_and_token() {
        let session = Rc::new(Session::default()).reduce(SessionAction::Login {
            user: user(1, "A"),
            token: "T1".to_string(),
        });
        assert!(session.is_authenticated());
        assert_eq!(session.token.as_deref(), Some("T1"));
        assert_eq!(session.user.as_ref().map(|u| u.name.as_str()), Some("A"));
    }

    #[test]
    fn logout_clears_both_fields() {
        let session = Rc::new(Session::default()).reduce(SessionAction::Login {
            user: user(1, "A"),
            token: "T1".to_string(),
        });
        let session = session.reduce(SessionAction::Logout);
        assert!(!session.is_authenticated());
        assert_eq!(session.token, None);
        assert_eq!(session.user, None);
    }

    #[test]
    fn last_write_wins_when_transitions_race() {
        let session = Rc::new(Session::default())
            .reduce(SessionAction::Login {
                user: user(1, "A"),
                token: "T1".to_string(),
            })
            .reduce(SessionAction::Login {
                user: user(2, "B"),
                token: "T2".to_string(),
            });
        assert_eq!(session.token.as_deref(), Some("T2"));
        assert_eq!(session.user.as_ref().map(|u| u.id), Some(2));
    }

    #[test]
    fn empty_token_does_not_authenticate() {
        let session = Rc::new(Session::default()).reduce(SessionAction::Restored {
            user: None,
            token: Some(String::new()),
        });
        assert!(!session.is_authenticated());
    }

    #[test]
    fn literal_undefined_is_treated_as_absent_user() {
        assert_eq!(parse_stored_user("undefined"), None);
    }

    #[test]
    fn malformed_json_is_treated_as_absent_user() {
        assert_eq!(parse_stored_user("{not json"), None);
    }

    #[test]
    fn stored_user_round_trips() {
        let original = user(1, "A");
        let raw = serde_json::to_string(&original).unwrap();
        assert_eq!(parse_stored_user(&raw), Some(original));
    }
}
