//! Session context and guard for the admin views.
//!
//! The session is loaded from storage exactly once, when [`SessionProvider`]
//! mounts, and provided as a context signal; the catalog client receives it
//! by value rather than reading storage per request. Presence of a token is
//! the only client-side authorization check — the service remains the
//! authority and answers 401 when the token is stale.

use dioxus::prelude::*;

use api::{CatalogClient, Session, UserInfo};

/// Header-level knowledge about the logged-in user.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<UserInfo>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

/// The session context signal.
pub fn use_session() -> Signal<Session> {
    use_context::<Signal<Session>>()
}

/// The current user context signal. Updates on login and logout.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component owning the session and the current-user state.
/// Wrap the router with this component.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let session = use_signal(Session::load);
    let mut auth_state = use_signal(AuthState::default);

    // Fetch the current user whenever the session changes (mount, login).
    // A failure only leaves the header anonymous; the views guard themselves.
    let _ = use_resource(move || async move {
        if session().is_authenticated() {
            let client = CatalogClient::new(session());
            match client.current_user().await {
                Ok(user) => auth_state.set(AuthState {
                    user: Some(user),
                    loading: false,
                }),
                Err(e) => {
                    tracing::error!("Failed to load user: {e}");
                    auth_state.set(AuthState {
                        user: None,
                        loading: false,
                    });
                }
            }
        } else {
            auth_state.set(AuthState {
                user: None,
                loading: false,
            });
        }
    });

    use_context_provider(|| session);
    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Gate for protected content: without a stored credential nothing renders
/// and the browser is sent to the login view.
#[component]
pub fn RequireAuth(children: Element) -> Element {
    let session = use_session();

    if !session().is_authenticated() {
        redirect_to_login();
        return rsx! {};
    }

    rsx! {
        {children}
    }
}

/// Button that clears the session and returns to the login view.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut session = use_session();
    let mut auth_state = use_auth();

    let onclick = move |_| {
        let mut current = session();
        current.clear();
        session.set(current);
        auth_state.set(AuthState {
            user: None,
            loading: false,
        });
        redirect_to_login();
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}

/// Send the browser to the login view. Used by the guard, by logout, and by
/// views whose request came back unauthenticated (missing token or 401).
pub fn redirect_to_login() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/login");
        }
    }
}
