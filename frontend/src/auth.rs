use gloo_console::{error, info};
use logiconnect_lib::{
    Error,
    session::{Role, Session, SessionStore},
};
use yew::prelude::*;
use yew_router::hooks::use_navigator;

use crate::{
    Route,
    storage::{BrowserStorage, session_store},
};

/// Session shared with every page: who is logged in, plus login and logout.
#[derive(Clone, PartialEq, Default)]
pub struct AuthContext {
    pub session: Option<Session>,
    on_login: Callback<Session>,
    on_logout: Callback<()>,
}

impl AuthContext {
    pub fn store(&self) -> SessionStore<BrowserStorage> {
        session_store()
    }

    /// The session has already been persisted; this publishes it and moves
    /// on to the role's landing page.
    pub fn login(&self, session: Session) {
        self.on_login.emit(session);
    }

    pub fn logout(&self) {
        self.on_logout.emit(());
    }

    /// Logs out when the backend refused the token. Returns whether it did.
    pub fn reject(&self, err: &Error) -> bool {
        if self.store().reject_if_unauthorized(err) {
            self.on_logout.emit(());
            return true;
        }
        false
    }
}

impl Route {
    pub fn landing(role: Role) -> Self {
        match role {
            Role::User => Route::Profile,
            Role::Driver => Route::DriverProfile,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub children: Children,
}

#[function_component]
pub fn AuthProvider(props: &AuthProviderProps) -> Html {
    let session = use_state(|| session_store().get_session());
    let navigator = use_navigator();

    let on_login = {
        let session = session.clone();
        let navigator = navigator.clone();
        Callback::from(move |new_session: Session| {
            info!(format!("Logged in as {} ({})", new_session.user_id, new_session.role.as_str()));
            let landing = Route::landing(new_session.role);
            session.set(Some(new_session));
            if let Some(navigator) = &navigator {
                navigator.push(&landing);
            }
        })
    };

    let on_logout = {
        let session = session.clone();
        Callback::from(move |()| {
            if let Err(err) = session_store().logout() {
                error!(format!("Failed to clear session: {err}"));
            }
            session.set(None);
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Login);
            }
        })
    };

    let context = AuthContext {
        session: (*session).clone(),
        on_login,
        on_logout,
    };

    html! {
        <ContextProvider<AuthContext> context={context}>
            { props.children.clone() }
        </ContextProvider<AuthContext>>
    }
}

#[hook]
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_default()
}
