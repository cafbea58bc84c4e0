//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns the one `SessionStore` for the page lifetime. The store pushes
//! every state change into a signal, and everything else reads that signal
//! through `AuthContext`.

use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::route_guard::{GuestOnly, ProtectedRoute, RootRedirect};
use crate::config::ServiceConfig;
use crate::net::credentials::CredentialService;
use crate::net::supabase::SupabaseAuth;
use crate::pages::{dashboard::DashboardPage, sign_in::SignInPage, sign_up::SignUpPage};
use crate::state::session::SessionState;
use crate::state::session_store::SessionStore;

/// Shared auth handles provided to every route.
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// Current session state, updated by the store.
    pub session: ReadSignal<SessionState>,
    /// Message from the last failed initial fetch.
    pub init_error: RwSignal<Option<String>>,
    pub store: StoredValue<SessionStore, LocalStorage>,
    pub config: StoredValue<ServiceConfig>,
}

impl AuthContext {
    /// Access token of the current session, if any.
    #[must_use]
    pub fn access_token(&self) -> Option<String> {
        self.session.with_untracked(|s| s.session().map(|s| s.access_token.clone()))
    }

    /// Fetch the session again after a failed or timed-out start.
    pub fn initialize(&self) {
        let Some(store) = self.store.try_get_value() else {
            return;
        };
        let timeout = self.config.with_value(|c| c.session_timeout);
        let init_error = self.init_error;
        init_error.set(None);
        spawn_session_init(store, timeout, move |store| {
            leptos::logging::log!("session resolved: {}", store.snapshot().label());
            let _ = init_error.try_set(store.init_error());
        });
    }
}

/// Run the initial session fetch on the local executor, bounded by `timeout`.
///
/// `done` runs after the store has applied the result.
pub fn spawn_session_init(store: SessionStore, timeout: Duration, done: impl FnOnce(&SessionStore) + 'static) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        store.initialize_within(gloo_timers::future::sleep(timeout)).await;
        done(&store);
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (store, timeout, done);
    }
}

/// Root application component.
///
/// Builds the session store, provides `AuthContext`, and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ServiceConfig::load();
    let (session, set_session) = signal(SessionState::Unknown);

    let service: Rc<dyn CredentialService> = Rc::new(SupabaseAuth::new(config.clone()));
    let store = SessionStore::new(service, move |state: &SessionState| {
        let _ = set_session.try_set(state.clone());
    });
    // Listen before fetching so no change is missed while the fetch runs.
    store.subscribe_to_changes();

    let auth = AuthContext {
        session,
        init_error: RwSignal::new(None),
        store: StoredValue::new_local(store),
        config: StoredValue::new(config),
    };
    auth.initialize();
    provide_context(auth);

    view! {
        <Title text="Sales Team Dashboard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=RootRedirect/>
                <Route
                    path=StaticSegment("signin")
                    view=|| view! { <GuestOnly><SignInPage/></GuestOnly> }
                />
                <Route
                    path=StaticSegment("signup")
                    view=|| view! { <GuestOnly><SignUpPage/></GuestOnly> }
                />
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <ProtectedRoute><DashboardPage/></ProtectedRoute> }
                />
            </Routes>
        </Router>
    }
}
