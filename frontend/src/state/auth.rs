use crate::{
    api::User,
    repository::{use_repository, FieldLogRepository},
    utils::storage::{BrowserStorage, KeyValueStore},
};
use leptos::*;
use serde::{Deserialize, Serialize};
use std::rc::Rc;

pub const AUTH_STORAGE_KEY: &str = "wassan_auth";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    pub user: Option<User>,
    pub is_authenticated: bool,
}

impl AuthState {
    pub fn signed_in(user: User) -> Self {
        Self {
            user: Some(user.without_password()),
            is_authenticated: true,
        }
    }

    /// The signed-in user, if the state is fully authenticated.
    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref().filter(|_| self.is_authenticated)
    }

    pub fn is_admin(&self) -> bool {
        self.current_user().map(User::is_admin).unwrap_or(false)
    }
}

/// Reads the persisted session. Anything unreadable is dropped and the app
/// starts signed out.
pub fn restore_auth_state(store: &dyn KeyValueStore) -> AuthState {
    let Some(raw) = store.get(AUTH_STORAGE_KEY) else {
        return AuthState::default();
    };
    match serde_json::from_str::<AuthState>(&raw) {
        Ok(state) if state.is_authenticated && state.user.is_none() => {
            log::warn!("Stored session is authenticated without a user; signing out");
            store.remove(AUTH_STORAGE_KEY);
            AuthState::default()
        }
        Ok(state) => state,
        Err(err) => {
            log::warn!("Discarding malformed stored session: {}", err);
            store.remove(AUTH_STORAGE_KEY);
            AuthState::default()
        }
    }
}

pub fn persist_auth_state(store: &dyn KeyValueStore, state: &AuthState) {
    let raw = match serde_json::to_string(state) {
        Ok(raw) => raw,
        Err(err) => {
            log::error!("Failed to encode session: {}", err);
            return;
        }
    };
    if let Err(err) = store.set(AUTH_STORAGE_KEY, &raw) {
        log::error!("Failed to persist session: {}", err);
    }
}

/// The signed-in identity. Handed to views through context; `login` and
/// `logout` are the only ways to change it.
#[derive(Clone)]
pub struct Session {
    state: RwSignal<AuthState>,
    store: Rc<dyn KeyValueStore>,
}

impl Session {
    pub fn restore(store: Rc<dyn KeyValueStore>) -> Self {
        let state = create_rw_signal(restore_auth_state(store.as_ref()));
        Self { state, store }
    }

    pub fn state(&self) -> Signal<AuthState> {
        self.state.into()
    }

    pub fn login(&self, user: User) {
        let next = AuthState::signed_in(user);
        persist_auth_state(self.store.as_ref(), &next);
        self.state.set(next);
    }

    pub fn logout(&self) {
        self.store.remove(AUTH_STORAGE_KEY);
        self.state.set(AuthState::default());
    }
}

#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    provide_context(Session::restore(Rc::new(BrowserStorage)));
    view! { <>{children()}</> }
}

pub fn use_session() -> Session {
    use_context::<Session>().unwrap_or_else(|| {
        log::warn!("No session in context; using an unsaved one");
        let store: Rc<dyn KeyValueStore> = Rc::new(crate::utils::storage::MemoryStorage::new());
        Session::restore(store)
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid username or password";

pub async fn login_request(
    credentials: Credentials,
    repo: &FieldLogRepository,
    session: &Session,
) -> Result<(), String> {
    match repo.login(&credentials.username, &credentials.password).await {
        Some(user) => {
            log::info!("Signed in as {} ({})", user.username, user.role);
            session.login(user);
            Ok(())
        }
        None => Err(INVALID_CREDENTIALS_MESSAGE.to_string()),
    }
}

pub fn use_login_action() -> Action<Credentials, Result<(), String>> {
    let session = use_session();
    let repo = use_repository();

    create_action(move |credentials: &Credentials| {
        let credentials = credentials.clone();
        let repo = repo.clone();
        let session = session.clone();
        async move { login_request(credentials, &repo, &session).await }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Role;
    use crate::utils::storage::MemoryStorage;
    use leptos::create_runtime;

    fn with_runtime<T>(test: impl FnOnce() -> T) -> T {
        let runtime = create_runtime();
        let result = test();
        runtime.dispose();
        result
    }

    #[test]
    fn login_then_logout_round_trips_through_storage() {
        with_runtime(|| {
            let store = Rc::new(MemoryStorage::new());
            let session = Session::restore(store.clone());
            assert_eq!(session.state().get_untracked(), AuthState::default());

            let mut user = User::new("ravi", Role::Crp);
            user.password = Some("secret".into());
            session.login(user);

            let state = session.state().get_untracked();
            assert!(state.is_authenticated);
            assert_eq!(state.user.as_ref().map(|u| u.username.as_str()), Some("ravi"));

            let raw = store.get(AUTH_STORAGE_KEY).unwrap();
            assert!(!raw.contains("secret"));
            assert!(raw.contains("\"isAuthenticated\":true"));

            let reloaded = Session::restore(store.clone());
            assert_eq!(reloaded.state().get_untracked(), state);

            session.logout();
            let state = session.state().get_untracked();
            assert!(!state.is_authenticated);
            assert!(state.user.is_none());
            assert!(store.get(AUTH_STORAGE_KEY).is_none());
        });
    }

    #[test]
    fn malformed_stored_state_is_discarded() {
        let store = MemoryStorage::new();
        store.set(AUTH_STORAGE_KEY, "{\"user\": 42").unwrap();
        assert_eq!(restore_auth_state(&store), AuthState::default());
        assert!(store.get(AUTH_STORAGE_KEY).is_none());

        store
            .set(AUTH_STORAGE_KEY, r#"{"user":null,"isAuthenticated":true}"#)
            .unwrap();
        assert_eq!(restore_auth_state(&store), AuthState::default());
    }

    #[test]
    fn restores_state_written_in_wire_shape() {
        let store = MemoryStorage::new();
        store
            .set(
                AUTH_STORAGE_KEY,
                r#"{"user":{"username":"admin","role":"ADMIN"},"isAuthenticated":true}"#,
            )
            .unwrap();
        let state = restore_auth_state(&store);
        assert!(state.is_admin());
    }

    #[test]
    fn use_session_without_context_starts_signed_out() {
        with_runtime(|| {
            let session = use_session();
            assert!(!session.state().get_untracked().is_authenticated);
        });
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::{ApiClient, Role};
    use crate::utils::storage::MemoryStorage;

    #[tokio::test]
    async fn login_request_updates_session_only_on_match() {
        let runtime = create_runtime();
        let store = Rc::new(MemoryStorage::new());
        let session = Session::restore(store.clone());
        let repo = FieldLogRepository::new_with_client(Rc::new(ApiClient::new_mock(store)));

        let denied = login_request(
            Credentials {
                username: "admin".into(),
                password: "wrong".into(),
            },
            &repo,
            &session,
        )
        .await;
        assert_eq!(denied, Err(INVALID_CREDENTIALS_MESSAGE.to_string()));
        assert!(!session.state().get_untracked().is_authenticated);

        login_request(
            Credentials {
                username: "admin".into(),
                password: "admin".into(),
            },
            &repo,
            &session,
        )
        .await
        .unwrap();
        let state = session.state().get_untracked();
        assert_eq!(state.current_user().map(|u| u.role), Some(Role::Admin));
        runtime.dispose();
    }
}
