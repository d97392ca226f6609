use crate::{
    api::{ApiClient, LoginRequest},
    config::SessionPolicy,
    error::WorkflowError,
    utils::storage as storage_utils,
};
use gloo_timers::callback::{Interval, Timeout};
use leptos::*;
use std::rc::Rc;

/// Time source for liveness checks. Every comparison goes through this seam
/// so tests can drive expiry with a fake clock.
pub trait Clock {
    fn now_ms(&self) -> i64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// The durable session unit. Credential, subject and issue time are written
/// and removed together; a partial record is never observable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedSession {
    pub credential: String,
    pub subject: String,
    pub issued_at_ms: i64,
}

pub trait SessionBackend {
    fn load(&self) -> Option<PersistedSession>;
    fn save(&self, session: &PersistedSession);
    fn clear(&self);
}

const CREDENTIAL_KEY: &str = "access_token";
const SUBJECT_KEY: &str = "username";
const ISSUED_AT_KEY: &str = "login_time";

/// localStorage persistence. Missing or malformed keys load as `None`
/// rather than an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl SessionBackend for BrowserStorage {
    fn load(&self) -> Option<PersistedSession> {
        let storage = storage_utils::local_storage().ok()?;
        let credential = storage.get_item(CREDENTIAL_KEY).ok()??;
        let subject = storage.get_item(SUBJECT_KEY).ok()??;
        let issued_at_ms = storage
            .get_item(ISSUED_AT_KEY)
            .ok()??
            .parse::<i64>()
            .ok()?;
        if credential.is_empty() {
            return None;
        }
        Some(PersistedSession {
            credential,
            subject,
            issued_at_ms,
        })
    }

    fn save(&self, session: &PersistedSession) {
        let storage = match storage_utils::local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::warn!("Session not persisted: {}", err);
                return;
            }
        };
        let _ = storage.set_item(CREDENTIAL_KEY, &session.credential);
        let _ = storage.set_item(SUBJECT_KEY, &session.subject);
        let _ = storage.set_item(ISSUED_AT_KEY, &session.issued_at_ms.to_string());
    }

    fn clear(&self) {
        if let Ok(storage) = storage_utils::local_storage() {
            let _ = storage.remove_item(CREDENTIAL_KEY);
            let _ = storage.remove_item(SUBJECT_KEY);
            let _ = storage.remove_item(ISSUED_AT_KEY);
        }
    }
}

/// Owns the session lifecycle. Clones share the backend and clock, so one
/// store injected through context serves the whole app.
#[derive(Clone)]
pub struct SessionStore {
    backend: Rc<dyn SessionBackend>,
    clock: Rc<dyn Clock>,
    ttl_ms: i64,
}

impl SessionStore {
    pub fn browser(policy: SessionPolicy) -> Self {
        Self::with_parts(Rc::new(BrowserStorage), Rc::new(SystemClock), policy.ttl_ms)
    }

    pub fn with_parts(
        backend: Rc<dyn SessionBackend>,
        clock: Rc<dyn Clock>,
        ttl_ms: i64,
    ) -> Self {
        Self {
            backend,
            clock,
            ttl_ms,
        }
    }

    /// Persists the whole unit with `issued_at = now`. Only invoked after a
    /// successful authentication response; replaces any prior session.
    pub fn begin_session(&self, credential: &str, subject: &str) {
        let session = PersistedSession {
            credential: credential.to_string(),
            subject: subject.to_string(),
            issued_at_ms: self.clock.now_ms(),
        };
        self.backend.save(&session);
    }

    /// Removes the whole unit. Idempotent.
    pub fn end_session(&self) {
        self.backend.clear();
    }

    /// Presence plus age, nothing else: synchronous, no network round-trip.
    pub fn is_live(&self) -> bool {
        match self.backend.load() {
            Some(session) => self.clock.now_ms() - session.issued_at_ms < self.ttl_ms,
            None => false,
        }
    }

    pub fn credential(&self) -> Option<String> {
        self.backend.load().map(|session| session.credential)
    }

    pub fn subject(&self) -> Option<String> {
        self.backend.load().map(|session| session.subject)
    }

    pub fn has_credential(&self) -> bool {
        self.backend.load().is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuardStatus {
    /// Not checked yet; renders as loading, never as anonymous.
    #[default]
    Unknown,
    Authenticated,
    Anonymous,
}

/// Reactive mirror of the store for rendering. The store stays the source
/// of truth; this signal only exists so views re-render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub subject: Option<String>,
    pub status: GuardStatus,
}

impl SessionState {
    fn hydrate(store: &SessionStore) -> Self {
        Self {
            subject: store.subject(),
            status: GuardStatus::Unknown,
        }
    }
}

pub type SessionContext = (ReadSignal<SessionState>, WriteSignal<SessionState>);

/// Shared slot for the one-shot session-expired notification.
#[derive(Clone, Copy)]
pub struct ExpiryNotice(pub RwSignal<Option<WorkflowError>>);

#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let store = use_context::<SessionStore>()
        .unwrap_or_else(|| SessionStore::browser(SessionPolicy::default()));
    provide_context(store.clone());
    provide_context(ApiClient::with_session(store.clone()));
    let (state, set_state) = create_signal(SessionState::hydrate(&store));
    provide_context::<SessionContext>((state, set_state));
    provide_context(ExpiryNotice(create_rw_signal(None)));
    view! { <>{children()}</> }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| create_signal(SessionState::default()))
}

pub fn use_session_store() -> SessionStore {
    use_context::<SessionStore>().unwrap_or_else(|| SessionStore::browser(SessionPolicy::default()))
}

pub fn use_expiry_notice() -> ExpiryNotice {
    use_context::<ExpiryNotice>().unwrap_or_else(|| ExpiryNotice(create_rw_signal(None)))
}

/// Outcome of one guard evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LivenessCheck {
    pub next: GuardStatus,
    pub expired: bool,
}

/// Decision core for a guard tick. `expired` distinguishes "was logged in
/// and timed out" from "was never logged in"; only the former notifies.
pub fn evaluate_liveness(had_credential: bool, live: bool) -> LivenessCheck {
    if live {
        LivenessCheck {
            next: GuardStatus::Authenticated,
            expired: false,
        }
    } else {
        LivenessCheck {
            next: GuardStatus::Anonymous,
            expired: had_credential,
        }
    }
}

pub fn is_login_view(pathname: Option<&str>) -> bool {
    matches!(pathname, Some("/login"))
}

/// One synchronous guard tick. Skipped wholesale on the login view. Expiry
/// ends the session, which clears the credential the `expired` gate tests,
/// so the notification fires exactly once per expiry.
pub fn run_liveness_check(
    store: &SessionStore,
    set_state: WriteSignal<SessionState>,
    notice: ExpiryNotice,
    on_login_view: bool,
) {
    if on_login_view {
        return;
    }
    let outcome = evaluate_liveness(store.has_credential(), store.is_live());
    if outcome.next == GuardStatus::Anonymous {
        store.end_session();
    }
    let subject = store.subject();
    set_state.update(|state| {
        state.status = outcome.next;
        state.subject = subject;
    });
    if outcome.expired {
        notice.0.set(Some(WorkflowError::SessionExpired));
    }
}

/// Schedules the recurring liveness checks: one short warmup delay so
/// initial hydration settles, then a steady interval.
#[component]
pub fn SessionWatcher() -> impl IntoView {
    let store = use_session_store();
    let (_state, set_state) = use_session();
    let notice = use_expiry_notice();
    let policy = use_context::<SessionPolicy>().unwrap_or_default();

    let timers = store_value(None::<(Timeout, Interval)>);
    create_effect(move |_| {
        // Effects only run in the browser; server-side test renders schedule
        // nothing.
        let tick_store = store.clone();
        let tick = move || {
            let on_login = is_login_view(storage_utils::current_pathname().as_deref());
            run_liveness_check(&tick_store, set_state, notice, on_login);
        };
        let warmup = Timeout::new(policy.initial_delay_ms, {
            let tick = tick.clone();
            move || tick()
        });
        let steady = Interval::new(policy.check_interval_ms, tick);
        timers.set_value(Some((warmup, steady)));
    });
    // Dropping the handles cancels both timers together on unmount.
    on_cleanup(move || timers.set_value(None));
}

pub async fn sign_in(
    api: &ApiClient,
    store: &SessionStore,
    set_state: WriteSignal<SessionState>,
    request: LoginRequest,
) -> Result<(), WorkflowError> {
    match api.login(&request).await {
        Ok(response) => {
            store.begin_session(&response.access_token, &request.username);
            set_state.update(|state| {
                state.subject = Some(request.username.clone());
                state.status = GuardStatus::Authenticated;
            });
            Ok(())
        }
        Err(error) => Err(WorkflowError::Auth(error.message)),
    }
}

/// The gateway has no logout endpoint; ending a session is purely local.
pub fn sign_out(store: &SessionStore, set_state: WriteSignal<SessionState>) {
    store.end_session();
    set_state.update(|state| {
        state.subject = None;
        state.status = GuardStatus::Anonymous;
    });
}

pub fn use_sign_in_action() -> Action<LoginRequest, Result<(), WorkflowError>> {
    let (_state, set_state) = use_session();
    let store = use_session_store();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let api = api.clone();
        let store = store.clone();
        async move { sign_in(&api, &store, set_state, payload).await }
    })
}
