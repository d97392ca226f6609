#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{FileDescriptor, HistoryRecord};
    use crate::state::session::{
        Clock, GuardStatus, PersistedSession, SessionBackend, SessionContext, SessionState,
        SessionStore,
    };
    use leptos::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    pub struct FakeClock {
        now_ms: Cell<i64>,
    }

    impl FakeClock {
        pub fn new(start_ms: i64) -> Self {
            Self {
                now_ms: Cell::new(start_ms),
            }
        }

        pub fn advance(&self, delta_ms: i64) {
            self.now_ms.set(self.now_ms.get() + delta_ms);
        }
    }

    impl Clock for FakeClock {
        fn now_ms(&self) -> i64 {
            self.now_ms.get()
        }
    }

    /// In-memory stand-in for browser storage.
    #[derive(Default)]
    pub struct MemoryBackend {
        slot: RefCell<Option<PersistedSession>>,
    }

    impl SessionBackend for MemoryBackend {
        fn load(&self) -> Option<PersistedSession> {
            self.slot.borrow().clone()
        }

        fn save(&self, session: &PersistedSession) {
            *self.slot.borrow_mut() = Some(session.clone());
        }

        fn clear(&self) {
            *self.slot.borrow_mut() = None;
        }
    }

    pub fn shared_memory_store(ttl_ms: i64) -> (SessionStore, Rc<FakeClock>) {
        let clock = Rc::new(FakeClock::new(0));
        let store =
            SessionStore::with_parts(Rc::new(MemoryBackend::default()), clock.clone(), ttl_ms);
        (store, clock)
    }

    pub fn seeded_store(
        ttl_ms: i64,
        credential: &str,
        subject: &str,
    ) -> (SessionStore, Rc<FakeClock>) {
        let (store, clock) = shared_memory_store(ttl_ms);
        store.begin_session(credential, subject);
        (store, clock)
    }

    /// Puts a memory-backed store into context so views under test never
    /// reach for browser storage. Call inside an active runtime, before
    /// building the view.
    pub fn provide_memory_session(ttl_ms: i64) -> (SessionStore, Rc<FakeClock>) {
        let (store, clock) = shared_memory_store(ttl_ms);
        provide_context(store.clone());
        (store, clock)
    }

    pub fn provide_session_state(
        status: GuardStatus,
        subject: Option<&str>,
    ) -> (ReadSignal<SessionState>, WriteSignal<SessionState>) {
        let (state, set_state) = create_signal(SessionState {
            subject: subject.map(str::to_string),
            status,
        });
        provide_context::<SessionContext>((state, set_state));
        (state, set_state)
    }

    pub fn history_record(id: i64, file_id: i64) -> HistoryRecord {
        HistoryRecord {
            id,
            file_id,
            report_path: Some(format!("reports/report_{}.pdf", id)),
            request_date: "2025-01-02T03:04:05".parse().unwrap(),
        }
    }

    pub fn file_descriptor(id: i64, file_path: &str) -> FileDescriptor {
        FileDescriptor {
            id,
            file_path: file_path.to_string(),
            file_type: "audio".into(),
            upload_date: "2025-01-02T03:04:05".parse().unwrap(),
        }
    }
}
