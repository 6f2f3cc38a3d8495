#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use crate::errors::{AuthError, StayError, StayResult};
    use crate::implementations::config::AdminCredentials;
    use crate::implementations::session_gate::{SessionGate, SESSION_FLAG_KEY};
    use crate::implementations::session_store::{FileSessionStore, MemorySessionStore};
    use crate::traits::SessionStore;
    use crate::tests::mock_api::setup;

    fn credentials() -> Option<AdminCredentials> {
        Some(AdminCredentials::new("desk-admin", "Hills@2024"))
    }

    fn gate() -> SessionGate<MemorySessionStore> {
        SessionGate::open(MemorySessionStore::new(), credentials())
    }

    #[test]
    fn login_with_exact_pair_sets_flag() {
        setup();
        let mut gate = gate();
        assert!(!gate.is_authenticated());

        gate.login("desk-admin", "Hills@2024").unwrap();

        assert!(gate.is_authenticated());
        assert_eq!(gate.store().get(SESSION_FLAG_KEY).unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn login_rejects_near_matches_and_empty_input() {
        setup();
        let attempts = [
            ("", ""),
            ("desk-admin", ""),
            ("", "Hills@2024"),
            ("Desk-Admin", "Hills@2024"),
            ("desk-admin", "hills@2024"),
            ("desk-admin ", "Hills@2024"),
            ("desk-admin", "Hills@20241"),
        ];
        for (id, pw) in attempts {
            let mut gate = gate();
            assert_eq!(gate.login(id, pw), Err(AuthError::InvalidCredentials), "{:?}/{:?}", id, pw);
            assert!(!gate.is_authenticated());
            assert_eq!(gate.store().get(SESSION_FLAG_KEY).unwrap(), None);
        }
    }

    #[test]
    fn failed_login_keeps_existing_session() {
        setup();
        let mut gate = gate();
        gate.login("desk-admin", "Hills@2024").unwrap();
        assert!(gate.login("desk-admin", "wrong").is_err());
        assert!(gate.is_authenticated());
    }

    #[test]
    fn login_without_configured_credentials() {
        setup();
        let mut gate = SessionGate::open(MemorySessionStore::new(), None);
        assert_eq!(gate.login("desk-admin", "Hills@2024"), Err(AuthError::NotConfigured));
        assert!(!gate.is_authenticated());
    }

    #[test]
    fn logout_always_ends_signed_out() {
        setup();
        let mut gate = gate();
        gate.logout();
        assert!(!gate.is_authenticated());

        gate.login("desk-admin", "Hills@2024").unwrap();
        gate.logout();
        gate.logout();
        assert!(!gate.is_authenticated());
        assert_eq!(gate.store().get(SESSION_FLAG_KEY).unwrap(), None);
    }

    #[test]
    fn flag_is_read_at_startup() {
        setup();
        let mut store = MemorySessionStore::new();
        store.set(SESSION_FLAG_KEY, "true").unwrap();
        assert!(SessionGate::open(store, credentials()).is_authenticated());

        let mut store = MemorySessionStore::new();
        store.set(SESSION_FLAG_KEY, "yes").unwrap();
        assert!(!SessionGate::open(store, credentials()).is_authenticated());
    }

    #[test]
    fn file_store_persists_across_gates() {
        setup();
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");

        let mut first = SessionGate::open(FileSessionStore::new(&path), credentials());
        first.login("desk-admin", "Hills@2024").unwrap();
        assert!(path.exists());

        let mut second = SessionGate::open(FileSessionStore::new(&path), credentials());
        assert!(second.is_authenticated());

        second.logout();
        assert!(!path.exists());
        assert!(!SessionGate::open(FileSessionStore::new(&path), credentials()).is_authenticated());
    }

    #[test]
    fn corrupt_session_file_reads_as_signed_out() {
        setup();
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json").unwrap();

        let gate = SessionGate::open(FileSessionStore::new(&path), credentials());
        assert!(!gate.is_authenticated());
    }

    /// Store whose `remove` always fails, as on a read-only data dir
    #[derive(Clone, Default)]
    struct StickyStore {
        inner: MemorySessionStore,
    }

    impl SessionStore for StickyStore {
        fn get(&self, key: &str) -> StayResult<Option<String>> {
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> StayResult<()> {
            self.inner.set(key, value)
        }

        fn remove(&mut self, _key: &str) -> StayResult<()> {
            Err(StayError::Io(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only")))
        }
    }

    #[test]
    fn logout_overwrites_flag_it_cannot_remove() {
        setup();
        let mut gate = SessionGate::open(StickyStore::default(), credentials());
        gate.login("desk-admin", "Hills@2024").unwrap();

        gate.logout();

        assert!(!gate.is_authenticated());
        assert_eq!(gate.store().get(SESSION_FLAG_KEY).unwrap().as_deref(), Some("false"));
        let reopened = SessionGate::open(gate.store().clone(), credentials());
        assert!(!reopened.is_authenticated());
    }
}
