use dashmap::DashMap;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

/// Lifecycle handle for one scan: its identity plus the cancellation token the
/// worker watches. Clones share the same token.
#[derive(Debug, Clone)]
pub struct ScanSession {
    id: Uuid,
    cancel: CancellationToken,
}

impl ScanSession {
    fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            cancel: CancellationToken::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Token to hand to the scan worker.
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

/// Live sessions keyed by id, owned by whatever manages session lifecycles.
/// Add and remove are scoped to session open/close; there is no global state.
#[derive(Debug)]
pub struct SessionRegistry {
    sessions: DashMap<Uuid, ScanSession>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    /// Creates a session and registers it.
    pub fn open(&self) -> ScanSession {
        let session = ScanSession::new();
        log::debug!("[session] opened: id={}", session.id);
        self.sessions.insert(session.id, session.clone());
        session
    }

    /// Signals a session's cancellation token, leaving it registered until the
    /// worker winds down. Returns false for an unknown id.
    pub fn cancel(&self, id: &Uuid) -> bool {
        match self.sessions.get(id) {
            Some(session) => {
                log::debug!("[session] cancel_requested: id={}", id);
                session.cancel();
                true
            }
            None => false,
        }
    }

    /// Cancels and removes a session once its owner is done with it. Returns
    /// false for an unknown id.
    pub fn close(&self, id: &Uuid) -> bool {
        match self.sessions.remove(id) {
            Some((_, session)) => {
                session.cancel();
                log::debug!("[session] closed: id={}", id);
                true
            }
            None => false,
        }
    }

    /// Cancels and removes every session, for shutdown.
    pub fn close_all(&self) {
        let count = self.sessions.len();
        for entry in self.sessions.iter() {
            entry.value().cancel();
        }
        self.sessions.clear();
        log::debug!("[session] closed_all: count={}", count);
    }

    pub fn contains(&self, id: &Uuid) -> bool {
        self.sessions.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
