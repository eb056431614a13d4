use crate::domain::models::session::Session;
use crate::domain::models::user::User;
use crate::domain::ports::{documents, RecordStore};
use crate::domain::services::defaults;
use crate::error::AppError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

/// Credential check against the stored user list, plus session lifecycle.
/// Passwords are compared in plain text; that boundary is out of scope here.
pub struct AuthService {
    store: Arc<dyn RecordStore>,
    /// Transient same-process flag distinguishing "explicit logout" from
    /// "no session yet". Consumed once by [`AuthService::entry_mode`].
    manual_logout: AtomicBool,
}

/// What the login entry point should do on arrival.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryMode {
    /// A session exists; skip the login gate entirely.
    Authenticated(Session),
    /// The user just logged out on purpose; wait silently for credentials.
    AwaitCredentials,
    /// No session and no logout: prompt for credentials immediately.
    PromptLogin,
}

impl AuthService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            store,
            manual_logout: AtomicBool::new(false),
        }
    }

    /// The stored user list, seeding the fixed accounts on first run or when
    /// the document is unreadable.
    pub fn users(&self) -> Result<Vec<User>, AppError> {
        match self.store.read(documents::USERS) {
            Ok(Some(value)) => match serde_json::from_value(value) {
                Ok(users) => Ok(users),
                Err(e) => {
                    warn!("Users document has unexpected shape, reseeding: {e}");
                    self.seed_users()
                }
            },
            Ok(None) => self.seed_users(),
            Err(e) if e.is_parse_failure() => {
                warn!("Users document is not valid JSON, reseeding: {e}");
                self.seed_users()
            }
            Err(e) => Err(e),
        }
    }

    fn seed_users(&self) -> Result<Vec<User>, AppError> {
        let users = defaults::default_users();
        let value = serde_json::to_value(&users).map_err(|e| AppError::StorageParse {
            document: documents::USERS.to_string(),
            source: e,
        })?;
        self.store.write(documents::USERS, &value)?;
        info!("Default users initialized in the record store");
        Ok(users)
    }

    /// Exact username+password match. On success the session projection is
    /// written to the store and returned; on failure nothing is written.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<Session, AppError> {
        let users = self.users()?;
        let user = users
            .iter()
            .find(|u| u.username == username && u.password == password)
            .ok_or(AppError::Unauthorized)?;

        let session = Session::from(user);
        let value = serde_json::to_value(&session).map_err(|e| AppError::StorageParse {
            document: documents::LOGGED_USER.to_string(),
            source: e,
        })?;
        self.store.write(documents::LOGGED_USER, &value)?;
        info!(username, "login succeeded");
        Ok(session)
    }

    /// The stored session, if any. An unreadable session document counts as
    /// no session.
    pub fn current_session(&self) -> Result<Option<Session>, AppError> {
        match self.store.read(documents::LOGGED_USER) {
            Ok(Some(value)) => match serde_json::from_value(value) {
                Ok(session) => Ok(Some(session)),
                Err(e) => {
                    warn!("Session document has unexpected shape, treating as logged out: {e}");
                    self.store.remove(documents::LOGGED_USER)?;
                    Ok(None)
                }
            },
            Ok(None) => Ok(None),
            Err(e) if e.is_parse_failure() => {
                warn!("Session document is not valid JSON, treating as logged out: {e}");
                self.store.remove(documents::LOGGED_USER)?;
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Removes the session and raises the manual-logout flag.
    pub fn logout(&self) -> Result<(), AppError> {
        self.store.remove(documents::LOGGED_USER)?;
        self.manual_logout.store(true, Ordering::SeqCst);
        info!("logged out");
        Ok(())
    }

    /// Decides the login entry point's behavior, consuming the logout flag
    /// in the process.
    pub fn entry_mode(&self) -> Result<EntryMode, AppError> {
        if let Some(session) = self.current_session()? {
            return Ok(EntryMode::Authenticated(session));
        }
        if self.manual_logout.swap(false, Ordering::SeqCst) {
            return Ok(EntryMode::AwaitCredentials);
        }
        Ok(EntryMode::PromptLogin)
    }
}

/// Explicit login state machine replacing the source's blocking prompt loop:
/// `Idle -> Submitting -> Authenticated | Rejected`, with resubmission
/// allowed from `Rejected`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoginState {
    #[default]
    Idle,
    Submitting,
    Authenticated(Session),
    Rejected {
        attempts: u32,
    },
}

#[derive(Default)]
pub struct LoginFlow {
    state: LoginState,
}

impl LoginFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LoginState {
        &self.state
    }

    /// Runs one credential submission. Storage failures are surfaced to the
    /// caller and leave the flow where it was.
    pub fn submit(
        &mut self,
        auth: &AuthService,
        username: &str,
        password: &str,
    ) -> Result<&LoginState, AppError> {
        if let LoginState::Authenticated(_) = self.state {
            return Ok(&self.state);
        }

        let attempts = match self.state {
            LoginState::Rejected { attempts } => attempts,
            _ => 0,
        };
        self.state = LoginState::Submitting;

        self.state = match auth.authenticate(username, password) {
            Ok(session) => LoginState::Authenticated(session),
            Err(AppError::Unauthorized) => LoginState::Rejected {
                attempts: attempts + 1,
            },
            Err(e) => {
                self.state = LoginState::Idle;
                return Err(e);
            }
        };
        Ok(&self.state)
    }
}
