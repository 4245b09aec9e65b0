use async_trait::async_trait;
use email_address::EmailAddress;
use std::sync::Arc;
use tokio::sync::watch;

use crate::auth::domain::entities::SessionUser;

//
// ──────────────────────────────────────────────────────────
// Session state
// ──────────────────────────────────────────────────────────
//

/// Lifecycle of the signed-in identity as the editing UI sees it.
///
/// `Unknown` is the constructed-but-uninitialized state; `Loading` covers
/// the window between asking the backend for the current session and its
/// answer. Edit affordances stay hidden in both - only `Authenticated`
/// unlocks them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Unknown,
    Loading,
    Anonymous,
    Authenticated(SessionUser),
}

impl SessionState {
    pub fn user(&self) -> Option<&SessionUser> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Gateway port
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum SessionGatewayError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("email not confirmed")]
    EmailNotConfirmed,

    #[error("{0}")]
    Backend(String),
}

#[async_trait]
pub trait SessionGateway: Send + Sync {
    /// The currently persisted session, if any.
    async fn current_session(&self) -> Option<SessionUser>;

    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<SessionUser, SessionGatewayError>;

    async fn sign_out(&self);
}

//
// ──────────────────────────────────────────────────────────
// Sign-in errors (user-facing copy)
// ──────────────────────────────────────────────────────────
//

const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignInError {
    EmptyEmail,
    InvalidEmailFormat,
    PasswordTooShort,
    InvalidCredentials,
    EmailNotConfirmed,
    Backend(String),
}

impl std::fmt::Display for SignInError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SignInError::EmptyEmail => write!(f, "Email is required"),
            SignInError::InvalidEmailFormat => write!(f, "Enter a valid email address"),
            SignInError::PasswordTooShort => {
                write!(f, "Password must be at least {} characters", MIN_PASSWORD_LEN)
            }
            SignInError::InvalidCredentials => write!(f, "Invalid email or password"),
            SignInError::EmailNotConfirmed => {
                write!(f, "Please confirm your email address before signing in")
            }
            SignInError::Backend(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for SignInError {}

//
// ──────────────────────────────────────────────────────────
// Manager
// ──────────────────────────────────────────────────────────
//

/// Process-wide session tracker. Constructed once at application root;
/// observers subscribe through a watch channel and unsubscribe by dropping
/// the receiver, so no listener can outlive its owner.
pub struct SessionManager {
    gateway: Arc<dyn SessionGateway>,
    state: watch::Sender<SessionState>,
}

impl SessionManager {
    pub fn new(gateway: Arc<dyn SessionGateway>) -> Self {
        let (state, _) = watch::channel(SessionState::Unknown);
        Self { gateway, state }
    }

    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Change notifications for the lifetime of the receiver.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// True only for a resolved, authenticated session - never while the
    /// initial lookup is still in flight.
    pub fn can_edit(&self) -> bool {
        matches!(&*self.state.borrow(), SessionState::Authenticated(_))
    }

    /// Resolve the persisted session. Until this completes the state is
    /// `Loading` and every edit affordance stays hidden.
    pub async fn initialize(&self) {
        // send_replace updates the state even while nobody is subscribed
        self.state.send_replace(SessionState::Loading);

        let next = match self.gateway.current_session().await {
            Some(user) => SessionState::Authenticated(user),
            None => SessionState::Anonymous,
        };

        self.state.send_replace(next);
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<SessionUser, SignInError> {
        let email = email.trim();

        if email.is_empty() {
            return Err(SignInError::EmptyEmail);
        }

        if !EmailAddress::is_valid(email) {
            return Err(SignInError::InvalidEmailFormat);
        }

        if password.trim().len() < MIN_PASSWORD_LEN {
            return Err(SignInError::PasswordTooShort);
        }

        match self.gateway.sign_in_with_password(email, password).await {
            Ok(user) => {
                self.state.send_replace(SessionState::Authenticated(user.clone()));
                Ok(user)
            }
            Err(SessionGatewayError::InvalidCredentials) => Err(SignInError::InvalidCredentials),
            Err(SessionGatewayError::EmailNotConfirmed) => Err(SignInError::EmailNotConfirmed),
            Err(SessionGatewayError::Backend(msg)) => Err(SignInError::Backend(msg)),
        }
    }

    pub async fn sign_out(&self) {
        self.gateway.sign_out().await;
        self.state.send_replace(SessionState::Anonymous);
    }
}
