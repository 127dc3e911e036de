//! Scripted auth provider for unit tests.

use std::cell::RefCell;

use async_trait::async_trait;

use super::provider::{AuthProvider, ProviderError};
use super::types::{SignUpRequest, User};

type Probe = Box<dyn Fn()>;

pub(crate) struct MockProvider {
    reply: Result<Option<User>, ProviderError>,
    current: Option<User>,
    probe: Option<Probe>,
    pub requests: RefCell<Vec<SignUpRequest>>,
}

impl MockProvider {
    pub fn replying(reply: Result<Option<User>, ProviderError>) -> Self {
        Self { reply, current: None, probe: None, requests: RefCell::new(Vec::new()) }
    }

    pub fn with_current_user(mut self, user: Option<User>) -> Self {
        self.current = user;
        self
    }

    /// Run `probe` while the sign-up call is in flight.
    pub fn with_probe(mut self, probe: impl Fn() + 'static) -> Self {
        self.probe = Some(Box::new(probe));
        self
    }
}

#[async_trait(?Send)]
impl AuthProvider for MockProvider {
    async fn sign_up(&self, request: &SignUpRequest) -> Result<Option<User>, ProviderError> {
        self.requests.borrow_mut().push(request.clone());
        if let Some(probe) = &self.probe {
            probe();
        }
        self.reply.clone()
    }

    async fn current_user(&self) -> Option<User> {
        self.current.clone()
    }
}

pub(crate) fn confirmed_user() -> User {
    User {
        id: "u-1".to_owned(),
        email: "a@b.com".to_owned(),
        email_confirmed_at: Some("2024-05-01T12:00:00Z".to_owned()),
    }
}

pub(crate) fn pending_user() -> User {
    User { email_confirmed_at: None, ..confirmed_user() }
}
