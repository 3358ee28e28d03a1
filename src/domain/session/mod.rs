use uuid::Uuid;

/// User identity attached to an authenticated session
#[derive(Debug, Clone)]
pub struct SessionUser {
    pub user_id: Uuid,
    pub email: String,
}

/// Authentication state for one engine instance
///
/// Created at application start and passed in explicitly; the engine only
/// ever reads it. The persistence side-effect fires solely for
/// authenticated sessions.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    user: Option<SessionUser>,
}

impl SessionContext {
    /// Session without a signed-in user
    pub fn anonymous() -> Self {
        Self { user: None }
    }

    /// Session backed by a signed-in user
    pub fn authenticated(user_id: Uuid, email: impl Into<String>) -> Self {
        Self {
            user: Some(SessionUser {
                user_id,
                email: email.into(),
            }),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }
}
