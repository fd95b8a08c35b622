use axum::http::HeaderMap;

pub const ADMIN_PASSWORD_HEADER: &str = "x-admin-password";

/// Plaintext password gate for the admin views.
#[derive(Clone)]
pub struct AdminAccess {
    password: String,
}

impl AdminAccess {
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
        }
    }

    pub fn verify(&self, candidate: &str) -> bool {
        !self.password.is_empty() && candidate == self.password
    }

    pub fn authorize(&self, headers: &HeaderMap) -> bool {
        headers
            .get(ADMIN_PASSWORD_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(|value| self.verify(value))
            .unwrap_or(false)
    }
}

impl std::fmt::Debug for AdminAccess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminAccess").finish_non_exhaustive()
    }
}
