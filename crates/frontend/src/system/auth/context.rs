use super::storage;
use leptos::prelude::*;

/// Bearer token of the signed-in admin, `None` when signed out
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub token: RwSignal<Option<String>>,
}

impl AuthContext {
    /// Restores the session saved in localStorage
    pub fn restore() -> Self {
        Self {
            token: RwSignal::new(storage::get_token()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.with(|t| t.is_some())
    }

    pub fn sign_in(&self, token: String) {
        storage::save_token(&token);
        self.token.set(Some(token));
    }

    pub fn sign_out(&self) {
        storage::clear_token();
        self.token.set(None);
    }
}

/// Hook to access auth state
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext not found in component tree")
}
