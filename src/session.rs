//! Session Context
//!
//! The signed-in role and token, read once from browser storage at startup
//! and passed explicitly to everything that needs them.

const ROLE_STORAGE_KEY: &str = "userRole";
const TOKEN_STORAGE_KEY: &str = "token";

/// Coarse permission tag gating navigation and endpoint variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Agent,
    User,
}

impl Role {
    /// Parse a stored role string; unknown values yield `None`
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "admin" => Some(Self::Admin),
            "agent" => Some(Self::Agent),
            "user" => Some(Self::User),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Agent => "agent",
            Self::User => "user",
        }
    }
}

/// Read-only session snapshot
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub role: Option<Role>,
    pub token: Option<String>,
}

impl Session {
    pub fn new(role: Option<&str>, token: Option<String>) -> Self {
        Self {
            role: role.and_then(Role::parse),
            token: token.filter(|t| !t.is_empty()),
        }
    }

    /// Load the session from local storage (empty if storage is unavailable)
    pub fn load() -> Self {
        let Some(storage) = local_storage() else {
            log::warn!("[SESSION] local storage unavailable, starting signed out");
            return Self::default();
        };
        let role = storage.get_item(ROLE_STORAGE_KEY).ok().flatten();
        let token = storage.get_item(TOKEN_STORAGE_KEY).ok().flatten();
        let session = Self::new(role.as_deref(), token);
        log::info!("[SESSION] loaded role={:?}", session.role);
        session
    }

    /// Remove the stored session (logout boundary)
    pub fn clear_storage() {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(ROLE_STORAGE_KEY);
            let _ = storage.remove_item(TOKEN_STORAGE_KEY);
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.token.is_some()
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|win| win.local_storage().ok().flatten())
}
