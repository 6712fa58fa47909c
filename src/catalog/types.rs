//! Value types shared by catalog discovery and launch.

use serde::{Deserialize, Serialize};

/// A launchable application reported by the remote host.
///
/// Identity is `id`; `name` is the display key used for selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppEntry {
    pub id: u32,
    pub name: String,
}

impl AppEntry {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Ordered application list from one discovery call. May be empty.
pub type Catalog = Vec<AppEntry>;

/// Handle of a running remote session. Zero means "no session".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionHandle(pub u32);

impl SessionHandle {
    pub const NONE: SessionHandle = SessionHandle(0);

    /// Returns true for any non-zero handle.
    pub fn is_active(self) -> bool {
        self != Self::NONE
    }
}

impl std::fmt::Display for SessionHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
