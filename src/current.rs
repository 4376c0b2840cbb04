//! Tracking of the environment the process is currently running under.
//!
//! [`CurrentEnvironment`] is a cloneable handle that can be passed to the
//! components that need it. For code that prefers a single process-wide
//! value, [`set_current`] and [`current`] operate on one shared instance.

use crate::environment::Environment;
use parking_lot::RwLock;
use std::sync::{Arc, LazyLock};

static CURRENT: LazyLock<CurrentEnvironment> = LazyLock::new(CurrentEnvironment::new);

/// A shared, lock-protected slot holding the active environment.
///
/// Clones share the same slot. Reads take a shared lock and writes an
/// exclusive one; neither is held beyond a single clone or assignment.
#[derive(Debug, Clone, Default)]
pub struct CurrentEnvironment {
    slot: Arc<RwLock<Option<Environment>>>,
}

impl CurrentEnvironment {
    /// Create an unset holder. [`get`](Self::get) returns production until
    /// something is stored.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a holder that already contains `env`.
    pub fn with_initial(env: Environment) -> Self {
        Self {
            slot: Arc::new(RwLock::new(Some(env))),
        }
    }

    /// Store `env`, replacing whatever was there.
    ///
    /// No validation is applied: unrecognized values are stored verbatim.
    pub fn set(&self, env: Environment) {
        *self.slot.write() = Some(env);
    }

    /// The stored environment, or production if nothing (or the empty
    /// value) has been stored.
    pub fn get(&self) -> Environment {
        match &*self.slot.read() {
            Some(env) if !env.is_empty() => env.clone(),
            _ => Environment::Production,
        }
    }

    /// Whether [`set`](Self::set) has been called on this slot.
    pub fn is_set(&self) -> bool {
        self.slot.read().is_some()
    }
}

/// Set the process-wide current environment.
///
/// The value is stored as given; see [`CurrentEnvironment::set`].
pub fn set_current(env: Environment) {
    CURRENT.set(env);
}

/// The process-wide current environment, production if never set.
pub fn current() -> Environment {
    CURRENT.get()
}

/// A handle to the process-wide slot used by [`set_current`] and [`current`].
pub fn global() -> CurrentEnvironment {
    CURRENT.clone()
}
