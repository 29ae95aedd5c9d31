//! Client configuration and the queue-bypass predicate.

use serde::Deserialize;

/// One callable dependency of the remote app.
#[derive(Debug, Clone, Deserialize)]
pub struct Dependency {
    /// Per-dependency queue override. `None` defers to the global
    /// [`Config::enable_queue`] flag.
    #[serde(default)]
    pub queue: Option<bool>,
}

/// The subset of client configuration the part pipeline's callers consult.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub enable_queue: bool,
    #[serde(default)]
    pub dependencies: Vec<Dependency>,
}

impl Config {
    /// Whether queued execution should be bypassed for dependency `id`.
    ///
    /// The per-dependency `queue` setting wins when present; otherwise the
    /// global `enable_queue` flag decides. An unknown id never skips the
    /// queue.
    pub fn skip_queue(&self, id: usize) -> bool {
        match self.dependencies.get(id) {
            Some(dependency) => !dependency.queue.unwrap_or(self.enable_queue),
            None => false,
        }
    }
}
