use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{ChartError, ChartResult};
use crate::render::InstanceHandle;

/// Lifecycle state of one definition id inside the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InstanceState {
    #[default]
    Absent,
    Live,
}

/// What `register_or_replace` did with the factory result.
#[derive(Debug, Clone, PartialEq)]
pub enum RegistrationOutcome {
    /// A new handle is now live for the id.
    Created,
    /// The factory found no surface; the id stays absent.
    Skipped,
    /// The factory failed; the id stays absent.
    Failed(ChartError),
}

/// Result of one create-or-replace step.
#[derive(Debug, Clone, PartialEq)]
pub struct Registration {
    pub outcome: RegistrationOutcome,
    /// Error raised while disposing the stale handle, if any.
    pub disposal_error: Option<ChartError>,
}

impl Registration {
    #[must_use]
    pub fn state(&self) -> InstanceState {
        match self.outcome {
            RegistrationOutcome::Created => InstanceState::Live,
            RegistrationOutcome::Skipped | RegistrationOutcome::Failed(_) => InstanceState::Absent,
        }
    }
}

/// Owns the live instance handle of every definition id.
///
/// Each id maps to zero or one handle. A stale handle is always disposed and
/// dropped before its replacement is constructed.
#[derive(Debug)]
pub struct InstanceRegistry<H: InstanceHandle> {
    entries: IndexMap<String, H>,
}

impl<H: InstanceHandle> Default for InstanceRegistry<H> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }
}

fn dispose_handle<H: InstanceHandle>(definition_id: &str, mut handle: H) -> ChartResult<()> {
    handle.dispose().map_err(|err| match err {
        ChartError::DisposalFailed { .. } => err,
        other => ChartError::DisposalFailed {
            definition_id: definition_id.to_owned(),
            reason: other.to_string(),
        },
    })
}

impl<H: InstanceHandle> InstanceRegistry<H> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Disposes any live handle for `definition_id`, then stores what `factory` yields.
    ///
    /// A disposal failure is reported in the returned `Registration` but never
    /// prevents the factory from running.
    pub fn register_or_replace<F>(&mut self, definition_id: &str, factory: F) -> Registration
    where
        F: FnOnce() -> ChartResult<Option<H>>,
    {
        let disposal_error = self
            .entries
            .shift_remove(definition_id)
            .and_then(|stale| dispose_handle(definition_id, stale).err());
        if let Some(err) = &disposal_error {
            warn!(
                definition_id,
                error = %err,
                "stale chart instance failed to dispose; creating replacement anyway"
            );
        }

        let outcome = match factory() {
            Ok(Some(handle)) => {
                self.entries.insert(definition_id.to_owned(), handle);
                RegistrationOutcome::Created
            }
            Ok(None) => {
                debug!(definition_id, "no surface for chart; leaving instance absent");
                RegistrationOutcome::Skipped
            }
            Err(err) => RegistrationOutcome::Failed(err),
        };

        Registration {
            outcome,
            disposal_error,
        }
    }

    /// Disposes the handle for `definition_id`. Returns `Ok(false)` when none is live.
    ///
    /// The entry is cleared even when disposal fails.
    pub fn dispose(&mut self, definition_id: &str) -> ChartResult<bool> {
        match self.entries.shift_remove(definition_id) {
            Some(handle) => dispose_handle(definition_id, handle).map(|()| true),
            None => Ok(false),
        }
    }

    /// Disposes every tracked handle and clears the registry.
    ///
    /// Returns the disposal errors encountered; every entry is removed regardless.
    pub fn dispose_all(&mut self) -> Vec<ChartError> {
        let mut failures = Vec::new();
        for (definition_id, handle) in self.entries.drain(..) {
            if let Err(err) = dispose_handle(&definition_id, handle) {
                warn!(definition_id = %definition_id, error = %err, "chart instance failed to dispose");
                failures.push(err);
            }
        }
        failures
    }

    #[must_use]
    pub fn state(&self, definition_id: &str) -> InstanceState {
        if self.entries.contains_key(definition_id) {
            InstanceState::Live
        } else {
            InstanceState::Absent
        }
    }

    #[must_use]
    pub fn get(&self, definition_id: &str) -> Option<&H> {
        self.entries.get(definition_id)
    }

    #[must_use]
    pub fn live_count(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn live_ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}
