//! Observed/pending value overlay.
//!
//! An [`Overlay`] holds the value the remote store last reported for an
//! attribute alongside a locally staged replacement that has not been sent
//! yet. Reads prefer the staged value; writes only ever touch the staged slot.

use serde::{Deserialize, Serialize};

/// A single attribute with an observed slot and a pending slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overlay<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    observed: Option<T>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pending: Option<T>,
}

// Derived Default would require `T: Default`.
impl<T> Default for Overlay<T> {
    fn default() -> Self {
        Self {
            observed: None,
            pending: None,
        }
    }
}

impl<T> Overlay<T> {
    /// Creates an overlay with both slots empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an overlay whose observed slot holds `value`.
    pub fn observed(value: T) -> Self {
        Self {
            observed: Some(value),
            pending: None,
        }
    }

    /// Returns the pending value if one is staged, otherwise the observed value.
    pub fn get(&self) -> Option<&T> {
        resolve(self.pending.as_ref(), self.observed.as_ref())
    }

    /// Returns the value last reported by the remote store.
    pub fn observed_value(&self) -> Option<&T> {
        self.observed.as_ref()
    }

    /// Returns the staged value, if any.
    pub fn pending_value(&self) -> Option<&T> {
        self.pending.as_ref()
    }

    /// Stages `value` for the next update. `None` drops the staged override so
    /// reads fall back to the observed value.
    pub fn stage(&mut self, value: Option<T>) {
        self.pending = value;
    }

    /// Returns true if a value is staged.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drops the staged value. The observed value is untouched.
    pub fn discard_pending(&mut self) {
        self.pending = None;
    }

    /// Replaces the observed value. Only the response-parsing path writes here.
    pub(crate) fn set_observed(&mut self, value: Option<T>) {
        self.observed = value;
    }
}

impl<T: Clone> Overlay<T> {
    /// Returns an owned copy of the effective value.
    pub fn get_cloned(&self) -> Option<T> {
        self.get().cloned()
    }
}

/// Pending wins over observed; the two are never combined.
pub fn resolve<'a, T>(pending: Option<&'a T>, observed: Option<&'a T>) -> Option<&'a T> {
    pending.or(observed)
}
