use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// External signals that drive a full catalog render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LifecycleSignal {
    /// One-shot notification that the page finished loading.
    PageReady,
    /// Repeatable notification that the viewport changed size.
    ViewportResized,
}

/// FIFO of pending lifecycle signals.
///
/// Signals are processed strictly in arrival order, each to completion before
/// the next one is taken.
#[derive(Debug, Clone, Default)]
pub struct SignalQueue {
    pending: VecDeque<LifecycleSignal>,
}

impl SignalQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, signal: LifecycleSignal) {
        self.pending.push_back(signal);
    }

    pub fn pop(&mut self) -> Option<LifecycleSignal> {
        self.pending.pop_front()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl Extend<LifecycleSignal> for SignalQueue {
    fn extend<I: IntoIterator<Item = LifecycleSignal>>(&mut self, iter: I) {
        self.pending.extend(iter);
    }
}
