//! Testing utilities for Hookline.
//!
//! This module provides listeners that make dispatch easy to observe.
//!
//! # Features
//!
//! - [`Recorder`] / [`RecordingListener`]: Log a label every time a listener runs
//! - [`CountingListener`]: Counts invocations
//! - [`FailingListener`]: Always returns an error

use hookline_core::{BoxError, Context, HookResult, Listener};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Recording Listener
// ============================================================================

/// A shared log that recording listeners append to.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = Recorder::new();
/// registry.event("k").set_priority(10).attach(recorder.listener("late"));
/// registry.event("k").set_priority(-3).attach(recorder.listener("early"));
///
/// registry.hook("k").execute()?;
/// assert_eq!(recorder.entries(), ["early", "late"]);
/// ```
#[derive(Clone, Default)]
pub struct Recorder {
    entries: Arc<Mutex<Vec<String>>>,
}

impl Recorder {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a listener that logs `label` each time it runs.
    pub fn listener(&self, label: impl Into<String>) -> RecordingListener {
        RecordingListener {
            label: label.into(),
            entries: self.entries.clone(),
        }
    }

    /// Get a clone of the recorded labels, in call order.
    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().unwrap().clone()
    }

    /// Get the number of recorded calls.
    pub fn count(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    /// Clear all recorded calls.
    pub fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }
}

/// A listener that appends its label to a [`Recorder`].
pub struct RecordingListener {
    label: String,
    entries: Arc<Mutex<Vec<String>>>,
}

impl Listener for RecordingListener {
    fn handle(&self, _result: &mut HookResult, _context: Option<&Context>) -> Result<(), BoxError> {
        self.entries.lock().unwrap().push(self.label.clone());
        Ok(())
    }
}

// ============================================================================
// Counting Listener
// ============================================================================

/// A listener that counts invocations.
///
/// Clones share the counter, so keep one to inspect after attaching the other.
#[derive(Clone, Default)]
pub struct CountingListener {
    count: Arc<AtomicUsize>,
}

impl CountingListener {
    /// Create a new counting listener.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl Listener for CountingListener {
    fn handle(&self, _result: &mut HookResult, _context: Option<&Context>) -> Result<(), BoxError> {
        self.count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

// ============================================================================
// Failing Listener
// ============================================================================

/// A listener that always fails with the given message.
#[derive(Clone)]
pub struct FailingListener {
    message: String,
}

impl FailingListener {
    /// Create a listener failing with `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Listener for FailingListener {
    fn handle(&self, _result: &mut HookResult, _context: Option<&Context>) -> Result<(), BoxError> {
        Err(self.message.clone().into())
    }
}
