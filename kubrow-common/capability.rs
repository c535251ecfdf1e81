use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[cfg(test)]
#[path = "./capability.tests.rs"]
mod capability_tests;

/// Optional subsystem that can influence what is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Container images vulnerability scanner.
    VulnerabilityScanner,
}

/// Point-in-time copy of the [`Capabilities`] state.\
/// **Note** that it should be taken once per header or row so that a single render call is consistent.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CapabilitySet {
    scanner: bool,
}

impl CapabilitySet {
    /// Creates new [`CapabilitySet`] with all capabilities inactive.
    pub const fn none() -> Self {
        Self { scanner: false }
    }

    /// Creates new [`CapabilitySet`] with all capabilities active.
    pub const fn all() -> Self {
        Self { scanner: true }
    }

    /// Returns `true` if the given `capability` is active.
    pub fn has(&self, capability: Capability) -> bool {
        match capability {
            Capability::VulnerabilityScanner => self.scanner,
        }
    }
}

/// Shared, thread safe handle to the process capabilities.\
/// Cloned handles observe the same state.
#[derive(Debug, Default, Clone)]
pub struct Capabilities {
    scanner: Arc<AtomicBool>,
}

impl Capabilities {
    /// Creates new [`Capabilities`] instance initialized from the given `set`.
    pub fn new(set: CapabilitySet) -> Self {
        Self {
            scanner: Arc::new(AtomicBool::new(set.scanner)),
        }
    }

    /// Marks the given `capability` as active.
    pub fn activate(&self, capability: Capability) {
        self.flag(capability).store(true, Ordering::Release);
    }

    /// Marks the given `capability` as inactive.
    pub fn deactivate(&self, capability: Capability) {
        self.flag(capability).store(false, Ordering::Release);
    }

    /// Returns `true` if the given `capability` is currently active.
    pub fn is_active(&self, capability: Capability) -> bool {
        self.flag(capability).load(Ordering::Acquire)
    }

    /// Returns current state of all capabilities.
    pub fn snapshot(&self) -> CapabilitySet {
        CapabilitySet {
            scanner: self.scanner.load(Ordering::Acquire),
        }
    }

    fn flag(&self, capability: Capability) -> &AtomicBool {
        match capability {
            Capability::VulnerabilityScanner => &self.scanner,
        }
    }
}
