#[cfg(test)]
#[path = "./status.tests.rs"]
mod status_tests;

/// Health of a replicated workload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnosis {
    Healthy,
    Unhealthy(String),
}

impl Diagnosis {
    /// Returns the problem description if there is one.
    pub fn message(&self) -> Option<&str> {
        match self {
            Diagnosis::Healthy => None,
            Diagnosis::Unhealthy(message) => Some(message),
        }
    }

    /// Returns text for the status column, empty when healthy.
    pub fn to_status(&self) -> String {
        self.message().map(String::from).unwrap_or_default()
    }
}

/// Compares `desired` replica count with the `ready` one.
pub fn diagnose(desired: i32, ready: i32) -> Diagnosis {
    if desired == ready {
        Diagnosis::Healthy
    } else {
        Diagnosis::Unhealthy(format!("desiring {desired} replicas got {ready} available"))
    }
}
