pub use self::capability::{Capabilities, Capability, CapabilitySet};
pub use self::utils::*;

pub mod logging;
pub mod tasks;

mod capability;
mod utils;
