//! AI systems (порядок в AiStep: integrity → roster → hunter → bacteria → chaser)

pub mod integrity;
pub mod roster;
pub mod hunter;
pub mod bacteria;
pub mod chase;

// Re-export all systems
pub use integrity::*;
pub use roster::*;
pub use hunter::*;
pub use bacteria::*;
pub use chase::*;
