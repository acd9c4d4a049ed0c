pub mod conversation;
pub mod engine;
pub mod orchestrator;
pub mod session;
pub mod topic;

pub use conversation::*;
pub use engine::*;
pub use orchestrator::*;
pub use session::*;
pub use topic::*;
