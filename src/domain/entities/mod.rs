//! Domain entities - Core business objects with no external dependencies

pub mod operator;
pub mod message;
pub mod command;
pub mod reply;
pub mod telemetry;
pub mod workflow;

pub use operator::Operator;
pub use message::{Message, Content};
pub use command::Command;
pub use reply::{Lifecycle, ParseMode, Reply};
pub use telemetry::{CpuSnapshot, DiskSnapshot, MemorySnapshot, OsIdentity};
pub use workflow::{CiSnapshot, DispatchOutcome, WorkflowRun};
