//! Availability check orchestration and the invocation adapter shared by
//! every host (HTTP server, Lambda runtime, CLI).

pub mod error;
pub mod handler;
pub mod orchestrator;
pub mod recorder;

pub use error::CheckError;
pub use handler::{handle_event, InvocationEvent, InvocationResponse};
pub use orchestrator::{CheckOutcome, StockCheck, StockChecker, StockFound};
pub use recorder::StockRecorder;

#[cfg(test)]
mod test_support;
