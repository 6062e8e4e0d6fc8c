//! Stratus mapping daemon
//!
//! Answers `create`, `delete`, `import` and `import-done` requests by
//! validating and mapping service definitions into provisioning models,
//! diffing them against the previous build and attaching the workflow the
//! executor has to run.

pub mod error;
pub mod handler;
pub mod template;
pub mod transport;

pub use error::{HandlerError, Result};
pub use handler::{Handler, Subject, error_reply};
pub use template::TemplateWorkflow;
pub use transport::{LineTransport, Request, Transport, serve};
