//! Stratus Core
//!
//! The authored side of Stratus: the service [`Definition`] a user writes,
//! the [`Datacenter`] it targets, the request [`Payload`] that carries both,
//! and the validator that checks a definition before it is mapped.
//!
//! Validation is a short-circuit pipeline. The first violation found is
//! returned as a [`ValidationError`]; nothing is accumulated.

pub mod error;
pub mod model;
pub mod payload;
pub mod validate;

pub use error::{DefinitionError, Result, ValidationError};
pub use model::*;
pub use payload::Payload;
pub use validate::{MAX_NAME_LENGTH, validate_datacenter, validate_definition};
