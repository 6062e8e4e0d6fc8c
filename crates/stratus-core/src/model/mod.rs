//! Authored definition model
//!
//! Every resource a user can declare lives in its own module. All collections
//! default to empty so partial definitions (as received during import) parse.

mod datacenter;
mod definition;
mod ebs;
mod elb;
mod instance;
mod nat;
mod network;
mod port;
mod rds;
mod route53;
mod s3;
mod security_group;

// Re-exports
pub use datacenter::*;
pub use definition::*;
pub use ebs::*;
pub use elb::*;
pub use instance::*;
pub use nat::*;
pub use network::*;
pub use rds::*;
pub use route53::*;
pub use s3::*;
pub use security_group::*;
