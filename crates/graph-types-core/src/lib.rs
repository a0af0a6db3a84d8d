//! Core identity types for the graph type registry.
//!
//! - [`TypeHash`]: deterministic 64-bit identity
//! - [`HostType`] / [`Host`]: host data types used as registry keys
//! - [`Descriptor`] / [`SchemaType`] / [`Scalar`]: schema type descriptors
//! - [`RegistrationError`]: the one failure mode of registration

mod descriptor;
mod error;
mod host_type;
mod type_hash;

pub use descriptor::{Descriptor, Scalar, SchemaType};
pub use error::RegistrationError;
pub use host_type::{Host, HostType};
pub use type_hash::{TypeHash, hash_constants, primitives};
