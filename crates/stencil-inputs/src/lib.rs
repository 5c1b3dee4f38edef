//! # stencil-inputs
//!
//! Storage for user-supplied project inputs. A project keeps a flat
//! key/value YAML document at `src/config/inputs.yaml` under its base
//! path; this crate reads it, lets callers edit it in memory, and writes
//! it back with every value emitted as a folded block scalar.

pub mod error;
pub mod store;

pub use error::InputsError;
pub use store::{INPUTS_FILE, InputsStore, read_all};
