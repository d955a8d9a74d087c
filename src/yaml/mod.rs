//! YAML decoding.
//!
//! # Module Organization
//!
//! - [`node`]: The decoded source tree
//! - [`parser`]: Event-driven decoder producing one tree per document

mod node;
mod parser;

pub use node::Node;
pub use parser::DocumentStream;
