//! Domain types for template resolution
//!
//! All types here are transient values constructed and discarded within a
//! single resolution call; none of them own persistent state.

pub mod bundle;
pub mod controller;
pub mod request;
pub mod template;
