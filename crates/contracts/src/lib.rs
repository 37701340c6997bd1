//! Wire contracts shared between the frontend and the mentoring REST backend.
//!
//! Field names are pinned with serde attributes so the serialized form
//! matches the backend exactly; the frontend never invents its own shapes.

pub mod domain;
pub mod shared;
pub mod system;
