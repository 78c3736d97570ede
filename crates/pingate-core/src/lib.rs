//! Shared HTTP plumbing for pingate services: tracing setup, health probes,
//! request-id and CORS middleware, and serde helpers.

pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
