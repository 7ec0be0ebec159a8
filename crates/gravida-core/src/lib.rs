//! gravida-core
//!
//! Pure domain types for antenatal screening — measurement inputs,
//! prediction results, and the report envelope. No I/O anywhere; this is
//! the shared vocabulary of the Gravida system.

pub mod error;
pub mod models;
