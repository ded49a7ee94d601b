//! Host-side timing.

pub mod clock;

pub use clock::*;
