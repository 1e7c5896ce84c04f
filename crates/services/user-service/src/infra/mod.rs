//! Infrastructure adapters.

mod clock;

pub use clock::FixedClock;
