// tests/support/mocks/mod.rs
pub mod time;

pub use time::{TestClock, fixed_now};
