pub mod barrier;
pub mod pin;
