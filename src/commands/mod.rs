pub mod digest;
pub mod input;
pub mod schedule;
pub mod trace;
