pub mod block;
pub mod compress;
pub mod error;
pub mod trace;
