//! Command implementations

pub mod dispatch;
pub mod neighbors;
pub mod solve;
