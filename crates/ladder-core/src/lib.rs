//! Ladder Core Library
//!
//! Core domain logic for the ladder word-ladder solver.

pub mod dictionary;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
