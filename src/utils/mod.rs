//! Utility modules

pub mod keys;
pub mod string;
