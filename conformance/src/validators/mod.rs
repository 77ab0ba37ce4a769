//! Validators, one module per artifact family.

pub mod catalog;
pub mod charts;
pub mod decoder;
pub mod table;
