//! Cars Entity Module

pub mod car;
