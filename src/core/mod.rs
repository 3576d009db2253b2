// src/core/mod.rs

pub mod bank;
pub mod directory;
pub mod ledger;
pub mod session;
