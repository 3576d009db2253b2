// src/utils/mod.rs

pub mod guard;
