// src/system/mod.rs

pub mod env;
pub mod fs;
