// src/core/mod.rs

pub mod kv_parser;
pub mod paths;
pub mod registrar;
pub mod settings;
