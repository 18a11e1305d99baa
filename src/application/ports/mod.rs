// src/application/ports/mod.rs
pub mod markdown;
pub mod time;
