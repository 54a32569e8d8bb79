// src/application/ports/mod.rs
pub mod events;
pub mod time;
