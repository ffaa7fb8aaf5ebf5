// src/lib.rs

//! Layered orders API: entities in `models`, persistence contracts and
//! backends in `repositories`, business rules in `services`, HTTP in `web`.
//!
//! The binary in `main.rs` wires the MongoDB-backed variants together; the
//! integration tests drive the same services over the in-memory variants.

pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod repositories;
pub mod services;
pub mod state;
pub mod web;
