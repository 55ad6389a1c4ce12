// src/services/mod.rs
pub mod anthropic;
pub mod assistant;
pub mod contact_store;
pub mod metrics;
pub mod transcript;
