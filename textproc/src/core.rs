// src/core.rs
pub mod frequency;
pub mod normalizer;
pub mod statistics;
