// src/utils/mod.rs

pub mod level;
