// src/handlers/mod.rs

pub mod auth;
pub mod comment;
