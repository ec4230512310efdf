// src/client/mod.rs
//
// Client-side pieces: the REST client, the comment section view state
// and the context providers established at the composition root.

pub mod api;
pub mod comment_section;
pub mod providers;
