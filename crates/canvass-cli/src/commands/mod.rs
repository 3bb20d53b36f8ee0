//! Command handlers for `cnv`.

pub mod project;
pub mod research;
