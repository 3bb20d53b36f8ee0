//! Entity ID prefixes.
//!
//! IDs are formatted as `"<prefix>-<8 hex chars>"`, e.g. `"mr-a3f8b2c1"`.

pub const PREFIX_PROJECT: &str = "prj";
pub const PREFIX_RESEARCH: &str = "mr";

pub const ALL_PREFIXES: [&str; 2] = [PREFIX_PROJECT, PREFIX_RESEARCH];
