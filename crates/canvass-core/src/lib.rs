//! # canvass-core
//!
//! Core types and error types for Canvass.
//!
//! This crate provides the foundational types shared across all Canvass crates:
//! - Entity structs for the market-research domain (projects, research entries,
//!   target segments)
//! - The write payload (`ResearchDraft`) shared by insert and update
//! - View-tab, example-field, and segment-field enums
//! - ID prefix constants
//! - Cross-cutting error types
//! - CLI response types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod responses;
