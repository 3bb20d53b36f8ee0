//! CRUD repositories implemented on [`crate::LibsqlStore`].

pub mod project;
pub mod research;
