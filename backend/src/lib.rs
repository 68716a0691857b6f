//! Server-side query composition and execution for the report surfaces.

pub mod api;
pub mod db;
pub mod media;
pub mod query;
pub mod server_extra;
