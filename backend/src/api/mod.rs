//! Report API endpoints and module exports.

pub mod customers;
pub mod placements;
pub mod price_analysis;
pub mod problems;
pub mod products;
pub mod visits;
