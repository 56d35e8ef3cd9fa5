//! API Routes
//!
//! Route handlers organized by functionality.

pub mod analyze;
pub mod health;
pub mod page;
