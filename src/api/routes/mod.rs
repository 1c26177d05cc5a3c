//! API Routes
//!
//! Route handlers organized by functionality.

pub mod controls;
pub mod export;
pub mod health;
pub mod page;
pub mod sessions;
