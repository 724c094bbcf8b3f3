//! HTTP API handlers for navemae-artists

pub mod artists;
pub mod buildinfo;
pub mod health;
pub mod ui;

pub use artists::get_artists;
pub use buildinfo::get_build_info;
pub use health::health_routes;
pub use ui::{serve_dashboard, serve_dashboard_css};
