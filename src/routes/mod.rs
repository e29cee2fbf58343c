pub mod api;
pub mod cors;

pub use api::create_routes;
