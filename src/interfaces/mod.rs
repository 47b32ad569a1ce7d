pub mod api;
pub mod console;

pub use api::routes::create_api_routes;
