pub mod handlers;
pub mod response;
mod routes;
pub mod upload;


pub use routes::create_router;
