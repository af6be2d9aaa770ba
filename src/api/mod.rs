pub mod auth;
pub mod menu;
pub mod order;
pub mod restaurant;
pub mod user;

mod router;
pub use router::get_router;
