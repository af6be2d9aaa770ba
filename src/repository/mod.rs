pub mod menu_item;
pub mod order;
pub mod restaurant;
pub mod user;
