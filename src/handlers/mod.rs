pub mod health;
pub mod list;
pub mod pages;

pub use health::health_handler;
pub use list::list_handler;
pub use pages::pages_handler;
