// Page routing for the clinic appointment web application

pub mod api_doc;
pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod pattern;
pub mod routes;
pub mod state;
pub mod table;
pub mod view;
