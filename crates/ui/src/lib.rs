#![allow(non_snake_case)]

pub mod app;
pub mod routes;
mod views;

pub use app::render_page;
pub use routes::Page;
