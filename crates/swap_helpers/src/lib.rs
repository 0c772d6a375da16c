mod app;
pub use app::*;

pub mod input;
pub mod title_bar;
