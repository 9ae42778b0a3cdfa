pub mod app;
pub mod input;
pub mod render;
pub mod sidebar;
pub mod theme;

pub use app::run;
