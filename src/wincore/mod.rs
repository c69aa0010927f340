pub type Result<T> = anyhow::Result<T>;

pub mod event;
pub mod geometry;
pub mod input;
pub mod screen;
pub mod window;
