pub(crate) mod button;
pub(crate) mod input;
pub(crate) mod render;
pub(crate) mod session;
pub(crate) mod slot;
pub(crate) mod step;

pub mod app;
pub mod assets;
