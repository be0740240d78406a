pub mod canvas;
pub(crate) mod font;
pub mod layout;
pub mod renderer;
