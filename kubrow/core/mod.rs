pub use self::app::{App, RenderOutput, RenderedTable, Settings};
pub use self::input::read_manifests;

mod app;
mod input;
