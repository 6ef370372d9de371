//! Headless logo canvas editor for the restaurant brand builder.
//!
//! The crate owns the full editing model: the element list and its linear
//! undo/redo history ([`canvas`]), pointer-driven move/resize/rotate
//! gestures ([`editor`], [`input`]), spatially indexed hit-testing
//! ([`spatial_index`], [`hit_testing`]), a display-list render surface
//! ([`render`]), the starter template catalog ([`template`]), and the
//! persisted project document around it all ([`project`], [`store`],
//! [`export`]). Embedders feed screen-space pointer events in and paint the
//! scene that comes back out.

pub mod canvas;
pub mod constants;
pub mod editor;
pub mod export;
pub mod hit_testing;
pub mod input;
pub mod logging;
pub mod perf;
pub mod project;
pub mod render;
pub mod selection;
pub mod spatial_index;
pub mod store;
pub mod template;
pub mod transform;
pub mod types;

pub use canvas::Canvas;
pub use editor::Editor;
pub use input::{InputState, Modifiers};
pub use project::Project;
pub use selection::SelectionManager;
pub use store::{BuilderMode, Store};
pub use transform::ResizeHandle;
pub use types::{CanvasElement, ElementContent, ElementRect, ShapeKind, TextAlign};
