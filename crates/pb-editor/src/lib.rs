pub mod gesture;
pub mod input;

pub use gesture::{GestureController, ToolKind};
pub use input::PointerEvent;
