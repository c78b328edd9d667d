pub mod export;
pub mod hit;

pub use export::{ExportLayer, export_layout, export_size};
pub use hit::{HANDLE_HIT_RADIUS, handle_position, hit_handle, hit_test, layer_contains};
