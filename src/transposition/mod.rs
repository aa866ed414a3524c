pub mod note_transpose;
pub mod scale_builder;
pub mod scale_transpose;

pub use note_transpose::{transpose, transpose_by_interval, transpose_note};
pub use scale_builder::build_scale;
pub use scale_transpose::{transpose_scale, transpose_scale_by_interval, transpose_scale_by_keys};
