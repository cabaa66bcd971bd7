pub mod colour;
pub mod complex;
pub mod iteration_result;
pub mod pixel_buffer;
pub mod point;
pub mod viewport;
