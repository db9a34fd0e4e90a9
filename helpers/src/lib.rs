pub mod buffer;
pub mod general;
