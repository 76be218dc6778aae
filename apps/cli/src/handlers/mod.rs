pub mod composed;
pub mod primitive;
