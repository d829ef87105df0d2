//! Record layer: the persisted teacher shape and the fields update can touch.

pub mod field;
pub mod teacher;

pub use field::Field;
pub use teacher::Teacher;
