//! Constants of the tugboat design

pub mod coursework;
pub mod physical;

pub use coursework::{COURSEWORK, EDITORIAL_CLAIMS};
