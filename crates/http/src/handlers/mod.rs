pub mod questions;
pub mod similarity;
