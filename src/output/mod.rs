//! Console and file output for generation runs

pub mod json;
pub mod text;
