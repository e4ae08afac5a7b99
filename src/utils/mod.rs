//! Utility modules shared by the render and convert stages.

pub mod exec;
pub mod fs;
pub mod hash;
pub mod html;
pub mod path;
