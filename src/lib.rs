//! Terraplane library - interactive deformable terrain mesh demo

pub mod camera;
pub mod cli;
pub mod params;
pub mod rendering;
pub mod terrain;
