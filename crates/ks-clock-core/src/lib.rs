#![cfg_attr(not(test), no_std)]

//! Analog watch face core: hand geometry, entrance animation, background
//! selection and the render pass, independent of any display host.

pub mod angle;
pub mod animation;
pub mod app;
pub mod background;
pub mod config;
#[cfg(feature = "embedded-graphics")]
pub mod graphics;
pub mod render;
pub mod resources;
pub mod time;
