//! Row types and request DTOs.

pub mod video;
