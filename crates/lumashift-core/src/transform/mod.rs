//! Transform engine — control parameters and evaluation.

pub mod evaluate;
pub mod params;
