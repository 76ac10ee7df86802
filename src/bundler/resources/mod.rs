//! Resource validation for bundled assets.

pub mod icons;
