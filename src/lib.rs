pub mod assets;
pub mod bands;
pub mod catalog;
pub mod ephemeral;
mod error;
pub mod manifest;
pub mod product;
pub mod properties;
pub mod resolution;
pub mod stac;

pub use error::{Error, Result};
