//! Generates placeholder profile pictures for a staff directory: solid-coloured squares with a
//! person's name and title written across the middle.

pub mod context;
pub mod error;
pub mod font;
pub mod image;
pub mod layout;
pub mod staff;
pub mod utils;

pub use crate::{
    context::{Config, Generator},
    error::{Error, Result},
    image::PlaceholderSpec,
    staff::STAFF,
};
