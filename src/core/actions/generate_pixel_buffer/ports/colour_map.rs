use std::error::Error;

use crate::core::data::colour::Colour;

pub trait ColourMap<T> {
    type Failure: Error;

    fn map(&self, value: T) -> Result<Colour, Self::Failure>;

    fn display_name(&self) -> &str;
}
