//! Sub-forms hosted by the fixture dialogs.

mod fixture;
mod shape;
mod transform;

pub use fixture::*;
pub use shape::*;
pub use transform::*;

/// Window that owns a dialog; sub-forms report invalid input through it.
pub trait DialogOwner {
    fn show_message(&mut self, title: &str, message: &str);
}

pub trait InputPanel {
    fn is_valid_input(&self) -> bool;
    fn show_invalid_input_message(&self, owner: &mut dyn DialogOwner);
}

pub(crate) const INVALID_INPUT_TITLE: &str = "Invalid Input";
