use bevy::prelude::*;

use super::{DialogOwner, InputPanel, INVALID_INPUT_TITLE};
use crate::command::TransformCommand;
use crate::widgets::{parse_number, TextField};

pub const LOCAL_TRANSFORM_HELP: &str = "The local transform moves and rotates a fixture within body \
coordinates, relative to the body's center of mass. It is applied directly to the fixture's shape \
data and is not stored separately.";

/// Local translation and rotation baked into the shape on confirm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformPanel {
    fields: [TextField; 3],
}

impl Default for TransformPanel {
    fn default() -> Self {
        Self {
            fields: [
                TextField::new("Translation x", "0.0"),
                TextField::new("Translation y", "0.0"),
                TextField::new("Rotation (degrees)", "0.0"),
            ],
        }
    }
}

/// Empty text reads as zero.
fn value_of(field: &TextField) -> Option<f32> {
    if field.text.trim().is_empty() {
        Some(0.0)
    } else {
        parse_number(&field.text)
    }
}

impl TransformPanel {
    pub fn fields(&self) -> &[TextField] {
        &self.fields
    }

    pub fn apply(&mut self, cmd: TransformCommand) {
        match cmd {
            TransformCommand::SetField { index, text } => {
                if let Some(field) = self.fields.get_mut(index) {
                    field.text = text;
                }
            }
        }
    }

    pub fn translation(&self) -> Vec2 {
        Vec2::new(
            value_of(&self.fields[0]).unwrap_or(0.0),
            value_of(&self.fields[1]).unwrap_or(0.0),
        )
    }

    /// Radians.
    pub fn rotation(&self) -> f32 {
        value_of(&self.fields[2]).unwrap_or(0.0).to_radians()
    }
}

impl InputPanel for TransformPanel {
    fn is_valid_input(&self) -> bool {
        self.fields.iter().all(|f| value_of(f).is_some())
    }

    fn show_invalid_input_message(&self, owner: &mut dyn DialogOwner) {
        let bad: Vec<&str> = self.fields.iter().filter(|f| value_of(f).is_none()).map(|f| f.label).collect();
        owner.show_message(
            INVALID_INPUT_TITLE,
            &format!("The local transform needs numeric values for: {}.", bad.join(", ")),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(panel: &mut TransformPanel, index: usize, text: &str) {
        panel.apply(TransformCommand::SetField { index, text: text.into() });
    }

    #[test]
    fn degrees_become_radians() {
        let mut p = TransformPanel::default();
        set(&mut p, 2, "180");
        assert!((p.rotation() - std::f32::consts::PI).abs() < 1e-6);
    }

    #[test]
    fn empty_is_zero_and_garbage_invalid() {
        let mut p = TransformPanel::default();
        set(&mut p, 0, "");
        set(&mut p, 1, "2");
        assert!(p.is_valid_input());
        assert_eq!(p.translation(), Vec2::new(0.0, 2.0));
        set(&mut p, 0, "two");
        assert!(!p.is_valid_input());
    }
}
