use bevy::prelude::*;
use fixture_model::{ConvexShape, ShapeError};
use serde::Deserialize;

use super::{DialogOwner, InputPanel, INVALID_INPUT_TITLE};
use crate::command::ShapeCommand;
use crate::widgets::{format_number, parse_number, TextField};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
pub enum ShapeKind {
    #[default]
    Circle,
    Rectangle,
    Polygon,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Circle, ShapeKind::Rectangle, ShapeKind::Polygon];

    pub fn label(self) -> &'static str {
        match self {
            ShapeKind::Circle => "Circle",
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Polygon => "Polygon",
        }
    }

    pub fn panel(self) -> Box<dyn ShapePanel> {
        match self {
            ShapeKind::Circle => Box::new(CirclePanel::new()),
            ShapeKind::Rectangle => Box::new(RectanglePanel::new()),
            ShapeKind::Polygon => Box::new(PolygonPanel::new()),
        }
    }
}

/// Shape tab of the add-fixture dialog.
pub trait ShapePanel: InputPanel + Send + Sync {
    fn kind(&self) -> ShapeKind;
    fn as_input_panel(&self) -> &dyn InputPanel;
    fn default_shape(&self) -> ConvexShape;
    /// Shape described by the current field text.
    fn shape(&self) -> Result<ConvexShape, ShapeError>;
    fn fields(&self) -> &[TextField];
    fn fields_mut(&mut self) -> &mut [TextField];
    /// Field text describing `shape`.
    fn fill_fields(&mut self, shape: &ConvexShape);

    fn apply(&mut self, cmd: ShapeCommand) {
        match cmd {
            ShapeCommand::SetField { index, text } => {
                if let Some(field) = self.fields_mut().get_mut(index) {
                    field.text = text;
                }
            }
            ShapeCommand::Reset => {
                let shape = self.default_shape();
                self.fill_fields(&shape);
            }
        }
    }
}

fn field_value(fields: &[TextField], index: usize) -> f32 {
    fields.get(index).and_then(|f| parse_number(&f.text)).unwrap_or(f32::NAN)
}

fn report(panel: &dyn ShapePanel, owner: &mut dyn DialogOwner) {
    if let Err(e) = panel.shape() {
        owner.show_message(INVALID_INPUT_TITLE, &format!("{} shape: {e}.", panel.kind().label()));
    }
}

macro_rules! shape_input_panel {
    ($panel:ty) => {
        impl InputPanel for $panel {
            fn is_valid_input(&self) -> bool {
                self.shape().is_ok()
            }

            fn show_invalid_input_message(&self, owner: &mut dyn DialogOwner) {
                report(self, owner);
            }
        }
    };
}

#[derive(Debug, Clone)]
pub struct CirclePanel {
    fields: [TextField; 1],
}

impl CirclePanel {
    pub const DEFAULT_RADIUS: f32 = 0.5;

    pub fn new() -> Self {
        Self { fields: [TextField::new("Radius", format_number(Self::DEFAULT_RADIUS))] }
    }
}

impl Default for CirclePanel {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapePanel for CirclePanel {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
    }

    fn as_input_panel(&self) -> &dyn InputPanel {
        self
    }

    fn default_shape(&self) -> ConvexShape {
        ConvexShape::Circle { center: Vec2::ZERO, radius: Self::DEFAULT_RADIUS }
    }

    fn shape(&self) -> Result<ConvexShape, ShapeError> {
        ConvexShape::circle(field_value(&self.fields, 0))
    }

    fn fields(&self) -> &[TextField] {
        &self.fields
    }

    fn fields_mut(&mut self) -> &mut [TextField] {
        &mut self.fields
    }

    fn fill_fields(&mut self, shape: &ConvexShape) {
        if let ConvexShape::Circle { radius, .. } = shape {
            self.fields[0].text = format_number(*radius);
        }
    }
}

shape_input_panel!(CirclePanel);

#[derive(Debug, Clone)]
pub struct RectanglePanel {
    fields: [TextField; 2],
}

impl RectanglePanel {
    pub const DEFAULT_SIZE: f32 = 1.0;

    pub fn new() -> Self {
        Self {
            fields: [
                TextField::new("Width", format_number(Self::DEFAULT_SIZE)),
                TextField::new("Height", format_number(Self::DEFAULT_SIZE)),
            ],
        }
    }
}

impl Default for RectanglePanel {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapePanel for RectanglePanel {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Rectangle
    }

    fn as_input_panel(&self) -> &dyn InputPanel {
        self
    }

    fn default_shape(&self) -> ConvexShape {
        let hs = Self::DEFAULT_SIZE * 0.5;
        ConvexShape::Polygon {
            vertices: vec![Vec2::new(-hs, -hs), Vec2::new(hs, -hs), Vec2::new(hs, hs), Vec2::new(-hs, hs)],
        }
    }

    fn shape(&self) -> Result<ConvexShape, ShapeError> {
        ConvexShape::rectangle(field_value(&self.fields, 0), field_value(&self.fields, 1))
    }

    fn fields(&self) -> &[TextField] {
        &self.fields
    }

    fn fields_mut(&mut self) -> &mut [TextField] {
        &mut self.fields
    }

    fn fill_fields(&mut self, shape: &ConvexShape) {
        if let ConvexShape::Polygon { vertices } = shape {
            let (min, max) = vertices
                .iter()
                .fold((Vec2::INFINITY, Vec2::NEG_INFINITY), |(lo, hi), v| (lo.min(*v), hi.max(*v)));
            let size = max - min;
            self.fields[0].text = format_number(size.x);
            self.fields[1].text = format_number(size.y);
        }
    }
}

shape_input_panel!(RectanglePanel);

/// Free-form convex polygon typed as `x y; x y; ...`.
#[derive(Debug, Clone)]
pub struct PolygonPanel {
    fields: [TextField; 1],
}

impl PolygonPanel {
    pub fn new() -> Self {
        let mut panel = Self { fields: [TextField::new("Vertices", "")] };
        let shape = panel.default_shape();
        panel.fill_fields(&shape);
        panel
    }
}

impl Default for PolygonPanel {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses `x y; x y; ...` (commas between coordinates are accepted too).
pub fn parse_vertices(text: &str) -> Option<Vec<Vec2>> {
    text.split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|pair| {
            let mut it = pair.split(|c: char| c == ',' || c.is_whitespace()).filter(|s| !s.is_empty());
            let x = parse_number(it.next()?)?;
            let y = parse_number(it.next()?)?;
            it.next().is_none().then_some(Vec2::new(x, y))
        })
        .collect()
}

impl ShapePanel for PolygonPanel {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Polygon
    }

    fn as_input_panel(&self) -> &dyn InputPanel {
        self
    }

    fn default_shape(&self) -> ConvexShape {
        ConvexShape::Polygon {
            vertices: vec![Vec2::new(-0.5, -0.5), Vec2::new(0.5, -0.5), Vec2::new(0.0, 0.5)],
        }
    }

    fn shape(&self) -> Result<ConvexShape, ShapeError> {
        // unparsable text counts as a non-finite vertex
        let vertices = parse_vertices(&self.fields[0].text).ok_or(ShapeError::NonFiniteVertex(0))?;
        ConvexShape::polygon(vertices)
    }

    fn fields(&self) -> &[TextField] {
        &self.fields
    }

    fn fields_mut(&mut self) -> &mut [TextField] {
        &mut self.fields
    }

    fn fill_fields(&mut self, shape: &ConvexShape) {
        if let ConvexShape::Polygon { vertices } = shape {
            self.fields[0].text = vertices
                .iter()
                .map(|v| format!("{} {}", format_number(v.x), format_number(v.y)))
                .collect::<Vec<_>>()
                .join("; ");
        }
    }
}

shape_input_panel!(PolygonPanel);
