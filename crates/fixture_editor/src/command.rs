//! Commands emitted by the dialog widgets. Panels apply them; widgets never
//! touch the draft directly.

use fixture_model::FilterAxis;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterKind {
    #[default]
    Default,
    Category,
}

/// A selection-changed notification from one of the filter lists.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListSelection {
    pub indices: Vec<usize>,
    /// Set while the user is still dragging a selection; such events never reach the filter.
    pub adjusting: bool,
    /// Row later shift-clicks extend from; `None` keeps the list's current anchor.
    pub anchor: Option<usize>,
}

impl ListSelection {
    pub fn settled(indices: impl Into<Vec<usize>>) -> Self {
        Self { indices: indices.into(), adjusting: false, anchor: None }
    }

    pub fn adjusting(indices: impl Into<Vec<usize>>) -> Self {
        Self { indices: indices.into(), adjusting: true, anchor: None }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FixtureCommand {
    SetName(String),
    /// Typed density text, not yet committed.
    EditDensityText(String),
    /// Field lost focus: parse, clamp and commit the density text.
    CommitDensityText,
    SetDensity(f32),
    /// Slider position 0..=100.
    SetRestitution(i32),
    /// Slider position 0..=100.
    SetFriction(i32),
    SetFilterKind(FilterKind),
    SelectFilterBits { axis: FilterAxis, selection: ListSelection },
    SetSensor(bool),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeCommand {
    SetField { index: usize, text: String },
    /// Restore the fields from the panel's default shape.
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformCommand {
    SetField { index: usize, text: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogTab {
    #[default]
    Shape,
    Fixture,
    LocalTransform,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DialogAction {
    SelectTab(DialogTab),
    Shape(ShapeCommand),
    Fixture(FixtureCommand),
    Transform(TransformCommand),
    Confirm,
    Cancel,
}

impl From<FixtureCommand> for DialogAction {
    fn from(cmd: FixtureCommand) -> Self {
        Self::Fixture(cmd)
    }
}

impl From<ShapeCommand> for DialogAction {
    fn from(cmd: ShapeCommand) -> Self {
        Self::Shape(cmd)
    }
}

impl From<TransformCommand> for DialogAction {
    fn from(cmd: TransformCommand) -> Self {
        Self::Transform(cmd)
    }
}
