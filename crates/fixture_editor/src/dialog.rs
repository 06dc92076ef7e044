//! Confirmation dialogs: the tabbed add-fixture dialog and the standalone
//! fixture property editor.

use bevy::prelude::*;
use fixture_model::{ConvexShape, Fixture, ShapeError};

use crate::command::{DialogAction, DialogTab};
use crate::draft::{FixtureDefaults, FixtureDraft};
use crate::panels::{DialogOwner, FixturePanel, InputPanel, ShapePanel, TransformPanel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogState {
    #[default]
    Open,
    Canceled,
    Confirmed,
}

impl DialogState {
    pub fn is_terminal(self) -> bool {
        self != DialogState::Open
    }
}

/// Checks `panels` front to back. The first invalid one shows its message and
/// its position is returned; panels after it are not consulted.
pub fn validate_in_order(panels: &[&dyn InputPanel], owner: &mut dyn DialogOwner) -> Result<(), usize> {
    for (i, panel) in panels.iter().enumerate() {
        if !panel.is_valid_input() {
            panel.show_invalid_input_message(owner);
            return Err(i);
        }
    }
    Ok(())
}

/// Drives a dialog until it closes: supplies user actions and displays messages.
pub trait DialogHost: DialogOwner {
    fn next_action(&mut self, dialog: &AddFixtureDialog) -> DialogAction;
}

/// Shape, fixture and local transform tabs; confirm produces a new [`Fixture`].
pub struct AddFixtureDialog {
    title: String,
    icon: Option<String>,
    state: DialogState,
    tab: DialogTab,
    shape_panel: Box<dyn ShapePanel>,
    fixture_panel: FixturePanel,
    transform_panel: TransformPanel,
    result: Option<Fixture>,
}

impl AddFixtureDialog {
    pub fn new(icon: Option<String>, title: impl Into<String>, shape_panel: Box<dyn ShapePanel>) -> Self {
        Self::with_defaults(icon, title, shape_panel, &FixtureDefaults::default())
    }

    pub fn with_defaults(
        icon: Option<String>,
        title: impl Into<String>,
        shape_panel: Box<dyn ShapePanel>,
        defaults: &FixtureDefaults,
    ) -> Self {
        Self {
            title: title.into(),
            icon,
            state: DialogState::Open,
            tab: DialogTab::Shape,
            shape_panel,
            fixture_panel: FixturePanel::new(defaults.draft()),
            transform_panel: TransformPanel::default(),
            result: None,
        }
    }

    /// Runs the dialog modally on `host`. Returns the new fixture, or `None` when canceled.
    pub fn show<H: DialogHost>(
        host: &mut H,
        icon: Option<String>,
        title: impl Into<String>,
        shape_panel: Box<dyn ShapePanel>,
    ) -> Option<Fixture> {
        let mut dialog = Self::new(icon, title, shape_panel);
        while !dialog.state.is_terminal() {
            let action = host.next_action(&dialog);
            dialog.handle(action, host);
        }
        dialog.take_result()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    pub fn state(&self) -> DialogState {
        self.state
    }

    pub fn tab(&self) -> DialogTab {
        self.tab
    }

    pub fn shape_panel(&self) -> &dyn ShapePanel {
        self.shape_panel.as_ref()
    }

    pub fn fixture_panel(&self) -> &FixturePanel {
        &self.fixture_panel
    }

    pub fn transform_panel(&self) -> &TransformPanel {
        &self.transform_panel
    }

    /// Applies one user action. Ignored once the dialog has closed.
    pub fn handle(&mut self, action: DialogAction, owner: &mut dyn DialogOwner) -> DialogState {
        if self.state.is_terminal() {
            return self.state;
        }
        match action {
            DialogAction::SelectTab(tab) => self.tab = tab,
            DialogAction::Shape(cmd) => self.shape_panel.apply(cmd),
            DialogAction::Fixture(cmd) => {
                self.fixture_panel.apply(cmd);
            }
            DialogAction::Transform(cmd) => self.transform_panel.apply(cmd),
            DialogAction::Cancel => {
                self.state = DialogState::Canceled;
                info!("{}: canceled", self.title);
            }
            DialogAction::Confirm => self.confirm(owner),
        }
        self.state
    }

    fn confirm(&mut self, owner: &mut dyn DialogOwner) {
        let panels: [&dyn InputPanel; 3] =
            [self.shape_panel.as_input_panel(), &self.fixture_panel, &self.transform_panel];
        if let Err(i) = validate_in_order(&panels, owner) {
            self.tab = [DialogTab::Shape, DialogTab::Fixture, DialogTab::LocalTransform][i];
            debug!("{}: {:?} tab rejected its input", self.title, self.tab);
            return;
        }
        match self.commit() {
            Ok(fixture) => {
                info!(
                    "{}: confirmed {} fixture '{}'",
                    self.title,
                    fixture.shape.kind_name(),
                    fixture.name
                );
                self.result = Some(fixture);
                self.state = DialogState::Confirmed;
            }
            Err(e) => {
                warn!("{}: shape rejected after validation: {e}", self.title);
                self.tab = DialogTab::Shape;
                self.shape_panel.show_invalid_input_message(owner);
            }
        }
    }

    fn commit(&self) -> Result<Fixture, ShapeError> {
        let mut shape: ConvexShape = self.shape_panel.shape()?;
        let translation = self.transform_panel.translation();
        let rotation = self.transform_panel.rotation();
        if translation != Vec2::ZERO {
            shape.translate(translation);
        }
        if rotation != 0.0 {
            shape.rotate(rotation);
        }
        Ok(self.fixture_panel.draft().clone().into_fixture(shape))
    }

    /// The committed fixture; `Some` at most once, and only after confirm.
    pub fn take_result(&mut self) -> Option<Fixture> {
        match self.state {
            DialogState::Confirmed => self.result.take(),
            _ => None,
        }
    }
}

/// Fixture properties of an existing fixture; the shape is left untouched.
pub struct EditFixtureDialog {
    title: String,
    state: DialogState,
    panel: FixturePanel,
}

impl EditFixtureDialog {
    pub fn new(title: impl Into<String>, fixture: &Fixture) -> Self {
        Self {
            title: title.into(),
            state: DialogState::Open,
            panel: FixturePanel::new(FixtureDraft::from_fixture(fixture)),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn state(&self) -> DialogState {
        self.state
    }

    pub fn panel(&self) -> &FixturePanel {
        &self.panel
    }

    /// Only fixture commands, confirm and cancel apply here.
    pub fn handle(&mut self, action: DialogAction, owner: &mut dyn DialogOwner) -> DialogState {
        if self.state.is_terminal() {
            return self.state;
        }
        match action {
            DialogAction::Fixture(cmd) => {
                self.panel.apply(cmd);
            }
            DialogAction::Cancel => self.state = DialogState::Canceled,
            DialogAction::Confirm => {
                let panels: [&dyn InputPanel; 1] = [&self.panel];
                if validate_in_order(&panels, owner).is_ok() {
                    self.state = DialogState::Confirmed;
                }
            }
            other => debug!("{}: ignoring {other:?}", self.title),
        }
        self.state
    }

    /// Copy of `original` with the edited properties, when confirmed.
    pub fn result(&self, original: &Fixture) -> Option<Fixture> {
        if self.state != DialogState::Confirmed {
            return None;
        }
        let mut fixture = original.clone();
        self.panel.draft().clone().apply_to(&mut fixture);
        Some(fixture)
    }
}
