use bevy::prelude::*;
use fixture_model::Fixture;

use crate::{
    AddFixtureDialog, DialogAction, DialogChrome, DialogOwner, DialogState, EditFixtureDialog,
    FixtureDefaults, ShapeKind,
};

/// Ask for an add-fixture dialog whose result should be attached to `body`.
#[derive(Event, Debug, Clone, Copy)]
pub struct OpenAddFixtureDialog {
    pub body: Entity,
    pub shape: ShapeKind,
}

/// Ask for the property editor of the `Fixture` component on `fixture`.
#[derive(Event, Debug, Clone, Copy)]
pub struct OpenEditFixtureDialog {
    pub fixture: Entity,
}

/// One widget interaction with the active dialog.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct FixtureDialogInput(pub DialogAction);

#[derive(Debug, Clone, PartialEq)]
pub enum DialogOutcome {
    /// New fixture for the body the dialog was opened for.
    Added(Fixture),
    /// Full replacement for the edited fixture.
    Edited(Fixture),
    Canceled,
}

#[derive(Event, Debug, Clone, PartialEq)]
pub struct FixtureDialogClosed {
    /// Body for add dialogs, fixture entity for edit dialogs.
    pub target: Entity,
    pub outcome: DialogOutcome,
}

/// At most one fixture dialog is open at a time.
#[derive(Resource, Default)]
pub enum ActiveFixtureDialog {
    #[default]
    None,
    Add {
        body: Entity,
        dialog: AddFixtureDialog,
    },
    Edit {
        fixture: Entity,
        original: Fixture,
        dialog: EditFixtureDialog,
    },
}

impl ActiveFixtureDialog {
    pub fn is_none(&self) -> bool {
        matches!(self, ActiveFixtureDialog::None)
    }

    pub fn state(&self) -> Option<DialogState> {
        match self {
            ActiveFixtureDialog::None => None,
            ActiveFixtureDialog::Add { dialog, .. } => Some(dialog.state()),
            ActiveFixtureDialog::Edit { dialog, .. } => Some(dialog.state()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogMessage {
    pub title: String,
    pub message: String,
}

/// Messages raised by dialog panels, shown (and dismissed) by the UI.
#[derive(Resource, Debug, Default)]
pub struct DialogMessages {
    pending: Vec<DialogMessage>,
}

impl DialogMessages {
    pub fn current(&self) -> Option<&DialogMessage> {
        self.pending.first()
    }

    pub fn dismiss(&mut self) -> Option<DialogMessage> {
        (!self.pending.is_empty()).then(|| self.pending.remove(0))
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DialogMessage> {
        self.pending.iter()
    }
}

impl DialogOwner for DialogMessages {
    fn show_message(&mut self, title: &str, message: &str) {
        warn!("{title}: {message}");
        self.pending.push(DialogMessage { title: title.to_string(), message: message.to_string() });
    }
}

pub fn open_fixture_dialogs(
    mut add_requests: EventReader<OpenAddFixtureDialog>,
    mut edit_requests: EventReader<OpenEditFixtureDialog>,
    fixtures: Query<&Fixture>,
    defaults: Res<FixtureDefaults>,
    chrome: Res<DialogChrome>,
    mut active: ResMut<ActiveFixtureDialog>,
) {
    for req in add_requests.read() {
        if !active.is_none() {
            warn!("add fixture request for {:?} ignored: a dialog is already open", req.body);
            continue;
        }
        info!("opening add fixture dialog ({:?}) for {:?}", req.shape, req.body);
        *active = ActiveFixtureDialog::Add {
            body: req.body,
            dialog: AddFixtureDialog::with_defaults(
                chrome.icon.clone(),
                chrome.add_title.clone(),
                req.shape.panel(),
                &defaults,
            ),
        };
    }
    for req in edit_requests.read() {
        if !active.is_none() {
            warn!("edit request for {:?} ignored: a dialog is already open", req.fixture);
            continue;
        }
        let Ok(fixture) = fixtures.get(req.fixture) else {
            warn!("edit request for {:?} ignored: no fixture on that entity", req.fixture);
            continue;
        };
        info!("opening fixture editor for '{}' ({:?})", fixture.name, req.fixture);
        *active = ActiveFixtureDialog::Edit {
            fixture: req.fixture,
            original: fixture.clone(),
            dialog: EditFixtureDialog::new(chrome.edit_title.clone(), fixture),
        };
    }
}

/// Applies this frame's dialog input in arrival order and closes finished dialogs.
pub fn apply_dialog_input(
    mut inputs: EventReader<FixtureDialogInput>,
    mut active: ResMut<ActiveFixtureDialog>,
    mut messages: ResMut<DialogMessages>,
    mut closed: EventWriter<FixtureDialogClosed>,
) {
    for FixtureDialogInput(action) in inputs.read() {
        let finished = match &mut *active {
            ActiveFixtureDialog::None => {
                debug!("dialog input {action:?} with no open dialog");
                continue;
            }
            ActiveFixtureDialog::Add { body, dialog } => {
                match dialog.handle(action.clone(), &mut *messages) {
                    DialogState::Open => None,
                    DialogState::Confirmed => match dialog.take_result() {
                        Some(fixture) => Some((*body, DialogOutcome::Added(fixture))),
                        None => Some((*body, DialogOutcome::Canceled)),
                    },
                    DialogState::Canceled => Some((*body, DialogOutcome::Canceled)),
                }
            }
            ActiveFixtureDialog::Edit { fixture, original, dialog } => {
                match dialog.handle(action.clone(), &mut *messages) {
                    DialogState::Open => None,
                    DialogState::Confirmed => match dialog.result(original) {
                        Some(edited) => Some((*fixture, DialogOutcome::Edited(edited))),
                        None => Some((*fixture, DialogOutcome::Canceled)),
                    },
                    DialogState::Canceled => Some((*fixture, DialogOutcome::Canceled)),
                }
            }
        };
        if let Some((target, outcome)) = finished {
            *active = ActiveFixtureDialog::None;
            closed.write(FixtureDialogClosed { target, outcome });
        }
    }
}
