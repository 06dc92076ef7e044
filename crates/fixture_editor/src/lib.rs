//! fixture_editor: add / edit dialogs for body fixtures.
//!
//! Widgets only emit [`DialogAction`]s. The plugin reduces queued actions into
//! the single active dialog once per frame and reports closed dialogs through
//! [`FixtureDialogClosed`]. The same dialog types can also be driven
//! synchronously through [`AddFixtureDialog::show`].

mod command;
mod dialog;
mod draft;
mod filter_editor;
pub mod panels;
mod reducer;
#[cfg(feature = "ui")]
pub mod ui;
mod widgets;

pub use command::*;
pub use dialog::*;
pub use draft::*;
pub use filter_editor::*;
pub use panels::{
    CirclePanel, CommandEffect, DialogOwner, FixturePanel, InputPanel, PolygonPanel, RectanglePanel,
    ShapeKind, ShapePanel, TransformPanel,
};
pub use reducer::*;
#[cfg(feature = "ui")]
pub use ui::FixtureEditorUiPlugin;
pub use widgets::*;

use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone, Copy)]
pub enum FixtureEditorSet {
    /// Open requests become the active dialog.
    Input,
    /// Queued actions are applied to the active dialog.
    Apply,
    /// Dialog and message rendering.
    Present,
}

pub struct FixtureEditorPlugin {
    pub defaults: FixtureDefaults,
    pub add_title: String,
    pub edit_title: String,
    pub icon: Option<String>,
}

impl Default for FixtureEditorPlugin {
    fn default() -> Self {
        Self {
            defaults: FixtureDefaults::default(),
            add_title: "Add Fixture".into(),
            edit_title: "Edit Fixture".into(),
            icon: None,
        }
    }
}

/// Titles and icon used for dialogs opened through events.
#[derive(Resource, Debug, Clone)]
pub struct DialogChrome {
    pub add_title: String,
    pub edit_title: String,
    pub icon: Option<String>,
}

impl Plugin for FixtureEditorPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<OpenAddFixtureDialog>()
            .add_event::<OpenEditFixtureDialog>()
            .add_event::<FixtureDialogInput>()
            .add_event::<FixtureDialogClosed>()
            .insert_resource(self.defaults.clone())
            .insert_resource(DialogChrome {
                add_title: self.add_title.clone(),
                edit_title: self.edit_title.clone(),
                icon: self.icon.clone(),
            })
            .init_resource::<ActiveFixtureDialog>()
            .init_resource::<DialogMessages>()
            .configure_sets(
                Update,
                (FixtureEditorSet::Input, FixtureEditorSet::Apply, FixtureEditorSet::Present).chain(),
            )
            .add_systems(Update, open_fixture_dialogs.in_set(FixtureEditorSet::Input))
            .add_systems(Update, apply_dialog_input.in_set(FixtureEditorSet::Apply));
    }
}
