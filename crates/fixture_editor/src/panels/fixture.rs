use bevy::prelude::*;
use fixture_model::{clamp_density, FilterAxis};

use super::{DialogOwner, InputPanel};
use crate::command::{FilterKind, FixtureCommand};
use crate::draft::FixtureDraft;
use crate::filter_editor::{FilterBitmaskEditor, FilterUpdate};
use crate::widgets::{format_number, parse_number, ScaledSlider};

/// Result of applying one [`FixtureCommand`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandEffect {
    /// Only widget state changed.
    WidgetOnly,
    Draft,
    Filter(FilterUpdate),
}

/// Name, density, friction, restitution, filter and sensor of a fixture.
#[derive(Debug, Clone, PartialEq)]
pub struct FixturePanel {
    draft: FixtureDraft,
    density_text: String,
    restitution: ScaledSlider,
    friction: ScaledSlider,
    filter: FilterBitmaskEditor,
}

impl FixturePanel {
    pub fn new(draft: FixtureDraft) -> Self {
        Self {
            density_text: format_number(draft.density),
            restitution: ScaledSlider::percent(draft.restitution),
            friction: ScaledSlider::percent(draft.friction),
            filter: FilterBitmaskEditor::from_filter(&draft.filter),
            draft,
        }
    }

    pub fn draft(&self) -> &FixtureDraft {
        &self.draft
    }

    pub fn into_draft(self) -> FixtureDraft {
        self.draft
    }

    pub fn density_text(&self) -> &str {
        &self.density_text
    }

    pub fn restitution_slider(&self) -> &ScaledSlider {
        &self.restitution
    }

    pub fn friction_slider(&self) -> &ScaledSlider {
        &self.friction
    }

    pub fn filter_editor(&self) -> &FilterBitmaskEditor {
        &self.filter
    }

    pub fn apply(&mut self, cmd: FixtureCommand) -> CommandEffect {
        match cmd {
            FixtureCommand::SetName(name) => {
                self.draft.name = name;
                CommandEffect::Draft
            }
            FixtureCommand::EditDensityText(text) => {
                self.density_text = text;
                CommandEffect::WidgetOnly
            }
            FixtureCommand::CommitDensityText => match parse_number(&self.density_text) {
                Some(value) => self.commit_density(value),
                None => {
                    // unparsable text reverts to the last committed value
                    self.density_text = format_number(self.draft.density);
                    CommandEffect::WidgetOnly
                }
            },
            FixtureCommand::SetDensity(value) => self.commit_density(value),
            FixtureCommand::SetRestitution(pos) => {
                self.restitution.set_value(pos);
                self.draft.restitution = self.restitution.scaled_value();
                CommandEffect::Draft
            }
            FixtureCommand::SetFriction(pos) => {
                self.friction.set_value(pos);
                self.draft.friction = self.friction.scaled_value();
                CommandEffect::Draft
            }
            FixtureCommand::SetFilterKind(kind) => {
                self.filter.set_kind(kind);
                CommandEffect::WidgetOnly
            }
            FixtureCommand::SelectFilterBits { axis, selection } => {
                match self.filter.select(axis, &selection, &mut self.draft.filter) {
                    Some(update) => {
                        if let FilterUpdate::Installed { category, mask } = update {
                            debug!("category filter installed (category={category:#x}, mask={mask:#x})");
                        }
                        CommandEffect::Filter(update)
                    }
                    None => CommandEffect::WidgetOnly,
                }
            }
            FixtureCommand::SetSensor(sensor) => {
                self.draft.sensor = sensor;
                CommandEffect::Draft
            }
        }
    }

    fn commit_density(&mut self, value: f32) -> CommandEffect {
        let clamped = clamp_density(value);
        if clamped != value {
            debug!("density {value} clamped to {clamped}");
        }
        self.draft.density = clamped;
        self.density_text = format_number(clamped);
        CommandEffect::Draft
    }

    pub fn filter_lists_visible(&self) -> bool {
        self.filter.lists_visible()
    }

    pub fn filter_kind(&self) -> FilterKind {
        self.filter.kind()
    }

    pub fn selected(&self, axis: FilterAxis) -> Vec<usize> {
        self.filter.list(axis).selected_indices()
    }
}

impl InputPanel for FixturePanel {
    /// Every field clamps itself, so there is nothing left to reject.
    fn is_valid_input(&self) -> bool {
        true
    }

    fn show_invalid_input_message(&self, _owner: &mut dyn DialogOwner) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::ListSelection;
    use fixture_model::{CollisionFilter, ConvexShape, Fixture, MIN_DENSITY};

    fn panel() -> FixturePanel {
        FixturePanel::new(FixtureDraft::from_fixture(&Fixture::new(ConvexShape::circle(1.0).unwrap())))
    }

    #[test]
    fn non_positive_density_clamped_in_field_and_draft() {
        let mut p = panel();
        p.apply(FixtureCommand::EditDensityText("-4".into()));
        assert_eq!(p.draft().density, 1.0);
        p.apply(FixtureCommand::CommitDensityText);
        assert_eq!(p.draft().density, MIN_DENSITY);
        assert_eq!(p.density_text(), "0.01");
        p.apply(FixtureCommand::SetDensity(0.0));
        assert_eq!(p.draft().density, MIN_DENSITY);
    }

    #[test]
    fn bad_density_text_reverts() {
        let mut p = panel();
        p.apply(FixtureCommand::SetDensity(2.5));
        p.apply(FixtureCommand::EditDensityText("abc".into()));
        assert_eq!(p.apply(FixtureCommand::CommitDensityText), CommandEffect::WidgetOnly);
        assert_eq!(p.density_text(), "2.50");
        assert_eq!(p.draft().density, 2.5);
    }

    #[test]
    fn sliders_scale_to_coefficients() {
        let mut p = panel();
        p.apply(FixtureCommand::SetRestitution(75));
        p.apply(FixtureCommand::SetFriction(40));
        assert!((p.draft().restitution - 0.75).abs() < 1e-6);
        assert!((p.draft().friction - 0.40).abs() < 1e-6);
    }

    #[test]
    fn friction_slider_seeded_from_friction() {
        let mut fixture = Fixture::new(ConvexShape::circle(1.0).unwrap());
        fixture.friction = 0.5;
        fixture.restitution = 0.0;
        let p = FixturePanel::new(FixtureDraft::from_fixture(&fixture));
        assert_eq!(p.friction_slider().value(), 50);
        assert_eq!(p.restitution_slider().value(), 0);
    }

    #[test]
    fn name_and_sensor_live_update() {
        let mut p = panel();
        p.apply(FixtureCommand::SetName("foot".into()));
        p.apply(FixtureCommand::SetSensor(true));
        assert_eq!(p.draft().name, "foot");
        assert!(p.draft().sensor);
    }

    #[test]
    fn list_selection_reaches_filter() {
        let mut p = panel();
        p.apply(FixtureCommand::SetFilterKind(FilterKind::Category));
        let effect = p.apply(FixtureCommand::SelectFilterBits {
            axis: FilterAxis::Mask,
            selection: ListSelection::settled(vec![2]),
        });
        assert!(matches!(effect, CommandEffect::Filter(FilterUpdate::Installed { .. })));
        assert_eq!(p.draft().filter, CollisionFilter::category_filter(u32::MAX, 2));
    }
}
