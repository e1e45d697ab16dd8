// SPDX-License-Identifier: MPL-2.0
//! The showcase aggregate and its single mutation entry point.

use super::catalog::Catalog;
use super::record::{SectionCopy, ShowcaseContent, TabId, TabRecord};
use super::selection::{Direction, SelectionState, Transition};
use crate::domain::error::ShowcaseError;

/// Fixed content plus the selection state machine.
///
/// Exactly one record is active at all times; there is no "none selected"
/// state. [`Showcase::select`] is the only way to change it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Showcase {
    catalog: Catalog,
    section: SectionCopy,
    cta_target: String,
    selection: SelectionState,
}

impl Showcase {
    /// Builds the showcase with the first record active.
    ///
    /// # Errors
    ///
    /// Fails with [`ShowcaseError::EmptyContentSet`] or
    /// [`ShowcaseError::DuplicateTabId`]; the widget must not render then.
    pub fn new(content: ShowcaseContent) -> Result<Self, ShowcaseError> {
        let catalog = Catalog::new(content.records)?;
        let selection = SelectionState::initial(catalog.first().id.clone(), 0);
        Ok(Self {
            catalog,
            section: content.section,
            cta_target: content.cta_target,
            selection,
        })
    }

    /// Convenience constructor with empty section copy.
    ///
    /// # Errors
    ///
    /// Same as [`Showcase::new`].
    pub fn from_records(
        records: Vec<TabRecord>,
        cta_target: impl Into<String>,
    ) -> Result<Self, ShowcaseError> {
        Self::new(ShowcaseContent {
            section: SectionCopy::default(),
            cta_target: cta_target.into(),
            records,
        })
    }

    /// Makes `target` the active record.
    ///
    /// Sets `previous := active` then `active := target` in one step.
    /// Re-selecting the active record is legal and leaves the direction at
    /// [`Direction::Still`].
    ///
    /// # Errors
    ///
    /// Returns [`ShowcaseError::InvalidSelection`] if `target` is not in the
    /// catalog. The state is unchanged in that case.
    pub fn select(&mut self, target: &TabId) -> Result<Transition, ShowcaseError> {
        let index = self
            .catalog
            .index_of(target)
            .ok_or_else(|| ShowcaseError::InvalidSelection(target.clone()))?;

        self.selection.advance(target.clone(), index);

        Ok(Transition {
            from: self.selection.previous().clone(),
            to: self.selection.active().clone(),
            direction: self.selection.direction(),
            generation: self.selection.generation(),
        })
    }

    #[must_use]
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn section(&self) -> &SectionCopy {
        &self.section
    }

    #[must_use]
    pub fn cta_target(&self) -> &str {
        &self.cta_target
    }

    #[must_use]
    pub fn active(&self) -> &TabId {
        self.selection.active()
    }

    #[must_use]
    pub fn previous(&self) -> &TabId {
        self.selection.previous()
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.selection.direction()
    }

    #[must_use]
    pub fn active_record(&self) -> &TabRecord {
        &self.catalog.records()[self.selection.active_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn showcase() -> Showcase {
        let records = ["a", "b", "c", "d"]
            .into_iter()
            .map(|id| TabRecord::new(id, id.to_uppercase()))
            .collect();
        Showcase::from_records(records, "/schedule-a-demo").expect("showcase")
    }

    #[test]
    fn starts_on_first_record() {
        let showcase = showcase();
        assert_eq!(showcase.active(), &TabId::new("a"));
        assert_eq!(showcase.previous(), &TabId::new("a"));
        assert_eq!(showcase.direction(), Direction::Still);
    }

    #[test]
    fn select_reports_applied_transition() {
        let mut showcase = showcase();
        let transition = showcase.select(&TabId::new("c")).expect("select");
        assert_eq!(transition.from, TabId::new("a"));
        assert_eq!(transition.to, TabId::new("c"));
        assert_eq!(transition.direction, Direction::Forward);
        assert_eq!(transition.generation, 1);
        assert_eq!(showcase.active_record().title, "C");
    }

    #[test]
    fn reselecting_active_resets_direction() {
        let mut showcase = showcase();
        showcase.select(&TabId::new("c")).expect("select");
        showcase.select(&TabId::new("c")).expect("reselect");
        assert_eq!(showcase.active(), &TabId::new("c"));
        assert_eq!(showcase.previous(), &TabId::new("c"));
        assert_eq!(showcase.direction(), Direction::Still);
    }

    #[test]
    fn unknown_id_leaves_state_untouched() {
        let mut showcase = showcase();
        showcase.select(&TabId::new("c")).expect("select");
        let before = showcase.selection().clone();

        let result = showcase.select(&TabId::new("zzz"));

        assert_eq!(
            result,
            Err(ShowcaseError::InvalidSelection(TabId::new("zzz")))
        );
        assert_eq!(showcase.selection(), &before);
    }

    #[test]
    fn empty_content_fails_construction() {
        let result = Showcase::from_records(Vec::new(), "/x");
        assert_eq!(result, Err(ShowcaseError::EmptyContentSet));
    }
}
