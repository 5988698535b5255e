//! Upload gate, section and tab switching

use super::error::{GateError, WiringError};
use super::ids::{SectionId, TabId};

/// A sidebar navigation entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarEntry {
    /// Section this entry opens
    pub section: SectionId,
    /// Greyed out until notes are uploaded
    pub disabled: bool,
}

/// A tab-bar control that switches to one tab
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSelector {
    /// Tab this control activates
    pub target: TabId,
    /// Whether the control is drawn highlighted
    pub active: bool,
}

/// Visibility state for sections and tabs
///
/// States are `{Locked, Unlocked} x section x tab`. The only way from locked
/// to unlocked is [`ViewState::unlock_after_upload`] with some input, and
/// nothing ever locks the view again.
#[derive(Debug, Clone)]
pub struct ViewState {
    notes_uploaded: bool,
    content_visible: bool,
    active_section: SectionId,
    active_tab: TabId,
    sidebar: Vec<SidebarEntry>,
    selectors: Vec<TabSelector>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    /// Create a locked view with one selector per tab
    pub fn new() -> Self {
        let selectors = TabId::ALL
            .iter()
            .map(|&target| TabSelector { target, active: target == TabId::default() })
            .collect();
        Self::build(selectors)
    }

    /// Create a locked view with an explicit set of tab selectors
    ///
    /// A tab without a selector is allowed (switching to it just highlights
    /// nothing), but two selectors for the same tab are a wiring mistake.
    pub fn with_selectors(targets: &[TabId]) -> Result<Self, WiringError> {
        let mut selectors: Vec<TabSelector> = Vec::with_capacity(targets.len());
        for &target in targets {
            if selectors.iter().any(|s| s.target == target) {
                return Err(WiringError::DuplicateSelector(target));
            }
            selectors.push(TabSelector { target, active: target == TabId::default() });
        }
        Ok(Self::build(selectors))
    }

    fn build(selectors: Vec<TabSelector>) -> Self {
        let sidebar = SectionId::ALL
            .iter()
            .map(|&section| SidebarEntry { section, disabled: section != SectionId::Upload })
            .collect();

        Self {
            notes_uploaded: false,
            content_visible: false,
            active_section: SectionId::Upload,
            active_tab: TabId::default(),
            sidebar,
            selectors,
        }
    }

    /// Switch the visible top-level section
    pub fn activate_section(&mut self, id: SectionId) -> Result<(), GateError> {
        if !self.notes_uploaded && id != SectionId::Upload {
            return Err(GateError::NotesRequired);
        }
        self.active_section = id;
        tracing::debug!(section = %id, "section activated");
        Ok(())
    }

    /// Open the gate once the user has supplied text or a file
    pub fn unlock_after_upload(&mut self, has_text: bool, has_file: bool) -> Result<(), GateError> {
        if !has_text && !has_file {
            return Err(GateError::NothingToUpload);
        }

        self.notes_uploaded = true;
        self.content_visible = true;
        for entry in &mut self.sidebar {
            entry.disabled = false;
        }

        // Land on the summary, both as section and as tab
        self.active_section = SectionId::Summary;
        self.activate_tab(TabId::Summary)?;

        tracing::info!(has_text, has_file, "notes uploaded, content unlocked");
        Ok(())
    }

    /// Switch the visible tab and highlight its selector
    pub fn activate_tab(&mut self, id: TabId) -> Result<(), GateError> {
        if !self.notes_uploaded {
            return Err(GateError::NotesRequired);
        }

        self.active_tab = id;
        for selector in &mut self.selectors {
            selector.active = false;
        }
        if let Some(selector) = self.selectors.iter_mut().find(|s| s.target == id) {
            selector.active = true;
        }
        Ok(())
    }

    /// Whether notes have been supplied this session
    pub fn notes_uploaded(&self) -> bool {
        self.notes_uploaded
    }

    /// Whether the tabbed content area is shown
    pub fn content_visible(&self) -> bool {
        self.content_visible
    }

    pub fn active_section(&self) -> SectionId {
        self.active_section
    }

    pub fn active_tab(&self) -> TabId {
        self.active_tab
    }

    /// Whether a given tab panel is the visible one
    pub fn is_tab_active(&self, id: TabId) -> bool {
        self.active_tab == id
    }

    pub fn sidebar(&self) -> &[SidebarEntry] {
        &self.sidebar
    }

    pub fn selectors(&self) -> &[TabSelector] {
        &self.selectors
    }
}

/// Reject a blank question before anything is sent to the Q&A endpoint
pub fn require_question(question: &str) -> Result<&str, GateError> {
    if question.trim().is_empty() {
        return Err(GateError::QuestionRequired);
    }
    Ok(question)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn unlocked() -> ViewState {
        let mut view = ViewState::new();
        view.unlock_after_upload(true, false).unwrap();
        view
    }

    fn active_selectors(view: &ViewState) -> Vec<TabId> {
        view.selectors().iter().filter(|s| s.active).map(|s| s.target).collect()
    }

    #[test]
    fn new_view_is_locked_on_upload() {
        let view = ViewState::new();
        assert!(!view.notes_uploaded());
        assert!(!view.content_visible());
        assert_eq!(view.active_section(), SectionId::Upload);
    }

    #[test]
    fn sidebar_starts_disabled_except_upload() {
        let view = ViewState::new();
        for entry in view.sidebar() {
            assert_eq!(entry.disabled, entry.section != SectionId::Upload);
        }
    }

    #[test]
    fn locked_view_rejects_every_other_section() {
        let mut view = ViewState::new();
        for section in SectionId::ALL.into_iter().filter(|s| *s != SectionId::Upload) {
            assert_eq!(view.activate_section(section), Err(GateError::NotesRequired));
            assert_eq!(view.active_section(), SectionId::Upload);
        }
    }

    #[test]
    fn locked_view_allows_upload_section() {
        let mut view = ViewState::new();
        assert!(view.activate_section(SectionId::Upload).is_ok());
        assert_eq!(view.active_section(), SectionId::Upload);
    }

    #[test]
    fn unlock_without_input_changes_nothing() {
        let mut view = ViewState::new();
        assert_eq!(view.unlock_after_upload(false, false), Err(GateError::NothingToUpload));
        assert!(!view.notes_uploaded());
        assert!(!view.content_visible());
        assert_eq!(view.active_section(), SectionId::Upload);
        assert!(view.sidebar().iter().skip(1).all(|e| e.disabled));
    }

    #[test]
    fn unlock_with_text_only() {
        let mut view = ViewState::new();
        view.unlock_after_upload(true, false).unwrap();
        assert!(view.notes_uploaded());
        assert_eq!(view.active_tab(), TabId::Summary);
        assert_eq!(view.active_section(), SectionId::Summary);
    }

    #[test]
    fn unlock_with_file_only() {
        let mut view = ViewState::new();
        view.unlock_after_upload(false, true).unwrap();
        assert!(view.notes_uploaded());
        assert!(view.content_visible());
        assert_eq!(view.active_tab(), TabId::Summary);
    }

    #[test]
    fn unlock_enables_sidebar() {
        let view = unlocked();
        assert!(view.sidebar().iter().all(|e| !e.disabled));
    }

    #[test]
    fn gate_stays_open_after_failed_unlock() {
        let mut view = unlocked();
        assert!(view.unlock_after_upload(false, false).is_err());
        assert!(view.notes_uploaded());
    }

    #[test]
    fn locked_view_rejects_tabs() {
        let mut view = ViewState::new();
        assert_eq!(view.activate_tab(TabId::Quiz), Err(GateError::NotesRequired));
        assert_eq!(view.active_tab(), TabId::Summary);
    }

    #[test]
    fn activate_tab_marks_exactly_one_panel_and_selector() {
        let mut view = unlocked();
        for tab in TabId::ALL {
            view.activate_tab(tab).unwrap();
            let active_panels: Vec<TabId> =
                TabId::ALL.into_iter().filter(|t| view.is_tab_active(*t)).collect();
            assert_eq!(active_panels, vec![tab]);
            assert_eq!(active_selectors(&view), vec![tab]);
        }
    }

    #[test]
    fn activate_tab_is_idempotent() {
        let mut view = unlocked();
        view.activate_tab(TabId::Flashcards).unwrap();
        let before = (view.active_tab(), view.selectors().to_vec());
        view.activate_tab(TabId::Flashcards).unwrap();
        assert_eq!((view.active_tab(), view.selectors().to_vec()), before);
    }

    #[test]
    fn missing_selector_is_not_an_error() {
        let mut view = ViewState::with_selectors(&[TabId::Summary, TabId::Qa]).unwrap();
        view.unlock_after_upload(true, false).unwrap();
        view.activate_tab(TabId::Quiz).unwrap();
        assert_eq!(view.active_tab(), TabId::Quiz);
        assert!(active_selectors(&view).is_empty());
    }

    #[test]
    fn duplicate_selector_fails_at_wiring() {
        let err = ViewState::with_selectors(&[TabId::Qa, TabId::Qa]).unwrap_err();
        assert_eq!(err, WiringError::DuplicateSelector(TabId::Qa));
    }

    #[test]
    fn blank_questions_are_rejected() {
        for question in ["", "   ", "\n\t"] {
            assert_eq!(require_question(question), Err(GateError::QuestionRequired));
        }
        assert_eq!(require_question(" why? "), Ok(" why? "));
    }
}
