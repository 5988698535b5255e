//! Section and tab identifiers

use std::fmt;

use crate::study::Capability;

/// A top-level page region, one active at a time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SectionId {
    #[default]
    Upload,
    Summary,
    Flashcards,
    Qa,
    Quiz,
    Export,
}

impl SectionId {
    /// All sections in sidebar order
    pub const ALL: [SectionId; 6] =
        [Self::Upload, Self::Summary, Self::Flashcards, Self::Qa, Self::Quiz, Self::Export];

    /// Stable identifier used by commands
    pub fn id(&self) -> &'static str {
        match self {
            Self::Upload => "upload",
            Self::Summary => "summary",
            Self::Flashcards => "flashcards",
            Self::Qa => "qa",
            Self::Quiz => "quiz",
            Self::Export => "export",
        }
    }

    /// Sidebar label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Upload => "Upload Notes",
            Self::Summary => "Summary",
            Self::Flashcards => "Flashcards",
            Self::Qa => "Ask a Question",
            Self::Quiz => "Quiz",
            Self::Export => "Download PDF",
        }
    }

    /// Parse a section from its identifier
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "upload" | "u" => Some(Self::Upload),
            "summary" | "s" => Some(Self::Summary),
            "flashcards" | "cards" | "f" => Some(Self::Flashcards),
            "qa" | "ask" => Some(Self::Qa),
            "quiz" => Some(Self::Quiz),
            "export" | "pdf" | "download" => Some(Self::Export),
            _ => None,
        }
    }

    /// The tab shown when this section is opened, if any
    pub fn tab(&self) -> Option<TabId> {
        match self {
            Self::Summary => Some(TabId::Summary),
            Self::Flashcards => Some(TabId::Flashcards),
            Self::Qa => Some(TabId::Qa),
            Self::Quiz => Some(TabId::Quiz),
            Self::Upload | Self::Export => None,
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A sub-panel of the content area
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TabId {
    #[default]
    Summary,
    Flashcards,
    Qa,
    Quiz,
}

impl TabId {
    /// All tabs in tab-bar order
    pub const ALL: [TabId; 4] = [Self::Summary, Self::Flashcards, Self::Qa, Self::Quiz];

    pub fn id(&self) -> &'static str {
        match self {
            Self::Summary => "summary",
            Self::Flashcards => "flashcards",
            Self::Qa => "qa",
            Self::Quiz => "quiz",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Summary => "Summary",
            Self::Flashcards => "Flashcards",
            Self::Qa => "Q&A",
            Self::Quiz => "Quiz",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "summary" | "s" | "1" => Some(Self::Summary),
            "flashcards" | "cards" | "f" | "2" => Some(Self::Flashcards),
            "qa" | "ask" | "3" => Some(Self::Qa),
            "quiz" | "4" => Some(Self::Quiz),
            _ => None,
        }
    }

    /// Next tab, wrapping around
    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|t| t == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous tab, wrapping around
    pub fn prev(&self) -> Self {
        let idx = Self::ALL.iter().position(|t| t == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl From<TabId> for SectionId {
    fn from(tab: TabId) -> Self {
        match tab {
            TabId::Summary => Self::Summary,
            TabId::Flashcards => Self::Flashcards,
            TabId::Qa => Self::Qa,
            TabId::Quiz => Self::Quiz,
        }
    }
}

impl From<TabId> for Capability {
    fn from(tab: TabId) -> Self {
        match tab {
            TabId::Summary => Self::Summary,
            TabId::Flashcards => Self::Flashcards,
            TabId::Qa => Self::Qa,
            TabId::Quiz => Self::Quiz,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_parse_roundtrips_ids() {
        for section in SectionId::ALL {
            assert_eq!(SectionId::parse(section.id()), Some(section));
        }
        assert_eq!(SectionId::parse("nope"), None);
    }

    #[test]
    fn tab_parse_accepts_numbers() {
        assert_eq!(TabId::parse("1"), Some(TabId::Summary));
        assert_eq!(TabId::parse("4"), Some(TabId::Quiz));
        assert_eq!(TabId::parse("QA"), Some(TabId::Qa));
    }

    #[test]
    fn tab_cycling_wraps() {
        assert_eq!(TabId::Quiz.next(), TabId::Summary);
        assert_eq!(TabId::Summary.prev(), TabId::Quiz);
        assert_eq!(TabId::Flashcards.next(), TabId::Qa);
    }

    #[test]
    fn every_tab_has_a_section_and_capability() {
        for tab in TabId::ALL {
            assert_eq!(SectionId::from(tab).tab(), Some(tab));
            assert!(!Capability::from(tab).response_field().is_empty());
        }
        assert_eq!(Capability::from(TabId::Qa), Capability::Qa);
    }

    #[test]
    fn only_content_sections_map_to_tabs() {
        assert_eq!(SectionId::Upload.tab(), None);
        assert_eq!(SectionId::Export.tab(), None);
        assert_eq!(SectionId::Qa.tab(), Some(TabId::Qa));
    }
}
