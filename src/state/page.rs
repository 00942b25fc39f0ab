//! Page sections and where they sit in the scrolled document

/// Sections in page order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    About,
    Philosophy,
    Services,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Hero,
        Section::About,
        Section::Philosophy,
        Section::Services,
        Section::Contact,
    ];

    /// Nav bar links, in nav order (not page order)
    pub const NAV: [Section; 4] = [
        Section::About,
        Section::Services,
        Section::Philosophy,
        Section::Contact,
    ];

    /// In-page anchor id. The hero has none.
    pub fn anchor(&self) -> Option<&'static str> {
        match self {
            Self::Hero => None,
            Self::About => Some("about"),
            Self::Philosophy => Some("philosophy"),
            Self::Services => Some("services"),
            Self::Contact => Some("contact"),
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<Self> {
        let anchor = anchor.strip_prefix('#').unwrap_or(anchor);
        Self::ALL
            .into_iter()
            .find(|section| section.anchor() == Some(anchor))
    }

    pub fn nav_label(&self) -> &'static str {
        match self {
            Self::Hero => "Home",
            Self::About => "About",
            Self::Philosophy => "Philosophy",
            Self::Services => "Services",
            Self::Contact => "Contact",
        }
    }

    /// Nav link for a `1`-`4` key press
    pub fn from_nav_key(c: char) -> Option<Self> {
        let index = c.to_digit(10)? as usize;
        index.checked_sub(1).and_then(|i| Self::NAV.get(i).copied())
    }
}

/// Row at which each section starts, recomputed on every draw
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLayout {
    starts: Vec<(Section, u16)>,
    total_height: u16,
}

impl PageLayout {
    pub fn new(starts: Vec<(Section, u16)>, total_height: u16) -> Self {
        Self {
            starts,
            total_height,
        }
    }

    pub fn total_height(&self) -> u16 {
        self.total_height
    }

    pub fn offset_of(&self, section: Section) -> Option<u16> {
        self.starts
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, start)| *start)
    }

    /// Largest offset that still fills the viewport
    pub fn max_offset(&self, viewport_height: u16) -> u16 {
        self.total_height.saturating_sub(viewport_height)
    }

    /// Section whose start is at or above `offset`
    pub fn section_at(&self, offset: u16) -> Section {
        self.starts
            .iter()
            .take_while(|(_, start)| *start <= offset)
            .last()
            .map_or(Section::Hero, |(section, _)| *section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_layout() -> PageLayout {
        PageLayout::new(
            vec![
                (Section::Hero, 0),
                (Section::About, 20),
                (Section::Philosophy, 45),
                (Section::Services, 70),
                (Section::Contact, 110),
            ],
            160,
        )
    }

    mod section {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_anchors() {
            assert_eq!(Section::About.anchor(), Some("about"));
            assert_eq!(Section::Services.anchor(), Some("services"));
            assert_eq!(Section::Philosophy.anchor(), Some("philosophy"));
            assert_eq!(Section::Contact.anchor(), Some("contact"));
            assert_eq!(Section::Hero.anchor(), None);
        }

        #[test]
        fn test_from_anchor_round_trips() {
            for section in Section::NAV {
                let anchor = section.anchor().unwrap();
                assert_eq!(Section::from_anchor(anchor), Some(section));
            }
        }

        #[test]
        fn test_from_anchor_accepts_hash_prefix() {
            assert_eq!(Section::from_anchor("#contact"), Some(Section::Contact));
            assert_eq!(Section::from_anchor("pricing"), None);
            assert_eq!(Section::from_anchor(""), None);
        }

        #[test]
        fn test_nav_keys() {
            assert_eq!(Section::from_nav_key('1'), Some(Section::About));
            assert_eq!(Section::from_nav_key('2'), Some(Section::Services));
            assert_eq!(Section::from_nav_key('3'), Some(Section::Philosophy));
            assert_eq!(Section::from_nav_key('4'), Some(Section::Contact));
            assert_eq!(Section::from_nav_key('0'), None);
            assert_eq!(Section::from_nav_key('5'), None);
            assert_eq!(Section::from_nav_key('x'), None);
        }
    }

    mod page_layout {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_offset_of() {
            let layout = sample_layout();
            assert_eq!(layout.offset_of(Section::Contact), Some(110));
            assert_eq!(PageLayout::default().offset_of(Section::About), None);
        }

        #[test]
        fn test_max_offset() {
            let layout = sample_layout();
            assert_eq!(layout.max_offset(40), 120);
            assert_eq!(layout.max_offset(500), 0);
        }

        #[test]
        fn test_section_at() {
            let layout = sample_layout();
            assert_eq!(layout.section_at(0), Section::Hero);
            assert_eq!(layout.section_at(19), Section::Hero);
            assert_eq!(layout.section_at(20), Section::About);
            assert_eq!(layout.section_at(109), Section::Services);
            assert_eq!(layout.section_at(150), Section::Contact);
        }
    }
}
