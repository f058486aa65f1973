/// The named blocks of the portfolio page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    About,
    Experience,
    Skills,
    Certifications,
    Education,
    Contact,
}

impl SectionId {
    /// Data sections in page order. The hero is always rendered first and is
    /// not part of the navigation.
    pub const PAGE_ORDER: [SectionId; 6] = [
        SectionId::About,
        SectionId::Experience,
        SectionId::Skills,
        SectionId::Certifications,
        SectionId::Education,
        SectionId::Contact,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SectionId::Hero => "Hero",
            SectionId::About => "About",
            SectionId::Experience => "Experience",
            SectionId::Skills => "Skills",
            SectionId::Certifications => "Certifications",
            SectionId::Education => "Education",
            SectionId::Contact => "Contact",
        }
    }

    /// Stable DOM identifier, used for navigation anchors and reveal targets.
    pub fn anchor(self) -> String {
        slug::slugify(self.name())
    }

    /// Text of the navigation link.
    pub fn nav_label(self) -> &'static str {
        match self {
            SectionId::Certifications => "Certs",
            other => other.name(),
        }
    }
}
