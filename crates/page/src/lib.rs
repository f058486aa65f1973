//! Screen page composition.
//!
//! [`compose_page`] turns a [`Profile`] into the markup that replaces the
//! page root: navigation, hero, one section per data group in
//! [`SectionId::PAGE_ORDER`], and a footer. Every renderer in this crate is a
//! pure function of its profile slice.
//!
//! ## Module Structure
//!
//! - [`chrome`] - navigation bar, hero banner and footer
//! - [`sections`] - about, experience, skills, certifications, education, contact
//! - [`ids`] - element identifiers and class names shared with the interaction layer

pub mod chrome;
pub mod ids;
pub mod sections;

use folio_markup::MarkupBuilder;
use folio_markup::builders::{Element, Fragment};
use folio_types::{Profile, SectionId};

/// Renders the complete page body for `profile`.
pub fn compose_page(profile: &Profile) -> String {
    let mut page = Fragment::new()
        .child(chrome::nav(&profile.personal))
        .child(chrome::hero(&profile.personal));
    for section in SectionId::PAGE_ORDER {
        page = page.child(render_section(section, profile));
    }
    let markup = page.child(chrome::footer(profile)).render();
    log::debug!("Composed page markup ({} bytes)", markup.len());
    markup
}

/// Renders one section of the page by its identifier.
pub fn render_section(section: SectionId, profile: &Profile) -> Element {
    match section {
        SectionId::Hero => chrome::hero(&profile.personal),
        SectionId::About => sections::about(&profile.about),
        SectionId::Experience => sections::experience(&profile.experience),
        SectionId::Skills => sections::skills(&profile.skills),
        SectionId::Certifications => sections::certifications(&profile.certifications),
        SectionId::Education => sections::education(&profile.education),
        SectionId::Contact => sections::contact(&profile.personal.contact),
    }
}
