//! Page furniture around the data sections.

use crate::ids::{
    EMPHASIS_CLASS, EXPORT_TRIGGER_ID, EXPORT_TRIGGER_LABEL, NAV_LINKS_CLASS, NAV_LINKS_ID,
    NAV_TOGGLE_ID,
};
use folio_markup::builders::*;
use folio_types::{Personal, Profile, SectionId};

/// Top navigation: logo, one link per section, and the mobile toggle.
pub fn nav(personal: &Personal) -> Element {
    let links = SectionId::PAGE_ORDER.iter().map(|section| {
        Element::new("li").child(a(&format!("#{}", section.anchor())).text(section.nav_label()))
    });

    let toggle = div()
        .class("hamburger")
        .id(NAV_TOGGLE_ID)
        .children((0..3).map(|_| span()));

    folio_markup::builders::nav().child(
        div()
            .class("nav-container")
            .child(text_div("nav-logo", &personal.logo()))
            .child(ul().class(NAV_LINKS_CLASS).id(NAV_LINKS_ID).children(links))
            .child(toggle),
    )
}

pub fn hero(personal: &Personal) -> Element {
    let badge = div()
        .class("hero-badge")
        .child(span().class("dot"))
        .text(&personal.status);

    let heading = h1()
        .child(span().class("first-name").text(&personal.name.first))
        .child(span().class(EMPHASIS_CLASS).text(&personal.name.last));

    let subtitle = Element::new("p")
        .class("hero-subtitle")
        .child(span().class("highlight").text(&personal.title))
        .text(&format!(" // {} — {}", personal.tagline, personal.summary));

    let buttons = div()
        .class("hero-buttons")
        .child(
            a(&format!("#{}", SectionId::Contact.anchor()))
                .class("btn")
                .class("btn-primary")
                .text("Initialize Contact"),
        )
        .child(
            a(&format!("#{}", SectionId::Experience.anchor()))
                .class("btn")
                .class("btn-secondary")
                .text("View Datalog"),
        )
        .child(
            button()
                .class("btn")
                .class("btn-download")
                .id(EXPORT_TRIGGER_ID)
                .text(EXPORT_TRIGGER_LABEL),
        );

    section(&SectionId::Hero.anchor())
        .class("hero")
        .child(div().class("hero-bg"))
        .child(div().class("hero-grid"))
        .child(
            div()
                .class("hero-content")
                .child(badge)
                .child(heading)
                .child(subtitle)
                .child(buttons),
        )
}

pub fn footer(profile: &Profile) -> Element {
    folio_markup::builders::footer().child(
        Element::new("p")
            .text(&format!(
                "© {} {} // ",
                profile.theme.copyright_year,
                profile.full_name()
            ))
            .child(span().text(&profile.theme.footer_text)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::sample_profile;
    use folio_markup::MarkupBuilder;

    #[test]
    fn test_nav_contents() {
        let html = nav(&sample_profile().personal).render();
        assert!(html.contains(r#"<div class="nav-logo">A_LOVELACE</div>"#));
        assert!(html.contains(r#"<ul id="navLinks" class="nav-links">"#));
        assert!(html.contains(r##"<li><a href="#certifications">Certs</a></li>"##));
        assert!(html.contains(
            r#"<div id="hamburger" class="hamburger"><span></span><span></span><span></span></div>"#
        ));
    }

    #[test]
    fn test_hero_contents() {
        let html = hero(&sample_profile().personal).render();
        assert!(html.starts_with(r#"<section id="hero" class="hero">"#));
        assert!(html.contains(r#"<span class="last-name">Lovelace</span>"#));
        assert!(html.contains(
            r#"<span class="highlight">Engineer</span> // Analytical — Writes programs"#
        ));
        assert!(html.contains(
            r#"<button id="downloadPdf" class="btn btn-download">⬇ Download CV</button>"#
        ));
    }

    #[test]
    fn test_footer_line() {
        let html = footer(&sample_profile()).render();
        assert_eq!(
            html,
            "<footer><p>© 2025 Ada Lovelace // <span>Built with care</span></p></footer>"
        );
    }
}
