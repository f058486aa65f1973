//! Renderers for the data sections of the page.
//!
//! Each renderer emits one block per input entry, in input order, and tags
//! every block for scroll reveal.

use crate::ids::REVEAL_CLASS;
use folio_markup::builders::*;
use folio_markup::tel_href;
use folio_types::{About, Certification, Contact, Education, Job, SectionId, SkillGroup};

/// Label line and title shared by every data section.
fn section_header(label: &str, title: &str) -> Element {
    div()
        .class("section-header")
        .class(REVEAL_CLASS)
        .child(text_div("section-label", label))
        .child(h2(title).class("section-title"))
}

pub fn about(about: &About) -> Element {
    let stats = about.stats.iter().map(|stat| {
        div()
            .class("stat-card")
            .child(text_div("stat-number", &stat.value))
            .child(text_div("stat-label", &stat.label))
    });

    section(&SectionId::About.anchor())
        .child(section_header("// System Profile", &about.title))
        .child(
            div()
                .class("about-grid")
                .child(
                    div()
                        .class("about-text")
                        .class(REVEAL_CLASS)
                        .children(about.paragraphs.iter().map(|text| p(text))),
                )
                .child(div().class("about-stats").class(REVEAL_CLASS).children(stats)),
        )
}

fn timeline_item(job: &Job) -> Element {
    let header = div()
        .class("timeline-header")
        .child(span().class("timeline-role").text(&job.role))
        .child(span().class("timeline-date").text(&job.period));

    div().class("timeline-item").class(REVEAL_CLASS).child(
        div()
            .class("timeline-card")
            .child(header)
            .child(text_div(
                "timeline-company",
                &format!("{} // {}", job.company, job.location),
            ))
            .child(
                ul().class("timeline-details")
                    .children(job.highlights.iter().map(|h| li(h))),
            ),
    )
}

pub fn experience(jobs: &[Job]) -> Element {
    section(&SectionId::Experience.anchor())
        .child(section_header("// Employment History", "Mission Logs"))
        .child(div().class("timeline").children(jobs.iter().map(timeline_item)))
}

fn skill_card(group: &SkillGroup) -> Element {
    div()
        .class("skill-card")
        .class(REVEAL_CLASS)
        .child(text_div("skill-icon", &group.icon))
        .child(h3(&group.category))
        .child(
            div()
                .class("skill-tags")
                .children(group.items.iter().map(|item| span().class("skill-tag").text(item))),
        )
}

pub fn skills(groups: &[SkillGroup]) -> Element {
    section(&SectionId::Skills.anchor())
        .child(section_header("// Technical Specs", "Skills Matrix"))
        .child(div().class("skills-grid").children(groups.iter().map(skill_card)))
}

fn cert_card(cert: &Certification) -> Element {
    div()
        .class("cert-card")
        .class(REVEAL_CLASS)
        .child(text_div("cert-icon", &cert.icon))
        .child(
            div()
                .class("cert-info")
                .child(h3(&cert.name))
                .child(p(&format!("{} // {}", cert.issuer, cert.year))),
        )
}

pub fn certifications(certs: &[Certification]) -> Element {
    section(&SectionId::Certifications.anchor())
        .child(section_header("// Credentials", "Certified Protocols"))
        .child(div().class("certs-grid").children(certs.iter().map(cert_card)))
}

fn edu_card(edu: &Education) -> Element {
    div()
        .class("edu-card")
        .class(REVEAL_CLASS)
        .child(h3(&edu.degree))
        .child(text_div("school", &edu.institution))
        .child(text_div("year", &edu.period))
}

pub fn education(entries: &[Education]) -> Element {
    section(&SectionId::Education.anchor())
        .child(section_header("// Origin Data", "Academic Foundation"))
        .children(entries.iter().map(edu_card))
}

fn contact_card(link: Element, icon: &str, heading: &str, shown: &str) -> Element {
    link.class("contact-card")
        .class(REVEAL_CLASS)
        .child(text_div("contact-icon", icon))
        .child(h3(heading))
        .child(p(shown))
}

pub fn contact(contact: &Contact) -> Element {
    let cards = [
        contact_card(
            a(&format!("mailto:{}", contact.email)),
            "📧",
            "Email",
            &contact.email,
        ),
        contact_card(a(&tel_href(&contact.phone)), "📱", "Phone", &contact.phone),
        contact_card(
            external_link(&contact.linkedin.url),
            "💼",
            "LinkedIn",
            &contact.linkedin.display,
        ),
        contact_card(
            external_link(&contact.website.url),
            "🌐",
            "Website",
            &contact.website.display,
        ),
    ];

    section(&SectionId::Contact.anchor())
        .child(section_header("// Communication Channels", "Initialize Connection"))
        .child(div().class("contact-grid").children(cards))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::sample_profile;
    use folio_markup::MarkupBuilder;

    #[test]
    fn test_single_job_timeline() {
        let html = experience(&sample_profile().experience).render();
        assert_eq!(html.matches(r#"class="timeline-item fade-in""#).count(), 1);
        assert!(html.contains(
            r#"<ul class="timeline-details"><li>Built X</li><li>Shipped Y</li></ul>"#
        ));
        assert_eq!(html.matches("<li>").count(), 2);
        assert!(html.contains("Acme // Remote"));
    }

    #[test]
    fn test_blocks_keep_input_order_and_duplicates() {
        let mut profile = sample_profile();
        let first = profile.experience[0].clone();
        let mut second = first.clone();
        second.role = "Architect".to_string();
        profile.experience = vec![second, first.clone(), first];

        let html = experience(&profile.experience).render();
        assert_eq!(html.matches(r#"class="timeline-item fade-in""#).count(), 3);
        let architect = html.find("Architect").unwrap();
        let engineer = html.find(">Engineer<").unwrap();
        assert!(architect < engineer);
    }

    #[test]
    fn test_about_paragraphs_and_stats() {
        let html = about(&sample_profile().about).render();
        assert!(html.contains(r#"<h2 class="section-title">System Profile</h2>"#));
        assert!(html.contains("<p>First</p><p>Second</p>"));
        assert_eq!(html.matches(r#"class="stat-card""#).count(), 2);
        assert!(html.find("15+").unwrap() < html.find("Projects").unwrap());
    }

    #[test]
    fn test_skill_tags() {
        let html = skills(&sample_profile().skills).render();
        assert!(html.contains(
            r#"<span class="skill-tag">Rust</span><span class="skill-tag">Linux</span>"#
        ));
    }

    #[test]
    fn test_certification_and_education_cards() {
        let profile = sample_profile();
        let certs = certifications(&profile.certifications).render();
        assert!(certs.contains("<h3>CKA</h3><p>CNCF // 2023</p>"));

        let edu = education(&profile.education).render();
        assert_eq!(edu.matches(r#"class="edu-card fade-in""#).count(), 1);
        assert!(edu.contains(r#"<div class="school">Cambridge</div>"#));
    }

    #[test]
    fn test_contact_links() {
        let html = contact(&sample_profile().personal.contact).render();
        assert!(html.contains(r#"href="mailto:ada@example.com""#));
        assert!(html.contains(r#"href="tel:+442079460000""#));
        assert!(html.contains("<p>+44 20 7946 0000</p>"));
        assert_eq!(html.matches(r#"target="_blank""#).count(), 2);
    }

    #[test]
    fn test_markup_in_values_is_literal() {
        let mut profile = sample_profile();
        profile.experience[0].highlights = vec!["<img src=x onerror=alert(1)>".to_string()];
        profile.skills[0].category = "R&D".to_string();
        profile.personal.contact.website.url = "javascript:alert(1)".to_string();

        let jobs = experience(&profile.experience).render();
        assert!(!jobs.contains("<img"));
        assert!(jobs.contains("&lt;img"));

        let skills_html = skills(&profile.skills).render();
        assert!(skills_html.contains("<h3>R&amp;D</h3>"));

        let contact_html = contact(&profile.personal.contact).render();
        assert!(!contact_html.contains("javascript:"));
    }

    #[test]
    fn test_empty_sequences_render_empty_sections() {
        let html = experience(&[]).render();
        assert!(html.contains(r#"<div class="timeline"></div>"#));
    }
}
