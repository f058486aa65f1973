//! Print document composition.
//!
//! The print composer reads the same [`Profile`] as the page composer but
//! lays it out for fixed-size pages: a header block followed by summary,
//! experience, skills, certifications and education. Experience,
//! certification and education entries are atomic units the renderer must
//! keep on a single page. The output is never mounted into the live page.

mod options;
mod stylesheet;

pub use options::{
    CanvasOptions, ExportOptions, ImageFormat, ImageOptions, Orientation, PageBreakRules,
    PageFormat, PageSetup,
};
pub use stylesheet::{ATOMIC_UNIT_CLASSES, PRINT_STYLESHEET};

use folio_markup::builders::*;
use folio_markup::{MarkupBuilder, escape};
use folio_types::{Certification, Education, Job, Personal, Profile, SkillGroup};

/// A composed print fragment, ready for the document renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct PrintDocument {
    /// Embedded stylesheet followed by the `pdf-container` block.
    pub markup: String,
    pub file_name: String,
}

impl PrintDocument {
    /// Wraps the fragment into a complete HTML document with an `@page` rule
    /// matching `options`, for renderers that load a file.
    pub fn standalone_html(&self, options: &ExportOptions) -> String {
        format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>{}</style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
            escape(&self.file_name),
            options.page_rule(),
            self.markup
        )
    }
}

/// Composes the print fragment for `profile`.
pub fn compose_print(profile: &Profile) -> PrintDocument {
    let container = div()
        .class("pdf-container")
        .child(header(&profile.personal))
        .child(print_section("Professional Summary").children(profile.about.paragraphs.iter().map(|text| p(text))))
        .child(print_section("Work Experience").children(profile.experience.iter().map(job)))
        .child(
            print_section("Technical Skills")
                .child(div().class("pdf-skills").children(profile.skills.iter().map(skill_group))),
        )
        .child(
            print_section("Certifications")
                .child(div().class("pdf-certs").children(profile.certifications.iter().map(cert))),
        )
        .child(print_section("Education").children(profile.education.iter().map(edu)));

    let markup = Fragment::new()
        .child(Raw::trusted(PRINT_STYLESHEET))
        .child(container)
        .render();
    log::debug!("Composed print markup ({} bytes)", markup.len());

    PrintDocument {
        markup,
        file_name: profile.export_file_name(),
    }
}

fn header(personal: &Personal) -> Element {
    let contact = &personal.contact;
    let contact_line = div()
        .class("contact")
        .child(span().text(&format!("📧 {}", contact.email)))
        .child(span().text(&format!("📱 {}", contact.phone)))
        .child(span().text(&format!("🔗 {}", contact.linkedin.display)))
        .child(span().text(&format!("🌐 {}", contact.website.display)));

    div()
        .class("pdf-header")
        .child(h1().text(&format!("{} {}", personal.name.first, personal.name.last)))
        .child(text_div("title", &format!("{} | {}", personal.title, personal.tagline)))
        .child(contact_line)
}

fn print_section(title: &str) -> Element {
    div().class("pdf-section").child(h2(title))
}

fn job(job: &Job) -> Element {
    div()
        .class("pdf-job")
        .child(
            div()
                .class("pdf-job-header")
                .child(span().class("pdf-job-title").text(&job.role))
                .child(span().class("pdf-job-date").text(&job.period)),
        )
        .child(text_div(
            "pdf-job-company",
            &format!("{} | {}", job.company, job.location),
        ))
        .child(ul().children(job.highlights.iter().map(|h| li(h))))
}

fn skill_group(group: &SkillGroup) -> Element {
    div()
        .class("pdf-skill-group")
        .child(h3(&format!("{} {}", group.icon, group.category)))
        .child(text_div("tags", &group.items.join(" • ")))
}

fn cert(cert: &Certification) -> Element {
    div()
        .class("pdf-cert")
        .child(strong(&cert.name))
        .text(&format!(" - {} ({})", cert.issuer, cert.year))
}

fn edu(edu: &Education) -> Element {
    div()
        .class("pdf-edu")
        .child(h3(&edu.degree))
        .child(p(&format!("{} | {}", edu.institution, edu.period)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> Profile {
        serde_yaml::from_str(include_str!("../../../tests/fixtures/profile.yaml")).unwrap()
    }

    fn section_order(markup: &str) -> Vec<usize> {
        [
            "Professional Summary",
            "Work Experience",
            "Technical Skills",
            "Certifications",
            "Education",
        ]
        .iter()
        .map(|title| markup.find(&format!("<h2>{}</h2>", title)).unwrap())
        .collect()
    }

    #[test]
    fn test_header_then_sections_in_order() {
        let doc = compose_print(&profile());
        let header_at = doc.markup.find(r#"<div class="pdf-header">"#).unwrap();
        let order = section_order(&doc.markup);
        assert!(header_at < order[0]);
        assert!(order.windows(2).all(|w| w[0] < w[1]));
        assert!(doc.markup.starts_with("<style>"));
    }

    #[test]
    fn test_header_contents() {
        let doc = compose_print(&profile());
        assert!(doc.markup.contains("<h1>Ada Lovelace</h1>"));
        assert!(doc.markup.contains(r#"<div class="title">Engineer | Analytical Engines</div>"#));
        assert!(doc.markup.contains("<span>🔗 in/ada</span>"));
    }

    #[test]
    fn test_one_atomic_block_per_entry() {
        let profile = profile();
        let doc = compose_print(&profile);
        assert_eq!(
            doc.markup.matches(r#"<div class="pdf-job">"#).count(),
            profile.experience.len()
        );
        assert_eq!(
            doc.markup.matches(r#"<div class="pdf-cert">"#).count(),
            profile.certifications.len()
        );
        assert_eq!(
            doc.markup.matches(r#"<div class="pdf-edu">"#).count(),
            profile.education.len()
        );
        let first = doc.markup.find("Principal Engineer").unwrap();
        let second = doc.markup.find(">Engineer<").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_skills_grid_and_joined_items() {
        let doc = compose_print(&profile());
        assert!(doc.markup.contains(r#"<div class="pdf-skills">"#));
        assert!(doc.markup.contains(r#"<div class="tags">Rust • Linux • WebAssembly</div>"#));
        assert!(doc.markup.contains("<h3>⚙ Systems</h3>"));
    }

    #[test]
    fn test_cert_line() {
        let doc = compose_print(&profile());
        assert!(doc.markup.contains(
            "<strong>Certified Kubernetes Administrator</strong> - CNCF (2023)"
        ));
    }

    #[test]
    fn test_values_are_escaped() {
        let mut profile = profile();
        profile.experience[0].highlights = vec!["<b>bold</b> & brave".to_string()];
        profile.skills[0].items = vec!["C<T>".to_string()];
        let doc = compose_print(&profile);
        assert!(doc.markup.contains("&lt;b&gt;bold&lt;/b&gt; &amp; brave"));
        assert!(doc.markup.contains("C&lt;T&gt;"));
        assert!(!doc.markup.contains("<b>"));
    }

    #[test]
    fn test_standalone_document() {
        let profile = profile();
        let doc = compose_print(&profile);
        let html = doc.standalone_html(&ExportOptions::for_profile(&profile));
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("@page { size: A4 portrait; margin: 10mm 15mm 10mm 15mm; }"));
        assert!(html.contains("<title>Ada_Lovelace_CV.pdf</title>"));
        assert!(html.contains(&doc.markup));
    }

    #[test]
    fn test_print_is_deterministic() {
        let profile = profile();
        assert_eq!(compose_print(&profile), compose_print(&profile));
        assert_eq!(compose_print(&profile).file_name, "Ada_Lovelace_CV.pdf");
    }
}
