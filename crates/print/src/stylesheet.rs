/// Blocks that must never be split across a page boundary. Mirrored in the
/// pagination rules handed to the renderer.
pub const ATOMIC_UNIT_CLASSES: [&str; 4] = ["pdf-job", "pdf-header", "pdf-edu", "pdf-cert"];

/// Embedded stylesheet for the print fragment. Fixed units only.
pub const PRINT_STYLESHEET: &str = r#"<style>
* { margin: 0; padding: 0; box-sizing: border-box; }
body { font-family: 'Segoe UI', Arial, sans-serif; font-size: 10px; line-height: 1.3; color: #333; }
.pdf-container { padding: 15px 20px; max-width: 800px; }
.pdf-header { text-align: center; margin-bottom: 15px; padding-bottom: 10px; border-bottom: 2px solid #00f0ff; page-break-inside: avoid; break-inside: avoid; }
.pdf-header h1 { font-size: 24px; color: #1a1a2e; margin-bottom: 3px; text-transform: uppercase; letter-spacing: 2px; }
.pdf-header .title { font-size: 11px; color: #00a0aa; font-weight: 600; }
.pdf-header .contact { font-size: 9px; color: #666; margin-top: 8px; }
.pdf-header .contact span { margin: 0 8px; }
.pdf-section { margin-bottom: 12px; }
.pdf-section h2 { font-size: 12px; color: #ff2a6d; text-transform: uppercase; letter-spacing: 1px; border-bottom: 1px solid #ff2a6d; padding-bottom: 3px; margin-bottom: 8px; page-break-after: avoid; break-after: avoid; }
.pdf-section p { margin-bottom: 5px; text-align: justify; font-size: 9px; }
.pdf-job { margin-bottom: 10px; page-break-inside: avoid; break-inside: avoid; }
.pdf-job-header { display: flex; justify-content: space-between; align-items: baseline; margin-bottom: 2px; }
.pdf-job-title { font-weight: 700; font-size: 10px; color: #1a1a2e; }
.pdf-job-date { font-size: 9px; color: #00a0aa; }
.pdf-job-company { font-size: 9px; color: #666; margin-bottom: 3px; }
.pdf-job ul { margin-left: 12px; }
.pdf-job li { margin-bottom: 1px; font-size: 9px; }
.pdf-skills { display: grid; grid-template-columns: repeat(3, 1fr); gap: 8px; }
.pdf-skill-group { margin-bottom: 5px; page-break-inside: avoid; break-inside: avoid; }
.pdf-skill-group h3 { font-size: 9px; color: #1a1a2e; margin-bottom: 2px; }
.pdf-skill-group .tags { font-size: 8px; color: #666; line-height: 1.4; }
.pdf-certs { display: block; margin-top: 5px; }
.pdf-cert { font-size: 9px; margin-bottom: 5px; display: block; page-break-inside: avoid; break-inside: avoid; }
.pdf-cert strong { color: #1a1a2e; }
.pdf-edu { text-align: center; margin-top: 5px; page-break-inside: avoid; break-inside: avoid; }
.pdf-edu h3 { font-size: 10px; color: #1a1a2e; }
.pdf-edu p { font-size: 9px; color: #666; }
</style>"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atomic_units_avoid_breaks() {
        for class in ATOMIC_UNIT_CLASSES {
            let rule_start = PRINT_STYLESHEET
                .find(&format!(".{} {{", class))
                .unwrap_or_else(|| panic!("no rule for .{}", class));
            let rule_end = rule_start + PRINT_STYLESHEET[rule_start..].find('}').unwrap();
            let rule = &PRINT_STYLESHEET[rule_start..rule_end];
            assert!(rule.contains("break-inside: avoid"), "{} is splittable", class);
        }
    }

    #[test]
    fn test_skills_use_three_column_grid() {
        assert!(PRINT_STYLESHEET.contains("grid-template-columns: repeat(3, 1fr)"));
    }
}
