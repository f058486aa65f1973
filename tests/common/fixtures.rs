/// The shared profile document with two jobs, two skill groups, one
/// certification and one education entry.
pub const PROFILE_YAML: &str = include_str!("../fixtures/profile.yaml");

/// A profile whose experience holds exactly one job.
pub fn single_job_profile() -> String {
    let start = PROFILE_YAML.find("experience:").unwrap();
    let end = PROFILE_YAML.find("skills:").unwrap();
    let experience = r#"experience:
  - role: Engineer
    company: Acme
    location: Remote
    period: 2020–2023
    highlights:
      - Built X
      - Shipped Y

"#;
    format!("{}{}{}", &PROFILE_YAML[..start], experience, &PROFILE_YAML[end..])
}

/// A profile whose tagline and first skill contain markup.
pub fn hostile_profile() -> String {
    PROFILE_YAML
        .replacen("Analytical Engines", "\"<script>alert(1)</script>\"", 1)
        .replacen("[Rust,", "[\"C<T> & friends\",", 1)
}
