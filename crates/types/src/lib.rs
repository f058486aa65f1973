//! Profile configuration records shared by every Folio renderer.
//!
//! A [`Profile`] is parsed once from the YAML profile document, validated, and
//! then handed out by shared reference. Nothing downstream mutates it.

mod error;
pub mod profile;
pub mod section;

pub use error::ProfileError;
pub use profile::{
    About, Certification, Contact, Education, Job, Link, Name, Personal, Profile, SkillGroup,
    Stat, Theme,
};
pub use section::SectionId;
