use thiserror::Error;

/// Failures raised while turning a profile document into a [`crate::Profile`].
#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Profile document could not be parsed: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Required profile field '{path}' is empty")]
    MissingField { path: &'static str },
}

impl ProfileError {
    /// True when the document parsed but a required value was blank.
    pub fn is_missing_field(&self) -> bool {
        matches!(self, ProfileError::MissingField { .. })
    }
}
