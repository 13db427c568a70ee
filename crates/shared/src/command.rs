#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validate(#[from] validator::ValidationErrors),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Names of the fields that failed validation, sorted.
    pub fn invalid_fields(&self) -> Vec<String> {
        let Self::Validate(errors) = self;

        let mut fields = errors
            .field_errors()
            .keys()
            .map(|field| field.to_string())
            .collect::<Vec<_>>();
        fields.sort_unstable();
        fields
    }
}
