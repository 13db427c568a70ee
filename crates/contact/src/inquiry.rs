use serde::{Deserialize, Serialize};
use validator::Validate;

/// One contact-form submission. Lives for a single request and is never stored.
#[derive(Validate, Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub project_type: String,
    #[validate(length(min = 1))]
    pub budget: String,
    #[validate(length(min = 1))]
    pub message: String,
}
