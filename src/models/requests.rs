use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Query string for the match endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct FindMatchesQuery {
    #[validate(required, custom(function = "not_blank"))]
    #[serde(alias = "userId")]
    pub id: Option<String>,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<usize>,
}

impl FindMatchesQuery {
    /// Subject id exactly as sent, empty when missing
    pub fn subject_id(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
