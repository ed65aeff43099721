use crate::error::AppError;

pub fn validate_create_project(title: &str, description: &str) -> Result<(), AppError> {
    // Whitespace counts as content; only truly empty fields are rejected
    if title.is_empty() || description.is_empty() {
        return Err(AppError::validation("Please fill input"));
    }
    Ok(())
}
