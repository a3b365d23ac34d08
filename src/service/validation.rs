//! Request validation for framework bodies.

use crate::error::AppError;
use crate::model::{FrameworkDto, FrameworkFields, NAME_MAX_LEN};

pub struct RequestValidator;

impl RequestValidator {
    /// Check a create/edit body and extract its fields. The body must not carry an
    /// `id`; identity comes from the store or the path.
    pub fn validate(dto: FrameworkDto) -> Result<FrameworkFields, AppError> {
        if let Some(id) = dto.id {
            return Err(AppError::Validation(format!(
                "id must not be supplied (got {})",
                id
            )));
        }
        let name = dto
            .name
            .ok_or_else(|| AppError::Validation("name is required".into()))?;
        if name.trim().is_empty() {
            return Err(AppError::Validation("name must not be blank".into()));
        }
        if name.chars().count() > NAME_MAX_LEN {
            return Err(AppError::Validation(format!(
                "name must be at most {} characters",
                NAME_MAX_LEN
            )));
        }
        let versions = dto
            .version
            .ok_or_else(|| AppError::Validation("version is required".into()))?;
        if versions.is_empty() {
            return Err(AppError::Validation("version must not be empty".into()));
        }
        let deprecation_date = dto
            .deprecation_date
            .ok_or_else(|| AppError::Validation("deprecationDate is required".into()))?;
        let hype_level = dto
            .hype_level
            .ok_or_else(|| AppError::Validation("hypeLevel is required".into()))?;
        Ok(FrameworkFields {
            name,
            versions,
            deprecation_date,
            hype_level,
        })
    }
}
