use crate::domain::{
    entities::{ScaffoldPlan, TemplateEntry, TemplateGroup},
    error::DomainError,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across services.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_plan(plan: &ScaffoldPlan) -> Result<(), DomainError> {
        plan.validate()
    }

    /// A catalog group must not register the same path twice.
    pub fn validate_group(
        group: TemplateGroup,
        entries: &[TemplateEntry],
    ) -> Result<(), DomainError> {
        for (i, entry) in entries.iter().enumerate() {
            if entries[..i].iter().any(|e| e.path == entry.path) {
                return Err(DomainError::DuplicateTemplate {
                    group: group.slug(),
                    path: entry.path.to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::TemplateContent;

    #[test]
    fn duplicate_catalog_entry_is_rejected() {
        let entries = vec![
            TemplateEntry::new("README.md", TemplateContent::detect("a")),
            TemplateEntry::new("README.md", TemplateContent::detect("b")),
        ];
        assert!(matches!(
            DomainValidator::validate_group(TemplateGroup::Docs, &entries),
            Err(DomainError::DuplicateTemplate { .. })
        ));
    }
}
