//! Configuration options for previewing and generating.

use serde::{Deserialize, Serialize};

use crate::policy::NullPolicy;

/// Name columns used for the default required-column set and the suggested
/// filename template.
pub const DEFAULT_NAME_COLUMNS: [&str; 2] = ["First and Middle Name", "Last Name"];

/// How missing required columns are treated during preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Enforcement {
    /// Reject the upload when a required column is absent.
    Strict,
    /// Warn and proceed without the column.
    #[default]
    Advisory,
}

/// Required-column policy.
///
/// Historic variants of this tool disagreed on whether the name columns were
/// mandatory; this makes the behavior a configuration choice instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRequirement {
    pub columns: Vec<String>,
    pub enforcement: Enforcement,
}

impl Default for ColumnRequirement {
    fn default() -> Self {
        Self {
            columns: DEFAULT_NAME_COLUMNS.iter().map(|c| (*c).to_string()).collect(),
            enforcement: Enforcement::Advisory,
        }
    }
}

impl ColumnRequirement {
    /// No required columns at all.
    pub fn none() -> Self {
        Self {
            columns: Vec::new(),
            enforcement: Enforcement::Advisory,
        }
    }

    pub fn advisory(columns: Vec<String>) -> Self {
        Self {
            columns,
            enforcement: Enforcement::Advisory,
        }
    }

    pub fn strict(columns: Vec<String>) -> Self {
        Self {
            columns,
            enforcement: Enforcement::Strict,
        }
    }

    #[must_use]
    pub fn with_enforcement(mut self, enforcement: Enforcement) -> Self {
        self.enforcement = enforcement;
        self
    }

    /// Required columns absent from `table_columns`, in requirement order.
    pub fn missing_from(&self, table_columns: &[String]) -> Vec<String> {
        self.columns
            .iter()
            .filter(|required| !table_columns.contains(required))
            .cloned()
            .collect()
    }
}

/// Options for the upload/preview operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewOptions {
    /// Number of leading rows rendered into the preview.
    pub preview_rows: usize,
    pub required: ColumnRequirement,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            preview_rows: 5,
            required: ColumnRequirement::default(),
        }
    }
}

impl PreviewOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_preview_rows(mut self, rows: usize) -> Self {
        self.preview_rows = rows;
        self
    }

    #[must_use]
    pub fn with_required(mut self, required: ColumnRequirement) -> Self {
        self.required = required;
        self
    }
}

/// Inputs for the generate/download operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Filename template with `{ColumnName}` and `{index}` placeholders.
    pub template: String,
    /// Requested archive download name; normalized to `Documents.zip` when
    /// empty and suffixed with `.zip` when needed.
    pub archive_name: Option<String>,
    pub null_policy: NullPolicy,
}

impl GenerateRequest {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            archive_name: None,
            null_policy: NullPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_archive_name(mut self, name: impl Into<String>) -> Self {
        self.archive_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_null_policy(mut self, policy: NullPolicy) -> Self {
        self.null_policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_requirement_is_the_advisory_name_pair() {
        let requirement = ColumnRequirement::default();
        assert_eq!(requirement.enforcement, Enforcement::Advisory);
        assert_eq!(
            requirement.columns,
            vec![
                "First and Middle Name".to_string(),
                "Last Name".to_string()
            ]
        );
    }

    #[test]
    fn missing_from_reports_in_requirement_order() {
        let requirement = ColumnRequirement::strict(vec![
            "A".to_string(),
            "B".to_string(),
            "C".to_string(),
        ]);
        let present = vec!["B".to_string()];
        assert_eq!(
            requirement.missing_from(&present),
            vec!["A".to_string(), "C".to_string()]
        );
    }

    #[test]
    fn generate_request_builders_compose() {
        let request = GenerateRequest::new("{Last Name}")
            .with_archive_name("Batch")
            .with_null_policy(NullPolicy::fill_default());
        assert_eq!(request.template, "{Last Name}");
        assert_eq!(request.archive_name.as_deref(), Some("Batch"));
        assert_eq!(request.null_policy, NullPolicy::fill_default());
    }
}
