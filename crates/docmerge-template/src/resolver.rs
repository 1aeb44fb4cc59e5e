use docmerge_model::{NullPolicy, Row};

use crate::registry::FilenameRegistry;

/// Placeholder that substitutes the zero-based row number.
pub const INDEX_PLACEHOLDER: &str = "{index}";

/// Resolves a filename template against table rows, one row at a time.
///
/// Each resolved name is claimed from an internal [`FilenameRegistry`], so
/// names returned by one resolver are pairwise distinct.
#[derive(Debug)]
pub struct FilenameResolver<'a> {
    template: &'a str,
    columns: &'a [String],
    policy: &'a NullPolicy,
    extension: &'a str,
    registry: FilenameRegistry,
}

impl<'a> FilenameResolver<'a> {
    #[must_use]
    pub fn new(
        template: &'a str,
        columns: &'a [String],
        policy: &'a NullPolicy,
        extension: &'a str,
    ) -> Self {
        Self {
            template,
            columns,
            policy,
            extension,
            registry: FilenameRegistry::new(),
        }
    }

    /// Resolve the template for one row and allocate a unique filename.
    ///
    /// Every `{ColumnName}` for a real column is substituted with the row's
    /// value under the null policy, then `{index}` with the row number. A
    /// placeholder naming no real column stays in the name verbatim. If the
    /// substituted name is blank, `Document_{row_index}` is used instead.
    pub fn resolve(&mut self, row: &Row, row_index: usize) -> String {
        let mut name = self.template.to_string();
        for column in self.columns {
            let placeholder = format!("{{{column}}}");
            if name.contains(&placeholder) {
                let value = self.policy.resolve_or_empty(row.get(column));
                name = name.replace(&placeholder, &value);
            }
        }
        name = name.replace(INDEX_PLACEHOLDER, &row_index.to_string());

        let stem = if name.trim().is_empty() {
            format!("Document_{row_index}")
        } else {
            name
        };
        self.registry.claim(&stem, self.extension)
    }
}
