use std::collections::HashSet;

/// Filenames already allocated during one generation pass.
///
/// Scoped to a single generate-and-package operation. Claiming a name that
/// is already taken appends `_1`, `_2`, ... before the extension until a
/// free name is found.
#[derive(Debug, Default)]
pub struct FilenameRegistry {
    allocated: HashSet<String>,
}

impl FilenameRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a unique filename for `stem` with the given extension.
    ///
    /// The returned name is recorded, so later claims for the same stem get
    /// a numeric suffix.
    pub fn claim(&mut self, stem: &str, extension: &str) -> String {
        let mut filename = format!("{stem}.{extension}");
        let mut counter = 1;
        while self.allocated.contains(&filename) {
            filename = format!("{stem}_{counter}.{extension}");
            counter += 1;
        }
        self.allocated.insert(filename.clone());
        filename
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.allocated.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.allocated.is_empty()
    }
}
