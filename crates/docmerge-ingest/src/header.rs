use std::collections::HashMap;

/// Normalize a header row into usable, unique column names.
///
/// Whitespace is trimmed, blank headers become `Unnamed: {position}`, and
/// repeated names get a numeric suffix (`Name.1`, `Name.2`) so every column
/// can be addressed unambiguously.
pub fn normalize_headers(raw: &[String]) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut headers = Vec::with_capacity(raw.len());

    for (position, cell) in raw.iter().enumerate() {
        let trimmed = cell.trim();
        let base = if trimmed.is_empty() {
            format!("Unnamed: {position}")
        } else {
            trimmed.to_string()
        };

        let name = match seen.get(&base) {
            None => base.clone(),
            Some(&count) => {
                let mut suffix = count;
                let mut candidate = format!("{base}.{suffix}");
                while seen.contains_key(&candidate) {
                    suffix += 1;
                    candidate = format!("{base}.{suffix}");
                }
                candidate
            }
        };

        let next = seen.get(&base).copied().unwrap_or(0) + 1;
        seen.insert(base, next);
        seen.entry(name.clone()).or_insert(1);
        headers.push(name);
    }

    headers
}
