//! Keyword relevance scoring shared by every memory category.

/// Score items by how many query-term positions occur as a substring of the
/// item's extracted content, case-insensitively. A repeated query term
/// counts once per position, not once per distinct term.
///
/// A query that is empty after trimming matches nothing. Zero-score items
/// are excluded; the rest are ordered by descending score with ties kept in
/// scan order (stable sort, no secondary ranking signal), truncated to
/// `limit`.
pub fn search_keywords<T, F>(query: &str, items: &[T], extract: F, limit: usize) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> String,
{
    if query.trim().is_empty() {
        return Vec::new();
    }

    let query = query.to_lowercase();
    let terms: Vec<&str> = query.split_whitespace().collect();

    let mut scored: Vec<(T, usize)> = Vec::new();
    for item in items {
        let content = extract(item).to_lowercase();
        let score = terms.iter().filter(|term| content.contains(*term)).count();
        if score > 0 {
            scored.push((item.clone(), score));
        }
    }

    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.into_iter().take(limit).map(|(item, _)| item).collect()
}
