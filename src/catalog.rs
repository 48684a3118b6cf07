use crate::models::CatalogEntry;

/// Look up a catalog entry by id.
pub fn find_entry<'a>(entries: &'a [CatalogEntry], id: &str) -> Option<&'a CatalogEntry> {
    entries.iter().find(|entry| entry.id == id)
}

/// Case-insensitive substring filter over name and description, for
/// search-assisted selection. Matches keep catalog order; an empty query
/// matches everything.
pub fn filter_entries<'a>(entries: &'a [CatalogEntry], query: &str) -> Vec<&'a CatalogEntry> {
    let needle = query.trim().to_lowercase();

    entries
        .iter()
        .filter(|entry| {
            needle.is_empty()
                || entry.name.to_lowercase().contains(&needle)
                || entry.description.to_lowercase().contains(&needle)
        })
        .collect()
}
