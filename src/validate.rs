use std::collections::BTreeSet;

use crate::error::{Error, Result};

/// Educator search queries are free text (usually a Cyrillic last name).
/// Dot-only queries are refused: URL normalisation would drop them as path segments.
pub fn search_query(query: &str) -> Result<()> {
    if query.trim().is_empty() {
        return Err(invalid("Search query is empty"));
    }
    if query.chars().any(char::is_control) {
        return Err(invalid("Search query contains control characters"));
    }
    if query.chars().all(|c| c == '.') {
        return Err(invalid(format!("Search query {query:?} consists of dots only")));
    }
    Ok(())
}

/// Object ids of addresses and classrooms are GUIDs (`8-4-4-4-12` hex digits).
pub fn oid(oid: &str) -> Result<()> {
    const GROUPS: [usize; 5] = [8, 4, 4, 4, 12];

    let groups: Vec<&str> = oid.split('-').collect();
    let well_formed = groups.len() == GROUPS.len()
        && groups
            .iter()
            .zip(GROUPS)
            .all(|(group, len)| group.len() == len && group.bytes().all(|b| b.is_ascii_hexdigit()));
    if well_formed {
        Ok(())
    } else {
        Err(invalid(format!("Oid {oid:?} is not a GUID")))
    }
}

/// Extracurricular division aliases, e.g. `PhysTraining`.
pub fn alias(alias: &str) -> Result<()> {
    if alias.is_empty() {
        return Err(invalid("Alias is empty"));
    }
    let rejected: BTreeSet<char> = alias
        .chars()
        .filter(|&c| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))
        .collect();
    if rejected.is_empty() {
        Ok(())
    } else {
        Err(invalid(format!(
            "Alias {alias:?} contains invalid characters: {rejected:?}"
        )))
    }
}

fn invalid(message: impl Into<String>) -> Error {
    Error::InvalidArgument(message.into())
}
