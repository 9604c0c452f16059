//! Sort parameter validation for ad-space listing queries.
//!
//! User-supplied sort keys are resolved against a whitelist before the
//! repository interpolates them into an ORDER BY clause.

/// Allowed sort keys and the columns they resolve to. `price` and
/// `price_per_day` are aliases.
const SORT_COLUMNS: &[(&str, &str)] = &[
    ("name", "name"),
    ("city", "city"),
    ("price", "price_per_day"),
    ("price_per_day", "price_per_day"),
    ("category", "category_id"),
];

/// Column used when no sort key is supplied.
pub const DEFAULT_SORT_COLUMN: &str = "name";

/// Resolve a user-supplied sort key to a whitelisted column name.
///
/// `None` falls back to [`DEFAULT_SORT_COLUMN`]; unknown keys fail with a
/// message listing the accepted values.
pub fn resolve_sort_key(key: Option<&str>) -> Result<&'static str, String> {
    let Some(raw) = key else {
        return Ok(DEFAULT_SORT_COLUMN);
    };
    let normalized = raw.to_ascii_lowercase();
    SORT_COLUMNS
        .iter()
        .find(|(k, _)| *k == normalized)
        .map(|&(_, column)| column)
        .ok_or_else(|| {
            format!(
                "Invalid 'sort_by' parameter '{raw}'. Allowed values: name, city, price, price_per_day, category"
            )
        })
}

/// Resolve a sort order to an ORDER BY direction. Defaults to ascending.
pub fn resolve_sort_order(order: Option<&str>) -> Result<&'static str, String> {
    match order {
        None => Ok("ASC"),
        Some(raw) if raw.eq_ignore_ascii_case("asc") => Ok("ASC"),
        Some(raw) if raw.eq_ignore_ascii_case("desc") => Ok("DESC"),
        Some(raw) => Err(format!(
            "Invalid 'sort_order' parameter '{raw}'. Allowed values: asc, desc"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_uses_default() {
        assert_eq!(resolve_sort_key(None).unwrap(), "name");
    }

    #[test]
    fn price_aliases_resolve_to_same_column() {
        assert_eq!(resolve_sort_key(Some("price")).unwrap(), "price_per_day");
        assert_eq!(
            resolve_sort_key(Some("price_per_day")).unwrap(),
            "price_per_day"
        );
    }

    #[test]
    fn category_resolves_to_lookup_column() {
        assert_eq!(resolve_sort_key(Some("category")).unwrap(), "category_id");
    }

    #[test]
    fn keys_are_case_insensitive() {
        assert_eq!(resolve_sort_key(Some("NAME")).unwrap(), "name");
        assert_eq!(resolve_sort_key(Some("City")).unwrap(), "city");
    }

    #[test]
    fn unknown_key_lists_allowed_values() {
        let err = resolve_sort_key(Some("address")).unwrap_err();
        assert!(err.contains("Allowed values"));
        assert!(err.contains("price_per_day"));
    }

    #[test]
    fn missing_order_defaults_to_ascending() {
        assert_eq!(resolve_sort_order(None).unwrap(), "ASC");
    }

    #[test]
    fn descending_order_accepted() {
        assert_eq!(resolve_sort_order(Some("desc")).unwrap(), "DESC");
        assert_eq!(resolve_sort_order(Some("DESC")).unwrap(), "DESC");
    }

    #[test]
    fn unknown_order_rejected() {
        let err = resolve_sort_order(Some("sideways")).unwrap_err();
        assert!(err.contains("asc, desc"));
    }
}
