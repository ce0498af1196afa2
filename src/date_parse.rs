//! Date-string to year parsing. This sits at the boundary of the indexing
//! core: descriptive dates arrive as free text ("1911", "ca. 1900-1905",
//! "[19--?]") and only a best-effort year is wanted for the facet field.

use once_cell::sync::Lazy;
use regex::Regex;

static YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(\d{4})\b").unwrap());

/// The earliest four-digit year appearing in the string, if any.
pub fn earliest_year(date: &str) -> Option<i32> {
    YEAR.find_iter(date)
        .filter_map(|m| m.as_str().parse::<i32>().ok())
        .min()
}
