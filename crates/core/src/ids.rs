//! Prefixed sequential identifiers (`list0`, `list1`, `todo4`, ...).
//!
//! Ids are generated from the ids already present in a collection: the next
//! id is one past the highest numeral currently in use. A freshly generated id
//! is therefore always greater than every id it shares a collection with.

/// Prefix used for list ids.
pub const LIST_PREFIX: &str = "list";
/// Prefix used for todo ids.
pub const TODO_PREFIX: &str = "todo";

/// Extract the numeral part of a prefixed id.
///
/// Only the leading digits after the prefix are read; trailing characters
/// are ignored and a remainder without leading digits counts as `0`.
///
/// ```
/// use checklist_core::ids::numeral_for;
///
/// assert_eq!(numeral_for("list12", "list"), 12);
/// assert_eq!(numeral_for("list2x", "list"), 2);
/// assert_eq!(numeral_for("listx", "list"), 0);
/// ```
pub fn numeral_for(id: &str, prefix: &str) -> u64 {
    let rest = id.strip_prefix(prefix).unwrap_or(id);
    let digits = rest
        .find(|c: char| !c.is_ascii_digit())
        .map_or(rest, |end| &rest[..end]);

    digits.parse().unwrap_or(0)
}

/// Generate the next id for a collection whose current ids are `existing`.
///
/// An empty collection yields `{prefix}0`.
pub fn next_id<'a, I>(existing: I, prefix: &str) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let next = existing
        .into_iter()
        .map(|id| numeral_for(id, prefix))
        .max()
        .map_or(0, |max| max + 1);

    format!("{prefix}{next}")
}
