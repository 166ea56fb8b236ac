//! Field selectors.
//!
//! LinkedIn restricts the fields of a read with a suffix on the resource
//! path: `/v1/people/~:(first-name,last-name)`.

/// Renders selectors as `:(a,b,...)`.
///
/// Selectors are used verbatim and in order. An empty list renders as an
/// empty string, so the resource path is left untouched.
///
/// ```rust
/// use linkedin_api::api::field_selectors;
///
/// assert_eq!(field_selectors(&["first-name", "last-name"]), ":(first-name,last-name)");
/// assert_eq!(field_selectors::<&str>(&[]), "");
/// ```
#[must_use]
pub fn field_selectors<S: AsRef<str>>(selectors: &[S]) -> String {
    if selectors.is_empty() {
        return String::new();
    }

    let joined = selectors
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(",");
    format!(":({joined})")
}

/// Converts a camelCase field name to its selector form.
///
/// ```rust
/// use linkedin_api::api::to_selector;
///
/// assert_eq!(to_selector("firstName"), "first-name");
/// assert_eq!(to_selector("pictureUrl"), "picture-url");
/// assert_eq!(to_selector("headline"), "headline");
/// ```
#[must_use]
pub fn to_selector(field: &str) -> String {
    let mut selector = String::with_capacity(field.len() + 4);
    for (index, c) in field.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if index > 0 {
                selector.push('-');
            }
            selector.push(c.to_ascii_lowercase());
        } else {
            selector.push(c);
        }
    }
    selector
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_selector_has_no_trailing_comma() {
        assert_eq!(field_selectors(&["id"]), ":(id)");
    }

    #[test]
    fn test_selectors_keep_order() {
        let selectors = ["headline", "id", "first-name", "num-connections"];
        assert_eq!(
            field_selectors(&selectors),
            ":(headline,id,first-name,num-connections)"
        );
    }

    #[test]
    fn test_selectors_accept_owned_strings() {
        let selectors: Vec<String> = ["firstName", "lastName"]
            .iter()
            .map(|field| to_selector(field))
            .collect();
        assert_eq!(field_selectors(&selectors), ":(first-name,last-name)");
    }

    #[test]
    fn test_nested_selectors_pass_through() {
        assert_eq!(
            field_selectors(&["positions:(title,company)"]),
            ":(positions:(title,company))"
        );
    }

    #[test]
    fn test_to_selector_multiple_humps() {
        assert_eq!(to_selector("numRecommenders"), "num-recommenders");
        assert_eq!(to_selector("siteStandardProfileRequest"), "site-standard-profile-request");
        assert_eq!(to_selector("Id"), "id");
    }
}
