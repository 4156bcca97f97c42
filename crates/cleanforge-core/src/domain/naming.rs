//! Resource naming transforms.
//!
//! Every generated artifact derives its identifiers from one user-supplied
//! hyphenated lowercase token, e.g. `user-profile`. The casing variants
//! here are the only naming logic in the system; templates never re-derive
//! names on their own.

use std::fmt;

use crate::domain::error::DomainError;

/// A user-supplied resource name in hyphenated lowercase form.
///
/// The name itself is never persisted; only its derived casing variants
/// appear in generated files and paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceName(String);

impl ResourceName {
    /// Create a resource name, validating the allowed character set.
    ///
    /// Accepts lowercase ASCII letters, digits, and hyphens. Leading or
    /// trailing hyphens are rejected because they would produce empty
    /// segments in the casing transforms.
    pub fn new(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();

        if raw.is_empty() {
            return Err(DomainError::InvalidResourceName {
                name: raw,
                reason: "name cannot be empty".into(),
            });
        }
        if raw.starts_with('-') || raw.ends_with('-') {
            return Err(DomainError::InvalidResourceName {
                name: raw,
                reason: "name cannot start or end with '-'".into(),
            });
        }
        if !raw
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(DomainError::InvalidResourceName {
                name: raw,
                reason: "only lowercase letters, digits and '-' are allowed".into(),
            });
        }

        Ok(Self(raw))
    }

    /// The raw hyphenated token, e.g. `user-profile`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// PascalCase form: `user-profile` → `UserProfile`.
    pub fn pascal_case(&self) -> String {
        pascal_case(&self.0)
    }

    /// camelCase form: `user-profile` → `userProfile`.
    pub fn camel_case(&self) -> String {
        let mut pascal = self.pascal_case();
        if let Some(first) = pascal.get(..1) {
            let lower = first.to_ascii_lowercase();
            pascal.replace_range(..1, &lower);
        }
        pascal
    }

    /// Upper-snake constant form: `user-profile` → `USER_PROFILE`.
    pub fn constant_case(&self) -> String {
        self.0.replace('-', "_").to_ascii_uppercase()
    }
}

impl fmt::Display for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Capitalize each hyphen-separated segment and drop the hyphens.
///
/// Empty input yields empty output; this is total and deterministic.
pub fn pascal_case(token: &str) -> String {
    token
        .split('-')
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_segment() {
        let name = ResourceName::new("user").unwrap();
        assert_eq!(name.pascal_case(), "User");
        assert_eq!(name.camel_case(), "user");
        assert_eq!(name.constant_case(), "USER");
    }

    #[test]
    fn multi_segment() {
        let name = ResourceName::new("user-profile").unwrap();
        assert_eq!(name.pascal_case(), "UserProfile");
        assert_eq!(name.camel_case(), "userProfile");
        assert_eq!(name.constant_case(), "USER_PROFILE");
    }

    #[test]
    fn three_segments() {
        let name = ResourceName::new("shopping-cart-item").unwrap();
        assert_eq!(name.pascal_case(), "ShoppingCartItem");
        assert_eq!(name.constant_case(), "SHOPPING_CART_ITEM");
    }

    #[test]
    fn pascal_output_has_no_hyphens() {
        for raw in ["a", "a-b", "a-b-c", "long-resource-name-here"] {
            let name = ResourceName::new(raw).unwrap();
            assert!(!name.pascal_case().contains('-'), "failed for {raw}");
        }
    }

    #[test]
    fn constant_output_has_no_lowercase() {
        for raw in ["a", "user-profile", "x-y-z"] {
            let name = ResourceName::new(raw).unwrap();
            let constant = name.constant_case();
            assert!(!constant.contains('-'));
            assert!(constant.chars().all(|c| !c.is_ascii_lowercase()));
        }
    }

    #[test]
    fn pascal_case_fn_on_empty_is_empty() {
        assert_eq!(pascal_case(""), "");
    }

    #[test]
    fn empty_name_rejected() {
        assert!(matches!(
            ResourceName::new(""),
            Err(DomainError::InvalidResourceName { .. })
        ));
    }

    #[test]
    fn uppercase_rejected() {
        assert!(ResourceName::new("UserProfile").is_err());
    }

    #[test]
    fn edge_hyphens_rejected() {
        assert!(ResourceName::new("-user").is_err());
        assert!(ResourceName::new("user-").is_err());
    }

    #[test]
    fn digits_allowed() {
        assert!(ResourceName::new("oauth2-client").is_ok());
    }
}
