//! Registry of allowed expense categories.

/// Categories available when configuration does not provide its own list.
pub const DEFAULT_CATEGORIES: [&str; 6] = [
    "Food",
    "Travel",
    "Entertainment",
    "Utilities",
    "Health",
    "Education",
];

/// A fixed, ordered set of category names.
///
/// Membership is an exact, case-sensitive string match. The registry is
/// immutable once built; stored expenses keep their category even if a later
/// registry no longer lists it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRegistry {
    names: Vec<String>,
}

impl CategoryRegistry {
    /// Builds a registry from names, dropping blanks and duplicates while
    /// preserving first-seen order.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for name in names {
            let name = name.into().trim().to_string();
            if !name.is_empty() && !unique.contains(&name) {
                unique.push(name);
            }
        }
        Self { names: unique }
    }

    /// Returns true if `name` is a registered category.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Registered names in registry order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of registered categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if no category is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_CATEGORIES)
    }
}
