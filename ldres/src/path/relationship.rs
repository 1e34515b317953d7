//! Relationships between paths.
//!
//! This module answers how two paths relate in the node hierarchy, and where
//! two decorated paths first diverge (used by serializers to minimize output).

use crate::path::types::Path;

/// Relationship between two paths, by identity.
///
/// # Examples
///
/// ```
/// use ldres::path::PathRelationship;
/// use ldres::Path;
///
/// let parent = Path::parse("//ldml/dates").unwrap();
/// let child = Path::parse("//ldml/dates/calendars").unwrap();
///
/// assert_eq!(
///     PathRelationship::between(&parent, &child),
///     PathRelationship::Ancestor
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathRelationship {
    /// The first path is a proper prefix of the second.
    Ancestor,

    /// The second path is a proper prefix of the first.
    Descendant,

    /// The paths have the same identity.
    Same,

    /// Neither path is a prefix of the other.
    Unrelated,
}

impl PathRelationship {
    /// Determine the relationship between two paths.
    ///
    /// # Examples
    ///
    /// ```
    /// use ldres::path::PathRelationship;
    /// use ldres::Path;
    ///
    /// let a = Path::parse("//ldml/a").unwrap();
    /// let ab = Path::parse("//ldml/a/b").unwrap();
    /// let b = Path::parse("//ldml/b").unwrap();
    ///
    /// assert_eq!(PathRelationship::between(&ab, &a), PathRelationship::Descendant);
    /// assert_eq!(PathRelationship::between(&a, &a), PathRelationship::Same);
    /// assert_eq!(PathRelationship::between(&a, &b), PathRelationship::Unrelated);
    /// ```
    #[must_use]
    pub fn between(first: &Path, second: &Path) -> Self {
        if first == second {
            Self::Same
        } else if second.starts_with(first) {
            Self::Ancestor
        } else if first.starts_with(second) {
            Self::Descendant
        } else {
            Self::Unrelated
        }
    }

    /// Check if the relationship is hierarchical (not unrelated).
    #[must_use]
    pub const fn is_hierarchical(&self) -> bool {
        !matches!(self, Self::Unrelated)
    }
}

/// First node index at which `a` and `b` differ by full equality.
///
/// Decorative attributes count. If one path is a prefix of the other, the
/// shorter length is returned.
///
/// # Examples
///
/// ```
/// use ldres::path::first_difference;
/// use ldres::Path;
///
/// let a = Path::parse(r#"//ldml/a/b[@draft="x"]/c"#).unwrap();
/// let b = Path::parse("//ldml/a/b/c").unwrap();
/// assert_eq!(first_difference(&a, &b), 2);
///
/// let prefix = Path::parse("//ldml/a").unwrap();
/// assert_eq!(first_difference(&a, &prefix), 2);
/// ```
#[must_use]
pub fn first_difference(a: &Path, b: &Path) -> usize {
    a.nodes()
        .iter()
        .zip(b.nodes())
        .position(|(x, y)| !x.same_decoration(y))
        .unwrap_or_else(|| a.len().min(b.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(s: &str) -> Path {
        Path::parse(s).unwrap()
    }

    #[test]
    fn test_same() {
        assert_eq!(
            PathRelationship::between(&p("//ldml/a"), &p(r#"//ldml/a[@draft="x"]"#)),
            PathRelationship::Same
        );
    }

    #[test]
    fn test_ancestor_and_descendant() {
        let a = p("//ldml/a");
        let abc = p("//ldml/a/b/c");
        assert_eq!(PathRelationship::between(&a, &abc), PathRelationship::Ancestor);
        assert_eq!(PathRelationship::between(&abc, &a), PathRelationship::Descendant);
    }

    #[test]
    fn test_sibling_names_are_unrelated() {
        let rel = PathRelationship::between(&p("//ldml/a"), &p("//ldml/ab/c"));
        assert_eq!(rel, PathRelationship::Unrelated);
        assert!(!rel.is_hierarchical());
    }

    #[test]
    fn test_attribute_values_split_branches() {
        let rel = PathRelationship::between(
            &p(r#"//ldml/a[@type="x"]"#),
            &p(r#"//ldml/a[@type="y"]/b"#),
        );
        assert_eq!(rel, PathRelationship::Unrelated);
    }

    #[test]
    fn test_first_difference_identical() {
        let a = p(r#"//ldml/a[@type="x"]/b"#);
        assert_eq!(first_difference(&a, &a.clone()), 3);
    }

    #[test]
    fn test_first_difference_first_node() {
        assert_eq!(first_difference(&p("//ldml/a"), &p("//other/a")), 0);
    }

    #[test]
    fn test_first_difference_decoration_counts() {
        let a = p(r#"//ldml/a[@references="R"]/b"#);
        let b = p("//ldml/a/b");
        assert_eq!(first_difference(&a, &b), 1);
    }
}
