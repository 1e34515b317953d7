//! Alias directives and the root alias map.
//!
//! Inside the root store, any path ending in an `alias` element encodes a
//! redirection. The part of the path before the alias element is the *old*
//! path; the alias element's `source` and `path` attributes name the target
//! locale and the *new* path:
//!
//! ```text
//! //ldml/dates/calendars/calendar[@type="buddhist"]/eras/alias[@source="locale"][@path="../../calendar[@type='gregorian']/eras"]
//! ```
//!
//! Any query under the old path is rewritten to the same suffix under the new
//! path.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::ops::Bound;

use once_cell::sync::{Lazy, OnceCell};
use regex::Regex;

use crate::error::{Error, Result};
use crate::locale::LocaleId;
use crate::path::{Grammar, Path};

/// Element name that marks an alias directive.
pub const ALIAS_ELEMENT: &str = "alias";

/// `source` value meaning "the same locale, after inheritance".
const SAME_LOCALE: &str = "locale";

static FRAGMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^(?:\[@source="([^"]*)"\])?(?:\[@path=(?:"([^"]*)"|'([^']*)')\])?(?:\[@draft="[^"]*"\])?$"#,
    )
    .expect("alias fragment pattern is valid")
});

/// Returns `true` if the path ends in an alias element.
///
/// Data stored *under* an element named `alias` is ordinary data.
#[must_use]
pub fn is_alias_path(path: &Path) -> bool {
    path.last().is_some_and(|node| node.name() == ALIAS_ELEMENT)
}

/// A parsed redirection: `(old, new, target locale?)`.
///
/// A directive always changes something: either `old != new` or a target
/// locale is named.
///
/// # Examples
///
/// ```
/// use ldres::{AliasDirective, Path};
/// use ldres::path::Grammar;
///
/// let alias = Path::parse(r#"//ldml/a/alias[@source="locale"][@path="../b"]"#).unwrap();
/// let directive = AliasDirective::from_alias_path(&alias, Grammar::ldml()).unwrap();
///
/// assert_eq!(directive.old_path().to_string(), "//ldml/a");
/// assert_eq!(directive.new_path().to_string(), "//ldml/b");
/// assert!(directive.target_locale().is_none());
///
/// let query = Path::parse("//ldml/a/c").unwrap();
/// assert_eq!(directive.rewrite(&query).unwrap().to_string(), "//ldml/b/c");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasDirective {
    old: Path,
    new: Path,
    target_locale: Option<LocaleId>,
}

impl AliasDirective {
    /// Creates a directive, enforcing that it is not a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAlias`] if `old == new` and no locale is named.
    pub fn new(old: Path, new: Path, target_locale: Option<LocaleId>) -> Result<Self> {
        if old == new && target_locale.is_none() {
            return Err(Error::InvalidAlias {
                path: old.to_string(),
                reason: "alias must change the path or the locale".to_string(),
            });
        }
        Ok(Self {
            old,
            new,
            target_locale,
        })
    }

    /// Parses the directive encoded by a path ending in an alias element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAlias`] if the path does not end in an alias
    /// element, its attributes do not match the alias grammar, the `path` value
    /// does not parse or pops past the first node, or the directive is a no-op.
    pub fn from_alias_path(alias_path: &Path, grammar: &Grammar) -> Result<Self> {
        let invalid = |reason: String| Error::InvalidAlias {
            path: alias_path.to_string(),
            reason,
        };

        if !is_alias_path(alias_path) {
            return Err(invalid("path does not end in an alias element".to_string()));
        }

        let identity = alias_path.identity();
        let nodes = identity.nodes();
        let index = nodes.len() - 1;
        let fragment = nodes[index].to_string()[ALIAS_ELEMENT.len()..].to_string();

        let captures = FRAGMENT
            .captures(&fragment)
            .ok_or_else(|| invalid(format!("unrecognized alias fragment '{fragment}'")))?;

        let target_locale = match captures.get(1).map(|m| m.as_str()) {
            None | Some(SAME_LOCALE) => None,
            Some(source) => Some(
                LocaleId::new(source).map_err(|e| invalid(format!("bad source: {e}")))?,
            ),
        };

        let old = Path::from_nodes(nodes[..index].to_vec());
        let new = match captures.get(2).or_else(|| captures.get(3)) {
            None => old.clone(),
            Some(relative) => old
                .join_relative_with(grammar, relative.as_str())
                .map_err(|e| invalid(format!("bad path: {e}")))?,
        };

        Self::new(old, new, target_locale).map_err(|_| {
            invalid("alias must change the path or the locale".to_string())
        })
    }

    /// The path being redirected.
    #[must_use]
    pub fn old_path(&self) -> &Path {
        &self.old
    }

    /// The path redirected to.
    #[must_use]
    pub fn new_path(&self) -> &Path {
        &self.new
    }

    /// The locale redirected to, if the directive switches locale.
    #[must_use]
    pub fn target_locale(&self) -> Option<&LocaleId> {
        self.target_locale.as_ref()
    }

    /// Rewrites `query` if it lies under the old path.
    #[must_use]
    pub fn rewrite(&self, query: &Path) -> Option<Path> {
        query
            .starts_with(&self.old)
            .then(|| query.replace_prefix(self.old.len(), &self.new))
    }
}

impl fmt::Display for AliasDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> ", self.old)?;
        if let Some(locale) = &self.target_locale {
            write!(f, "{locale}:")?;
        }
        write!(f, "{}", self.new)
    }
}

/// The alias directives of a root store, keyed by old path.
///
/// Lookups use a lexical longest-prefix rule: an exact key wins; otherwise the
/// greatest key sorting below the query is taken, and applies only if it is a
/// structural prefix of the query. A shorter alias that is a prefix can be
/// shadowed by a lexically closer sibling.
#[derive(Debug, Default)]
pub struct AliasMap {
    directives: BTreeMap<String, AliasDirective>,
    reverse: OnceCell<HashMap<Path, Vec<Path>>>,
}

impl AliasMap {
    /// Builds the map from every alias path among `paths`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAlias`] for a malformed or no-op alias, or if
    /// two aliases redirect the same old path.
    pub fn discover<'a>(paths: impl Iterator<Item = &'a Path>, grammar: &Grammar) -> Result<Self> {
        let mut directives = BTreeMap::new();
        for path in paths.filter(|p| is_alias_path(p)) {
            let directive = AliasDirective::from_alias_path(path, grammar)?;
            let key = directive.old.identity_string();
            if let Some(existing) = directives.insert(key, directive) {
                return Err(Error::InvalidAlias {
                    path: path.to_string(),
                    reason: format!("{} is already aliased", existing.old),
                });
            }
        }

        log::debug!("discovered {} alias directives", directives.len());
        Ok(Self {
            directives,
            reverse: OnceCell::new(),
        })
    }

    /// Number of directives.
    #[must_use]
    pub fn len(&self) -> usize {
        self.directives.len()
    }

    /// Returns `true` if there are no directives.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }

    /// Directives in order of their old path's identity string.
    pub fn iter(&self) -> impl Iterator<Item = &AliasDirective> {
        self.directives.values()
    }

    /// The directive applying to `query`, if any.
    #[must_use]
    pub fn lookup(&self, query: &Path) -> Option<&AliasDirective> {
        let key = query.identity_string();
        if let Some(directive) = self.directives.get(&key) {
            return Some(directive);
        }

        let (_, candidate) = self
            .directives
            .range::<str, _>((Bound::Unbounded, Bound::Excluded(key.as_str())))
            .next_back()?;
        query.starts_with(&candidate.old).then_some(candidate)
    }

    /// New path → old paths that redirect to it. Built on first use.
    pub fn reverse(&self) -> &HashMap<Path, Vec<Path>> {
        self.reverse.get_or_init(|| {
            let mut reverse: HashMap<Path, Vec<Path>> = HashMap::new();
            for directive in self.directives.values() {
                reverse
                    .entry(directive.new.clone())
                    .or_default()
                    .push(directive.old.clone());
            }
            reverse
        })
    }
}
