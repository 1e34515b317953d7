//! Core types for structural paths.
//!
//! A [`Path`] is an ordered sequence of [`Node`]s. Each node carries its
//! attributes in canonical order, and each attribute remembers whether it is
//! distinguishing (part of the path's identity) or decorative. Equality and
//! hashing of paths look at identity only, so a decorated path and the identity
//! path it reduces to compare equal.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};
use crate::path::grammar::Grammar;

/// A single `[@name="value"]` attribute on a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    name: String,
    value: String,
    distinguishing: bool,
    rank: u16,
}

impl Attribute {
    pub(crate) fn new(name: String, value: String, distinguishing: bool, rank: u16) -> Self {
        Self {
            name,
            value,
            distinguishing,
            rank,
        }
    }

    /// The attribute name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The attribute value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether the attribute is part of the path's identity.
    #[must_use]
    pub fn is_distinguishing(&self) -> bool {
        self.distinguishing
    }

    fn canonical_cmp(&self, other: &Self) -> Ordering {
        other
            .distinguishing
            .cmp(&self.distinguishing)
            .then(self.rank.cmp(&other.rank))
            .then_with(|| self.name.cmp(&other.name))
    }

    /// Values come from the scanner, so they never hold both quote kinds;
    /// the one absent from the value delimits it.
    fn write_to(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quote = if self.value.contains('"') { '\'' } else { '"' };
        write!(f, "[@{}={quote}{}{quote}]", self.name, self.value)
    }
}

/// One element of a path: a name plus attributes in canonical order.
#[derive(Debug, Clone)]
pub struct Node {
    name: String,
    attributes: Vec<Attribute>,
}

impl Node {
    /// Creates a node with no attributes.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
        }
    }

    /// The element name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All attributes in canonical order.
    pub fn attributes(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.iter()
    }

    /// Number of attributes, decorative ones included.
    #[must_use]
    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }

    /// Looks up an attribute value by name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.find(name).map(Attribute::value)
    }

    /// Whether the node carries the named attribute.
    #[must_use]
    pub fn has_attribute(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    fn find(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// Inserts or replaces an attribute, keeping canonical order.
    pub(crate) fn put_attribute(&mut self, attribute: Attribute) {
        self.attributes.retain(|a| a.name != attribute.name);
        let at = self
            .attributes
            .partition_point(|a| a.canonical_cmp(&attribute) == Ordering::Less);
        self.attributes.insert(at, attribute);
    }

    /// Replaces the value of an existing attribute. Returns `false` if absent.
    pub(crate) fn set_attribute_value(&mut self, name: &str, value: &str) -> bool {
        match self.attributes.iter_mut().find(|a| a.name == name) {
            Some(attribute) => {
                attribute.value = value.to_string();
                true
            }
            None => false,
        }
    }

    /// Removes an attribute. Returns `true` if one was removed.
    pub(crate) fn remove_attribute(&mut self, name: &str) -> bool {
        let before = self.attributes.len();
        self.attributes.retain(|a| a.name != name);
        before != self.attributes.len()
    }

    fn identity(&self) -> Node {
        Node {
            name: self.name.clone(),
            attributes: self
                .attributes
                .iter()
                .filter(|a| a.distinguishing)
                .cloned()
                .collect(),
        }
    }

    fn distinguishing(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.iter().filter(|a| a.distinguishing)
    }

    /// Structural equality: name and distinguishing attributes only.
    #[must_use]
    pub fn same_identity(&self, other: &Node) -> bool {
        self.name == other.name && self.distinguishing().eq(other.distinguishing())
    }

    /// Full equality: name and every attribute, decorative ones included.
    #[must_use]
    pub fn same_decoration(&self, other: &Node) -> bool {
        self.name == other.name && self.attributes == other.attributes
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        for attribute in &self.attributes {
            attribute.write_to(f)?;
        }
        Ok(())
    }
}

/// A structural path such as `//ldml/dates/calendars/calendar[@type="gregorian"]`.
///
/// Paths compare and hash by identity: only element names and distinguishing
/// attributes take part. [`Path::same_decoration`] compares everything.
///
/// # Examples
///
/// ```
/// use ldres::Path;
///
/// let decorated = Path::parse(r#"//ldml/foo[@draft="contributed"]"#).unwrap();
/// let identity = Path::parse("//ldml/foo").unwrap();
///
/// assert_eq!(decorated, identity);
/// assert!(!decorated.same_decoration(&identity));
/// assert_eq!(decorated.identity().to_string(), "//ldml/foo");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Path {
    nodes: Vec<Node>,
}

impl Path {
    /// Parses an absolute path with the built-in LDML grammar.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedPath`] if the string violates the grammar.
    ///
    /// # Examples
    ///
    /// ```
    /// use ldres::Path;
    ///
    /// let path = Path::parse(r#"//ldml/a[@type="x"]/b"#).unwrap();
    /// assert_eq!(path.len(), 3);
    /// assert!(Path::parse("ldml/a").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        Grammar::ldml().parse(s)
    }

    pub(crate) fn from_nodes(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    /// The nodes of this path, outermost first.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub(crate) fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the path has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The innermost node.
    #[must_use]
    pub fn last(&self) -> Option<&Node> {
        self.nodes.last()
    }

    /// The path without its innermost node, or `None` for an empty path.
    #[must_use]
    pub fn parent(&self) -> Option<Path> {
        let (_, rest) = self.nodes.split_last()?;
        Some(Self::from_nodes(rest.to_vec()))
    }

    /// Index of the first node with the given element name.
    #[must_use]
    pub fn find_element(&self, name: &str) -> Option<usize> {
        self.nodes.iter().position(|n| n.name == name)
    }

    /// Whether any node has the given element name.
    #[must_use]
    pub fn contains_element(&self, name: &str) -> bool {
        self.find_element(name).is_some()
    }

    /// Whether any node carries the named attribute.
    #[must_use]
    pub fn contains_attribute(&self, name: &str) -> bool {
        self.nodes.iter().any(|n| n.has_attribute(name))
    }

    /// The path with every decorative attribute removed.
    #[must_use]
    pub fn identity(&self) -> Path {
        Self::from_nodes(self.nodes.iter().map(Node::identity).collect())
    }

    /// Canonical string of [`Path::identity`].
    ///
    /// This string is the sort key used wherever paths are ordered.
    #[must_use]
    pub fn identity_string(&self) -> String {
        self.identity().to_string()
    }

    /// Whether `prefix` matches the leading nodes of this path by identity.
    ///
    /// # Examples
    ///
    /// ```
    /// use ldres::Path;
    ///
    /// let path = Path::parse("//ldml/a/b/c").unwrap();
    /// assert!(path.starts_with(&Path::parse("//ldml/a").unwrap()));
    /// assert!(!path.starts_with(&Path::parse("//ldml/ab").unwrap()));
    /// ```
    #[must_use]
    pub fn starts_with(&self, prefix: &Path) -> bool {
        prefix.len() <= self.len()
            && self
                .nodes
                .iter()
                .zip(&prefix.nodes)
                .all(|(a, b)| a.same_identity(b))
    }

    /// Replaces the leading `prefix_len` nodes with `replacement`.
    #[must_use]
    pub fn replace_prefix(&self, prefix_len: usize, replacement: &Path) -> Path {
        let mut nodes = replacement.nodes.clone();
        nodes.extend_from_slice(&self.nodes[prefix_len.min(self.len())..]);
        Self::from_nodes(nodes)
    }

    /// Composes a path relative to this one.
    ///
    /// An argument starting with `//` replaces the path entirely. Otherwise each
    /// leading `..` step pops one trailing node and the remainder is appended as
    /// relative steps. Relative steps are parsed with the LDML grammar.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedPath`] if the remainder does not parse, holds a
    /// `..` step after a named step, or if `..` would pop past the first node.
    ///
    /// # Examples
    ///
    /// ```
    /// use ldres::Path;
    ///
    /// let base = Path::parse("//ldml/a").unwrap();
    /// let joined = base.join_relative("../b/c").unwrap();
    /// assert_eq!(joined.to_string(), "//ldml/b/c");
    /// ```
    pub fn join_relative(&self, relative: &str) -> Result<Path> {
        self.join_relative_with(Grammar::ldml(), relative)
    }

    /// [`Path::join_relative`] with an explicit grammar.
    ///
    /// # Errors
    ///
    /// See [`Path::join_relative`].
    pub fn join_relative_with(&self, grammar: &Grammar, relative: &str) -> Result<Path> {
        if relative.starts_with("//") {
            return grammar.parse(relative);
        }

        let mut nodes = self.nodes.clone();
        let mut rest = relative;
        loop {
            let stripped = match rest.strip_prefix("..") {
                Some("") => "",
                Some(after) if after.starts_with('/') => after.trim_start_matches('/'),
                _ => break,
            };
            if nodes.len() <= 1 {
                return Err(Error::malformed(relative, relative.len() - rest.len()));
            }
            nodes.pop();
            rest = stripped;
        }

        if !rest.is_empty() {
            let steps = if rest.starts_with('/') {
                grammar.parse_relative(rest)?
            } else {
                grammar.parse_relative(&format!("/{rest}"))?
            };
            if steps.nodes.iter().any(|node| node.name == "..") {
                return Err(Error::malformed(relative, relative.len() - rest.len()));
            }
            nodes.extend(steps.nodes);
        }

        Ok(Self::from_nodes(nodes))
    }

    /// Full equality, decorative attributes included.
    #[must_use]
    pub fn same_decoration(&self, other: &Path) -> bool {
        self.len() == other.len()
            && self
                .nodes
                .iter()
                .zip(&other.nodes)
                .all(|(a, b)| a.same_decoration(b))
    }
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .nodes
                .iter()
                .zip(&other.nodes)
                .all(|(a, b)| a.same_identity(b))
    }
}

impl Eq for Path {}

impl Hash for Path {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.nodes.len().hash(state);
        for node in &self.nodes {
            node.name.hash(state);
            for attribute in node.distinguishing() {
                attribute.name.hash(state);
                attribute.value.hash(state);
            }
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("/")?;
        for node in &self.nodes {
            write!(f, "/{node}")?;
        }
        Ok(())
    }
}

impl FromStr for Path {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for Path {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Path {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
