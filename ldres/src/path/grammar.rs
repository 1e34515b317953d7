//! Grammar tables: which attributes are distinguishing and how attributes sort.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::config::GrammarConfig;
use crate::error::Result;
use crate::path::parse::{scan, Anchor, RawNode};
use crate::path::types::{Attribute, Node, Path};

/// Attributes that never take part in identity under the LDML grammar.
const LDML_DECORATIVE: &[&str] = &["draft", "references", "standard", "validSubLocales"];

/// Element-scoped exceptions under the LDML grammar.
const LDML_ELEMENT_DECORATIVE: &[(&str, &str)] = &[("version", "number"), ("generation", "date")];

/// Canonical attribute order under the LDML grammar.
const LDML_ORDER: &[&str] = &[
    "_q", "type", "id", "key", "registry", "source", "target", "path", "day", "date",
    "version", "count", "ordinal", "case", "gender", "lines", "characters", "before", "from",
    "to", "iso4217", "mzone", "number", "time", "casing", "territory", "territories", "scope",
    "yeartype", "numbers", "alt", "draft", "references", "standard", "validSubLocales",
];

static LDML: Lazy<Grammar> = Lazy::new(Grammar::build_ldml);

/// A path grammar.
///
/// The grammar decides, per element and attribute name, whether an attribute is
/// distinguishing, and ranks attributes for canonical serialization. Attributes
/// the grammar does not know about are distinguishing and sort alphabetically
/// after ranked ones.
///
/// # Examples
///
/// ```
/// use ldres::path::Grammar;
///
/// let grammar = Grammar::ldml();
/// assert!(grammar.is_distinguishing("calendar", "type"));
/// assert!(!grammar.is_distinguishing("calendar", "draft"));
///
/// let path = grammar.parse(r#"//ldml/a[@draft="x"][@type="y"]"#).unwrap();
/// assert_eq!(path.to_string(), r#"//ldml/a[@type="y"][@draft="x"]"#);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Grammar {
    attribute_rules: HashMap<String, bool>,
    element_rules: HashMap<(String, String), bool>,
    order: HashMap<String, u16>,
}

impl Grammar {
    /// The built-in LDML grammar.
    #[must_use]
    pub fn ldml() -> &'static Grammar {
        &LDML
    }

    fn build_ldml() -> Self {
        let mut grammar = Self::default();
        for name in LDML_DECORATIVE {
            grammar.attribute_rules.insert((*name).to_string(), false);
        }
        for (element, attribute) in LDML_ELEMENT_DECORATIVE {
            grammar
                .element_rules
                .insert(((*element).to_string(), (*attribute).to_string()), false);
        }
        grammar.set_order(LDML_ORDER.iter().copied());
        grammar
    }

    /// The LDML grammar extended by a configuration section.
    ///
    /// Entries are plain attribute names (`"alt"`) or element-scoped names
    /// (`"alias@path"`). An `attribute_order` list replaces the ranking.
    #[must_use]
    pub fn with_config(config: &GrammarConfig) -> Self {
        let mut grammar = Self::ldml().clone();
        for entry in config.distinguishing.iter().flatten() {
            grammar.set_rule(entry, true);
        }
        for entry in config.decorative.iter().flatten() {
            grammar.set_rule(entry, false);
        }
        if let Some(order) = &config.attribute_order {
            grammar.order.clear();
            grammar.set_order(order.iter().map(String::as_str));
        }
        grammar
    }

    fn set_rule(&mut self, entry: &str, distinguishing: bool) {
        match entry.split_once('@') {
            Some((element, attribute)) => {
                self.element_rules
                    .insert((element.to_string(), attribute.to_string()), distinguishing);
            }
            None => {
                self.attribute_rules.insert(entry.to_string(), distinguishing);
            }
        }
    }

    fn set_order<'a>(&mut self, names: impl Iterator<Item = &'a str>) {
        for (rank, name) in names.enumerate() {
            let rank = u16::try_from(rank).unwrap_or(u16::MAX - 1);
            self.order.entry(name.to_string()).or_insert(rank);
        }
    }

    /// Whether `attribute` on `element` is part of identity.
    #[must_use]
    pub fn is_distinguishing(&self, element: &str, attribute: &str) -> bool {
        self.element_rules
            .get(&(element.to_string(), attribute.to_string()))
            .or_else(|| self.attribute_rules.get(attribute))
            .copied()
            .unwrap_or(true)
    }

    fn rank(&self, attribute: &str) -> u16 {
        self.order.get(attribute).copied().unwrap_or(u16::MAX)
    }

    /// Parses an absolute path (`//name...`).
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MalformedPath`] on any grammar violation.
    pub fn parse(&self, s: &str) -> Result<Path> {
        Ok(self.build(scan(s, Anchor::Absolute)?))
    }

    /// Parses relative steps (`/name...`).
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MalformedPath`] on any grammar violation.
    pub fn parse_relative(&self, s: &str) -> Result<Path> {
        Ok(self.build(scan(s, Anchor::Relative)?))
    }

    /// Builds a canonical attribute for `element`.
    #[must_use]
    pub fn attribute(&self, element: &str, name: &str, value: &str) -> Attribute {
        Attribute::new(
            name.to_string(),
            value.to_string(),
            self.is_distinguishing(element, name),
            self.rank(name),
        )
    }

    fn build(&self, raw: Vec<RawNode>) -> Path {
        let nodes = raw
            .into_iter()
            .map(|raw| {
                let mut node = Node::new(raw.name);
                for (name, value) in raw.attributes {
                    let attribute = self.attribute(node.name(), &name, &value);
                    node.put_attribute(attribute);
                }
                node
            })
            .collect();
        Path::from_nodes(nodes)
    }
}
