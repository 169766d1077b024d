//! Attribute-name grammar: binding prefixes, modifiers and spelling variants.
//!
//! An attribute as written in a template is `prefix base modifier`, where
//! every piece but `base` is optional:
//!
//! | written            | prefix    | base    | modifier   |
//! |--------------------|-----------|---------|------------|
//! | `title`            |           | `title` |            |
//! | `:value.sync`      | `:`       | `value` | `.sync`    |
//! | `v-on:click.stop`  | `v-on:`   | `click` | `.stop`    |
//!
//! The tables driving this live in a [`Grammar`] value, built once (usually
//! with [`Grammar::default`]) and shared by reference.

use crate::case::{to_camel_case, to_kebab_case};

/// The modifiers a binding prefix accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modifiers {
    /// Any single dotted segment (event listeners: `@click.whatever`).
    Any,
    /// Only the listed modifiers, each including its leading `.`.
    Listed(Vec<String>),
}

/// One row of the binding table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingPrefix {
    pub(crate) prefix: String,
    pub(crate) modifiers: Modifiers,
}

impl BindingPrefix {
    /// The prefix text, e.g. `v-bind:`.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Modifiers accepted after this prefix.
    pub fn modifiers(&self) -> &Modifiers {
        &self.modifiers
    }
}

/// Event prefix whose listed modifiers make a value optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NoValueRule {
    pub(crate) prefix: String,
    pub(crate) modifiers: Vec<String>,
}

/// An attribute name split into its parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameToken<'a> {
    /// The binding prefix the name starts with, if any.
    pub prefix: Option<&'a str>,
    /// The attribute name proper.
    pub base: &'a str,
    /// Trailing modifier text, starting with `.`.
    pub modifier: Option<&'a str>,
}

/// Predicate over declared attribute names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameFilter {
    /// Accepts every name.
    Any,
    /// Accepts exactly these spellings.
    Variants(Vec<String>),
}

impl NameFilter {
    /// Filter accepting `name` and its camelCase and kebab-case spellings.
    pub fn spellings_of(name: &str) -> Self {
        let mut variants = Vec::with_capacity(3);
        for variant in [name.to_string(), to_camel_case(name), to_kebab_case(name)] {
            if !variants.contains(&variant) {
                variants.push(variant);
            }
        }
        NameFilter::Variants(variants)
    }

    /// Whether `candidate` passes the filter.
    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            NameFilter::Any => true,
            NameFilter::Variants(variants) => variants.iter().any(|v| v == candidate),
        }
    }
}

/// Binding and event tables for attribute names.
///
/// Row order matters: prefixes and modifiers are tried in the order they
/// were declared and the first hit wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grammar {
    pub(crate) prefixes: Vec<BindingPrefix>,
    pub(crate) no_value: Vec<NoValueRule>,
    pub(crate) variant_prefixes: Vec<String>,
}

const BIND_MODIFIERS: [&str; 3] = [".prop", ".camel", ".sync"];
const EVENT_MODIFIERS: [&str; 5] = [".stop", ".prevent", ".capture", ".self", ".once"];

fn listed(modifiers: &[&str]) -> Modifiers {
    Modifiers::Listed(modifiers.iter().map(|m| m.to_string()).collect())
}

impl Default for Grammar {
    /// The Vue tables: `:`/`v-bind:` with `.prop`, `.camel`, `.sync`, and
    /// `@`/`v-on:` with any modifier.
    fn default() -> Self {
        let row = |prefix: &str, modifiers: Modifiers| BindingPrefix {
            prefix: prefix.to_string(),
            modifiers,
        };
        Self {
            prefixes: vec![
                row(":", listed(&BIND_MODIFIERS)),
                row("v-bind:", listed(&BIND_MODIFIERS)),
                row("@", Modifiers::Any),
                row("v-on:", Modifiers::Any),
            ],
            no_value: ["@", "v-on:"]
                .into_iter()
                .map(|prefix| NoValueRule {
                    prefix: prefix.to_string(),
                    modifiers: EVENT_MODIFIERS.iter().map(|m| m.to_string()).collect(),
                })
                .collect(),
            variant_prefixes: vec![":".to_string(), "v-bind:".to_string()],
        }
    }
}

impl Grammar {
    /// Binding prefixes in lookup order.
    pub fn prefixes(&self) -> &[BindingPrefix] {
        &self.prefixes
    }

    /// Prefixes prepended to kebab-case names when listing attributes for
    /// markup (`:foo-bar`, `v-bind:foo-bar`).
    pub fn variant_prefixes(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.variant_prefixes.iter().map(String::as_str)
    }

    fn find_prefix(&self, attr_name: &str) -> Option<&BindingPrefix> {
        self.prefixes
            .iter()
            .find(|row| attr_name.starts_with(row.prefix.as_str()))
    }

    /// Split `attr_name` into prefix, base and modifier.
    ///
    /// Names without a known prefix come back whole as the base. Under a
    /// prefix with listed modifiers only the first listed modifier found in
    /// the name is split off; `:value.prop.sync` has base `value` and
    /// modifier `.prop.sync`.
    pub fn parse<'a>(&self, attr_name: &'a str) -> NameToken<'a> {
        let Some(row) = self.find_prefix(attr_name) else {
            return NameToken {
                prefix: None,
                base: attr_name,
                modifier: None,
            };
        };
        let (prefix, rest) = attr_name.split_at(row.prefix.len());
        let (base, modifier) = match &row.modifiers {
            Modifiers::Any => rest.split_at(rest.find('.').unwrap_or(rest.len())),
            Modifiers::Listed(modifiers) => modifiers
                .iter()
                .filter_map(|m| rest.find(m.as_str()))
                .find(|&at| at > 0)
                .map(|at| rest.split_at(at))
                .unwrap_or((rest, "")),
        };
        NameToken {
            prefix: Some(prefix),
            base,
            modifier: (!modifier.is_empty()).then_some(modifier),
        }
    }

    /// The attribute name a bound attribute refers to.
    ///
    /// Returns `None` when `attr_name` has no binding prefix or nothing
    /// follows the prefix. An empty base counts as unbound too: `@.stop`
    /// gives `None`, not `Some("")`, even though it does carry a prefix.
    ///
    /// ```
    /// let grammar = vue_attrs::Grammar::default();
    /// assert_eq!(grammar.bound_name(":value.sync"), Some("value"));
    /// assert_eq!(grammar.bound_name("v-on:click"), Some("click"));
    /// assert_eq!(grammar.bound_name("plain-attr"), None);
    /// assert_eq!(grammar.bound_name("@.stop"), None);
    /// ```
    pub fn bound_name<'a>(&self, attr_name: &'a str) -> Option<&'a str> {
        let token = self.parse(attr_name);
        token.prefix?;
        (!token.base.is_empty()).then_some(token.base)
    }

    /// Whether the attribute may be written without `="..."`.
    ///
    /// True for event listeners ending in an event-only modifier, such as
    /// `@submit.prevent`.
    pub fn allows_no_value(&self, attr_name: &str) -> bool {
        self.no_value.iter().any(|rule| {
            attr_name
                .strip_prefix(rule.prefix.as_str())
                .is_some_and(|rest| {
                    !rest.is_empty() && rule.modifiers.iter().any(|m| rest.ends_with(m.as_str()))
                })
        })
    }

    /// `attr_name` with its binding prefix removed, modifiers kept.
    pub fn strip_prefix<'a>(&self, attr_name: &'a str) -> &'a str {
        match self.find_prefix(attr_name) {
            Some(row) => &attr_name[row.prefix.len()..],
            None => attr_name,
        }
    }

    /// Filter matching every spelling of the attribute `attr_name` names.
    ///
    /// `:my-prop` matches declarations named `my-prop` and `myProp`.
    pub fn name_filter(&self, attr_name: &str) -> NameFilter {
        NameFilter::spellings_of(self.strip_prefix(attr_name))
    }
}
