//! Loading and validating [`Grammar`] tables.

use core::fmt;

use facet::Facet;

use crate::grammar::{BindingPrefix, Grammar, Modifiers, NoValueRule};

/// One prefix row as written in configuration.
#[derive(Facet, Debug, Clone, PartialEq, Eq)]
pub struct PrefixRule {
    /// Prefix text, e.g. `v-bind:`.
    pub prefix: String,
    /// Accepted modifiers, each starting with `.`; `None` accepts any.
    pub modifiers: Option<Vec<String>>,
}

impl PrefixRule {
    fn new(prefix: &str, modifiers: Option<&[&str]>) -> Self {
        Self {
            prefix: prefix.to_string(),
            modifiers: modifiers.map(|ms| ms.iter().map(|m| m.to_string()).collect()),
        }
    }
}

/// Serializable form of the attribute-name tables.
///
/// ```json
/// {
///   "prefixes": [
///     { "prefix": ":", "modifiers": [".prop", ".camel", ".sync"] },
///     { "prefix": "@", "modifiers": null }
///   ],
///   "no_value": [{ "prefix": "@", "modifiers": [".stop", ".prevent"] }],
///   "bind_variant_prefixes": [":"]
/// }
/// ```
///
/// `no_value` and `bind_variant_prefixes` default to empty when omitted.
#[derive(Facet, Debug, Clone, PartialEq, Eq)]
pub struct GrammarConfig {
    /// Binding prefixes in lookup order.
    pub prefixes: Vec<PrefixRule>,
    /// Event prefixes and the modifiers that make a value optional.
    #[facet(default)]
    pub no_value: Vec<PrefixRule>,
    /// Prefixes used to spell bound variants of attributes in markup.
    #[facet(default)]
    pub bind_variant_prefixes: Vec<String>,
}

impl Default for GrammarConfig {
    fn default() -> Self {
        const BIND: &[&str] = &[".prop", ".camel", ".sync"];
        const EVENT: &[&str] = &[".stop", ".prevent", ".capture", ".self", ".once"];
        Self {
            prefixes: vec![
                PrefixRule::new(":", Some(BIND)),
                PrefixRule::new("v-bind:", Some(BIND)),
                PrefixRule::new("@", None),
                PrefixRule::new("v-on:", None),
            ],
            no_value: vec![
                PrefixRule::new("@", Some(EVENT)),
                PrefixRule::new("v-on:", Some(EVENT)),
            ],
            bind_variant_prefixes: vec![":".to_string(), "v-bind:".to_string()],
        }
    }
}

/// Why a [`GrammarConfig`] was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    /// The input was not a valid configuration document.
    Parse(String),
    /// A prefix row has empty prefix text.
    EmptyPrefix,
    /// The same prefix is declared twice in the binding table.
    DuplicatePrefix(String),
    /// A modifier does not look like `.name`.
    InvalidModifier {
        /// Prefix the modifier was declared under.
        prefix: String,
        /// The offending modifier.
        modifier: String,
    },
    /// A no-value rule names a prefix missing from the binding table.
    UnknownNoValuePrefix(String),
    /// A no-value rule does not list any modifiers.
    MissingNoValueModifiers(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(msg) => write!(f, "invalid grammar configuration: {msg}"),
            ConfigError::EmptyPrefix => write!(f, "binding prefix must not be empty"),
            ConfigError::DuplicatePrefix(prefix) => {
                write!(f, "binding prefix '{prefix}' is declared more than once")
            }
            ConfigError::InvalidModifier { prefix, modifier } => write!(
                f,
                "modifier '{modifier}' under prefix '{prefix}' must be a '.' followed by a name"
            ),
            ConfigError::UnknownNoValuePrefix(prefix) => {
                write!(f, "no-value rule uses undeclared prefix '{prefix}'")
            }
            ConfigError::MissingNoValueModifiers(prefix) => {
                write!(f, "no-value rule for prefix '{prefix}' lists no modifiers")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

fn check_modifiers(prefix: &str, modifiers: &[String]) -> Result<(), ConfigError> {
    match modifiers.iter().find(|m| m.len() < 2 || !m.starts_with('.')) {
        Some(bad) => Err(ConfigError::InvalidModifier {
            prefix: prefix.to_string(),
            modifier: bad.clone(),
        }),
        None => Ok(()),
    }
}

impl Grammar {
    /// Build a grammar from validated configuration.
    pub fn from_config(config: &GrammarConfig) -> Result<Self, ConfigError> {
        let mut prefixes: Vec<BindingPrefix> = Vec::with_capacity(config.prefixes.len());
        for rule in &config.prefixes {
            if rule.prefix.is_empty() {
                return Err(ConfigError::EmptyPrefix);
            }
            if prefixes.iter().any(|p| p.prefix == rule.prefix) {
                return Err(ConfigError::DuplicatePrefix(rule.prefix.clone()));
            }
            let modifiers = match &rule.modifiers {
                Some(listed) => {
                    check_modifiers(&rule.prefix, listed)?;
                    Modifiers::Listed(listed.clone())
                }
                None => Modifiers::Any,
            };
            prefixes.push(BindingPrefix {
                prefix: rule.prefix.clone(),
                modifiers,
            });
        }

        let mut no_value = Vec::with_capacity(config.no_value.len());
        for rule in &config.no_value {
            if !prefixes.iter().any(|p| p.prefix == rule.prefix) {
                return Err(ConfigError::UnknownNoValuePrefix(rule.prefix.clone()));
            }
            let modifiers = match &rule.modifiers {
                Some(listed) if !listed.is_empty() => listed,
                _ => return Err(ConfigError::MissingNoValueModifiers(rule.prefix.clone())),
            };
            check_modifiers(&rule.prefix, modifiers)?;
            no_value.push(NoValueRule {
                prefix: rule.prefix.clone(),
                modifiers: modifiers.clone(),
            });
        }

        if config.bind_variant_prefixes.iter().any(String::is_empty) {
            return Err(ConfigError::EmptyPrefix);
        }

        Ok(Self {
            prefixes,
            no_value,
            variant_prefixes: config.bind_variant_prefixes.clone(),
        })
    }

    /// Parse a JSON [`GrammarConfig`] document and build a grammar from it.
    pub fn from_json(input: &str) -> Result<Self, ConfigError> {
        let config: GrammarConfig =
            facet_json::from_str(input).map_err(|err| ConfigError::Parse(err.to_string()))?;
        Self::from_config(&config)
    }
}
