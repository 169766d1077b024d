#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

extern crate alloc;

#[macro_use]
mod tracing_macros;

pub mod case;
mod component;
mod config;
mod details;
mod grammar;
mod link;
pub mod memory;
mod walk;

pub use component::{
    AttributeDescriptor, AttributeKind, ComponentId, DirectiveAttributes, LocalComponent,
    OwnDetails,
};
pub use config::{ConfigError, GrammarConfig, PrefixRule};
pub use details::{AttributeSuggestion, ComponentDetails, ComponentSource};
pub use grammar::{BindingPrefix, Grammar, Modifiers, NameFilter, NameToken};
pub use link::{ComponentIndex, ComponentLink};
pub use walk::{Visit, VisitedSet, WalkStatus, walk_components};
