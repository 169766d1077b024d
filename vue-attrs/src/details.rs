//! Attribute enumeration and lookup across a component and everything it
//! inherits from.

use crate::case::{to_camel_case, to_kebab_case};
use crate::component::{
    AttributeDescriptor, ComponentId, DirectiveAttributes, LocalComponent, OwnDetails,
};
use crate::grammar::{Grammar, NameFilter};
use crate::link::ComponentIndex;
use crate::walk::{Visit, WalkStatus, walk_components};

/// Everything [`ComponentDetails`] needs to know about a project.
///
/// Implemented automatically for any type providing the three underlying
/// traits.
pub trait ComponentSource: ComponentIndex + OwnDetails + DirectiveAttributes {}

impl<T> ComponentSource for T where T: ComponentIndex + OwnDetails + DirectiveAttributes + ?Sized {}

/// A "did you mean?" hint for an attribute name that does not resolve.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeSuggestion {
    /// The closest accepted attribute.
    pub attribute: AttributeDescriptor,
    /// Jaro-Winkler similarity of the kebab-case spellings (0.0 to 1.0).
    pub similarity: f64,
}

/// Attribute queries over a project.
///
/// Own declarations always shadow inherited ones: lookups consult the
/// component itself before any mixin or base component.
#[derive(Debug)]
pub struct ComponentDetails<'a, S: ?Sized> {
    source: &'a S,
    grammar: &'a Grammar,
}

impl<'a, S: ?Sized> Clone for ComponentDetails<'a, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, S: ?Sized> Copy for ComponentDetails<'a, S> {}

impl<'a, S> ComponentDetails<'a, S>
where
    S: ComponentSource + ?Sized,
{
    /// Queries over `source`, reading attribute names with `grammar`.
    pub fn new(source: &'a S, grammar: &'a Grammar) -> Self {
        Self { source, grammar }
    }

    /// The grammar names are read with.
    pub fn grammar(&self) -> &'a Grammar {
        self.grammar
    }

    /// Every attribute `root` accepts, spelled for the context.
    ///
    /// Collects the root's own and directive attributes, then the own
    /// attributes of every component reachable through mixins and extends.
    /// In markup (`xml_context`) each attribute is listed three times:
    /// `foo-bar`, `:foo-bar` and `v-bind:foo-bar`. In script each
    /// kebab-case name is listed in camelCase.
    pub fn attributes(
        &self,
        root: Option<ComponentId>,
        only_public: bool,
        xml_context: bool,
    ) -> Vec<AttributeDescriptor> {
        let collected = self.collect(root, only_public);
        collected
            .iter()
            .flat_map(|attr| self.spellings(attr, xml_context))
            .collect()
    }

    fn collect(&self, root: Option<ComponentId>, only_public: bool) -> Vec<AttributeDescriptor> {
        let mut collected = Vec::new();
        if let Some(root) = root {
            collected.extend(
                self.source
                    .own_attributes(root, &NameFilter::Any, only_public, false),
            );
            collected.extend(self.source.directive_attributes(root));
        }
        walk_components(self.source, root, |component| {
            collected.extend(
                self.source
                    .own_attributes(component, &NameFilter::Any, only_public, false),
            );
            Visit::Continue
        });
        debug!("collected {} attributes for {root:?}", collected.len());
        collected
    }

    fn spellings(&self, attr: &AttributeDescriptor, xml_context: bool) -> Vec<AttributeDescriptor> {
        if xml_context {
            let kebab = to_kebab_case(attr.name());
            let prefixes = self.grammar.variant_prefixes();
            let mut variants = Vec::with_capacity(1 + prefixes.len());
            variants.push(attr.with_name(kebab.as_str()));
            for prefix in prefixes {
                variants.push(attr.with_name(format!("{prefix}{kebab}")));
            }
            variants
        } else if attr.name().contains('-') {
            vec![attr.with_name(to_camel_case(attr.name()))]
        } else {
            vec![attr.clone()]
        }
    }

    /// The attribute `attr_name` denotes on `root`.
    ///
    /// `attr_name` is taken as written in markup: `:my-prop`, `myProp` and
    /// `v-bind:my-prop` all find a prop declared as `myProp`. Lookup order
    /// is the root's own attributes, then the nearest reachable component
    /// declaring a match, then directives.
    pub fn resolve_attribute(
        &self,
        root: Option<ComponentId>,
        attr_name: &str,
        only_public: bool,
    ) -> Option<AttributeDescriptor> {
        let filter = self.grammar.name_filter(attr_name);

        if let Some(root) = root {
            let own = self.source.own_attributes(root, &filter, only_public, true);
            if let Some(found) = own.into_iter().next() {
                debug!("'{attr_name}' declared on {root}");
                return Some(found);
            }
        }

        let mut inherited = None;
        walk_components(self.source, root, |component| {
            inherited = self
                .source
                .own_attributes(component, &filter, only_public, true)
                .into_iter()
                .next();
            if inherited.is_some() {
                Visit::Stop
            } else {
                Visit::Continue
            }
        });
        if let Some(found) = inherited {
            debug!("'{attr_name}' inherited from {:?}", found.owner());
            return Some(found);
        }

        let directive = self.source.resolve_directive(root, attr_name);
        debug!("'{attr_name}' directive lookup: {}", directive.is_some());
        directive
    }

    /// Offer local sub-components of `root` to `processor` until it returns
    /// [`Visit::Stop`].
    ///
    /// Registrations on `root` itself come first. If `processor` stops on one
    /// of them, mixins and base components are not consulted at all: local
    /// registrations shadow inherited ones.
    pub fn process_local_components<F>(&self, root: Option<ComponentId>, mut processor: F) -> WalkStatus
    where
        F: FnMut(&LocalComponent) -> Visit,
    {
        let mut wanted = |local: &LocalComponent| processor(local) == Visit::Stop;

        if let Some(root) = root
            && !self.source.local_components(root, &mut wanted, true).is_empty()
        {
            return WalkStatus::Stopped;
        }

        walk_components(self.source, root, |component| {
            if self
                .source
                .local_components(component, &mut wanted, true)
                .is_empty()
            {
                Visit::Continue
            } else {
                Visit::Stop
            }
        })
    }

    /// Components `root` inherits from, nearest first.
    pub fn reachable(&self, root: Option<ComponentId>) -> Vec<ComponentId> {
        let mut reached = Vec::new();
        walk_components(self.source, root, |component| {
            reached.push(component);
            Visit::Continue
        });
        reached
    }

    /// The accepted attribute whose name is closest to `attr_name`.
    ///
    /// Meant for names that did not resolve. Candidates are compared in
    /// kebab-case with prefix and modifiers removed; nothing scoring below
    /// 0.8 is suggested.
    #[cfg(feature = "suggestions")]
    pub fn suggest_attribute(
        &self,
        root: Option<ComponentId>,
        attr_name: &str,
        only_public: bool,
    ) -> Option<AttributeSuggestion> {
        const SIMILARITY_THRESHOLD: f64 = 0.8;

        let wanted = self
            .grammar
            .bound_name(attr_name)
            .unwrap_or(attr_name);
        let wanted = to_kebab_case(wanted);

        let mut best: Option<AttributeSuggestion> = None;
        for attribute in self.collect(root, only_public) {
            let similarity = strsim::jaro_winkler(&wanted, &to_kebab_case(attribute.name()));
            if similarity >= SIMILARITY_THRESHOLD
                && best.as_ref().is_none_or(|b| similarity > b.similarity)
            {
                best = Some(AttributeSuggestion {
                    attribute,
                    similarity,
                });
            }
        }
        trace!("suggestion for '{attr_name}': {best:?}");
        best
    }

    /// The accepted attribute whose name is closest to `attr_name` (always
    /// `None` without the `suggestions` feature).
    #[cfg(not(feature = "suggestions"))]
    pub fn suggest_attribute(
        &self,
        _root: Option<ComponentId>,
        _attr_name: &str,
        _only_public: bool,
    ) -> Option<AttributeSuggestion> {
        None
    }
}
