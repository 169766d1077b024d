//! An in-memory project model.
//!
//! [`ComponentArena`] owns component definitions and hands out
//! [`ComponentId`]s into itself. It implements every provider trait the
//! resolver needs, which makes it the backing store for tests and for
//! embedders that already parse components into their own structures.

use indexmap::IndexMap;

use crate::case::to_kebab_case;
use crate::component::{
    AttributeDescriptor, AttributeKind, ComponentId, DirectiveAttributes, LocalComponent,
    OwnDetails,
};
use crate::grammar::NameFilter;
use crate::link::{ComponentIndex, ComponentLink};

/// Unresolved pointer to a component, as written in `mixins` or `extends`.
///
/// A reference outlives the definition it points at: once that definition is
/// removed from the arena, resolving the reference yields nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentRef(u32);

impl ComponentRef {
    /// Reference to `component`.
    pub const fn to(component: ComponentId) -> Self {
        Self(component.index())
    }
}

impl From<ComponentId> for ComponentRef {
    fn from(component: ComponentId) -> Self {
        Self::to(component)
    }
}

/// The declarations of one component.
#[derive(Debug, Clone)]
pub struct ComponentDecl {
    id: ComponentId,
    name: String,
    attributes: IndexMap<String, AttributeDescriptor>,
    mixins: Vec<ComponentRef>,
    extends: Option<ComponentRef>,
    local_components: IndexMap<String, LocalComponent>,
    directives: IndexMap<String, AttributeDescriptor>,
}

impl ComponentDecl {
    fn new(id: ComponentId, name: String) -> Self {
        Self {
            id,
            name,
            attributes: IndexMap::new(),
            mixins: Vec::new(),
            extends: None,
            local_components: IndexMap::new(),
            directives: IndexMap::new(),
        }
    }

    /// Handle of this component.
    pub fn id(&self) -> ComponentId {
        self.id
    }

    /// Component name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declare an attribute of the given kind. Redeclaring a name replaces
    /// the earlier declaration in place.
    pub fn attribute(&mut self, name: &str, kind: AttributeKind) -> &mut Self {
        let descriptor = AttributeDescriptor::new(name, Some(self.id), kind);
        self.attributes.insert(name.to_string(), descriptor);
        self
    }

    /// Declare a prop.
    pub fn prop(&mut self, name: &str) -> &mut Self {
        self.attribute(name, AttributeKind::Prop)
    }

    /// Declare a `data` entry.
    pub fn data(&mut self, name: &str) -> &mut Self {
        self.attribute(name, AttributeKind::Data)
    }

    /// Append to `mixins`.
    pub fn mixin(&mut self, mixin: impl Into<ComponentRef>) -> &mut Self {
        self.mixins.push(mixin.into());
        self
    }

    /// Set `extends`.
    pub fn extends(&mut self, base: impl Into<ComponentRef>) -> &mut Self {
        self.extends = Some(base.into());
        self
    }

    /// Register a local sub-component.
    pub fn local_component(&mut self, name: &str, target: Option<ComponentId>) -> &mut Self {
        self.local_components.insert(
            name.to_string(),
            LocalComponent {
                name: name.to_string(),
                target,
            },
        );
        self
    }

    /// Register a local directive; `focus` becomes the attribute `v-focus`.
    pub fn directive(&mut self, name: &str) -> &mut Self {
        let descriptor = directive_descriptor(name, Some(self.id));
        self.directives.insert(descriptor.name().to_string(), descriptor);
        self
    }
}

fn directive_descriptor(name: &str, owner: Option<ComponentId>) -> AttributeDescriptor {
    AttributeDescriptor::new(
        format!("v-{}", to_kebab_case(name)),
        owner,
        AttributeKind::Directive,
    )
}

/// `v-name:arg.mod` → `v-name`.
fn directive_name(attr_name: &str) -> &str {
    let end = attr_name
        .find([':', '.'])
        .unwrap_or(attr_name.len());
    &attr_name[..end]
}

/// Arena of component definitions plus project-wide registrations.
#[derive(Debug, Clone, Default)]
pub struct ComponentArena {
    components: Vec<Option<ComponentDecl>>,
    global_mixins: Vec<ComponentRef>,
    global_directives: IndexMap<String, AttributeDescriptor>,
}

impl ComponentArena {
    /// An empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a component and return its handle.
    ///
    /// # Panics
    ///
    /// Panics when the arena already holds `u32::MAX + 1` slots (removed
    /// components keep theirs). Use [`try_add_component`](Self::try_add_component)
    /// to handle that case.
    pub fn add_component(&mut self, name: &str) -> ComponentId {
        match self.try_add_component(name) {
            Some(id) => id,
            None => panic!("component arena is full: handles are 32-bit indices"),
        }
    }

    /// Add a component, or return `None` when no handle is left for it.
    pub fn try_add_component(&mut self, name: &str) -> Option<ComponentId> {
        let id = next_handle(self.components.len())?;
        self.components
            .push(Some(ComponentDecl::new(id, name.to_string())));
        Some(id)
    }

    /// Declarations of `component`, unless it was removed.
    pub fn component(&self, component: ComponentId) -> Option<&ComponentDecl> {
        self.components
            .get(component.index() as usize)
            .and_then(Option::as_ref)
    }

    /// Mutable declarations of `component`, unless it was removed.
    pub fn component_mut(&mut self, component: ComponentId) -> Option<&mut ComponentDecl> {
        self.components
            .get_mut(component.index() as usize)
            .and_then(Option::as_mut)
    }

    /// Find a component by name.
    pub fn find(&self, name: &str) -> Option<ComponentId> {
        self.components
            .iter()
            .flatten()
            .find(|decl| decl.name == name)
            .map(|decl| decl.id)
    }

    /// Remove `component`. References to it go stale; its handle is never
    /// reused.
    pub fn remove_component(&mut self, component: ComponentId) -> Option<ComponentDecl> {
        self.components
            .get_mut(component.index() as usize)
            .and_then(Option::take)
    }

    /// Register a mixin applying to every component.
    pub fn register_global_mixin(&mut self, mixin: impl Into<ComponentRef>) {
        self.global_mixins.push(mixin.into());
    }

    /// Register a directive usable on every component.
    pub fn register_global_directive(&mut self, name: &str) {
        let descriptor = directive_descriptor(name, None);
        self.global_directives
            .insert(descriptor.name().to_string(), descriptor);
    }

    /// Number of live components.
    pub fn len(&self) -> usize {
        self.components.iter().flatten().count()
    }

    /// Whether the arena holds no live component.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ComponentIndex for ComponentArena {
    type Reference = ComponentRef;

    fn references(&self, link: ComponentLink, component: Option<ComponentId>) -> Vec<ComponentRef> {
        let decl = component.and_then(|c| self.component(c));
        match link {
            ComponentLink::LocalMixin => decl.map(|d| d.mixins.clone()).unwrap_or_default(),
            ComponentLink::GlobalMixin => self.global_mixins.clone(),
            ComponentLink::LocalExtends => decl.and_then(|d| d.extends).into_iter().collect(),
        }
    }

    fn resolve(&self, _link: ComponentLink, reference: &ComponentRef) -> Option<ComponentId> {
        self.component(ComponentId::from_index(reference.0))
            .map(ComponentDecl::id)
    }
}

impl OwnDetails for ComponentArena {
    fn own_attributes(
        &self,
        component: ComponentId,
        filter: &NameFilter,
        only_public: bool,
        only_first: bool,
    ) -> Vec<AttributeDescriptor> {
        let Some(decl) = self.component(component) else {
            return Vec::new();
        };
        let matching = decl
            .attributes
            .values()
            .filter(|attr| !only_public || attr.is_public())
            .filter(|attr| filter.matches(attr.declared_name()))
            .cloned();
        if only_first {
            matching.take(1).collect()
        } else {
            matching.collect()
        }
    }

    fn local_components(
        &self,
        component: ComponentId,
        filter: &mut dyn FnMut(&LocalComponent) -> bool,
        only_first: bool,
    ) -> Vec<LocalComponent> {
        let Some(decl) = self.component(component) else {
            return Vec::new();
        };
        let mut found = Vec::new();
        for local in decl.local_components.values() {
            if filter(local) {
                found.push(local.clone());
                if only_first {
                    break;
                }
            }
        }
        found
    }
}

impl DirectiveAttributes for ComponentArena {
    fn directive_attributes(&self, component: ComponentId) -> Vec<AttributeDescriptor> {
        let local = self
            .component(component)
            .into_iter()
            .flat_map(|decl| decl.directives.values());
        local
            .chain(self.global_directives.values())
            .cloned()
            .collect()
    }

    fn resolve_directive(
        &self,
        component: Option<ComponentId>,
        attr_name: &str,
    ) -> Option<AttributeDescriptor> {
        let name = directive_name(attr_name);
        component
            .and_then(|c| self.component(c))
            .and_then(|decl| decl.directives.get(name))
            .or_else(|| self.global_directives.get(name))
            .cloned()
    }
}

/// Handle for the slot at `len`, if it fits in a [`ComponentId`].
fn next_handle(len: usize) -> Option<ComponentId> {
    u32::try_from(len).ok().map(ComponentId::from_index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_never_wrap_around() {
        assert_eq!(next_handle(0), Some(ComponentId::from_index(0)));
        assert_eq!(
            next_handle(u32::MAX as usize),
            Some(ComponentId::from_index(u32::MAX))
        );
        assert_eq!(next_handle(u32::MAX as usize + 1), None);
    }

    #[test]
    fn try_add_component_hands_out_sequential_handles() {
        let mut arena = ComponentArena::new();
        let a = arena.try_add_component("A").unwrap();
        let b = arena.try_add_component("B").unwrap();
        assert_eq!(a.index() + 1, b.index());
        assert_eq!(arena.component(b).unwrap().name(), "B");
    }

    #[test]
    fn removed_component_references_go_stale() {
        let mut arena = ComponentArena::new();
        let a = arena.add_component("A");
        let b = arena.add_component("B");
        arena.component_mut(a).unwrap().mixin(b);

        let refs = arena.references(ComponentLink::LocalMixin, Some(a));
        assert_eq!(refs, vec![ComponentRef::to(b)]);
        assert_eq!(arena.resolve(ComponentLink::LocalMixin, &refs[0]), Some(b));

        assert!(arena.remove_component(b).is_some());
        assert_eq!(arena.resolve(ComponentLink::LocalMixin, &refs[0]), None);
        assert!(arena.component_mut(b).is_none());
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn global_mixins_apply_without_component() {
        let mut arena = ComponentArena::new();
        let g = arena.add_component("Global");
        arena.register_global_mixin(g);
        assert_eq!(
            arena.references(ComponentLink::GlobalMixin, None),
            vec![ComponentRef::to(g)]
        );
        assert!(arena.references(ComponentLink::LocalMixin, None).is_empty());
        assert!(arena.references(ComponentLink::LocalExtends, None).is_empty());
    }

    #[test]
    fn own_attributes_respect_visibility_and_first() {
        let mut arena = ComponentArena::new();
        let a = arena.add_component("A");
        arena
            .component_mut(a)
            .unwrap()
            .prop("title")
            .data("counter")
            .prop("subtitle");

        let all = arena.own_attributes(a, &NameFilter::Any, false, false);
        let names: Vec<_> = all.iter().map(|d| d.name()).collect();
        assert_eq!(names, ["title", "counter", "subtitle"]);

        let public = arena.own_attributes(a, &NameFilter::Any, true, false);
        assert_eq!(public.len(), 2);

        let first = arena.own_attributes(a, &NameFilter::Any, false, true);
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].name(), "title");
    }

    #[test]
    fn directive_lookup_ignores_argument_and_modifiers() {
        let mut arena = ComponentArena::new();
        let a = arena.add_component("A");
        arena.component_mut(a).unwrap().directive("autoFocus");
        arena.register_global_directive("tooltip");

        let local = arena.resolve_directive(Some(a), "v-auto-focus:input.lazy").unwrap();
        assert_eq!(local.owner(), Some(a));
        assert_eq!(local.kind(), AttributeKind::Directive);

        let global = arena.resolve_directive(None, "v-tooltip.top").unwrap();
        assert_eq!(global.owner(), None);

        assert!(arena.resolve_directive(None, "v-auto-focus").is_none());

        let names: Vec<_> = arena
            .directive_attributes(a)
            .into_iter()
            .map(|d| d.name().to_string())
            .collect();
        assert_eq!(names, ["v-auto-focus", "v-tooltip"]);
    }
}
