//! Component handles, attribute descriptors and the providers that describe
//! a single component.

use core::fmt;

use crate::grammar::NameFilter;

/// Handle to one component definition.
///
/// Handles are issued by whoever owns the component definitions (see
/// [`ComponentArena`](crate::memory::ComponentArena)); two handles are the
/// same component iff their indices are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ComponentId(u32);

impl ComponentId {
    /// Handle for the definition stored at `index`.
    pub const fn from_index(index: u32) -> Self {
        Self(index)
    }

    /// Index of the definition this handle points at.
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where an attribute comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    /// Declared in `props`.
    Prop,
    /// Declared in `data`.
    Data,
    /// Declared in `computed`.
    Computed,
    /// Declared in `methods`.
    Method,
    /// A custom directive, written `v-name`.
    Directive,
}

impl AttributeKind {
    /// Whether attributes of this kind may be set from a parent template.
    pub const fn is_public(self) -> bool {
        matches!(self, AttributeKind::Prop | AttributeKind::Directive)
    }
}

/// One attribute a component accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeDescriptor {
    name: String,
    declared_name: String,
    owner: Option<ComponentId>,
    kind: AttributeKind,
    public: bool,
}

impl AttributeDescriptor {
    /// Describe attribute `name`, declared on `owner`.
    ///
    /// Visibility follows [`AttributeKind::is_public`]. `owner` is `None`
    /// only for globally registered directives.
    pub fn new(name: impl Into<String>, owner: Option<ComponentId>, kind: AttributeKind) -> Self {
        let name = name.into();
        Self {
            declared_name: name.clone(),
            name,
            owner,
            kind,
            public: kind.is_public(),
        }
    }

    /// Override the visibility.
    pub fn with_visibility(mut self, public: bool) -> Self {
        self.public = public;
        self
    }

    /// The same attribute under another spelling.
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    /// Name as presented (possibly a respelling).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name as declared in the component.
    pub fn declared_name(&self) -> &str {
        &self.declared_name
    }

    /// Component the attribute is declared on.
    pub fn owner(&self) -> Option<ComponentId> {
        self.owner
    }

    /// Kind of declaration.
    pub fn kind(&self) -> AttributeKind {
        self.kind
    }

    /// Whether a parent template may set it.
    pub fn is_public(&self) -> bool {
        self.public
    }
}

/// A component registered locally under `components: { ... }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalComponent {
    /// Registration name.
    pub name: String,
    /// Definition the name points at, when it resolves.
    pub target: Option<ComponentId>,
}

/// What one component declares by itself, ignoring mixins and extends.
pub trait OwnDetails {
    /// Attributes declared directly on `component` whose declared name passes
    /// `filter`. Internal attributes are skipped when `only_public` is set;
    /// at most one result is returned when `only_first` is set.
    fn own_attributes(
        &self,
        component: ComponentId,
        filter: &NameFilter,
        only_public: bool,
        only_first: bool,
    ) -> Vec<AttributeDescriptor>;

    /// Local sub-components of `component` accepted by `filter`, stopping
    /// after the first when `only_first` is set.
    fn local_components(
        &self,
        component: ComponentId,
        filter: &mut dyn FnMut(&LocalComponent) -> bool,
        only_first: bool,
    ) -> Vec<LocalComponent>;
}

/// Attributes contributed by custom directives.
pub trait DirectiveAttributes {
    /// Every directive attribute usable on `component`.
    fn directive_attributes(&self, component: ComponentId) -> Vec<AttributeDescriptor>;

    /// The directive attribute `attr_name` denotes on `component`, if any.
    fn resolve_directive(
        &self,
        component: Option<ComponentId>,
        attr_name: &str,
    ) -> Option<AttributeDescriptor>;
}
