//! The composition relations between components.

use core::fmt;

use crate::component::ComponentId;

/// A relation through which one component inherits another's attributes.
///
/// [`ComponentLink::ALL`] is the order in which relations are explored at
/// every node of a walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentLink {
    /// Entries of the component's own `mixins: [...]`.
    LocalMixin,
    /// Mixins registered with `Vue.mixin(...)`; they apply to every
    /// component, including an unknown one.
    GlobalMixin,
    /// The component's `extends:` target.
    LocalExtends,
}

impl ComponentLink {
    /// All relations, in exploration order.
    pub const ALL: [ComponentLink; 3] = [
        ComponentLink::LocalMixin,
        ComponentLink::GlobalMixin,
        ComponentLink::LocalExtends,
    ];

    /// Short name, as used in log output.
    pub const fn as_str(self) -> &'static str {
        match self {
            ComponentLink::LocalMixin => "local-mixin",
            ComponentLink::GlobalMixin => "global-mixin",
            ComponentLink::LocalExtends => "local-extends",
        }
    }

    /// References this relation holds from `component`, in declaration
    /// order.
    pub fn related_references<I>(self, index: &I, component: Option<ComponentId>) -> Vec<I::Reference>
    where
        I: ComponentIndex + ?Sized,
    {
        index.references(self, component)
    }

    /// The component a reference points at, or `None` if it went stale.
    pub fn resolve<I>(self, index: &I, reference: &I::Reference) -> Option<ComponentId>
    where
        I: ComponentIndex + ?Sized,
    {
        index.resolve(self, reference)
    }
}

impl fmt::Display for ComponentLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Project index answering composition queries.
///
/// Implementations are expected to be cheap, repeatable queries: asking
/// twice about the same component yields equivalent answers.
pub trait ComponentIndex {
    /// Unresolved pointer to a related component.
    type Reference;

    /// References of kind `link` held by `component`. Global relations are
    /// reported even when `component` is `None`.
    fn references(&self, link: ComponentLink, component: Option<ComponentId>) -> Vec<Self::Reference>;

    /// Dereference `reference`; `None` when it no longer points at a
    /// definition.
    fn resolve(&self, link: ComponentLink, reference: &Self::Reference) -> Option<ComponentId>;
}
