use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    /// Modifiers of a [`Requires`] dependence, using their on-disk flag bits
    pub struct RequiresModifiers : u16 {
        /// Modules reading this module also read the dependence
        const TRANSITIVE = 0x0001;
        /// The dependence is mandatory at compile time only
        const STATIC = 0x0002;
        /// The dependence was not explicitly or implicitly declared in source
        const SYNTHETIC = 0x0010;
        /// The dependence was implicitly declared in source
        const MANDATED = 0x0020;
    }
}

/// A dependence of a module on another module.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Requires {
    name: String,
    modifiers: RequiresModifiers,
}

impl Requires {
    /// Creates a dependence on the module `name`.
    pub fn new(modifiers: RequiresModifiers, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            modifiers,
        }
    }

    /// Name of the module depended upon.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The modifiers of this dependence.
    #[must_use]
    pub fn modifiers(&self) -> RequiresModifiers {
        self.modifiers
    }
}
