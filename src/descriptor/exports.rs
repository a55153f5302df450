//! Exported and opened packages.
//!
//! [`Exports`] and [`Opens`] share one shape: a source package, a modifier set and an optional
//! set of target modules. A non-empty target set makes the export or open *qualified*.
//!
//! Both types hash on their source and modifiers only. Targets keep their insertion order for
//! encoding, while equality treats them as a set.

use std::hash::{Hash, Hasher};

use bitflags::bitflags;
use indexmap::IndexSet;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    /// Modifiers of an [`Exports`], using their on-disk flag bits
    pub struct ExportsModifiers : u16 {
        /// The export was not explicitly or implicitly declared in source
        const SYNTHETIC = 0x0010;
        /// The export was implicitly declared in source
        const MANDATED = 0x0020;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    /// Modifiers of an [`Opens`], using their on-disk flag bits
    pub struct OpensModifiers : u16 {
        /// The open was not explicitly or implicitly declared in source
        const SYNTHETIC = 0x0010;
        /// The open was implicitly declared in source
        const MANDATED = 0x0020;
    }
}

/// A package exported by a module, possibly only to specific target modules.
///
/// # Examples
///
/// ```rust
/// use modscope::{Exports, ExportsModifiers};
///
/// let open_to_all = Exports::new(ExportsModifiers::empty(), "p", Vec::<String>::new());
/// let friends_only = Exports::new(ExportsModifiers::empty(), "p", ["q", "r"]);
///
/// assert!(!open_to_all.is_qualified());
/// assert!(friends_only.is_qualified());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exports {
    source: String,
    modifiers: ExportsModifiers,
    targets: IndexSet<String>,
}

impl Exports {
    /// Creates an export of package `source` to `targets`; no targets means unqualified.
    pub fn new<I, T>(modifiers: ExportsModifiers, source: impl Into<String>, targets: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            source: source.into(),
            modifiers,
            targets: targets.into_iter().map(Into::into).collect(),
        }
    }

    /// Name of the exported package, in dotted form.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The modifiers of this export.
    #[must_use]
    pub fn modifiers(&self) -> ExportsModifiers {
        self.modifiers
    }

    /// Target modules, empty when the export is unqualified.
    #[must_use]
    pub fn targets(&self) -> &IndexSet<String> {
        &self.targets
    }

    /// Returns `true` if the export is restricted to its targets.
    #[must_use]
    pub fn is_qualified(&self) -> bool {
        !self.targets.is_empty()
    }
}

impl Hash for Exports {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source.hash(state);
        self.modifiers.hash(state);
    }
}

/// A package opened for deep reflection, possibly only to specific target modules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opens {
    source: String,
    modifiers: OpensModifiers,
    targets: IndexSet<String>,
}

impl Opens {
    /// Creates an open of package `source` to `targets`; no targets means unqualified.
    pub fn new<I, T>(modifiers: OpensModifiers, source: impl Into<String>, targets: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            source: source.into(),
            modifiers,
            targets: targets.into_iter().map(Into::into).collect(),
        }
    }

    /// Name of the opened package, in dotted form.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The modifiers of this open.
    #[must_use]
    pub fn modifiers(&self) -> OpensModifiers {
        self.modifiers
    }

    /// Target modules, empty when the open is unqualified.
    #[must_use]
    pub fn targets(&self) -> &IndexSet<String> {
        &self.targets
    }

    /// Returns `true` if the open is restricted to its targets.
    #[must_use]
    pub fn is_qualified(&self) -> bool {
        !self.targets.is_empty()
    }
}

impl Hash for Opens {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source.hash(state);
        self.modifiers.hash(state);
    }
}
