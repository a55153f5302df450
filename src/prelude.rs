//! # modscope Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the modscope library. Import this module to get quick access to everything needed
//! to build, encode and decode module descriptors.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all modscope operations
pub use crate::Error;

/// The result type used throughout modscope
pub use crate::Result;

/// Configuration for decoding module attributes
pub use crate::CodecConfig;

// ================================================================================================
// Descriptor Model
// ================================================================================================

/// Immutable descriptor and its builder
pub use crate::descriptor::{ModuleBuilder, ModuleDescriptor};

/// Module relations
pub use crate::descriptor::{
    Exports, ExportsModifiers, Opens, OpensModifiers, Provides, Requires, RequiresModifiers,
};

/// Versions and module hashes
pub use crate::descriptor::{ModuleHashes, Version, VersionCache};

// ================================================================================================
// Attribute Codecs
// ================================================================================================

/// Attribute set driver
pub use crate::attributes::{AttributeKind, ModuleAttributes};

/// Individual attribute codecs
pub use crate::attributes::{
    HashesAttribute, MainClassAttribute, ModuleAttribute, PackagesAttribute,
    TargetPlatformAttribute, VersionAttribute,
};

// ================================================================================================
// Symbols
// ================================================================================================

/// Symbol table interface and in-memory implementation
pub use crate::symbols::{ConstantPool, SymbolTable};
