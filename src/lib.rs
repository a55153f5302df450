// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # modscope
//!
//! [![Crates.io](https://img.shields.io/crates/v/modscope.svg)](https://crates.io/crates/modscope)
//! [![Documentation](https://docs.rs/modscope/badge.svg)](https://docs.rs/modscope)
//! [![License](https://img.shields.io/badge/license-Apache--2.0-blue.svg)](https://github.com/BinFlip/modscope/blob/main/LICENSE-APACHE)
//!
//! A fast codec for module descriptor attributes. `modscope` reads and writes the compact binary
//! records that describe a module inside a container's metadata section: its name, flags,
//! dependences, exported and opened packages, services, version, entry point, target platform
//! and the hashes of the modules it was linked against.
//!
//! ## Features
//!
//! - **📦 Six attribute codecs** - `Module`, `Packages`, `Version`, `MainClass`, `TargetPlatform`, `Hashes`
//! - **⚡ Trusting decoder** - Records come from the toolchain that reads them back, so names and dependencies are not re-validated
//! - **🔁 Reproducible output** - Insertion-ordered collections give identical bytes on every encode
//! - **🧩 Pluggable symbol tables** - Codecs talk to the container only through [`SymbolTable`]
//! - **🛡️ Bounds-checked reads** - Truncated records produce [`Error::OutOfBounds`] rather than a panic
//!
//! ## Quick Start
//!
//! ```rust
//! use modscope::prelude::*;
//!
//! let descriptor = ModuleBuilder::new("com.example.app")
//!     .requires([Requires::new(RequiresModifiers::MANDATED, "java.base")])
//!     .exports([Exports::new(ExportsModifiers::empty(), "com.example.api", Vec::<String>::new())])
//!     .packages(["com.example.api", "com.example.impl"])
//!     .version("1.0.0")?
//!     .build();
//!
//! // Encode into a fresh constant pool
//! let mut pool = ConstantPool::new();
//! let attributes = ModuleAttributes::encode(&descriptor, &mut pool)?;
//!
//! // ... and decode it again
//! let decoded = attributes.decode("com.example.app", &pool, &CodecConfig::default())?;
//! assert_eq!(decoded, descriptor);
//! # Ok::<(), modscope::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`descriptor`] - The immutable [`ModuleDescriptor`], its parts, and the [`ModuleBuilder`]
//! - [`attributes`] - One codec per attribute plus the [`ModuleAttributes`] driver
//! - [`symbols`] - The [`SymbolTable`] interface and the in-memory [`ConstantPool`]
//! - [`record`] - Big-endian record reading and writing
//! - [`Error`] and [`Result`] - Error handling
//!
//! ### Version Cache
//!
//! Many descriptors in one container share a version string. Decoding parses versions through a
//! single-slot [`VersionCache`] that hands out the same [`Version`] for a repeated string. The
//! cache never changes results; use [`CodecConfig::uncached`] to bypass it.
//!
//! ## Logging
//!
//! The crate emits [`tracing`](https://docs.rs/tracing) events at `debug` and `trace` level and
//! never installs a subscriber.

#[macro_use]
pub(crate) mod error;
mod config;

#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types.
///
/// ```rust
/// use modscope::prelude::*;
///
/// let descriptor = ModuleBuilder::new("m").build();
/// assert!(descriptor.requires().is_empty());
/// ```
pub mod prelude;

/// Module attribute codecs and the attribute set driver.
pub mod attributes;

/// Module descriptor model and builder.
pub mod descriptor;

/// Big-endian record reading and writing.
pub mod record;

/// Symbol table interface and the in-memory constant pool.
pub mod symbols;

/// `modscope` Result type.
///
/// A type alias for `std::result::Result<T, Error>` where the error type is always [`Error`].
///
/// # Examples
///
/// ```rust
/// use modscope::{Result, Version};
///
/// fn parse_version(text: &str) -> Result<Version> {
///     Version::parse(text)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// `modscope` Error type.
///
/// Every fallible operation in the crate returns this error.
pub use error::Error;

/// Codec configuration.
pub use config::CodecConfig;

/// Attribute codecs.
pub use attributes::{
    AttributeKind, HashesAttribute, MainClassAttribute, ModuleAttribute, ModuleAttributes,
    ModuleFlags, PackagesAttribute, TargetPlatformAttribute, VersionAttribute,
};

/// Descriptor model.
pub use descriptor::{
    Exports, ExportsModifiers, ModuleBuilder, ModuleDescriptor, ModuleHashes, Opens,
    OpensModifiers, Provides, Requires, RequiresModifiers, ScalarField, Version, VersionCache,
};

/// Record primitives.
pub use record::{ByteVector, Parser};

/// Symbol tables.
pub use symbols::{Constant, ConstantPool, SymbolTable};
