//! `Module` attribute codec.
//!
//! The `Module` attribute carries the module flags and the five relation tables of a descriptor.
//!
//! # Format
//!
//! ```text
//! u2 module_flags
//! u2 requires_count
//!   { u2 name_utf8; u2 flags }[requires_count]
//! u2 exports_count
//!   { u2 package_utf8; u2 flags; u2 to_count; u2 target_utf8[to_count] }[exports_count]
//! u2 opens_count
//!   { u2 package_utf8; u2 flags; u2 to_count; u2 target_utf8[to_count] }[opens_count]
//! u2 uses_count
//!   { u2 service_class }[uses_count]
//! u2 provides_count
//!   { u2 service_class; u2 provider_class }[provides_count]
//! ```
//!
//! Package names are stored in internal form. `provides_count` counts (service, provider)
//! pairs, not services: a service with three providers contributes three entries.
//!
//! # Flags
//!
//! Only [`ModuleFlags::OPEN`] is read back. [`ModuleFlags::SYNTHETIC`] is written for synthetic
//! descriptors but ignored when decoding, so a decoded descriptor is never synthetic.

use bitflags::bitflags;
use indexmap::{IndexMap, IndexSet};

use crate::{
    config::CodecConfig,
    descriptor::{
        Exports, ExportsModifiers, ModuleBuilder, ModuleDescriptor, Opens, OpensModifiers,
        Provides, Requires, RequiresModifiers,
    },
    record::{ByteVector, Parser},
    symbols::{to_dotted_form, to_internal_form, SymbolTable},
    Result,
};

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    /// Flags stored in `module_flags`
    pub struct ModuleFlags : u16 {
        /// The module is open
        const OPEN = 0x0001;
        /// The module is synthetic; written only
        const SYNTHETIC = 0x0020;
    }
}

/// The `Module` attribute: a descriptor's flags and relation tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleAttribute {
    descriptor: ModuleDescriptor,
}

impl ModuleAttribute {
    /// Wraps a descriptor for encoding.
    #[must_use]
    pub fn new(descriptor: ModuleDescriptor) -> Self {
        Self { descriptor }
    }

    /// The descriptor carried by this attribute.
    #[must_use]
    pub fn descriptor(&self) -> &ModuleDescriptor {
        &self.descriptor
    }

    /// Consumes the attribute and returns its descriptor.
    #[must_use]
    pub fn into_descriptor(self) -> ModuleDescriptor {
        self.descriptor
    }

    /// Decodes a `Module` attribute into a descriptor named `name`.
    ///
    /// The attribute does not hold the module name; the container supplies it.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if the record is truncated, or
    /// [`crate::Error::InvalidSymbol`] if a reference does not resolve.
    pub fn decode<S: SymbolTable + ?Sized>(
        name: &str,
        data: &[u8],
        symbols: &S,
        config: &CodecConfig,
    ) -> Result<Self> {
        let builder = ModuleBuilder::with_cache(name, config.version_cache.clone());
        let builder = Self::decode_into(data, symbols, builder)?;

        Ok(Self {
            descriptor: builder.build(),
        })
    }

    /// Decodes a `Module` attribute into an existing builder.
    ///
    /// Sets open-ness and replaces the builder's requires, exports, opens, uses and provides.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if the record is truncated, or
    /// [`crate::Error::InvalidSymbol`] if a reference does not resolve.
    pub fn decode_into<S: SymbolTable + ?Sized>(
        data: &[u8],
        symbols: &S,
        builder: ModuleBuilder,
    ) -> Result<ModuleBuilder> {
        let mut parser = Parser::new(data);

        let module_flags = ModuleFlags::from_bits_truncate(parser.read_be::<u16>()?);

        let requires_count = parser.read_be::<u16>()?;
        let mut requires = IndexSet::with_capacity(usize::from(requires_count));
        for _ in 0..requires_count {
            let name = symbols.resolve_utf8(parser.read_be::<u16>()?)?;
            let modifiers = RequiresModifiers::from_bits_truncate(parser.read_be::<u16>()?);
            requires.insert(Requires::new(modifiers, name));
        }

        let exports = read_access_table::<Exports, _>(&mut parser, symbols)?;
        let opens = read_access_table::<Opens, _>(&mut parser, symbols)?;

        let uses_count = parser.read_be::<u16>()?;
        let mut uses = IndexSet::with_capacity(usize::from(uses_count));
        for _ in 0..uses_count {
            uses.insert(symbols.resolve_class_name(parser.read_be::<u16>()?)?);
        }

        let provides_count = parser.read_be::<u16>()?;
        let mut provides: IndexMap<String, IndexSet<String>> = IndexMap::new();
        for _ in 0..provides_count {
            let service = symbols.resolve_class_name(parser.read_be::<u16>()?)?;
            let provider = symbols.resolve_class_name(parser.read_be::<u16>()?)?;
            provides.entry(service).or_default().insert(provider);
        }

        Ok(builder
            .open(module_flags.contains(ModuleFlags::OPEN))
            .requires(requires)
            .exports(exports)
            .opens(opens)
            .uses(uses)
            .provides(
                provides
                    .into_iter()
                    .map(|(service, providers)| Provides::new(service, providers)),
            ))
    }

    /// Encodes the attribute, interning names into `symbols`.
    ///
    /// # Errors
    /// Returns [`crate::Error::LimitExceeded`] if a table or the symbol table overflows.
    pub fn encode<S: SymbolTable + ?Sized>(&self, symbols: &mut S) -> Result<Vec<u8>> {
        encode_descriptor(&self.descriptor, symbols)
    }
}

/// Encodes the `Module` attribute of `descriptor` without wrapping it first.
pub(crate) fn encode_descriptor<S: SymbolTable + ?Sized>(
    descriptor: &ModuleDescriptor,
    symbols: &mut S,
) -> Result<Vec<u8>> {
    let mut out = ByteVector::new();

    let mut module_flags = ModuleFlags::empty();
    module_flags.set(ModuleFlags::OPEN, descriptor.is_open());
    module_flags.set(ModuleFlags::SYNTHETIC, descriptor.is_synthetic());
    out.put_be(module_flags.bits());

    out.put_count(descriptor.requires().len(), "requires")?;
    for requires in descriptor.requires() {
        out.put_be(symbols.intern_utf8(requires.name())?);
        out.put_be(requires.modifiers().bits());
    }

    write_access_table(&mut out, descriptor.exports(), symbols, "exports")?;
    write_access_table(&mut out, descriptor.opens(), symbols, "opens")?;

    out.put_count(descriptor.uses().len(), "uses")?;
    for service in descriptor.uses() {
        out.put_be(symbols.intern_class_name(service)?);
    }

    let pairs = descriptor
        .provides()
        .values()
        .map(|provides| provides.providers().len())
        .sum();
    out.put_count(pairs, "provides")?;
    for provides in descriptor.provides().values() {
        let service = symbols.intern_class_name(provides.service())?;
        for provider in provides.providers() {
            out.put_be(service);
            out.put_be(symbols.intern_class_name(provider)?);
        }
    }

    Ok(out.into_vec())
}

/// Shared shape of [`Exports`] and [`Opens`] records.
trait AccessEntry: Sized {
    fn from_record(flags: u16, source: String, targets: IndexSet<String>) -> Self;
    fn source(&self) -> &str;
    fn flags(&self) -> u16;
    fn targets(&self) -> &IndexSet<String>;
    fn is_qualified(&self) -> bool;
}

impl AccessEntry for Exports {
    fn from_record(flags: u16, source: String, targets: IndexSet<String>) -> Self {
        Exports::new(ExportsModifiers::from_bits_truncate(flags), source, targets)
    }

    fn source(&self) -> &str {
        Exports::source(self)
    }

    fn flags(&self) -> u16 {
        self.modifiers().bits()
    }

    fn targets(&self) -> &IndexSet<String> {
        Exports::targets(self)
    }

    fn is_qualified(&self) -> bool {
        Exports::is_qualified(self)
    }
}

impl AccessEntry for Opens {
    fn from_record(flags: u16, source: String, targets: IndexSet<String>) -> Self {
        Opens::new(OpensModifiers::from_bits_truncate(flags), source, targets)
    }

    fn source(&self) -> &str {
        Opens::source(self)
    }

    fn flags(&self) -> u16 {
        self.modifiers().bits()
    }

    fn targets(&self) -> &IndexSet<String> {
        Opens::targets(self)
    }

    fn is_qualified(&self) -> bool {
        Opens::is_qualified(self)
    }
}

fn read_access_table<T, S>(parser: &mut Parser<'_>, symbols: &S) -> Result<IndexSet<T>>
where
    T: AccessEntry + Eq + std::hash::Hash,
    S: SymbolTable + ?Sized,
{
    let count = parser.read_be::<u16>()?;
    let mut entries = IndexSet::with_capacity(usize::from(count));

    for _ in 0..count {
        let source = to_dotted_form(symbols.resolve_utf8(parser.read_be::<u16>()?)?);
        let flags = parser.read_be::<u16>()?;

        let to_count = parser.read_be::<u16>()?;
        let mut targets = IndexSet::with_capacity(usize::from(to_count));
        for _ in 0..to_count {
            targets.insert(symbols.resolve_utf8(parser.read_be::<u16>()?)?.to_string());
        }

        entries.insert(T::from_record(flags, source, targets));
    }

    Ok(entries)
}

fn write_access_table<T, S>(
    out: &mut ByteVector,
    entries: &IndexSet<T>,
    symbols: &mut S,
    what: &'static str,
) -> Result<()>
where
    T: AccessEntry,
    S: SymbolTable + ?Sized,
{
    out.put_count(entries.len(), what)?;

    for entry in entries {
        out.put_be(symbols.intern_utf8(&to_internal_form(entry.source()))?);
        out.put_be(entry.flags());

        if entry.is_qualified() {
            out.put_count(entry.targets().len(), "targets")?;
            for target in entry.targets() {
                out.put_be(symbols.intern_utf8(target)?);
            }
        } else {
            out.put_be(0_u16);
        }
    }

    Ok(())
}
