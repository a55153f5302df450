//! Shared fixtures for unit tests.

use crate::{
    descriptor::{
        Exports, ExportsModifiers, ModuleBuilder, ModuleDescriptor, Opens, OpensModifiers,
        Provides, Requires, RequiresModifiers,
    },
    Result,
};

/// Splits an encoded record into big-endian `u2` words.
pub fn be_words(data: &[u8]) -> Vec<u16> {
    assert_eq!(data.len() % 2, 0, "record length is not a multiple of two");
    data.chunks_exact(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
        .collect()
}

/// A descriptor that populates every attribute.
///
/// Neither synthetic nor automatic, so it survives a round trip unchanged.
pub fn sample_descriptor() -> Result<ModuleDescriptor> {
    Ok(ModuleBuilder::with_cache("com.example.app", None)
        .open(false)
        .requires([
            Requires::new(RequiresModifiers::MANDATED, "java.base"),
            Requires::new(RequiresModifiers::TRANSITIVE, "java.sql"),
            Requires::new(RequiresModifiers::STATIC, "com.example.annotations"),
        ])
        .exports([
            Exports::new(ExportsModifiers::empty(), "com.example.app.api", Vec::<String>::new()),
            Exports::new(
                ExportsModifiers::empty(),
                "com.example.app.spi",
                ["com.example.plugin", "com.example.tools"],
            ),
        ])
        .opens([Opens::new(
            OpensModifiers::empty(),
            "com.example.app.model",
            ["com.fasterxml.jackson.databind"],
        )])
        .packages([
            "com.example.app",
            "com.example.app.api",
            "com.example.app.spi",
            "com.example.app.model",
            "com.example.app.internal",
        ])
        .uses(["com.example.app.spi.Plugin"])
        .provides([
            Provides::new(
                "java.sql.Driver",
                ["com.example.app.internal.DriverA", "com.example.app.internal.DriverB"],
            ),
            Provides::new(
                "com.example.app.spi.Plugin",
                ["com.example.app.internal.DefaultPlugin"],
            ),
        ])
        .version("2.3.0-rc.1+build.42")?
        .main_class("com.example.app.Main")?
        .os_name("linux")?
        .os_arch("x86_64")?
        .os_version("6.1")?
        .algorithm("SHA-256")
        .module_hash("java.sql", "4c6d2f")
        .module_hash("com.example.annotations", "90ab11")
        .build())
}
