//! Property tests for the attribute codecs.
//!
//! - Descriptors generated at random survive an encode/decode round trip.
//! - The provides table counts (service, provider) pairs, never distinct services.
//! - Exports and opens without targets are never qualified after decoding.
//! - Version parsing gives equal results with a warm, cold or disabled cache.

use indexmap::{IndexMap, IndexSet};
use proptest::prelude::*;

use modscope::prelude::*;

fn name() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z][a-z0-9]{0,6}", 1..4).prop_map(|parts| parts.join("."))
}

fn class_name() -> impl Strategy<Value = String> {
    (name(), "[A-Z][A-Za-z0-9]{0,8}").prop_map(|(package, simple)| format!("{package}.{simple}"))
}

fn version_string() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(0u32..40, 1..4),
        prop::option::of("[a-z]{1,4}[0-9]{0,2}"),
        prop::option::of("[0-9]{1,3}"),
    )
        .prop_map(|(numbers, pre, build)| {
            let mut version = numbers
                .iter()
                .map(u32::to_string)
                .collect::<Vec<_>>()
                .join(".");
            if let Some(pre) = pre {
                version.push('-');
                version.push_str(&pre);
            }
            if let Some(build) = build {
                version.push('+');
                version.push_str(&build);
            }
            version
        })
}

fn requires() -> impl Strategy<Value = Requires> {
    (name(), 0u16..0x40).prop_map(|(name, bits)| {
        Requires::new(RequiresModifiers::from_bits_truncate(bits), name)
    })
}

fn exports() -> impl Strategy<Value = Exports> {
    (name(), 0u16..0x40, prop::collection::vec(name(), 0..3)).prop_map(
        |(source, bits, targets)| {
            Exports::new(ExportsModifiers::from_bits_truncate(bits), source, targets)
        },
    )
}

fn opens() -> impl Strategy<Value = Opens> {
    (name(), 0u16..0x40, prop::collection::vec(name(), 0..3)).prop_map(
        |(source, bits, targets)| Opens::new(OpensModifiers::from_bits_truncate(bits), source, targets),
    )
}

fn provides() -> impl Strategy<Value = IndexMap<String, IndexSet<String>>> {
    prop::collection::vec(
        (class_name(), prop::collection::vec(class_name(), 1..4)),
        0..4,
    )
    .prop_map(|entries| {
        let mut provides: IndexMap<String, IndexSet<String>> = IndexMap::new();
        for (service, providers) in entries {
            provides.entry(service).or_default().extend(providers);
        }
        provides
    })
}

prop_compose! {
    fn descriptor()(
        open in any::<bool>(),
        requires in prop::collection::vec(requires(), 0..5),
        exports in prop::collection::vec(exports(), 0..4),
        opens in prop::collection::vec(opens(), 0..3),
        packages in prop::collection::vec(name(), 0..5),
        uses in prop::collection::vec(class_name(), 0..3),
        provides in provides(),
        version in prop::option::of(version_string()),
        main_class in prop::option::of(class_name()),
        os_name in prop::option::of("[a-z]{1,8}"),
        os_arch in prop::option::of("[a-z0-9_]{1,8}"),
        hashes in prop::option::of(prop::collection::vec((name(), "[0-9a-f]{8}"), 0..3)),
    ) -> ModuleDescriptor {
        let mut builder = ModuleBuilder::with_cache("generated", None)
            .open(open)
            .requires(requires)
            .exports(exports)
            .opens(opens)
            .packages(packages)
            .uses(uses)
            .provides(provides.into_iter().map(|(service, providers)| Provides::new(service, providers)));

        if let Some(version) = version {
            builder = builder.version(&version).unwrap();
        }
        if let Some(main_class) = main_class {
            builder = builder.main_class(main_class).unwrap();
        }
        if let Some(os_name) = os_name {
            builder = builder.os_name(os_name).unwrap();
        }
        if let Some(os_arch) = os_arch {
            builder = builder.os_arch(os_arch).unwrap();
        }
        if let Some(hashes) = hashes {
            builder = hashes
                .into_iter()
                .fold(builder.algorithm("SHA-256"), |builder, (name, hash)| builder.module_hash(name, hash));
        }

        builder.build()
    }
}

fn words(data: &[u8]) -> Vec<u16> {
    data.chunks_exact(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
        .collect()
}

proptest! {
    #[test]
    fn prop_round_trip(descriptor in descriptor()) {
        let mut pool = ConstantPool::new();
        let attributes = ModuleAttributes::encode(&descriptor, &mut pool).unwrap();
        let decoded = attributes
            .decode("generated", &pool, &CodecConfig::uncached())
            .unwrap();

        prop_assert_eq!(&decoded, &descriptor);

        // Encoding is deterministic
        let again = ModuleAttributes::encode(&decoded, &mut pool).unwrap();
        prop_assert_eq!(again.get(AttributeKind::Module), attributes.get(AttributeKind::Module));
    }

    #[test]
    fn prop_provides_count_is_pair_count(descriptor in descriptor()) {
        let mut pool = ConstantPool::new();
        let data = ModuleAttribute::new(descriptor.clone()).encode(&mut pool).unwrap();
        let words = words(&data);

        let pairs: usize = descriptor
            .provides()
            .values()
            .map(|provides| provides.providers().len())
            .sum();

        // The provides table is the tail of the record
        let provides_count = usize::from(words[words.len() - 1 - pairs * 2]);
        prop_assert_eq!(provides_count, pairs);
    }

    #[test]
    fn prop_unqualified_stays_unqualified(
        sources in prop::collection::vec(name(), 1..5),
    ) {
        let descriptor = ModuleBuilder::new("m")
            .exports(sources.iter().map(|source| Exports::new(ExportsModifiers::empty(), source.clone(), Vec::<String>::new())))
            .opens(sources.iter().map(|source| Opens::new(OpensModifiers::empty(), source.clone(), Vec::<String>::new())))
            .build();

        let mut pool = ConstantPool::new();
        let data = ModuleAttribute::new(descriptor).encode(&mut pool).unwrap();
        let decoded = ModuleAttribute::decode("m", &data, &pool, &CodecConfig::uncached())
            .unwrap()
            .into_descriptor();

        prop_assert!(decoded.exports().iter().all(|export| !export.is_qualified()));
        prop_assert!(decoded.opens().iter().all(|opens| !opens.is_qualified()));
    }

    #[test]
    fn prop_version_cache_transparent(versions in prop::collection::vec(version_string(), 1..8)) {
        let cache = VersionCache::new();

        for version in &versions {
            let uncached = Version::parse(version).unwrap();
            let cold_or_warm = cache.parse(version).unwrap();
            let warm = cache.parse(version).unwrap();

            prop_assert_eq!(&*cold_or_warm, &uncached);
            prop_assert_eq!(&*warm, &uncached);
            prop_assert_eq!(warm.as_str(), version.as_str());
        }
    }

    #[test]
    fn prop_version_order_ignores_trailing_zeros(
        numbers in prop::collection::vec(0u32..100, 1..4),
        zeros in 0usize..3,
    ) {
        let base = numbers.iter().map(u32::to_string).collect::<Vec<_>>().join(".");
        let padded = format!("{base}{}", ".0".repeat(zeros));

        let left = Version::parse(&base).unwrap();
        let right = Version::parse(&padded).unwrap();
        prop_assert_eq!(left.cmp(&right), std::cmp::Ordering::Equal);
        prop_assert_eq!(&left, &right);
    }
}
