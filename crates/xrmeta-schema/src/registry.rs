use crate::{
    catalog::TypeSource,
    config::{MetadataConfig, ResolverConfig},
    node::EntityDescriptor,
    resolve::FieldResolver,
    scan::scan_entity_types,
    types::NameKey,
};
use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex, MutexGuard},
};

/// Build one entity descriptor per scanned entity type of `source`.
#[must_use]
pub fn build_entity_descriptors<S>(
    source: &S,
    resolver: &FieldResolver,
    filter: Option<&str>,
) -> Vec<EntityDescriptor>
where
    S: TypeSource + ?Sized,
{
    scan_entity_types(source, filter)
        .into_iter()
        .filter_map(|scanned| resolver.build_entity(scanned.decl, scanned.logical_name))
        .collect()
}

///
/// RegistryState
///
/// Latch and map live under the same lock so that bulk initialization runs
/// at most once and inserts stay first-writer-wins under concurrent callers.
///

#[derive(Debug, Default)]
struct RegistryState {
    initialized: bool,
    entities: BTreeMap<NameKey, Arc<EntityDescriptor>>,
}

impl RegistryState {
    fn insert(&mut self, descriptor: EntityDescriptor) -> bool {
        let key = NameKey::new(&descriptor.logical_name);
        if let Some(existing) = self.entities.get(&key) {
            tracing::debug!(
                logical_name = %descriptor.logical_name,
                existing = %existing.logical_name,
                "entity descriptor already registered, keeping the first"
            );
            return false;
        }

        self.entities.insert(key, Arc::new(descriptor));

        true
    }
}

///
/// MetadataRegistry
///
/// Entity descriptors keyed by case-insensitive logical name.
///
/// The bulk scan latch is per instance: every registry runs its own bulk
/// scan once, independent of other registries. Once per process only holds
/// for the shared registry behind `xrmeta::init()`.
///

#[derive(Debug, Default)]
pub struct MetadataRegistry {
    resolver: FieldResolver,
    state: Mutex<RegistryState>,
}

impl MetadataRegistry {
    #[must_use]
    pub fn new(resolver: FieldResolver) -> Self {
        Self {
            resolver,
            state: Mutex::default(),
        }
    }

    #[must_use]
    pub fn with_config(config: &MetadataConfig) -> Self {
        Self::new(FieldResolver::new(config.resolver_config()))
    }

    #[must_use]
    pub const fn resolver_config(&self) -> ResolverConfig {
        self.resolver.config()
    }

    fn state(&self) -> MutexGuard<'_, RegistryState> {
        self.state
            .lock()
            .expect("metadata registry mutex poisoned")
    }

    /// Scan `source` and register every entity found, once.
    ///
    /// Returns `false` without touching the registry if a bulk scan already
    /// ran. The registry is latched afterwards even when the scan finds no
    /// entities.
    pub fn initialize_from_scan<S>(&self, source: &S) -> bool
    where
        S: TypeSource + ?Sized,
    {
        let mut state = self.state();
        if state.initialized {
            return false;
        }

        let descriptors = build_entity_descriptors(source, &self.resolver, None);
        let found = descriptors.len();
        let mut added = 0;
        for descriptor in descriptors {
            if state.insert(descriptor) {
                added += 1;
            }
        }

        state.initialized = true;
        tracing::debug!(found, added, "metadata registry initialized from scan");

        true
    }

    /// Scan `source` for the entity declared exactly as `logical_name` and
    /// register it. Does not affect the bulk initialization latch.
    pub fn initialize_entity_from_scan<S>(&self, source: &S, logical_name: &str) -> bool
    where
        S: TypeSource + ?Sized,
    {
        build_entity_descriptors(source, &self.resolver, Some(logical_name))
            .into_iter()
            .next()
            .is_some_and(|descriptor| self.add_entity_descriptor(descriptor))
    }

    /// Register `descriptor` unless its logical name is already taken.
    ///
    /// A duplicate is accepted and ignored; returns whether it was stored.
    pub fn add_entity_descriptor(&self, descriptor: EntityDescriptor) -> bool {
        self.state().insert(descriptor)
    }

    // get_entity_descriptor
    #[must_use]
    pub fn get_entity_descriptor(&self, logical_name: &str) -> Option<Arc<EntityDescriptor>> {
        self.state()
            .entities
            .get(&NameKey::new(logical_name))
            .cloned()
    }

    #[must_use]
    pub fn contains(&self, logical_name: &str) -> bool {
        self.state()
            .entities
            .contains_key(&NameKey::new(logical_name))
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.state().initialized
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.state().entities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state().entities.is_empty()
    }

    /// Stored logical names, ordered by key.
    #[must_use]
    pub fn logical_names(&self) -> Vec<String> {
        self.state()
            .entities
            .values()
            .map(|d| d.logical_name.clone())
            .collect()
    }

    /// All stored descriptors, ordered by key.
    #[must_use]
    pub fn entities(&self) -> Vec<Arc<EntityDescriptor>> {
        self.state().entities.values().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        node::{AttributeDescriptor, AttributeKind, DeclKind, FieldDecl, TypeDecl},
        types::{FieldShape, Wrapped},
    };
    use proptest::prelude::*;
    use std::thread;

    const ACCOUNT: TypeDecl = TypeDecl {
        ident: "Account",
        logical_name: Some("account"),
        kind: DeclKind::Entity,
        fields: &[
            FieldDecl {
                ident: "name",
                logical_name: Some("name"),
                shape: FieldShape::Text,
            },
            FieldDecl {
                ident: "employees",
                logical_name: Some("numberofemployees"),
                shape: FieldShape::Optional(Wrapped::Int32),
            },
        ],
    };

    const CONTACT: TypeDecl = TypeDecl {
        ident: "Contact",
        logical_name: Some("contact"),
        kind: DeclKind::Entity,
        fields: &[FieldDecl {
            ident: "parent",
            logical_name: Some("parentcustomerid"),
            shape: FieldShape::EntityReference,
        }],
    };

    const LEAD: TypeDecl = TypeDecl {
        ident: "Lead",
        logical_name: Some("lead"),
        kind: DeclKind::Entity,
        fields: &[],
    };

    fn kinds(registry: &MetadataRegistry, name: &str) -> Vec<AttributeKind> {
        registry
            .get_entity_descriptor(name)
            .expect("entity should be registered")
            .attributes
            .iter()
            .map(|a| a.kind)
            .collect()
    }

    fn entity(name: &str, attributes: usize) -> EntityDescriptor {
        EntityDescriptor::new(name)
            .expect("valid logical name")
            .with_attributes((0..attributes).map(|i| {
                AttributeDescriptor::new(format!("field{i}"), name, AttributeKind::String)
            }))
    }

    #[test]
    fn scan_builds_account_and_contact() {
        let registry = MetadataRegistry::default();

        assert!(registry.initialize_from_scan(&[ACCOUNT, CONTACT]));
        assert_eq!(registry.len(), 2);
        assert_eq!(
            kinds(&registry, "account"),
            vec![AttributeKind::String, AttributeKind::Integer]
        );
        assert_eq!(kinds(&registry, "contact"), vec![AttributeKind::Lookup]);

        let contact = registry
            .get_entity_descriptor("contact")
            .expect("contact registered");
        assert_eq!(contact.attributes[0].entity_logical_name, "contact");
    }

    #[test]
    fn second_bulk_scan_is_a_no_op() {
        let registry = MetadataRegistry::default();

        assert!(registry.initialize_from_scan(&[ACCOUNT]));
        let first = registry
            .get_entity_descriptor("account")
            .expect("account registered");

        assert!(!registry.initialize_from_scan(&[CONTACT, LEAD]));
        assert_eq!(registry.logical_names(), vec!["account"]);

        let again = registry
            .get_entity_descriptor("account")
            .expect("account registered");
        assert!(Arc::ptr_eq(&first, &again));
    }

    #[test]
    fn empty_scan_still_latches() {
        let registry = MetadataRegistry::default();
        let empty: Vec<TypeDecl> = Vec::new();

        assert!(registry.initialize_from_scan(&empty));
        assert!(registry.is_initialized());
        assert!(registry.is_empty());
        assert!(!registry.initialize_from_scan(&[ACCOUNT]));
        assert!(registry.is_empty());
    }

    #[test]
    fn latch_is_per_instance() {
        let first = MetadataRegistry::default();
        let second = MetadataRegistry::default();

        assert!(first.initialize_from_scan(&[ACCOUNT]));
        assert!(second.initialize_from_scan(&[CONTACT]));
        assert!(!first.initialize_from_scan(&[CONTACT]));
        assert_eq!(first.logical_names(), vec!["account"]);
        assert_eq!(second.logical_names(), vec!["contact"]);
    }

    #[test]
    fn case_variant_types_keep_the_first() {
        const UPPER: TypeDecl = TypeDecl {
            ident: "AccountUpper",
            logical_name: Some("ACCOUNT"),
            kind: DeclKind::Entity,
            fields: &[],
        };
        const TITLE: TypeDecl = TypeDecl {
            logical_name: Some("Account"),
            ..ACCOUNT
        };

        let registry = MetadataRegistry::default();
        registry.initialize_from_scan(&[TITLE, UPPER]);

        assert_eq!(registry.len(), 1);
        let account = registry
            .get_entity_descriptor("account")
            .expect("account registered");
        assert_eq!(account.logical_name, "Account");
        assert_eq!(account.attributes.len(), 2);
    }

    #[test]
    fn add_keeps_first_writer() {
        let registry = MetadataRegistry::default();

        assert!(registry.add_entity_descriptor(entity("account", 1)));
        assert!(!registry.add_entity_descriptor(entity("ACCOUNT", 3)));

        let stored = registry
            .get_entity_descriptor("Account")
            .expect("account registered");
        assert_eq!(stored.logical_name, "account");
        assert_eq!(stored.attributes.len(), 1);
    }

    #[test]
    fn adds_do_not_latch_bulk_scan() {
        let registry = MetadataRegistry::default();
        registry.add_entity_descriptor(entity("lead", 0));

        assert!(!registry.is_initialized());
        assert!(registry.initialize_from_scan(&[ACCOUNT, LEAD]));
        assert_eq!(registry.len(), 2);
        assert!(kinds(&registry, "lead").is_empty());
    }

    #[test]
    fn missing_entity_is_none() {
        let registry = MetadataRegistry::default();

        assert!(registry.get_entity_descriptor("account").is_none());
        assert!(!registry.contains("account"));
    }

    #[test]
    fn single_entity_scan_uses_filter() {
        let registry = MetadataRegistry::default();

        assert!(!registry.initialize_entity_from_scan(&[ACCOUNT, CONTACT], "Contact"));
        assert!(registry.is_empty());

        assert!(registry.initialize_entity_from_scan(&[ACCOUNT, CONTACT], "contact"));
        assert_eq!(registry.logical_names(), vec!["contact"]);
        assert!(registry.contains("CONTACT"));
        assert!(!registry.is_initialized());
        assert!(!registry.initialize_entity_from_scan(&[ACCOUNT, CONTACT], "contact"));
        assert!(!registry.initialize_entity_from_scan(&[ACCOUNT], "lead"));
    }

    #[test]
    fn edition_without_unique_identifier_skips_raw_guids() {
        const WITH_GUID: TypeDecl = TypeDecl {
            ident: "Audit",
            logical_name: Some("audit"),
            kind: DeclKind::Entity,
            fields: &[FieldDecl {
                ident: "object_id",
                logical_name: Some("objectid"),
                shape: FieldShape::Guid,
            }],
        };

        let legacy = MetadataRegistry::with_config(&MetadataConfig::for_edition(
            crate::config::Edition::Crm2011,
        ));
        legacy.initialize_from_scan(&[WITH_GUID]);
        assert!(kinds(&legacy, "audit").is_empty());

        let current = MetadataRegistry::default();
        current.initialize_from_scan(&[WITH_GUID]);
        assert_eq!(
            kinds(&current, "audit"),
            vec![AttributeKind::UniqueIdentifier]
        );
    }

    #[test]
    fn concurrent_bulk_scans_run_once() {
        let registry = Arc::new(MetadataRegistry::default());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || registry.initialize_from_scan(&[ACCOUNT, CONTACT]))
            })
            .collect();

        let ran = handles
            .into_iter()
            .map(|h| h.join().expect("scan thread panicked"))
            .filter(|ran| *ran)
            .count();

        assert_eq!(ran, 1);
        assert_eq!(registry.len(), 2);
    }

    fn arb_name() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("account"),
            Just("Account"),
            Just("ACCOUNT"),
            Just("contact"),
            Just("Contact"),
            Just("lead"),
        ]
        .prop_map(str::to_string)
    }

    proptest! {
        #[test]
        fn first_insert_wins_for_any_sequence(
            adds in prop::collection::vec((arb_name(), 0usize..4), 0..16)
        ) {
            let registry = MetadataRegistry::default();
            let mut expected = BTreeMap::<String, (String, usize)>::new();

            for (name, attributes) in &adds {
                registry.add_entity_descriptor(entity(name, *attributes));
                expected
                    .entry(name.to_lowercase())
                    .or_insert_with(|| (name.clone(), *attributes));
            }

            prop_assert_eq!(registry.len(), expected.len());
            for (key, (name, attributes)) in &expected {
                let stored = registry.get_entity_descriptor(&key.to_uppercase());
                prop_assert!(stored.is_some());
                let stored = stored.unwrap();
                prop_assert_eq!(&stored.logical_name, name);
                prop_assert_eq!(stored.attributes.len(), *attributes);
            }
        }

        #[test]
        fn bulk_scan_is_idempotent(second in prop::collection::vec(0usize..3, 0..4)) {
            let pool = [ACCOUNT, CONTACT, LEAD];
            let once = MetadataRegistry::default();
            once.initialize_from_scan(&pool[..2]);

            let twice = MetadataRegistry::default();
            twice.initialize_from_scan(&pool[..2]);
            let other: Vec<TypeDecl> = second.iter().map(|i| pool[*i]).collect();
            twice.initialize_from_scan(&other);

            prop_assert_eq!(once.logical_names(), twice.logical_names());
            for name in once.logical_names() {
                prop_assert_eq!(kinds(&once, &name), kinds(&twice, &name));
            }
        }
    }
}
