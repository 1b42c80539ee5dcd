//! Entity type discovery over a `TypeSource`.

use crate::{catalog::TypeSource, node::TypeDecl, types::NameKey};
use std::collections::BTreeMap;

///
/// ScannedType
///

#[derive(Clone, Copy, Debug)]
pub struct ScannedType<'a> {
    pub logical_name: &'static str,
    pub decl: &'a TypeDecl,
}

/// Collect the entity declarations of `source`, one per case-insensitive
/// logical name, in first-encounter order.
///
/// Declarations that are not entities, or whose logical name annotation is
/// missing or blank, are skipped. When two declarations advertise the same
/// name the first one is kept. With `filter` set only the entry whose logical
/// name equals it exactly is returned.
pub fn scan_entity_types<'a, S>(source: &'a S, filter: Option<&str>) -> Vec<ScannedType<'a>>
where
    S: TypeSource + ?Sized,
{
    let mut seen = BTreeMap::<NameKey, &'static str>::new();
    let mut scanned = Vec::new();

    for decl in source.declarations().iter().filter(|d| d.is_entity()) {
        let Some(logical_name) = decl.annotated_name() else {
            continue;
        };

        let key = NameKey::new(logical_name);
        if let Some(prev) = seen.get(&key) {
            tracing::warn!(
                logical_name,
                kept = *prev,
                ignored = decl.ident,
                "duplicate entity logical name in type source"
            );
            continue;
        }

        let wanted = filter.is_none_or(|f| f == logical_name);
        seen.insert(key, decl.ident);

        if wanted {
            scanned.push(ScannedType { logical_name, decl });
        }
    }

    tracing::debug!(
        declarations = source.declarations().len(),
        entities = scanned.len(),
        "scanned type source"
    );

    scanned
}
