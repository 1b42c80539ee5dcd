use crate::node::TypeDecl;
use std::sync::{LazyLock, RwLock, RwLockReadGuard, RwLockWriteGuard};

///
/// TypeSource
///
/// Anything that exposes an ordered set of type declarations.
///

pub trait TypeSource {
    fn declarations(&self) -> &[TypeDecl];
}

impl TypeSource for [TypeDecl] {
    fn declarations(&self) -> &[TypeDecl] {
        self
    }
}

impl<const N: usize> TypeSource for [TypeDecl; N] {
    fn declarations(&self) -> &[TypeDecl] {
        self
    }
}

impl TypeSource for Vec<TypeDecl> {
    fn declarations(&self) -> &[TypeDecl] {
        self
    }
}

///
/// TypeCatalog
///
/// Declarations in registration order.
///

#[derive(Clone, Debug, Default)]
pub struct TypeCatalog {
    decls: Vec<TypeDecl>,
}

impl TypeCatalog {
    #[must_use]
    pub const fn new() -> Self {
        Self { decls: Vec::new() }
    }

    pub fn register(&mut self, decl: TypeDecl) {
        self.decls.push(decl);
    }

    #[must_use]
    pub fn get(&self, ident: &str) -> Option<&TypeDecl> {
        self.decls.iter().find(|d| d.ident == ident)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.decls.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }
}

impl TypeSource for TypeCatalog {
    fn declarations(&self) -> &[TypeDecl] {
        &self.decls
    }
}

impl FromIterator<TypeDecl> for TypeCatalog {
    fn from_iter<I: IntoIterator<Item = TypeDecl>>(iter: I) -> Self {
        Self {
            decls: iter.into_iter().collect(),
        }
    }
}

///
/// CATALOG
/// filled by derive-generated constructors before main
///

static CATALOG: LazyLock<RwLock<TypeCatalog>> = LazyLock::new(|| RwLock::new(TypeCatalog::new()));

/// Acquire a write guard to the global catalog.
pub fn catalog_write() -> RwLockWriteGuard<'static, TypeCatalog> {
    CATALOG
        .write()
        .expect("catalog RwLock poisoned while acquiring write lock")
}

/// Acquire a read guard to the global catalog.
pub fn catalog_read() -> RwLockReadGuard<'static, TypeCatalog> {
    CATALOG
        .read()
        .expect("catalog RwLock poisoned while acquiring read lock")
}
