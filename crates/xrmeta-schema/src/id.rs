use derive_more::Display;
use serde::{Serialize, Serializer};
use std::sync::{LazyLock, Mutex};
use ulid::{Generator, Ulid};

///
/// GENERATOR is lazily initiated with a Mutex
/// it keeps the previous value so ids stay ordered within a millisecond
///

static GENERATOR: LazyLock<Mutex<Generator>> = LazyLock::new(|| Mutex::new(Generator::new()));

///
/// MetadataId
///
/// Opaque unique identifier stamped on every synthesized descriptor.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct MetadataId(Ulid);

impl MetadataId {
    /// Generate a fresh id from the process-wide monotonic generator.
    #[must_use]
    pub fn generate() -> Self {
        let mut generator = GENERATOR
            .lock()
            .expect("metadata id generator mutex poisoned");

        // the monotonic generator only fails once the random part of the
        // current millisecond is exhausted
        let ulid = generator.generate().unwrap_or_else(|_| Ulid::new());

        Self(ulid)
    }

    #[must_use]
    pub const fn from_ulid(ulid: Ulid) -> Self {
        Self(ulid)
    }

    #[must_use]
    pub const fn as_ulid(&self) -> Ulid {
        self.0
    }
}

impl Serialize for MetadataId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}
