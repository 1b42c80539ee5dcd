use derive_more::{Deref, Display, From};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

///
/// EntityReference
///
/// Pointer to a row of another entity.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct EntityReference {
    pub logical_name: String,
    pub id: Uuid,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl EntityReference {
    #[must_use]
    pub fn new(logical_name: impl Into<String>, id: Uuid) -> Self {
        Self {
            logical_name: logical_name.into(),
            id,
            name: None,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

///
/// OptionSetValue
///

#[derive(
    Clone, Copy, Debug, Deref, Deserialize, Display, Eq, From, Hash, PartialEq, Serialize,
)]
pub struct OptionSetValue(i32);

impl OptionSetValue {
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }
}

///
/// Money
///

#[derive(
    Clone, Copy, Debug, Default, Deref, Deserialize, Display, Eq, From, PartialEq, Serialize,
)]
pub struct Money(Decimal);

impl Money {
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }
}
