use crate::{id::MetadataId, node::AttributeDescriptor};
use serde::Serialize;
use thiserror::Error as ThisError;

///
/// DescriptorError
///

#[derive(Debug, ThisError)]
pub enum DescriptorError {
    #[error("entity logical name is empty")]
    EmptyLogicalName,
}

///
/// EntityDescriptor
///

#[derive(Clone, Debug, Serialize)]
pub struct EntityDescriptor {
    pub id: MetadataId,
    pub logical_name: String,
    pub attributes: Vec<AttributeDescriptor>,
}

impl EntityDescriptor {
    /// Build a descriptor with a freshly generated id and no attributes.
    pub fn new(logical_name: impl Into<String>) -> Result<Self, DescriptorError> {
        let logical_name = logical_name.into();
        if logical_name.trim().is_empty() {
            return Err(DescriptorError::EmptyLogicalName);
        }

        Ok(Self {
            id: MetadataId::generate(),
            logical_name,
            attributes: Vec::new(),
        })
    }

    /// Append an attribute; an existing attribute with the same logical name
    /// is replaced in place.
    pub fn push_attribute(&mut self, attribute: AttributeDescriptor) {
        let existing = self
            .attributes
            .iter()
            .position(|a| a.logical_name == attribute.logical_name);

        if let Some(index) = existing {
            tracing::warn!(
                entity = %self.logical_name,
                attribute = %attribute.logical_name,
                "duplicate attribute logical name, last declaration wins"
            );
            self.attributes[index] = attribute;
        } else {
            self.attributes.push(attribute);
        }
    }

    #[must_use]
    pub fn with_attributes(
        mut self,
        attributes: impl IntoIterator<Item = AttributeDescriptor>,
    ) -> Self {
        for attribute in attributes {
            self.push_attribute(attribute);
        }

        self
    }

    // get_attribute
    #[must_use]
    pub fn get_attribute(&self, logical_name: &str) -> Option<&AttributeDescriptor> {
        self.attributes
            .iter()
            .find(|a| a.logical_name == logical_name)
    }
}
