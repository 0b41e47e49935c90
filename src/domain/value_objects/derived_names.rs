//! DerivedNames value object - canonical identifiers for one entity

use serde::Serialize;

/// Names derived once from an entity's declared name and shared by every stage
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedNames {
    type_name: String,
    instance_name: String,
    resource_path: String,
}

impl DerivedNames {
    pub fn new(
        type_name: impl Into<String>,
        instance_name: impl Into<String>,
        resource_path: impl Into<String>,
    ) -> Self {
        Self {
            type_name: type_name.into(),
            instance_name: instance_name.into(),
            resource_path: resource_path.into(),
        }
    }

    /// Declared entity name, used verbatim as the type identifier (`OrderItem`)
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Lower-camel instance identifier (`orderItem`)
    pub fn instance_name(&self) -> &str {
        &self.instance_name
    }

    /// Kebab-case plural URL segment (`order-items`)
    pub fn resource_path(&self) -> &str {
        &self.resource_path
    }
}
