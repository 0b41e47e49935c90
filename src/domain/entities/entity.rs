//! Entity - the abstract description of one domain object
//!
//! Entities are the input of the compiler. The shape mirrors what an entity
//! schema file declares: a name plus typed fields and relations.

use serde::{Deserialize, Serialize};

/// Data type of an entity field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "dataType", rename_all = "camelCase")]
pub enum DataType {
    Id,
    CreatedAt,
    UpdatedAt,
    SingleLineText,
    MultiLineText,
    Email,
    WholeNumber,
    DecimalNumber,
    DateTime,
    Boolean,
    Json,
    #[serde(rename_all = "camelCase")]
    OptionSet {
        #[serde(default)]
        options: Vec<String>,
    },
    #[serde(rename_all = "camelCase")]
    MultiSelectOptionSet {
        #[serde(default)]
        options: Vec<String>,
    },
    /// Relation to another entity
    #[serde(rename_all = "camelCase")]
    Lookup {
        related_entity: String,
        #[serde(default)]
        allow_multiple: bool,
    },
    GeographicLocation,
}

impl DataType {
    /// Related entity name for lookups
    pub fn related_entity(&self) -> Option<&str> {
        match self {
            DataType::Lookup { related_entity, .. } => Some(related_entity),
            _ => None,
        }
    }

    /// True for fields the database fills in (id and timestamps)
    pub fn is_system(&self) -> bool {
        matches!(self, DataType::Id | DataType::CreatedAt | DataType::UpdatedAt)
    }
}

/// A single field of an entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityField {
    name: String,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(flatten)]
    data_type: DataType,
    #[serde(default)]
    required: bool,
    #[serde(default)]
    unique: bool,
    #[serde(default)]
    searchable: bool,
    #[serde(default)]
    description: Option<String>,
}

impl EntityField {
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            display_name: None,
            data_type,
            required: false,
            unique: false,
            searchable: false,
            description: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub fn searchable(mut self) -> Self {
        self.searchable = true;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display name, falling back to the field name
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }

    pub fn data_type(&self) -> &DataType {
        &self.data_type
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn is_unique(&self) -> bool {
        self.unique
    }

    pub fn is_searchable(&self) -> bool {
        self.searchable
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Immutable description of one domain object type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    name: String,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    plural_display_name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    fields: Vec<EntityField>,
}

impl Entity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: None,
            plural_display_name: None,
            description: None,
            fields: Vec::new(),
        }
    }

    pub fn with_field(mut self, field: EntityField) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_fields(mut self, fields: impl IntoIterator<Item = EntityField>) -> Self {
        self.fields.extend(fields);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_display_names(
        mut self,
        display_name: impl Into<String>,
        plural_display_name: impl Into<String>,
    ) -> Self {
        self.display_name = Some(display_name.into());
        self.plural_display_name = Some(plural_display_name.into());
        self
    }

    /// Declared entity name (the raw type name)
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }

    pub fn plural_display_name(&self) -> Option<&str> {
        self.plural_display_name.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn fields(&self) -> &[EntityField] {
        &self.fields
    }

    /// Fields that relate this entity to another one
    pub fn lookup_fields(&self) -> impl Iterator<Item = &EntityField> {
        self.fields
            .iter()
            .filter(|f| matches!(f.data_type(), DataType::Lookup { .. }))
    }
}
