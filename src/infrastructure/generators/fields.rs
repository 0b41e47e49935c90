//! Field helpers shared by the templates

use crate::domain::entities::{DataType, DtoRegistry, Entity, EntityDtos, EntityField};
use crate::domain::ports::GeneratorError;
use crate::domain::value_objects::DerivedNames;

/// A lookup field together with the DTOs of the entity it points at
pub struct Relation<'a> {
    pub field: &'a EntityField,
    pub related: &'a EntityDtos,
    pub allow_multiple: bool,
}

/// DTOs of the entity being generated
pub fn own_dtos<'a>(
    dtos: &'a DtoRegistry,
    names: &DerivedNames,
) -> Result<&'a EntityDtos, GeneratorError> {
    dtos.get(names.type_name())
        .ok_or_else(|| GeneratorError::MissingDtos {
            entity: names.type_name().to_string(),
        })
}

/// Resolve every lookup field against the registry
pub fn relations<'a>(
    entity: &'a Entity,
    dtos: &'a DtoRegistry,
) -> Result<Vec<Relation<'a>>, GeneratorError> {
    entity
        .fields()
        .iter()
        .filter_map(|field| match field.data_type() {
            DataType::Lookup {
                related_entity,
                allow_multiple,
            } => Some((field, related_entity, *allow_multiple)),
            _ => None,
        })
        .map(|(field, related_entity, allow_multiple)| {
            let related = dtos
                .get(related_entity)
                .ok_or_else(|| GeneratorError::UnknownRelation {
                    field: field.name().to_string(),
                    related_entity: related_entity.clone(),
                })?;
            Ok(Relation {
                field,
                related,
                allow_multiple,
            })
        })
        .collect()
}

/// Fail on field types the HTTP and GraphQL layers cannot express
pub fn reject_unsupported(entity: &Entity) -> Result<(), GeneratorError> {
    match entity
        .fields()
        .iter()
        .find(|f| matches!(f.data_type(), DataType::GeographicLocation))
    {
        Some(field) => Err(GeneratorError::UnsupportedField {
            field: field.name().to_string(),
            data_type: "geographicLocation".to_string(),
        }),
        None => Ok(()),
    }
}

/// Literal used for a field in generated test fixtures
pub fn sample_value(field: &EntityField) -> Option<String> {
    let value = match field.data_type() {
        DataType::Id => "\"abcde\"".to_string(),
        DataType::CreatedAt | DataType::UpdatedAt | DataType::DateTime => "new Date()".to_string(),
        DataType::SingleLineText | DataType::MultiLineText => "\"exampleText\"".to_string(),
        DataType::Email => "\"example@example.com\"".to_string(),
        DataType::WholeNumber => "42".to_string(),
        DataType::DecimalNumber => "42.42".to_string(),
        DataType::Boolean => "true".to_string(),
        DataType::OptionSet { options } => match options.first() {
            Some(first) => format!("{first:?}"),
            None => return None,
        },
        DataType::Json
        | DataType::MultiSelectOptionSet { .. }
        | DataType::Lookup { .. }
        | DataType::GeographicLocation => return None,
    };
    Some(value)
}
