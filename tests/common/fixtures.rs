//! Test fixtures - reusable schema documents.

/// Two unrelated entities
pub const TWO_ENTITIES_JSON: &str = r#"{
  "entities": [
    {
      "name": "Person",
      "fields": [
        { "name": "id", "dataType": "id" },
        { "name": "email", "dataType": "email", "required": true, "unique": true },
        { "name": "name", "dataType": "singleLineText" }
      ]
    },
    {
      "name": "OrderItem",
      "fields": [
        { "name": "id", "dataType": "id" },
        { "name": "quantity", "dataType": "wholeNumber" }
      ]
    }
  ]
}"#;

/// Entities related through lookups, as YAML
pub const RELATED_ENTITIES_YAML: &str = r#"
entities:
  - name: Customer
    fields:
      - name: id
        dataType: id
      - name: orders
        dataType: lookup
        relatedEntity: Order
        allowMultiple: true
  - name: Order
    fields:
      - name: id
        dataType: id
      - name: customer
        dataType: lookup
        relatedEntity: Customer
      - name: status
        dataType: optionSet
        options: [pending, shipped]
"#;

/// `Person` and `People` both pluralize to `people`
pub const COLLIDING_ENTITIES_JSON: &str = r#"{
  "entities": [
    { "name": "Person" },
    { "name": "People" }
  ]
}"#;

/// A lookup pointing at an entity that is not in the schema
pub const DANGLING_LOOKUP_TOML: &str = r#"
[[entities]]
name = "Invoice"

[[entities.fields]]
name = "customer"
dataType = "lookup"
relatedEntity = "Customer"
"#;

/// Self-referencing lookups plus an uncountable entity name
pub const SELF_REFERENCING_JSON: &str = r#"{
  "entities": [
    {
      "name": "Employee",
      "fields": [
        { "name": "id", "dataType": "id" },
        { "name": "manager", "dataType": "lookup", "relatedEntity": "Employee" },
        { "name": "reports", "dataType": "lookup", "relatedEntity": "Employee", "allowMultiple": true },
        { "name": "mentor", "dataType": "lookup", "relatedEntity": "Employee" }
      ]
    },
    {
      "name": "Equipment",
      "fields": [
        { "name": "id", "dataType": "id" },
        { "name": "owner", "dataType": "lookup", "relatedEntity": "Employee" }
      ]
    }
  ]
}"#;
