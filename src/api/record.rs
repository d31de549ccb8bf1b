use serde::Deserialize;
use serde_json::Value;

/// One raw record of the `records` query.
///
/// `dynamicFields` and `dynamicAssociations` are free-form objects, the
/// api guarantees nothing about which keys are present or what type their
/// values have.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRecord {
    #[serde(default)]
    id: Value,
    #[serde(default)]
    dynamic_fields: Value,
    #[serde(default)]
    dynamic_associations: Value,
}

impl RawRecord {
    #[must_use]
    pub fn new(dynamic_fields: Value, dynamic_associations: Value) -> Self {
        Self {
            id: Value::Null,
            dynamic_fields,
            dynamic_associations,
        }
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_str()
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.dynamic_fields.get(name)
    }

    /// The dynamic field `name`, if it is present and a string.
    #[must_use]
    pub fn field_str(&self, name: &str) -> Option<&str> {
        self.field(name).and_then(Value::as_str)
    }

    /// The display name stored in the `name` association, if any.
    #[must_use]
    pub fn association_str(&self, name: &str) -> Option<&str> {
        self.dynamic_associations.get(name).and_then(Value::as_str)
    }
}
