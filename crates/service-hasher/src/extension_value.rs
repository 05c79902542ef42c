use serde::ser::{Error, Serialize, SerializeMap, Serializer};
use serde_yml::Value;
use std::collections::BTreeMap;

/// Serializes a YAML extension value, failing for values that JSON cannot
/// represent without loss: non-finite floats and non-string mapping keys.
pub struct ExtensionValue<'cfg>(pub &'cfg Value);

impl Serialize for ExtensionValue<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(value) => serializer.serialize_bool(*value),
            Value::Number(number) => {
                if number.as_f64().is_some_and(|value| !value.is_finite()) {
                    return Err(S::Error::custom(format!(
                        "non-finite float {number} in extension value"
                    )));
                }

                number.serialize(serializer)
            }
            Value::String(value) => serializer.serialize_str(value),
            Value::Sequence(items) => serializer.collect_seq(items.iter().map(ExtensionValue)),
            Value::Mapping(mapping) => {
                let mut map = serializer.serialize_map(Some(mapping.len()))?;

                for (key, item) in mapping {
                    let Value::String(key) = key else {
                        return Err(S::Error::custom(
                            "extension mapping keys must be strings",
                        ));
                    };

                    map.serialize_entry(key, &ExtensionValue(item))?;
                }

                map.end()
            }
            Value::Tagged(tagged) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(&tagged.tag.to_string(), &ExtensionValue(&tagged.value))?;
                map.end()
            }
        }
    }
}

pub fn serialize_extensions<S: Serializer>(
    extensions: &BTreeMap<String, Value>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_map(
        extensions
            .iter()
            .map(|(key, value)| (key, ExtensionValue(value))),
    )
}
