use serde::Serialize;
use serde_json::Value;

/// Render content as compact JSON, with the keys of every object emitted in
/// lexicographic order. The output does not depend on the iteration order of
/// the source maps, nor on `serde_json`'s own map implementation.
pub fn to_canonical_json<T: Serialize + ?Sized>(content: &T) -> Result<String, serde_json::Error> {
    let value = serde_json::to_value(content)?;
    let mut buffer = String::new();

    write_canonical(&value, &mut buffer)?;

    Ok(buffer)
}

fn write_canonical(value: &Value, buffer: &mut String) -> Result<(), serde_json::Error> {
    match value {
        Value::Array(items) => {
            buffer.push('[');

            for (index, item) in items.iter().enumerate() {
                if index > 0 {
                    buffer.push(',');
                }

                write_canonical(item, buffer)?;
            }

            buffer.push(']');
        }
        Value::Object(map) => {
            let mut entries = map.iter().collect::<Vec<_>>();
            entries.sort_by(|a, b| a.0.cmp(b.0));

            buffer.push('{');

            for (index, (key, item)) in entries.into_iter().enumerate() {
                if index > 0 {
                    buffer.push(',');
                }

                buffer.push_str(&serde_json::to_string(key)?);
                buffer.push(':');
                write_canonical(item, buffer)?;
            }

            buffer.push('}');
        }
        scalar => {
            buffer.push_str(&serde_json::to_string(scalar)?);
        }
    };

    Ok(())
}
