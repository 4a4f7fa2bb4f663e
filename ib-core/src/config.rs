use anyhow::Context as _;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;

/// Read-only access to the host's analysis properties.
pub trait Configuration {
    fn get(&self, key: &str) -> Option<&str>;

    /// Returns `None` if the key is unset or is not a valid boolean.
    fn get_bool(&self, key: &str) -> Option<bool> {
        let value = self.get(key)?.trim();
        match value.to_ascii_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => {
                tracing::warn!(key, value, "ignoring invalid boolean property");
                None
            }
        }
    }

    /// Comma separated values, trimmed with empty entries removed.
    fn get_string_array(&self, key: &str) -> Vec<String> {
        self.get(key)
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(ToOwned::to_owned)
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl<C: Configuration + ?Sized> Configuration for &C {
    #[inline]
    fn get(&self, key: &str) -> Option<&str> {
        (**self).get(key)
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MapSettings {
    properties: FxHashMap<SmolStr, String>,
}

impl MapSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<SmolStr>, value: impl ToString) -> &mut Self {
        self.properties.insert(key.into(), value.to_string());
        self
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.properties.remove(key)
    }

    /// Load properties from a flat JSON object.
    /// Scalars are stringified and arrays of scalars are joined with commas.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let value: serde_json::Value =
            serde_json::from_str(json).context("failed to parse settings")?;
        let serde_json::Value::Object(object) = value else {
            anyhow::bail!("settings must be a json object");
        };

        let mut settings = Self::new();
        for (key, value) in object {
            let value = scalar_to_string(&value)
                .or_else(|| match &value {
                    serde_json::Value::Array(items) => items
                        .iter()
                        .map(scalar_to_string)
                        .collect::<Option<Vec<_>>>()
                        .map(|items| items.join(",")),
                    _ => None,
                })
                .with_context(|| format!("unsupported value for setting `{key}`: {value}"))?;
            settings.set(key, value);
        }
        Ok(settings)
    }
}

fn scalar_to_string(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

impl Configuration for MapSettings {
    #[inline]
    fn get(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }
}

impl<K: Into<SmolStr>, V: ToString> FromIterator<(K, V)> for MapSettings {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut settings = Self::new();
        for (key, value) in iter {
            settings.set(key, value);
        }
        settings
    }
}
