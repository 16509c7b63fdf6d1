use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::trace;

use crate::core::Theme;
use crate::error::{ChartError, ChartResult};

/// Declarative visual specification tree.
///
/// The composer only owns the `config` subtree; encodings, marks, and the
/// inline `data` block pass through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VisualSpec(Value);

impl Default for VisualSpec {
    fn default() -> Self {
        Self(Value::Object(Map::new()))
    }
}

impl VisualSpec {
    /// Wraps a spec tree, rejecting anything but a JSON object at the root.
    pub fn new(tree: Value) -> ChartResult<Self> {
        if !tree.is_object() {
            return Err(ChartError::InvalidSpecFormat(
                "spec root must be a JSON object".to_owned(),
            ));
        }
        Ok(Self(tree))
    }

    /// Parses a serialized spec. Parse failure is fatal: rendering with a
    /// guessed spec risks silently wrong visuals.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let tree: Value = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidSpecFormat(format!("failed to parse spec: {e}")))?;
        Self::new(tree)
    }

    #[must_use]
    pub fn config(&self) -> Option<&Value> {
        self.0.get("config")
    }

    #[must_use]
    pub fn data(&self) -> Option<&Value> {
        self.0.get("data")
    }

    #[must_use]
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self.0)
            .map_err(|e| ChartError::InvalidSpecFormat(format!("failed to serialize spec: {e}")))
    }
}

/// Produces the single spec handed to the renderer.
///
/// Config precedence, later wins per leaf key: library defaults, then theme
/// defaults, then the user's `config` subtree. Nested groups merge
/// independently, so a user override of one leaf (axis label color) never
/// erases sibling theme defaults (axis title color) the user left unset.
pub fn compose(
    raw_spec_json: &str,
    theme: &Theme,
    library_defaults: &VisualSpec,
) -> ChartResult<VisualSpec> {
    let user = VisualSpec::from_json_str(raw_spec_json)?;

    let mut config = library_defaults
        .config()
        .cloned()
        .unwrap_or_else(|| Value::Object(Map::new()));
    merge_config(&mut config, &theme.config_defaults());
    if let Some(user_config) = user.config() {
        merge_config(&mut config, user_config);
    }

    let mut tree = user.0;
    if let Some(root) = tree.as_object_mut() {
        root.insert("config".to_owned(), config);
    }
    trace!("composed spec config from library, theme, and user layers");
    VisualSpec::new(tree)
}

/// Recursive leaf-wise merge: object values merge key by key, any other value
/// in `overlay` replaces the base outright.
fn merge_config(base: &mut Value, overlay: &Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                match base_map.get_mut(key) {
                    Some(base_value) if base_value.is_object() && overlay_value.is_object() => {
                        merge_config(base_value, overlay_value);
                    }
                    _ => {
                        base_map.insert(key.clone(), overlay_value.clone());
                    }
                }
            }
        }
        (base_slot, overlay_value) => {
            *base_slot = overlay_value.clone();
        }
    }
}
