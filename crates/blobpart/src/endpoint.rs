//! Endpoint descriptor: per-parameter type hints from an API schema.

use indexmap::IndexMap;
use serde::Deserialize;

use blobpart_value::Value;

/// Expected component for one named parameter of an endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ParameterInfo {
    pub component: String,
}

/// Schema metadata for one endpoint, keyed by parameter name.
///
/// Consulted only for the first level of a root-traversal array: each
/// element's type hint is looked up by the element's string form, falling
/// back to the ambient hint when the element is not a string or names no
/// parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EndpointInfo {
    pub parameters: IndexMap<String, ParameterInfo>,
}

impl EndpointInfo {
    /// Component hint for one root-level array element.
    pub fn component_hint(&self, value: &Value) -> Option<&str> {
        let name = value.as_str()?;
        self.parameters.get(name).map(|info| info.component.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info() -> EndpointInfo {
        serde_json::from_str(
            r#"{"parameters": {"portrait": {"component": "Image"}, "bio": {"component": "Textbox"}}}"#,
        )
        .unwrap()
    }

    #[test]
    fn hint_looked_up_by_string_form() {
        let info = info();
        assert_eq!(info.component_hint(&Value::from("portrait")), Some("Image"));
        assert_eq!(info.component_hint(&Value::from("bio")), Some("Textbox"));
        assert_eq!(info.component_hint(&Value::from("unknown")), None);
    }

    #[test]
    fn non_string_elements_have_no_hint() {
        let info = info();
        assert_eq!(info.component_hint(&Value::from(1i64)), None);
        assert_eq!(info.component_hint(&Value::Null), None);
        assert_eq!(info.component_hint(&Value::Array(vec![])), None);
    }
}
