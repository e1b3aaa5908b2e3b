//! Data serialization formats built on the AST snapshot
//!
//! Both formatters serialize the normalized
//! [snapshot](crate::markdown::ast::snapshot) of the tree, so they share one
//! traversal and differ only in the serializer they hand the result to.

use super::registry::{FormatError, Formatter};
use crate::markdown::ast::{snapshot_from_root, Root};

/// Formatter implementation for pretty-printed JSON
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, root: &Root<'_>) -> Result<String, FormatError> {
        let snapshot = snapshot_from_root(root);
        serde_json::to_string_pretty(&snapshot)
            .map_err(|err| FormatError::SerializationError(err.to_string()))
    }

    fn description(&self) -> &str {
        "JSON dump of the document tree"
    }
}

/// Formatter implementation for YAML
pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, root: &Root<'_>) -> Result<String, FormatError> {
        let snapshot = snapshot_from_root(root);
        serde_yaml::to_string(&snapshot)
            .map_err(|err| FormatError::SerializationError(err.to_string()))
    }

    fn description(&self) -> &str {
        "YAML dump of the document tree"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::parsing::parse;

    #[test]
    fn json_output_contains_node_types_and_attributes() {
        let root = parse("## Hi [x](http://u)\n");
        let output = JsonFormatter.serialize(&root).unwrap();

        assert!(output.contains("\"node_type\": \"Heading\""));
        assert!(output.contains("\"depth\": \"2\""));
        assert!(output.contains("\"url\": \"http://u\""));
    }

    #[test]
    fn yaml_output_round_trips_through_serde() {
        use crate::markdown::ast::AstSnapshot;

        let root = parse("paragraph text\n");
        let output = YamlFormatter.serialize(&root).unwrap();
        let parsed: AstSnapshot = serde_yaml::from_str(&output).unwrap();

        assert_eq!(parsed.node_type, "Root");
        assert_eq!(parsed.children[0].node_type, "Paragraph");
    }
}
