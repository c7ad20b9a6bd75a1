//! Generic resource model mapping platform JSON documents to attribute access.
//!
//! Platform payloads nest related data under `_links` and `_embedded`;
//! [`Resource`] flattens that shape behind dotted-path lookups so callers can
//! ask for `label.name` (or the flattened alias `label_name`) without knowing
//! the document layout.

use serde_json::Value;
use serde_json_path::JsonPath;

use crate::error::{ClientError, ClientResult};

/// Static description of one resource kind.
#[derive(Debug, Clone, Copy)]
pub struct ResourceDescriptor {
    /// Kind name used in error messages (`catalog`, `user`, ...).
    pub kind: &'static str,
    /// URL prefix every id of this kind must carry.
    pub prefix: &'static str,
    /// Key under `_embedded` holding the list payload for this kind.
    pub embedded_key: &'static str,
    /// Columns rendered when the caller does not project explicitly.
    pub default_columns: &'static [&'static str],
}

impl ResourceDescriptor {
    /// Validate a caller-supplied id against this kind's URL prefix.
    pub fn validate_id(&self, id: &str) -> ClientResult<()> {
        if id.trim().is_empty() {
            return Err(ClientError::invalid_argument(
                "'id' must be provided and must not be empty",
            ));
        }
        if !id.starts_with(self.prefix) {
            return Err(ClientError::invalid_argument(format!(
                "'id' does not start with '{}'",
                self.prefix
            )));
        }
        Ok(())
    }
}

/// One platform resource: a JSON document plus its kind descriptor.
#[derive(Debug, Clone)]
pub struct Resource {
    descriptor: &'static ResourceDescriptor,
    document: Value,
}

impl Resource {
    /// Wrap a JSON document as a resource of the given kind.
    #[must_use]
    pub const fn new(descriptor: &'static ResourceDescriptor, document: Value) -> Self {
        Self {
            descriptor,
            document,
        }
    }

    /// Kind descriptor for this resource.
    #[must_use]
    pub const fn descriptor(&self) -> &'static ResourceDescriptor {
        self.descriptor
    }

    /// Raw JSON document backing this resource.
    #[must_use]
    pub const fn json(&self) -> &Value {
        &self.document
    }

    /// Path-like resource id, from the `id` field or the self link.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.document
            .get("id")
            .and_then(Value::as_str)
            .or_else(|| self.self_href())
    }

    /// The document's `_links.self.href` value.
    #[must_use]
    pub fn self_href(&self) -> Option<&str> {
        self.document
            .pointer("/_links/self/href")
            .and_then(Value::as_str)
    }

    /// Look up an attribute by dotted path (`label.name`) or flattened alias
    /// (`label_name`). Unresolved top-level names fall back to the `_links`
    /// subtree, so `feed` and `self_href` resolve as well.
    #[must_use]
    pub fn attr(&self, path: &str) -> Option<&Value> {
        lookup(&self.document, path).or_else(|| {
            self.document
                .get("_links")
                .and_then(|links| lookup(links, path))
        })
    }

    /// Attribute rendered as a display string: strings verbatim, everything
    /// else as compact JSON, missing attributes as the empty string.
    #[must_use]
    pub fn attr_display(&self, path: &str) -> String {
        match self.attr(path) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(text)) => text.clone(),
            Some(other) => other.to_string(),
        }
    }
}

/// Resolve a dotted or underscore-flattened path inside a JSON document.
///
/// A literal key match always wins; otherwise each separator position is
/// tried as a nesting boundary, so `documentation_checksum` resolves to
/// `documentation.checksum` even though `documentation_checksum` is not a key.
fn lookup<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return Some(value);
    }
    let object = value.as_object()?;
    if let Some(found) = object.get(path) {
        return Some(found);
    }
    for separator in ['.', '_'] {
        for (index, _) in path.match_indices(separator) {
            let head = &path[..index];
            let tail = &path[index + 1..];
            if let Some(found) = object.get(head).and_then(|child| lookup(child, tail)) {
                return Some(found);
            }
        }
    }
    None
}

/// Ordered collection of resources of one kind.
#[derive(Debug, Clone)]
pub struct ResourceList {
    descriptor: &'static ResourceDescriptor,
    items: Vec<Resource>,
    raw: Value,
}

impl ResourceList {
    /// Build a list from a platform list payload.
    ///
    /// The payload is either a document carrying the kind's `_embedded` key
    /// or already a bare array; anything else yields an empty list.
    #[must_use]
    pub fn from_payload(descriptor: &'static ResourceDescriptor, payload: Value) -> Self {
        let raw = match payload {
            Value::Array(entries) => Value::Array(entries),
            other => other
                .pointer(&format!("/_embedded/{}", descriptor.embedded_key))
                .cloned()
                .unwrap_or_else(|| Value::Array(Vec::new())),
        };
        let items = raw
            .as_array()
            .map(|entries| {
                entries
                    .iter()
                    .cloned()
                    .map(|document| Resource::new(descriptor, document))
                    .collect()
            })
            .unwrap_or_default();
        Self {
            descriptor,
            items,
            raw,
        }
    }

    /// Kind descriptor for the collected resources.
    #[must_use]
    pub const fn descriptor(&self) -> &'static ResourceDescriptor {
        self.descriptor
    }

    /// Number of resources in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list holds no resources.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over the collected resources.
    pub fn iter(&self) -> impl Iterator<Item = &Resource> {
        self.items.iter()
    }

    /// Raw JSON array backing the list.
    #[must_use]
    pub const fn json(&self) -> &Value {
        &self.raw
    }

    /// Project the given columns into display rows, one per resource.
    #[must_use]
    pub fn project(&self, columns: &[String]) -> Vec<Vec<String>> {
        self.items
            .iter()
            .map(|resource| {
                columns
                    .iter()
                    .map(|column| resource.attr_display(column))
                    .collect()
            })
            .collect()
    }

    /// Apply a JSONPath expression over the raw array and collect the
    /// matching nodes.
    pub fn query(&self, expression: &str) -> ClientResult<Value> {
        let path = JsonPath::parse(expression).map_err(|err| ClientError::Query {
            message: err.to_string(),
        })?;
        let nodes = path.query(&self.raw).all();
        Ok(Value::Array(nodes.into_iter().cloned().collect()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use caravel_test_support::{catalog_entry_json, catalog_list_json};
    use serde_json::json;

    static CATALOG: ResourceDescriptor = ResourceDescriptor {
        kind: "catalog",
        prefix: "/api/v1/catalog",
        embedded_key: "independent_catalog_entries",
        default_columns: &["label_name", "label_description"],
    };

    #[test]
    fn validate_id_rejects_empty_and_foreign_prefixes() {
        let err = CATALOG.validate_id("").expect_err("empty id");
        assert!(err.to_string().contains("'id' must be provided"));

        let err = CATALOG.validate_id("garbage").expect_err("foreign prefix");
        assert_eq!(
            err.to_string(),
            "'id' does not start with '/api/v1/catalog'"
        );

        CATALOG
            .validate_id("/api/v1/catalog/99")
            .expect("valid id should pass");
    }

    #[test]
    fn attr_resolves_dotted_and_flattened_paths() {
        let resource = Resource::new(&CATALOG, catalog_entry_json("/api/v1/catalog/99"));

        assert_eq!(
            resource.attr("label.name").and_then(Value::as_str),
            Some("Spark240")
        );
        assert_eq!(
            resource.attr("label_name").and_then(Value::as_str),
            Some("Spark240")
        );
        assert_eq!(
            resource
                .attr("documentation_checksum")
                .and_then(Value::as_str),
            Some("52f53f1b2845463b9e370d17fb80bea6")
        );
        assert_eq!(resource.attr("missing.path"), None);
    }

    #[test]
    fn attr_falls_back_to_links_subtree() {
        let resource = Resource::new(&CATALOG, catalog_entry_json("/api/v1/catalog/99"));

        assert_eq!(
            resource.attr("self_href").and_then(Value::as_str),
            Some("/api/v1/catalog/99")
        );
        let feed = resource.attr("feed").expect("feed link");
        assert!(feed.is_array());
    }

    #[test]
    fn id_prefers_id_field_and_falls_back_to_self_link() {
        let resource = Resource::new(&CATALOG, catalog_entry_json("/api/v1/catalog/99"));
        assert_eq!(resource.id(), Some("/api/v1/catalog/99"));

        let no_id = Resource::new(
            &CATALOG,
            json!({"_links": {"self": {"href": "/api/v1/catalog/7"}}}),
        );
        assert_eq!(no_id.id(), Some("/api/v1/catalog/7"));
    }

    #[test]
    fn from_payload_extracts_embedded_entries() {
        let list = ResourceList::from_payload(&CATALOG, catalog_list_json());
        assert_eq!(list.len(), 1);
        assert_eq!(
            list.iter().next().and_then(Resource::self_href),
            Some("/api/v1/catalog/29")
        );
    }

    #[test]
    fn from_payload_accepts_bare_arrays_and_missing_keys() {
        let bare = ResourceList::from_payload(&CATALOG, json!([{"state": "ok"}]));
        assert_eq!(bare.len(), 1);

        let empty = ResourceList::from_payload(&CATALOG, json!({"unrelated": true}));
        assert!(empty.is_empty());
    }

    #[test]
    fn project_renders_missing_columns_as_empty_cells() {
        let list = ResourceList::from_payload(&CATALOG, catalog_list_json());
        let rows = list.project(&[
            "label_name".to_string(),
            "distro_id".to_string(),
            "no_such_column".to_string(),
        ]);
        assert_eq!(
            rows,
            vec![vec![
                "Spark240".to_string(),
                "bluedata/spark240juphub7xssl".to_string(),
                String::new(),
            ]]
        );
    }

    #[test]
    fn query_filters_entries_with_jsonpath() -> Result<()> {
        let list = ResourceList::from_payload(&CATALOG, catalog_list_json());
        let hrefs = list.query("$[?(@.state == 'initialized')]._links.self.href")?;
        assert_eq!(hrefs, json!(["/api/v1/catalog/29"]));
        Ok(())
    }

    #[test]
    fn query_rejects_malformed_expressions() {
        let list = ResourceList::from_payload(&CATALOG, catalog_list_json());
        let err = list.query("$[?").expect_err("malformed expression");
        assert!(matches!(err, ClientError::Query { .. }));
    }
}
