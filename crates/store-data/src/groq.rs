//! Translation of typed catalog queries into content-store query text.
//!
//! Values are never spliced into the text: every user-supplied value is bound
//! as a `$name` parameter and sent JSON-encoded next to the query.

use serde::Deserialize;
use serde_json::Value;
use store_commerce::catalog::CatalogQuery;

/// Query text plus its bound parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct GroqQuery {
    text: String,
    params: Vec<(String, Value)>,
}

impl GroqQuery {
    /// Build the query for `query` against documents of `document_type`.
    pub fn from_catalog(query: &CatalogQuery, document_type: &str) -> Self {
        let mut params = vec![("type".to_string(), Value::from(document_type))];
        let text = match query {
            CatalogQuery::All => "*[_type == $type]".to_string(),
            CatalogQuery::ByCategory(category) => {
                params.push(("category".to_string(), Value::from(category.as_str())));
                "*[_type == $type && category == $category]".to_string()
            }
            CatalogQuery::ById(id) => {
                params.push(("id".to_string(), Value::from(id.as_str())));
                "*[_type == $type && id == $id][0]".to_string()
            }
        };
        Self { text, params }
    }

    /// The query text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Bound value of `$name`.
    pub fn param(&self, name: &str) -> Option<&Value> {
        self.params
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v)
    }

    /// Query-string pairs: `query` followed by one `$name` per parameter.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(self.params.len() + 1);
        pairs.push(("query".to_string(), self.text.clone()));
        for (name, value) in &self.params {
            pairs.push((format!("${}", name), value.to_string()));
        }
        pairs
    }
}

/// Envelope returned by the query endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryEnvelope {
    /// The query result: an array, a single document, or null.
    #[serde(default)]
    pub result: Value,
    /// Server-side execution time.
    #[serde(default)]
    pub ms: Option<u64>,
    /// Echo of the executed query.
    #[serde(default)]
    pub query: Option<String>,
}

impl QueryEnvelope {
    /// Result documents as a list. A single document becomes a one-element
    /// list and null becomes empty.
    pub fn into_documents(self) -> Vec<Value> {
        match self.result {
            Value::Null => Vec::new(),
            Value::Array(items) => items,
            other => vec![other],
        }
    }
}
