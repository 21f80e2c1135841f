//! Document schema declaration.
//!
//! The service applies language-aware analysis per field, so the
//! harness has to tell it which fields are full-text, which analyzer
//! to run, and which fields are dates. `TypeMapping` renders that
//! declaration into the mapping JSON the service expects; `Tweet` is
//! the one document type the scenario works with.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Field kinds the mapping declaration supports
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Full-text field, analyzed at index and query time
    Text { analyzer: Option<String> },
    /// Exact-value string, not analyzed
    Keyword,
    Date,
    Integer,
}

impl FieldKind {
    fn type_name(&self) -> &'static str {
        match self {
            FieldKind::Text { .. } => "text",
            FieldKind::Keyword => "keyword",
            FieldKind::Date => "date",
            FieldKind::Integer => "integer",
        }
    }
}

/// A single field in a type mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub kind: FieldKind,
}

/// Mapping declaration for one document type
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeMapping {
    fields: Vec<Field>,
}

impl TypeMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a full-text field with the service's default analyzer
    pub fn text(self, name: &str) -> Self {
        self.push(name, FieldKind::Text { analyzer: None })
    }

    /// Add a full-text field analyzed with a named analyzer
    pub fn text_with_analyzer(self, name: &str, analyzer: &str) -> Self {
        self.push(
            name,
            FieldKind::Text {
                analyzer: Some(analyzer.to_string()),
            },
        )
    }

    /// Add an exact-value keyword field
    pub fn keyword(self, name: &str) -> Self {
        self.push(name, FieldKind::Keyword)
    }

    /// Add a date field
    pub fn date(self, name: &str) -> Self {
        self.push(name, FieldKind::Date)
    }

    /// Add an integer field
    pub fn integer(self, name: &str) -> Self {
        self.push(name, FieldKind::Integer)
    }

    fn push(mut self, name: &str, kind: FieldKind) -> Self {
        self.fields.push(Field {
            name: name.to_string(),
            kind,
        });
        self
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Render the mapping body for this type:
    /// `{"properties": {"<field>": {"type": ..., "analyzer": ...}, ...}}`
    pub fn properties(&self) -> Value {
        let mut properties = Map::new();
        for field in &self.fields {
            let mut attrs = Map::new();
            attrs.insert("type".to_string(), json!(field.kind.type_name()));
            if let FieldKind::Text {
                analyzer: Some(analyzer),
            } = &field.kind
            {
                attrs.insert("analyzer".to_string(), json!(analyzer));
            }
            properties.insert(field.name.clone(), Value::Object(attrs));
        }
        json!({ "properties": properties })
    }
}

/// A social-media style post; the document the scenario indexes,
/// retrieves, and searches for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tweet {
    pub message: String,
    pub user: String,
    pub post_date: DateTime<Utc>,
}

impl Tweet {
    /// Default index the tweet schema registers under
    pub const INDEX: &'static str = "twitter";

    /// Document type within the index
    pub const DOC_TYPE: &'static str = "tweet";

    /// Create a tweet stamped with the current time
    pub fn new(message: &str, user: &str) -> Self {
        Self {
            message: message.to_string(),
            user: user.to_string(),
            post_date: Utc::now(),
        }
    }

    /// Mapping declaration: the message field runs through the
    /// english analyzer so stemmed forms match at query time.
    pub fn mapping() -> TypeMapping {
        TypeMapping::new()
            .text_with_analyzer("message", "english")
            .text("user")
            .date("post_date")
    }
}
