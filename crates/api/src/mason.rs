//! Minimal builder for Mason (`application/vnd.mason+json`) documents.
//!
//! Mason wraps a plain JSON representation with `@namespaces` (where the
//! custom link relations are documented), `@controls` (named links, each
//! with an href and optionally a method, encoding, title and body schema)
//! and, for collections, an `items` array whose entries are themselves
//! small Mason documents carrying a `self` control.
//!
//! This is deliberately plain composition: one generic document type plus
//! per-resource free functions in the handler modules that populate it.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::{json, Map, Value};

/// The Mason media type, used as the content type of every document.
pub const MASON: &str = "application/vnd.mason+json";

/// A single hypermedia control.
///
/// Only `href` is mandatory; `method` defaults to GET by Mason convention
/// and is omitted for plain links.
#[derive(Debug, Clone, Serialize)]
pub struct Control {
    pub href: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<Value>,
}

impl Control {
    /// A bare link control.
    pub fn href(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            method: None,
            encoding: None,
            title: None,
            schema: None,
        }
    }

    /// A bare link control with a human-readable title.
    pub fn titled(href: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::href(href)
        }
    }
}

/// A Mason document under construction.
#[derive(Debug, Clone, Default)]
pub struct MasonDocument(Map<String, Value>);

impl MasonDocument {
    /// An empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// A document whose base properties come from a serialized
    /// representation. Non-object values produce an empty base.
    pub fn represent(payload: Value) -> Self {
        match payload {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }

    /// Declare a namespace for prefixed link relations.
    pub fn add_namespace(&mut self, ns: &str, uri: &str) {
        if let Value::Object(namespaces) = self.0.entry("@namespaces").or_insert_with(|| json!({}))
        {
            namespaces.insert(ns.to_string(), json!({ "name": uri }));
        }
    }

    /// Attach a control under the given relation name.
    pub fn add_control(&mut self, name: &str, control: Control) {
        if let Value::Object(controls) = self.0.entry("@controls").or_insert_with(|| json!({})) {
            controls.insert(name.to_string(), json!(control));
        }
    }

    /// Attach a POST control carrying a body schema.
    pub fn add_control_post(&mut self, name: &str, title: &str, href: String, schema: Value) {
        self.add_control(
            name,
            Control {
                href,
                method: Some("POST"),
                encoding: Some("json"),
                title: Some(title.to_string()),
                schema: Some(schema),
            },
        );
    }

    /// Attach a PUT control carrying a body schema.
    pub fn add_control_put(&mut self, name: &str, title: &str, href: String, schema: Value) {
        self.add_control(
            name,
            Control {
                href,
                method: Some("PUT"),
                encoding: Some("json"),
                title: Some(title.to_string()),
                schema: Some(schema),
            },
        );
    }

    /// Attach a DELETE control.
    pub fn add_control_delete(&mut self, name: &str, title: &str, href: String) {
        self.add_control(
            name,
            Control {
                href,
                method: Some("DELETE"),
                encoding: None,
                title: Some(title.to_string()),
                schema: None,
            },
        );
    }

    /// Append an entry to the document's `items` array.
    pub fn add_item(&mut self, item: MasonDocument) {
        if let Value::Array(items) = self.0.entry("items").or_insert_with(|| json!([])) {
            items.push(item.into_value());
        }
    }

    /// An error document: short `@message` title plus one detail message.
    pub fn error(title: &str, details: &str) -> Self {
        Self::represent(json!({
            "@error": {
                "@message": title,
                "@messages": [details],
            }
        }))
    }

    /// Consume the builder, yielding the finished JSON value.
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl IntoResponse for MasonDocument {
    fn into_response(self) -> Response {
        (
            StatusCode::OK,
            [(header::CONTENT_TYPE, MASON)],
            Value::Object(self.0).to_string(),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn controls_and_namespaces_accumulate() {
        let mut doc = MasonDocument::represent(json!({"username": "Noob"}));
        doc.add_namespace("planner", "/link-relations/");
        doc.add_control("self", Control::href("/api/users/Noob"));
        doc.add_control("up", Control::titled("/api/users", "Up"));

        let value = doc.into_value();
        assert_eq!(value["username"], "Noob");
        assert_eq!(value["@namespaces"]["planner"]["name"], "/link-relations/");
        assert_eq!(value["@controls"]["self"]["href"], "/api/users/Noob");
        assert_eq!(value["@controls"]["up"]["title"], "Up");
        // Bare links carry no method.
        assert!(value["@controls"]["self"].get("method").is_none());
    }

    #[test]
    fn post_control_carries_schema_and_encoding() {
        let mut doc = MasonDocument::new();
        doc.add_control_post(
            "planner:add-user",
            "Add a new user",
            "/api/users".to_string(),
            json!({"type": "object"}),
        );

        let value = doc.into_value();
        let control = &value["@controls"]["planner:add-user"];
        assert_eq!(control["method"], "POST");
        assert_eq!(control["encoding"], "json");
        assert_eq!(control["schema"]["type"], "object");
    }

    #[test]
    fn items_collect_in_insertion_order() {
        let mut doc = MasonDocument::new();
        for name in ["a", "b"] {
            let mut item = MasonDocument::represent(json!({ "name": name }));
            item.add_control("self", Control::href(format!("/api/things/{name}")));
            doc.add_item(item);
        }

        let value = doc.into_value();
        let items = value["items"].as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["name"], "a");
        assert_eq!(items[1]["@controls"]["self"]["href"], "/api/things/b");
    }

    #[test]
    fn error_document_shape() {
        let value = MasonDocument::error("Not found", "User 'ghost' not found").into_value();
        assert_eq!(value["@error"]["@message"], "Not found");
        assert_eq!(value["@error"]["@messages"][0], "User 'ghost' not found");
    }
}
