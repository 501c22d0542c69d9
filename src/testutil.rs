//! Test fixtures and a scriptable fragment source.
//!
//! This module is only available when the `testutil` feature is enabled.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::block::FragmentSource;
use crate::core::HeadlessError;
use crate::fragment::{normalize, Adventure};

/// A canned raw GraphQL item shaped like the WKND adventure schema.
pub fn raw_adventure(path: &str, title: &str) -> Value {
    json!({
        "_path": path,
        "title": title,
        "slug": title.to_lowercase().replace(' ', "-"),
        "description": {
            "html": format!("<p>About {title}.</p>"),
            "plaintext": format!("About {title}.")
        },
        "primaryImage": {
            "_path": format!("{path}/hero.jpg"),
            "mimeType": "image/jpeg",
            "width": 1600,
            "height": 900
        },
        "activity": "Surfing",
        "adventureType": "Overnight Trip",
        "tripLength": "6 Days",
        "groupSize": 8,
        "difficulty": "Beginner",
        "price": 5000.0,
        "itinerary": {
            "html": "<ul><li>Day 1</li></ul>",
            "plaintext": "Day 1"
        },
        "gearList": {
            "html": "<ul><li>Wetsuit</li></ul>",
            "plaintext": "Wetsuit"
        }
    })
}

/// Wrap a raw item in the `adventureByPath` response envelope.
pub fn by_path_envelope(item: Option<Value>) -> Value {
    json!({ "data": { "adventureByPath": { "item": item } } })
}

/// Wrap a raw item in the `adventureBySlug` response envelope.
pub fn by_slug_envelope(item: Option<Value>) -> Value {
    json!({ "data": { "adventureBySlug": { "item": item } } })
}

/// A normalized fixture adventure.
pub fn adventure(path: &str, title: &str) -> Adventure {
    normalize(Some(&raw_adventure(path, title)), None).unwrap()
}

#[derive(Debug, Clone)]
enum Scripted {
    Found(Adventure),
    Missing,
    Fails(String),
}

/// Fragment source with scripted per-path outcomes.
///
/// Unscripted paths resolve to "not found".
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    outcomes: HashMap<String, Scripted>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn found(mut self, path: &str, adventure: Adventure) -> Self {
        self.outcomes
            .insert(path.to_string(), Scripted::Found(adventure));
        self
    }

    pub fn missing(mut self, path: &str) -> Self {
        self.outcomes.insert(path.to_string(), Scripted::Missing);
        self
    }

    pub fn failing(mut self, path: &str, message: &str) -> Self {
        self.outcomes
            .insert(path.to_string(), Scripted::Fails(message.to_string()));
        self
    }
}

#[async_trait]
impl FragmentSource for StaticSource {
    async fn fetch(&self, path: &str) -> Result<Option<Adventure>, HeadlessError> {
        match self.outcomes.get(path) {
            Some(Scripted::Found(adventure)) => Ok(Some(adventure.clone())),
            Some(Scripted::Fails(message)) => Err(HeadlessError::Transport(message.clone())),
            Some(Scripted::Missing) | None => Ok(None),
        }
    }
}
