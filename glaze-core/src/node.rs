// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! The JSON node tree built by the serialization visitor and consumed by
//! formatters and deserialization.
//!
//! A node is one of four shapes: `Null`, `Primitive`, `Array`, `Object`.
//! Object entries keep insertion order and keys are unique. An explicit
//! [`JsonNode::Null`] is a real value; an *absent* member is encoded by
//! omitting its key entirely.

use indexmap::IndexMap;

use crate::error::Error;
use crate::format::{CompactFormatter, JsonFormatter};

/// A leaf JSON value.
#[derive(Clone, Debug, PartialEq)]
pub enum JsonPrimitive {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(String),
}

impl JsonPrimitive {
    /// Short shape name used in mismatch diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            JsonPrimitive::Bool(_) => "boolean",
            JsonPrimitive::Int(_) | JsonPrimitive::UInt(_) | JsonPrimitive::Float(_) => "number",
            JsonPrimitive::Str(_) => "string",
        }
    }
}

/// An ordered `string -> node` mapping with unique keys.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct JsonObject {
    entries: IndexMap<String, JsonNode>,
}

impl JsonObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a member, replacing any previous value under the same key.
    pub fn insert(&mut self, key: impl Into<String>, value: JsonNode) {
        self.entries.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&JsonNode> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Members in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &JsonNode)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Key set in insertion order; handy for subset assertions.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_str())
    }
}

impl FromIterator<(String, JsonNode)> for JsonObject {
    fn from_iter<I: IntoIterator<Item = (String, JsonNode)>>(iter: I) -> Self {
        JsonObject {
            entries: iter.into_iter().collect(),
        }
    }
}

/// A JSON document tree.
#[derive(Clone, Debug, PartialEq)]
pub enum JsonNode {
    Null,
    Primitive(JsonPrimitive),
    Array(Vec<JsonNode>),
    Object(JsonObject),
}

impl JsonNode {
    /// Parses JSON text into a node tree.
    ///
    /// The parser is deliberately small and non-streaming; it exists so that
    /// deserialization can accept text as well as prebuilt trees.
    pub fn parse(text: &str) -> Result<JsonNode, Error> {
        crate::parse::parse(text)
    }

    pub fn bool(value: bool) -> JsonNode {
        JsonNode::Primitive(JsonPrimitive::Bool(value))
    }

    pub fn int(value: i64) -> JsonNode {
        JsonNode::Primitive(JsonPrimitive::Int(value))
    }

    pub fn float(value: f64) -> JsonNode {
        JsonNode::Primitive(JsonPrimitive::Float(value))
    }

    pub fn string(value: impl Into<String>) -> JsonNode {
        JsonNode::Primitive(JsonPrimitive::Str(value.into()))
    }

    /// Short shape name used in mismatch diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            JsonNode::Null => "null",
            JsonNode::Primitive(p) => p.kind(),
            JsonNode::Array(_) => "array",
            JsonNode::Object(_) => "object",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, JsonNode::Null)
    }

    pub fn as_primitive(&self) -> Option<&JsonPrimitive> {
        match self {
            JsonNode::Primitive(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[JsonNode]> {
        match self {
            JsonNode::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&JsonObject> {
        match self {
            JsonNode::Object(obj) => Some(obj),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonNode::Primitive(JsonPrimitive::Str(s)) => Some(s),
            _ => None,
        }
    }
}

impl std::fmt::Display for JsonNode {
    /// Renders with the default compact formatter.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&CompactFormatter.format(self))
    }
}
