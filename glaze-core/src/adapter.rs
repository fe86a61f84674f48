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

//! Scalar canonicalisation.
//!
//! Serialization direction: a scalar [`View`] becomes a [`JsonPrimitive`]
//! (booleans pass through, integers keep their decimal value, chars become
//! one-character strings) and map keys coerce to plain strings. The
//! deserialization direction narrows a JSON number into the declared
//! numeric type, range-checked.

use crate::error::Error;
use crate::node::{JsonNode, JsonPrimitive};
use crate::reflect::{Reflect, View};

/// Canonical primitive form of a scalar view.
pub(crate) fn to_primitive(view: &View<'_>) -> Result<JsonPrimitive, Error> {
    match view {
        View::Bool(b) => Ok(JsonPrimitive::Bool(*b)),
        View::Int(n) => Ok(JsonPrimitive::Int(*n)),
        View::UInt(n) => Ok(JsonPrimitive::UInt(*n)),
        View::Float(f) => Ok(JsonPrimitive::Float(*f)),
        View::Char(c) => Ok(JsonPrimitive::Str(c.to_string())),
        View::Str(s) => Ok(JsonPrimitive::Str(s.clone().into_owned())),
        other => Err(Error::mismatch("scalar value", other.kind())),
    }
}

/// Coerces a map key to its string form. Only scalar and enum keys have
/// one; structured keys are rejected.
pub(crate) fn key_string(key: &dyn Reflect) -> Result<String, Error> {
    match key.view() {
        View::Str(s) => Ok(s.into_owned()),
        View::Char(c) => Ok(c.to_string()),
        View::Bool(b) => Ok(b.to_string()),
        View::Int(n) => Ok(n.to_string()),
        View::UInt(n) => Ok(n.to_string()),
        View::Float(f) => Ok(f.to_string()),
        View::Variant(name) => Ok(name.to_string()),
        other => Err(Error::mismatch("string-coercible map key", other.kind())),
    }
}

fn primitive(node: &JsonNode, expected: &'static str) -> Result<JsonPrimitive, Error> {
    match node {
        JsonNode::Primitive(p) => Ok(p.clone()),
        other => Err(Error::mismatch(expected, other.kind())),
    }
}

/// Narrows a JSON number to a signed 64-bit value. Floats are accepted only
/// when integral-valued and in range.
pub fn node_as_i64(node: &JsonNode) -> Result<i64, Error> {
    match primitive(node, "number")? {
        JsonPrimitive::Int(n) => Ok(n),
        JsonPrimitive::UInt(n) => {
            i64::try_from(n).map_err(|_| Error::mismatch("signed number", "out-of-range number"))
        }
        JsonPrimitive::Float(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 => {
            Ok(f as i64)
        }
        JsonPrimitive::Float(_) => Err(Error::mismatch("integral number", "fractional number")),
        other => Err(Error::mismatch("number", other.kind())),
    }
}

/// Narrows a JSON number to an unsigned 64-bit value.
pub fn node_as_u64(node: &JsonNode) -> Result<u64, Error> {
    match primitive(node, "number")? {
        JsonPrimitive::UInt(n) => Ok(n),
        JsonPrimitive::Int(n) => {
            u64::try_from(n).map_err(|_| Error::mismatch("unsigned number", "negative number"))
        }
        JsonPrimitive::Float(f) if f.fract() == 0.0 && f >= 0.0 && f <= u64::MAX as f64 => Ok(f as u64),
        JsonPrimitive::Float(_) => Err(Error::mismatch("integral number", "fractional number")),
        other => Err(Error::mismatch("number", other.kind())),
    }
}

/// Widens any JSON number to a float.
pub fn node_as_f64(node: &JsonNode) -> Result<f64, Error> {
    match primitive(node, "number")? {
        JsonPrimitive::Int(n) => Ok(n as f64),
        JsonPrimitive::UInt(n) => Ok(n as f64),
        JsonPrimitive::Float(f) => Ok(f),
        other => Err(Error::mismatch("number", other.kind())),
    }
}

pub fn node_as_bool(node: &JsonNode) -> Result<bool, Error> {
    match primitive(node, "boolean")? {
        JsonPrimitive::Bool(b) => Ok(b),
        other => Err(Error::mismatch("boolean", other.kind())),
    }
}

pub fn node_as_str(node: &JsonNode) -> Result<&str, Error> {
    node.as_str()
        .ok_or_else(|| Error::mismatch("string", node.kind()))
}
