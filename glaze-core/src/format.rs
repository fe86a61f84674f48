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

//! Node-to-text rendering.
//!
//! The default [`CompactFormatter`] emits the wire-compatible compact form:
//! no whitespace, object members as `"k":v` separated by commas, arrays as
//! `[v,v]`. String escaping happens here and only here.

use std::fmt::Write;

use crate::node::{JsonNode, JsonPrimitive};

/// Linearises a [`JsonNode`] tree into JSON text.
///
/// Installed on the facade via `GlazeBuilder::formatter`; the built-in
/// implementation is [`CompactFormatter`].
pub trait JsonFormatter: Send + Sync {
    fn format(&self, node: &JsonNode) -> String;
}

/// The default whitespace-free formatter.
#[derive(Clone, Copy, Debug, Default)]
pub struct CompactFormatter;

impl JsonFormatter for CompactFormatter {
    fn format(&self, node: &JsonNode) -> String {
        let mut out = String::new();
        write_node(&mut out, node);
        out
    }
}

fn write_node(out: &mut String, node: &JsonNode) {
    match node {
        JsonNode::Null => out.push_str("null"),
        JsonNode::Primitive(p) => write_primitive(out, p),
        JsonNode::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_node(out, item);
            }
            out.push(']');
        }
        JsonNode::Object(obj) => {
            out.push('{');
            for (i, (key, value)) in obj.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_escaped(out, key);
                out.push(':');
                write_node(out, value);
            }
            out.push('}');
        }
    }
}

fn write_primitive(out: &mut String, primitive: &JsonPrimitive) {
    match primitive {
        JsonPrimitive::Bool(true) => out.push_str("true"),
        JsonPrimitive::Bool(false) => out.push_str("false"),
        JsonPrimitive::Int(n) => {
            let _ = write!(out, "{}", n);
        }
        JsonPrimitive::UInt(n) => {
            let _ = write!(out, "{}", n);
        }
        JsonPrimitive::Float(f) => write_float(out, *f),
        JsonPrimitive::Str(s) => write_escaped(out, s),
    }
}

/// Integral-valued floats print without a trailing `.0` (`20`, not `20.0`);
/// other finite values use Rust's shortest round-trip rendering. Non-finite
/// values have no JSON representation and degrade to `null`.
fn write_float(out: &mut String, f: f64) {
    if !f.is_finite() {
        out.push_str("null");
    } else if f == f.trunc() && f.abs() < 9.007_199_254_740_992e15 {
        let _ = write!(out, "{}", f as i64);
    } else {
        let _ = write!(out, "{}", f);
    }
}

fn write_escaped(out: &mut String, s: &str) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
}
