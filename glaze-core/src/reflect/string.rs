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

//! Textual scalars: `char`, `String`, and `url::Url` (serialized through
//! its canonical string form).

use std::borrow::Cow;

use url::Url;

use crate::adapter;
use crate::deser::{DeserializeContext, FromJson};
use crate::error::Error;
use crate::node::JsonNode;
use crate::reflect::{JsonDefault, Reflect, View};
use crate::typeinfo::TypeInfo;

impl Reflect for String {
    fn type_info() -> TypeInfo {
        TypeInfo::scalar("String")
    }

    fn view(&self) -> View<'_> {
        View::Str(Cow::Borrowed(self.as_str()))
    }
}

impl JsonDefault for String {
    fn json_default() -> Self {
        String::new()
    }
}

impl FromJson for String {
    fn from_node(node: &JsonNode, _ctx: &mut DeserializeContext<'_>) -> Result<Self, Error> {
        adapter::node_as_str(node).map(str::to_owned)
    }

    fn from_map_key(key: &str, _ctx: &mut DeserializeContext<'_>) -> Result<Self, Error> {
        Ok(key.to_owned())
    }
}

impl Reflect for char {
    fn type_info() -> TypeInfo {
        TypeInfo::scalar("char")
    }

    fn view(&self) -> View<'_> {
        View::Char(*self)
    }
}

impl JsonDefault for char {
    fn json_default() -> Self {
        '\0'
    }
}

impl FromJson for char {
    fn from_node(node: &JsonNode, _ctx: &mut DeserializeContext<'_>) -> Result<Self, Error> {
        let text = adapter::node_as_str(node)?;
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(Error::mismatch("single-character string", "string")),
        }
    }

    fn from_map_key(key: &str, ctx: &mut DeserializeContext<'_>) -> Result<Self, Error> {
        Self::from_node(&JsonNode::string(key), ctx)
    }
}

impl Reflect for Url {
    fn type_info() -> TypeInfo {
        TypeInfo::scalar("Url")
    }

    fn view(&self) -> View<'_> {
        View::Str(Cow::Borrowed(self.as_str()))
    }
}

impl JsonDefault for Url {
    fn json_default() -> Self {
        // Infallible: a well-formed literal.
        Url::parse("about:blank").expect("literal URL")
    }
}

impl FromJson for Url {
    fn from_node(node: &JsonNode, _ctx: &mut DeserializeContext<'_>) -> Result<Self, Error> {
        let text = adapter::node_as_str(node)?;
        Url::parse(text).map_err(|_| Error::mismatch("URL string", "unparseable string"))
    }
}
