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

//! The inbound direction: JSON node tree to value.
//!
//! [`FromJson`] is the symmetric counterpart of the serialization walk,
//! generated by the derive for user types. [`DeserializeContext`] threads
//! the registries through the recursion: custom deserializers resolve
//! before the default path, targets come from the object constructor, and
//! the same exclusion strategies that shape the output also gate which
//! fields are filled back in.

use crate::construct::ObjectConstructor;
use crate::error::Error;
use crate::exclusion::ExclusionStrategy;
use crate::handler::{ErasedDeserialize, HandlerMap};
use crate::node::JsonNode;
use crate::reflect::{ClassDescriptor, FieldDescriptor, JsonDefault, Reflect};

/// A type that can be rebuilt from a JSON node tree.
pub trait FromJson: Sized + 'static {
    fn from_node(node: &JsonNode, ctx: &mut DeserializeContext<'_>) -> Result<Self, Error>;

    /// Rebuilds a value from an object member key. Keys are always strings
    /// on the wire; numeric key types override this to re-parse.
    fn from_map_key(key: &str, ctx: &mut DeserializeContext<'_>) -> Result<Self, Error> {
        Self::from_node(&JsonNode::string(key), ctx)
    }

    /// Transparent wrappers (`Option`, `Box`, ...) defer custom-handler
    /// dispatch to their pointee so registered deserializers always see the
    /// type they were registered for.
    fn transparent() -> bool {
        false
    }
}

/// Per-call deserialization state handed through the recursion.
pub struct DeserializeContext<'c> {
    pub(crate) deserializers: &'c HandlerMap<ErasedDeserialize>,
    pub(crate) constructor: &'c ObjectConstructor,
    pub(crate) exclusion: &'c dyn ExclusionStrategy,
}

impl DeserializeContext<'_> {
    /// Rebuilds a `T` from a node: a registered custom deserializer (exact
    /// descriptor first, raw identity second) wins over the default path.
    pub fn deserialize<T: FromJson + Reflect>(&mut self, node: &JsonNode) -> Result<T, Error> {
        if !T::transparent() {
            let declared = T::type_info();
            if let Some(handler) = self.deserializers.handler_for(&declared).cloned() {
                let product = handler(node, &declared, self)?;
                return product.downcast::<T>().map(|boxed| *boxed).map_err(|_| {
                    Error::mismatch(
                        declared.to_string(),
                        "a different type produced by the registered deserializer",
                    )
                });
            }
        }
        T::from_node(node, self)
    }

    /// Produces the target instance fields are filled into.
    pub fn construct<T: Reflect + JsonDefault>(&self) -> Result<T, Error> {
        self.constructor.construct::<T>()
    }

    /// Exclusion applies on the way in too: a skipped field keeps its
    /// default value.
    pub fn should_skip_field(&self, field: &FieldDescriptor) -> bool {
        self.exclusion.should_skip_field(field)
    }

    pub fn should_skip_class(&self, class: &ClassDescriptor) -> bool {
        self.exclusion.should_skip_class(class)
    }
}
