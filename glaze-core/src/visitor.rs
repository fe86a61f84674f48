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

//! The serialization visitor: turns navigator callbacks into a JSON node
//! tree.
//!
//! Every value gets its own visitor with a fresh root slot; members and
//! fields are produced by driving child navigators over child visitors and
//! grafting the child's root into the parent node. A slot that stays empty
//! means "absent": an omitted member, or the empty string at the top level.

use crate::adapter;
use crate::error::Error;
use crate::handler::{ErasedSerialize, HandlerMap};
use crate::navigate::{NavigatorFactory, Visitor};
use crate::node::{JsonNode, JsonObject};
use crate::reflect::{FieldView, Reflect, View};
use crate::typeinfo::TypeInfo;

/// Per-node build state: `Empty` until the first callback, `Populating`
/// while the navigator drives members into it. The node is finalised when
/// the frame is consumed; starting a second shape in one slot is a
/// programming error in the navigator, not a user error.
enum Slot {
    Empty,
    Populating(JsonNode),
}

impl Slot {
    fn begin(&mut self, node: JsonNode) {
        match self {
            Slot::Empty => *self = Slot::Populating(node),
            Slot::Populating(_) => panic!("node slot populated twice"),
        }
    }

    fn object(&mut self) -> &mut JsonObject {
        match self {
            Slot::Populating(JsonNode::Object(obj)) => obj,
            _ => panic!("current node is not an object"),
        }
    }

    fn array(&mut self) -> &mut Vec<JsonNode> {
        match self {
            Slot::Populating(JsonNode::Array(items)) => items,
            _ => panic!("current node is not an array"),
        }
    }

    fn finish(self) -> Option<JsonNode> {
        match self {
            Slot::Empty => None,
            Slot::Populating(node) => Some(node),
        }
    }
}

/// Everything one root serialization call shares: the navigator factory
/// (carrying the ancestor stack), the serializer registry snapshot, and the
/// null policy.
pub(crate) struct SerializePipeline<'g> {
    pub(crate) factory: NavigatorFactory,
    pub(crate) serializers: &'g HandlerMap<ErasedSerialize>,
    pub(crate) serialize_nulls: bool,
}

impl SerializePipeline<'_> {
    /// Runs a child navigator over a fresh visitor; `None` means the value
    /// produced nothing (null, or a wholly excluded class).
    pub(crate) fn serialize_value(
        &self,
        value: &dyn Reflect,
        declared: &TypeInfo,
    ) -> Result<Option<JsonNode>, Error> {
        let navigator = self.factory.create(value, declared.clone());
        let mut visitor = SerializationVisitor {
            pipeline: self,
            root: Slot::Empty,
        };
        navigator.accept(&mut visitor)?;
        Ok(visitor.root.finish())
    }
}

/// Handed to custom serializers so they can feed children back through the
/// complete pipeline — exclusion, cycle detection and registry lookup
/// included. Only valid during the handler invocation.
pub struct SerializeContext<'c> {
    pipeline: &'c SerializePipeline<'c>,
}

impl SerializeContext<'_> {
    /// Serializes a child value through the full pipeline. An absent result
    /// (null child) comes back as an explicit null node.
    pub fn serialize<T: Reflect>(&mut self, value: &T) -> Result<JsonNode, Error> {
        self.serialize_dyn(value, &T::type_info())
    }

    /// Like [`SerializeContext::serialize`] with an explicitly supplied
    /// declared type.
    pub fn serialize_dyn(
        &mut self,
        value: &dyn Reflect,
        declared: &TypeInfo,
    ) -> Result<JsonNode, Error> {
        Ok(self
            .pipeline
            .serialize_value(value, declared)?
            .unwrap_or(JsonNode::Null))
    }
}

struct SerializationVisitor<'p> {
    pipeline: &'p SerializePipeline<'p>,
    root: Slot,
}

impl SerializationVisitor<'_> {
    fn run_handler(
        &mut self,
        handler: ErasedSerialize,
        value: &dyn Reflect,
        declared: &TypeInfo,
    ) -> Result<(), Error> {
        let mut ctx = SerializeContext {
            pipeline: self.pipeline,
        };
        let node = handler(value, declared, &mut ctx)?;
        self.root.begin(node);
        Ok(())
    }
}

impl Visitor for SerializationVisitor<'_> {
    fn visit_null(&mut self, _declared: &TypeInfo) -> Result<(), Error> {
        // The slot stays empty: absence, not the null literal.
        Ok(())
    }

    fn visit_enum(
        &mut self,
        value: &dyn Reflect,
        variant: &'static str,
        declared: &TypeInfo,
    ) -> Result<(), Error> {
        let handler = self
            .pipeline
            .serializers
            .handler_for(declared)
            .or_else(|| self.pipeline.serializers.get_exact(&TypeInfo::enum_root()))
            .cloned();
        match handler {
            Some(handler) => self.run_handler(handler, value, declared),
            None => {
                self.root.begin(JsonNode::string(variant));
                Ok(())
            }
        }
    }

    fn visit_using_custom_handler(
        &mut self,
        value: &dyn Reflect,
        declared: &TypeInfo,
    ) -> Result<bool, Error> {
        let Some(handler) = self.pipeline.serializers.handler_for(declared).cloned() else {
            return Ok(false);
        };
        self.run_handler(handler, value, declared)?;
        Ok(true)
    }

    fn visit_scalar(&mut self, scalar: &View<'_>, _declared: &TypeInfo) -> Result<(), Error> {
        let primitive = adapter::to_primitive(scalar)?;
        self.root.begin(JsonNode::Primitive(primitive));
        Ok(())
    }

    fn start_sequence(&mut self, _declared: &TypeInfo) -> Result<(), Error> {
        self.root.begin(JsonNode::Array(Vec::new()));
        Ok(())
    }

    fn visit_sequence_member(
        &mut self,
        member: &dyn Reflect,
        element: &TypeInfo,
    ) -> Result<(), Error> {
        let child = self.pipeline.serialize_value(member, element)?;
        self.root.array().push(child.unwrap_or(JsonNode::Null));
        Ok(())
    }

    fn start_map(&mut self, _declared: &TypeInfo) -> Result<(), Error> {
        self.root.begin(JsonNode::Object(JsonObject::new()));
        Ok(())
    }

    fn visit_map_entry(
        &mut self,
        key: &dyn Reflect,
        value: &dyn Reflect,
        element: &TypeInfo,
    ) -> Result<(), Error> {
        let key = adapter::key_string(key)?;
        if value.is_null() {
            if self.pipeline.serialize_nulls {
                self.root.object().insert(key, JsonNode::Null);
            }
            return Ok(());
        }
        if let Some(child) = self.pipeline.serialize_value(value, element)? {
            self.root.object().insert(key, child);
        }
        Ok(())
    }

    fn start_object(&mut self, _declared: &TypeInfo) -> Result<(), Error> {
        self.root.begin(JsonNode::Object(JsonObject::new()));
        Ok(())
    }

    fn visit_field(&mut self, field: &FieldView<'_>) -> Result<(), Error> {
        let json_name = field.descriptor.json_name;
        if field.value.is_null() {
            if self.pipeline.serialize_nulls {
                self.root.object().insert(json_name, JsonNode::Null);
            }
            return Ok(());
        }
        if let Some(child) = self.pipeline.serialize_value(field.value, &field.declared)? {
            self.root.object().insert(json_name, child);
        }
        Ok(())
    }
}
