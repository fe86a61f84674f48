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

use std::sync::Arc;

use crate::construct::ObjectConstructor;
use crate::deser::{DeserializeContext, FromJson};
use crate::error::Error;
use crate::exclusion::{Disjunction, ExclusionStrategy, MarkerExclusion, ScopeExclusion, VersionExclusion};
use crate::format::{CompactFormatter, JsonFormatter};
use crate::handler::{
    erase_creator, erase_deserializer, erase_dyn_deserializer, erase_dyn_serializer,
    erase_serializer, DynDeserialize, DynSerialize, ErasedDeserialize, ErasedSerialize,
    HandlerMap, InstanceCreator, JsonDeserialize, JsonSerialize,
};
use crate::navigate::NavigatorFactory;
use crate::node::JsonNode;
use crate::reflect::{FieldMarkers, Reflect};
use crate::typeinfo::TypeInfo;
use crate::visitor::SerializePipeline;

/// The serialization facade.
///
/// A `Glaze` instance is read-only after construction and can be shared
/// freely across threads; every call allocates its own traversal state.
/// Build one with [`Glaze::new`] for the defaults, or through
/// [`Glaze::builder`] to configure versioning, exclusion masks, custom
/// handlers and output formatting.
///
/// # Examples
///
/// ```rust, ignore
/// use glaze::{Glaze, GlazeObject};
///
/// #[derive(GlazeObject)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// let glaze = Glaze::new();
/// assert_eq!(glaze.to_json(&Point { x: 1, y: 2 }).unwrap(), r#"{"x":1,"y":2}"#);
/// ```
pub struct Glaze {
    exclusion: Arc<dyn ExclusionStrategy>,
    serializers: HandlerMap<ErasedSerialize>,
    deserializers: HandlerMap<ErasedDeserialize>,
    constructor: ObjectConstructor,
    formatter: Box<dyn JsonFormatter>,
    serialize_nulls: bool,
}

impl Glaze {
    /// A facade with the default configuration: compact output, transient
    /// and synthetic fields excluded, no version ceiling.
    pub fn new() -> Glaze {
        GlazeBuilder::new().build()
    }

    /// Starts configuring a facade.
    pub fn builder() -> GlazeBuilder {
        GlazeBuilder::new()
    }

    /// Serializes a value into JSON text. The declared type is taken from
    /// `T`, generics included.
    ///
    /// A top-level null (for example `&None::<T>`) yields the empty string,
    /// not the `null` literal.
    pub fn to_json<T: Reflect>(&self, value: &T) -> Result<String, Error> {
        self.to_json_dyn(value, &T::type_info())
    }

    /// Serializes a dynamically typed value under an explicitly supplied
    /// declared type descriptor.
    pub fn to_json_dyn(&self, value: &dyn Reflect, declared: &TypeInfo) -> Result<String, Error> {
        match self.to_node_dyn(value, declared)? {
            Some(node) => Ok(self.formatter.format(&node)),
            None => Ok(String::new()),
        }
    }

    /// Serializes a value into a node tree. `None` means the value produced
    /// no output (null, or a wholly excluded class).
    pub fn to_node<T: Reflect>(&self, value: &T) -> Result<Option<JsonNode>, Error> {
        self.to_node_dyn(value, &T::type_info())
    }

    /// Node-tree form of [`Glaze::to_json_dyn`].
    pub fn to_node_dyn(
        &self,
        value: &dyn Reflect,
        declared: &TypeInfo,
    ) -> Result<Option<JsonNode>, Error> {
        let pipeline = SerializePipeline {
            factory: NavigatorFactory::new(self.exclusion.clone()),
            serializers: &self.serializers,
            serialize_nulls: self.serialize_nulls,
        };
        pipeline.serialize_value(value, declared)
    }

    /// Deserializes JSON text into a `T`.
    ///
    /// Empty input is read as the null document, mirroring the top-level
    /// null contract of [`Glaze::to_json`].
    pub fn from_json<T: FromJson + Reflect>(&self, text: &str) -> Result<T, Error> {
        if text.trim().is_empty() {
            return self.from_node(&JsonNode::Null);
        }
        let node = JsonNode::parse(text)?;
        self.from_node(&node)
    }

    /// Deserializes a prebuilt node tree into a `T`.
    pub fn from_node<T: FromJson + Reflect>(&self, node: &JsonNode) -> Result<T, Error> {
        let mut ctx = DeserializeContext {
            deserializers: &self.deserializers,
            constructor: &self.constructor,
            exclusion: self.exclusion.as_ref(),
        };
        ctx.deserialize(node)
    }
}

impl Default for Glaze {
    fn default() -> Self {
        Glaze::new()
    }
}

/// Configures and builds a [`Glaze`] facade.
///
/// ```rust, ignore
/// use glaze::Glaze;
///
/// let glaze = Glaze::builder()
///     .version(1.0)
///     .serialize_nulls()
///     .build();
/// ```
pub struct GlazeBuilder {
    version: Option<f64>,
    marker_mask: FieldMarkers,
    formatter: Box<dyn JsonFormatter>,
    serialize_nulls: bool,
    serializers: HandlerMap<ErasedSerialize>,
    deserializers: HandlerMap<ErasedDeserialize>,
    constructor: ObjectConstructor,
}

impl GlazeBuilder {
    pub fn new() -> GlazeBuilder {
        GlazeBuilder {
            version: None,
            marker_mask: MarkerExclusion::DEFAULT_MASK,
            formatter: Box::new(CompactFormatter),
            serialize_nulls: false,
            serializers: HandlerMap::new("serializer"),
            deserializers: HandlerMap::new("deserializer"),
            constructor: ObjectConstructor::new(),
        }
    }

    /// Enables versioning support: members declared with a minimum version
    /// greater than `ceiling` are excluded in both directions.
    pub fn version(mut self, ceiling: f64) -> GlazeBuilder {
        self.version = Some(ceiling);
        self
    }

    /// Replaces the default marker exclusion mask (transient fields).
    /// Synthetic fields stay excluded regardless of the mask.
    pub fn exclude_fields_with_markers(mut self, mask: FieldMarkers) -> GlazeBuilder {
        self.marker_mask = mask;
        self
    }

    /// Replaces the default compact formatter.
    pub fn formatter(mut self, formatter: impl JsonFormatter + 'static) -> GlazeBuilder {
        self.formatter = Box::new(formatter);
        self
    }

    /// Emits explicit `null` members for null field values instead of
    /// omitting their keys.
    pub fn serialize_nulls(mut self) -> GlazeBuilder {
        self.serialize_nulls = true;
        self
    }

    /// Registers a custom serializer for the exact declared type `T`,
    /// generics included: registering for `Holder<i32>` does not cover
    /// `Holder<String>`.
    pub fn register_serializer<T, S>(mut self, serializer: S) -> GlazeBuilder
    where
        T: Reflect,
        S: JsonSerialize<T> + 'static,
    {
        self.serializers
            .register(T::type_info(), erase_serializer::<T, S>(serializer));
        self
    }

    /// Registers a dynamically dispatched serializer under an explicit
    /// descriptor key — typically a raw key (`TypeInfo::raw_key`) covering
    /// every parameterization, or [`TypeInfo::enum_root`] for all enums.
    pub fn register_serializer_for(
        mut self,
        key: TypeInfo,
        serializer: impl DynSerialize + 'static,
    ) -> GlazeBuilder {
        self.serializers.register(key, erase_dyn_serializer(serializer));
        self
    }

    /// Registers a custom deserializer for the exact declared type `T`.
    pub fn register_deserializer<T, D>(mut self, deserializer: D) -> GlazeBuilder
    where
        T: Reflect,
        D: JsonDeserialize<T> + 'static,
    {
        self.deserializers
            .register(T::type_info(), erase_deserializer::<T, D>(deserializer));
        self
    }

    /// Dynamic-dispatch counterpart of [`GlazeBuilder::register_deserializer`];
    /// the handler's product must downcast to the type requested at the
    /// call site.
    pub fn register_deserializer_for(
        mut self,
        key: TypeInfo,
        deserializer: impl DynDeserialize + 'static,
    ) -> GlazeBuilder {
        self.deserializers
            .register(key, erase_dyn_deserializer(deserializer));
        self
    }

    /// Overrides default construction for `T` during deserialization.
    pub fn register_instance_creator<T, C>(mut self, creator: C) -> GlazeBuilder
    where
        T: Reflect,
        C: InstanceCreator<T> + 'static,
    {
        self.constructor
            .register(T::type_info(), erase_creator::<T, C>(creator));
        self
    }

    /// Builds the facade. The default exclusion composition is the scope
    /// rule or-ed with the marker mask; a version ceiling, when set, is
    /// appended to the disjunction.
    pub fn build(self) -> Glaze {
        let mut exclusion = Disjunction::new()
            .with(ScopeExclusion)
            .with(MarkerExclusion::new(self.marker_mask));
        if let Some(ceiling) = self.version {
            exclusion = exclusion.with(VersionExclusion::new(ceiling));
        }
        Glaze {
            exclusion: Arc::new(exclusion),
            serializers: self.serializers,
            deserializers: self.deserializers,
            constructor: self.constructor,
            formatter: self.formatter,
            serialize_nulls: self.serialize_nulls,
        }
    }
}

impl Default for GlazeBuilder {
    fn default() -> Self {
        GlazeBuilder::new()
    }
}
