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

//! User-pluggable handlers and the registry that resolves them.
//!
//! Handlers come in three roles — serializer, deserializer, instance
//! creator — registered under a [`TypeInfo`] key. Resolution always tries
//! the exact parameterised descriptor first and falls back to the raw
//! identity; it never consults anything else, so a handler meant to cover a
//! family of types must be registered for the raw key (or, for enums, the
//! enum root) explicitly.
//!
//! Typed handlers are stored type-erased behind `Arc<dyn Fn…>` adapters
//! that downcast at the call boundary and wrap handler failures in
//! [`Error::Handler`].

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use crate::deser::DeserializeContext;
use crate::error::{Error, HandlerError};
use crate::node::JsonNode;
use crate::reflect::Reflect;
use crate::typeinfo::TypeInfo;
use crate::visitor::SerializeContext;

/// A custom serializer for a concrete type `T`.
///
/// Closures of the matching shape implement this automatically.
pub trait JsonSerialize<T>: Send + Sync {
    fn serialize(
        &self,
        value: &T,
        declared: &TypeInfo,
        ctx: &mut SerializeContext<'_>,
    ) -> Result<JsonNode, HandlerError>;
}

impl<T, F> JsonSerialize<T> for F
where
    F: Fn(&T, &TypeInfo, &mut SerializeContext<'_>) -> Result<JsonNode, HandlerError> + Send + Sync,
{
    fn serialize(
        &self,
        value: &T,
        declared: &TypeInfo,
        ctx: &mut SerializeContext<'_>,
    ) -> Result<JsonNode, HandlerError> {
        self(value, declared, ctx)
    }
}

/// A custom serializer dispatched dynamically, for raw-key or enum-root
/// registration where no single concrete type exists.
pub trait DynSerialize: Send + Sync {
    fn serialize(
        &self,
        value: &dyn Reflect,
        declared: &TypeInfo,
        ctx: &mut SerializeContext<'_>,
    ) -> Result<JsonNode, HandlerError>;
}

impl<F> DynSerialize for F
where
    F: Fn(&dyn Reflect, &TypeInfo, &mut SerializeContext<'_>) -> Result<JsonNode, HandlerError>
        + Send
        + Sync,
{
    fn serialize(
        &self,
        value: &dyn Reflect,
        declared: &TypeInfo,
        ctx: &mut SerializeContext<'_>,
    ) -> Result<JsonNode, HandlerError> {
        self(value, declared, ctx)
    }
}

/// A custom deserializer for a concrete type `T`.
pub trait JsonDeserialize<T>: Send + Sync {
    fn deserialize(
        &self,
        node: &JsonNode,
        declared: &TypeInfo,
        ctx: &mut DeserializeContext<'_>,
    ) -> Result<T, HandlerError>;
}

impl<T, F> JsonDeserialize<T> for F
where
    F: Fn(&JsonNode, &TypeInfo, &mut DeserializeContext<'_>) -> Result<T, HandlerError> + Send + Sync,
{
    fn deserialize(
        &self,
        node: &JsonNode,
        declared: &TypeInfo,
        ctx: &mut DeserializeContext<'_>,
    ) -> Result<T, HandlerError> {
        self(node, declared, ctx)
    }
}

/// A custom deserializer dispatched dynamically; its product must downcast
/// to the type requested at the call site.
pub trait DynDeserialize: Send + Sync {
    fn deserialize(
        &self,
        node: &JsonNode,
        declared: &TypeInfo,
        ctx: &mut DeserializeContext<'_>,
    ) -> Result<Box<dyn Any>, HandlerError>;
}

impl<F> DynDeserialize for F
where
    F: Fn(&JsonNode, &TypeInfo, &mut DeserializeContext<'_>) -> Result<Box<dyn Any>, HandlerError>
        + Send
        + Sync,
{
    fn deserialize(
        &self,
        node: &JsonNode,
        declared: &TypeInfo,
        ctx: &mut DeserializeContext<'_>,
    ) -> Result<Box<dyn Any>, HandlerError> {
        self(node, declared, ctx)
    }
}

/// Produces a fresh instance of `T`, overriding default construction
/// during deserialization.
pub trait InstanceCreator<T>: Send + Sync {
    fn create(&self, declared: &TypeInfo) -> T;
}

impl<T, F> InstanceCreator<T> for F
where
    F: Fn(&TypeInfo) -> T + Send + Sync,
{
    fn create(&self, declared: &TypeInfo) -> T {
        self(declared)
    }
}

pub(crate) type ErasedSerialize = Arc<
    dyn Fn(&dyn Reflect, &TypeInfo, &mut SerializeContext<'_>) -> Result<JsonNode, Error>
        + Send
        + Sync,
>;

pub(crate) type ErasedDeserialize = Arc<
    dyn Fn(&JsonNode, &TypeInfo, &mut DeserializeContext<'_>) -> Result<Box<dyn Any>, Error>
        + Send
        + Sync,
>;

pub(crate) type ErasedCreate = Arc<dyn Fn(&TypeInfo) -> Box<dyn Any> + Send + Sync>;

pub(crate) fn erase_serializer<T, S>(serializer: S) -> ErasedSerialize
where
    T: Reflect,
    S: JsonSerialize<T> + 'static,
{
    Arc::new(move |value, declared, ctx| {
        let any: &dyn Any = value;
        let concrete = any.downcast_ref::<T>().ok_or_else(|| {
            Error::handler(
                declared.to_string(),
                "value type does not match the registered serializer".into(),
            )
        })?;
        serializer
            .serialize(concrete, declared, ctx)
            .map_err(|cause| Error::handler(declared.to_string(), cause))
    })
}

pub(crate) fn erase_dyn_serializer<S: DynSerialize + 'static>(serializer: S) -> ErasedSerialize {
    Arc::new(move |value, declared, ctx| {
        serializer
            .serialize(value, declared, ctx)
            .map_err(|cause| Error::handler(declared.to_string(), cause))
    })
}

pub(crate) fn erase_deserializer<T, D>(deserializer: D) -> ErasedDeserialize
where
    T: 'static,
    D: JsonDeserialize<T> + 'static,
{
    Arc::new(move |node, declared, ctx| {
        deserializer
            .deserialize(node, declared, ctx)
            .map(|value| Box::new(value) as Box<dyn Any>)
            .map_err(|cause| Error::handler(declared.to_string(), cause))
    })
}

pub(crate) fn erase_dyn_deserializer<D: DynDeserialize + 'static>(
    deserializer: D,
) -> ErasedDeserialize {
    Arc::new(move |node, declared, ctx| {
        deserializer
            .deserialize(node, declared, ctx)
            .map_err(|cause| Error::handler(declared.to_string(), cause))
    })
}

pub(crate) fn erase_creator<T, C>(creator: C) -> ErasedCreate
where
    T: 'static,
    C: InstanceCreator<T> + 'static,
{
    Arc::new(move |declared| Box::new(creator.create(declared)) as Box<dyn Any>)
}

/// Registry keyed by declared-type descriptor.
#[derive(Clone)]
pub struct HandlerMap<H> {
    role: &'static str,
    entries: HashMap<TypeInfo, H>,
}

impl<H> HandlerMap<H> {
    pub fn new(role: &'static str) -> HandlerMap<H> {
        HandlerMap {
            role,
            entries: HashMap::new(),
        }
    }

    /// Inserts or overwrites; overwriting an existing registration emits a
    /// warning through the `log` facade.
    pub fn register(&mut self, key: TypeInfo, handler: H) {
        if self.entries.insert(key.clone(), handler).is_some() {
            log::warn!("overriding the existing {} for {}", self.role, key);
        }
    }

    /// Exact parameterised match first; raw-identity fallback second;
    /// never anything else.
    pub fn handler_for(&self, key: &TypeInfo) -> Option<&H> {
        if let Some(handler) = self.entries.get(key) {
            return Some(handler);
        }
        if key.is_parameterized() {
            return self.entries.get(&key.raw_key());
        }
        None
    }

    /// True iff an exact (non-fallback) entry exists for the descriptor.
    pub fn has_specific_handler_for(&self, key: &TypeInfo) -> bool {
        self.entries.contains_key(key)
    }

    pub(crate) fn get_exact(&self, key: &TypeInfo) -> Option<&H> {
        self.entries.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
