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

//! # Glaze Core
//!
//! The engine of the Glaze reflective JSON serialization framework: it
//! walks an object graph guided by declared static type information,
//! chooses between built-in conversions, user-registered handlers and
//! generic field-by-field traversal, enforces exclusion policies, and
//! builds a JSON node tree that a formatter linearises.
//!
//! ## Architecture
//!
//! - **`glaze`**: the facade and its builder, the public entry point
//! - **`typeinfo`**: normalised declared-type descriptors
//! - **`reflect`**: the traversal surface user types implement (usually via
//!   `#[derive(GlazeObject)]` from the companion derive crate)
//! - **`navigate`**: the object navigator and its visitor contract
//! - **`visitor`**: the serialization visitor building node trees
//! - **`deser`**: the symmetric inbound direction
//! - **`exclusion`**: pluggable field/class exclusion policies
//! - **`handler`**: custom serializer/deserializer/creator registries
//! - **`construct`**: instance construction for deserialization
//! - **`node`** / **`format`**: the JSON tree model and its rendering
//! - **`error`**: the error taxonomy
//!
//! ## Traversal model
//!
//! Serialization is a single-threaded, synchronous, depth-first walk. A
//! navigator classifies each value's declared shape and drives visitor
//! callbacks; the visitor recurses through child navigators sharing one
//! ancestor stack, which is how cycles are detected by reference identity.
//! The facade and its registries are immutable after construction and safe
//! to share across threads; each call owns its traversal state.
//!
//! This crate is typically consumed through the higher-level `glaze` crate,
//! which re-exports the API together with the derive macro.

pub mod adapter;
pub mod construct;
pub mod deser;
pub mod error;
pub mod exclusion;
pub mod format;
pub mod glaze;
pub mod handler;
pub mod navigate;
pub mod node;
mod parse;
pub mod reflect;
pub mod typeinfo;
pub mod visitor;

pub use crate::deser::{DeserializeContext, FromJson};
pub use crate::error::{Error, HandlerError};
pub use crate::format::{CompactFormatter, JsonFormatter};
pub use crate::glaze::{Glaze, GlazeBuilder};
pub use crate::handler::{
    DynDeserialize, DynSerialize, InstanceCreator, JsonDeserialize, JsonSerialize,
};
pub use crate::node::{JsonNode, JsonObject, JsonPrimitive};
pub use crate::reflect::{
    ClassDescriptor, FieldDescriptor, FieldMarkers, FieldView, JsonDefault, Reflect, View,
};
pub use crate::typeinfo::{TypeInfo, TypeKind};
pub use crate::visitor::SerializeContext;
