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

//! # Glaze
//!
//! Glaze is a reflective object-to-JSON serialization framework: it turns
//! an in-memory value of arbitrary shape, together with its declared static
//! type, into a JSON document, and symmetrically rebuilds values from JSON.
//!
//! ## Key Features
//!
//! - **Declared-type driven**: traversal follows static type information,
//!   generics included — `Holder<i32>` and `Holder<String>` are distinct
//!   registration keys
//! - **Pluggable handlers**: custom serializers, deserializers and instance
//!   creators, resolved exact-type-first with raw-identity fallback
//! - **Exclusion policies**: transient/synthetic markers, version ceilings
//!   and scope rules compose as a disjunction
//! - **Cycle detection**: directed cycles fail cleanly by reference
//!   identity; equal-but-distinct values serialize in full
//! - **Compact, stable output**: field order follows declaration order and
//!   the default formatter emits the whitespace-free wire form
//!
//! ## Usage
//!
//! ```rust, ignore
//! use glaze::{Glaze, GlazeObject};
//!
//! #[derive(GlazeObject, Debug, PartialEq)]
//! struct User {
//!     name: String,
//!     age: u32,
//!     #[glaze(transient)]
//!     password: String,
//! }
//!
//! let glaze = Glaze::new();
//! let user = User {
//!     name: "Alice".to_string(),
//!     age: 30,
//!     password: "secret".to_string(),
//! };
//! let json = glaze.to_json(&user)?;
//! assert_eq!(json, r#"{"name":"Alice","age":30}"#);
//!
//! let back: User = glaze.from_json(&json)?;
//! # Ok::<(), glaze::Error>(())
//! ```
//!
//! Versioned members and custom handlers are configured on the builder:
//!
//! ```rust, ignore
//! use glaze::{Glaze, JsonNode};
//!
//! let glaze = Glaze::builder()
//!     .version(1.0)
//!     .register_serializer::<url::Url, _>(|url: &url::Url, _, _| {
//!         Ok(JsonNode::string(url.as_str()))
//!     })
//!     .build();
//! ```

pub use glaze_core::{
    ClassDescriptor, CompactFormatter, DeserializeContext, DynDeserialize, DynSerialize, Error,
    FieldDescriptor, FieldMarkers, FieldView, FromJson, Glaze, GlazeBuilder, HandlerError,
    InstanceCreator, JsonDefault, JsonDeserialize, JsonFormatter, JsonNode, JsonObject,
    JsonPrimitive, JsonSerialize, Reflect, SerializeContext, TypeInfo, TypeKind, View,
};

pub use glaze_derive::GlazeObject;
