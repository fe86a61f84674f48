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

//! # Glaze Derive Macros
//!
//! Procedural macros for the Glaze serialization framework. The runtime has
//! no field reflection, so `#[derive(GlazeObject)]` generates the schema a
//! reflective serializer would otherwise discover at run time: the
//! `Reflect` traversal surface, the `FromJson` inbound path and the
//! `JsonDefault` construction fallback.
//!
//! ## `#[derive(GlazeObject)]`
//!
//! Supported on structs with named fields (including generic and unit
//! structs) and on fieldless enums.
//!
//! ```rust, ignore
//! use glaze::GlazeObject;
//!
//! #[derive(GlazeObject)]
//! #[glaze(since = 1.0)]
//! struct Account {
//!     id: u64,
//!     #[glaze(rename = "displayName")]
//!     name: String,
//!     #[glaze(transient)]
//!     session_token: String,
//!     #[glaze(since = 1.1)]
//!     labels: Vec<String>,
//! }
//!
//! #[derive(GlazeObject)]
//! enum Standing {
//!     Active,
//!     #[glaze(rename = "on-hold")]
//!     OnHold,
//!     Closed,
//! }
//! ```
//!
//! ## Attributes
//!
//! Field level:
//! - `rename = "..."` — the JSON member key, instead of the field name
//! - `since = X.Y` — minimum version; excluded under a lower ceiling
//! - `transient` — carries the transient marker (excluded by default)
//! - `synthetic` — carries the synthetic marker (scope-captured state)
//!
//! Struct/enum level:
//! - `since = X.Y` — class-level minimum version, inherited by fields that
//!   declare none of their own
//! - `local` — marks a function-local type, excluded by the scope rule
//!
//! Enum variant level:
//! - `rename = "..."` — the external variant name

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod object;

/// Derive macro generating the reflection and deserialization impls for a
/// struct or fieldless enum.
#[proc_macro_derive(GlazeObject, attributes(glaze))]
pub fn proc_macro_derive_glaze_object(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    object::derive_object(&input)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}
