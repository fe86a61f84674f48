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

//! Declared-type descriptors.
//!
//! A [`TypeInfo`] normalises a declared type reference into three orthogonal
//! facts: the erased raw identity, the shape class, and the ordered type
//! arguments. Every descriptor reduces to a raw name plus an (optionally
//! empty) sequence of child descriptors; parametric equality recurses into
//! argument positions, which is what lets a handler registry distinguish
//! `Holder<i32>` from `Holder<String>` while still supporting raw-identity
//! fallback.

use std::fmt;

/// Shape class of a declared type, as seen by the navigator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// Leaf values: booleans, numbers, chars, strings, URLs, date/times.
    Scalar,
    /// Fieldless enums rendered by variant name.
    Enum,
    /// Ordered element containers: arrays, vectors, sets, deques.
    Sequence,
    /// Key/value containers; keys coerce to strings.
    Map,
    /// Everything with named fields, plus unknown shapes.
    Object,
}

/// A normalised declared-type descriptor.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeInfo {
    raw: &'static str,
    kind: TypeKind,
    args: Vec<TypeInfo>,
}

/// Raw name under which a handler for *any* enum can be registered, tried
/// after the exact enum type. Plays the role of registering for the enum
/// root class.
pub const ENUM_ROOT: &str = "enum";

impl TypeInfo {
    pub fn scalar(raw: &'static str) -> TypeInfo {
        TypeInfo {
            raw,
            kind: TypeKind::Scalar,
            args: Vec::new(),
        }
    }

    pub fn enumeration(raw: &'static str) -> TypeInfo {
        TypeInfo {
            raw,
            kind: TypeKind::Enum,
            args: Vec::new(),
        }
    }

    /// Descriptor matching any enum; see [`ENUM_ROOT`].
    pub fn enum_root() -> TypeInfo {
        TypeInfo::enumeration(ENUM_ROOT)
    }

    pub fn sequence(raw: &'static str, element: TypeInfo) -> TypeInfo {
        TypeInfo {
            raw,
            kind: TypeKind::Sequence,
            args: vec![element],
        }
    }

    pub fn map(raw: &'static str, key: TypeInfo, value: TypeInfo) -> TypeInfo {
        TypeInfo {
            raw,
            kind: TypeKind::Map,
            args: vec![key, value],
        }
    }

    pub fn object(raw: &'static str) -> TypeInfo {
        TypeInfo {
            raw,
            kind: TypeKind::Object,
            args: Vec::new(),
        }
    }

    pub fn object_with_args(raw: &'static str, args: Vec<TypeInfo>) -> TypeInfo {
        TypeInfo {
            raw,
            kind: TypeKind::Object,
            args,
        }
    }

    /// The degenerate descriptor unknown shapes widen to.
    pub fn any() -> TypeInfo {
        TypeInfo::object("any")
    }

    pub fn raw(&self) -> &'static str {
        self.raw
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    pub fn args(&self) -> &[TypeInfo] {
        &self.args
    }

    pub fn is_parameterized(&self) -> bool {
        !self.args.is_empty()
    }

    /// The member descriptor: the first argument for sequences, the second
    /// for maps. Unparameterised containers widen to [`TypeInfo::any`].
    pub fn element(&self) -> TypeInfo {
        let slot = match self.kind {
            TypeKind::Sequence => self.args.first(),
            TypeKind::Map => self.args.get(1),
            _ => None,
        };
        slot.cloned().unwrap_or_else(TypeInfo::any)
    }

    /// The key descriptor of a map-like type.
    pub fn key(&self) -> TypeInfo {
        match self.kind {
            TypeKind::Map => self.args.first().cloned().unwrap_or_else(TypeInfo::any),
            _ => TypeInfo::any(),
        }
    }

    /// This descriptor with its type arguments erased — the raw-identity key
    /// a registry falls back to when no exact parameterised entry exists.
    pub fn raw_key(&self) -> TypeInfo {
        TypeInfo {
            raw: self.raw,
            kind: self.kind,
            args: Vec::new(),
        }
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw)?;
        if !self.args.is_empty() {
            f.write_str("<")?;
            for (i, arg) in self.args.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                arg.fmt(f)?;
            }
            f.write_str(">")?;
        }
        Ok(())
    }
}
