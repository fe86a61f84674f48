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

//! The reflection surface the navigator walks.
//!
//! Rust has no runtime field reflection, so the capabilities the engine
//! needs — enumerate declared fields with their markers, read values, learn
//! the declared type — are provided by the [`Reflect`] trait instead. User
//! types get their implementation from `#[derive(GlazeObject)]`; the
//! standard scalar and container types are implemented by hand in the
//! submodules here.

use std::any::{Any, TypeId};
use std::borrow::Cow;

use bitflags::bitflags;

use crate::typeinfo::TypeInfo;

mod datetime;
mod heap;
mod list;
mod map;
mod option;
mod primitive;
mod set;
mod string;

bitflags! {
    /// Marker bits a field can carry, matched against an exclusion mask.
    ///
    /// `TRANSIENT` is the explicit opt-out (`#[glaze(transient)]`);
    /// `SYNTHETIC` marks compiler- or macro-introduced state that never
    /// belongs on the wire.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct FieldMarkers: u32 {
        const TRANSIENT = 1;
        const SYNTHETIC = 1 << 1;
    }
}

/// Static metadata of one declared field.
#[derive(Clone, Debug)]
pub struct FieldDescriptor {
    /// The field's declared name.
    pub name: &'static str,
    /// The JSON member key; the declared name unless renamed.
    pub json_name: &'static str,
    pub markers: FieldMarkers,
    /// Minimum version declared on the field itself.
    pub since: Option<f64>,
    /// Minimum version declared on the field's class, inherited when the
    /// field has none of its own.
    pub class_since: Option<f64>,
}

impl FieldDescriptor {
    pub fn new(name: &'static str) -> FieldDescriptor {
        FieldDescriptor {
            name,
            json_name: name,
            markers: FieldMarkers::empty(),
            since: None,
            class_since: None,
        }
    }

    /// The version ceiling comparison value: the field's own marker, else
    /// the declaring class's.
    pub fn effective_since(&self) -> Option<f64> {
        self.since.or(self.class_since)
    }
}

/// Class-level metadata consulted by class exclusion queries.
#[derive(Clone, Copy, Debug)]
pub struct ClassDescriptor {
    pub name: &'static str,
    /// Minimum version declared on the class.
    pub since: Option<f64>,
    /// True for types declared in function-local scope.
    pub local: bool,
}

impl ClassDescriptor {
    pub fn new(name: &'static str) -> ClassDescriptor {
        ClassDescriptor {
            name,
            since: None,
            local: false,
        }
    }
}

/// One field of an object under traversal: its metadata, declared type and
/// borrowed value.
pub struct FieldView<'a> {
    pub descriptor: FieldDescriptor,
    pub declared: TypeInfo,
    pub value: &'a dyn Reflect,
}

/// The runtime shape of a value, produced by [`Reflect::view`].
pub enum View<'a> {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Char(char),
    Str(Cow<'a, str>),
    /// A fieldless enum's variant, by external name.
    Variant(&'static str),
    Seq(Vec<&'a dyn Reflect>),
    /// Map entries in the map's iteration order; keys coerce to strings.
    Entries(Vec<(&'a dyn Reflect, &'a dyn Reflect)>),
    Fields(Vec<FieldView<'a>>),
    /// The value cannot currently be read (e.g. a mutably borrowed cell).
    Inaccessible(&'static str),
}

impl View<'_> {
    /// Short shape name used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            View::Null => "null",
            View::Bool(_) => "boolean",
            View::Int(_) | View::UInt(_) | View::Float(_) => "number",
            View::Char(_) | View::Str(_) => "string",
            View::Variant(_) => "enum",
            View::Seq(_) => "sequence",
            View::Entries(_) => "map",
            View::Fields(_) => "object",
            View::Inaccessible(_) => "inaccessible",
        }
    }
}

/// Reference identity of a value, used for cycle detection.
///
/// Two equal-but-distinct values compare unequal here; only the same object
/// reached twice along one root-to-node path compares equal. The concrete
/// `TypeId` disambiguates zero-sized values that share an address with their
/// container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RefIdentity {
    addr: *const (),
    type_id: TypeId,
}

impl RefIdentity {
    pub fn new(addr: *const (), type_id: TypeId) -> RefIdentity {
        RefIdentity { addr, type_id }
    }
}

/// A value the object navigator can traverse.
///
/// Implementations describe the declared type ([`Reflect::type_info`]) and
/// the runtime shape ([`Reflect::view`]). Transparent wrappers (`Option`,
/// `Box`, `Rc`, `Arc`, `RefCell`) delegate everything to their pointee so
/// that declared types, handler dispatch and cycle identity all see through
/// them.
pub trait Reflect: Any {
    /// The normalised descriptor of this declared type.
    fn type_info() -> TypeInfo
    where
        Self: Sized;

    /// The runtime shape of this value.
    fn view(&self) -> View<'_>;

    /// True when this value is the null marker (`Option::None`).
    fn is_null(&self) -> bool {
        false
    }

    /// One unwrapping step of a transparent wrapper: the pointee for
    /// `Box`/`Rc`/`Arc`/`RefCell`, the payload for `Option::Some`. `None`
    /// means this value is already fully resolved. Callers use
    /// [`resolve_value`] rather than this directly.
    fn unwrap_once(&self) -> Option<&dyn Reflect> {
        None
    }

    /// Reference identity for cycle detection; pointer-like wrappers forward
    /// to their pointee.
    fn identity(&self) -> RefIdentity {
        RefIdentity {
            addr: (self as *const Self).cast::<()>(),
            type_id: self.type_id(),
        }
    }

    /// Class-level metadata, present for derived structs and enums.
    fn descriptor(&self) -> Option<ClassDescriptor> {
        None
    }
}

/// Fully unwraps transparent wrappers so handler dispatch and downcasting
/// operate on the pointee rather than the wrapper.
pub fn resolve_value(value: &dyn Reflect) -> &dyn Reflect {
    let mut current = value;
    while let Some(inner) = current.unwrap_once() {
        current = inner;
    }
    current
}

/// Fallback construction path used when no instance creator is registered
/// for a type, and the value every skipped or absent field keeps during
/// deserialization.
pub trait JsonDefault {
    fn json_default() -> Self;
}
