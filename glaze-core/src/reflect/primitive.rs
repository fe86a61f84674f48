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

//! Boolean and numeric scalars.

use crate::adapter;
use crate::deser::{DeserializeContext, FromJson};
use crate::error::Error;
use crate::node::JsonNode;
use crate::reflect::{JsonDefault, Reflect, View};
use crate::typeinfo::TypeInfo;

macro_rules! impl_signed {
    ($($ty:ty => $name:literal),* $(,)?) => {$(
        impl Reflect for $ty {
            fn type_info() -> TypeInfo {
                TypeInfo::scalar($name)
            }

            fn view(&self) -> View<'_> {
                View::Int(*self as i64)
            }
        }

        impl JsonDefault for $ty {
            fn json_default() -> Self {
                0
            }
        }

        impl FromJson for $ty {
            fn from_node(node: &JsonNode, _ctx: &mut DeserializeContext<'_>) -> Result<Self, Error> {
                let wide = adapter::node_as_i64(node)?;
                <$ty>::try_from(wide)
                    .map_err(|_| Error::mismatch(concat!($name, "-ranged number"), "out-of-range number"))
            }

            fn from_map_key(key: &str, _ctx: &mut DeserializeContext<'_>) -> Result<Self, Error> {
                key.parse()
                    .map_err(|_| Error::mismatch(concat!($name, " map key"), "unparseable key"))
            }
        }
    )*};
}

macro_rules! impl_unsigned {
    ($($ty:ty => $name:literal),* $(,)?) => {$(
        impl Reflect for $ty {
            fn type_info() -> TypeInfo {
                TypeInfo::scalar($name)
            }

            fn view(&self) -> View<'_> {
                View::UInt(*self as u64)
            }
        }

        impl JsonDefault for $ty {
            fn json_default() -> Self {
                0
            }
        }

        impl FromJson for $ty {
            fn from_node(node: &JsonNode, _ctx: &mut DeserializeContext<'_>) -> Result<Self, Error> {
                let wide = adapter::node_as_u64(node)?;
                <$ty>::try_from(wide)
                    .map_err(|_| Error::mismatch(concat!($name, "-ranged number"), "out-of-range number"))
            }

            fn from_map_key(key: &str, _ctx: &mut DeserializeContext<'_>) -> Result<Self, Error> {
                key.parse()
                    .map_err(|_| Error::mismatch(concat!($name, " map key"), "unparseable key"))
            }
        }
    )*};
}

impl_signed! {
    i8 => "i8",
    i16 => "i16",
    i32 => "i32",
    i64 => "i64",
}

impl_unsigned! {
    u8 => "u8",
    u16 => "u16",
    u32 => "u32",
    u64 => "u64",
}

macro_rules! impl_float {
    ($($ty:ty => $name:literal),* $(,)?) => {$(
        impl Reflect for $ty {
            fn type_info() -> TypeInfo {
                TypeInfo::scalar($name)
            }

            fn view(&self) -> View<'_> {
                View::Float(*self as f64)
            }
        }

        impl JsonDefault for $ty {
            fn json_default() -> Self {
                0.0
            }
        }

        impl FromJson for $ty {
            fn from_node(node: &JsonNode, _ctx: &mut DeserializeContext<'_>) -> Result<Self, Error> {
                adapter::node_as_f64(node).map(|f| f as $ty)
            }

            fn from_map_key(key: &str, _ctx: &mut DeserializeContext<'_>) -> Result<Self, Error> {
                key.parse()
                    .map_err(|_| Error::mismatch(concat!($name, " map key"), "unparseable key"))
            }
        }
    )*};
}

impl_float! {
    f32 => "f32",
    f64 => "f64",
}

impl Reflect for bool {
    fn type_info() -> TypeInfo {
        TypeInfo::scalar("bool")
    }

    fn view(&self) -> View<'_> {
        View::Bool(*self)
    }
}

impl JsonDefault for bool {
    fn json_default() -> Self {
        false
    }
}

impl FromJson for bool {
    fn from_node(node: &JsonNode, _ctx: &mut DeserializeContext<'_>) -> Result<Self, Error> {
        adapter::node_as_bool(node)
    }

    fn from_map_key(key: &str, _ctx: &mut DeserializeContext<'_>) -> Result<Self, Error> {
        match key {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(Error::mismatch("bool map key", "unparseable key")),
        }
    }
}
