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

//! Ordered sequences: vectors, deques, linked lists and fixed-size arrays.
//! All serialize as JSON arrays in index order.

use std::collections::{LinkedList, VecDeque};

use crate::deser::{DeserializeContext, FromJson};
use crate::error::Error;
use crate::node::JsonNode;
use crate::reflect::{JsonDefault, Reflect, View};
use crate::typeinfo::TypeInfo;

macro_rules! impl_sequence {
    ($($ty:ident => $name:literal),* $(,)?) => {$(
        impl<T: Reflect> Reflect for $ty<T> {
            fn type_info() -> TypeInfo {
                TypeInfo::sequence($name, T::type_info())
            }

            fn view(&self) -> View<'_> {
                View::Seq(self.iter().map(|item| item as &dyn Reflect).collect())
            }
        }

        impl<T> JsonDefault for $ty<T> {
            fn json_default() -> Self {
                $ty::new()
            }
        }

        impl<T: FromJson + Reflect> FromJson for $ty<T> {
            fn from_node(node: &JsonNode, ctx: &mut DeserializeContext<'_>) -> Result<Self, Error> {
                let items = node
                    .as_array()
                    .ok_or_else(|| Error::mismatch("array", node.kind()))?;
                items.iter().map(|item| ctx.deserialize::<T>(item)).collect()
            }
        }
    )*};
}

impl_sequence! {
    Vec => "Vec",
    VecDeque => "VecDeque",
    LinkedList => "LinkedList",
}

impl<T: Reflect, const N: usize> Reflect for [T; N] {
    fn type_info() -> TypeInfo {
        TypeInfo::sequence("array", T::type_info())
    }

    fn view(&self) -> View<'_> {
        View::Seq(self.iter().map(|item| item as &dyn Reflect).collect())
    }
}

impl<T: JsonDefault, const N: usize> JsonDefault for [T; N] {
    fn json_default() -> Self {
        std::array::from_fn(|_| T::json_default())
    }
}

impl<T: FromJson + Reflect, const N: usize> FromJson for [T; N] {
    fn from_node(node: &JsonNode, ctx: &mut DeserializeContext<'_>) -> Result<Self, Error> {
        let items = node
            .as_array()
            .ok_or_else(|| Error::mismatch("array", node.kind()))?;
        if items.len() != N {
            return Err(Error::mismatch(
                format!("array of {} elements", N),
                "array of different length",
            ));
        }
        let collected: Vec<T> = items
            .iter()
            .map(|item| ctx.deserialize::<T>(item))
            .collect::<Result<_, _>>()?;
        collected
            .try_into()
            .map_err(|_| Error::mismatch(format!("array of {} elements", N), "array"))
    }
}
