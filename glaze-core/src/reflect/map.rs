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

//! Map containers serialize as JSON objects in the map's iteration order;
//! keys are coerced to strings on the way out and re-parsed on the way in.

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use crate::deser::{DeserializeContext, FromJson};
use crate::error::Error;
use crate::node::JsonNode;
use crate::reflect::{JsonDefault, Reflect, View};
use crate::typeinfo::TypeInfo;

macro_rules! impl_map {
    ($($ty:ident: ($($extra:tt)+) => $name:literal),* $(,)?) => {$(
        impl<K: Reflect, V: Reflect> Reflect for $ty<K, V> {
            fn type_info() -> TypeInfo {
                TypeInfo::map($name, K::type_info(), V::type_info())
            }

            fn view(&self) -> View<'_> {
                View::Entries(
                    self.iter()
                        .map(|(k, v)| (k as &dyn Reflect, v as &dyn Reflect))
                        .collect(),
                )
            }
        }

        impl<K, V> JsonDefault for $ty<K, V>
        where
            K: $($extra)+,
        {
            fn json_default() -> Self {
                $ty::new()
            }
        }

        impl<K, V> FromJson for $ty<K, V>
        where
            K: FromJson + Reflect + $($extra)+,
            V: FromJson + Reflect,
        {
            fn from_node(node: &JsonNode, ctx: &mut DeserializeContext<'_>) -> Result<Self, Error> {
                let obj = node
                    .as_object()
                    .ok_or_else(|| Error::mismatch("object", node.kind()))?;
                let mut out = $ty::new();
                for (key, value) in obj.iter() {
                    let k = K::from_map_key(key, ctx)?;
                    let v = ctx.deserialize::<V>(value)?;
                    out.insert(k, v);
                }
                Ok(out)
            }
        }
    )*};
}

impl_map! {
    HashMap: (Eq + Hash) => "HashMap",
    BTreeMap: (Ord) => "BTreeMap",
}
