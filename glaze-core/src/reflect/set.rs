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

//! Set containers serialize as JSON arrays in the set's iteration order.

use std::collections::{BTreeSet, HashSet};
use std::hash::Hash;

use crate::deser::{DeserializeContext, FromJson};
use crate::error::Error;
use crate::node::JsonNode;
use crate::reflect::{JsonDefault, Reflect, View};
use crate::typeinfo::TypeInfo;

impl<T: Reflect> Reflect for HashSet<T> {
    fn type_info() -> TypeInfo {
        TypeInfo::sequence("HashSet", T::type_info())
    }

    fn view(&self) -> View<'_> {
        View::Seq(self.iter().map(|item| item as &dyn Reflect).collect())
    }
}

impl<T> JsonDefault for HashSet<T> {
    fn json_default() -> Self {
        HashSet::new()
    }
}

impl<T: FromJson + Reflect + Eq + Hash> FromJson for HashSet<T> {
    fn from_node(node: &JsonNode, ctx: &mut DeserializeContext<'_>) -> Result<Self, Error> {
        let items = node
            .as_array()
            .ok_or_else(|| Error::mismatch("array", node.kind()))?;
        items.iter().map(|item| ctx.deserialize::<T>(item)).collect()
    }
}

impl<T: Reflect> Reflect for BTreeSet<T> {
    fn type_info() -> TypeInfo {
        TypeInfo::sequence("BTreeSet", T::type_info())
    }

    fn view(&self) -> View<'_> {
        View::Seq(self.iter().map(|item| item as &dyn Reflect).collect())
    }
}

impl<T> JsonDefault for BTreeSet<T> {
    fn json_default() -> Self {
        BTreeSet::new()
    }
}

impl<T: FromJson + Reflect + Ord> FromJson for BTreeSet<T> {
    fn from_node(node: &JsonNode, ctx: &mut DeserializeContext<'_>) -> Result<Self, Error> {
        let items = node
            .as_array()
            .ok_or_else(|| Error::mismatch("array", node.kind()))?;
        items.iter().map(|item| ctx.deserialize::<T>(item)).collect()
    }
}
