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

//! `Option<T>` models nullability and is otherwise transparent: the
//! declared type, handler dispatch and cycle identity all belong to `T`.

use crate::deser::{DeserializeContext, FromJson};
use crate::error::Error;
use crate::node::JsonNode;
use crate::reflect::{JsonDefault, Reflect, View};
use crate::typeinfo::TypeInfo;

impl<T: Reflect> Reflect for Option<T> {
    fn type_info() -> TypeInfo {
        T::type_info()
    }

    fn view(&self) -> View<'_> {
        match self {
            None => View::Null,
            Some(value) => value.view(),
        }
    }

    fn is_null(&self) -> bool {
        self.is_none()
    }

    fn unwrap_once(&self) -> Option<&dyn Reflect> {
        self.as_ref().map(|value| value as &dyn Reflect)
    }
}

impl<T> JsonDefault for Option<T> {
    fn json_default() -> Self {
        None
    }
}

impl<T: FromJson + Reflect> FromJson for Option<T> {
    fn from_node(node: &JsonNode, ctx: &mut DeserializeContext<'_>) -> Result<Self, Error> {
        if node.is_null() {
            Ok(None)
        } else {
            ctx.deserialize::<T>(node).map(Some)
        }
    }

    fn transparent() -> bool {
        true
    }
}
