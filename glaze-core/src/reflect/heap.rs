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

//! Pointer and cell wrappers. All of them are transparent: the declared
//! type, handler dispatch and cycle identity belong to the pointee, which
//! is how shared `Rc`/`Arc` graphs and `RefCell` interior mutability
//! participate in cycle detection.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use crate::deser::{DeserializeContext, FromJson};
use crate::error::Error;
use crate::node::JsonNode;
use crate::reflect::{JsonDefault, Reflect, View};
use crate::typeinfo::TypeInfo;

macro_rules! impl_pointer {
    ($($ptr:ident),* $(,)?) => {$(
        impl<T: Reflect> Reflect for $ptr<T> {
            fn type_info() -> TypeInfo {
                T::type_info()
            }

            fn view(&self) -> View<'_> {
                (**self).view()
            }

            fn is_null(&self) -> bool {
                (**self).is_null()
            }

            fn unwrap_once(&self) -> Option<&dyn Reflect> {
                Some(&**self)
            }
        }

        impl<T: JsonDefault> JsonDefault for $ptr<T> {
            fn json_default() -> Self {
                $ptr::new(T::json_default())
            }
        }

        impl<T: FromJson + Reflect> FromJson for $ptr<T> {
            fn from_node(node: &JsonNode, ctx: &mut DeserializeContext<'_>) -> Result<Self, Error> {
                ctx.deserialize::<T>(node).map($ptr::new)
            }

            fn transparent() -> bool {
                true
            }
        }
    )*};
}

impl_pointer!(Box, Rc, Arc);

impl<T: Reflect> Reflect for RefCell<T> {
    fn type_info() -> TypeInfo {
        T::type_info()
    }

    fn view(&self) -> View<'_> {
        match self.unwrap_once() {
            Some(inner) => inner.view(),
            None => View::Inaccessible("value is mutably borrowed"),
        }
    }

    fn is_null(&self) -> bool {
        self.unwrap_once().is_some_and(|inner| inner.is_null())
    }

    fn unwrap_once(&self) -> Option<&dyn Reflect> {
        if self.try_borrow().is_err() {
            return None;
        }
        // The checked borrow proves no mutable borrow is live. Traversal
        // only reads, so the shared reference stays valid while it is used.
        Some(unsafe { &*self.as_ptr() })
    }
}

impl<T: JsonDefault> JsonDefault for RefCell<T> {
    fn json_default() -> Self {
        RefCell::new(T::json_default())
    }
}

impl<T: FromJson + Reflect> FromJson for RefCell<T> {
    fn from_node(node: &JsonNode, ctx: &mut DeserializeContext<'_>) -> Result<Self, Error> {
        ctx.deserialize::<T>(node).map(RefCell::new)
    }

    fn transparent() -> bool {
        true
    }
}
