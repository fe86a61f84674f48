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

//! Instance construction during deserialization.
//!
//! A registered [`crate::handler::InstanceCreator`] overrides the default
//! path; without one, construction falls back to
//! [`JsonDefault::json_default`], the crate's stand-in for zero-initialised
//! allocation.

use crate::error::Error;
use crate::handler::{ErasedCreate, HandlerMap};
use crate::reflect::{JsonDefault, Reflect};
use crate::typeinfo::TypeInfo;

/// Maps declared types to their registered instance creators and produces
/// fresh target instances.
pub struct ObjectConstructor {
    creators: HandlerMap<ErasedCreate>,
}

impl ObjectConstructor {
    pub(crate) fn new() -> ObjectConstructor {
        ObjectConstructor {
            creators: HandlerMap::new("instance creator"),
        }
    }

    pub(crate) fn register(&mut self, key: TypeInfo, creator: ErasedCreate) {
        self.creators.register(key, creator);
    }

    /// Resolves exact descriptor → raw identity → default construction.
    /// A creator whose product is not a `T` is a registration bug surfaced
    /// as [`Error::Unconstructible`].
    pub fn construct<T: Reflect + JsonDefault>(&self) -> Result<T, Error> {
        let declared = T::type_info();
        match self.creators.handler_for(&declared) {
            Some(creator) => creator(&declared).downcast::<T>().map(|boxed| *boxed).map_err(|_| {
                Error::unconstructible(
                    declared.to_string(),
                    "the registered instance creator produced a different type",
                )
            }),
            None => Ok(T::json_default()),
        }
    }
}
