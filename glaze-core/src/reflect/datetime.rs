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

//! Date/time scalars, serialized as ISO-8601 strings.

use std::borrow::Cow;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::adapter;
use crate::deser::{DeserializeContext, FromJson};
use crate::error::Error;
use crate::node::JsonNode;
use crate::reflect::{JsonDefault, Reflect, View};
use crate::typeinfo::TypeInfo;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

impl Reflect for NaiveDate {
    fn type_info() -> TypeInfo {
        TypeInfo::scalar("NaiveDate")
    }

    fn view(&self) -> View<'_> {
        View::Str(Cow::Owned(self.format(DATE_FORMAT).to_string()))
    }
}

impl JsonDefault for NaiveDate {
    fn json_default() -> Self {
        NaiveDate::default()
    }
}

impl FromJson for NaiveDate {
    fn from_node(node: &JsonNode, _ctx: &mut DeserializeContext<'_>) -> Result<Self, Error> {
        let text = adapter::node_as_str(node)?;
        NaiveDate::parse_from_str(text, DATE_FORMAT)
            .map_err(|_| Error::mismatch("date string (YYYY-MM-DD)", "unparseable string"))
    }
}

impl Reflect for NaiveDateTime {
    fn type_info() -> TypeInfo {
        TypeInfo::scalar("NaiveDateTime")
    }

    fn view(&self) -> View<'_> {
        View::Str(Cow::Owned(self.format(DATETIME_FORMAT).to_string()))
    }
}

impl JsonDefault for NaiveDateTime {
    fn json_default() -> Self {
        NaiveDateTime::default()
    }
}

impl FromJson for NaiveDateTime {
    fn from_node(node: &JsonNode, _ctx: &mut DeserializeContext<'_>) -> Result<Self, Error> {
        let text = adapter::node_as_str(node)?;
        NaiveDateTime::parse_from_str(text, DATETIME_FORMAT)
            .map_err(|_| Error::mismatch("ISO-8601 datetime string", "unparseable string"))
    }
}

impl Reflect for DateTime<Utc> {
    fn type_info() -> TypeInfo {
        TypeInfo::scalar("DateTime")
    }

    fn view(&self) -> View<'_> {
        View::Str(Cow::Owned(self.to_rfc3339()))
    }
}

impl JsonDefault for DateTime<Utc> {
    fn json_default() -> Self {
        DateTime::<Utc>::default()
    }
}

impl FromJson for DateTime<Utc> {
    fn from_node(node: &JsonNode, _ctx: &mut DeserializeContext<'_>) -> Result<Self, Error> {
        let text = adapter::node_as_str(node)?;
        DateTime::parse_from_rfc3339(text)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|_| Error::mismatch("RFC 3339 datetime string", "unparseable string"))
    }
}
