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

//! `#[glaze(...)]` attribute parsing for fields, variants and containers.

use syn::meta::ParseNestedMeta;
use syn::{Attribute, Field, Variant};

/// Parsed field-level attributes.
#[derive(Debug, Clone, Default)]
pub struct GlazeFieldMeta {
    /// JSON member key override.
    pub rename: Option<String>,
    /// Minimum version declared on the field.
    pub since: Option<f64>,
    /// Explicit opt-out marker.
    pub transient: bool,
    /// Compiler/macro-introduced state marker.
    pub synthetic: bool,
}

/// Parsed container-level attributes.
#[derive(Debug, Clone, Default)]
pub struct GlazeTypeMeta {
    /// Minimum version declared on the type, inherited by unversioned
    /// fields.
    pub since: Option<f64>,
    /// Marks a function-local type for the scope exclusion rule.
    pub local: bool,
}

pub fn parse_field_meta(field: &Field) -> syn::Result<GlazeFieldMeta> {
    let mut meta = GlazeFieldMeta::default();
    for attr in &field.attrs {
        if !attr.path().is_ident("glaze") {
            continue;
        }
        attr.parse_nested_meta(|nested| {
            if nested.path.is_ident("rename") {
                let lit: syn::LitStr = nested.value()?.parse()?;
                meta.rename = Some(lit.value());
            } else if nested.path.is_ident("since") {
                meta.since = Some(parse_version(&nested)?);
            } else if nested.path.is_ident("transient") {
                meta.transient = true;
            } else if nested.path.is_ident("synthetic") {
                meta.synthetic = true;
            } else {
                return Err(nested.error("unknown glaze field attribute"));
            }
            Ok(())
        })?;
    }
    Ok(meta)
}

pub fn parse_type_meta(attrs: &[Attribute]) -> syn::Result<GlazeTypeMeta> {
    let mut meta = GlazeTypeMeta::default();
    for attr in attrs {
        if !attr.path().is_ident("glaze") {
            continue;
        }
        attr.parse_nested_meta(|nested| {
            if nested.path.is_ident("since") {
                meta.since = Some(parse_version(&nested)?);
            } else if nested.path.is_ident("local") {
                meta.local = true;
            } else {
                return Err(nested.error("unknown glaze container attribute"));
            }
            Ok(())
        })?;
    }
    Ok(meta)
}

/// The variant-level attribute set: only `rename`.
pub fn parse_variant_rename(variant: &Variant) -> syn::Result<Option<String>> {
    let mut rename = None;
    for attr in &variant.attrs {
        if !attr.path().is_ident("glaze") {
            continue;
        }
        attr.parse_nested_meta(|nested| {
            if nested.path.is_ident("rename") {
                let lit: syn::LitStr = nested.value()?.parse()?;
                rename = Some(lit.value());
                Ok(())
            } else {
                Err(nested.error("unknown glaze variant attribute"))
            }
        })?;
    }
    Ok(rename)
}

/// Versions are written as floating literals (`since = 1.1`); plain
/// integers (`since = 2`) are accepted too.
fn parse_version(nested: &ParseNestedMeta<'_>) -> syn::Result<f64> {
    let lit: syn::Lit = nested.value()?.parse()?;
    match lit {
        syn::Lit::Float(f) => f.base10_parse(),
        syn::Lit::Int(i) => i.base10_parse::<u32>().map(f64::from),
        other => Err(syn::Error::new_spanned(other, "expected a version number")),
    }
}
