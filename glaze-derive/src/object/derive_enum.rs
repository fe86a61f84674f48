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

//! Code generation for fieldless enums, rendered by external variant name.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{DataEnum, DeriveInput, Fields};

use super::field_meta::{parse_type_meta, parse_variant_rename};
use super::version_expr;

pub fn expand(input: &DeriveInput, data: &DataEnum) -> syn::Result<TokenStream> {
    let name = &input.ident;
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "GlazeObject enums cannot be generic",
        ));
    }
    if data.variants.is_empty() {
        return Err(syn::Error::new_spanned(
            name,
            "GlazeObject enums need at least one variant",
        ));
    }

    let mut idents = Vec::new();
    let mut names = Vec::new();
    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "GlazeObject enum variants cannot carry data",
            ));
        }
        let external = parse_variant_rename(variant)?.unwrap_or_else(|| variant.ident.to_string());
        idents.push(variant.ident.clone());
        names.push(external);
    }
    let first = &idents[0];

    let type_meta = parse_type_meta(&input.attrs)?;
    let class_since = version_expr(type_meta.since);
    let local = type_meta.local;

    Ok(quote! {
        impl glaze_core::reflect::Reflect for #name {
            fn type_info() -> glaze_core::typeinfo::TypeInfo {
                glaze_core::typeinfo::TypeInfo::enumeration(
                    concat!(module_path!(), "::", stringify!(#name)),
                )
            }

            fn view(&self) -> glaze_core::reflect::View<'_> {
                glaze_core::reflect::View::Variant(match self {
                    #(Self::#idents => #names,)*
                })
            }

            fn descriptor(&self) -> Option<glaze_core::reflect::ClassDescriptor> {
                Some(glaze_core::reflect::ClassDescriptor {
                    name: concat!(module_path!(), "::", stringify!(#name)),
                    since: #class_since,
                    local: #local,
                })
            }
        }

        impl glaze_core::reflect::JsonDefault for #name {
            fn json_default() -> Self {
                Self::#first
            }
        }

        impl glaze_core::deser::FromJson for #name {
            fn from_node(
                node: &glaze_core::node::JsonNode,
                ctx: &mut glaze_core::deser::DeserializeContext<'_>,
            ) -> Result<Self, glaze_core::error::Error> {
                let _ = ctx;
                let text = node.as_str().ok_or_else(|| {
                    glaze_core::error::Error::mismatch("string", node.kind())
                })?;
                match text {
                    #(#names => Ok(Self::#idents),)*
                    _ => Err(glaze_core::error::Error::mismatch(
                        concat!("a variant of ", stringify!(#name)),
                        "unknown variant name",
                    )),
                }
            }
        }
    })
}
