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

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Generics};

mod derive_enum;
mod derive_struct;
mod field_meta;

/// Entry point: dispatches on the shape of the annotated item.
pub fn derive_object(input: &DeriveInput) -> syn::Result<TokenStream> {
    match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => derive_struct::expand(input, fields),
            Fields::Unit => derive_struct::expand_unit(input),
            Fields::Unnamed(_) => Err(syn::Error::new_spanned(
                &input.ident,
                "GlazeObject supports structs with named fields only",
            )),
        },
        Data::Enum(data) => derive_enum::expand(input, data),
        Data::Union(_) => Err(syn::Error::new_spanned(
            &input.ident,
            "GlazeObject cannot be derived for unions",
        )),
    }
}

/// Adds the engine bounds every type parameter needs: the generated impls
/// traverse, rebuild and default-construct values of the parameter type.
pub(crate) fn with_engine_bounds(generics: &Generics) -> Generics {
    let mut generics = generics.clone();
    let params: Vec<_> = generics.type_params().map(|p| p.ident.clone()).collect();
    let where_clause = generics.make_where_clause();
    for ident in params {
        where_clause.predicates.push(syn::parse_quote! {
            #ident: glaze_core::reflect::Reflect
                + glaze_core::deser::FromJson
                + glaze_core::reflect::JsonDefault
                + 'static
        });
    }
    generics
}

/// `Some(1.25f64)` / `None` literal for an optional version marker.
pub(crate) fn version_expr(version: Option<f64>) -> TokenStream {
    match version {
        Some(v) => quote! { Some(#v) },
        None => quote! { None },
    }
}
