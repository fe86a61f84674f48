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

//! Code generation for structs with named fields.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, FieldsNamed, Ident, Type};

use super::field_meta::{parse_field_meta, parse_type_meta};
use super::{version_expr, with_engine_bounds};

struct StructField {
    ident: Ident,
    ty: Type,
    json_name: String,
    marker_bits: u32,
    since: TokenStream,
}

const TRANSIENT_BIT: u32 = 1;
const SYNTHETIC_BIT: u32 = 1 << 1;

pub fn expand(input: &DeriveInput, fields: &FieldsNamed) -> syn::Result<TokenStream> {
    let parsed: Vec<StructField> = fields
        .named
        .iter()
        .map(|field| {
            let meta = parse_field_meta(field)?;
            let ident = field.ident.clone().expect("named field");
            let mut marker_bits = 0;
            if meta.transient {
                marker_bits |= TRANSIENT_BIT;
            }
            if meta.synthetic {
                marker_bits |= SYNTHETIC_BIT;
            }
            Ok(StructField {
                json_name: meta.rename.unwrap_or_else(|| ident.to_string()),
                ident,
                ty: field.ty.clone(),
                marker_bits,
                since: version_expr(meta.since),
            })
        })
        .collect::<syn::Result<_>>()?;
    expand_with_fields(input, &parsed)
}

pub fn expand_unit(input: &DeriveInput) -> syn::Result<TokenStream> {
    expand_with_fields(input, &[])
}

fn expand_with_fields(input: &DeriveInput, fields: &[StructField]) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let type_meta = parse_type_meta(&input.attrs)?;
    let class_since = version_expr(type_meta.since);
    let local = type_meta.local;

    let generics = with_engine_bounds(&input.generics);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let type_params: Vec<_> = input.generics.type_params().map(|p| &p.ident).collect();

    let class_descriptor = quote! {
        glaze_core::reflect::ClassDescriptor {
            name: concat!(module_path!(), "::", stringify!(#name)),
            since: #class_since,
            local: #local,
        }
    };

    let descriptors: Vec<TokenStream> = fields
        .iter()
        .map(|field| {
            let ident = &field.ident;
            let json_name = &field.json_name;
            let marker_bits = field.marker_bits;
            let since = &field.since;
            quote! {
                glaze_core::reflect::FieldDescriptor {
                    name: stringify!(#ident),
                    json_name: #json_name,
                    markers: glaze_core::reflect::FieldMarkers::from_bits_truncate(#marker_bits),
                    since: #since,
                    class_since: #class_since,
                }
            }
        })
        .collect();

    let field_views = fields.iter().zip(&descriptors).map(|(field, descriptor)| {
        let ident = &field.ident;
        let ty = &field.ty;
        quote! {
            glaze_core::reflect::FieldView {
                descriptor: #descriptor,
                declared: <#ty as glaze_core::reflect::Reflect>::type_info(),
                value: &self.#ident,
            },
        }
    });

    let default_fields = fields.iter().map(|field| {
        let ident = &field.ident;
        let ty = &field.ty;
        quote! {
            #ident: <#ty as glaze_core::reflect::JsonDefault>::json_default(),
        }
    });

    let read_fields: Vec<TokenStream> = fields.iter().zip(&descriptors).map(|(field, descriptor)| {
        let ident = &field.ident;
        let json_name = &field.json_name;
        quote! {
            {
                let descriptor = #descriptor;
                if !ctx.should_skip_field(&descriptor) {
                    if let Some(member) = members.get(#json_name) {
                        if !member.is_null() {
                            target.#ident = ctx.deserialize(member).map_err(|cause| {
                                glaze_core::error::Error::access(
                                    concat!(module_path!(), "::", stringify!(#name)),
                                    stringify!(#ident),
                                    cause,
                                )
                            })?;
                        }
                    }
                }
            }
        }
    }).collect();

    // Field-less shapes still insist on the object form of the document.
    let read_body = if read_fields.is_empty() {
        quote! {
            node.as_object().ok_or_else(|| {
                glaze_core::error::Error::mismatch("object", node.kind())
            })?;
            ctx.construct::<Self>()
        }
    } else {
        quote! {
            let members = node.as_object().ok_or_else(|| {
                glaze_core::error::Error::mismatch("object", node.kind())
            })?;
            let mut target: Self = ctx.construct()?;
            #(#read_fields)*
            Ok(target)
        }
    };

    Ok(quote! {
        impl #impl_generics glaze_core::reflect::Reflect for #name #ty_generics #where_clause {
            fn type_info() -> glaze_core::typeinfo::TypeInfo {
                glaze_core::typeinfo::TypeInfo::object_with_args(
                    concat!(module_path!(), "::", stringify!(#name)),
                    vec![
                        #(<#type_params as glaze_core::reflect::Reflect>::type_info(),)*
                    ],
                )
            }

            fn view(&self) -> glaze_core::reflect::View<'_> {
                glaze_core::reflect::View::Fields(vec![
                    #(#field_views)*
                ])
            }

            fn descriptor(&self) -> Option<glaze_core::reflect::ClassDescriptor> {
                Some(#class_descriptor)
            }
        }

        impl #impl_generics glaze_core::reflect::JsonDefault for #name #ty_generics #where_clause {
            fn json_default() -> Self {
                Self {
                    #(#default_fields)*
                }
            }
        }

        impl #impl_generics glaze_core::deser::FromJson for #name #ty_generics #where_clause {
            fn from_node(
                node: &glaze_core::node::JsonNode,
                ctx: &mut glaze_core::deser::DeserializeContext<'_>,
            ) -> Result<Self, glaze_core::error::Error> {
                let class = #class_descriptor;
                if ctx.should_skip_class(&class) {
                    return ctx.construct::<Self>();
                }
                #read_body
            }
        }
    })
}
