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

//! The object navigator.
//!
//! A navigator owns one `(value, declared type)` pair. [`ObjectNavigator::accept`]
//! classifies the value's declared shape and drives the matching visitor
//! callback exactly once. The visitor recurses by asking the shared
//! [`NavigatorFactory`] for child navigators, so one ancestor stack spans the
//! whole root-to-leaf walk.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use crate::error::Error;
use crate::exclusion::ExclusionStrategy;
use crate::reflect::{resolve_value, FieldView, RefIdentity, Reflect, View};
use crate::typeinfo::TypeInfo;

/// Callback surface driven by the navigator.
///
/// Shape classification happens in the navigator; everything the callbacks
/// do with the data (building JSON nodes, filling a target object) is the
/// visitor's business.
pub trait Visitor {
    fn visit_null(&mut self, declared: &TypeInfo) -> Result<(), Error>;

    fn visit_enum(
        &mut self,
        value: &dyn Reflect,
        variant: &'static str,
        declared: &TypeInfo,
    ) -> Result<(), Error>;

    /// Returns true when a registered custom handler accepted the value;
    /// the navigator then stops classifying.
    fn visit_using_custom_handler(
        &mut self,
        value: &dyn Reflect,
        declared: &TypeInfo,
    ) -> Result<bool, Error>;

    fn visit_scalar(&mut self, scalar: &View<'_>, declared: &TypeInfo) -> Result<(), Error>;

    fn start_sequence(&mut self, declared: &TypeInfo) -> Result<(), Error>;

    fn visit_sequence_member(&mut self, member: &dyn Reflect, element: &TypeInfo)
        -> Result<(), Error>;

    fn start_map(&mut self, declared: &TypeInfo) -> Result<(), Error>;

    fn visit_map_entry(
        &mut self,
        key: &dyn Reflect,
        value: &dyn Reflect,
        element: &TypeInfo,
    ) -> Result<(), Error>;

    fn start_object(&mut self, declared: &TypeInfo) -> Result<(), Error>;

    fn visit_field(&mut self, field: &FieldView<'_>) -> Result<(), Error>;
}

/// The root-to-node path of reference identities.
///
/// At every point the stack holds exactly the ancestors of the node being
/// visited — never finished siblings — so membership equals "reachable by
/// following the current path", which is the cycle condition.
#[derive(Default)]
pub(crate) struct AncestorStack {
    entries: Vec<RefIdentity>,
}

impl AncestorStack {
    fn contains(&self, id: RefIdentity) -> bool {
        self.entries.contains(&id)
    }
}

/// Pops its identity when dropped, so the stack shrinks on every unwind
/// path, including failures.
struct AncestorGuard {
    stack: Rc<RefCell<AncestorStack>>,
}

impl Drop for AncestorGuard {
    fn drop(&mut self) {
        self.stack.borrow_mut().entries.pop();
    }
}

/// Builds navigators that share one exclusion strategy and one per-call
/// ancestor stack.
#[derive(Clone)]
pub(crate) struct NavigatorFactory {
    exclusion: Arc<dyn ExclusionStrategy>,
    ancestors: Rc<RefCell<AncestorStack>>,
}

impl NavigatorFactory {
    /// A factory with a fresh ancestor stack; one per root serialization.
    pub fn new(exclusion: Arc<dyn ExclusionStrategy>) -> NavigatorFactory {
        NavigatorFactory {
            exclusion,
            ancestors: Rc::new(RefCell::new(AncestorStack::default())),
        }
    }

    pub fn create<'v>(&self, value: &'v dyn Reflect, declared: TypeInfo) -> ObjectNavigator<'v> {
        ObjectNavigator {
            value,
            declared,
            exclusion: self.exclusion.clone(),
            ancestors: self.ancestors.clone(),
        }
    }
}

/// Drives one value through the visitor, classifying by declared shape.
pub struct ObjectNavigator<'v> {
    value: &'v dyn Reflect,
    declared: TypeInfo,
    exclusion: Arc<dyn ExclusionStrategy>,
    ancestors: Rc<RefCell<AncestorStack>>,
}

impl<'v> ObjectNavigator<'v> {
    /// Classification order: null, enum, custom handler, sequence, map,
    /// scalar, object-with-fields. Class-level exclusion is checked before
    /// any callback; a skipped class produces no callbacks at all.
    pub fn accept(&self, visitor: &mut dyn Visitor) -> Result<(), Error> {
        let value = resolve_value(self.value);
        if value.is_null() {
            return visitor.visit_null(&self.declared);
        }
        if let Some(class) = value.descriptor() {
            if self.exclusion.should_skip_class(&class) {
                return Ok(());
            }
        }
        let view = match value.view() {
            View::Variant(name) => return visitor.visit_enum(value, name, &self.declared),
            other => other,
        };
        // Structured values join the ancestor path before the custom-handler
        // callback, so a handler recursing through its context still trips
        // cycle detection.
        let _guard = match &view {
            View::Seq(_) | View::Entries(_) | View::Fields(_) => Some(self.enter(value)?),
            _ => None,
        };
        if visitor.visit_using_custom_handler(value, &self.declared)? {
            return Ok(());
        }
        match view {
            View::Seq(items) => {
                visitor.start_sequence(&self.declared)?;
                let element = self.declared.element();
                for item in items {
                    visitor.visit_sequence_member(item, &element)?;
                }
                Ok(())
            }
            View::Entries(entries) => {
                visitor.start_map(&self.declared)?;
                let element = self.declared.element();
                for (key, entry_value) in entries {
                    visitor.visit_map_entry(key, entry_value, &element)?;
                }
                Ok(())
            }
            View::Fields(fields) => {
                visitor.start_object(&self.declared)?;
                for field in &fields {
                    if !self.exclusion.should_skip_field(&field.descriptor) {
                        visitor.visit_field(field)?;
                    }
                }
                Ok(())
            }
            View::Null => visitor.visit_null(&self.declared),
            View::Inaccessible(reason) => Err(Error::access(
                self.declared.to_string(),
                "value",
                Error::mismatch("a readable value", reason),
            )),
            scalar => visitor.visit_scalar(&scalar, &self.declared),
        }
    }

    /// Pushes the value's identity onto the ancestor path; a duplicate means
    /// the path revisits an ancestor, which is a cycle.
    fn enter(&self, value: &dyn Reflect) -> Result<AncestorGuard, Error> {
        let id = value.identity();
        let mut stack = self.ancestors.borrow_mut();
        if stack.contains(id) {
            return Err(Error::cycle(self.declared.to_string()));
        }
        stack.entries.push(id);
        drop(stack);
        Ok(AncestorGuard {
            stack: self.ancestors.clone(),
        })
    }
}
