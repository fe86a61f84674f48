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

//! Exclusion policies.
//!
//! An [`ExclusionStrategy`] is a pure predicate over field and class
//! metadata; the navigator consults it before visiting a field and before
//! traversing a class. Strategies compose as a [`Disjunction`]: a member is
//! skipped when any strategy says so, so adding a strategy can only shrink
//! the output.

use crate::reflect::{ClassDescriptor, FieldDescriptor, FieldMarkers};

/// Decides whether a field or class is suppressed from traversal.
pub trait ExclusionStrategy: Send + Sync {
    fn should_skip_field(&self, field: &FieldDescriptor) -> bool;
    fn should_skip_class(&self, class: &ClassDescriptor) -> bool;
}

/// Skips fields whose marker bits intersect a configured mask.
///
/// Synthetic fields are additionally skipped unless that is explicitly
/// turned off.
#[derive(Clone, Debug)]
pub struct MarkerExclusion {
    mask: FieldMarkers,
    skip_synthetic: bool,
}

impl MarkerExclusion {
    /// The default mask: explicit `transient` opt-outs.
    pub const DEFAULT_MASK: FieldMarkers = FieldMarkers::TRANSIENT;

    pub fn new(mask: FieldMarkers) -> MarkerExclusion {
        MarkerExclusion {
            mask,
            skip_synthetic: true,
        }
    }
}

impl Default for MarkerExclusion {
    fn default() -> Self {
        MarkerExclusion::new(Self::DEFAULT_MASK)
    }
}

impl ExclusionStrategy for MarkerExclusion {
    fn should_skip_field(&self, field: &FieldDescriptor) -> bool {
        field.markers.intersects(self.mask)
            || (self.skip_synthetic && field.markers.contains(FieldMarkers::SYNTHETIC))
    }

    fn should_skip_class(&self, _class: &ClassDescriptor) -> bool {
        false
    }
}

/// The inner-scope rule: skips scope-captured synthetic fields and types
/// declared in function-local scope.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScopeExclusion;

impl ExclusionStrategy for ScopeExclusion {
    fn should_skip_field(&self, field: &FieldDescriptor) -> bool {
        field.markers.contains(FieldMarkers::SYNTHETIC)
    }

    fn should_skip_class(&self, class: &ClassDescriptor) -> bool {
        class.local
    }
}

/// Skips members whose declared minimum version exceeds the configured
/// ceiling. A field without its own version marker inherits its class's;
/// a member with neither is never skipped by this rule.
#[derive(Clone, Copy, Debug)]
pub struct VersionExclusion {
    ceiling: f64,
}

impl VersionExclusion {
    pub fn new(ceiling: f64) -> VersionExclusion {
        VersionExclusion { ceiling }
    }
}

impl ExclusionStrategy for VersionExclusion {
    fn should_skip_field(&self, field: &FieldDescriptor) -> bool {
        field
            .effective_since()
            .is_some_and(|since| since > self.ceiling)
    }

    fn should_skip_class(&self, class: &ClassDescriptor) -> bool {
        class.since.is_some_and(|since| since > self.ceiling)
    }
}

/// Ordered OR-composition of strategies; evaluates children in insertion
/// order and short-circuits on the first match.
#[derive(Default)]
pub struct Disjunction {
    children: Vec<Box<dyn ExclusionStrategy>>,
}

impl Disjunction {
    pub fn new() -> Disjunction {
        Disjunction::default()
    }

    pub fn with(mut self, strategy: impl ExclusionStrategy + 'static) -> Disjunction {
        self.children.push(Box::new(strategy));
        self
    }
}

impl ExclusionStrategy for Disjunction {
    fn should_skip_field(&self, field: &FieldDescriptor) -> bool {
        self.children.iter().any(|s| s.should_skip_field(field))
    }

    fn should_skip_class(&self, class: &ClassDescriptor) -> bool {
        self.children.iter().any(|s| s.should_skip_class(class))
    }
}
