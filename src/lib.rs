// Copyright 2026 The stackbench Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Scenario-based benchmarking primitives for OpenStack clouds.
//!
//! A benchmark scenario often takes a flavor or an image as a parameter.
//! Rather than forcing users to hard-code ids, a scenario declares such
//! parameters as resource references, and the calling framework resolves
//! them against the cloud (by id, exact name or regex) before the scenario
//! body runs. The resolution must be unambiguous: zero or multiple matches
//! fail with a descriptive error.
//!
//! The cloud clients themselves, context setup and the execution engine are
//! external collaborators; see the [`client`](client/index.html) module for
//! the traits the embedding framework implements.
//!
//! # Example
//!
//! Resolving a flavor reference against a listing:
//!
//! ```
//! use stackbench::{id_from_name, NamedResource, ResourceSpec};
//!
//! struct Flavor {
//!     id: String,
//!     name: String,
//! }
//!
//! impl NamedResource for Flavor {
//!     fn id(&self) -> &str {
//!         &self.id
//!     }
//!
//!     fn name(&self) -> &str {
//!         &self.name
//!     }
//! }
//!
//! let flavors = vec![Flavor {
//!     id: "42".into(),
//!     name: "m1.small".into(),
//! }];
//! let id = id_from_name(&ResourceSpec::from_name("m1.small"), &flavors, "flavor")?;
//! assert_eq!(id, "42");
//! # Ok::<(), stackbench::Error>(())
//! ```

// NOTE: we do not use generic deny(warnings) to avoid breakages with new
// versions of the compiler. Add more warnings here as you discover them.
// Taken from https://github.com/rust-unofficial/patterns/
#![deny(
    dead_code,
    improper_ctypes,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    non_shorthand_field_patterns,
    no_mangle_generic_items,
    overflowing_literals,
    path_statements,
    patterns_in_fns_without_body,
    trivial_casts,
    trivial_numeric_casts,
    unconditional_recursion,
    unsafe_code,
    unused,
    unused_allocation,
    unused_comparisons,
    unused_import_braces,
    unused_parens,
    unused_qualifications,
    unused_results,
    while_true
)]

pub mod client;
mod error;
pub mod protocol;
mod resource;
pub mod sahara;
mod scenario;
mod types;

pub use error::{Error, ErrorKind, Result};
pub use resource::{
    id_from_name, FlavorType, ImageType, NamedResource, ResourceSpec, ResourceType,
};
pub use scenario::{Context, Preprocessors, Scenario, ScenarioArgs, ScenarioFn};
pub use types::{ClusterId, FlavorId, ImageId};
