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

//! Scenario registration and parameter preprocessing.
//!
//! A scenario declares which of its parameters are resource references by
//! attaching resource type transformations to them. The calling framework
//! resolves those references against the cloud before the scenario body
//! runs, so the body only ever sees concrete ids.

use std::collections::HashMap;

use log::debug;
use serde_json::{Map, Value};

use super::client::Clients;
use super::resource::{ResourceSpec, ResourceType};
use super::Result;

/// Arguments of a single scenario invocation.
pub type ScenarioArgs = Map<String, Value>;

/// Signature of a benchmark scenario function.
pub type ScenarioFn = fn(&Clients, &Context, &ScenarioArgs) -> Result<()>;

/// Mapping of parameter names to the transformations applied to them.
pub type Preprocessors = HashMap<String, &'static dyn ResourceType>;

/// Framework-injected state for one scenario invocation.
#[derive(Debug, Clone, Default)]
pub struct Context {
    tenant_id: String,
    data: Map<String, Value>,
}

impl Context {
    /// Create a context for the given tenant.
    pub fn new<S: Into<String>>(tenant_id: S) -> Context {
        Context {
            tenant_id: tenant_id.into(),
            data: Map::new(),
        }
    }

    /// Add a value to the context state.
    pub fn with<S: Into<String>>(mut self, key: S, value: Value) -> Context {
        let _ = self.data.insert(key.into(), value);
        self
    }

    /// Id of the tenant the scenario runs for.
    pub fn tenant_id(&self) -> &str {
        &self.tenant_id
    }

    /// Look up a value in the context state.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }
}

/// A benchmark scenario with its attached parameter transformations.
#[derive(Debug)]
pub struct Scenario {
    name: String,
    func: ScenarioFn,
    preprocessors: Preprocessors,
}

impl Scenario {
    /// Create a scenario around a function, with no transformations attached.
    pub fn new<S: Into<String>>(name: S, func: ScenarioFn) -> Scenario {
        Scenario {
            name: name.into(),
            func,
            preprocessors: Preprocessors::new(),
        }
    }

    /// Attach a resource type transformation to a parameter.
    ///
    /// Does not alter the scenario function or its signature. May be applied
    /// any number of times; mappings accumulate, and a later mapping for the
    /// same parameter replaces the earlier one.
    pub fn with_resource_type<S: Into<String>>(
        mut self,
        param: S,
        resource_type: &'static dyn ResourceType,
    ) -> Scenario {
        let _ = self.preprocessors.insert(param.into(), resource_type);
        self
    }

    /// Name of the scenario.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The parameter transformations attached to this scenario.
    pub fn preprocessors(&self) -> &Preprocessors {
        &self.preprocessors
    }

    /// Resolve all mapped parameters present in `args` to ids.
    ///
    /// Each mapped value is read as a resource reference, transformed via
    /// the matching collaborator and substituted back as a plain id string.
    /// Unmapped arguments, and mapped parameters absent from `args`, pass
    /// through untouched.
    pub fn apply_preprocessors(
        &self,
        clients: &Clients,
        args: &ScenarioArgs,
    ) -> Result<ScenarioArgs> {
        let mut resolved = args.clone();
        for (param, resource_type) in &self.preprocessors {
            if let Some(value) = args.get(param) {
                let spec: ResourceSpec = serde_json::from_value(value.clone())?;
                let id = resource_type.transform(clients, &spec)?;
                debug!(
                    "Resolved {} '{}' of scenario {} to {}",
                    resource_type.typename(),
                    param,
                    self.name,
                    id
                );
                let _ = resolved.insert(param.clone(), Value::String(id));
            }
        }
        Ok(resolved)
    }

    /// Resolve mapped parameters, then invoke the scenario function.
    pub fn run(&self, clients: &Clients, context: &Context, args: &ScenarioArgs) -> Result<()> {
        let resolved = self.apply_preprocessors(clients, args)?;
        debug!("Running scenario {}", self.name);
        (self.func)(clients, context, &resolved)
    }
}
