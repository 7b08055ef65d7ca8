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

//! Cluster lifecycle scenarios.

use log::debug;
use serde::Deserialize;
use serde_json::Value;

use super::super::client::Clients;
use super::super::protocol::NewCluster;
use super::super::resource::FlavorType;
use super::super::scenario::{Context, Scenario, ScenarioArgs};
use super::super::types::{FlavorId, ImageId};
use super::super::{Error, ErrorKind, Result};

/// Context key under which the image for each tenant is registered.
pub const SAHARA_IMAGES: &str = "sahara_images";

#[derive(Debug, Deserialize)]
struct ClusterArgs {
    flavor: FlavorId,
    node_count: u32,
    #[serde(default = "default_plugin_name")]
    plugin_name: String,
    #[serde(default = "default_hadoop_version")]
    hadoop_version: String,
}

fn default_plugin_name() -> String {
    String::from("vanilla")
}

fn default_hadoop_version() -> String {
    String::from("2.3.0")
}

/// The cluster launch and delete scenario.
///
/// Launches a Hadoop cluster, waits until it becomes active and deletes it.
/// The `flavor` argument is a resource reference and is resolved to an id
/// before the body runs; the image comes from the per-tenant context state.
pub fn create_and_delete_cluster() -> Scenario {
    Scenario::new("sahara.create_and_delete_cluster", run).with_resource_type("flavor", &FlavorType)
}

fn run(clients: &Clients, context: &Context, args: &ScenarioArgs) -> Result<()> {
    let args: ClusterArgs = serde_json::from_value(Value::Object(args.clone()))?;
    let image_id = sahara_image(context)?;
    debug!("Using image {}", image_id);

    let cluster = clients.data_processing().launch_cluster(&NewCluster {
        plugin_name: args.plugin_name,
        hadoop_version: args.hadoop_version,
        flavor_id: args.flavor,
        image_id,
        node_count: args.node_count,
    })?;

    clients.data_processing().delete_cluster(&cluster.id)
}

/// Image registered for the current tenant by the image context.
fn sahara_image(context: &Context) -> Result<ImageId> {
    context
        .get(SAHARA_IMAGES)
        .and_then(|images| images.get(context.tenant_id()))
        .and_then(Value::as_str)
        .map(ImageId::from)
        .ok_or_else(|| {
            Error::new(
                ErrorKind::InvalidScenarioArgument,
                format!(
                    "No image registered for tenant '{}'",
                    context.tenant_id()
                ),
            )
        })
}
