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

//! JSON structures for resources read from the cloud collaborators.
//!
//! Only the fields this crate actually consumes are modeled; everything
//! else in the service responses is ignored.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::types::{ClusterId, FlavorId, ImageId};

/// A compute flavor.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Flavor {
    /// Unique ID.
    pub id: FlavorId,
    /// Flavor name.
    pub name: String,
}

/// An image.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Image {
    /// Unique ID.
    pub id: ImageId,
    /// Image name.
    pub name: String,
}

/// Possible cluster statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClusterStatus {
    /// Cluster configuration is being validated.
    Validating,
    /// Waiting for the instances to come up.
    Waiting,
    /// Cluster is operational.
    Active,
    /// Cluster is being torn down.
    Decommissioning,
    /// Cluster has failed.
    Error,
}

/// A data processing cluster.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Cluster {
    /// Unique ID.
    pub id: ClusterId,
    /// Cluster name, assigned by the service.
    pub name: String,
    /// Current status.
    pub status: ClusterStatus,
    /// Creation date and time.
    pub created_at: DateTime<FixedOffset>,
}

/// A request to launch a new cluster.
///
/// The cluster name is picked by the launching collaborator.
#[derive(Debug, Clone, Serialize)]
pub struct NewCluster {
    /// Name of the provisioning plugin.
    pub plugin_name: String,
    /// Version of the Hadoop distribution supported by the plugin.
    pub hadoop_version: String,
    /// Flavor for the instances in the node groups.
    pub flavor_id: FlavorId,
    /// Image to boot the instances from.
    pub image_id: ImageId,
    /// Total number of instances in the cluster.
    pub node_count: u32,
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::{Cluster, ClusterStatus};

    #[test]
    fn test_cluster_from_json() {
        let cluster: Cluster = serde_json::from_value(json!({
            "id": "a7b3",
            "name": "vanilla-cluster",
            "status": "active",
            "created_at": "2026-08-08T10:21:00+00:00",
            "node_groups": []
        }))
        .unwrap();
        assert_eq!(cluster.id.as_ref(), "a7b3");
        assert_eq!(cluster.status, ClusterStatus::Active);
    }

    #[test]
    fn test_cluster_status_wire_form() {
        let status: ClusterStatus = serde_json::from_value(json!("decommissioning")).unwrap();
        assert_eq!(status, ClusterStatus::Decommissioning);
        assert_eq!(
            serde_json::to_value(ClusterStatus::Waiting).unwrap(),
            json!("waiting")
        );
    }
}
