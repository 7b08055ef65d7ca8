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

//! Handles for the external OpenStack clients.
//!
//! The calling framework owns authentication, transport and polling and
//! injects implementations of these traits into every scenario invocation.

use std::fmt::Debug;

use super::protocol::{Cluster, Flavor, Image, NewCluster};
use super::types::ClusterId;
use super::Result;

/// Listing calls of the Compute service.
pub trait ComputeApi: Debug {
    /// List all flavors visible to the current project.
    fn list_flavors(&self) -> Result<Vec<Flavor>>;
}

/// Listing calls of the Image service.
pub trait ImageApi: Debug {
    /// List all images visible to the current project.
    fn list_images(&self) -> Result<Vec<Image>>;
}

/// Cluster lifecycle calls of the Data Processing service.
///
/// Implementations block until the requested state is reached; polling and
/// time out handling live entirely behind this trait.
pub trait DataProcessingApi: Debug {
    /// Create a cluster and wait for it to become active.
    fn launch_cluster(&self, request: &NewCluster) -> Result<Cluster>;

    /// Delete a cluster and wait for it to be gone.
    fn delete_cluster(&self, id: &ClusterId) -> Result<()>;
}

/// Client handles injected by the calling framework.
#[derive(Debug)]
pub struct Clients {
    compute: Box<dyn ComputeApi>,
    image: Box<dyn ImageApi>,
    data_processing: Box<dyn DataProcessingApi>,
}

impl Clients {
    /// Create a new set of client handles.
    pub fn new(
        compute: Box<dyn ComputeApi>,
        image: Box<dyn ImageApi>,
        data_processing: Box<dyn DataProcessingApi>,
    ) -> Clients {
        Clients {
            compute,
            image,
            data_processing,
        }
    }

    /// Compute service handle.
    pub fn compute(&self) -> &dyn ComputeApi {
        self.compute.as_ref()
    }

    /// Image service handle.
    pub fn image(&self) -> &dyn ImageApi {
        self.image.as_ref()
    }

    /// Data processing service handle.
    pub fn data_processing(&self) -> &dyn DataProcessingApi {
        self.data_processing.as_ref()
    }
}
