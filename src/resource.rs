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

//! Resource type transformations for scenario parameters.
//!
//! A scenario parameter can reference a flavor or an image by a known `id`,
//! an exact `name` or a `regex`. The transformations here resolve such a
//! reference to a concrete id via the cloud API before the scenario runs.

use std::fmt::Debug;

use log::debug;
use regex::Regex;
use serde::Deserialize;

use super::client::Clients;
use super::protocol::{Flavor, Image};
use super::{Error, ErrorKind, Result};

/// A reference to a named cloud resource, as supplied in scenario arguments.
///
/// At most one of the fields is meaningfully used: a known `id` is returned
/// as is without consulting the cloud, a `name` must match one resource
/// exactly and a `regex` is searched for in resource names. Empty strings
/// behave as if the field was not supplied at all.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResourceSpec {
    id: Option<String>,
    name: Option<String>,
    regex: Option<String>,
}

impl ResourceSpec {
    /// Create a reference to a known id.
    pub fn from_id<S: Into<String>>(id: S) -> ResourceSpec {
        ResourceSpec {
            id: Some(id.into()),
            ..ResourceSpec::default()
        }
    }

    /// Create a reference to an exact name.
    pub fn from_name<S: Into<String>>(name: S) -> ResourceSpec {
        ResourceSpec {
            name: Some(name.into()),
            ..ResourceSpec::default()
        }
    }

    /// Create a reference matching a pattern against resource names.
    pub fn from_regex<S: Into<String>>(regex: S) -> ResourceSpec {
        ResourceSpec {
            regex: Some(regex.into()),
            ..ResourceSpec::default()
        }
    }

    /// The known id, if supplied and non-empty.
    pub fn id(&self) -> Option<&str> {
        nonempty(&self.id)
    }

    /// The exact name, if supplied and non-empty.
    pub fn name(&self) -> Option<&str> {
        nonempty(&self.name)
    }

    /// The name pattern, if supplied and non-empty.
    pub fn regex(&self) -> Option<&str> {
        nonempty(&self.regex)
    }
}

#[inline]
fn nonempty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// A resource that can be looked up by name.
pub trait NamedResource {
    /// Unique id of the resource.
    fn id(&self) -> &str;

    /// Human-readable name of the resource.
    fn name(&self) -> &str;
}

impl NamedResource for Flavor {
    fn id(&self) -> &str {
        self.id.as_ref()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl NamedResource for Image {
    fn id(&self) -> &str {
        self.id.as_ref()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Return the id of the resource whose name matches the reference.
///
/// When the reference contains a `name`, an anchored pattern built from it
/// is used; when it contains a `regex`, the raw pattern is used. The pattern
/// is searched for in resource names, and the lookup fails unless it matches
/// exactly one resource. `typename` only labels error messages.
pub fn id_from_name<R: NamedResource>(
    spec: &ResourceSpec,
    resources: &[R],
    typename: &str,
) -> Result<String> {
    let pattern = if let Some(name) = spec.name() {
        Regex::new(&format!("^{}$", name))?
    } else if let Some(regex) = spec.regex() {
        Regex::new(regex)?
    } else {
        return Err(Error::new(
            ErrorKind::InvalidScenarioArgument,
            format!(
                "{} 'id', 'name', or 'regex' not found in '{:?}'",
                capitalize(typename),
                spec
            ),
        ));
    };

    let matching: Vec<&R> = resources
        .iter()
        .filter(|resource| pattern.is_match(resource.name()))
        .collect();
    match matching.as_slice() {
        [] => Err(Error::new(
            ErrorKind::InvalidScenarioArgument,
            format!(
                "{} with pattern '{}' not found",
                capitalize(typename),
                pattern.as_str()
            ),
        )),
        [single] => Ok(single.id().to_string()),
        _ => Err(Error::new(
            ErrorKind::InvalidScenarioArgument,
            format!(
                "{} with name '{}' is ambiguous, possible matches by id: {}",
                capitalize(typename),
                pattern.as_str(),
                matching
                    .iter()
                    .map(|resource| resource.id())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        )),
    }
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// A transformation from a resource reference to a concrete id.
///
/// Variants differ only in which collaborator supplies the listing and in
/// the label used in error messages; the resolution algorithm is shared.
pub trait ResourceType: Debug {
    /// Label describing the resource type in error messages.
    fn typename(&self) -> &'static str;

    /// Transform a resource reference into an id.
    fn transform(&self, clients: &Clients, spec: &ResourceSpec) -> Result<String>;
}

/// Resolves flavor references via the Compute collaborator.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlavorType;

impl ResourceType for FlavorType {
    fn typename(&self) -> &'static str {
        "flavor"
    }

    fn transform(&self, clients: &Clients, spec: &ResourceSpec) -> Result<String> {
        if let Some(id) = spec.id() {
            return Ok(id.to_string());
        }
        debug!("Resolving flavor from {:?}", spec);
        let flavors = clients.compute().list_flavors()?;
        id_from_name(spec, &flavors, self.typename())
    }
}

/// Resolves image references via the Image collaborator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageType;

impl ResourceType for ImageType {
    fn typename(&self) -> &'static str {
        "image"
    }

    fn transform(&self, clients: &Clients, spec: &ResourceSpec) -> Result<String> {
        if let Some(id) = spec.id() {
            return Ok(id.to_string());
        }
        debug!("Resolving image from {:?}", spec);
        let images = clients.image().list_images()?;
        id_from_name(spec, &images, self.typename())
    }
}

#[cfg(test)]
mod test {
    use super::super::client::test::{fake_clients, BrokenCompute, BrokenImage, FakeDataProcessing};
    use super::super::client::Clients;
    use super::super::protocol::Flavor;
    use super::super::types::FlavorId;
    use super::super::ErrorKind;
    use super::{id_from_name, FlavorType, ImageType, ResourceSpec, ResourceType};

    fn flavors(pairs: &[(&str, &str)]) -> Vec<Flavor> {
        pairs
            .iter()
            .map(|(id, name)| Flavor {
                id: FlavorId::from(*id),
                name: String::from(*name),
            })
            .collect()
    }

    #[test]
    fn test_exact_name() {
        let resources = flavors(&[("1", "X"), ("2", "Y")]);
        let id = id_from_name(&ResourceSpec::from_name("X"), &resources, "flavor").unwrap();
        assert_eq!(id, "1");
    }

    #[test]
    fn test_name_is_anchored() {
        let resources = flavors(&[("1", "XY")]);
        let err = id_from_name(&ResourceSpec::from_name("X"), &resources, "flavor").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidScenarioArgument);
        assert!(err.message().contains("not found"), "{}", err);
        assert!(err.message().contains("^X$"), "{}", err);
    }

    #[test]
    fn test_ambiguous_name() {
        let resources = flavors(&[("1", "X"), ("2", "X")]);
        let err = id_from_name(&ResourceSpec::from_name("X"), &resources, "flavor").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidScenarioArgument);
        assert!(err.message().contains("ambiguous"), "{}", err);
        assert!(err.message().contains("1, 2"), "{}", err);
        assert!(err.message().starts_with("Flavor"), "{}", err);
    }

    #[test]
    fn test_regex() {
        let resources = flavors(&[("1", "abc"), ("2", "xyz")]);
        let id = id_from_name(&ResourceSpec::from_regex("^a.*"), &resources, "flavor").unwrap();
        assert_eq!(id, "1");
    }

    #[test]
    fn test_regex_is_substring_search() {
        let resources = flavors(&[("1", "abcd")]);
        let id = id_from_name(&ResourceSpec::from_regex("bc"), &resources, "flavor").unwrap();
        assert_eq!(id, "1");
    }

    #[test]
    fn test_invalid_regex() {
        let resources = flavors(&[("1", "abc")]);
        let err = id_from_name(&ResourceSpec::from_regex("["), &resources, "flavor").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidScenarioArgument);
    }

    #[test]
    fn test_missing_keys() {
        let resources = flavors(&[("1", "X")]);
        let err = id_from_name(&ResourceSpec::default(), &resources, "flavor").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidScenarioArgument);
        assert!(err.message().contains("'id', 'name', or 'regex'"), "{}", err);
    }

    #[test]
    fn test_empty_strings_behave_as_absent() {
        let resources = flavors(&[("1", "X")]);
        let spec = ResourceSpec {
            id: Some(String::new()),
            name: Some(String::new()),
            regex: Some(String::new()),
        };
        let err = id_from_name(&spec, &resources, "flavor").unwrap_err();
        assert!(err.message().contains("not found in"), "{}", err);
    }

    #[test]
    fn test_name_takes_priority_over_regex() {
        let resources = flavors(&[("1", "abc"), ("2", "other")]);
        let spec = ResourceSpec {
            id: None,
            name: Some(String::from("other")),
            regex: Some(String::from("^a.*")),
        };
        let id = id_from_name(&spec, &resources, "flavor").unwrap();
        assert_eq!(id, "2");
    }

    #[test]
    fn test_empty_resource_list_is_not_found() {
        let resources = flavors(&[]);
        let err = id_from_name(&ResourceSpec::from_name("X"), &resources, "flavor").unwrap_err();
        assert!(err.message().contains("not found"), "{}", err);
    }

    #[test]
    fn test_id_short_circuits_listing() {
        // Both listers fail, so a successful resolution proves that the
        // listing was never consulted.
        let clients = Clients::new(
            Box::new(BrokenCompute),
            Box::new(BrokenImage),
            Box::new(FakeDataProcessing::default()),
        );
        let spec = ResourceSpec::from_id("42");
        assert_eq!(FlavorType.transform(&clients, &spec).unwrap(), "42");
        assert_eq!(ImageType.transform(&clients, &spec).unwrap(), "42");
    }

    #[test]
    fn test_flavor_transform_resolves_name() {
        let clients = fake_clients(flavors(&[("42", "m1.small"), ("43", "m1.large")]), vec![]);
        let id = FlavorType
            .transform(&clients, &ResourceSpec::from_name("m1.small"))
            .unwrap();
        assert_eq!(id, "42");
    }

    #[test]
    fn test_image_transform_not_found() {
        let clients = fake_clients(vec![], vec![]);
        let err = ImageType
            .transform(&clients, &ResourceSpec::from_name("cirros"))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidScenarioArgument);
        assert!(err.message().starts_with("Image"), "{}", err);
    }

    #[test]
    fn test_transform_propagates_listing_failure() {
        let clients = Clients::new(
            Box::new(BrokenCompute),
            Box::new(BrokenImage),
            Box::new(FakeDataProcessing::default()),
        );
        let err = FlavorType
            .transform(&clients, &ResourceSpec::from_name("m1.small"))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OperationFailed);
    }
}
