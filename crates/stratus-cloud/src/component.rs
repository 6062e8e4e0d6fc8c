//! Component abstraction
//!
//! Every provisioning resource type exposes its tags, the identifier the
//! provider assigned to it and its logical name. The helpers below search
//! and filter heterogeneous collections through that contract only.

use crate::deferred::Deferred;
use std::collections::BTreeMap;

/// Tag carrying the full component name
pub const TAG_NAME: &str = "Name";
/// Tag carrying the service name
pub const TAG_SERVICE: &str = "stratus.service";
/// Tag linking an expanded instance to its authored group
pub const TAG_INSTANCE_GROUP: &str = "stratus.instance_group";
/// Tag linking an expanded EBS volume to its authored group
pub const TAG_VOLUME_GROUP: &str = "stratus.volume_group";
/// Tag linking a NAT component to its authored gateway
pub const TAG_NAT_GATEWAY: &str = "stratus.nat_gateway";

pub trait Component {
    fn tags(&self) -> &BTreeMap<String, String>;

    /// Identifier assigned by the provider, empty until provisioned
    fn provider_id(&self) -> &str;

    fn component_name(&self) -> &str;

    fn tag(&self, key: &str) -> Option<&str> {
        self.tags().get(key).map(String::as_str)
    }
}

pub fn find_by_name<'a, C: Component>(items: &'a [C], name: &str) -> Option<&'a C> {
    items.iter().find(|c| c.component_name() == name)
}

/// Lookup by provider id; unprovisioned components never match
pub fn find_by_provider_id<'a, C: Component>(items: &'a [C], id: &str) -> Option<&'a C> {
    if id.is_empty() {
        return None;
    }
    items.iter().find(|c| c.provider_id() == id)
}

pub fn filter_by_tag<'a, C: Component>(items: &'a [C], key: &str, value: &str) -> Vec<&'a C> {
    items.iter().filter(|c| c.tag(key) == Some(value)).collect()
}

/// Distinct values of a tag, in first-seen order
pub fn tag_values<C: Component>(items: &[C], key: &str) -> Vec<String> {
    let mut values: Vec<String> = Vec::new();
    for value in items.iter().filter_map(|c| c.tag(key)) {
        if !values.iter().any(|v| v == value) {
            values.push(value.to_string());
        }
    }
    values
}

/// Resolve a deferred field to the component it points at.
///
/// References are matched by name, literal values by provider id.
pub fn resolve<'a, C: Component>(items: &'a [C], value: &Deferred) -> Option<&'a C> {
    match value {
        Deferred::Reference(r) => r.name().and_then(|name| find_by_name(items, name)),
        Deferred::Literal(id) => find_by_provider_id(items, id),
    }
}

/// Component names for a list of deferred fields; unresolvable entries are skipped
pub fn names_from_ids<C: Component>(items: &[C], values: &[Deferred]) -> Vec<String> {
    values
        .iter()
        .filter_map(|v| resolve(items, v))
        .map(|c| c.component_name().to_string())
        .collect()
}

/// Strip the `<datacenter>-<service>-` prefix from a component name
pub fn short_name<'a>(name: &'a str, prefix: &str) -> &'a str {
    name.strip_prefix(prefix).unwrap_or(name)
}

pub fn short_names(names: &[String], prefix: &str) -> Vec<String> {
    names
        .iter()
        .map(|n| short_name(n, prefix).to_string())
        .collect()
}

/// Standard tag set for a component
pub fn tags(name: &str, service: &str) -> BTreeMap<String, String> {
    BTreeMap::from([
        (TAG_NAME.to_string(), name.to_string()),
        (TAG_SERVICE.to_string(), service.to_string()),
    ])
}
