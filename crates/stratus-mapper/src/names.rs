use stratus_cloud::Deferred;
use stratus_cloud::component::{self, short_name};
use std::collections::BTreeMap;

/// Deterministic naming of the components of one service
pub(crate) struct Names {
    prefix: String,
    service: String,
}

impl Names {
    pub fn new(datacenter: &str, service: &str) -> Self {
        Self {
            prefix: format!("{}-{}-", datacenter, service),
            service: service.to_string(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// `<datacenter>-<service>-<local>`
    pub fn full(&self, local: &str) -> String {
        format!("{}{}", self.prefix, local)
    }

    pub fn full_all(&self, locals: &[String]) -> Vec<String> {
        locals.iter().map(|l| self.full(l)).collect()
    }

    /// Name of the `index`-th (one based) member of an expanded group
    pub fn member(&self, local: &str, index: u32) -> String {
        format!("{}{}-{}", self.prefix, local, index)
    }

    pub fn short<'a>(&self, name: &'a str) -> &'a str {
        short_name(name, &self.prefix)
    }

    pub fn short_all(&self, names: &[String]) -> Vec<String> {
        component::short_names(names, &self.prefix)
    }

    pub fn tags(&self, name: &str) -> BTreeMap<String, String> {
        component::tags(name, &self.service)
    }

    pub fn group_tags(&self, name: &str, key: &str, group: &str) -> BTreeMap<String, String> {
        let mut tags = self.tags(name);
        tags.insert(key.to_string(), group.to_string());
        tags
    }

    /// References to `field` of the named components of `collection`
    pub fn references(&self, collection: &str, names: &[String], field: &str) -> Vec<Deferred> {
        names
            .iter()
            .map(|n| Deferred::by_name(collection, n, field))
            .collect()
    }
}
