//! Deferred references
//!
//! A field of one component that is only known once another component has
//! been provisioned is written as a reference to that component:
//!
//! ```text
//! $(networks.items.#[name="dc-svc-web"].network_aws_id)
//! $(datacenters.items.0.region)
//! ```
//!
//! On the wire a [`Deferred`] is a plain string, so provider-observed
//! literal values and references share the same fields.

use crate::error::CloudError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A literal value or a reference resolved at provisioning time
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Deferred {
    Literal(String),
    Reference(Reference),
}

/// `$(<collection>.items.<selector>.<field>)`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Reference {
    pub collection: String,
    pub selector: Selector,
    pub field: String,
}

/// Which item of the collection a reference points at
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selector {
    /// Positional, used for singleton collections
    Index(usize),
    /// `#[<field>="<value>"]`
    Match { field: String, value: String },
}

impl Deferred {
    pub fn literal(value: impl Into<String>) -> Self {
        Deferred::Literal(value.into())
    }

    /// Reference the item of `collection` whose name is `name`
    pub fn by_name(collection: &str, name: &str, field: &str) -> Self {
        Deferred::Reference(Reference {
            collection: collection.to_string(),
            selector: Selector::Match {
                field: "name".to_string(),
                value: name.to_string(),
            },
            field: field.to_string(),
        })
    }

    /// Reference the first item of a singleton collection
    pub fn first(collection: &str, field: &str) -> Self {
        Deferred::Reference(Reference {
            collection: collection.to_string(),
            selector: Selector::Index(0),
            field: field.to_string(),
        })
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Deferred::Literal(v) if v.is_empty())
    }

    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Deferred::Literal(v) => Some(v),
            Deferred::Reference(_) => None,
        }
    }

    pub fn as_reference(&self) -> Option<&Reference> {
        match self {
            Deferred::Reference(r) => Some(r),
            Deferred::Literal(_) => None,
        }
    }

    /// Name of the referenced component, for `#[name="..."]` references
    pub fn referenced_name(&self) -> Option<&str> {
        self.as_reference().and_then(Reference::name)
    }
}

impl Reference {
    /// The matched name, when the selector matches on `name`
    pub fn name(&self) -> Option<&str> {
        match &self.selector {
            Selector::Match { field, value } if field == "name" => Some(value),
            _ => None,
        }
    }
}

impl Default for Deferred {
    fn default() -> Self {
        Deferred::Literal(String::new())
    }
}

impl From<&str> for Deferred {
    fn from(value: &str) -> Self {
        Deferred::Literal(value.to_string())
    }
}

impl fmt::Display for Deferred {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Deferred::Literal(v) => write!(f, "{}", v),
            Deferred::Reference(r) => write!(f, "{}", r),
        }
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.selector {
            Selector::Index(i) => write!(f, "$({}.items.{}.{})", self.collection, i, self.field),
            Selector::Match { field, value } => write!(
                f,
                "$({}.items.#[{}=\"{}\"].{})",
                self.collection, field, value, self.field
            ),
        }
    }
}

impl FromStr for Deferred {
    type Err = CloudError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.starts_with("$(") {
            return Ok(Deferred::Literal(s.to_string()));
        }
        s.parse().map(Deferred::Reference)
    }
}

impl FromStr for Reference {
    type Err = CloudError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CloudError::InvalidReference(s.to_string());

        let inner = s
            .strip_prefix("$(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(invalid)?;

        let (collection, rest) = inner.split_once(".items.").ok_or_else(invalid)?;
        if collection.is_empty() {
            return Err(invalid());
        }

        let (selector, field) = if let Some(matcher) = rest.strip_prefix("#[") {
            // The matched value may itself contain dots, so split on the
            // closing `"].` rather than on the first dot.
            let (condition, field) = matcher.split_once("\"].").ok_or_else(invalid)?;
            let (key, value) = condition.split_once("=\"").ok_or_else(invalid)?;
            let selector = Selector::Match {
                field: key.to_string(),
                value: value.to_string(),
            };
            (selector, field)
        } else {
            let (index, field) = rest.split_once('.').ok_or_else(invalid)?;
            let index = index.parse().map_err(|_| invalid())?;
            (Selector::Index(index), field)
        };

        if field.is_empty() {
            return Err(invalid());
        }

        Ok(Reference {
            collection: collection.to_string(),
            selector,
            field: field.to_string(),
        })
    }
}

impl Serialize for Deferred {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Deferred {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_reference_syntax() {
        let d = Deferred::by_name("networks", "dc-svc-web", "network_aws_id");
        assert_eq!(
            d.to_string(),
            r#"$(networks.items.#[name="dc-svc-web"].network_aws_id)"#
        );
        assert_eq!(d.referenced_name(), Some("dc-svc-web"));
    }

    #[test]
    fn test_positional_reference_syntax() {
        let d = Deferred::first("datacenters", "region");
        assert_eq!(d.to_string(), "$(datacenters.items.0.region)");
        assert_eq!(d.referenced_name(), None);
    }

    #[test]
    fn test_parse_reference() {
        let d: Deferred = r#"$(elbs.items.#[name="dc-svc-lb"].dns_name)"#.parse().unwrap();
        let r = d.as_reference().unwrap();
        assert_eq!(r.collection, "elbs");
        assert_eq!(r.field, "dns_name");
        assert_eq!(r.name(), Some("dc-svc-lb"));

        let d: Deferred = "$(vpcs.items.0.vpc_id)".parse().unwrap();
        let r = d.as_reference().unwrap();
        assert_eq!(r.selector, Selector::Index(0));
        assert_eq!(r.field, "vpc_id");
    }

    #[test]
    fn test_parse_name_with_dots() {
        let raw = r#"$(route53s.items.#[name="dc-svc-example.com"].hosted_zone_id)"#;
        let d: Deferred = raw.parse().unwrap();
        assert_eq!(d.referenced_name(), Some("dc-svc-example.com"));
        assert_eq!(d.to_string(), raw);
    }

    #[test]
    fn test_literals() {
        let d: Deferred = "subnet-12345".parse().unwrap();
        assert_eq!(d, Deferred::literal("subnet-12345"));
        assert!(!d.is_empty());
        assert!(Deferred::default().is_empty());
    }

    #[test]
    fn test_malformed_reference() {
        assert!("$(networks.0.id)".parse::<Deferred>().is_err());
        assert!("$(networks.items.x.id)".parse::<Deferred>().is_err());
        assert!(r#"$(networks.items.#[name="a"]"#.parse::<Deferred>().is_err());
    }

    #[test]
    fn test_serde_as_string() {
        let values = vec![
            Deferred::by_name("firewalls", "dc-svc-sg", "security_group_aws_id"),
            Deferred::literal("sg-1"),
        ];
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(
            json,
            r#"["$(firewalls.items.#[name=\"dc-svc-sg\"].security_group_aws_id)","sg-1"]"#
        );
        let back: Vec<Deferred> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, values);
    }
}
