use super::ProviderContext;
use crate::deferred::Deferred;
use crate::reconcile::Reconcilable;
use crate::status::Status;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Protocol value meaning "all protocols"
pub const ANY_PROTOCOL: &str = "-1";

/// A security group
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Firewall {
    pub name: String,
    pub rules: FirewallRules,
    pub security_group_aws_id: String,
    pub tags: BTreeMap<String, String>,

    #[serde(flatten)]
    pub provider: ProviderContext,

    pub vpc_id: Deferred,
    pub status: Status,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FirewallRules {
    pub ingress: Vec<FirewallRule>,
    pub egress: Vec<FirewallRule>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct FirewallRule {
    /// Source (ingress) or destination (egress) CIDR
    pub ip: String,
    pub from_port: i64,
    pub to_port: i64,
    pub protocol: String,
}

impl FirewallRule {
    /// Ports carry no meaning for the all-protocols rule
    fn normalized(&self) -> FirewallRule {
        if self.protocol == ANY_PROTOCOL {
            FirewallRule {
                from_port: 0,
                to_port: 0,
                ..self.clone()
            }
        } else {
            self.clone()
        }
    }
}

fn rule_set(rules: &[FirewallRule]) -> Vec<FirewallRule> {
    let mut set: Vec<FirewallRule> = rules.iter().map(FirewallRule::normalized).collect();
    set.sort();
    set.dedup();
    set
}

component!(Firewall, security_group_aws_id);

impl Reconcilable for Firewall {
    /// Rule order is irrelevant to the provider
    fn has_changed(&self, previous: &Self) -> bool {
        rule_set(&self.rules.ingress) != rule_set(&previous.rules.ingress)
            || rule_set(&self.rules.egress) != rule_set(&previous.rules.egress)
    }

    fn inherit(&mut self, previous: &Self) {
        self.security_group_aws_id = previous.security_group_aws_id.clone();
        self.status = previous.status;
    }

    component_status!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(ip: &str, from: i64, to: i64, protocol: &str) -> FirewallRule {
        FirewallRule {
            ip: ip.to_string(),
            from_port: from,
            to_port: to,
            protocol: protocol.to_string(),
        }
    }

    fn firewall(ingress: Vec<FirewallRule>) -> Firewall {
        Firewall {
            name: "dc-svc-web-sg".to_string(),
            rules: FirewallRules {
                ingress,
                egress: vec![rule("0.0.0.0/0", 0, 65535, ANY_PROTOCOL)],
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_rule_order_is_ignored() {
        let a = firewall(vec![
            rule("10.0.0.0/16", 22, 22, "tcp"),
            rule("0.0.0.0/0", 80, 80, "tcp"),
        ]);
        let b = firewall(vec![
            rule("0.0.0.0/0", 80, 80, "tcp"),
            rule("10.0.0.0/16", 22, 22, "tcp"),
        ]);
        assert!(!a.has_changed(&b));
    }

    #[test]
    fn test_any_protocol_ignores_ports() {
        let a = firewall(vec![rule("10.0.0.0/16", 0, 65535, ANY_PROTOCOL)]);
        let b = firewall(vec![rule("10.0.0.0/16", 0, 0, ANY_PROTOCOL)]);
        assert!(!a.has_changed(&b));

        let c = firewall(vec![rule("10.0.0.0/16", 0, 65535, "tcp")]);
        let d = firewall(vec![rule("10.0.0.0/16", 0, 0, "tcp")]);
        assert!(c.has_changed(&d));
    }

    #[test]
    fn test_rule_change() {
        let a = firewall(vec![rule("0.0.0.0/0", 80, 80, "tcp")]);
        let b = firewall(vec![rule("0.0.0.0/0", 443, 443, "tcp")]);
        assert!(a.has_changed(&b));
        assert!(a.has_changed(&firewall(vec![])));
    }
}
