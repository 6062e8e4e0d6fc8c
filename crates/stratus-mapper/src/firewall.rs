use crate::names::Names;
use ipnetwork::IpNetwork;
use std::net::IpAddr;
use stratus_cloud::{
    ANY_PROTOCOL, Firewall, FirewallRule, FirewallRules, ProviderContext, ProvisioningModel,
    vpc_reference,
};
use stratus_core::model as definition;

const ANY: &str = "any";
const ANYWHERE: &str = "0.0.0.0/0";
const ICMP: &str = "icmp";
const MIN_PORT: i64 = 0;
const MAX_PORT: i64 = 65535;
/// ICMP type and code wildcard; 0 is a real ICMP type
const ICMP_ANY: i64 = -1;

pub(crate) fn map(def: &definition::Definition, names: &Names) -> Vec<Firewall> {
    def.security_groups
        .iter()
        .map(|group| {
            let name = names.full(&group.name);
            let rules = |rules: &[definition::SecurityGroupRule]| -> Vec<FirewallRule> {
                rules.iter().map(|r| map_rule(r, def)).collect()
            };

            Firewall {
                rules: FirewallRules {
                    ingress: rules(group.ingress.as_slice()),
                    egress: rules(group.egress.as_slice()),
                },
                tags: names.tags(&name),
                provider: ProviderContext::deferred(),
                vpc_id: vpc_reference(),
                name,
                ..Default::default()
            }
        })
        .collect()
}

fn map_rule(rule: &definition::SecurityGroupRule, def: &definition::Definition) -> FirewallRule {
    FirewallRule {
        ip: map_endpoint(&rule.ip, def),
        from_port: map_port(&rule.from_port, &rule.protocol, MIN_PORT),
        to_port: map_port(&rule.to_port, &rule.protocol, MAX_PORT),
        protocol: map_protocol(&rule.protocol),
    }
}

/// `any`, a network name, a CIDR or a bare IP, always as a CIDR
fn map_endpoint(ip: &str, def: &definition::Definition) -> String {
    if ip == ANY {
        return ANYWHERE.to_string();
    }
    if let Some(network) = def.find_network(ip) {
        return network.subnet.clone();
    }
    match ip.parse::<IpAddr>() {
        Ok(IpAddr::V4(addr)) => format!("{}/32", addr),
        Ok(IpAddr::V6(addr)) => format!("{}/128", addr),
        Err(_) => ip.to_string(),
    }
}

fn map_port(port: &str, protocol: &str, wildcard: i64) -> i64 {
    let wildcard = if protocol == ICMP { ICMP_ANY } else { wildcard };
    if port == ANY {
        return wildcard;
    }
    port.parse().unwrap_or(wildcard)
}

pub(crate) fn map_protocol(protocol: &str) -> String {
    if protocol == ANY {
        ANY_PROTOCOL.to_string()
    } else {
        protocol.to_string()
    }
}

pub(crate) fn unmap(model: &ProvisioningModel, names: &Names) -> Vec<definition::SecurityGroup> {
    model
        .firewalls
        .items
        .iter()
        .map(|firewall| {
            let rules = |rules: &[FirewallRule]| -> Vec<definition::SecurityGroupRule> {
                rules.iter().map(|r| unmap_rule(r, model, names)).collect()
            };

            definition::SecurityGroup {
                name: names.short(&firewall.name).to_string(),
                ingress: rules(firewall.rules.ingress.as_slice()),
                egress: rules(firewall.rules.egress.as_slice()),
            }
        })
        .collect()
}

fn unmap_rule(
    rule: &FirewallRule,
    model: &ProvisioningModel,
    names: &Names,
) -> definition::SecurityGroupRule {
    let any_protocol = rule.protocol == ANY_PROTOCOL;
    let icmp = rule.protocol == ICMP;
    // each bound is restored on its own so `any` to a fixed port survives
    let port = |value: i64, wildcard: i64| {
        let open = any_protocol || value == ICMP_ANY || (!icmp && value == wildcard);
        if open {
            ANY.to_string()
        } else {
            value.to_string()
        }
    };
    let from_port = port(rule.from_port, MIN_PORT);
    let to_port = port(rule.to_port, MAX_PORT);

    definition::SecurityGroupRule {
        ip: unmap_endpoint(&rule.ip, model, names),
        from_port,
        to_port,
        protocol: if any_protocol {
            ANY.to_string()
        } else {
            rule.protocol.clone()
        },
    }
}

fn unmap_endpoint(ip: &str, model: &ProvisioningModel, names: &Names) -> String {
    if ip == ANYWHERE {
        return ANY.to_string();
    }
    if let Some(network) = model.networks.items.iter().find(|n| n.subnet == ip) {
        return names.short(&network.name).to_string();
    }
    match ip.parse::<IpNetwork>() {
        Ok(IpNetwork::V4(net)) if net.prefix() == 32 => net.ip().to_string(),
        Ok(IpNetwork::V6(net)) if net.prefix() == 128 => net.ip().to_string(),
        _ => ip.to_string(),
    }
}
