use super::*;
use std::net::Ipv4Addr;
use stratus_cloud::component::{Component, TAG_INSTANCE_GROUP};
use stratus_cloud::{Deferred, INSTANCES};
use stratus_core::validate_definition;
use stratus_core::model::{
    EbsVolume, Elb, ElbListener, Instance, InstanceVolume, NatGateway, Network, RdsBackup,
    RdsCluster, RdsInstance, Record, Route53Zone, S3Bucket, SecurityGroup, SecurityGroupRule,
};

fn datacenter() -> Datacenter {
    Datacenter {
        name: "dc".to_string(),
        provider_type: "aws".to_string(),
        region: "eu-west-1".to_string(),
        aws_access_key_id: "key".to_string(),
        aws_secret_access_key: "secret".to_string(),
    }
}

fn rule(ip: &str, from: &str, to: &str, protocol: &str) -> SecurityGroupRule {
    SecurityGroupRule {
        ip: ip.to_string(),
        from_port: from.to_string(),
        to_port: to.to_string(),
        protocol: protocol.to_string(),
    }
}

fn service() -> Definition {
    Definition {
        name: "svc".to_string(),
        datacenter: "dc".to_string(),
        vpc_id: Some("vpc-123".to_string()),
        networks: vec![
            Network {
                name: "web".to_string(),
                subnet: "10.1.0.0/24".to_string(),
                public: true,
                ..Default::default()
            },
            Network {
                name: "db".to_string(),
                subnet: "10.1.1.0/24".to_string(),
                nat_gateway: Some("nat".to_string()),
                availability_zone: Some("eu-west-1a".to_string()),
                ..Default::default()
            },
            Network {
                name: "db-b".to_string(),
                subnet: "10.1.2.0/24".to_string(),
                availability_zone: Some("eu-west-1b".to_string()),
                ..Default::default()
            },
        ],
        nat_gateways: vec![NatGateway {
            name: "nat".to_string(),
            public_network: "web".to_string(),
        }],
        instances: vec![Instance {
            name: "web".to_string(),
            instance_type: "t2.micro".to_string(),
            image: "ami-6666f915".to_string(),
            count: 2,
            network: "web".to_string(),
            start_ip: Some(Ipv4Addr::new(10, 1, 0, 11)),
            security_groups: vec!["web-sg".to_string()],
            volumes: vec![InstanceVolume {
                volume: "data".to_string(),
                device: "/dev/sdp".to_string(),
            }],
            ..Default::default()
        }],
        ebs_volumes: vec![EbsVolume {
            name: "data".to_string(),
            volume_type: "gp2".to_string(),
            size: Some(20),
            count: 2,
            availability_zone: "eu-west-1a".to_string(),
            ..Default::default()
        }],
        security_groups: vec![SecurityGroup {
            name: "web-sg".to_string(),
            ingress: vec![
                rule("any", "80", "80", "tcp"),
                rule("db", "5432", "5432", "tcp"),
                rule("10.0.0.0/8", "any", "8080", "tcp"),
            ],
            egress: vec![rule("any", "any", "any", "any")],
        }],
        elbs: vec![Elb {
            name: "lb".to_string(),
            networks: vec!["web".to_string()],
            instances: vec!["web".to_string()],
            security_groups: vec!["web-sg".to_string()],
            listeners: vec![ElbListener {
                from_port: 80,
                to_port: 80,
                protocol: "http".to_string(),
                ssl_cert: None,
            }],
            ..Default::default()
        }],
        rds_clusters: vec![RdsCluster {
            name: "aurora".to_string(),
            engine: "aurora".to_string(),
            port: Some(3306),
            networks: vec!["db".to_string(), "db-b".to_string()],
            security_groups: vec!["web-sg".to_string()],
            database_name: "app".to_string(),
            database_username: "admin".to_string(),
            database_password: "s3cr3tpassword".to_string(),
            backups: RdsBackup {
                window: Some("03:00-04:00".to_string()),
                retention: Some(7),
            },
            ..Default::default()
        }],
        rds_instances: vec![RdsInstance {
            name: "aurora-1".to_string(),
            size: "db.r3.large".to_string(),
            cluster: Some("aurora".to_string()),
            networks: vec!["db".to_string()],
            security_groups: vec!["web-sg".to_string()],
            ..Default::default()
        }],
        s3_buckets: vec![S3Bucket {
            name: "assets".to_string(),
            acl: Some("private".to_string()),
            bucket_location: "eu-west-1".to_string(),
            ..Default::default()
        }],
        route53_zones: vec![
            Route53Zone {
                name: "example.com".to_string(),
                private: false,
                records: vec![
                    Record {
                        entry: "www.example.com".to_string(),
                        record_type: "A".to_string(),
                        instances: vec!["web".to_string()],
                        ttl: 3600,
                        ..Default::default()
                    },
                    Record {
                        entry: "lb.example.com".to_string(),
                        record_type: "CNAME".to_string(),
                        loadbalancers: vec!["lb".to_string()],
                        ttl: 300,
                        ..Default::default()
                    },
                    Record {
                        entry: "mail.example.com".to_string(),
                        record_type: "A".to_string(),
                        values: vec!["1.2.3.4".to_string()],
                        ttl: 300,
                        ..Default::default()
                    },
                ],
            },
            Route53Zone {
                name: "internal.example.com".to_string(),
                private: true,
                records: vec![Record {
                    entry: "first.internal.example.com".to_string(),
                    record_type: "A".to_string(),
                    values: vec!["10.1.0.11".to_string()],
                    ttl: 300,
                    ..Default::default()
                }],
            },
        ],
        ..Default::default()
    }
}

#[test]
fn test_map_is_deterministic() {
    let first = map(&service(), &datacenter()).to_json().unwrap();
    let second = map(&service(), &datacenter()).to_json().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_fixture_is_valid() {
    assert_eq!(validate_definition(&service()), Ok(()));
}

#[test]
fn test_unmap_restores_definition() {
    let def = service();
    assert!(validate_definition(&def).is_ok());
    let model = map(&def, &datacenter());
    assert_eq!(unmap(&model).unwrap(), def);
}

#[test]
fn test_unmap_survives_json() {
    let def = service();
    assert!(validate_definition(&def).is_ok());
    let json = map(&def, &datacenter()).to_json().unwrap();
    let model = ProvisioningModel::from_json(json.as_bytes()).unwrap();
    assert_eq!(unmap(&model).unwrap(), def);
}

#[test]
fn test_instance_group_expansion() {
    let model = map(&service(), &datacenter());
    let instances = &model.instances.items;

    let names: Vec<&str> = instances.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["dc-svc-web-1", "dc-svc-web-2"]);
    assert_eq!(instances[0].ip, Some(Ipv4Addr::new(10, 1, 0, 11)));
    assert_eq!(instances[1].ip, Some(Ipv4Addr::new(10, 1, 0, 12)));
    assert_eq!(instances[1].tag(TAG_INSTANCE_GROUP), Some("web"));
    assert_eq!(instances[1].network_name, "dc-svc-web");
    assert_eq!(instances[1].volumes[0].volume, "dc-svc-data-2");
}

#[test]
fn test_cross_references_are_deferred() {
    let model = map(&service(), &datacenter());
    let instance = &model.instances.items[0];

    assert_eq!(
        instance.network_aws_id.to_string(),
        r#"$(networks.items.#[name="dc-svc-web"].network_aws_id)"#
    );
    assert_eq!(
        instance.security_group_aws_ids[0].to_string(),
        r#"$(firewalls.items.#[name="dc-svc-web-sg"].security_group_aws_id)"#
    );
    assert_eq!(
        instance.volumes[0].volume_aws_id.to_string(),
        r#"$(ebs_volumes.items.#[name="dc-svc-data-1"].volume_aws_id)"#
    );
    assert_eq!(instance.vpc_id.to_string(), "$(vpcs.items.0.vpc_id)");
    assert_eq!(
        instance.provider.datacenter_region.to_string(),
        "$(datacenters.items.0.region)"
    );
}

#[test]
fn test_vpc_keeps_existing_id() {
    let model = map(&service(), &datacenter());
    assert_eq!(model.vpc_id(), Some("vpc-123"));
    assert_eq!(model.vpcs.items[0].name, "dc-svc-vpc");

    let mut def = service();
    def.vpc_id = None;
    def.vpc_subnet = Some("10.1.0.0/16".to_string());
    let model = map(&def, &datacenter());
    assert_eq!(model.vpc_id(), None);
    assert_eq!(model.vpcs.items[0].vpc_subnet.as_deref(), Some("10.1.0.0/16"));
}

#[test]
fn test_firewall_rules_are_normalized() {
    let model = map(&service(), &datacenter());
    let rules = &model.firewalls.items[0].rules;

    assert_eq!(rules.ingress[0].ip, "0.0.0.0/0");
    assert_eq!(rules.ingress[1].ip, "10.1.1.0/24");
    assert_eq!((rules.ingress[2].from_port, rules.ingress[2].to_port), (0, 8080));
    assert_eq!(rules.egress[0].protocol, "-1");
    assert_eq!((rules.egress[0].from_port, rules.egress[0].to_port), (0, 65535));
}

#[test]
fn test_nat_routes_private_networks() {
    let model = map(&service(), &datacenter());
    let nat = &model.nats.items[0];

    assert_eq!(nat.public_network, "dc-svc-web");
    assert_eq!(nat.routed_networks, vec!["dc-svc-db".to_string()]);
}

#[test]
fn test_elb_expands_instance_groups() {
    let model = map(&service(), &datacenter());
    let elb = &model.elbs.items[0];

    assert_eq!(elb.instances, vec!["dc-svc-web".to_string()]);
    assert_eq!(
        elb.instance_names,
        vec!["dc-svc-web-1".to_string(), "dc-svc-web-2".to_string()]
    );
    assert_eq!(elb.instance_aws_ids.len(), 2);
    assert_eq!(elb.listeners[0].protocol, "HTTP");
}

#[test]
fn test_rds_instance_inherits_cluster() {
    let model = map(&service(), &datacenter());
    let instance = &model.rds_instances.items[0];

    assert_eq!(instance.cluster.as_deref(), Some("dc-svc-aurora"));
    assert_eq!(instance.engine.as_deref(), Some("aurora"));
    assert_eq!(instance.port, Some(3306));
    assert_eq!(instance.database_username.as_deref(), Some("admin"));
}

#[test]
fn test_route53_record_targets() {
    let model = map(&service(), &datacenter());
    let zone = &model.route53s.items[0];
    assert_eq!(zone.name, "dc-svc-example.com");
    assert_eq!(zone.domain, "example.com");

    let www = &zone.records[0];
    assert_eq!(www.values.len(), 2);
    assert_eq!(
        www.values[1].to_string(),
        r#"$(instances.items.#[name="dc-svc-web-2"].public_ip)"#
    );

    let lb = &zone.records[1];
    assert_eq!(
        lb.values[0].to_string(),
        r#"$(elbs.items.#[name="dc-svc-lb"].dns_name)"#
    );

    assert_eq!(zone.records[2].values, vec![Deferred::literal("1.2.3.4")]);
}

#[test]
fn test_private_zone_uses_private_address() {
    let mut def = service();
    def.route53_zones[0].private = true;
    let model = map(&def, &datacenter());

    let value = &model.route53s.items[0].records[0].values[0];
    let reference = value.as_reference().unwrap();
    assert_eq!(reference.collection, INSTANCES);
    assert_eq!(reference.field, "ip");
}

#[test]
fn test_s3_permissions_case() {
    let mut def = service();
    def.s3_buckets[0].acl = None;
    def.s3_buckets[0].grantees = vec![stratus_core::model::S3Grantee {
        id: "foo@example.com".to_string(),
        grantee_type: "emailaddress".to_string(),
        permissions: "read".to_string(),
    }];

    let model = map(&def, &datacenter());
    assert_eq!(model.s3s.items[0].grantees[0].permissions, "READ");
    assert_eq!(unmap(&model).unwrap().s3_buckets, def.s3_buckets);
}

#[test]
fn test_map_payload_sets_id() {
    let payload = Payload::new("svc-2", datacenter(), service());
    let model = map_payload(&payload);
    assert_eq!(model.id, "svc-2");
    assert_eq!(model.provider_type, "aws");
    assert_eq!(model.prefix(), "dc-svc-");
}

#[test]
fn test_unmap_requires_datacenter() {
    let mut model = map(&service(), &datacenter());
    model.datacenters.items.clear();
    assert!(matches!(unmap(&model), Err(MapperError::MissingDatacenter)));
}

#[test]
fn test_unmap_rejects_unresolved_network() {
    let mut model = map(&service(), &datacenter());
    model.instances.items[0].network_name.clear();

    let err = unmap(&model).unwrap_err();
    assert!(matches!(err, MapperError::UnresolvedReference { .. }));
    assert!(err.to_string().contains("dc-svc-web-1"));
}

#[test]
fn test_unmap_datacenter() {
    let model = map(&service(), &datacenter());
    assert_eq!(unmap_datacenter(&model).unwrap(), datacenter());
}

#[test]
fn test_definition_yaml_parses_back() {
    let def = service();
    let yaml = definition_yaml(&map(&def, &datacenter())).unwrap();
    assert_eq!(Definition::from_yaml(&yaml).unwrap(), def);
}

/// Strip what an import would not know: component names behind ids
fn imported(mut model: ProvisioningModel) -> ProvisioningModel {
    for (n, network) in model.networks.items.iter_mut().enumerate() {
        network.network_aws_id = format!("subnet-{}", n);
    }
    for (n, firewall) in model.firewalls.items.iter_mut().enumerate() {
        firewall.security_group_aws_id = format!("sg-{}", n);
    }
    for (n, instance) in model.instances.items.iter_mut().enumerate() {
        instance.instance_aws_id = format!("i-{}", n);
        instance.provider.datacenter_region = Deferred::literal("eu-west-1");
        instance.network_name.clear();
        instance.network_aws_id = Deferred::literal("subnet-0");
        instance.security_groups.clear();
        instance.security_group_aws_ids = vec![Deferred::literal("sg-0")];
    }
    for elb in &mut model.elbs.items {
        elb.instances.clear();
        elb.instance_names.clear();
        elb.instance_aws_ids = vec![Deferred::literal("i-0"), Deferred::literal("i-1")];
        elb.networks.clear();
        elb.network_aws_ids = vec![Deferred::literal("subnet-0")];
    }
    for nat in &mut model.nats.items {
        nat.public_network.clear();
        nat.public_network_aws_id = Deferred::literal("subnet-0");
    }
    model
}

#[test]
fn test_normalize_import_rebuilds_names() {
    let def = service();
    let mut model = imported(map(&def, &datacenter()));

    normalize_import(&mut model);

    let instance = &model.instances.items[1];
    assert_eq!(instance.network_name, "dc-svc-web");
    assert_eq!(instance.security_groups, vec!["dc-svc-web-sg".to_string()]);
    assert_eq!(
        instance.provider.datacenter_region.to_string(),
        "$(datacenters.items.0.region)"
    );

    let elb = &model.elbs.items[0];
    assert_eq!(elb.instances, vec!["dc-svc-web".to_string()]);
    assert_eq!(elb.networks, vec!["dc-svc-web".to_string()]);
    assert_eq!(model.nats.items[0].public_network, "dc-svc-web");

    let unmapped = unmap(&model).unwrap();
    assert_eq!(unmapped.instances, def.instances);
    assert_eq!(unmapped.elbs, def.elbs);
    assert_eq!(unmapped.nat_gateways, def.nat_gateways);
}

#[test]
fn test_normalize_keeps_unresolved_names() {
    let mut model = map(&service(), &datacenter());
    model.instances.items[0].security_group_aws_ids = vec![Deferred::literal("sg-unknown")];

    normalize_import(&mut model);

    assert_eq!(
        model.instances.items[0].security_groups,
        vec!["dc-svc-web-sg".to_string()]
    );
}

#[test]
fn test_route53_literal_values_survive() {
    let def = service();
    let back = unmap(&map(&def, &datacenter())).unwrap();

    let record = &back.route53_zones[1].records[0];
    assert_eq!(record.values, vec!["10.1.0.11".to_string()]);
    assert!(record.instances.is_empty());
}

#[test]
fn test_route53_imported_ids_become_targets() {
    let mut model = imported(map(&service(), &datacenter()));
    model.route53s.items[1].records[0].values =
        vec![Deferred::literal("i-1"), Deferred::literal("10.1.0.11")];
    normalize_import(&mut model);

    let back = unmap(&model).unwrap();
    let record = &back.route53_zones[1].records[0];
    assert_eq!(record.instances, vec!["web".to_string()]);
    assert_eq!(record.values, vec!["10.1.0.11".to_string()]);
}
