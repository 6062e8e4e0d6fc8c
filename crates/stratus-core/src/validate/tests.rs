use super::*;
use crate::model::*;
use std::net::Ipv4Addr;

fn network(name: &str, subnet: &str, public: bool, az: &str) -> Network {
    Network {
        name: name.to_string(),
        subnet: subnet.to_string(),
        public,
        availability_zone: Some(az.to_string()),
        ..Default::default()
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

fn base_definition() -> Definition {
    let mut def = Definition::new("svc", "dc");
    def.vpc_subnet = Some("10.0.0.0/16".to_string());
    def.networks = vec![
        network("web", "10.0.1.0/24", true, "eu-west-1a"),
        network("db-a", "10.0.2.0/24", false, "eu-west-1a"),
        network("db-b", "10.0.3.0/24", false, "eu-west-1b"),
    ];
    def.security_groups = vec![SecurityGroup {
        name: "web-sg".to_string(),
        ingress: vec![rule("any", "80", "80", "tcp")],
        egress: vec![rule("db-a", "any", "any", "any")],
    }];
    def.instances = vec![Instance {
        name: "foo".to_string(),
        instance_type: "t2.micro".to_string(),
        image: "ami-123".to_string(),
        count: 2,
        network: "web".to_string(),
        start_ip: Some(Ipv4Addr::new(10, 0, 1, 10)),
        security_groups: vec!["web-sg".to_string()],
        ..Default::default()
    }];
    def
}

fn message(def: &Definition) -> String {
    validate_definition(def).unwrap_err().message().to_string()
}

#[test]
fn test_valid_definition() {
    assert!(validate_definition(&base_definition()).is_ok());
}

#[test]
fn test_service_name() {
    let mut def = base_definition();
    def.name = String::new();
    assert_eq!(message(&def), "Service name should not be null");

    def.name = "x".repeat(51);
    assert_eq!(
        message(&def),
        "Service name can't be greater than 50 characters"
    );

    def.name = "x".repeat(50);
    assert!(validate_definition(&def).is_ok());
}

#[test]
fn test_datacenter_required() {
    let mut def = base_definition();
    def.datacenter = String::new();
    assert_eq!(message(&def), "Datacenter not specified");
}

#[test]
fn test_datacenter_validation() {
    assert!(validate_datacenter(&Datacenter::new("dc", "eu-west-1")).is_ok());

    let err = validate_datacenter(&Datacenter::default()).unwrap_err();
    assert_eq!(err.message(), "Datacenter name should not be null");

    let err = validate_datacenter(&Datacenter::new("d".repeat(51), "eu-west-1")).unwrap_err();
    assert_eq!(
        err.message(),
        "Datacenter name can't be greater than 50 characters"
    );
}

#[test]
fn test_vpc_identity() {
    let mut def = base_definition();
    def.vpc_subnet = None;
    assert_eq!(message(&def), "VPC ID or VPC subnet should be specified");

    def.vpc_id = Some("vpc-123".to_string());
    assert!(validate_definition(&def).is_ok());

    def.vpc_id = None;
    def.vpc_subnet = Some("10.0.0.0/99".to_string());
    assert_eq!(message(&def), "VPC subnet (10.0.0.0/99) is not a valid CIDR");
}

#[test]
fn test_network_rules() {
    let mut def = base_definition();
    def.networks[0].subnet = "not-a-cidr".to_string();
    assert_eq!(message(&def), "Network CIDR is not valid");

    let mut def = base_definition();
    def.networks[0].nat_gateway = Some("nat".to_string());
    assert_eq!(
        message(&def),
        "Public Network should not specify a nat gateway"
    );

    let mut def = base_definition();
    def.networks[1].nat_gateway = Some("missing".to_string());
    assert_eq!(message(&def), "Network nat gateway 'missing' does not exist");
}

#[test]
fn test_instance_rules() {
    let mut def = base_definition();
    def.instances[0].count = 0;
    assert_eq!(message(&def), "Instance count should not be < 1");

    let mut def = base_definition();
    def.instances[0].network = "nope".to_string();
    assert_eq!(message(&def), "Instance network 'nope' does not exist");

    let mut def = base_definition();
    def.instances[0].security_groups = vec!["nope".to_string()];
    assert_eq!(
        message(&def),
        "Instance security group 'nope' does not exist"
    );

    let mut def = base_definition();
    def.instances[0].instance_type = String::new();
    assert_eq!(message(&def), "Instance type should not be null");
}

#[test]
fn test_instance_addresses_must_fit_network() {
    let mut def = base_definition();
    def.instances[0].start_ip = Some(Ipv4Addr::new(10, 0, 9, 10));
    assert_eq!(
        message(&def),
        "Instance IP invalid. IP must be a valid IP in the same range as it's network"
    );

    let mut def = base_definition();
    def.instances[0].start_ip = Some(Ipv4Addr::new(10, 0, 1, 255));
    assert_eq!(
        message(&def),
        "Instance IP invalid. Allocated IP is lower than Start IP"
    );

    let mut def = base_definition();
    def.instances[0].start_ip = None;
    assert!(message(&def).starts_with("Instance IP invalid"));
}

#[test]
fn test_instance_volumes() {
    let mut def = base_definition();
    def.instances[0].volumes = vec![InstanceVolume {
        volume: "data".to_string(),
        device: "/dev/sdp".to_string(),
    }];
    assert_eq!(message(&def), "Instance volume 'data' does not exist");

    def.ebs_volumes = vec![EbsVolume {
        name: "data".to_string(),
        volume_type: "gp2".to_string(),
        count: 1,
        availability_zone: "eu-west-1a".to_string(),
        ..Default::default()
    }];
    assert_eq!(
        message(&def),
        "Instance volume group 'data' does not contain enough volumes for 2 instances"
    );

    def.ebs_volumes[0].count = 2;
    assert!(validate_definition(&def).is_ok());
}

#[test]
fn test_security_group_rule_port_out_of_range() {
    let mut def = base_definition();
    def.security_groups[0].ingress[0].from_port = "-1".to_string();
    let msg = message(&def);
    assert!(msg.contains("out of range"));
    assert_eq!(
        msg,
        "Security Group From Port (-1) is out of range [1 - 65535]"
    );
}

#[test]
fn test_security_group_rule_ports() {
    let mut def = base_definition();
    def.security_groups[0].ingress[0].to_port = "65536".to_string();
    assert_eq!(
        message(&def),
        "Security Group To Port (65536) is out of range [1 - 65535]"
    );

    def.security_groups[0].ingress[0].to_port = "http".to_string();
    assert_eq!(message(&def), "Security Group To Port (http) is not valid");

    def.security_groups[0].ingress[0] = rule("any", "0", "255", "icmp");
    assert!(validate_definition(&def).is_ok());

    def.security_groups[0].ingress[0] = rule("any", "0", "256", "icmp");
    assert_eq!(
        message(&def),
        "Security Group To Port (256) is out of range [0 - 255]"
    );
}

#[test]
fn test_security_group_rule_endpoints() {
    let mut def = base_definition();
    for ip in ["any", "web", "10.1.1.0/24", "10.1.1.11"] {
        def.security_groups[0].ingress[0].ip = ip.to_string();
        assert!(validate_definition(&def).is_ok(), "{ip} should be valid");
    }

    def.security_groups[0].ingress[0].ip = "invalid".to_string();
    assert_eq!(message(&def), "Security Group IP (invalid) is not valid");

    def.security_groups[0].ingress[0] = rule("any", "80", "80", "gre");
    assert_eq!(message(&def), "Protocol is invalid");
}

#[test]
fn test_nat_gateway_rules() {
    let mut def = base_definition();
    def.nat_gateways = vec![NatGateway {
        name: "nat".to_string(),
        public_network: "db-a".to_string(),
    }];
    assert_eq!(
        message(&def),
        "Nat Gateway public network 'db-a' is not a public network"
    );

    def.nat_gateways[0].public_network = "missing".to_string();
    assert_eq!(
        message(&def),
        "Nat Gateway public network 'missing' is not defined"
    );

    def.nat_gateways[0].public_network = "web".to_string();
    def.networks[1].nat_gateway = Some("nat".to_string());
    assert!(validate_definition(&def).is_ok());
}

fn cluster() -> RdsCluster {
    RdsCluster {
        name: "main".to_string(),
        engine: "aurora".to_string(),
        networks: vec!["db-a".to_string(), "db-b".to_string()],
        database_name: "shop".to_string(),
        database_username: "admin".to_string(),
        database_password: "s3cretpassword".to_string(),
        maintenance_window: Some("Mon:22:00-Mon:23:00".to_string()),
        ..Default::default()
    }
}

fn clustered_instance() -> RdsInstance {
    RdsInstance {
        name: "main-1".to_string(),
        size: "db.r3.large".to_string(),
        cluster: Some("main".to_string()),
        ..Default::default()
    }
}

#[test]
fn test_rds_cluster_rules() {
    let mut def = base_definition();
    def.rds_clusters = vec![cluster()];
    assert!(validate_definition(&def).is_ok());

    def.rds_clusters[0].port = Some(80);
    assert_eq!(
        message(&def),
        "RDS Cluster port number should be between 1150 and 65535"
    );

    def.rds_clusters[0].port = None;
    def.rds_clusters[0].database_name = "shop-db".to_string();
    assert_eq!(
        message(&def),
        "RDS Cluster database name can only contain alphanumeric characters"
    );

    def.rds_clusters[0] = cluster();
    def.rds_clusters[0].networks = vec!["db-a".to_string()];
    assert!(message(&def).contains("at least two networks in different availability zones"));

    def.rds_clusters[0] = cluster();
    def.rds_clusters[0].maintenance_window = Some("Funday:22:00-Mon:23:00".to_string());
    assert!(message(&def).starts_with("RDS Cluster maintenance window: Date format"));

    def.rds_clusters[0] = cluster();
    def.rds_clusters[0].replication_source = Some("cluster-1".to_string());
    assert!(message(&def).starts_with("RDS Cluster replication source should be a valid"));
}

#[test]
fn test_rds_instance_inherits_from_cluster() {
    let mut def = base_definition();
    def.rds_clusters = vec![cluster()];
    def.rds_instances = vec![clustered_instance()];
    assert!(validate_definition(&def).is_ok());

    def.rds_instances[0].database_name = Some("shop".to_string());
    let msg = message(&def);
    assert!(msg.contains("should be set on cluster"));
    assert_eq!(msg, "RDS Instance database name should be set on cluster");

    def.rds_instances[0] = clustered_instance();
    def.rds_instances[0].engine = Some("aurora".to_string());
    assert_eq!(
        message(&def),
        "RDS Instance engine type should be set on cluster"
    );

    def.rds_instances[0] = clustered_instance();
    def.rds_instances[0].port = Some(3306);
    assert_eq!(message(&def), "RDS Instance port should be set on cluster");

    def.rds_instances[0] = clustered_instance();
    def.rds_instances[0].cluster = Some("other".to_string());
    assert_eq!(
        message(&def),
        "RDS Instance cluster identifier 'other' does not exist"
    );
}

#[test]
fn test_standalone_rds_instance() {
    let mut def = base_definition();
    def.rds_instances = vec![RdsInstance {
        name: "legacy".to_string(),
        size: "db.m4.large".to_string(),
        engine: Some("mysql".to_string()),
        networks: vec!["db-a".to_string(), "db-b".to_string()],
        database_name: Some("shop".to_string()),
        database_username: Some("admin".to_string()),
        database_password: Some("s3cretpassword".to_string()),
        license: Some("general-public-license".to_string()),
        ..Default::default()
    }];
    assert!(validate_definition(&def).is_ok());

    def.rds_instances[0].database_username = None;
    assert_eq!(
        message(&def),
        "RDS Instance database username should not be null"
    );

    def.rds_instances[0].database_username = Some("admin".to_string());
    def.rds_instances[0].size = "m4.large".to_string();
    assert_eq!(
        message(&def),
        "RDS Instance size should be a valid resource size. i.e. 'db.r3.large'"
    );

    def.rds_instances[0].size = "db.m4.large".to_string();
    def.rds_instances[0].storage.iops = Some(1500);
    assert_eq!(
        message(&def),
        "RDS Instance storage iops must be a multiple of 1000"
    );

    def.rds_instances[0].storage.iops = None;
    def.rds_instances[0].license = Some("free".to_string());
    assert!(message(&def).starts_with("RDS Instance license must be one of"));

    def.rds_instances[0].license = Some("general-public-license".to_string());
    def.rds_instances[0].database_password = Some("pa$$word123".to_string());
    assert_eq!(
        message(&def),
        "RDS Instance database password contains an offending character: '$'"
    );
}

#[test]
fn test_rds_replica_exclusivity() {
    let mut def = base_definition();
    def.rds_instances = vec![RdsInstance {
        name: "replica".to_string(),
        size: "db.m4.large".to_string(),
        public: true,
        replication_source: Some("arn:aws:rds:eu-west-1:123:db:legacy".to_string()),
        ..Default::default()
    }];
    assert!(validate_definition(&def).is_ok());

    def.rds_instances[0].engine = Some("mysql".to_string());
    assert_eq!(
        message(&def),
        "RDS Instance must not specify an engine if a replication source is set"
    );
}

fn elb() -> Elb {
    Elb {
        name: "lb".to_string(),
        networks: vec!["web".to_string()],
        instances: vec!["foo".to_string()],
        security_groups: vec!["web-sg".to_string()],
        listeners: vec![ElbListener {
            from_port: 80,
            to_port: 80,
            protocol: "http".to_string(),
            ssl_cert: None,
        }],
        ..Default::default()
    }
}

#[test]
fn test_elb_rules() {
    let mut def = base_definition();
    def.elbs = vec![elb()];
    assert!(validate_definition(&def).is_ok());

    def.elbs[0].listeners[0].protocol = "https".to_string();
    assert_eq!(
        message(&def),
        "ELB listener must specify an ssl cert when protocol is https/ssl"
    );

    def.elbs[0].listeners[0].ssl_cert = Some("arn:aws:iam::123:server-certificate/x".to_string());
    assert!(validate_definition(&def).is_ok());

    def.elbs[0] = elb();
    def.elbs[0].networks = vec!["db-a".to_string()];
    assert_eq!(message(&def), "ELB network 'db-a' is not a public network");

    def.elbs[0].private = true;
    assert!(validate_definition(&def).is_ok());

    def.elbs[0] = elb();
    def.elbs[0].instances = vec!["bar".to_string()];
    assert_eq!(message(&def), "ELB instance 'bar' does not exist");

    def.elbs[0] = elb();
    def.elbs[0].listeners.clear();
    assert_eq!(message(&def), "ELB must specify at least one listener");

    def.elbs[0] = elb();
    def.elbs[0].listeners[0].to_port = 0;
    assert_eq!(message(&def), "To Port (0) is out of range [1 - 65535]");
}

#[test]
fn test_s3_rules() {
    let mut def = base_definition();
    def.s3_buckets = vec![S3Bucket {
        name: "assets".to_string(),
        acl: Some("private".to_string()),
        bucket_location: "eu-west-1".to_string(),
        grantees: vec![],
    }];
    assert!(validate_definition(&def).is_ok());

    def.s3_buckets[0].grantees.push(S3Grantee {
        id: "someone@example.com".to_string(),
        grantee_type: "emailaddress".to_string(),
        permissions: "read".to_string(),
    });
    assert_eq!(
        message(&def),
        "S3 bucket must specify either acl or grantees, not both"
    );

    def.s3_buckets[0].acl = None;
    assert!(validate_definition(&def).is_ok());

    def.s3_buckets[0].grantees[0].permissions = "everything".to_string();
    assert!(message(&def).starts_with("S3 grantee permissions (everything) is not valid"));
}

#[test]
fn test_route53_rules() {
    let mut def = base_definition();
    def.elbs = vec![elb()];
    def.route53_zones = vec![Route53Zone {
        name: "example.com".to_string(),
        private: false,
        records: vec![Record {
            entry: "www.example.com".to_string(),
            record_type: "CNAME".to_string(),
            loadbalancers: vec!["lb".to_string()],
            ttl: 3600,
            ..Default::default()
        }],
    }];
    assert!(validate_definition(&def).is_ok());

    def.route53_zones[0].records[0].record_type = "A".to_string();
    assert_eq!(
        message(&def),
        "Route53 record type must be CNAME when using loadbalancers as a target"
    );

    def.route53_zones[0].records[0].instances = vec!["foo".to_string()];
    assert!(message(&def).starts_with("Route53 record must specify only one of"));

    def.route53_zones[0].records[0].loadbalancers.clear();
    assert!(validate_definition(&def).is_ok());

    def.route53_zones[0].records[0].ttl = 0;
    assert_eq!(message(&def), "Route53 record TTL must be greater than 0");

    def.route53_zones[0].records[0].ttl = 60;
    def.route53_zones[0].records[0].record_type = "BOGUS".to_string();
    assert!(message(&def).starts_with("Route53 record type 'BOGUS' is not a valid dns type"));
}

#[test]
fn test_ebs_rules() {
    let mut def = base_definition();
    def.ebs_volumes = vec![EbsVolume {
        name: "data".to_string(),
        volume_type: "gp2".to_string(),
        count: 1,
        availability_zone: "eu-west-1a".to_string(),
        ..Default::default()
    }];
    assert!(validate_definition(&def).is_ok());

    def.ebs_volumes[0].iops = Some(100);
    assert_eq!(
        message(&def),
        "EBS Volume type must be 'io1' when specifying iops"
    );

    def.ebs_volumes[0].iops = None;
    def.ebs_volumes[0].encrypted = true;
    assert!(message(&def).starts_with("EBS Volume encryption key id"));

    def.ebs_volumes[0].encrypted = false;
    def.ebs_volumes[0].size = Some(20000);
    assert_eq!(
        message(&def),
        "EBS Volume size should be between 1 - 16384 (GB)"
    );
}

#[test]
fn test_duplicate_names() {
    let mut def = base_definition();
    let dup = def.networks[1].clone();
    def.networks.push(dup);
    assert_eq!(message(&def), "Duplicate network names found");

    let mut def = base_definition();
    let dup = def.instances[0].clone();
    def.instances.push(dup);
    assert_eq!(message(&def), "Duplicate instance names found");
}

#[test]
fn test_first_violation_wins() {
    let mut def = base_definition();
    def.networks[0].subnet = "bogus".to_string();
    def.instances[0].count = 0;
    assert_eq!(message(&def), "Network CIDR is not valid");
}
