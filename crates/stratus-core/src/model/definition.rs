use super::{
    EbsVolume, Elb, Instance, NatGateway, Network, RdsCluster, RdsInstance, Route53Zone,
    S3Bucket, SecurityGroup,
};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// An authored service definition
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Definition {
    pub name: String,

    /// Name of the datacenter this service targets
    pub datacenter: String,

    /// Existing VPC to deploy into
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,

    /// Subnet of a VPC to be created
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_subnet: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub networks: Vec<Network>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub instances: Vec<Instance>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub security_groups: Vec<SecurityGroup>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub elbs: Vec<Elb>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub nat_gateways: Vec<NatGateway>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rds_clusters: Vec<RdsCluster>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rds_instances: Vec<RdsInstance>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ebs_volumes: Vec<EbsVolume>,

    #[serde(rename = "s3_buckets", skip_serializing_if = "Vec::is_empty")]
    pub s3_buckets: Vec<S3Bucket>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub route53_zones: Vec<Route53Zone>,
}

impl Definition {
    pub fn new(name: impl Into<String>, datacenter: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            datacenter: datacenter.into(),
            ..Default::default()
        }
    }

    /// Parse a definition from its canonical YAML form
    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Render the definition in its canonical YAML form
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn find_network(&self, name: &str) -> Option<&Network> {
        self.networks.iter().find(|n| n.name == name)
    }

    pub fn find_instance(&self, name: &str) -> Option<&Instance> {
        self.instances.iter().find(|i| i.name == name)
    }

    pub fn find_security_group(&self, name: &str) -> Option<&SecurityGroup> {
        self.security_groups.iter().find(|sg| sg.name == name)
    }

    pub fn find_nat_gateway(&self, name: &str) -> Option<&NatGateway> {
        self.nat_gateways.iter().find(|n| n.name == name)
    }

    pub fn find_elb(&self, name: &str) -> Option<&Elb> {
        self.elbs.iter().find(|e| e.name == name)
    }

    pub fn find_rds_cluster(&self, name: &str) -> Option<&RdsCluster> {
        self.rds_clusters.iter().find(|c| c.name == name)
    }

    pub fn find_rds_instance(&self, name: &str) -> Option<&RdsInstance> {
        self.rds_instances.iter().find(|i| i.name == name)
    }

    pub fn find_ebs_volume(&self, name: &str) -> Option<&EbsVolume> {
        self.ebs_volumes.iter().find(|v| v.name == name)
    }
}
