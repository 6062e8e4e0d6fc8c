use colored::Colorize;
use std::path::Path;
use stratus_core::{Definition, validate_definition};

pub fn handle(path: &Path) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(path)?;

    let def = match Definition::from_yaml(&content) {
        Ok(def) => def,
        Err(e) => {
            eprintln!("{}", "✗ Invalid definition".red().bold());
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = validate_definition(&def) {
        eprintln!("{}", "✗ Validation failed".red().bold());
        eprintln!("  {}", e);
        std::process::exit(1);
    }

    println!("{}", "✓ Definition is valid".green().bold());
    println!();
    println!("Service {} (datacenter {})", def.name.cyan(), def.datacenter.cyan());
    println!("  networks:        {}", def.networks.len());
    println!(
        "  instances:       {}",
        def.instances.iter().map(|i| i.count).sum::<u32>()
    );
    println!("  security groups: {}", def.security_groups.len());
    println!("  load balancers:  {}", def.elbs.len());
    println!("  nat gateways:    {}", def.nat_gateways.len());
    println!(
        "  rds:             {} clusters, {} instances",
        def.rds_clusters.len(),
        def.rds_instances.len()
    );
    println!("  ebs volumes:     {}", def.ebs_volumes.len());
    println!("  s3 buckets:      {}", def.s3_buckets.len());
    println!("  route53 zones:   {}", def.route53_zones.len());

    Ok(())
}
