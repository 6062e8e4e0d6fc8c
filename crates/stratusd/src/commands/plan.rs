use anyhow::Context;
use colored::Colorize;
use std::path::Path;
use stratus_cloud::{ActionType, ProvisioningModel};
use stratus_core::{Payload, validate_datacenter, validate_definition};

pub fn handle(payload: &Path, previous: Option<&Path>) -> anyhow::Result<()> {
    let data = std::fs::read(payload)
        .with_context(|| format!("cannot read payload {}", payload.display()))?;
    let payload = Payload::from_json(&data)?;

    if let Err(e) = validate_datacenter(&payload.datacenter)
        .and_then(|_| validate_definition(&payload.service))
    {
        eprintln!("{}", "✗ Validation failed".red().bold());
        eprintln!("  {}", e);
        std::process::exit(1);
    }

    let previous = match previous {
        Some(path) => {
            let data = std::fs::read(path)
                .with_context(|| format!("cannot read previous model {}", path.display()))?;
            ProvisioningModel::from_json(&data)?
        }
        None => ProvisioningModel::default(),
    };

    let mut model = stratus_mapper::map_payload(&payload);
    model.inherit(&previous);
    model.reconcile(&previous);

    let plan = model.plan();
    println!("Plan for {} ({})", model.name.cyan(), model.prefix());
    println!();

    for action in &plan.actions {
        let marker = match action.action_type {
            ActionType::Create => "+".green(),
            ActionType::Update => "~".yellow(),
            ActionType::Delete => "-".red(),
            ActionType::NoOp => " ".normal(),
        };
        println!("  {} {}", marker, action.description);
    }

    println!();
    if plan.has_changes {
        println!("{}", plan.summary().to_string().bold());
    } else {
        println!("{}", "No changes.".green());
    }

    Ok(())
}
