use crate::output::print_json;
use diario_core::auth::{authorize, RequiredRoles};
use diario_core::types::Role;

pub fn run(role: Role, required: Vec<Role>, json: bool) -> anyhow::Result<()> {
    let required = RequiredRoles::from(required);
    let minimum = required.minimum();
    let allowed = authorize(role, required.clone());
    tracing::debug!(%role, ?minimum, allowed, "role check");

    if json {
        print_json(&serde_json::json!({
            "role": role,
            "required": required,
            "effective_minimum": minimum,
            "allowed": allowed,
        }))?;
    } else if allowed {
        println!("allowed: {role} meets the requirement");
    } else {
        let needed = minimum.map(|r| r.as_str()).unwrap_or("-");
        println!("denied: {role} is below {needed}");
    }

    if !allowed {
        anyhow::bail!("access denied for role '{role}'");
    }
    Ok(())
}
