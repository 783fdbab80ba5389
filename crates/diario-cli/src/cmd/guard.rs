use crate::output::print_json;
use anyhow::Context;
use diario_core::auth::{public_guard, GuardDecision, Session, SessionUser};
use diario_core::config::Config;
use diario_core::types::Role;
use std::path::Path;

const LOGIN_VIEW: &str = "login";

pub fn run(root: &Path, view: &str, role: Option<Role>, json: bool) -> anyhow::Result<()> {
    let session = match role {
        Some(role) => Session::signed_in(SessionUser {
            id: "cli".to_string(),
            name: "cli".to_string(),
            role,
            cluster_id: None,
        }),
        None => Session::anonymous(),
    };

    let decision = if view.trim_matches('/') == LOGIN_VIEW {
        public_guard(&session)
    } else {
        let config = Config::load(root).context("failed to load config")?;
        let guard = config.guard_for(view)?;
        guard.check(&session)
    };
    tracing::debug!(view, ?role, decision = decision.as_str(), "guard evaluated");

    if json {
        print_json(&serde_json::json!({
            "view": view,
            "role": role,
            "decision": decision,
        }))?;
    } else {
        let who = role.map(|r| r.as_str()).unwrap_or("anonymous");
        let outcome = match decision {
            GuardDecision::Allow => "allow",
            GuardDecision::RedirectToLogin => "redirect to login",
            GuardDecision::RedirectToDashboard => "redirect to dashboard",
            GuardDecision::Deny => "access denied",
        };
        println!("{view} as {who}: {outcome}");
    }

    if !decision.is_allowed() {
        anyhow::bail!("view '{view}' is not available ({})", decision.as_str());
    }
    Ok(())
}
