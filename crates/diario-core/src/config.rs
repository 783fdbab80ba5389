use crate::auth::Guard;
use crate::error::{DiarioError, Result};
use crate::paths;
use crate::types::Role;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// SiteConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub name: String,
}

// ---------------------------------------------------------------------------
// ReportConfig
// ---------------------------------------------------------------------------

/// Fixed text printed in the daily report footer and fallbacks for
/// missing relations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default)]
    pub leader_contact: String,
    #[serde(default)]
    pub coordinator_contact: String,
    #[serde(default = "default_fallback_cluster")]
    pub fallback_cluster_name: String,
}

fn default_fallback_cluster() -> String {
    "Cluster não especificado".to_string()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            leader_contact: String::new(),
            coordinator_contact: String::new(),
            fallback_cluster_name: default_fallback_cluster(),
        }
    }
}

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

fn default_views() -> BTreeMap<String, Guard> {
    let mut m = BTreeMap::new();
    m.insert("dashboard".to_string(), Guard::signed_in());
    m.insert("diaries".to_string(), Guard::signed_in());
    m.insert("diaries/new".to_string(), Guard::signed_in());
    m.insert("calendar".to_string(), Guard::signed_in());
    m.insert("reports".to_string(), Guard::signed_in());
    m.insert("teams".to_string(), Guard::at_least(Role::ClusterManager));
    m.insert("admin".to_string(), Guard::at_least(Role::Admin));
    m.insert("auth-debug".to_string(), Guard::open());
    m
}

static VIEW_RE: OnceLock<Regex> = OnceLock::new();

fn view_re() -> &'static Regex {
    VIEW_RE.get_or_init(|| {
        Regex::new(r"^[a-z0-9][a-z0-9\-]*(/[a-z0-9][a-z0-9\-]*)*$").expect("static regex")
    })
}

// ---------------------------------------------------------------------------
// Config (top-level)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,
    pub site: SiteConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default = "default_views")]
    pub views: BTreeMap<String, Guard>,
}

fn default_version() -> u32 {
    1
}

impl Config {
    pub fn new(site_name: impl Into<String>) -> Self {
        Self {
            version: 1,
            site: SiteConfig {
                name: site_name.into(),
            },
            report: ReportConfig::default(),
            views: default_views(),
        }
    }

    pub fn guard_for(&self, view: &str) -> Result<&Guard> {
        let key = view.trim_matches('/');
        self.views
            .get(key)
            .ok_or_else(|| DiarioError::UnknownView(view.to_string()))
    }

    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            return Err(DiarioError::NotInitialized);
        }
        let data = std::fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::config_path(root);
        let data = serde_yaml::to_string(self)?;
        crate::io::atomic_write(&path, data.as_bytes())
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        if self.report.leader_contact.trim().is_empty() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: "report.leader_contact is empty; the report footer will be blank"
                    .to_string(),
            });
        }
        if self.report.coordinator_contact.trim().is_empty() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: "report.coordinator_contact is empty; the report footer will be blank"
                    .to_string(),
            });
        }

        for (name, guard) in &self.views {
            if !view_re().is_match(name) {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Error,
                    message: format!("view '{name}' is not a lowercase path like 'diaries/new'"),
                });
            }

            let Some(roles) = &guard.roles else { continue };
            if roles.as_slice().is_empty() {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Error,
                    message: format!("view '{name}' has an empty role list; nobody can open it"),
                });
                continue;
            }
            if !guard.require_auth {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Warning,
                    message: format!(
                        "view '{name}' lists roles but does not require sign-in; \
                         anonymous visitors skip the role check"
                    ),
                });
            }
            if roles.as_slice().len() > 1 {
                if let Some(min) = roles.minimum() {
                    warnings.push(ConfigWarning {
                        level: WarnLevel::Warning,
                        message: format!(
                            "view '{name}' lists several roles; only the lowest ('{min}') has an effect"
                        ),
                    });
                }
            }
        }

        warnings
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{GuardDecision, RequiredRoles, Session, SessionUser};
    use tempfile::TempDir;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::new("UFV Sol Nascente");
        let yaml = serde_yaml::to_string(&cfg).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.site.name, "UFV Sol Nascente");
        assert_eq!(parsed.version, 1);
        assert_eq!(parsed.views, cfg.views);
    }

    #[test]
    fn minimal_yaml_gets_defaults() {
        let cfg: Config = serde_yaml::from_str("site:\n  name: x\n").unwrap();
        assert_eq!(cfg.report.fallback_cluster_name, "Cluster não especificado");
        assert!(cfg.views.contains_key("admin"));
    }

    #[test]
    fn load_missing_is_not_initialized() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(Config::load(dir.path()), Err(DiarioError::NotInitialized)));
    }

    #[test]
    fn save_then_load() {
        let dir = TempDir::new().unwrap();
        let mut cfg = Config::new("site");
        cfg.report.leader_contact = "Líder".into();
        cfg.save(dir.path()).unwrap();
        let loaded = Config::load(dir.path()).unwrap();
        assert_eq!(loaded.report, cfg.report);
    }

    #[test]
    fn guard_lookup() {
        let cfg = Config::new("site");
        let session = Session::signed_in(SessionUser {
            id: "u".into(),
            name: "Rui".into(),
            role: Role::Maintainer,
            cluster_id: None,
        });
        assert_eq!(cfg.guard_for("/admin").unwrap().check(&session), GuardDecision::Deny);
        assert_eq!(cfg.guard_for("diaries/new").unwrap().check(&session), GuardDecision::Allow);
        assert!(matches!(cfg.guard_for("nowhere"), Err(DiarioError::UnknownView(_))));
    }

    #[test]
    fn validate_flags_contacts_and_views() {
        let mut cfg = Config::new("site");
        cfg.views.insert(
            "locked".into(),
            Guard {
                require_auth: true,
                roles: Some(RequiredRoles::Many(vec![])),
            },
        );
        cfg.views.insert(
            "loose".into(),
            Guard {
                require_auth: false,
                roles: Some(RequiredRoles::One(Role::Admin)),
            },
        );
        cfg.views.insert(
            "multi".into(),
            Guard::at_least([Role::Admin, Role::Maintainer]),
        );
        cfg.views.insert("Bad View".into(), Guard::signed_in());

        let warnings = cfg.validate();
        let errors: Vec<_> = warnings.iter().filter(|w| w.level == WarnLevel::Error).collect();
        assert_eq!(errors.len(), 2);
        assert!(warnings.iter().any(|w| w.message.contains("leader_contact")));
        assert!(warnings.iter().any(|w| w.message.contains("'loose'")));
        assert!(warnings.iter().any(|w| w.message.contains("('maintainer')")));
    }

    #[test]
    fn filled_default_config_is_clean() {
        let mut cfg = Config::new("site");
        cfg.report.leader_contact = "A".into();
        cfg.report.coordinator_contact = "B".into();
        assert!(cfg.validate().is_empty());
    }
}
