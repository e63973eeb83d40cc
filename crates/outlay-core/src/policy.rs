use serde::Deserialize;
use serde::Serialize;

use super::state::PolicyId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerDiemUnit {
    pub name: String,
    #[serde(default)]
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicySnapshot {
    pub id: PolicyId,
    pub name: String,
    #[serde(default)]
    pub members: Vec<String>,
    #[serde(default)]
    pub per_diem_unit: Option<PerDiemUnit>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerDiemCatalogEntry {
    pub policy_id: PolicyId,
    pub unit: PerDiemUnit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PerDiemEntryRoute {
    WorkspaceSelection,
    Destination {
        explicit_policy_id: Option<PolicyId>,
    },
}

pub fn has_enabled_per_diem(policy: &PolicySnapshot) -> bool {
    policy
        .per_diem_unit
        .as_ref()
        .is_some_and(|unit| unit.enabled)
}

pub fn collect_per_diem_units(
    policies: &[PolicySnapshot],
    current_user_email: Option<&str>,
) -> Vec<PerDiemCatalogEntry> {
    let Some(email) = current_user_email else {
        return Vec::new();
    };

    let mut entries: Vec<PerDiemCatalogEntry> = policies
        .iter()
        .filter(|policy| policy.members.iter().any(|member| member == email))
        .filter(|policy| has_enabled_per_diem(policy))
        .filter_map(|policy| {
            policy.per_diem_unit.clone().map(|unit| PerDiemCatalogEntry {
                policy_id: policy.id.clone(),
                unit,
            })
        })
        .collect();
    entries.sort_by(|a, b| a.policy_id.cmp(&b.policy_id));
    entries
}

pub fn per_diem_entry_route(
    catalog: &[PerDiemCatalogEntry],
    current_policy_has_per_diem: bool,
) -> PerDiemEntryRoute {
    let more_than_one = catalog.len() > 1;
    if more_than_one && !current_policy_has_per_diem {
        return PerDiemEntryRoute::WorkspaceSelection;
    }

    let explicit_policy_id = if more_than_one {
        None
    } else {
        catalog.first().map(|entry| entry.policy_id.clone())
    };
    PerDiemEntryRoute::Destination { explicit_policy_id }
}

pub fn parse_policy_snapshots(document: &str) -> Result<Vec<PolicySnapshot>, serde_yaml::Error> {
    serde_yaml::from_str(document)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn policy(id: &str, member: &str, per_diem: Option<bool>) -> PolicySnapshot {
        PolicySnapshot {
            id: PolicyId(id.to_string()),
            name: format!("Workspace {id}"),
            members: vec![member.to_string()],
            per_diem_unit: per_diem.map(|enabled| PerDiemUnit {
                name: "Per Diem".to_string(),
                enabled,
            }),
        }
    }

    #[test]
    fn per_diem_requires_a_present_and_enabled_unit() {
        assert!(!has_enabled_per_diem(&policy("a", "x@corp.com", None)));
        assert!(!has_enabled_per_diem(&policy("a", "x@corp.com", Some(false))));
        assert!(has_enabled_per_diem(&policy("a", "x@corp.com", Some(true))));
    }

    #[test]
    fn catalog_filters_membership_and_orders_by_policy_id() {
        let policies = vec![
            policy("beta", "ana@corp.com", Some(true)),
            policy("alpha", "ana@corp.com", Some(true)),
            policy("gamma", "someone-else@corp.com", Some(true)),
            policy("delta", "ana@corp.com", Some(false)),
        ];

        let entries = collect_per_diem_units(&policies, Some("ana@corp.com"));
        let ids: Vec<&str> = entries
            .iter()
            .map(|entry| entry.policy_id.0.as_str())
            .collect();
        assert_eq!(ids, vec!["alpha", "beta"]);
    }

    #[test]
    fn catalog_is_empty_without_a_session_user_or_policies() {
        let policies = vec![policy("alpha", "ana@corp.com", Some(true))];
        assert!(collect_per_diem_units(&policies, None).is_empty());
        assert!(collect_per_diem_units(&[], Some("ana@corp.com")).is_empty());
    }

    #[test]
    fn several_eligible_policies_without_a_current_unit_route_to_workspace_selection() {
        let policies = vec![
            policy("alpha", "ana@corp.com", Some(true)),
            policy("beta", "ana@corp.com", Some(true)),
        ];
        let catalog = collect_per_diem_units(&policies, Some("ana@corp.com"));

        assert_eq!(
            per_diem_entry_route(&catalog, false),
            PerDiemEntryRoute::WorkspaceSelection
        );
    }

    #[test]
    fn a_single_eligible_policy_routes_with_its_explicit_id() {
        let policies = vec![policy("alpha", "ana@corp.com", Some(true))];
        let catalog = collect_per_diem_units(&policies, Some("ana@corp.com"));

        assert_eq!(
            per_diem_entry_route(&catalog, false),
            PerDiemEntryRoute::Destination {
                explicit_policy_id: Some(PolicyId("alpha".to_string())),
            }
        );
    }

    #[test]
    fn several_eligible_policies_with_a_current_unit_route_to_the_destination() {
        let policies = vec![
            policy("alpha", "ana@corp.com", Some(true)),
            policy("beta", "ana@corp.com", Some(true)),
        ];
        let catalog = collect_per_diem_units(&policies, Some("ana@corp.com"));

        assert_eq!(
            per_diem_entry_route(&catalog, true),
            PerDiemEntryRoute::Destination {
                explicit_policy_id: None,
            }
        );
    }

    #[test]
    fn policy_snapshots_parse_from_yaml() {
        let yaml = r#"
- id: "travel-workspace"
  name: "Travel"
  members: ["ana@corp.com", "bo@corp.com"]
  per_diem_unit:
    name: "Per Diem International"
    enabled: true
- id: "sales-workspace"
  name: "Sales"
  members: ["ana@corp.com"]
- id: "legacy-workspace"
  name: "Legacy"
  per_diem_unit:
    name: "Per Diem"
    enabled: false
"#;

        let policies = parse_policy_snapshots(yaml).expect("parse policy document");
        assert_eq!(policies.len(), 3);
        assert!(has_enabled_per_diem(&policies[0]));
        assert!(!has_enabled_per_diem(&policies[1]));
        assert!(!has_enabled_per_diem(&policies[2]));
        assert_eq!(policies[1].members, vec!["ana@corp.com".to_string()]);
        assert!(policies[2].members.is_empty());
    }
}
