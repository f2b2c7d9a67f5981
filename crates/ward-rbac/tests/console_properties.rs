//! Console behavior against the built-in seed.

use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};
use ward_core::entities::UserDetail;
use ward_core::enums::{EcosystemStatus, Environment, VisibilityTier};
use ward_core::errors::CoreError;
use ward_rbac::filter::UserFilter;
use ward_rbac::{AdminContext, WardService};

#[fixture]
fn service() -> WardService {
    WardService::builtin(AdminContext::new("Element 5", Environment::Sandbox, "Element 5")).unwrap()
}

fn user_ids(service: &WardService, filter: &UserFilter) -> Vec<String> {
    service
        .list_users(filter)
        .into_iter()
        .map(|u| u.id.clone())
        .collect()
}

fn group_ids(service: &WardService, user_id: &str) -> Vec<String> {
    service.directory().require(user_id).unwrap().group_ids.clone()
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

#[rstest]
fn search_keeps_order_and_duplicates(service: WardService) {
    let results =
        service.search_identities("jane.cooper@element5.ai, JANE.COOPER@element5.ai ;missing@y.com");
    assert_eq!(results.len(), 3);
    assert_eq!(results[0], results[1]);
    assert_eq!(results[0].user_id(), Some("1"));
    assert!(!results[2].is_found());
    assert_eq!(results[2].display_email(), "missing@y.com");
    assert!(results[2].capabilities().is_empty());
}

#[rstest]
fn search_hydrates_groups_and_capabilities(service: WardService) {
    let results = service.search_identities("cody.fisher@element5.ai");
    let UserDetail::Found(cody) = &results[0] else {
        panic!("expected a found user");
    };
    assert_eq!(cody.role_groups[0].name, "Standard Support Pack");
    assert_eq!(cody.capabilities.ecosystem.status, EcosystemStatus::App);
    assert_eq!(
        cody.capabilities.dashboards.names().collect::<Vec<_>>(),
        ["Individual Stats", "Customer Success KPI", "Support Queue"]
    );
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

#[rstest]
fn resolution_attributes_each_capability(service: WardService) {
    let view = service.resolve_effective_permissions("1").unwrap();
    assert_eq!(view.vault_access.provided_by.as_deref(), Some("Admin Authority"));
    assert_eq!(view.ecosystem.status, EcosystemStatus::User);
    let workflows: Vec<(&str, &str)> = view
        .workflows
        .iter()
        .map(|w| (w.name.as_str(), w.provided_by.as_str()))
        .collect();
    assert_eq!(
        workflows,
        [
            ("Eligibility authorization", "Admin Authority"),
            ("Audit Workflow", "Regional Compliance"),
        ]
    );
    assert_eq!(view.dashboards.provided_by.as_deref(), Some("Admin Authority"));
    assert_eq!(view.dashboards.count(), 3);
}

#[rstest]
fn resolution_without_grants_has_no_providers(service: WardService) {
    let view = service.resolve_effective_permissions("3").unwrap();
    assert!(!view.vault_access.enabled);
    assert_eq!(view.vault_access.provided_by, None);
    assert_eq!(view.ecosystem.status, EcosystemStatus::None);
    assert_eq!(view.ecosystem.provided_by, None);
}

#[rstest]
fn resolution_is_deterministic(service: WardService) {
    let first = serde_json::to_string(&service.resolve_effective_permissions("1").unwrap()).unwrap();
    let second = serde_json::to_string(&service.resolve_effective_permissions("1").unwrap()).unwrap();
    assert_eq!(first, second);
}

#[rstest]
fn group_roles_resolve_like_direct_roles(mut service: WardService) {
    service.revoke_group_from_user("2", "rg-support").unwrap();
    service.assign_role_to_user("2", "Support Tier 1").unwrap();
    let direct = service.resolve_effective_permissions("2").unwrap();

    service.revoke_role_from_user("2", "Support Tier 1").unwrap();
    service.assign_group_to_user("2", "rg-support").unwrap();
    assert_eq!(service.resolve_effective_permissions("2").unwrap(), direct);
}

// ---------------------------------------------------------------------------
// Mutations
// ---------------------------------------------------------------------------

#[rstest]
fn role_assignment_is_idempotent(mut service: WardService) {
    assert!(service.assign_role_to_user("3", "Admin Authority").unwrap().changed);
    assert!(!service.assign_role_to_user("3", "Admin Authority").unwrap().changed);
    assert!(service.revoke_role_from_user("3", "Admin Authority").unwrap().changed);
    assert!(!service.revoke_role_from_user("3", "Admin Authority").unwrap().changed);
    assert_eq!(
        service.directory().require("3").unwrap().assigned_roles,
        ["Support Tier 1"]
    );
}

#[rstest]
fn group_assignment_is_idempotent(mut service: WardService) {
    assert!(service.assign_group_to_user("3", "rg-exec").unwrap().changed);
    assert!(!service.assign_group_to_user("3", "rg-exec").unwrap().changed);
    assert_eq!(group_ids(&service, "3"), ["rg-exec"]);
    assert!(service.revoke_group_from_user("3", "rg-exec").unwrap().changed);
    assert!(!service.revoke_group_from_user("3", "rg-exec").unwrap().changed);
    assert!(group_ids(&service, "3").is_empty());
}

#[rstest]
fn unknown_role_is_rejected_without_change(mut service: WardService) {
    let before = service.directory().require("3").unwrap().clone();
    let err = service.assign_role_to_user("3", "Root").unwrap_err();
    assert!(matches!(err, CoreError::Validation(_)));
    assert_eq!(service.directory().require("3").unwrap(), &before);
}

#[rstest]
fn unknown_group_is_not_found(mut service: WardService) {
    let err = service.assign_group_to_user("3", "rg-nope").unwrap_err();
    assert!(err.is_not_found());
    assert!(group_ids(&service, "3").is_empty());
}

#[rstest]
fn deleted_user_is_gone_for_good(mut service: WardService) {
    assert!(service.delete_user("4").unwrap().changed);
    assert!(service.assign_role_to_user("4", "Support Tier 1").unwrap_err().is_not_found());
    assert!(service.delete_user("4").unwrap_err().is_not_found());
    assert!(service.resolve_effective_permissions("4").unwrap_err().is_not_found());
    assert!(!service.search_identities("r.fox@graham.com")[0].is_found());
}

// ---------------------------------------------------------------------------
// Bulk
// ---------------------------------------------------------------------------

#[rstest]
fn bulk_assign_reports_only_new_holders(mut service: WardService) {
    let response = service.bulk_assign_group("rg-support", &["2", "3", "99"]).unwrap();
    assert_eq!(response.changed.iter().collect::<Vec<_>>(), ["3"]);
    assert_eq!(response.unchanged.iter().collect::<Vec<_>>(), ["2"]);
    assert_eq!(response.skipped, ["99"]);
    assert_eq!(group_ids(&service, "2"), ["rg-support"]);
    assert_eq!(group_ids(&service, "3"), ["rg-support"]);
}

#[rstest]
fn bulk_assign_with_unknown_group_changes_nothing(mut service: WardService) {
    let err = service.bulk_assign_group("rg-nope", &["3"]).unwrap_err();
    assert!(err.is_not_found());
    assert!(group_ids(&service, "3").is_empty());
}

#[rstest]
fn result_set_bulk_and_toggle(mut service: WardService) {
    let mut results =
        service.search_results("cody.fisher@element5.ai nobody@x.com j.wilson@element5.ai");
    let response = service.bulk_assign_results(&mut results, "rg-exec").unwrap();
    assert_eq!(response.changed.iter().collect::<Vec<_>>(), ["2", "3"]);
    assert_eq!(response.skipped, ["nobody@x.com"]);
    assert!(
        results.entries()[0]
            .role_groups()
            .iter()
            .any(|g| g.id == "rg-exec")
    );

    let holds = service
        .toggle_result_group(&mut results, "cody.fisher@element5.ai", "rg-exec")
        .unwrap();
    assert!(!holds);
    assert_eq!(group_ids(&service, "2"), ["rg-support"]);

    assert_eq!(results.remove("j.wilson@element5.ai"), 1);
    assert_eq!(results.len(), 2);
    assert!(service.directory().get("3").is_some());
}

#[rstest]
fn toggle_on_missing_entry_is_not_found(mut service: WardService) {
    let mut results = service.search_results("nobody@x.com");
    let err = service
        .toggle_result_group(&mut results, "nobody@x.com", "rg-exec")
        .unwrap_err();
    assert!(err.is_not_found());
}

// ---------------------------------------------------------------------------
// Groups
// ---------------------------------------------------------------------------

#[rstest]
#[case::nested_and_name("audit", None, &["rg-global", "rg-exec"])]
#[case::with_role("audit", Some("Support Tier 1"), &["rg-exec"])]
#[case::short_query("pac", None, &["rg-support"])]
#[case::no_match("zzz", None, &[])]
fn filter_role_groups(
    service: WardService,
    #[case] query: &str,
    #[case] role: Option<&str>,
    #[case] expected: &[&str],
) {
    let ids: Vec<String> = service
        .filter_role_groups(query, role)
        .into_iter()
        .map(|g| g.id)
        .collect();
    assert_eq!(ids, expected);
}

#[rstest]
fn created_group_is_listed_and_assignable(mut service: WardService) {
    let group = service
        .create_role_group("  Night Shift ", ["Support Tier 1", "Admin Authority"])
        .unwrap();
    assert_eq!(group.id, "rg-1");
    assert_eq!(group.name, "Night Shift");
    assert_eq!(service.filter_role_groups("night", None), [group.clone()]);

    service.assign_group_to_user("3", &group.id).unwrap();
    let view = service.resolve_effective_permissions("3").unwrap();
    assert_eq!(view.vault_access.provided_by.as_deref(), Some("Admin Authority"));
}

#[rstest]
#[case::blank_name(" ", vec!["Support Tier 1"])]
#[case::no_roles("Empty", vec![])]
#[case::unknown_role("Bad", vec!["Root"])]
fn create_role_group_validates(
    mut service: WardService,
    #[case] name: &str,
    #[case] roles: Vec<&str>,
) {
    let err = service.create_role_group(name, roles).unwrap_err();
    assert!(matches!(err, CoreError::Validation(_)), "{err}");
    assert_eq!(service.groups().len(), 3);
}

#[rstest]
fn describe_group_lists_role_bundles(service: WardService) {
    let detail = service.describe_group("rg-exec").unwrap();
    let names: Vec<&str> = detail.roles.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Regional Compliance", "Support Tier 1"]);
    assert!(detail.roles.iter().all(|r| r.known));
    assert_eq!(detail.roles[1].capabilities.workflows[0].name, "Denials management");
}

// ---------------------------------------------------------------------------
// Filters and menus
// ---------------------------------------------------------------------------

#[rstest]
fn empty_and_initial_filters_match_everyone(service: WardService) {
    let everyone = ["1", "2", "3", "4"];
    assert_eq!(user_ids(&service, &UserFilter::default()), everyone);
    let initial = UserFilter::initial(&service.filter_options());
    assert_eq!(user_ids(&service, &initial), everyone);
}

#[rstest]
#[case::tenant(UserFilter { tenants: vec!["LHC".into()], ..UserFilter::default() }, &["1", "3"])]
#[case::group(UserFilter { groups: vec!["Standard Support Pack".into()], ..UserFilter::default() }, &["2"])]
#[case::role(UserFilter { roles: vec!["User Authority".into()], ..UserFilter::default() }, &["2", "4"])]
#[case::text_on_name(UserFilter { text: "FOX".into(), ..UserFilter::default() }, &["4"])]
#[case::text_on_email(UserFilter { text: "element5.ai".into(), ..UserFilter::default() }, &["1", "2", "3"])]
#[case::dimensions_are_anded(
    UserFilter {
        tenants: vec!["Maze".into()],
        roles: vec!["User Authority".into()],
        ..UserFilter::default()
    },
    &["2"]
)]
fn user_filter_dimensions(service: WardService, #[case] filter: UserFilter, #[case] expected: &[&str]) {
    assert_eq!(user_ids(&service, &filter), expected);
}

#[rstest]
fn filter_options_follow_seed_order(service: WardService) {
    let options = service.filter_options();
    assert_eq!(options.tenants, ["Element 5", "LHC", "Graham", "Maze", "YV"]);
    assert_eq!(
        options.groups,
        ["Global Compliance", "Standard Support Pack", "Executive Audit"]
    );
    assert_eq!(options.roles.len(), 4);
}

#[rstest]
fn assign_menu_hides_held_roles_and_groups(service: WardService) {
    let menu = service.assign_menu("2").unwrap();
    assert_eq!(
        menu.roles,
        ["Support Tier 1", "Admin Authority", "Regional Compliance"]
    );
    let groups: Vec<&str> = menu.groups.iter().map(|g| g.id.as_str()).collect();
    assert_eq!(groups, ["rg-global", "rg-exec"]);
}

// ---------------------------------------------------------------------------
// Tenancy
// ---------------------------------------------------------------------------

#[rstest]
#[case::global_vision("1", VisibilityTier::GlobalVision, &["Element 5", "LHC", "Graham", "Maze", "YV"])]
#[case::standard_root("2", VisibilityTier::StandardRoot, &["Element 5"])]
#[case::restricted("3", VisibilityTier::Restricted, &["LHC"])]
#[case::restricted_secondary_root("4", VisibilityTier::Restricted, &["Graham"])]
fn access_map_scopes_tenants(
    service: WardService,
    #[case] user_id: &str,
    #[case] tier: VisibilityTier,
    #[case] tenants: &[&str],
) {
    let map = service.access_map(user_id).unwrap();
    assert_eq!(map.tier, tier);
    let shown: Vec<&str> = map.tenants.iter().map(|t| t.tenant.as_str()).collect();
    assert_eq!(shown, tenants);
    let capabilities = service.resolve_effective_permissions(user_id).unwrap();
    assert!(map.tenants.iter().all(|t| t.capabilities == capabilities));
}

#[rstest]
fn context_reports_root_tenant(service: WardService) {
    let context = service.context();
    assert_eq!(context.tenant, "Element 5");
    assert!(context.is_root);
}
