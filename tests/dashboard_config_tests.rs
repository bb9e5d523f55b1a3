use attendance_charts::api::{
    BuilderPolicies, ChartDashboard, DASHBOARD_CONFIG_JSON_SCHEMA_V1, DashboardConfig,
};
use attendance_charts::core::attendance_catalog::{
    attendance_bar_definition, monthly_trend_definition,
};
use attendance_charts::core::{ChartKind, DefinitionCatalog};
use attendance_charts::host::SurfaceMap;
use attendance_charts::render::HeadlessEngine;
use attendance_charts::ChartError;

#[test]
fn catalog_rejects_duplicate_definition_ids() {
    let mut duplicate = monthly_trend_definition();
    duplicate.id = attendance_bar_definition().id;

    let err = DefinitionCatalog::new(vec![attendance_bar_definition(), duplicate])
        .expect_err("duplicate ids");

    assert_eq!(err, ChartError::DuplicateDefinitionId("attendanceBar".to_owned()));
}

#[test]
fn catalog_rejects_dataset_shape_that_does_not_match_kind() {
    let mut definition = attendance_bar_definition();
    definition.kind = ChartKind::Matrix;

    let err = DefinitionCatalog::new(vec![definition]).expect_err("shape mismatch");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn catalog_rejects_series_length_mismatch() {
    let mut definition = monthly_trend_definition();
    if let attendance_charts::core::DatasetSpec::Categorical(dataset) = &mut definition.dataset {
        dataset.series[0].values.pop();
    }

    let err = DefinitionCatalog::new(vec![definition]).expect_err("length mismatch");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn versioned_json_contract_round_trips() {
    let config = DashboardConfig::attendance().expect("attendance config");

    let json = config.to_json_contract_v1_pretty().expect("serialize");
    assert!(json.contains("\"schema_version\": 1"));
    let restored = DashboardConfig::from_json_compat_str(&json).expect("parse");

    assert_eq!(restored, config);
}

#[test]
fn bare_config_json_is_accepted() {
    let config = DashboardConfig::attendance().expect("attendance config");
    let json = serde_json::to_string(&config).expect("serialize");

    let restored = DashboardConfig::from_json_compat_str(&json).expect("parse");
    assert_eq!(restored.catalog.len(), 3);
}

#[test]
fn unknown_schema_version_is_rejected() {
    let config = DashboardConfig::attendance().expect("attendance config");
    let json = serde_json::json!({
        "schema_version": DASHBOARD_CONFIG_JSON_SCHEMA_V1 + 1,
        "config": config,
    })
    .to_string();

    let err = DashboardConfig::from_json_compat_str(&json).expect_err("future schema");
    assert!(matches!(err, ChartError::InvalidConfig(_)));
}

#[test]
fn duplicate_ids_in_json_are_rejected() {
    let json = serde_json::json!({
        "catalog": [attendance_bar_definition(), attendance_bar_definition()],
    })
    .to_string();

    let err = DashboardConfig::from_json_compat_str(&json).expect_err("duplicate ids");
    let message = err.to_string();
    assert!(matches!(err, ChartError::InvalidConfig(_)));
    assert!(
        message.contains("duplicate chart definition id `attendanceBar`"),
        "unexpected error: {message}"
    );
    assert!(!message.contains("schema_version"), "unexpected error: {message}");
}

#[test]
fn duplicate_ids_inside_versioned_envelope_are_reported() {
    let json = serde_json::json!({
        "schema_version": DASHBOARD_CONFIG_JSON_SCHEMA_V1,
        "config": { "catalog": [attendance_bar_definition(), attendance_bar_definition()] },
    })
    .to_string();

    let err = DashboardConfig::from_json_compat_str(&json).expect_err("duplicate ids");
    assert!(err.to_string().contains("duplicate chart definition id"));
}

#[test]
fn malformed_json_is_reported_as_invalid_config() {
    let err = DashboardConfig::from_json_compat_str("{ not json").expect_err("syntax error");
    assert!(matches!(err, ChartError::InvalidConfig(_)));
}

#[test]
fn series_colors_may_be_written_as_hex_strings() {
    let mut definition = serde_json::to_value(attendance_bar_definition()).expect("serialize");
    definition["dataset"]["Categorical"]["series"][0]["style"]["color"] =
        serde_json::json!("#4e79a7");
    let json = serde_json::json!({ "catalog": [definition] }).to_string();

    let config = DashboardConfig::from_json_compat_str(&json).expect("parse");

    let restored = config.catalog.get("attendanceBar").expect("bar definition");
    assert_eq!(restored, &attendance_bar_definition());
}

#[test]
fn invalid_hex_color_is_rejected() {
    let mut definition = serde_json::to_value(attendance_bar_definition()).expect("serialize");
    definition["dataset"]["Categorical"]["series"][0]["style"]["color"] =
        serde_json::json!("#+f+f+f");
    let json = serde_json::json!({ "catalog": [definition] }).to_string();

    assert!(DashboardConfig::from_json_compat_str(&json).is_err());
}

#[test]
fn missing_policies_fall_back_to_defaults() {
    let json = serde_json::json!({ "catalog": [monthly_trend_definition()] }).to_string();

    let config = DashboardConfig::from_json_compat_str(&json).expect("parse");
    assert_eq!(config.policies, BuilderPolicies::default());
}

#[test]
fn dashboard_rejects_invalid_style_policies() {
    let mut policies = BuilderPolicies::default();
    policies.line.tension = 1.5;
    let config = DashboardConfig::attendance()
        .expect("attendance config")
        .with_policies(policies);

    let err = ChartDashboard::new(config, HeadlessEngine::new(), SurfaceMap::new())
        .err()
        .expect("invalid tension");
    assert!(matches!(err, ChartError::InvalidConfig(_)));
}
