//! Each rubric check exercised on its own, without the orchestrator.

use stmx_grader::{
    grade::{
        FeedbackMechanism, check_base_model, check_calibration, check_feedback,
        check_mass_conservation, check_scenarios,
    },
    xmile::{Variable, VariableKind, Variables},
};

fn var(name: &str, kind: VariableKind, equation: &str) -> Variable {
    Variable::builder()
        .name(name)
        .kind(kind)
        .equation(equation)
        .build()
}

fn stock(name: &str) -> Variable {
    var(name, VariableKind::Stock, "0")
}

fn flow(name: &str, equation: &str) -> Variable {
    var(name, VariableKind::Flow, equation)
}

fn aux(name: &str, equation: &str) -> Variable {
    var(name, VariableKind::Aux, equation)
}

/// A model with every required element and no feedback loop.
fn base_model() -> Vec<Variable> {
    vec![
        stock("Atmosphere"),
        stock("Vegetation"),
        stock("SOM"),
        flow("GPP", "GPP_base"),
        flow("Autotrophic Respiration", "0.5*GPP"),
        flow("Litterfall", "Vegetation/10"),
        flow("Heterotrophic Respiration", "SOM/30"),
        flow("Emissions", "IF Scenario = 1 THEN 5 ELSE IF Scenario = 2 THEN 10 ELSE 0"),
        aux("GPP_base", "110"),
        aux("Scenario", "1"),
        aux("Total_Carbon", "Atmosphere+Vegetation+SOM"),
        aux("RMSE", "0"),
    ]
}

fn with(extra: impl IntoIterator<Item = Variable>) -> Variables {
    base_model().into_iter().chain(extra).collect()
}

#[test]
fn base_model_awards_all_twenty_points_when_complete() {
    let results = check_base_model(&with([]));

    assert_eq!(results.len(), 3);
    assert!(results.iter().all(|r| r.passed));
    let points: Vec<f64> = results.iter().map(|r| r.points).collect();
    assert_eq!(points, vec![4.0, 8.0, 8.0]);
}

#[test]
fn base_model_lists_exactly_what_is_missing() {
    let variables: Variables = base_model()
        .into_iter()
        .filter(|v| v.name != "SOM" && v.name != "Litterfall")
        .chain([aux("Emissions", "5")])
        .collect();

    let results = check_base_model(&variables);

    assert_eq!(results[0].name, "Required Stocks");
    assert!(!results[0].passed);
    assert_eq!(results[0].points, 0.0);
    assert_eq!(results[0].message, "Missing stocks: som");

    assert_eq!(results[1].message, "Missing flows: litterfall, emissions");
    assert_eq!(results[1].max_points, 8.0);

    assert!(results[2].passed);
}

#[test]
fn calibration_bands() {
    let grade = |eqn: &str| check_calibration(&with([aux("GPP_base", eqn)]));

    let optimal = grade("110");
    assert!(optimal.passed);
    assert_eq!(optimal.points, 25.0);
    assert!(optimal.message.contains("well calibrated"));

    for edge in ["108", "112", " 111.5\n"] {
        assert_eq!(grade(edge).points, 25.0, "{edge:?} is inside the optimal band");
    }

    let acceptable = grade("100");
    assert!(acceptable.passed);
    assert_eq!(acceptable.points, 20.0);
    assert_eq!(grade("120").points, 20.0);
    assert_eq!(grade("107.9").points, 20.0);

    let high = grade("150");
    assert!(!high.passed);
    assert_eq!(high.points, 5.0);
    assert!(high.message.contains("outside expected range 100-120"));
    assert_eq!(grade("99.99").points, 5.0);
}

#[test]
fn calibration_non_numeric_equation_echoes_text() {
    let result = check_calibration(&with([aux("GPP_base", "high")]));

    assert!(!result.passed);
    assert_eq!(result.points, 10.0);
    assert!(result.message.contains("\"high\""));

    assert_eq!(check_calibration(&with([aux("GPP_base", "")])).points, 10.0);
}

#[test]
fn calibration_without_gpp_base_scores_zero() {
    let variables: Variables = base_model()
        .into_iter()
        .filter(|v| v.name != "GPP_base")
        .collect();

    let result = check_calibration(&variables);
    assert!(!result.passed);
    assert_eq!(result.points, 0.0);
    assert_eq!(result.max_points, 25.0);
}

#[test]
fn no_feedback_scores_zero() {
    let variables = with([aux("Q10", "2"), aux("Temperature", "15"), aux("Kn", "1")]);

    assert_eq!(FeedbackMechanism::detect(&variables), None);
    let result = check_feedback(&variables);
    assert!(!result.passed);
    assert_eq!(result.points, 0.0);
    assert!(result.message.contains("(Q10+Temperature+T_ref)"));
    assert!(result.message.contains("(Available_N+Kn)"));
    assert!(result.message.contains("(Deforestation_Rate+Deforestation flow)"));
}

#[test]
fn q10_feedback_wired_into_heterotrophic_respiration() {
    let variables = with([
        aux("Q10", "2"),
        aux("Temperature", "14 + 0.01*(Atmosphere - 600)"),
        aux("T_ref", "14"),
        flow("Heterotrophic Respiration", "SOM/30*q10^((Temperature-T_ref)/10)"),
    ]);

    assert_eq!(
        FeedbackMechanism::detect(&variables),
        Some(FeedbackMechanism::Q10Temperature)
    );
    let result = check_feedback(&variables);
    assert!(result.passed);
    assert_eq!(result.points, 25.0);
    assert!(result.message.starts_with("Option A: Q10 Temperature Feedback."));
    assert!(!result.message.contains("WARNING"));
}

#[test]
fn q10_feedback_unwired_keeps_partial_credit() {
    let variables = with([aux("Q10", "2"), aux("Temperature", "15"), aux("T_ref", "14")]);

    let result = check_feedback(&variables);
    assert!(result.passed);
    assert_eq!(result.points, 15.0);
    assert!(
        result
            .message
            .contains("WARNING: Het_Resp equation does not reference Q10")
    );
    assert!(
        result
            .message
            .contains("WARNING: Temperature should depend on Atmosphere")
    );
}

#[test]
fn temperature_warning_does_not_cost_points() {
    let variables = with([
        aux("Q10", "2"),
        aux("Temperature", "15"),
        aux("T_ref", "14"),
        flow("Heterotrophic Respiration", "SOM/30*Q10"),
    ]);

    let result = check_feedback(&variables);
    assert_eq!(result.points, 25.0);
    assert!(result.message.contains("Temperature should depend on Atmosphere"));
}

#[test]
fn q10_takes_priority_over_nitrogen() {
    let variables = with([
        aux("Q10", "2"),
        aux("Temperature", "Atmosphere/50"),
        aux("T_ref", "14"),
        aux("Available_N", "2"),
        aux("Kn", "1"),
        flow("GPP", "GPP_base*Available_N/(Kn+Available_N)"),
    ]);

    assert_eq!(
        FeedbackMechanism::detect(&variables),
        Some(FeedbackMechanism::Q10Temperature)
    );
    assert_eq!(check_feedback(&variables).points, 15.0);
}

#[test]
fn nitrogen_feedback() {
    let wired = with([
        aux("Available N", "2"),
        aux("Kn", "1"),
        flow("GPP", "GPP_base*Available_N/(Kn+Available_N)"),
    ]);
    let result = check_feedback(&wired);
    assert_eq!(result.points, 25.0);
    assert!(result.message.starts_with("Option B: Nitrogen Limitation."));

    let unwired = with([aux("Available_N", "2"), aux("Kn", "1")]);
    let result = check_feedback(&unwired);
    assert!(result.passed);
    assert_eq!(result.points, 15.0);
    assert!(result.message.contains("WARNING: GPP equation does not reference Available_N"));
}

#[test]
fn deforestation_requires_a_flow() {
    let as_aux = with([
        aux("Deforestation_Rate", "0.01"),
        aux("Deforestation", "Vegetation*Deforestation_Rate"),
    ]);
    assert_eq!(FeedbackMechanism::detect(&as_aux), None);

    let as_flow = with([
        aux("Deforestation_Rate", "0.01"),
        flow("Deforestation", "Vegetation*Deforestation_Rate"),
    ]);
    let result = check_feedback(&as_flow);
    assert_eq!(result.points, 25.0);
    assert!(result.message.contains("Deforestation flow properly defined"));

    let half_wired = with([
        aux("Deforestation_Rate", "0.01"),
        flow("Deforestation", "Vegetation*0.01"),
    ]);
    let result = check_feedback(&half_wired);
    assert!(result.passed);
    assert_eq!(result.points, 15.0);
}

#[test]
fn scenario_logic() {
    let grade = |eqn: &str| check_scenarios(&with([flow("Emissions", eqn)]));

    let full = grade("IF Scenario=1 THEN 5 ELSE IF Scenario=2 THEN 10");
    assert!(full.passed);
    assert_eq!(full.points, 20.0);
    assert!(full.message.contains("2 Scenario references"));

    let partial = grade("if scenario = 1 then 5 else 0");
    assert!(partial.passed);
    assert_eq!(partial.points, 15.0);

    let no_selector = grade("IF TIME > 2000 THEN 5 ELSE 0");
    assert!(!no_selector.passed);
    assert_eq!(no_selector.points, 10.0);

    let no_branch = grade("5*Scenario");
    assert!(!no_branch.passed);
    assert_eq!(no_branch.points, 5.0);
}

#[test]
fn scenario_without_emissions_scores_zero() {
    let variables: Variables = base_model()
        .into_iter()
        .filter(|v| v.name != "Emissions")
        .collect();

    let result = check_scenarios(&variables);
    assert!(!result.passed);
    assert_eq!(result.points, 0.0);
    assert_eq!(result.message, "Emissions flow not found");
}

#[test]
fn mass_conservation() {
    let grade = |eqn: &str| check_mass_conservation(&with([aux("Total Carbon", eqn)]));

    let full = grade("atmosphere + VEGETATION + Som");
    assert!(full.passed);
    assert_eq!(full.points, 10.0);

    let partial = grade("Atmosphere + Vegetation");
    assert!(!partial.passed);
    assert_eq!(partial.points, 5.0);
    assert_eq!(partial.message, "Total_Carbon missing: SOM");

    assert_eq!(grade("0").message, "Total_Carbon missing: Atmosphere, Vegetation, SOM");

    let variables: Variables = base_model()
        .into_iter()
        .filter(|v| v.name != "Total_Carbon")
        .collect();
    assert_eq!(check_mass_conservation(&variables).points, 0.0);
}
