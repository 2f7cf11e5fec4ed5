#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Detection and wiring of the one feedback loop students add to the model.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::results::CheckResult;
use crate::xmile::{VariableKind, Variables};

/// Check label.
const NAME: &str = "Feedback Mechanism";
/// Category ceiling.
pub const MAX_POINTS: f64 = 25.0;
/// Awarded once any option's elements are all present.
pub const PRESENCE_POINTS: f64 = 15.0;
/// Added when the feedback term is referenced where it should be.
pub const WIRING_POINTS: f64 = 10.0;

/// Variables that make up Option A.
pub const Q10_ELEMENTS: [&str; 3] = ["q10", "temperature", "t_ref"];
/// Variables that make up Option B.
pub const NITROGEN_ELEMENTS: [&str; 2] = ["available_n", "kn"];

/// The acceptable feedback options, in detection priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackMechanism {
    /// Option A: respiration scales with temperature through Q10.
    Q10Temperature,
    /// Option B: GPP limited by available nitrogen.
    NitrogenLimitation,
    /// Option C: a deforestation outflow from vegetation.
    Deforestation,
}

/// What [`FeedbackMechanism::wiring`] found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wiring {
    /// Whether the feedback term is referenced where it has to be.
    pub wired: bool,
    /// Notes and warnings, in the order they were found.
    pub notes: Vec<String>,
}

impl FeedbackMechanism {
    /// Returns the first option whose elements are all present, checking
    /// Q10, then nitrogen, then deforestation.
    pub fn detect(variables: &Variables) -> Option<Self> {
        if Q10_ELEMENTS.iter().all(|key| variables.contains(key)) {
            Some(FeedbackMechanism::Q10Temperature)
        } else if NITROGEN_ELEMENTS.iter().all(|key| variables.contains(key)) {
            Some(FeedbackMechanism::NitrogenLimitation)
        } else if variables.contains("deforestation_rate")
            && variables.contains_kind("deforestation", VariableKind::Flow)
        {
            Some(FeedbackMechanism::Deforestation)
        } else {
            None
        }
    }

    /// Inspects the equation that should carry this option's feedback term.
    pub fn wiring(self, variables: &Variables) -> Wiring {
        let lowered = |key: &str| variables.equation(key).map(str::to_lowercase);
        let mut notes = Vec::new();

        let wired = match self {
            FeedbackMechanism::Q10Temperature => {
                let wired =
                    lowered("heterotrophic_respiration").is_some_and(|eq| eq.contains("q10"));
                notes.push(if wired {
                    "Het_Resp equation contains Q10"
                } else {
                    "WARNING: Het_Resp equation does not reference Q10"
                });
                // Informational only, no points ride on it.
                notes.push(
                    if lowered("temperature").is_some_and(|eq| eq.contains("atmosphere")) {
                        "Temperature depends on Atmosphere"
                    } else {
                        "WARNING: Temperature should depend on Atmosphere"
                    },
                );
                wired
            }
            FeedbackMechanism::NitrogenLimitation => {
                let wired = lowered("gpp").is_some_and(|eq| eq.contains("available_n"));
                notes.push(if wired {
                    "GPP equation contains nitrogen term"
                } else {
                    "WARNING: GPP equation does not reference Available_N"
                });
                wired
            }
            FeedbackMechanism::Deforestation => {
                let wired = lowered("deforestation").is_some_and(|eq| {
                    eq.contains("vegetation") && eq.contains("deforestation_rate")
                });
                notes.push(if wired {
                    "Deforestation flow properly defined"
                } else {
                    "WARNING: Deforestation should use Vegetation and Deforestation_Rate"
                });
                wired
            }
        };

        Wiring {
            wired,
            notes: notes.into_iter().map(str::to_owned).collect(),
        }
    }
}

impl Display for FeedbackMechanism {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedbackMechanism::Q10Temperature => write!(f, "Option A: Q10 Temperature Feedback"),
            FeedbackMechanism::NitrogenLimitation => write!(f, "Option B: Nitrogen Limitation"),
            FeedbackMechanism::Deforestation => write!(f, "Option C: Deforestation"),
        }
    }
}

/// Grades the feedback loop: 15 points for its elements, 10 more when it is
/// wired into the right equation. Passes whenever the elements exist.
pub fn check_feedback(variables: &Variables) -> CheckResult {
    let Some(mechanism) = FeedbackMechanism::detect(variables) else {
        return CheckResult::fail(
            NAME,
            "No feedback mechanism detected. Need: (Q10+Temperature+T_ref) OR (Available_N+Kn) \
             OR (Deforestation_Rate+Deforestation flow)",
            0.0,
            MAX_POINTS,
        );
    };

    let wiring = mechanism.wiring(variables);
    let points = if wiring.wired {
        PRESENCE_POINTS + WIRING_POINTS
    } else {
        PRESENCE_POINTS
    };
    tracing::debug!(?mechanism, wired = wiring.wired, "feedback detected");

    CheckResult::pass(
        NAME,
        format!("{mechanism}. {}", wiring.notes.join("; ")),
        points,
        MAX_POINTS,
    )
}
