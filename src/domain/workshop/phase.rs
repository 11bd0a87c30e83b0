//! Workshop phase state machine.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Sequential stages of the workshop wizard.
///
/// The flow is linear with one backward edge: the narrowing stage can
/// return to the shortlist stage without losing the shortlist. The
/// prerequisites stage is left automatically once both the system-area
/// and strategic-goal lists are non-empty, and re-entered if the lists
/// empty out while still in the shortlist stage. Later stages are never
/// forcibly navigated away from; losing prerequisites there blocks
/// selection instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkshopPhase {
    /// Collecting system areas and strategic goals; selection is blocked.
    #[default]
    Prerequisites,
    /// Shortlisting up to seven characteristics from the full catalog.
    SelectSeven,
    /// Narrowing the shortlist of seven down to three.
    NarrowToThree,
    /// Scoring risks per finally-selected characteristic.
    RiskAssessment,
}

impl StateMachine for WorkshopPhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        use WorkshopPhase::*;
        matches!(
            (self, target),
            (Prerequisites, SelectSeven)
                | (SelectSeven, Prerequisites)
                | (SelectSeven, NarrowToThree)
                | (NarrowToThree, SelectSeven)
                | (NarrowToThree, RiskAssessment)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use WorkshopPhase::*;
        match self {
            Prerequisites => vec![SelectSeven],
            SelectSeven => vec![Prerequisites, NarrowToThree],
            NarrowToThree => vec![SelectSeven, RiskAssessment],
            RiskAssessment => vec![],
        }
    }
}

impl fmt::Display for WorkshopPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WorkshopPhase::Prerequisites => "prerequisites",
            WorkshopPhase::SelectSeven => "select_seven",
            WorkshopPhase::NarrowToThree => "narrow_to_three",
            WorkshopPhase::RiskAssessment => "risk_assessment",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_phase_is_prerequisites() {
        assert_eq!(WorkshopPhase::default(), WorkshopPhase::Prerequisites);
    }

    #[test]
    fn forward_path_is_linear() {
        let phase = WorkshopPhase::Prerequisites;
        let phase = phase.transition_to(WorkshopPhase::SelectSeven).unwrap();
        let phase = phase.transition_to(WorkshopPhase::NarrowToThree).unwrap();
        let phase = phase.transition_to(WorkshopPhase::RiskAssessment).unwrap();
        assert!(phase.is_terminal());
    }

    #[test]
    fn narrowing_can_go_back_to_shortlist() {
        assert!(WorkshopPhase::NarrowToThree.can_transition_to(&WorkshopPhase::SelectSeven));
    }

    #[test]
    fn skipping_stages_is_rejected() {
        assert!(WorkshopPhase::Prerequisites
            .transition_to(WorkshopPhase::NarrowToThree)
            .is_err());
        assert!(WorkshopPhase::SelectSeven
            .transition_to(WorkshopPhase::RiskAssessment)
            .is_err());
    }

    #[test]
    fn risk_assessment_has_no_outgoing_transitions() {
        assert!(WorkshopPhase::RiskAssessment.valid_transitions().is_empty());
    }

    #[test]
    fn phase_serializes_snake_case() {
        let json = serde_json::to_string(&WorkshopPhase::NarrowToThree).unwrap();
        assert_eq!(json, "\"narrow_to_three\"");
    }
}
