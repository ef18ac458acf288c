//! Intake funnel: how far initiatives progress through the portfolio.

use sprintlens_core::{Initiative, InitiativeStatus};

use super::types::{FunnelStage, IntakeFunnel};
use crate::stats;

/// Funnel stages in order. A stage counts every initiative that reached it.
const STAGES: [InitiativeStatus; 3] = [
    InitiativeStatus::Backlog,
    InitiativeStatus::Active,
    InitiativeStatus::Completed,
];

pub fn create_intake_funnel_data(initiatives: &[Initiative]) -> IntakeFunnel {
    let count = |status: InitiativeStatus| initiatives.iter().filter(|i| i.status == status).count();

    let completed = count(InitiativeStatus::Completed);
    let active = count(InitiativeStatus::Active) + completed;
    let backlog = count(InitiativeStatus::Backlog) + active;

    let mut stages = Vec::with_capacity(STAGES.len());
    let mut previous: Option<usize> = None;
    for (stage, reached) in STAGES.into_iter().zip([backlog, active, completed]) {
        let conversion = match previous {
            None => 1.0,
            Some(prev) => stats::ratio_or(reached as f64, prev as f64, 0.0),
        };
        stages.push(FunnelStage {
            stage,
            count: reached,
            conversion,
        });
        previous = Some(reached);
    }

    IntakeFunnel {
        stages,
        deprioritized: count(InitiativeStatus::Deprioritized),
    }
}

#[cfg(test)]
mod tests {
    use sprintlens_core::RoiEstimate;

    use super::*;

    fn with_status(id: &str, status: InitiativeStatus) -> Initiative {
        Initiative {
            initiative_id: id.to_string(),
            name: id.to_string(),
            status,
            impact_score: 5.0,
            effort_score: 5.0,
            total_story_points: 20.0,
            roi_estimate: RoiEstimate::Medium,
            start_sprint: None,
            target_sprint: None,
        }
    }

    #[test]
    fn test_stages_are_cumulative() {
        let funnel = create_intake_funnel_data(&[
            with_status("I1", InitiativeStatus::Backlog),
            with_status("I2", InitiativeStatus::Backlog),
            with_status("I3", InitiativeStatus::Active),
            with_status("I4", InitiativeStatus::Completed),
            with_status("I5", InitiativeStatus::Deprioritized),
        ]);
        let counts: Vec<usize> = funnel.stages.iter().map(|s| s.count).collect();
        assert_eq!(counts, vec![4, 2, 1]);
        assert_eq!(funnel.stages[0].conversion, 1.0);
        assert!((funnel.stages[1].conversion - 0.5).abs() < 1e-9);
        assert!((funnel.stages[2].conversion - 0.5).abs() < 1e-9);
        assert_eq!(funnel.deprioritized, 1);
    }

    #[test]
    fn test_empty_stage_gives_zero_conversion() {
        let funnel = create_intake_funnel_data(&[with_status("I1", InitiativeStatus::Deprioritized)]);
        assert!(funnel.stages.iter().all(|s| s.count == 0));
        assert_eq!(funnel.stages[1].conversion, 0.0);
    }
}
