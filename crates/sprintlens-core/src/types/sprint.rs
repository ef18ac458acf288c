//! Sprint: one two-week iteration.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One sprint as loaded from source data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sprint {
    pub sprint_number: u32,
    pub committed_points: f64,
    pub completed_points: f64,
    pub team_capacity: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Sprint {
    /// Completed / committed. 0.0 when nothing was committed.
    pub fn completion_rate(&self) -> f64 {
        if self.committed_points > 0.0 {
            self.completed_points / self.committed_points
        } else {
            0.0
        }
    }

    /// Story points completed in this sprint.
    pub fn velocity(&self) -> f64 {
        self.completed_points
    }

    /// Completed / team capacity. 0.0 when capacity is not positive.
    pub fn utilization(&self) -> f64 {
        if self.team_capacity > 0.0 {
            self.completed_points / self.team_capacity
        } else {
            0.0
        }
    }
}
