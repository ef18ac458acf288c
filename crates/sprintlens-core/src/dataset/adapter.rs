//! Normalization of raw records into typed tables.

use std::str::FromStr;

use chrono::NaiveDate;
use rustc_hash::FxHashSet;

use super::raw::{RawInitiativeRecord, RawSprintRecord, RawStoryRecord, RawTeamMemberRecord};
use crate::errors::DatasetError;
use crate::types::{Initiative, Sprint, Story, StoryStatus, TeamMember};

pub(crate) const SPRINTS: &str = "sprints";
pub(crate) const STORIES: &str = "stories";
pub(crate) const INITIATIVES: &str = "initiatives";
pub(crate) const TEAM: &str = "team";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Position of the record being normalized, attached to every error.
#[derive(Clone, Copy)]
struct Row {
    table: &'static str,
    index: usize,
}

impl Row {
    fn new(table: &'static str, index: usize) -> Self {
        Self { table, index }
    }

    fn invalid(&self, column: &'static str, message: impl Into<String>) -> DatasetError {
        DatasetError::InvalidValue {
            table: self.table,
            column,
            row: self.index,
            message: message.into(),
        }
    }

    fn required<T>(&self, value: Option<T>, column: &'static str) -> Result<T, DatasetError> {
        value.ok_or(DatasetError::MissingColumn {
            table: self.table,
            column,
            row: self.index,
        })
    }

    fn key(&self, value: Option<&String>, column: &'static str) -> Result<String, DatasetError> {
        let value = self.required(value, column)?;
        if value.trim().is_empty() {
            return Err(self.invalid(column, "must not be blank"));
        }
        Ok(value.trim().to_string())
    }

    fn label<T>(&self, value: Option<&str>, column: &'static str) -> Result<T, DatasetError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        self.required(value, column)?
            .parse::<T>()
            .map_err(|e| self.invalid(column, e.to_string()))
    }

    fn date(&self, raw: &str, column: &'static str) -> Result<NaiveDate, DatasetError> {
        let trimmed = raw.trim();
        // Timestamps ("2024-01-02 00:00:00", "2024-01-02T00:00:00") keep the date part.
        // Anything else after the date is left in place and fails to parse.
        let date_part = match trimmed.char_indices().nth(10) {
            Some((idx, ' ' | 'T')) => &trimmed[..idx],
            _ => trimmed,
        };
        NaiveDate::parse_from_str(date_part, DATE_FORMAT)
            .map_err(|e| self.invalid(column, format!("'{raw}': {e}")))
    }

    fn optional_date(
        &self,
        raw: Option<&str>,
        column: &'static str,
    ) -> Result<Option<NaiveDate>, DatasetError> {
        raw.filter(|s| !s.trim().is_empty())
            .map(|s| self.date(s, column))
            .transpose()
    }

    fn non_negative(&self, value: f64, column: &'static str) -> Result<(), DatasetError> {
        if value.is_finite() && value >= 0.0 {
            Ok(())
        } else {
            Err(self.invalid(column, format!("expected a non-negative number, got {value}")))
        }
    }

    fn positive(&self, value: f64, column: &'static str) -> Result<(), DatasetError> {
        if value.is_finite() && value > 0.0 {
            Ok(())
        } else {
            Err(self.invalid(column, format!("must be positive, got {value}")))
        }
    }

    fn score(&self, value: f64, column: &'static str) -> Result<(), DatasetError> {
        if value.is_finite() && (0.0..=10.0).contains(&value) {
            Ok(())
        } else {
            Err(self.invalid(column, format!("expected a score in 0-10, got {value}")))
        }
    }

    fn non_blank_key(&self, value: &str, column: &'static str) -> Result<(), DatasetError> {
        if value.trim().is_empty() {
            Err(self.invalid(column, "must not be blank"))
        } else {
            Ok(())
        }
    }
}

fn non_blank(value: Option<&String>) -> Option<String> {
    value
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

pub(crate) fn sprint(raw: &RawSprintRecord, index: usize) -> Result<Sprint, DatasetError> {
    let row = Row::new(SPRINTS, index);
    let sprint_number = row.required(raw.sprint_number, "sprint_number")?;
    let committed_points = row.required(raw.committed_points, "committed_points")?;
    let completed_points = row.required(raw.completed_points, "completed_points")?;
    let team_capacity = row.required(raw.team_capacity, "team_capacity")?;
    let start_date = row.date(row.required(raw.start_date.as_deref(), "start_date")?, "start_date")?;
    let end_date = row.date(row.required(raw.end_date.as_deref(), "end_date")?, "end_date")?;

    Ok(Sprint {
        sprint_number,
        committed_points,
        completed_points,
        team_capacity,
        start_date,
        end_date,
    })
}

pub(crate) fn story(raw: &RawStoryRecord, index: usize) -> Result<Story, DatasetError> {
    let row = Row::new(STORIES, index);
    let story_id = row.key(raw.story_id.as_ref(), "story_id")?;
    let sprint_number = row.required(raw.sprint_number, "sprint_number")?;
    let story_type = row.label(raw.story_type.as_deref(), "story_type")?;
    let status = row.label(raw.status.as_deref(), "status")?;
    let initial_story_points = row.required(raw.initial_story_points, "initial_story_points")?;
    let final_story_points = row.required(raw.final_story_points, "final_story_points")?;
    let start_date = row.optional_date(raw.start_date.as_deref(), "start_date")?;
    let completion_date = row.optional_date(raw.completion_date.as_deref(), "completion_date")?;

    Ok(Story {
        story_id,
        sprint_number,
        assignee_id: non_blank(raw.assignee_id.as_ref()),
        story_type,
        status,
        initial_story_points,
        final_story_points,
        start_date,
        completion_date,
    })
}

pub(crate) fn initiative(
    raw: &RawInitiativeRecord,
    index: usize,
) -> Result<Initiative, DatasetError> {
    let row = Row::new(INITIATIVES, index);

    Ok(Initiative {
        initiative_id: row.key(raw.initiative_id.as_ref(), "initiative_id")?,
        name: row.required(raw.name.clone(), "name")?,
        status: row.label(raw.status.as_deref(), "status")?,
        impact_score: row.required(raw.impact_score, "impact_score")?,
        effort_score: row.required(raw.effort_score, "effort_score")?,
        total_story_points: row.required(raw.total_story_points, "total_story_points")?,
        roi_estimate: row.label(raw.roi_estimate.as_deref(), "roi_estimate")?,
        start_sprint: raw.start_sprint,
        target_sprint: raw.target_sprint,
    })
}

pub(crate) fn team_member(
    raw: &RawTeamMemberRecord,
    index: usize,
) -> Result<TeamMember, DatasetError> {
    let row = Row::new(TEAM, index);

    Ok(TeamMember {
        member_id: row.key(raw.member_id.as_ref(), "member_id")?,
        name: row.required(raw.name.clone(), "name")?,
        avg_capacity_per_sprint: row.required(raw.avg_capacity_per_sprint, "avg_capacity_per_sprint")?,
        role: non_blank(raw.role.as_ref()),
    })
}

/// Value rules for a typed sprint row.
pub(crate) fn check_sprint(sprint: &Sprint, index: usize) -> Result<(), DatasetError> {
    let row = Row::new(SPRINTS, index);
    row.non_negative(sprint.committed_points, "committed_points")?;
    row.non_negative(sprint.completed_points, "completed_points")?;
    row.positive(sprint.team_capacity, "team_capacity")?;
    if sprint.end_date < sprint.start_date {
        return Err(row.invalid("end_date", "sprint ends before it starts"));
    }
    Ok(())
}

/// Value rules for a typed story row, including the completion-date rule:
/// a completion date is present iff the story is Completed.
pub(crate) fn check_story(story: &Story, index: usize) -> Result<(), DatasetError> {
    let row = Row::new(STORIES, index);
    row.non_blank_key(&story.story_id, "story_id")?;
    row.non_negative(story.initial_story_points, "initial_story_points")?;
    row.non_negative(story.final_story_points, "final_story_points")?;

    let completed = story.status == StoryStatus::Completed;
    if completed && story.completion_date.is_none() {
        return Err(row.invalid("completion_date", "completed story has no completion date"));
    }
    if !completed && story.completion_date.is_some() {
        return Err(row.invalid(
            "completion_date",
            format!("story with status '{}' must not have a completion date", story.status),
        ));
    }
    if let (Some(start), Some(done)) = (story.start_date, story.completion_date) {
        if done < start {
            return Err(row.invalid("completion_date", "story completed before it started"));
        }
    }
    Ok(())
}

pub(crate) fn check_initiative(initiative: &Initiative, index: usize) -> Result<(), DatasetError> {
    let row = Row::new(INITIATIVES, index);
    row.non_blank_key(&initiative.initiative_id, "initiative_id")?;
    row.score(initiative.impact_score, "impact_score")?;
    row.score(initiative.effort_score, "effort_score")?;
    row.non_negative(initiative.total_story_points, "total_story_points")
}

pub(crate) fn check_team_member(member: &TeamMember, index: usize) -> Result<(), DatasetError> {
    let row = Row::new(TEAM, index);
    row.non_blank_key(&member.member_id, "member_id")?;
    row.positive(member.avg_capacity_per_sprint, "avg_capacity_per_sprint")
}

/// Reject the first duplicate key in a table.
pub(crate) fn ensure_unique<I>(table: &'static str, keys: I) -> Result<(), DatasetError>
where
    I: IntoIterator<Item = String>,
{
    let mut seen: FxHashSet<String> = FxHashSet::default();
    for key in keys {
        if seen.contains(&key) {
            return Err(DatasetError::DuplicateKey { table, key });
        }
        seen.insert(key);
    }
    Ok(())
}
