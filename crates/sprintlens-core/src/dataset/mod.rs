//! Data Model Adapter: raw loader tables → validated, typed in-memory tables.
//!
//! Malformed input fails fast here, at the boundary between the loader and
//! the engines. Nothing downstream substitutes default tables.

mod adapter;
pub mod raw;

use std::path::Path;

use rustc_hash::FxHashSet;
use tracing::debug;

pub use raw::{
    RawDataset, RawInitiativeRecord, RawSprintRecord, RawStoryRecord, RawTeamMemberRecord,
};

use crate::errors::{DatasetError, LookupError};
use crate::types::{Initiative, Sprint, Story, TeamMember};
use adapter::{INITIATIVES, SPRINTS, STORIES, TEAM};

/// The four loaded tables. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct Dataset {
    sprints: Vec<Sprint>,
    stories: Vec<Story>,
    initiatives: Vec<Initiative>,
    team: Vec<TeamMember>,
}

impl Dataset {
    /// Build a dataset from already-typed tables.
    ///
    /// Checks that every table is non-empty, every row passes its value rules
    /// (non-negative points, positive capacities, scores in 0-10, a completion
    /// date only on Completed stories), keys are unique, and stories reference
    /// known sprints and team members. Sprints are sorted by number.
    pub fn new(
        mut sprints: Vec<Sprint>,
        stories: Vec<Story>,
        initiatives: Vec<Initiative>,
        team: Vec<TeamMember>,
    ) -> Result<Self, DatasetError> {
        for (table, len) in [
            (SPRINTS, sprints.len()),
            (STORIES, stories.len()),
            (INITIATIVES, initiatives.len()),
            (TEAM, team.len()),
        ] {
            if len == 0 {
                return Err(DatasetError::EmptyTable { table });
            }
        }

        for (i, sprint) in sprints.iter().enumerate() {
            adapter::check_sprint(sprint, i)?;
        }
        for (i, story) in stories.iter().enumerate() {
            adapter::check_story(story, i)?;
        }
        for (i, initiative) in initiatives.iter().enumerate() {
            adapter::check_initiative(initiative, i)?;
        }
        for (i, member) in team.iter().enumerate() {
            adapter::check_team_member(member, i)?;
        }

        adapter::ensure_unique(SPRINTS, sprints.iter().map(|s| s.sprint_number.to_string()))?;
        adapter::ensure_unique(STORIES, stories.iter().map(|s| s.story_id.clone()))?;
        adapter::ensure_unique(
            INITIATIVES,
            initiatives.iter().map(|i| i.initiative_id.clone()),
        )?;
        adapter::ensure_unique(TEAM, team.iter().map(|m| m.member_id.clone()))?;

        let sprint_numbers: FxHashSet<u32> = sprints.iter().map(|s| s.sprint_number).collect();
        let member_ids: FxHashSet<&str> = team.iter().map(|m| m.member_id.as_str()).collect();
        for story in &stories {
            if !sprint_numbers.contains(&story.sprint_number) {
                return Err(DatasetError::UnknownReference {
                    table: STORIES,
                    column: "sprint_number",
                    key: story.sprint_number.to_string(),
                });
            }
            if let Some(assignee) = story.assignee_id.as_deref() {
                if !member_ids.contains(assignee) {
                    return Err(DatasetError::UnknownReference {
                        table: STORIES,
                        column: "assignee_id",
                        key: assignee.to_string(),
                    });
                }
            }
        }

        sprints.sort_by_key(|s| s.sprint_number);

        debug!(
            sprints = sprints.len(),
            stories = stories.len(),
            initiatives = initiatives.len(),
            team = team.len(),
            "dataset loaded"
        );

        Ok(Self {
            sprints,
            stories,
            initiatives,
            team,
        })
    }

    /// Normalize raw loader records into typed tables.
    pub fn from_raw(raw: RawDataset) -> Result<Self, DatasetError> {
        for (table, len) in [
            (SPRINTS, raw.sprints.len()),
            (STORIES, raw.stories.len()),
            (INITIATIVES, raw.initiatives.len()),
            (TEAM, raw.team.len()),
        ] {
            if len == 0 {
                return Err(DatasetError::EmptyTable { table });
            }
        }

        let sprints = raw
            .sprints
            .iter()
            .enumerate()
            .map(|(i, r)| adapter::sprint(r, i))
            .collect::<Result<Vec<_>, _>>()?;
        let stories = raw
            .stories
            .iter()
            .enumerate()
            .map(|(i, r)| adapter::story(r, i))
            .collect::<Result<Vec<_>, _>>()?;
        let initiatives = raw
            .initiatives
            .iter()
            .enumerate()
            .map(|(i, r)| adapter::initiative(r, i))
            .collect::<Result<Vec<_>, _>>()?;
        let team = raw
            .team
            .iter()
            .enumerate()
            .map(|(i, r)| adapter::team_member(r, i))
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(sprints, stories, initiatives, team)
    }

    /// Parse a JSON document with `sprints`, `stories`, `initiatives`, `team` arrays.
    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        let raw: RawDataset = serde_json::from_str(json).map_err(|e| DatasetError::Parse {
            message: e.to_string(),
        })?;
        Self::from_raw(raw)
    }

    /// Read and parse a JSON dataset file.
    pub fn from_json_file(path: &Path) -> Result<Self, DatasetError> {
        let content = std::fs::read_to_string(path).map_err(|e| DatasetError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json_str(&content)
    }

    /// Sprints ordered by sprint number.
    pub fn sprints(&self) -> &[Sprint] {
        &self.sprints
    }

    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    pub fn initiatives(&self) -> &[Initiative] {
        &self.initiatives
    }

    pub fn team(&self) -> &[TeamMember] {
        &self.team
    }

    /// Look up a sprint by number.
    pub fn sprint(&self, sprint_number: u32) -> Result<&Sprint, LookupError> {
        self.sprints
            .binary_search_by_key(&sprint_number, |s| s.sprint_number)
            .map(|idx| &self.sprints[idx])
            .map_err(|_| LookupError::SprintNotFound(sprint_number))
    }

    /// The sprint with the highest number.
    pub fn current_sprint(&self) -> &Sprint {
        // Construction rejects an empty sprint table.
        &self.sprints[self.sprints.len() - 1]
    }

    pub fn stories_for_sprint(&self, sprint_number: u32) -> Vec<&Story> {
        self.stories
            .iter()
            .filter(|s| s.sprint_number == sprint_number)
            .collect()
    }

    pub fn completed_stories(&self) -> Vec<&Story> {
        self.stories.iter().filter(|s| s.is_completed()).collect()
    }

    pub fn member(&self, member_id: &str) -> Result<&TeamMember, LookupError> {
        self.team
            .iter()
            .find(|m| m.member_id == member_id)
            .ok_or_else(|| LookupError::MemberNotFound(member_id.to_string()))
    }

    pub fn initiative(&self, initiative_id: &str) -> Result<&Initiative, LookupError> {
        self.initiatives
            .iter()
            .find(|i| i.initiative_id == initiative_id)
            .ok_or_else(|| LookupError::InitiativeNotFound(initiative_id.to_string()))
    }
}
