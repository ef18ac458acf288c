//! Bottleneck detection: overloaded members, blocked work, slow story types.

use rustc_hash::FxHashMap;
use sprintlens_core::config::BottleneckConfig;
use sprintlens_core::{Story, StoryType, TeamMember};
use tracing::debug;

use super::types::{Bottleneck, BottleneckKind};
use crate::stats;

/// Every detected bottleneck, worst first.
///
/// Severity is the observed value divided by its threshold, so anything
/// flagged has severity ≥ 1.
pub fn identify_bottlenecks(
    stories: &[Story],
    team: &[TeamMember],
    config: &BottleneckConfig,
) -> Vec<Bottleneck> {
    let mut found = Vec::new();
    overloaded_members(stories, team, config.effective_overload_ratio(), &mut found);
    blocked_work(stories, config.effective_blocked_share(), &mut found);
    slow_cycle_time(stories, config.effective_cycle_time_excess(), &mut found);

    found.sort_by(|a, b| {
        b.severity
            .total_cmp(&a.severity)
            .then_with(|| a.subject.cmp(&b.subject))
    });

    debug!(count = found.len(), "bottlenecks identified");
    found
}

/// Members whose assigned points in the latest sprint with stories exceed capacity.
fn overloaded_members(
    stories: &[Story],
    team: &[TeamMember],
    overload_ratio: f64,
    out: &mut Vec<Bottleneck>,
) {
    let Some(latest) = stories.iter().map(|s| s.sprint_number).max() else {
        return;
    };

    let mut load: FxHashMap<&str, f64> = FxHashMap::default();
    for story in stories.iter().filter(|s| s.sprint_number == latest) {
        if let Some(assignee) = story.assignee_id.as_deref() {
            *load.entry(assignee).or_default() += story.final_story_points;
        }
    }

    for member in team {
        let points = load.get(member.member_id.as_str()).copied().unwrap_or(0.0);
        let ratio = stats::ratio_or(points, member.avg_capacity_per_sprint, 0.0);
        if ratio > overload_ratio {
            out.push(Bottleneck {
                kind: BottleneckKind::OverloadedMember,
                subject: member.name.clone(),
                severity: ratio / overload_ratio,
                detail: format!(
                    "{:.0} points assigned in sprint {latest} against a capacity of {:.0} ({:.0}%)",
                    points,
                    member.avg_capacity_per_sprint,
                    ratio * 100.0
                ),
            });
        }
    }
}

fn blocked_work(stories: &[Story], blocked_share: f64, out: &mut Vec<Bottleneck>) {
    for story_type in StoryType::ALL {
        let of_type: Vec<&Story> = stories.iter().filter(|s| s.story_type == *story_type).collect();
        if of_type.is_empty() {
            continue;
        }
        let blocked = of_type.iter().filter(|s| s.is_blocked()).count();
        if blocked == 0 {
            continue;
        }
        let share = blocked as f64 / of_type.len() as f64;
        if share >= blocked_share {
            out.push(Bottleneck {
                kind: BottleneckKind::BlockedWork,
                subject: story_type.name().to_string(),
                severity: stats::ratio_or(share, blocked_share, share),
                detail: format!(
                    "{blocked} of {} {} stories are blocked ({:.0}%)",
                    of_type.len(),
                    story_type,
                    share * 100.0
                ),
            });
        }
    }
}

fn slow_cycle_time(stories: &[Story], excess: f64, out: &mut Vec<Bottleneck>) {
    let mut per_type: FxHashMap<StoryType, Vec<f64>> = FxHashMap::default();
    let mut all = Vec::new();
    for story in stories {
        if let Some(days) = story.cycle_time_days() {
            per_type.entry(story.story_type).or_default().push(days);
            all.push(days);
        }
    }

    let overall = stats::mean(&all);
    if overall <= 0.0 {
        return;
    }
    let limit = overall * (1.0 + excess);

    for story_type in StoryType::ALL {
        let Some(days) = per_type.get(story_type) else {
            continue;
        };
        let type_mean = stats::mean(days);
        if type_mean >= limit {
            out.push(Bottleneck {
                kind: BottleneckKind::SlowCycleTime,
                subject: story_type.name().to_string(),
                severity: type_mean / limit,
                detail: format!(
                    "{story_type} stories take {type_mean:.1} days on average against {overall:.1} overall"
                ),
            });
        }
    }
}
