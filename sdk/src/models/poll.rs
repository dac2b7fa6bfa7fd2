use crate::models::event::EventId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr, PickFirst};

pub type PollId = u64;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollOption {
    pub id: u64,
    pub label: String,
    pub position: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Poll {
    pub id: PollId,
    pub event: EventId,
    pub question: String,
    pub allows_multiple: bool,
    #[serde(default)]
    pub opens_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub closes_at: Option<DateTime<Utc>>,
    pub options: Vec<PollOption>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoteReceipt {
    pub poll_id: PollId,
    pub selected_option_ids: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollResultOption {
    pub id: u64,
    pub label: String,
    pub vote_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollResults {
    pub poll_id: PollId,
    pub question: String,
    pub allows_multiple: bool,
    pub total_votes: u64,
    pub unique_voters: u64,
    pub options: Vec<PollResultOption>,
}

/// The results endpoint is served in two shapes: the current flat payload and
/// a legacy payload nesting the poll and its per-option counts. Both are
/// decoded here and normalized into [`PollResults`]. Counts may arrive as
/// numeric strings and are clamped at zero.
#[serde_as]
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawPollResults {
    Current {
        #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
        poll_id: PollId,
        #[serde(default)]
        question: Option<String>,
        #[serde(default)]
        allows_multiple: Option<bool>,
        #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
        total_votes: i64,
        #[serde(default)]
        #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
        unique_voters: Option<i64>,
        options: Vec<RawResultOption>,
    },
    Legacy {
        poll: RawLegacyPoll,
        #[serde(default)]
        #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
        total_votes: Option<i64>,
        results: Vec<RawLegacyEntry>,
    },
}

#[serde_as]
#[derive(Debug, Deserialize)]
pub(crate) struct RawResultOption {
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    id: u64,
    label: String,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    vote_count: i64,
}

#[serde_as]
#[derive(Debug, Deserialize)]
pub(crate) struct RawLegacyPoll {
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    id: PollId,
    #[serde(default)]
    question: Option<String>,
    #[serde(default)]
    allows_multiple: Option<bool>,
}

#[serde_as]
#[derive(Debug, Deserialize)]
pub(crate) struct RawLegacyEntry {
    option: RawLegacyOption,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    vote_count: i64,
}

#[serde_as]
#[derive(Debug, Deserialize)]
pub(crate) struct RawLegacyOption {
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    id: u64,
    label: String,
}

const FALLBACK_QUESTION: &str = "Poll results";

fn clamp(count: i64) -> u64 {
    count.max(0) as u64
}

impl From<RawPollResults> for PollResults {
    fn from(raw: RawPollResults) -> Self {
        match raw {
            RawPollResults::Current {
                poll_id,
                question,
                allows_multiple,
                total_votes,
                unique_voters,
                options,
            } => {
                let total_votes = clamp(total_votes);
                PollResults {
                    poll_id,
                    question: question.unwrap_or_else(|| FALLBACK_QUESTION.to_string()),
                    allows_multiple: allows_multiple.unwrap_or(false),
                    total_votes,
                    unique_voters: unique_voters.map(clamp).unwrap_or(total_votes),
                    options: options
                        .into_iter()
                        .map(|option| PollResultOption {
                            id: option.id,
                            label: option.label,
                            vote_count: clamp(option.vote_count),
                        })
                        .collect(),
                }
            }
            RawPollResults::Legacy {
                poll,
                total_votes,
                results,
            } => {
                let options: Vec<PollResultOption> = results
                    .into_iter()
                    .map(|entry| PollResultOption {
                        id: entry.option.id,
                        label: entry.option.label,
                        vote_count: clamp(entry.vote_count),
                    })
                    .collect();
                let total_votes = total_votes
                    .map(clamp)
                    .unwrap_or_else(|| options.iter().map(|option| option.vote_count).sum());
                PollResults {
                    poll_id: poll.id,
                    question: poll
                        .question
                        .unwrap_or_else(|| FALLBACK_QUESTION.to_string()),
                    allows_multiple: poll.allows_multiple.unwrap_or(false),
                    total_votes,
                    unique_voters: total_votes,
                    options,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_current_results_shape() {
        let payload = r#"{
            "poll_id": 3,
            "question": "Pizza or pasta?",
            "allows_multiple": false,
            "total_votes": 5,
            "unique_voters": 4,
            "options": [
                {"id": 1, "label": "Pizza", "vote_count": 3},
                {"id": 2, "label": "Pasta", "vote_count": 2}
            ]
        }"#;
        let results: PollResults = serde_json::from_str::<RawPollResults>(payload)
            .unwrap()
            .into();
        assert_eq!(results.poll_id, 3);
        assert_eq!(results.total_votes, 5);
        assert_eq!(results.unique_voters, 4);
        assert_eq!(results.options.len(), 2);
        assert_eq!(results.options[0].vote_count, 3);
    }

    #[test]
    fn should_parse_legacy_results_shape() {
        let payload = r#"{
            "poll": {"id": 9, "question": "When?", "allows_multiple": true},
            "results": [
                {"option": {"id": 1, "label": "Friday"}, "vote_count": 2},
                {"option": {"id": 2, "label": "Saturday"}, "vote_count": 1}
            ]
        }"#;
        let results: PollResults = serde_json::from_str::<RawPollResults>(payload)
            .unwrap()
            .into();
        assert_eq!(results.poll_id, 9);
        assert!(results.allows_multiple);
        assert_eq!(results.total_votes, 3);
        assert_eq!(results.unique_voters, 3);
        assert_eq!(results.options[1].label, "Saturday");
    }

    #[test]
    fn should_coerce_numeric_strings_and_clamp_counts() {
        let payload = r#"{
            "poll_id": "7",
            "total_votes": "-2",
            "options": [{"id": "1", "label": "Yes", "vote_count": "-1"}]
        }"#;
        let results: PollResults = serde_json::from_str::<RawPollResults>(payload)
            .unwrap()
            .into();
        assert_eq!(results.poll_id, 7);
        assert_eq!(results.total_votes, 0);
        assert_eq!(results.question, "Poll results");
        assert_eq!(results.options[0].vote_count, 0);
    }

    #[test]
    fn should_reject_unknown_results_shape() {
        let payload = r#"{"unexpected": true}"#;
        assert!(serde_json::from_str::<RawPollResults>(payload).is_err());
    }
}
