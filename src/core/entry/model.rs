// Data model for a single time entry.
//
// Purpose
// - Represent one tracked activity and its session accounting.
//
// Boundaries
// - This file must not perform input or output.
// - Keep it framework-free.
//
// Notes
// - All i64 time values are unix epoch seconds; durations are whole seconds.
// - `started_at` is serialized as `startDate` and is present iff the entry is running.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Running,
    Stopped,
}

impl Status {
    pub fn toggled(self) -> Self {
        match self {
            Status::Running => Status::Stopped,
            Status::Stopped => Status::Running,
        }
    }
}

// An entry either carries a user supplied name or it does not. Empty and
// absent text both normalize to Unnamed, including on deserialization, so
// `Named { text: "" }` cannot be observed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[serde(from = "DescriptionDto")]
pub enum Description {
    Unnamed,
    Named { text: String },
}

impl Description {
    pub fn from_opt(text: Option<String>) -> Self {
        match text {
            None => Description::Unnamed,
            Some(text) if text.is_empty() => Description::Unnamed,
            Some(text) => Description::Named { text },
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Description::Unnamed => None,
            Description::Named { text } => Some(text),
        }
    }
}

// JSON -> DTO (transport shape). Deserialization funnels through this type so
// stored empty names collapse back to Unnamed.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum DescriptionDto {
    Unnamed,
    Named { text: String },
}

impl From<DescriptionDto> for Description {
    fn from(dto: DescriptionDto) -> Self {
        match dto {
            DescriptionDto::Unnamed => Description::Unnamed,
            DescriptionDto::Named { text } => Description::from_opt(Some(text)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccumulatedTime {
    pub total: i64,
    pub accumulated_session: i64,
    pub current_session: i64,
    #[serde(
        rename = "startDate",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub started_at: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    pub id: Uuid,
    pub description: Description,
    pub status: Status,
    pub accumulated_time: AccumulatedTime,
    pub created_at: i64,
    pub updated_at: i64,
}

impl TimeEntry {
    pub fn new(id: Uuid, description: Description, status: Status, now: i64) -> Self {
        let accumulated_time = AccumulatedTime {
            started_at: (status == Status::Running).then_some(now),
            ..AccumulatedTime::default()
        };
        Self {
            id,
            description,
            status,
            accumulated_time,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_running(&self) -> bool {
        self.status == Status::Running
    }
}

#[cfg(test)]
mod time_entry_model_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_create_a_stopped_entry_with_zeroed_accounting() {
        let entry = TimeEntry::new(
            Uuid::from_u128(1),
            Description::Unnamed,
            Status::Stopped,
            1_700_000_000,
        );

        assert_eq!(entry.status, Status::Stopped);
        assert_eq!(entry.accumulated_time, AccumulatedTime::default());
        assert_eq!(entry.created_at, 1_700_000_000);
        assert_eq!(entry.updated_at, 1_700_000_000);
    }

    #[rstest]
    fn it_should_seed_the_start_timestamp_when_created_running() {
        let entry = TimeEntry::new(
            Uuid::from_u128(1),
            Description::Unnamed,
            Status::Running,
            1_700_000_000,
        );

        assert_eq!(entry.accumulated_time.started_at, Some(1_700_000_000));
        assert_eq!(entry.accumulated_time.total, 0);
    }

    #[rstest]
    #[case(None, Description::Unnamed)]
    #[case(Some(String::new()), Description::Unnamed)]
    #[case(Some("Write report".to_string()), Description::Named { text: "Write report".to_string() })]
    fn it_should_normalize_missing_and_empty_text_to_unnamed(
        #[case] text: Option<String>,
        #[case] expected: Description,
    ) {
        assert_eq!(Description::from_opt(text), expected);
    }

    #[rstest]
    fn it_should_serialize_an_unnamed_description_without_a_text_field() {
        let json = serde_json::to_value(Description::Unnamed).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "unnamed" }));
    }

    #[rstest]
    fn it_should_deserialize_a_named_empty_description_as_unnamed() {
        let description: Description =
            serde_json::from_value(serde_json::json!({ "type": "named", "text": "" })).unwrap();
        assert_eq!(description, Description::Unnamed);
    }

    #[rstest]
    fn it_should_round_trip_an_entry_through_json() {
        let entry = TimeEntry {
            id: Uuid::from_u128(7),
            description: Description::Named {
                text: "Standup".to_string(),
            },
            status: Status::Running,
            accumulated_time: AccumulatedTime {
                total: 120,
                accumulated_session: 0,
                current_session: 120,
                started_at: Some(1_700_000_000),
            },
            created_at: 1_700_000_000,
            updated_at: 1_700_000_120,
        };

        let json = serde_json::to_string(&entry).unwrap();
        let back: TimeEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }

    #[rstest]
    fn it_should_omit_the_start_date_field_when_stopped() {
        let entry = TimeEntry::new(
            Uuid::from_u128(7),
            Description::Unnamed,
            Status::Stopped,
            1_700_000_000,
        );

        let json = serde_json::to_value(&entry).unwrap();
        assert!(json["accumulatedTime"].get("startDate").is_none());
        assert_eq!(json["accumulatedTime"]["currentSession"], 0);
        assert_eq!(json["status"], "stopped");
    }
}
