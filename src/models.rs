//! Frontend Models
//!
//! Client-side copies of the records owned by the remote service, in the
//! wire format the service speaks (camelCase fields, `result` envelope).

use serde::{Deserialize, Serialize};

/// Task record (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub task_name: String,
    pub task_description: String,
    pub status: String,
}

/// Captioned photo post (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub photo_url: String,
    pub caption: String,
    pub created_at: String,
}

/// Signed-in user record from /user/user-detail
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserDetail {
    pub username: String,
}

/// One status column of the task board
#[derive(Debug, Clone, PartialEq)]
pub struct BoardColumn {
    pub status: String,
    pub tasks: Vec<Task>,
}

/// The task board: status columns in the order the service returns them.
///
/// The service sends a JSON object mapping status label to task list; a
/// plain map type would lose the column order, so deserialization keeps
/// the key order explicitly.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Board {
    pub columns: Vec<BoardColumn>,
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct BoardVisitor;

        impl<'de> serde::de::Visitor<'de> for BoardVisitor {
            type Value = Board;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a map of status label to task list")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Board, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                let mut columns = Vec::new();
                while let Some((status, tasks)) = map.next_entry::<String, Vec<Task>>()? {
                    columns.push(BoardColumn { status, tasks });
                }
                Ok(Board { columns })
            }
        }

        deserializer.deserialize_map(BoardVisitor)
    }
}

/// Top-level response wrapper used by every endpoint: `result` carries the
/// payload, `message` the server-reported error text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default = "Option::default")]
    pub result: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_uses_camel_case_wire_names() {
        let task: Task = serde_json::from_str(
            r#"{"id":"42","taskName":"Ship it","taskDescription":"Push the release","status":"todo"}"#,
        )
        .unwrap();
        assert_eq!(task.id, "42");
        assert_eq!(task.task_name, "Ship it");
        assert_eq!(task.task_description, "Push the release");
        assert_eq!(task.status, "todo");
    }

    #[test]
    fn post_uses_camel_case_wire_names() {
        let post: Post = serde_json::from_str(
            r#"{"id":"p1","photoUrl":"https://img.example/p1.jpg","caption":"hi","createdAt":"2025-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(post.photo_url, "https://img.example/p1.jpg");
        assert_eq!(post.created_at, "2025-01-01T00:00:00Z");
    }

    #[test]
    fn board_preserves_column_order_from_server() {
        let board: Board = serde_json::from_str(
            r#"{
                "todo": [{"id":"1","taskName":"a","taskDescription":"d1","status":"todo"}],
                "in progress": [],
                "done": [{"id":"2","taskName":"b","taskDescription":"d2","status":"done"}]
            }"#,
        )
        .unwrap();
        let labels: Vec<_> = board.columns.iter().map(|c| c.status.as_str()).collect();
        assert_eq!(labels, ["todo", "in progress", "done"]);
        assert_eq!(board.columns[0].tasks.len(), 1);
        assert!(board.columns[1].tasks.is_empty());
    }

    #[test]
    fn envelope_reads_result_and_message() {
        let env: ApiEnvelope<String> = serde_json::from_str(r#"{"result":"tok123"}"#).unwrap();
        assert_eq!(env.result.as_deref(), Some("tok123"));
        assert_eq!(env.message, None);

        let env: ApiEnvelope<String> =
            serde_json::from_str(r#"{"message":"Email is already registered"}"#).unwrap();
        assert_eq!(env.result, None);
        assert_eq!(env.message.as_deref(), Some("Email is already registered"));
    }
}
