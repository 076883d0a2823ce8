use jiff::civil::DateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub sender_name: String,
    pub content: String,
    pub timestamp: DateTime,
    pub read: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::datetime;
    use pretty_assertions::assert_eq;

    #[test]
    fn reads_wire_field_names() {
        let message: Message = serde_json::from_str(
            r#"{"id":"m1","senderName":"Sarah Johnson","content":"Hi","timestamp":"2026-02-02T10:30:00","read":false}"#,
        )
        .unwrap();

        assert_eq!(message.sender_name, "Sarah Johnson");
        assert_eq!(message.timestamp, datetime(2026, 2, 2, 10, 30, 0, 0));
        assert!(!message.read);
    }
}
