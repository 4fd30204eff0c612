use serde_json::{Value, json};
use tiingo_fetcher::core::models::Message;
use tiingo_fetcher::errors::MessageError;
use tiingo_fetcher::extract::{collect_messages, decode_one, extract_messages};

fn record(body: &str) -> Value {
    json!({
        "messageId": "059f36b4-87a3-44ab-83d2-661975830a7d",
        "receiptHandle": "AQEBwJnKyrHigUMZj6rYigCgxlaS3SLy0a",
        "body": body,
        "eventSource": "aws:sqs",
    })
}

#[test]
fn test_empty_event_yields_nothing() {
    let event = json!({});
    assert_eq!(extract_messages(&event).unwrap().count(), 0);
}

#[test]
fn test_non_empty_event_without_records_is_missing_field() {
    let event = json!({"detail-type": "Scheduled Event"});
    match extract_messages(&event) {
        Err(MessageError::MissingField(field)) => assert_eq!(field, "Records"),
        other => panic!("Unexpected result: {other:?}"),
    }
}

#[test]
fn test_non_object_event_is_missing_field() {
    assert!(matches!(
        extract_messages(&Value::Null),
        Err(MessageError::MissingField(_))
    ));
}

#[test]
fn test_records_must_be_an_array() {
    let event = json!({"Records": {"body": "{}"}});
    assert!(matches!(
        extract_messages(&event),
        Err(MessageError::Decode(_))
    ));
}

#[test]
fn test_single_record_scenario() {
    let event: Value = serde_json::from_str(
        r#"{"Records":[{"body":"{\"ticker\":\"MSFT\",\"file_path\":\"/d/m.csv\"}"}]}"#,
    )
    .unwrap();

    let messages = collect_messages(&event).unwrap();
    assert_eq!(messages, vec![Message::new("MSFT", "/d/m.csv")]);
}

#[test]
fn test_messages_follow_record_order() {
    let tickers = ["AAPL", "MSFT", "GOOG", "AMZN"];
    let records: Vec<Value> = tickers
        .iter()
        .map(|t| {
            let body = Message::new(*t, format!("/data/{t}.csv")).to_json().unwrap();
            record(&body)
        })
        .collect();
    let event = json!({ "Records": records });

    let decoded: Vec<Message> = extract_messages(&event)
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    let expected: Vec<Message> = records.iter().map(|r| decode_one(r).unwrap()).collect();

    assert_eq!(decoded, expected);
    let decoded_tickers: Vec<&str> = decoded.iter().map(Message::ticker).collect();
    assert_eq!(decoded_tickers, tickers);
}

#[test]
fn test_round_trip_through_decode_one() {
    let original = Message::new("BRK.B", "s3://bucket/equities/BRK.B/2024-01-02.csv");
    let decoded = decode_one(&record(&original.to_json().unwrap())).unwrap();
    assert_eq!(decoded, original);
}

#[test]
fn test_decode_one_requires_body() {
    let result = decode_one(&json!({"messageId": "1"}));
    match result {
        Err(MessageError::MissingField(field)) => assert_eq!(field, "body"),
        other => panic!("Unexpected result: {other:?}"),
    }
}

#[test]
fn test_decode_one_rejects_non_string_body() {
    let result = decode_one(&json!({"body": {"ticker": "AAPL", "file_path": "/a"}}));
    assert!(matches!(result, Err(MessageError::Decode(_))));
}

#[test]
fn test_decode_one_rejects_invalid_json() {
    let result = decode_one(&record("ticker=AAPL"));
    assert!(matches!(result, Err(MessageError::Decode(_))));
}

#[test]
fn test_decode_one_rejects_missing_file_path() {
    match decode_one(&record(r#"{"ticker": "AAPL"}"#)) {
        Err(MessageError::Decode(msg)) => assert!(msg.contains("file_path")),
        other => panic!("Unexpected result: {other:?}"),
    }
}

#[test]
fn test_failure_surfaces_at_its_position() {
    let event = json!({
        "Records": [
            record(r#"{"ticker": "MSFT", "file_path": "/d/m.csv"}"#),
            record(r#"{"ticker": "AAPL"}"#),
            record(r#"{"ticker": "GOOG", "file_path": "/d/g.csv"}"#),
        ]
    });

    let mut messages = extract_messages(&event).unwrap();

    let first = messages.next().unwrap().unwrap();
    assert_eq!(first, Message::new("MSFT", "/d/m.csv"));

    assert!(matches!(messages.next(), Some(Err(MessageError::Decode(_)))));

    // the record after the failure is never produced
    assert!(messages.next().is_none());
    assert_eq!(first.ticker(), "MSFT");
}

#[test]
fn test_collect_messages_returns_first_error() {
    let event = json!({
        "Records": [
            record(r#"{"ticker": "MSFT", "file_path": "/d/m.csv"}"#),
            {"messageId": "no-body"},
            record("not json"),
        ]
    });

    assert!(matches!(
        collect_messages(&event),
        Err(MessageError::MissingField(_))
    ));
}

#[test]
fn test_records_are_decoded_lazily() {
    let event = json!({
        "Records": [
            record(r#"{"ticker": "MSFT", "file_path": "/d/m.csv"}"#),
            record("not json"),
        ]
    });

    // taking only the first element never touches the malformed record
    let first: Vec<Message> = extract_messages(&event)
        .unwrap()
        .take(1)
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(first, vec![Message::new("MSFT", "/d/m.csv")]);
}
