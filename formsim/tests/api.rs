//! Contract tests for the simulated persistence API.
//!
//! These run under a paused runtime clock, so the randomized latencies are
//! simulated instantly and the elapsed simulation time can be asserted
//! exactly. Failure injection is forced on (p = 1.0) or off (p = 0.0)
//! rather than sampled, so every path is deterministic.

use std::time::Duration;

use formsim::{
    ApiConfiguration, ApiError, MemorySlot, Question, QuestionApi, QuestionKind, QuestionPatch,
    SeededRandomProvider, SelectOption, StorageError, StorageSlot, TimeProvider,
    TokioTimeProvider,
};

type TestApi = QuestionApi<TokioTimeProvider, SeededRandomProvider, MemorySlot>;

fn api_with(slot: MemorySlot, config: ApiConfiguration) -> TestApi {
    QuestionApi::new(
        TokioTimeProvider::new(),
        SeededRandomProvider::new(42),
        slot,
        config,
    )
}

fn text_question(label: &str) -> Question {
    Question {
        label: label.to_string(),
        required: false,
        hidden: false,
        description: None,
        placeholder: None,
        kind: QuestionKind::Text {
            min_length: None,
            max_length: None,
        },
    }
}

fn number_question(label: &str, min: Option<f64>, max: Option<f64>) -> Question {
    Question {
        label: label.to_string(),
        required: false,
        hidden: false,
        description: None,
        placeholder: None,
        kind: QuestionKind::Number { min, max },
    }
}

#[tokio::test(start_paused = true)]
async fn create_then_list_returns_the_stored_record() {
    let api = api_with(MemorySlot::new(), ApiConfiguration::reliable());

    let stored = api.add_question(text_question("Name")).await.unwrap();
    assert_eq!(stored.id.as_str().len(), 9);
    assert!(!stored.created_at.is_empty());

    let listed = api.get_questions().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0], stored);
    assert_eq!(listed[0].question, text_question("Name"));
}

#[tokio::test(start_paused = true)]
async fn create_select_question_scenario() {
    let api = api_with(MemorySlot::new(), ApiConfiguration::reliable());

    let question = Question {
        label: "Color".to_string(),
        required: true,
        hidden: false,
        description: None,
        placeholder: None,
        kind: QuestionKind::Select {
            options: vec![
                SelectOption::new("Red", "red"),
                SelectOption::new("Blue", "blue"),
            ],
        },
    };

    let stored = api.add_question(question).await.unwrap();

    assert!(!stored.id.as_str().is_empty());
    assert!(stored.question.required);
    assert_eq!(
        stored.question.kind,
        QuestionKind::Select {
            options: vec![
                SelectOption::new("Red", "red"),
                SelectOption::new("Blue", "blue"),
            ],
        }
    );
}

#[tokio::test(start_paused = true)]
async fn list_preserves_append_order() {
    let api = api_with(MemorySlot::new(), ApiConfiguration::reliable());

    for label in ["first", "second", "third"] {
        api.add_question(text_question(label)).await.unwrap();
    }

    let listed = api.get_questions().await.unwrap();
    let labels: Vec<&str> = listed.iter().map(|r| r.question.label.as_str()).collect();
    assert_eq!(labels, ["first", "second", "third"]);
}

#[tokio::test(start_paused = true)]
async fn update_changes_one_field_and_keeps_the_rest() {
    let api = api_with(MemorySlot::new(), ApiConfiguration::reliable());

    let stored = api
        .add_question(number_question("Age", Some(0.0), Some(10.0)))
        .await
        .unwrap();

    let patch = QuestionPatch {
        max: Some(100.0),
        ..QuestionPatch::default()
    };
    let merged = api.update_question(&stored.id, patch).await.unwrap();

    assert_eq!(
        merged.question.kind,
        QuestionKind::Number {
            min: Some(0.0),
            max: Some(100.0),
        }
    );
    assert_eq!(merged.question.label, "Age");
    assert_eq!(merged.id, stored.id);
    assert_eq!(merged.created_at, stored.created_at);

    let listed = api.get_questions().await.unwrap();
    assert_eq!(listed, vec![merged]);
}

#[tokio::test(start_paused = true)]
async fn update_of_missing_id_is_not_found() {
    let api = api_with(MemorySlot::new(), ApiConfiguration::reliable());

    let result = api
        .update_question(&"missing42".into(), QuestionPatch::default())
        .await;

    assert!(matches!(result, Err(ApiError::NotFound(_))));
}

#[tokio::test(start_paused = true)]
async fn delete_removes_the_record() {
    let api = api_with(MemorySlot::new(), ApiConfiguration::reliable());

    let keep = api.add_question(text_question("keep")).await.unwrap();
    let drop = api.add_question(text_question("drop")).await.unwrap();

    api.delete_question(&drop.id).await.unwrap();

    let listed = api.get_questions().await.unwrap();
    assert_eq!(listed, vec![keep]);
}

#[tokio::test(start_paused = true)]
async fn delete_of_missing_id_is_a_lenient_noop() {
    let api = api_with(MemorySlot::new(), ApiConfiguration::reliable());
    let stored = api.add_question(text_question("survivor")).await.unwrap();

    api.delete_question(&"missing42".into()).await.unwrap();

    assert_eq!(api.get_questions().await.unwrap(), vec![stored]);
}

#[tokio::test(start_paused = true)]
async fn injected_failure_on_create_leaves_collection_unchanged() {
    let slot = MemorySlot::new();
    let reliable = api_with(slot.clone(), ApiConfiguration::reliable());
    let failing = api_with(
        slot.clone(),
        ApiConfiguration::fast_local().with_failure_probability(1.0),
    );

    let before = reliable.add_question(text_question("existing")).await.unwrap();

    let err = failing
        .add_question(text_question("doomed"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Injected { .. }));
    assert!(err.to_string().contains("save question"));

    let listed = reliable.get_questions().await.unwrap();
    assert_eq!(listed, vec![before]);
}

#[tokio::test(start_paused = true)]
async fn injected_failure_names_each_operation() {
    let failing = api_with(
        MemorySlot::new(),
        ApiConfiguration::fast_local().with_failure_probability(1.0),
    );

    let fetch = failing.get_questions().await.unwrap_err();
    assert!(fetch.to_string().contains("fetch questions"));

    let update = failing
        .update_question(&"someid123".into(), QuestionPatch::default())
        .await
        .unwrap_err();
    assert!(update.to_string().contains("update question"));

    let delete = failing.delete_question(&"someid123".into()).await.unwrap_err();
    assert!(delete.to_string().contains("delete question"));
}

#[tokio::test(start_paused = true)]
async fn corrupt_slot_surfaces_a_storage_error() {
    let slot = MemorySlot::new();
    slot.store("form_builder_questions", b"not valid json".to_vec())
        .await
        .unwrap();

    let api = api_with(slot, ApiConfiguration::reliable());
    let result = api.get_questions().await;

    assert!(matches!(
        result,
        Err(ApiError::Storage(StorageError::Serialization(_)))
    ));
}

#[tokio::test(start_paused = true)]
async fn every_call_sleeps_within_the_latency_envelope() {
    let time = TokioTimeProvider::new();
    let api = api_with(
        MemorySlot::new(),
        ApiConfiguration::default().with_failure_probability(0.0),
    );

    for _ in 0..5 {
        let before = time.now();
        api.get_questions().await.unwrap();
        let elapsed = time.now() - before;

        assert!(
            elapsed >= Duration::from_millis(1000),
            "latency below envelope: {elapsed:?}"
        );
        assert!(
            elapsed < Duration::from_millis(3000),
            "latency above envelope: {elapsed:?}"
        );
    }
}

#[tokio::test(start_paused = true)]
async fn latency_applies_even_when_the_call_fails() {
    let time = TokioTimeProvider::new();
    let api = api_with(
        MemorySlot::new(),
        ApiConfiguration::default().with_failure_probability(1.0),
    );

    let before = time.now();
    let _ = api.get_questions().await;
    let elapsed = time.now() - before;

    assert!(elapsed >= Duration::from_millis(1000));
}

#[tokio::test(start_paused = true)]
async fn collection_survives_via_a_second_api_instance() {
    // The slot is the durable layer: a fresh API over the same slot sees
    // everything a previous instance persisted.
    let slot = MemorySlot::new();
    let first = api_with(slot.clone(), ApiConfiguration::reliable());
    let stored = first.add_question(text_question("durable")).await.unwrap();
    drop(first);

    let second = api_with(slot, ApiConfiguration::reliable());
    assert_eq!(second.get_questions().await.unwrap(), vec![stored]);
}
