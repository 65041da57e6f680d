//! End-to-end pipeline runs through the public API

use feedflow::{
    Comment, Config, Error, Event, FeedFetcher, MemorySink, PipelineConfig, Report, Step,
};
use std::time::Duration;

fn fast_config(inject_failure: bool) -> Config {
    Config {
        pipeline: PipelineConfig {
            step_latency: Duration::from_millis(1),
            inject_profile_failure: inject_failure,
            ..Default::default()
        },
        ..Default::default()
    }
}

fn drain(rx: &mut tokio::sync::broadcast::Receiver<Event>) -> Vec<Event> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

#[tokio::test]
async fn stock_run_fails_at_profile_step_with_reh() {
    let fetcher = FeedFetcher::new(fast_config(true)).unwrap();
    let mut events = fetcher.subscribe();

    let err = fetcher.run_default().await.unwrap_err();
    match err {
        Error::Step { step, reason } => {
            assert_eq!(step, Step::FetchProfile);
            assert_eq!(reason, "reh");
        }
        other => panic!("unexpected error: {other}"),
    }

    // Steps 3-4 never start.
    let events = drain(&mut events);
    assert!(!events.iter().any(|e| matches!(
        e,
        Event::StepStarted {
            step: Step::FetchPosts | Step::FetchComments
        }
    )));
    assert!(events.iter().any(|e| matches!(
        e,
        Event::PipelineFailed {
            step: Step::FetchProfile,
            ..
        }
    )));
}

#[tokio::test]
async fn successful_run_observes_ordered_side_effects_and_fixed_result() {
    let fetcher = FeedFetcher::new(fast_config(false)).unwrap();
    let mut events = fetcher.subscribe();

    let comments = fetcher.run("bnit").await.unwrap();
    assert_eq!(
        comments,
        vec![Comment::from("Nice post!"), Comment::from("Great read!")]
    );

    let started: Vec<Step> = drain(&mut events)
        .into_iter()
        .filter_map(|e| match e {
            Event::StepStarted { step } => Some(step),
            _ => None,
        })
        .collect();
    assert_eq!(
        started,
        vec![
            Step::Authenticate,
            Step::FetchProfile,
            Step::FetchPosts,
            Step::FetchComments
        ]
    );
}

#[tokio::test]
async fn exactly_one_outcome_path_per_run() {
    let sink = MemorySink::new();

    let failing = FeedFetcher::new(fast_config(true)).unwrap();
    failing.run_reported("bnit", &sink).await.unwrap_err();

    let succeeding = FeedFetcher::new(fast_config(false)).unwrap();
    succeeding.run_reported("bnit", &sink).await.unwrap();

    let reports = sink.reports().await;
    assert_eq!(reports.len(), 2);
    assert!(matches!(reports[0], Report::Failure(_)));
    assert!(matches!(reports[1], Report::Success(_)));
}

#[tokio::test]
async fn step_order_holds_when_later_steps_are_faster() {
    let config = Config {
        pipeline: PipelineConfig {
            step_latency: Duration::from_millis(1),
            authenticate_latency: Some(Duration::from_millis(40)),
            comments_latency: Some(Duration::ZERO),
            inject_profile_failure: false,
            ..Default::default()
        },
        ..Default::default()
    };
    let fetcher = FeedFetcher::new(config).unwrap();
    let mut events = fetcher.subscribe();

    fetcher.run("bnit").await.unwrap();

    // A step must complete before the next one starts.
    let events = drain(&mut events);
    let mut active: Option<Step> = None;
    for event in &events {
        match event {
            Event::StepStarted { step } => {
                assert!(active.is_none(), "step {step} started before previous completed");
                active = Some(*step);
            }
            Event::StepCompleted { step } => {
                assert_eq!(active, Some(*step));
                active = None;
            }
            _ => {}
        }
    }
}

#[tokio::test]
async fn custom_failure_reason_is_propagated() {
    let mut config = fast_config(true);
    config.pipeline.profile_failure_reason = "profile service unavailable".to_string();

    let fetcher = FeedFetcher::new(config).unwrap();
    let err = fetcher.run("bnit").await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "step fetch_profile failed: profile service unavailable"
    );
}
