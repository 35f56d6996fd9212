//! Scoring diagnostics go through `tracing`; these tests capture them with a
//! recording layer.

use std::fmt;
use std::sync::{Arc, Mutex};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

use utility_ai::{Behavior, Consideration, InputError, LinearCurve, SCORING_TARGET, StaticInputs};

#[derive(Clone, Debug, PartialEq)]
struct Recorded {
    level: Level,
    target: String,
    message: String,
    behavior: Option<String>,
    consideration: Option<String>,
}

#[derive(Default)]
struct FieldVisitor {
    message: String,
    behavior: Option<String>,
    consideration: Option<String>,
}

impl Visit for FieldVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "behavior" => self.behavior = Some(value.to_string()),
            "consideration" => self.consideration = Some(value.to_string()),
            _ => {}
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        let value = format!("{value:?}");
        match field.name() {
            "message" => self.message = value,
            "behavior" => self.behavior = Some(value),
            "consideration" => self.consideration = Some(value),
            _ => {}
        }
    }
}

#[derive(Clone, Default)]
struct RecordingLayer {
    events: Arc<Mutex<Vec<Recorded>>>,
}

impl<S: Subscriber> Layer<S> for RecordingLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        let recorded = Recorded {
            level: *event.metadata().level(),
            target: event.metadata().target().to_string(),
            message: visitor.message,
            behavior: visitor.behavior,
            consideration: visitor.consideration,
        };
        if let Ok(mut events) = self.events.lock() {
            events.push(recorded);
        }
    }
}

fn capture<T>(f: impl FnOnce() -> T) -> (T, Vec<Recorded>) {
    let layer = RecordingLayer::default();
    let events = Arc::clone(&layer.events);
    let subscriber = tracing_subscriber::registry().with(layer);

    let result = tracing::subscriber::with_default(subscriber, f);
    let events = events.lock().unwrap().clone();
    let events = events
        .into_iter()
        .filter(|event| event.target == SCORING_TARGET)
        .collect();
    (result, events)
}

fn two_factor_behavior() -> Behavior {
    let aggression = Consideration::new("aggression", LinearCurve::default(), 0.0, 1.0).unwrap();
    let health = Consideration::new("health", LinearCurve::default(), 0.0, 100.0).unwrap();

    Behavior::new("attack")
        .with_consideration(aggression)
        .unwrap()
        .with_consideration(health)
        .unwrap()
}

#[test]
fn one_event_per_consideration_and_one_per_behavior() {
    let behavior = two_factor_behavior();
    let inputs = StaticInputs::new()
        .with("aggression", 0.8)
        .with("health", 50.0);

    let (result, events) = capture(|| behavior.score(&inputs, &()));
    assert!(result.is_ok());
    assert_eq!(events.len(), 3);

    let traces: Vec<_> = events.iter().filter(|e| e.level == Level::TRACE).collect();
    assert_eq!(traces.len(), 2);
    assert_eq!(traces[0].consideration.as_deref(), Some("aggression"));
    assert_eq!(traces[1].consideration.as_deref(), Some("health"));
    assert!(traces.iter().all(|e| e.behavior.as_deref() == Some("attack")));

    let summary = &events[2];
    assert_eq!(summary.level, Level::DEBUG);
    assert_eq!(summary.message, "behavior scored");
    assert_eq!(summary.behavior.as_deref(), Some("attack"));
}

#[test]
fn input_failure_is_logged_before_it_propagates() {
    let behavior = two_factor_behavior();
    let source = |c: &Consideration, _: &()| -> Result<f64, InputError> {
        match c.name() {
            "aggression" => Ok(0.5),
            _ => Err("health bar not loaded".into()),
        }
    };

    let (result, events) = capture(|| behavior.score(&source, &()));
    assert!(result.is_err());

    let levels: Vec<_> = events.iter().map(|e| e.level).collect();
    assert_eq!(levels, vec![Level::TRACE, Level::DEBUG]);

    let failure = &events[1];
    assert_eq!(failure.message, "input source failed");
    assert_eq!(failure.consideration.as_deref(), Some("health"));
    assert!(events.iter().all(|e| e.message != "behavior scored"));
}
