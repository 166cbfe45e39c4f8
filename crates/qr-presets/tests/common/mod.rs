#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde_json::{Value, json};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// A complete preset object as it would appear in the override variable
pub fn preset_value(name: &str, color: &str) -> Value {
    json!({
        "name": name,
        "style": { "borderRadius": "12px", "background": color },
        "type": "svg",
        "width": 400,
        "height": 400,
        "margin": 8,
        "data": "https://example.com",
        "image": "",
        "imageOptions": { "margin": 4, "hideBackgroundDots": true },
        "dotsOptions": { "type": "rounded", "color": color },
        "cornersSquareOptions": { "type": "extra-rounded", "color": color },
        "cornersDotOptions": { "type": "dot", "color": color },
        "backgroundOptions": { "color": "#ffffff" }
    })
}

/// JSON text for an override list holding one preset per name
pub fn override_json(names: &[&str]) -> String {
    let presets: Vec<Value> = names
        .iter()
        .map(|name| preset_value(name, "#111827"))
        .collect();
    Value::Array(presets).to_string()
}

/// Counts error and warning events seen while installed
#[derive(Clone, Default)]
pub struct EventCounter {
    errors: Arc<AtomicUsize>,
    warnings: Arc<AtomicUsize>,
}

impl EventCounter {
    pub fn errors(&self) -> usize {
        self.errors.load(Ordering::SeqCst)
    }

    pub fn warnings(&self) -> usize {
        self.warnings.load(Ordering::SeqCst)
    }
}

impl<S: Subscriber> Layer<S> for EventCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        match *event.metadata().level() {
            Level::ERROR => {
                self.errors.fetch_add(1, Ordering::SeqCst);
            }
            Level::WARN => {
                self.warnings.fetch_add(1, Ordering::SeqCst);
            }
            _ => {}
        }
    }
}

/// Run `f` with an [`EventCounter`] as the thread's subscriber
pub fn with_event_counter<T>(f: impl FnOnce() -> T) -> (T, EventCounter) {
    let counter = EventCounter::default();
    let subscriber = tracing_subscriber::registry().with(counter.clone());
    let out = tracing::subscriber::with_default(subscriber, f);
    (out, counter)
}
