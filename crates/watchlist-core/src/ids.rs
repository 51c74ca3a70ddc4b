use chrono::Utc;
use uuid::Uuid;
use watchlist_config::IdStrategy;

/// Source of ids for newly created movies
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// Time-ordered UUIDv7 strings
#[derive(Debug, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self) -> String {
        Uuid::now_v7().to_string()
    }
}

/// Millisecond-timestamp ids, matching lists written by older versions.
///
/// Ids are strictly increasing: when the clock has not advanced past the
/// previous id, the previous value plus one is used instead.
pub struct TimestampIds {
    clock: Box<dyn FnMut() -> i64>,
    last: Option<i64>,
}

impl TimestampIds {
    pub fn new() -> Self {
        Self::with_clock(|| Utc::now().timestamp_millis())
    }

    pub fn with_clock(clock: impl FnMut() -> i64 + 'static) -> Self {
        Self {
            clock: Box::new(clock),
            last: None,
        }
    }
}

impl Default for TimestampIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for TimestampIds {
    fn next_id(&mut self) -> String {
        let now = (self.clock)();
        let id = match self.last {
            Some(last) if now <= last => last + 1,
            _ => now,
        };
        self.last = Some(id);
        id.to_string()
    }
}

pub fn generator_for(strategy: IdStrategy) -> Box<dyn IdGenerator> {
    match strategy {
        IdStrategy::Uuid => Box::new(UuidIds),
        IdStrategy::Timestamp => Box::new(TimestampIds::new()),
    }
}
