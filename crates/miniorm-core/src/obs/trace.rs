use crate::error::ErrorClass;

///
/// QueryTraceSink
///

pub trait QueryTraceSink: Send + Sync {
    fn on_event(&self, event: QueryTraceEvent);
}

///
/// QueryMode
/// Which facade call produced an event.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum QueryMode {
    All,
    First,
    Unique,
}

///
/// QueryTraceEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum QueryTraceEvent {
    Start {
        model: &'static str,
        mode: QueryMode,
    },
    Finish {
        model: &'static str,
        mode: QueryMode,
        rows: u64,
    },
    Error {
        model: &'static str,
        mode: QueryMode,
        class: ErrorClass,
    },
}

pub(crate) fn emit(sink: Option<&dyn QueryTraceSink>, event: QueryTraceEvent) {
    if let Some(sink) = sink {
        sink.on_event(event);
    }
}
