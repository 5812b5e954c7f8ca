//! Capture of simulation events for tests and offline analysis.
//!
//! `sim-core` emits two event streams through `tracing` when its
//! `instrument` feature is on: one `trade` event per executed exchange and
//! one `round` event per completed round. This crate collects them into
//! typed records, convertible to polars DataFrames for aggregation.
//!
//! # Usage
//!
//! ```ignore
//! let (_, capture) = instrument::with_capture(|| {
//!     // ... run simulation ...
//! });
//! let trades = capture.trades_df().unwrap();
//! ```

use std::cell::RefCell;

use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Record};
use tracing::{Event, Id, Metadata, Subscriber};

/// One executed exchange, as emitted by the trade loop.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TradeRecord {
    pub tick: u64,
    pub consumer: u64,
    pub producer: u64,
    pub quantity: f64,
    pub cost: f64,
    pub unit_price: f64,
}

/// End-of-round totals, as emitted by the driver.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RoundRecord {
    pub tick: u64,
    pub trades: u64,
    /// Sum of spendable plus pending money across the population.
    pub money_total: f64,
}

/// Everything recorded since the last drain.
#[derive(Debug, Clone, Default)]
pub struct Capture {
    pub trades: Vec<TradeRecord>,
    pub rounds: Vec<RoundRecord>,
}

thread_local! {
    static CAPTURE: RefCell<Capture> = RefCell::default();
}

// === FIELD VISITORS ===

struct TradeVisitor<'a>(&'a mut TradeRecord);

impl Visit for TradeVisitor<'_> {
    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "tick" => self.0.tick = value,
            "consumer" => self.0.consumer = value,
            "producer" => self.0.producer = value,
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        if value >= 0 {
            self.record_u64(field, value as u64);
        }
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        match field.name() {
            "quantity" => self.0.quantity = value,
            "cost" => self.0.cost = value,
            "unit_price" => self.0.unit_price = value,
            _ => {}
        }
    }

    fn record_debug(&mut self, _field: &Field, _value: &dyn std::fmt::Debug) {
        // Unknown field shapes are ignored; the schema is fixed.
    }
}

struct RoundVisitor<'a>(&'a mut RoundRecord);

impl Visit for RoundVisitor<'_> {
    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "tick" => self.0.tick = value,
            "trades" => self.0.trades = value,
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        if value >= 0 {
            self.record_u64(field, value as u64);
        }
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        if field.name() == "money_total" {
            self.0.money_total = value;
        }
    }

    fn record_debug(&mut self, _field: &Field, _value: &dyn std::fmt::Debug) {}
}

// === SUBSCRIBER ===

/// Tracing subscriber that collects `trade` and `round` events.
pub struct CaptureSubscriber;

impl Subscriber for CaptureSubscriber {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.is_event() && matches!(metadata.target(), "trade" | "round")
    }

    fn new_span(&self, _span: &Attributes<'_>) -> Id {
        // Spans are not tracked, just return a dummy ID
        Id::from_u64(1)
    }

    fn record(&self, _span: &Id, _values: &Record<'_>) {}

    fn record_follows_from(&self, _span: &Id, _follows: &Id) {}

    fn event(&self, event: &Event<'_>) {
        match event.metadata().target() {
            "trade" => {
                let mut record = TradeRecord::default();
                event.record(&mut TradeVisitor(&mut record));
                CAPTURE.with(|c| c.borrow_mut().trades.push(record));
            }
            "round" => {
                let mut record = RoundRecord::default();
                event.record(&mut RoundVisitor(&mut record));
                CAPTURE.with(|c| c.borrow_mut().rounds.push(record));
            }
            _ => {}
        }
    }

    fn enter(&self, _span: &Id) {}

    fn exit(&self, _span: &Id) {}
}

/// Install the capture subscriber as the global default.
/// Call once at the start of a test or analysis run.
pub fn install() {
    let _ = tracing::subscriber::set_global_default(CaptureSubscriber);
}

/// Drain everything recorded on this thread since the last drain.
pub fn drain() -> Capture {
    CAPTURE.with(|c| std::mem::take(&mut *c.borrow_mut()))
}

/// Discard everything recorded on this thread.
pub fn clear() {
    CAPTURE.with(|c| *c.borrow_mut() = Capture::default());
}

/// Run `f` with the capture subscriber scoped to this thread and return its
/// result together with everything it recorded. Scoping avoids global
/// subscriber state leaking between tests.
pub fn with_capture<T>(f: impl FnOnce() -> T) -> (T, Capture) {
    clear();
    let value = tracing::subscriber::with_default(CaptureSubscriber, f);
    (value, drain())
}

// === Polars Integration ===

use polars::prelude::*;

impl Capture {
    /// Trade events as a DataFrame, one row per executed exchange.
    pub fn trades_df(&self) -> PolarsResult<DataFrame> {
        let tick: Vec<u64> = self.trades.iter().map(|t| t.tick).collect();
        let consumer: Vec<u64> = self.trades.iter().map(|t| t.consumer).collect();
        let producer: Vec<u64> = self.trades.iter().map(|t| t.producer).collect();
        let quantity: Vec<f64> = self.trades.iter().map(|t| t.quantity).collect();
        let cost: Vec<f64> = self.trades.iter().map(|t| t.cost).collect();
        let unit_price: Vec<f64> = self.trades.iter().map(|t| t.unit_price).collect();

        DataFrame::new(vec![
            Column::new("tick".into(), tick),
            Column::new("consumer".into(), consumer),
            Column::new("producer".into(), producer),
            Column::new("quantity".into(), quantity),
            Column::new("cost".into(), cost),
            Column::new("unit_price".into(), unit_price),
        ])
    }

    /// Round events as a DataFrame, one row per completed round.
    pub fn rounds_df(&self) -> PolarsResult<DataFrame> {
        let tick: Vec<u64> = self.rounds.iter().map(|r| r.tick).collect();
        let trades: Vec<u64> = self.rounds.iter().map(|r| r.trades).collect();
        let money_total: Vec<f64> = self.rounds.iter().map(|r| r.money_total).collect();

        DataFrame::new(vec![
            Column::new("tick".into(), tick),
            Column::new("trades".into(), trades),
            Column::new("money_total".into(), money_total),
        ])
    }
}
