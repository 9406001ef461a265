//! Validity aggregation
//!
//! Fields never talk to the form root directly. During a pass every present
//! field reports its own validity into the pass it was handed, and the pass
//! collapses the reports with logical AND. The result is recomputed from
//! scratch on every pass, so a field turning valid again restores overall
//! validity once nothing else fails, and fields that are not rendered in a
//! pass simply do not take part.
//!
//! ```rust
//! use formwork::channel::ValidityChannel;
//! use formwork::key::FieldKey;
//!
//! let (a, b) = (FieldKey::from("a"), FieldKey::from("b"));
//! let mut channel = ValidityChannel::new();
//!
//! let mut pass = channel.begin();
//! pass.report(&a, true);
//! pass.report(&b, false);
//! assert!(!pass.finish().is_valid);
//!
//! let mut pass = channel.begin();
//! pass.report(&a, true);
//! pass.report(&b, true);
//! assert!(pass.finish().is_valid);
//! ```

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::key::FieldKey;

/// Sequence number of a pass over a form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PassId(u64);

impl PassId {
    /// The raw sequence number. `0` means no pass has finished yet.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Aggregated validity of a form, as of one finished pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormState {
    /// `true` iff every field reported valid in the pass.
    pub is_valid: bool,
    /// The pass this state was computed in.
    pub pass: PassId,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            is_valid: true,
            pass: PassId::default(),
        }
    }
}

// ============================================================================
// AGGREGATE
// ============================================================================

/// Logical AND over a varying number of reports.
///
/// Starts `true`. Once a `false` arrives, later reports are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aggregate {
    valid: bool,
    reports: usize,
}

impl Aggregate {
    /// A fresh aggregate with no reports.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            valid: true,
            reports: 0,
        }
    }

    /// Fold one report into the aggregate.
    pub fn report(&mut self, valid: bool) {
        self.reports += 1;
        if self.valid {
            self.valid = valid;
        }
    }

    /// The aggregate so far.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// Number of reports folded in.
    #[must_use]
    pub const fn reports(&self) -> usize {
        self.reports
    }
}

impl Default for Aggregate {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// CHANNEL
// ============================================================================

type Subscriber = Box<dyn FnMut(FormState) + Send>;

/// Collects validity reports pass by pass and publishes the result.
///
/// Only the owner of the channel can start a pass, and a pass holds the
/// channel mutably until it finishes, so reports of two passes can never
/// mix. A pass that is dropped without [`Pass::finish`] is discarded.
#[derive(Default)]
pub struct ValidityChannel {
    generation: u64,
    state: FormState,
    subscribers: Vec<Subscriber>,
}

impl ValidityChannel {
    /// Create a channel. Its state is valid until a pass says otherwise.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new pass.
    pub fn begin(&mut self) -> Pass<'_> {
        self.generation += 1;
        let id = PassId(self.generation);
        trace!(pass = %id, "validation pass started");
        Pass {
            channel: self,
            id,
            aggregate: Aggregate::new(),
            reported: HashSet::new(),
        }
    }

    /// State of the last finished pass.
    #[must_use]
    pub fn state(&self) -> FormState {
        self.state
    }

    /// Register a callback run whenever the aggregated validity flips.
    pub fn subscribe(&mut self, subscriber: impl FnMut(FormState) + Send + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    fn publish(&mut self, state: FormState) {
        let previous = std::mem::replace(&mut self.state, state);
        if previous.is_valid == state.is_valid {
            return;
        }

        debug!(
            pass = %state.pass,
            from = previous.is_valid,
            to = state.is_valid,
            subscribers = self.subscribers.len(),
            "form validity changed"
        );
        for subscriber in &mut self.subscribers {
            subscriber(state);
        }
    }
}

impl fmt::Debug for ValidityChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidityChannel")
            .field("generation", &self.generation)
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

/// One pass over a form, collecting the reports of the fields present in it.
#[derive(Debug)]
pub struct Pass<'c> {
    channel: &'c mut ValidityChannel,
    id: PassId,
    aggregate: Aggregate,
    reported: HashSet<FieldKey>,
}

impl Pass<'_> {
    /// Identifier of this pass.
    #[must_use]
    pub fn id(&self) -> PassId {
        self.id
    }

    /// Report the current validity of a field.
    ///
    /// Each field is expected to report once per pass. A second report for
    /// the same key is still folded in, and logged.
    pub fn report(&mut self, key: &FieldKey, valid: bool) {
        trace!(pass = %self.id, field = %key, valid, "validity report");
        if !self.reported.insert(key.clone()) {
            warn!(pass = %self.id, field = %key, "field reported twice in one pass");
        }
        self.aggregate.report(valid);
    }

    /// Report the outcome of a group-level check, which has no field key.
    pub fn report_group(&mut self, title: Option<&str>, valid: bool) {
        trace!(pass = %self.id, group = title.unwrap_or_default(), valid, "group report");
        self.aggregate.report(valid);
    }

    /// Whether every report so far was valid.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.aggregate.is_valid()
    }

    /// Number of reports received so far.
    #[must_use]
    pub fn reports(&self) -> usize {
        self.aggregate.reports()
    }

    /// Close the pass and publish its aggregate.
    pub fn finish(self) -> FormState {
        let state = FormState {
            is_valid: self.aggregate.is_valid(),
            pass: self.id,
        };
        debug!(
            pass = %self.id,
            valid = state.is_valid,
            reports = self.aggregate.reports(),
            "validation pass finished"
        );
        self.channel.publish(state);
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn keys() -> [FieldKey; 3] {
        [FieldKey::from("a"), FieldKey::from("b"), FieldKey::from("c")]
    }

    fn run(channel: &mut ValidityChannel, reports: &[(&FieldKey, bool)]) -> FormState {
        let mut pass = channel.begin();
        for (key, valid) in reports {
            pass.report(key, *valid);
        }
        pass.finish()
    }

    #[test]
    fn aggregate_short_circuits() {
        let mut aggregate = Aggregate::new();
        aggregate.report(true);
        aggregate.report(false);
        aggregate.report(true);
        assert!(!aggregate.is_valid());
        assert_eq!(aggregate.reports(), 3);
    }

    #[test]
    fn empty_pass_is_valid() {
        let mut channel = ValidityChannel::new();
        let state = channel.begin().finish();
        assert!(state.is_valid);
        assert_eq!(state.pass.get(), 1);
    }

    #[test]
    fn recovers_after_field_turns_valid() {
        let [a, b, c] = keys();
        let mut channel = ValidityChannel::new();

        assert!(run(&mut channel, &[(&a, true), (&b, true), (&c, true)]).is_valid);
        assert!(!run(&mut channel, &[(&a, true), (&b, false), (&c, true)]).is_valid);
        assert!(run(&mut channel, &[(&a, true), (&b, true), (&c, true)]).is_valid);
        assert_eq!(channel.state().pass.get(), 3);
    }

    #[test]
    fn dropped_pass_is_discarded() {
        let [a, ..] = keys();
        let mut channel = ValidityChannel::new();
        run(&mut channel, &[(&a, true)]);

        {
            let mut stale = channel.begin();
            stale.report(&a, false);
        }

        assert_eq!(
            channel.state(),
            FormState {
                is_valid: true,
                pass: PassId(1)
            }
        );
        assert_eq!(channel.begin().id(), PassId(3));
    }

    #[test]
    fn subscribers_see_flips_only() {
        let [a, ..] = keys();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);

        let mut channel = ValidityChannel::new();
        channel.subscribe(move |state| sink.lock().unwrap().push(state.is_valid));

        run(&mut channel, &[(&a, true)]);
        run(&mut channel, &[(&a, false)]);
        run(&mut channel, &[(&a, false)]);
        run(&mut channel, &[(&a, true)]);

        assert_eq!(*seen.lock().unwrap(), [false, true]);
    }

    #[test]
    fn duplicate_report_still_counts() {
        let [a, ..] = keys();
        let mut channel = ValidityChannel::new();
        let mut pass = channel.begin();
        pass.report(&a, true);
        pass.report(&a, false);
        assert_eq!(pass.reports(), 2);
        assert!(!pass.finish().is_valid);
    }
}
