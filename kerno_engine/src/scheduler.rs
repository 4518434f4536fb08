//! Event Scheduler
//!
//! Global countdown events. Each pending event carries the number of turns it
//! still has to wait; every [`Scheduler::tick`] counts all of them down once and
//! hands back the ones that ran out.
//!
//! ### Designer Note:
//! Ticking is done in two phases (count down and partition, then swap the
//! pending list) so that several events expiring on the same turn are all
//! delivered exactly once, in the order they were scheduled. Anything scheduled
//! while the caller applies the returned events lands in the fresh pending list
//! and starts counting on the following tick.

use log::info;
use serde::Serialize;

use crate::effect::Effect;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduledEvent {
    pub turns_remaining: i32,
    pub message: String,
    pub effects: Vec<Effect>,
}

/// The event scheduler.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Scheduler {
    pub pending: Vec<ScheduledEvent>,
}

impl Scheduler {
    /// Queue an event to fire after `event.turns_remaining` ticks.
    pub fn schedule(&mut self, event: ScheduledEvent) {
        info!(
            "scheduling event in {} turn(s): \"{}\"",
            event.turns_remaining, event.message
        );
        self.pending.push(event);
    }

    /// Convenience wrapper around [`Scheduler::schedule`].
    pub fn schedule_in(&mut self, turns: i32, message: impl Into<String>, effects: Vec<Effect>) {
        self.schedule(ScheduledEvent {
            turns_remaining: turns,
            message: message.into(),
            effects,
        });
    }

    /// Count every pending event down by one turn and return those that are due.
    pub fn tick(&mut self) -> Vec<ScheduledEvent> {
        let (due, live): (Vec<_>, Vec<_>) = self
            .pending
            .drain(..)
            .map(|mut event| {
                event.turns_remaining -= 1;
                event
            })
            .partition(|event| event.turns_remaining <= 0);
        self.pending = live;
        for event in &due {
            info!("scheduled event due: \"{}\"", event.message);
        }
        due
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
