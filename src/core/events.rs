//! Log event notification channels
//!
//! Listeners subscribe to either a level-named channel, fired only when that
//! level was actually written, or the generic [`Channel::Any`] channel, fired
//! for every log call once at least one such listener is attached. Dispatch
//! is synchronous and panic-isolated: a misbehaving listener can never crash
//! the logging caller.

use super::level::LogLevel;
use super::record::LogRecord;
use parking_lot::RwLock;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Arc, Weak};

/// Notification channel selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Fired when an event at exactly this level is written to a sink.
    Level(LogLevel),
    /// Fired for every log call, regardless of the severity gate.
    Any,
}

/// One dispatched log event: level name, rendered output, and the record.
#[derive(Debug, Clone)]
pub struct LogEvent {
    pub level: String,
    pub rendered: String,
    pub record: LogRecord,
}

pub type ListenerFn = Arc<dyn Fn(&LogEvent) + Send + Sync>;

struct Registered {
    id: u64,
    channel: Channel,
    callback: ListenerFn,
}

#[derive(Default)]
struct Table {
    next_id: u64,
    entries: Vec<Registered>,
}

/// Observer registry with explicit unsubscribe handles.
#[derive(Default)]
pub struct ListenerRegistry {
    table: Arc<RwLock<Table>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback on a channel. Dropping the returned handle does
    /// not unsubscribe; call [`ListenerHandle::unsubscribe`].
    pub fn subscribe(
        &self,
        channel: Channel,
        callback: impl Fn(&LogEvent) + Send + Sync + 'static,
    ) -> ListenerHandle {
        let mut table = self.table.write();
        let id = table.next_id;
        table.next_id += 1;
        table.entries.push(Registered {
            id,
            channel,
            callback: Arc::new(callback),
        });
        ListenerHandle {
            id,
            table: Arc::downgrade(&self.table),
        }
    }

    /// Whether any generic-channel listener is attached.
    pub fn has_any_listeners(&self) -> bool {
        self.table
            .read()
            .entries
            .iter()
            .any(|r| r.channel == Channel::Any)
    }

    /// Dispatch an event to every listener on `channel`.
    ///
    /// Callbacks run outside the registry lock, each inside a panic boundary;
    /// failures are discarded.
    pub fn emit(&self, channel: Channel, event: &LogEvent) {
        let callbacks: Vec<ListenerFn> = {
            let table = self.table.read();
            table
                .entries
                .iter()
                .filter(|r| r.channel == channel)
                .map(|r| Arc::clone(&r.callback))
                .collect()
        };

        for callback in callbacks {
            let _ = catch_unwind(AssertUnwindSafe(|| callback(event)));
        }
    }
}

/// Handle returned by [`ListenerRegistry::subscribe`].
pub struct ListenerHandle {
    id: u64,
    table: Weak<RwLock<Table>>,
}

impl ListenerHandle {
    /// Remove the listener. A no-op if the registry is already gone.
    pub fn unsubscribe(self) {
        if let Some(table) = self.table.upgrade() {
            table.write().entries.retain(|r| r.id != self.id);
        }
    }
}
