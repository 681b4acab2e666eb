//! Per-thread codec scope
//!
//! serde field adapters receive no context, so a [`JsonMapper`] installs
//! its codec for the duration of each encode/decode call and the adapters in
//! [`crate::fields`] read it back. The previous codec is restored when the
//! call returns or unwinds, so nested and concurrent mappers never observe
//! each other's mode.
//!
//! [`JsonMapper`]: crate::mapper::JsonMapper

use crate::date_time::DateTimeCodec;
use std::cell::Cell;

thread_local! {
    static ACTIVE: Cell<Option<DateTimeCodec>> = const { Cell::new(None) };
}

struct Restore(Option<DateTimeCodec>);

impl Drop for Restore {
    fn drop(&mut self) {
        ACTIVE.with(|cell| cell.set(self.0));
    }
}

/// Run `f` with `codec` as the active codec on this thread.
pub fn with_codec<R>(codec: DateTimeCodec, f: impl FnOnce() -> R) -> R {
    let _restore = Restore(ACTIVE.with(|cell| cell.replace(Some(codec))));
    f()
}

/// The codec installed by the innermost [`with_codec`] call, or the
/// string-mode codec outside of any.
pub fn active_codec() -> DateTimeCodec {
    ACTIVE.with(|cell| cell.get()).unwrap_or_default()
}
