//! Text-entry session state and its transitions.
//!
//! The state is the `(signals, output, pause_count)` triple plus overflow
//! bookkeeping for the two bounded buffers; there is no separate mode flag.
//! Every transition is total: unknown codes commit the `?` marker, and
//! empty-buffer commits or empty-output deletes do nothing.

use heapless::String;

use super::{table, Literal, Signal};
use crate::config::{
    DISPLAY_TAIL_CHARS, OUTPUT_CAPACITY, PAUSE_COMMIT_COUNT, PAUSE_WORD_COUNT, SIGNAL_CAPACITY,
    UNKNOWN_CHAR,
};

/// Committed session text, capped at [`OUTPUT_CAPACITY`] characters.
///
/// Characters committed past the cap are dropped; the controller signals
/// this with a delete-strength pulse.
pub type Text = String<OUTPUT_CAPACITY>;

/// Mutable state of one text-entry session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    signals: String<SIGNAL_CAPACITY>,
    /// Signals entered past `SIGNAL_CAPACITY`, still owed to delete.
    overflow: u16,
    output: Text,
    pause_count: u8,
    /// Set when a character could not be appended to a full output.
    output_dropped: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dots and dashes entered for the character in progress.
    pub fn signals(&self) -> &str {
        self.signals.as_str()
    }

    /// Everything committed so far.
    pub fn output(&self) -> &str {
        self.output.as_str()
    }

    pub fn pause_count(&self) -> u8 {
        self.pause_count
    }

    /// The last [`DISPLAY_TAIL_CHARS`] characters of the output.
    pub fn display_tail(&self) -> &str {
        let out = self.output.as_str();
        let skip = out.chars().count().saturating_sub(DISPLAY_TAIL_CHARS);
        match out.char_indices().nth(skip) {
            Some((start, _)) => &out[start..],
            None => out,
        }
    }

    /// Report (and reset) whether a character was dropped on a full output
    /// since the last call.
    pub fn take_output_dropped(&mut self) -> bool {
        core::mem::take(&mut self.output_dropped)
    }

    /// Consume the state, keeping only the committed text.
    pub fn into_output(self) -> Text {
        self.output
    }

    /// Add a dot or dash to the pending character.
    pub fn append_signal(&mut self, signal: Signal) -> &mut Self {
        if self.signals.push(signal.as_char()).is_err() {
            #[cfg(feature = "defmt")]
            defmt::debug!("signal buffer full, counting {}", signal);
            self.overflow = self.overflow.saturating_add(1);
        }
        self.pause_count = 0;
        self
    }

    /// Undo the most recent signal, or the most recent character when no
    /// signal is pending.
    pub fn delete(&mut self) -> &mut Self {
        if self.overflow > 0 {
            self.overflow -= 1;
        } else if self.signals.pop().is_none() {
            self.output.pop();
        }
        self
    }

    /// Handle a return tap: the first in a row ends the character, the
    /// third ends the word.
    pub fn pause(&mut self) -> &mut Self {
        self.pause_count += 1;
        if self.pause_count == PAUSE_COMMIT_COUNT {
            self.commit();
        } else if self.pause_count == PAUSE_WORD_COUNT {
            self.push_output(' ');
            self.pause_count = 0;
        }
        self
    }

    /// Resolve the pending signals into one output character.
    pub fn commit(&mut self) -> &mut Self {
        if self.signals.is_empty() {
            return self;
        }
        // An overflowed buffer is longer than any code in the table.
        let ch = if self.overflow > 0 {
            UNKNOWN_CHAR
        } else {
            table::resolve(self.signals.as_str())
        };
        self.push_output(ch);
        self.signals.clear();
        self.overflow = 0;
        self
    }

    /// Append punctuation without touching the signal buffer.
    pub fn insert_literal(&mut self, literal: Literal) -> &mut Self {
        self.push_output(literal.as_char());
        self
    }

    fn push_output(&mut self, ch: char) {
        if self.output.push(ch).is_err() {
            self.output_dropped = true;
            #[cfg(feature = "defmt")]
            defmt::warn!("output full ({} chars), dropping '{}'", OUTPUT_CAPACITY, ch);
        }
    }
}
