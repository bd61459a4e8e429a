//! Function-pointer backend.
//!
//! [`Callbacks`] lets an integrator wire a [`Resolver`](crate::Resolver) to
//! free functions instead of writing a [`ResolverBackend`] impl. Tables are
//! `Copy` and can be declared as `const` items next to the peripheral code.

use core::fmt;

use crate::backend::{Direction, ResolverBackend};

/// How the counting direction is switched.
///
/// Drivers come in two shapes: one callback per direction, or a single
/// callback taking a selector byte ([`Direction::as_raw`]).
pub enum ModeCallbacks<E> {
    /// Separate argument-less callbacks for each direction.
    Split {
        /// Switch to counting up.
        up: fn() -> Result<(), E>,
        /// Switch to counting down.
        down: fn() -> Result<(), E>,
    },
    /// A single callback receiving `0` for up and `1` for down.
    Selector(fn(u8) -> Result<(), E>),
}

impl<E> ModeCallbacks<E> {
    fn apply(&self, direction: Direction) -> Result<(), E> {
        match (self, direction) {
            (ModeCallbacks::Split { up, .. }, Direction::Up) => up(),
            (ModeCallbacks::Split { down, .. }, Direction::Down) => down(),
            (ModeCallbacks::Selector(set_mode), direction) => set_mode(direction.as_raw()),
        }
    }
}

impl<E> Clone for ModeCallbacks<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for ModeCallbacks<E> {}

impl<E> fmt::Debug for ModeCallbacks<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ModeCallbacks::Split { .. } => f.write_str("Split"),
            ModeCallbacks::Selector(_) => f.write_str("Selector"),
        }
    }
}

/// A [`ResolverBackend`] assembled from plain function pointers.
///
/// All fields are mandatory.
pub struct Callbacks<E> {
    /// Begin counting.
    pub start: fn() -> Result<(), E>,
    /// Halt counting.
    pub stop: fn() -> Result<(), E>,
    /// Write the absolute counter value.
    pub set_counter: fn(u32) -> Result<(), E>,
    /// Read the absolute counter value.
    pub get_counter: fn() -> Result<u32, E>,
    /// Switch the counting direction.
    pub mode: ModeCallbacks<E>,
}

impl<E> Clone for Callbacks<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for Callbacks<E> {}

impl<E> fmt::Debug for Callbacks<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Callbacks").field("mode", &self.mode).finish_non_exhaustive()
    }
}

impl<E> ResolverBackend for Callbacks<E> {
    type Error = E;

    fn start(&mut self) -> Result<(), E> {
        (self.start)()
    }

    fn stop(&mut self) -> Result<(), E> {
        (self.stop)()
    }

    fn set_counter(&mut self, value: u32) -> Result<(), E> {
        (self.set_counter)(value)
    }

    fn get_counter(&mut self) -> Result<u32, E> {
        (self.get_counter)()
    }

    fn set_mode(&mut self, direction: Direction) -> Result<(), E> {
        self.mode.apply(direction)
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::vec::Vec;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Call {
        Start,
        Stop,
        Set(u32),
        Get,
        Up,
        Down,
        Mode(u8),
    }

    std::thread_local! {
        // Each test runs on its own thread, so logs never mix.
        static CALLS: RefCell<Vec<Call>> = const { RefCell::new(Vec::new()) };
    }

    fn record(call: Call) {
        CALLS.with(|calls| calls.borrow_mut().push(call));
    }

    fn take_calls() -> Vec<Call> {
        CALLS.with(|calls| core::mem::take(&mut *calls.borrow_mut()))
    }

    fn start() -> Result<(), u8> {
        record(Call::Start);
        Ok(())
    }

    fn stop() -> Result<(), u8> {
        record(Call::Stop);
        Ok(())
    }

    fn set_counter(value: u32) -> Result<(), u8> {
        record(Call::Set(value));
        Ok(())
    }

    fn get_counter() -> Result<u32, u8> {
        record(Call::Get);
        Ok(1234)
    }

    fn up() -> Result<(), u8> {
        record(Call::Up);
        Ok(())
    }

    fn down() -> Result<(), u8> {
        record(Call::Down);
        Ok(())
    }

    fn set_mode(mode: u8) -> Result<(), u8> {
        record(Call::Mode(mode));
        Ok(())
    }

    fn failing() -> Result<(), u8> {
        Err(7)
    }

    fn failing_get() -> Result<u32, u8> {
        Err(9)
    }

    fn split_table() -> Callbacks<u8> {
        Callbacks {
            start,
            stop,
            set_counter,
            get_counter,
            mode: ModeCallbacks::Split { up, down },
        }
    }

    fn selector_table() -> Callbacks<u8> {
        Callbacks {
            mode: ModeCallbacks::Selector(set_mode),
            ..split_table()
        }
    }

    // ── Forwarding ───────────────────────────────────────────────────

    #[test]
    fn lifecycle_and_counter_forward_to_their_callbacks() {
        let mut table = split_table();
        take_calls();

        table.start().unwrap();
        table.set_counter(77).unwrap();
        assert_eq!(table.get_counter(), Ok(1234));
        table.stop().unwrap();

        assert_eq!(
            take_calls(),
            [Call::Start, Call::Set(77), Call::Get, Call::Stop]
        );
    }

    #[test]
    fn split_mode_invokes_only_matching_callback() {
        let mut table = split_table();
        take_calls();

        table.set_mode(Direction::Up).unwrap();
        assert_eq!(take_calls(), [Call::Up]);

        table.set_mode(Direction::Down).unwrap();
        assert_eq!(take_calls(), [Call::Down]);
    }

    #[test]
    fn selector_mode_receives_raw_byte() {
        let mut table = selector_table();
        take_calls();

        table.set_mode(Direction::Up).unwrap();
        table.set_mode(Direction::Down).unwrap();
        assert_eq!(take_calls(), [Call::Mode(0), Call::Mode(1)]);
    }

    // ── Error passthrough ────────────────────────────────────────────

    #[test]
    fn callback_errors_are_returned_verbatim() {
        let mut table = Callbacks {
            start: failing,
            get_counter: failing_get,
            mode: ModeCallbacks::Split { up: failing, down },
            ..split_table()
        };

        assert_eq!(table.start(), Err(7));
        assert_eq!(table.get_counter(), Err(9));
        assert_eq!(table.set_mode(Direction::Up), Err(7));
    }

    #[test]
    fn tables_are_copy() {
        let table = selector_table();
        let mut copy = table;
        take_calls();

        copy.start().unwrap();
        let mut original = table;
        original.start().unwrap();
        assert_eq!(take_calls(), [Call::Start, Call::Start]);
    }
}
