//! The trait hardware drivers implement to back a [`Resolver`](crate::Resolver).

use crate::error::InvalidDirection;

/// Counting direction of a resolver.
///
/// The discriminants match the selector byte convention used by
/// single-callback mode setters: `0` counts up, `1` counts down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Direction {
    /// Counter increments.
    Up = 0,
    /// Counter decrements.
    Down = 1,
}

impl Direction {
    /// The raw selector byte for this direction.
    pub const fn as_raw(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Direction {
    type Error = InvalidDirection;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(Direction::Up),
            1 => Ok(Direction::Down),
            other => Err(InvalidDirection(other)),
        }
    }
}

impl From<Direction> for u8 {
    fn from(direction: Direction) -> Self {
        direction.as_raw()
    }
}

/// Low-level operations of a counting peripheral.
///
/// Implemented by the hardware driver (timer in encoder mode, encoder IC,
/// GPIO quadrature decoder, ...). Every method is mandatory. Errors are
/// opaque to the [`Resolver`](crate::Resolver) and handed back to the caller
/// inside [`ResolverError::Backend`](crate::ResolverError::Backend).
///
/// # Example
///
/// ```
/// use resolver_driver::{Direction, ResolverBackend};
///
/// /// A software counter, handy on the bench.
/// struct SoftCounter {
///     count: u32,
///     direction: Direction,
///     enabled: bool,
/// }
///
/// impl ResolverBackend for SoftCounter {
///     type Error = core::convert::Infallible;
///
///     fn start(&mut self) -> Result<(), Self::Error> {
///         self.enabled = true;
///         Ok(())
///     }
///
///     fn stop(&mut self) -> Result<(), Self::Error> {
///         self.enabled = false;
///         Ok(())
///     }
///
///     fn set_counter(&mut self, value: u32) -> Result<(), Self::Error> {
///         self.count = value;
///         Ok(())
///     }
///
///     fn get_counter(&mut self) -> Result<u32, Self::Error> {
///         Ok(self.count)
///     }
///
///     fn set_mode(&mut self, direction: Direction) -> Result<(), Self::Error> {
///         self.direction = direction;
///         Ok(())
///     }
/// }
/// ```
pub trait ResolverBackend {
    /// Error reported by the underlying driver.
    type Error;

    /// Begin counting.
    ///
    /// Behaviour when already running is up to the implementation.
    fn start(&mut self) -> Result<(), Self::Error>;

    /// Halt counting.
    fn stop(&mut self) -> Result<(), Self::Error>;

    /// Write the absolute counter value.
    fn set_counter(&mut self, value: u32) -> Result<(), Self::Error>;

    /// Read the absolute counter value.
    fn get_counter(&mut self) -> Result<u32, Self::Error>;

    /// Switch the counting direction.
    fn set_mode(&mut self, direction: Direction) -> Result<(), Self::Error>;
}

impl<B: ResolverBackend + ?Sized> ResolverBackend for &mut B {
    type Error = B::Error;

    fn start(&mut self) -> Result<(), Self::Error> {
        (**self).start()
    }

    fn stop(&mut self) -> Result<(), Self::Error> {
        (**self).stop()
    }

    fn set_counter(&mut self, value: u32) -> Result<(), Self::Error> {
        (**self).set_counter(value)
    }

    fn get_counter(&mut self) -> Result<u32, Self::Error> {
        (**self).get_counter()
    }

    fn set_mode(&mut self, direction: Direction) -> Result<(), Self::Error> {
        (**self).set_mode(direction)
    }
}
