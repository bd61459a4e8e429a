//! The resolver handle.
//!
//! [`Resolver`] holds the configured backend together with the bookkeeping
//! the layer is responsible for: the stored max reload value and whether
//! the counter is running. Every operation checks that a backend is
//! installed, then forwards straight to it.

use crate::backend::{Direction, ResolverBackend};
use crate::error::ResolverError;

/// Configuration accepted by [`Resolver::configure`].
///
/// All fields are mandatory.
#[derive(Debug, Clone, Copy)]
pub struct ResolverConfig<B> {
    /// Upper bound for the counter's reload/wrap value.
    ///
    /// Stored for the backend's use; the resolver never enforces it.
    pub max_reload: u32,
    /// Driver performing the actual counter operations.
    pub backend: B,
}

/// Hardware-independent handle to a counting peripheral.
///
/// # Lifecycle
///
/// 1. [`Resolver::new()`]: unconfigured, no backend, not running.
/// 2. [`Resolver::configure()`]: installs a backend. May be called again
///    later to swap it.
/// 3. [`Resolver::prepare()`] (optional), then [`start()`](Self::start),
///    [`stop()`](Self::stop), counter and mode operations.
/// 4. [`Resolver::destroy()`]: hands the backend back.
///
/// Every operation except `configure` and `destroy` fails with
/// [`ResolverError::NotConfigured`] until a backend is installed.
///
/// # Example
///
/// ```
/// use resolver_driver::{Direction, Resolver, ResolverBackend, ResolverConfig};
///
/// # struct Tim3;
/// # impl ResolverBackend for Tim3 {
/// #     type Error = ();
/// #     fn start(&mut self) -> Result<(), ()> { Ok(()) }
/// #     fn stop(&mut self) -> Result<(), ()> { Ok(()) }
/// #     fn set_counter(&mut self, _: u32) -> Result<(), ()> { Ok(()) }
/// #     fn get_counter(&mut self) -> Result<u32, ()> { Ok(0) }
/// #     fn set_mode(&mut self, _: Direction) -> Result<(), ()> { Ok(()) }
/// # }
/// let mut resolver = Resolver::new();
/// resolver.configure(ResolverConfig { max_reload: 0xFFFF, backend: Tim3 })?;
/// resolver.prepare()?;
/// resolver.start()?;
/// resolver.set_value(0)?;
/// resolver.set_mode_down()?;
/// let position = resolver.get_value()?;
/// # let _ = position;
/// # Ok::<(), resolver_driver::ResolverError<()>>(())
/// ```
#[derive(Debug)]
pub struct Resolver<B> {
    /// Installed backend. `None` until the first `configure()`.
    backend: Option<B>,
    max_reload: u32,
    /// Set by a successful `start()`, cleared by a successful `stop()`.
    is_run: bool,
}

impl<B> Default for Resolver<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B> Resolver<B> {
    /// Create an unconfigured resolver.
    ///
    /// `max_reload` is `0` and the counter is not running.
    pub const fn new() -> Self {
        Self {
            backend: None,
            max_reload: 0,
            is_run: false,
        }
    }

    /// Whether a backend has been installed.
    pub fn is_configured(&self) -> bool {
        self.backend.is_some()
    }

    /// Whether the counter was started and not stopped since.
    pub fn is_running(&self) -> bool {
        self.is_run
    }

    /// The configured max reload value (`0` before configuration).
    pub fn max_reload(&self) -> u32 {
        self.max_reload
    }

    /// Shared access to the installed backend.
    pub fn backend(&self) -> Option<&B> {
        self.backend.as_ref()
    }

    /// Exclusive access to the installed backend.
    ///
    /// Calls made directly on the backend bypass the run-state bookkeeping.
    pub fn backend_mut(&mut self) -> Option<&mut B> {
        self.backend.as_mut()
    }

    /// Consume the handle and return the backend, if one was installed.
    ///
    /// No backend call is made; a running counter keeps running.
    pub fn destroy(self) -> Option<B> {
        self.backend
    }
}

impl<B> Resolver<B>
where
    B: ResolverBackend,
{
    fn configured(&mut self) -> Result<&mut B, ResolverError<B::Error>> {
        match self.backend.as_mut() {
            Some(backend) => Ok(backend),
            None => {
                #[cfg(feature = "defmt")]
                defmt::warn!("resolver used before configure()");
                Err(ResolverError::NotConfigured)
            }
        }
    }

    // -----------------------------------------------------------------------
    // Configuration
    // -----------------------------------------------------------------------

    /// Install a backend and max reload value.
    ///
    /// The run flag is reset to `false`. If the resolver is currently
    /// running, the old backend is stopped first; should that stop fail, the
    /// error is returned and the previous configuration stays in place.
    ///
    /// Returns the replaced backend, if any, so its hardware can be released.
    ///
    /// # Errors
    /// * [`ResolverError::Backend`] if stopping the running backend fails
    pub fn configure(
        &mut self,
        config: ResolverConfig<B>,
    ) -> Result<Option<B>, ResolverError<B::Error>> {
        if self.is_run {
            if let Some(previous) = self.backend.as_mut() {
                #[cfg(feature = "defmt")]
                defmt::debug!("resolver reconfigured while running; stopping previous backend");
                previous.stop()?;
            }
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("resolver configured: max_reload={}", config.max_reload);

        self.max_reload = config.max_reload;
        self.is_run = false;
        Ok(self.backend.replace(config.backend))
    }

    /// Checkpoint before [`start()`](Self::start).
    ///
    /// Performs no backend call.
    ///
    /// # Errors
    /// * [`ResolverError::NotConfigured`] if no backend is installed
    pub fn prepare(&mut self) -> Result<(), ResolverError<B::Error>> {
        self.configured()?;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Run control
    // -----------------------------------------------------------------------

    /// Start counting.
    ///
    /// The resolver is marked running only if the backend succeeds.
    ///
    /// # Errors
    /// * [`ResolverError::NotConfigured`] if no backend is installed
    /// * [`ResolverError::Backend`] if the backend fails to start
    pub fn start(&mut self) -> Result<(), ResolverError<B::Error>> {
        self.configured()?.start()?;
        self.is_run = true;

        #[cfg(feature = "defmt")]
        defmt::trace!("resolver started");

        Ok(())
    }

    /// Stop counting.
    ///
    /// The running flag is cleared only if the backend succeeds.
    ///
    /// # Errors
    /// * [`ResolverError::NotConfigured`] if no backend is installed
    /// * [`ResolverError::Backend`] if the backend fails to stop
    pub fn stop(&mut self) -> Result<(), ResolverError<B::Error>> {
        self.configured()?.stop()?;
        self.is_run = false;

        #[cfg(feature = "defmt")]
        defmt::trace!("resolver stopped");

        Ok(())
    }

    // -----------------------------------------------------------------------
    // Counter access
    // -----------------------------------------------------------------------

    /// Read the counter through the backend.
    ///
    /// Nothing is cached; each call reads the hardware again.
    ///
    /// # Errors
    /// * [`ResolverError::NotConfigured`] if no backend is installed
    /// * [`ResolverError::Backend`] on a read failure
    pub fn get_value(&mut self) -> Result<u32, ResolverError<B::Error>> {
        Ok(self.configured()?.get_counter()?)
    }

    /// Write the counter through the backend.
    ///
    /// `value` is not checked against [`max_reload()`](Self::max_reload).
    ///
    /// # Errors
    /// * [`ResolverError::NotConfigured`] if no backend is installed
    /// * [`ResolverError::Backend`] on a write failure
    pub fn set_value(&mut self, value: u32) -> Result<(), ResolverError<B::Error>> {
        self.configured()?.set_counter(value)?;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Counting direction
    // -----------------------------------------------------------------------

    /// Switch the counting direction.
    ///
    /// # Errors
    /// * [`ResolverError::NotConfigured`] if no backend is installed
    /// * [`ResolverError::Backend`] if the backend rejects the change
    pub fn set_mode(&mut self, direction: Direction) -> Result<(), ResolverError<B::Error>> {
        self.configured()?.set_mode(direction)?;
        Ok(())
    }

    /// Count up. Shorthand for `set_mode(Direction::Up)`.
    pub fn set_mode_up(&mut self) -> Result<(), ResolverError<B::Error>> {
        self.set_mode(Direction::Up)
    }

    /// Count down. Shorthand for `set_mode(Direction::Down)`.
    pub fn set_mode_down(&mut self) -> Result<(), ResolverError<B::Error>> {
        self.set_mode(Direction::Down)
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────
