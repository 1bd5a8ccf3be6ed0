//! Synchronous holiday lookups.
//!
//! Wraps [`HolidayClient`] with a private single-threaded tokio runtime so
//! callers without an async runtime can fetch holidays. Do not use these
//! from inside an async context; `block_on` panics there.

use tokio::runtime::{Builder, Runtime};

use crate::domain::Holidays;
use crate::nager::{HolidayClient, HolidayClientConfig, HolidayError};

/// Blocking Nager.Date client.
pub struct BlockingHolidayClient {
    rt: Runtime,
    inner: HolidayClient,
}

impl BlockingHolidayClient {
    /// Create a client and the runtime that drives it.
    pub fn new(config: HolidayClientConfig) -> Result<Self, HolidayError> {
        let rt = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(HolidayError::Runtime)?;

        let inner = {
            let _guard = rt.enter();
            HolidayClient::new(config)?
        };

        Ok(Self { rt, inner })
    }

    /// Get the public holidays of `country_code` in `year`, blocking until
    /// the response has been decoded.
    pub fn get_holidays(&self, year: i32, country_code: &str) -> Result<Holidays, HolidayError> {
        self.rt.block_on(self.inner.get_holidays(year, country_code))
    }

    /// The async client this wraps.
    pub fn client(&self) -> &HolidayClient {
        &self.inner
    }
}

/// Fetch holidays from the production service with a throwaway client.
pub fn get_holidays(year: i32, country_code: &str) -> Result<Holidays, HolidayError> {
    BlockingHolidayClient::new(HolidayClientConfig::default())?.get_holidays(year, country_code)
}
