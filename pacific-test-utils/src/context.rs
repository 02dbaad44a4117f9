//! Test context returned by [`TestBuilder`](crate::TestBuilder).

use mockito::{Mock, Server, ServerGuard};

use crate::{constant::TEST_SESSION_SECRET, error::TestError};

/// A running mock marketplace plus the mocks registered on it.
///
/// The main crate builds its `MarketplaceClient` and `AppState` from
/// [`TestContext::url`] so this crate never depends on it.
pub struct TestContext {
    /// Mock HTTP server standing in for the marketplace API
    pub(crate) server: ServerGuard,
    /// Collection of mock HTTP endpoints for assertion
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    pub(crate) async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;

        Ok(TestContext {
            server,
            mocks: Vec::new(),
        })
    }

    /// Base URL of the mock marketplace.
    pub fn url(&self) -> String {
        self.server.url()
    }

    pub fn session_secret(&self) -> &'static str {
        TEST_SESSION_SECRET
    }

    /// Register an additional mock after `build()`.
    pub fn mock<F>(&mut self, setup: F)
    where
        F: FnOnce(&mut ServerGuard) -> Mock,
    {
        let mock = setup(&mut self.server);
        self.mocks.push(mock);
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
