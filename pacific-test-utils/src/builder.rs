//! Declarative test builder.
//!
//! `TestBuilder` queues mock marketplace endpoints and creates them all during
//! `build()`, returning a [`TestContext`] that keeps them alive for the test.

use mockito::Mock;
use serde_json::Value;

use crate::{error::TestError, fixtures::marketplace::factory, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up a mock marketplace with login, seller and
/// revenue endpoints. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    // Custom endpoints, created first so tests can layer sequential mocks on one path
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,

    // Pre-configured endpoint shortcuts
    login_endpoints: Vec<(usize, Value, usize)>, // (status, body, expected_requests)
    seller_endpoints: Vec<(u32, u32, Value, usize)>, // (page, limit, body, expected_requests)
    delete_seller_endpoints: Vec<(String, usize, usize)>, // (seller_id, status, expected_requests)
    revenue_endpoints: Vec<(u32, u32, Value, usize)>, // (page, limit, body, expected_requests)
}

impl TestBuilder {
    /// Create a new TestBuilder with no endpoints configured.
    pub fn new() -> Self {
        Self {
            mock_builders: Vec::new(),
            login_endpoints: Vec::new(),
            seller_endpoints: Vec::new(),
            delete_seller_endpoints: Vec::new(),
            revenue_endpoints: Vec::new(),
        }
    }

    /// Add a login endpoint that accepts any credentials once.
    ///
    /// # Arguments
    /// - `user_id` - `_id` returned for the user
    /// - `role` - Role returned for the user
    /// - `farm` - Farm association, omitted from the payload when `None`
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_login_endpoint(mut self, user_id: &str, role: &str, farm: Option<&str>) -> Self {
        self.login_endpoints
            .push((200, factory::mock_login_success(user_id, role, farm), 1));
        self
    }

    /// Add a login endpoint that rejects the credentials once.
    ///
    /// # Arguments
    /// - `status` - HTTP status of the rejection
    /// - `message` - Message in the failure envelope, omitted when `None`
    pub fn with_login_failure_endpoint(mut self, status: usize, message: Option<&str>) -> Self {
        self.login_endpoints
            .push((status, factory::mock_login_failure(message), 1));
        self
    }

    /// Add a login endpoint that must never be called.
    ///
    /// Used to prove validation failures happen before any network request.
    pub fn with_unreachable_login_endpoint(mut self) -> Self {
        self.login_endpoints.push((
            200,
            factory::mock_login_success("unused", "admin", None),
            0,
        ));
        self
    }

    /// Add a sellers endpoint for one page.
    ///
    /// # Arguments
    /// - `page` - Page the request must ask for
    /// - `limit` - Limit the request must ask for
    /// - `sellers` - Seller records returned on the page
    /// - `total` - Total sellers reported by the marketplace
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn with_sellers_endpoint(
        mut self,
        page: u32,
        limit: u32,
        sellers: Vec<Value>,
        total: u64,
        expected_requests: usize,
    ) -> Self {
        let body = factory::mock_seller_page(sellers, total, page, limit);
        self.seller_endpoints
            .push((page, limit, body, expected_requests));
        self
    }

    /// Add a delete endpoint for a seller responding with `status`.
    pub fn with_delete_seller_endpoint(
        mut self,
        seller_id: &str,
        status: usize,
        expected_requests: usize,
    ) -> Self {
        self.delete_seller_endpoints
            .push((seller_id.to_string(), status, expected_requests));
        self
    }

    /// Add a revenue endpoint for one page returning `body` verbatim.
    pub fn with_revenue_endpoint(
        mut self,
        page: u32,
        limit: u32,
        body: Value,
        expected_requests: usize,
    ) -> Self {
        self.revenue_endpoints
            .push((page, limit, body, expected_requests));
        self
    }

    /// Add a custom mock endpoint with full control over the mockito server.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Start the mock marketplace and create all queued endpoints.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Mock marketplace ready for use
    /// - `Err(TestError)` - The mock server could not be set up
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new().await?;
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut context.server));
        }

        for (status, body, expected) in self.login_endpoints {
            mocks.push(
                context
                    .marketplace()
                    .create_login_endpoint(status, body, expected),
            );
        }

        for (page, limit, body, expected) in self.seller_endpoints {
            mocks.push(
                context
                    .marketplace()
                    .create_sellers_endpoint(page, limit, body, expected),
            );
        }

        for (seller_id, status, expected) in self.delete_seller_endpoints {
            mocks.push(
                context
                    .marketplace()
                    .create_delete_seller_endpoint(&seller_id, status, expected),
            );
        }

        for (page, limit, body, expected) in self.revenue_endpoints {
            mocks.push(
                context
                    .marketplace()
                    .create_revenue_endpoint(page, limit, body, expected),
            );
        }

        // Store mocks in the context so they live as long as the test
        context.mocks = mocks;

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
