//! Mock marketplace endpoint creation utilities.
//!
//! Each method registers one endpoint on the test's mockito server. Authenticated
//! endpoints only match requests carrying `Bearer TEST_ACCESS_TOKEN`, so a call
//! made without the session's token fails the mock's expectation.

use mockito::{Matcher, Mock};
use serde_json::Value;

use crate::{constant::TEST_ACCESS_TOKEN, fixtures::marketplace::MarketplaceFixtures};

fn bearer() -> String {
    format!("Bearer {}", TEST_ACCESS_TOKEN)
}

fn page_query(page: u32, limit: u32) -> Matcher {
    Matcher::AllOf(vec![
        Matcher::UrlEncoded("page".into(), page.to_string()),
        Matcher::UrlEncoded("limit".into(), limit.to_string()),
    ])
}

impl<'a> MarketplaceFixtures<'a> {
    /// Create a `POST /auth/login` endpoint returning `body` with `status`.
    ///
    /// # Arguments
    /// - `status` - HTTP status of the response
    /// - `body` - JSON body of the response
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Mock` - The created mock endpoint
    pub fn create_login_endpoint(
        &mut self,
        status: usize,
        body: Value,
        expected_requests: usize,
    ) -> Mock {
        self.context
            .server
            .mock("POST", "/auth/login")
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a `GET /admin/sellers` endpoint for one page.
    ///
    /// Only matches requests for exactly `page` and `limit`.
    pub fn create_sellers_endpoint(
        &mut self,
        page: u32,
        limit: u32,
        body: Value,
        expected_requests: usize,
    ) -> Mock {
        self.context
            .server
            .mock("GET", "/admin/sellers")
            .match_query(page_query(page, limit))
            .match_header("authorization", bearer().as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a `DELETE /admin/sellers/{id}` endpoint.
    ///
    /// 2xx statuses respond with `{"success": true}`, anything else with a
    /// failure envelope.
    pub fn create_delete_seller_endpoint(
        &mut self,
        seller_id: &str,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        let body = if (200..300).contains(&status) {
            r#"{"success":true,"message":"Seller deleted"}"#
        } else {
            r#"{"success":false,"message":"Failed to delete seller"}"#
        };

        self.context
            .server
            .mock("DELETE", format!("/admin/sellers/{}", seller_id).as_str())
            .match_header("authorization", bearer().as_str())
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(expected_requests)
            .create()
    }

    /// Create a `GET /admin/admin-reveneu` endpoint for one page.
    pub fn create_revenue_endpoint(
        &mut self,
        page: u32,
        limit: u32,
        body: Value,
        expected_requests: usize,
    ) -> Mock {
        self.context
            .server
            .mock("GET", "/admin/admin-reveneu")
            .match_query(page_query(page, limit))
            .match_header("authorization", bearer().as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }
}
