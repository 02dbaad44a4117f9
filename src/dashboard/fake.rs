//! In-memory marketplace used to drive the view state in tests.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Mutex,
};

use async_trait::async_trait;
use pacific_test_utils::prelude::*;

use crate::{
    dashboard::source::{PageSource, SellerRemover},
    marketplace::Error,
    model::{
        api::{PageDto, PageQuery, Pagination},
        revenue::Revenue,
        seller::Seller,
        session::Session,
    },
};

pub fn seller(id: &str, name: &str) -> Seller {
    serde_json::from_value(factory::mock_seller(id, name)).expect("valid seller fixture")
}

pub fn revenue(farm: &str, product: &str, amount: f64) -> Revenue {
    serde_json::from_value(factory::mock_revenue(farm, product, amount))
        .expect("valid revenue fixture")
}

#[derive(Default)]
pub struct FakeMarketplace {
    sellers: Mutex<Vec<Seller>>,
    revenue: Vec<Revenue>,
    requests: Mutex<Vec<PageQuery>>,
    fail_fetch: AtomicBool,
    fail_delete: AtomicBool,
}

impl FakeMarketplace {
    /// Sellers `s1..=s{count}`.
    pub fn with_sellers(count: usize) -> Self {
        let sellers = (1..=count)
            .map(|n| seller(&format!("s{}", n), &format!("Seller {}", n)))
            .collect();

        Self {
            sellers: Mutex::new(sellers),
            ..Default::default()
        }
    }

    pub fn with_revenue(rows: Vec<Revenue>) -> Self {
        Self {
            revenue: rows,
            ..Default::default()
        }
    }

    pub fn fail_fetches(&self, fail: bool) {
        self.fail_fetch.store(fail, Ordering::SeqCst);
    }

    pub fn fail_deletes(&self, fail: bool) {
        self.fail_delete.store(fail, Ordering::SeqCst);
    }

    /// Every page query received, in order.
    pub fn requests(&self) -> Vec<PageQuery> {
        self.requests.lock().unwrap().clone()
    }

    fn page<T: Clone>(&self, rows: &[T], query: PageQuery) -> Result<PageDto<T>, Error> {
        self.requests.lock().unwrap().push(query);

        if self.fail_fetch.load(Ordering::SeqCst) {
            return Err(Error::Status {
                status: 500,
                message: None,
            });
        }

        let start = ((query.page.max(1) - 1) * query.limit) as usize;
        let records = rows
            .iter()
            .skip(start)
            .take(query.limit as usize)
            .cloned()
            .collect();

        Ok(PageDto::new(
            records,
            Pagination::new(rows.len() as u64, query.page, query.limit),
        ))
    }
}

#[async_trait]
impl PageSource<Seller> for FakeMarketplace {
    async fn fetch_page(
        &self,
        _session: &Session,
        query: PageQuery,
    ) -> Result<PageDto<Seller>, Error> {
        let sellers = self.sellers.lock().unwrap().clone();

        self.page(&sellers, query)
    }
}

#[async_trait]
impl PageSource<Revenue> for FakeMarketplace {
    async fn fetch_page(
        &self,
        _session: &Session,
        query: PageQuery,
    ) -> Result<PageDto<Revenue>, Error> {
        self.page(&self.revenue, query)
    }
}

#[async_trait]
impl SellerRemover for FakeMarketplace {
    async fn remove(&self, _session: &Session, seller_id: &str) -> Result<(), Error> {
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(Error::Application("Failed to delete seller".to_string()));
        }

        let mut sellers = self.sellers.lock().unwrap();
        let before = sellers.len();
        sellers.retain(|seller| seller.id != seller_id);

        if sellers.len() == before {
            return Err(Error::NotFound(format!("/admin/sellers/{}", seller_id)));
        }

        Ok(())
    }
}
