pub mod factory;
pub mod mockito;

use crate::TestContext;

impl TestContext {
    pub fn marketplace<'a>(&'a mut self) -> MarketplaceFixtures<'a> {
        MarketplaceFixtures { context: self }
    }
}

pub struct MarketplaceFixtures<'a> {
    context: &'a mut TestContext,
}
