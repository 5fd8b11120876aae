// src/api/responses.rs
//! API response types backed by the notion-client object model.

use super::types::PaginatedResponse;

pub use notion_client::objects::{
    block::Block as NotionBlock, error::Error as NotionError, page::Page as NotionPage,
};

/// Block children response using notion-client types
pub type RetrieveBlockChildrenResponse = PaginatedResponse<NotionBlock>;

/// Trait for converting notion-client types to domain types
pub trait ToDomain<T> {
    fn to_domain(self) -> Result<T, crate::error::AppError>;
}

impl ToDomain<crate::model::Page> for NotionPage {
    fn to_domain(self) -> Result<crate::model::Page, crate::error::AppError> {
        crate::api::notion_client_adapter::convert_page(self)
    }
}

impl ToDomain<crate::model::Block> for NotionBlock {
    fn to_domain(self) -> Result<crate::model::Block, crate::error::AppError> {
        crate::api::notion_client_adapter::convert_block(self)
    }
}

impl RetrieveBlockChildrenResponse {
    /// Convert all blocks to the domain model, keeping the cursor.
    pub fn into_domain(
        self,
    ) -> Result<PaginatedResponse<crate::model::Block>, crate::error::AppError> {
        let results = self
            .results
            .into_iter()
            .map(ToDomain::to_domain)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PaginatedResponse {
            object: self.object,
            results,
            next_cursor: self.next_cursor,
            has_more: self.has_more,
        })
    }
}
