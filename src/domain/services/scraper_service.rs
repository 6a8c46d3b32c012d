// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use scraper::Html;
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tracing::{info, warn};
use url::Url;

use crate::domain::models::scrape_result::ScrapeResult;
use crate::domain::services::extraction_service;
use crate::engines::traits::{EngineError, PageEngine};
use crate::utils::response_checker::{self, ResponseError};
use crate::utils::url_utils;
use crate::utils::validators::{PageCountValidator, ValidationError, Validator};

/// 抓取流程错误类型
///
/// 除单个商品的提取失败外，任何错误都会中止整次运行
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// 可达性检查失败
    #[error(transparent)]
    Response(#[from] ResponseError),
    /// 浏览器引擎错误
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),
    /// 参数校验失败
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// 基础URL无法解析
    #[error("Invalid base URL '{0}'")]
    BaseUrl(String),
}

/// 抓取服务特质
#[async_trait]
pub trait Scraper: Send {
    /// 执行一次完整的抓取，运行前清空上次的结果
    async fn scrape(&mut self) -> Result<(), ScrapeError>;

    /// 当前持有的结果集，首次成功运行前为空
    fn data(&self) -> &ScrapeResult;
}

/// Gold Apple 商品抓取服务
///
/// 串联可达性检查、列表页加载、逐个商品页的加载与字段提取。
/// 单个商品的提取失败只记录警告并跳过，不影响其余商品。
pub struct GoldAppleScraper<E: PageEngine> {
    base_url: Url,
    page_count: u32,
    engine: Arc<E>,
    data: ScrapeResult,
}

impl<E: PageEngine> GoldAppleScraper<E> {
    /// 创建新的抓取服务
    ///
    /// # 参数
    ///
    /// * `base_url` - 商品列表页的基础URL
    /// * `page_count` - 要加载的列表页数，必须落在允许范围内
    /// * `engine` - 页面加载引擎
    pub fn new(base_url: &str, page_count: u32, engine: Arc<E>) -> Result<Self, ScrapeError> {
        PageCountValidator.validate(page_count)?;
        let base_url =
            Url::parse(base_url).map_err(|_| ScrapeError::BaseUrl(base_url.to_string()))?;
        Ok(Self {
            base_url,
            page_count,
            engine,
            data: ScrapeResult::new(),
        })
    }

    /// 更新页数，无效值被拒绝且保留原值
    pub fn set_page_count(&mut self, page_count: u32) -> Result<(), ScrapeError> {
        PageCountValidator.validate(page_count)?;
        self.page_count = page_count;
        Ok(())
    }

    /// 从列表页HTML中按文档顺序收集商品页的绝对URL
    fn item_urls(&self, listing_html: &str) -> Vec<String> {
        let doc = Html::parse_document(listing_html);
        let mut urls = Vec::new();
        for card in extraction_service::extract_cards(&doc) {
            match extraction_service::extract_product_path(&card) {
                Ok(path) => match url_utils::resolve_url(&self.base_url, &path) {
                    Ok(url) => urls.push(url.to_string()),
                    Err(e) => warn!("Skipping card with unresolvable link '{}': {}", path, e),
                },
                Err(e) => warn!("Skipping card without a product link: {}", e),
            }
        }
        urls
    }
}

#[async_trait]
impl<E: PageEngine> Scraper for GoldAppleScraper<E> {
    async fn scrape(&mut self) -> Result<(), ScrapeError> {
        self.data.clear();
        let run_start = Instant::now();
        info!(
            "Starting scrape of {} ({} listing pages)",
            self.base_url, self.page_count
        );

        response_checker::check(self.base_url.as_str()).await?;

        let listing_html = self
            .engine
            .load_listing_page(self.base_url.as_str(), self.page_count)
            .await?;
        let item_urls = self.item_urls(&listing_html);
        info!("Found {} product cards on the listing", item_urls.len());

        for url in item_urls {
            let item_start = Instant::now();
            let html = self.engine.load_item_page(&url).await?;
            match extraction_service::extract_record(&url, &html) {
                Ok(record) => {
                    self.data.push(record);
                    info!(
                        "Scraped '{}' in {:.1}s",
                        url,
                        item_start.elapsed().as_secs_f64()
                    );
                }
                Err(e) => warn!("Skipping '{}': {}", url, e),
            }
        }

        info!(
            "Scraped {} products in {:.1} minutes",
            self.data.len(),
            run_start.elapsed().as_secs_f64() / 60.0
        );
        Ok(())
    }

    fn data(&self) -> &ScrapeResult {
        &self.data
    }
}
