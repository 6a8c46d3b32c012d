// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use chromiumoxide::{Browser, BrowserConfig, Page};
use futures::StreamExt;
use std::time::Duration;
use tokio::sync::OnceCell;
use tracing::{debug, info};

use crate::engines::traits::{EngineError, PageEngine};
use crate::utils::url_utils;

const SCROLL_STEP_PX: u32 = 300;
const SCROLL_PAUSE: Duration = Duration::from_millis(700);
// Hard cap so a router that never advances the page parameter cannot hang the run.
const MAX_SCROLL_ITERATIONS: u32 = 600;
const HEIGHT_WAIT_TIMEOUT: Duration = Duration::from_secs(5);
const HEIGHT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Chromium引擎
///
/// 基于chromiumoxide实现的页面加载引擎。
/// 浏览器在第一次使用时才启动，整个实例生命周期内复用同一个标签页。
pub struct ChromiumEngine {
    session: OnceCell<(Browser, Page)>,
}

impl ChromiumEngine {
    pub fn new() -> Self {
        Self {
            session: OnceCell::new(),
        }
    }

    // Lazily launches the browser and opens the single page used for all loads.
    async fn page(&self) -> Result<&Page, EngineError> {
        let (_, page) = self
            .session
            .get_or_try_init(|| async {
                let config = BrowserConfig::builder()
                    .no_sandbox()
                    .arg("--disable-blink-features=AutomationControlled")
                    .arg("--disable-gpu")
                    .arg("--disable-dev-shm-usage")
                    .build()
                    .map_err(EngineError::Config)?;

                let (browser, mut handler) = Browser::launch(config).await?;

                // Drain browser events so the CDP connection stays responsive
                tokio::spawn(async move {
                    while let Some(event) = handler.next().await {
                        if event.is_err() {
                            break;
                        }
                    }
                });

                let page = browser.new_page("about:blank").await?;
                info!("Browser session started");
                Ok::<_, EngineError>((browser, page))
            })
            .await?;
        Ok(page)
    }

    async fn current_height(page: &Page) -> Result<i64, EngineError> {
        page.evaluate("document.body.scrollHeight")
            .await?
            .into_value::<i64>()
            .map_err(|e| EngineError::Evaluation(e.to_string()))
    }

    // Polls until the document grows past `previous` or the bounded wait runs out.
    async fn wait_for_height_growth(page: &Page, previous: i64) -> Result<bool, EngineError> {
        let deadline = tokio::time::Instant::now() + HEIGHT_WAIT_TIMEOUT;
        while tokio::time::Instant::now() < deadline {
            tokio::time::sleep(HEIGHT_POLL_INTERVAL).await;
            if Self::current_height(page).await? > previous {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

impl Default for ChromiumEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PageEngine for ChromiumEngine {
    /// 加载列表页
    ///
    /// 从第一页开始逐步向下滚动；站点的客户端路由把当前页码写进
    /// `p` 查询参数，超过目标页数后停止滚动并返回渲染后的HTML
    async fn load_listing_page(
        &self,
        base_url: &str,
        page_count: u32,
    ) -> Result<String, EngineError> {
        let page = self.page().await?;
        let start_url = format!("{}?p=1", base_url);
        info!("Loading listing page: {}", start_url);
        page.goto(start_url.as_str()).await?;

        for iteration in 0..MAX_SCROLL_ITERATIONS {
            page.evaluate(format!("window.scrollBy(0, {});", SCROLL_STEP_PX))
                .await?;
            tokio::time::sleep(SCROLL_PAUSE).await;

            let Some(current) = page.url().await? else {
                continue;
            };
            match url_utils::page_param(&current) {
                // The router has not populated the parameter yet, keep scrolling
                None => continue,
                Some(value) => match value.parse::<u32>() {
                    Ok(p) if p <= page_count => continue,
                    _ => {
                        debug!(
                            "Pagination passed page {} after {} scroll steps",
                            page_count,
                            iteration + 1
                        );
                        break;
                    }
                },
            }
        }

        Ok(page.content().await?)
    }

    /// 加载商品页
    ///
    /// 反复滚动到文档底部，直到页面高度在限定等待内不再增长
    async fn load_item_page(&self, url: &str) -> Result<String, EngineError> {
        let page = self.page().await?;
        debug!("Loading item page: {}", url);
        page.goto(url).await?;

        loop {
            let before = Self::current_height(page).await?;
            page.evaluate("window.scrollTo(0, document.body.scrollHeight);")
                .await?;
            if !Self::wait_for_height_growth(page, before).await? {
                break;
            }
        }

        Ok(page.content().await?)
    }
}
