// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use async_trait::async_trait;
use thiserror::Error;

/// 引擎错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    /// 浏览器协议错误
    #[error("Browser error: {0}")]
    Browser(#[from] chromiumoxide::error::CdpError),
    /// 浏览器启动配置错误
    #[error("Browser configuration error: {0}")]
    Config(String),
    /// 页面脚本求值失败
    #[error("Script evaluation failed: {0}")]
    Evaluation(String),
}

/// 页面加载引擎特质
///
/// 页面内容由客户端渲染，引擎负责把页面滚动到
/// 全部内容就位后返回最终的HTML
#[async_trait]
pub trait PageEngine: Send + Sync {
    /// 加载列表页并滚动到第 `page_count` 页的内容全部渲染
    async fn load_listing_page(
        &self,
        base_url: &str,
        page_count: u32,
    ) -> Result<String, EngineError>;

    /// 加载单个商品页并滚动到页面底部
    async fn load_item_page(&self, url: &str) -> Result<String, EngineError>;
}
