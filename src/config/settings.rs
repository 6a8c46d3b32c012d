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

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
///
/// 包含爬取目标、存储和日志等所有配置项
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// 爬取配置
    pub scraper: ScraperSettings,
    /// 存储配置
    pub storage: StorageSettings,
    /// 日志配置
    pub logging: LoggingSettings,
}

/// 爬取配置设置
#[derive(Debug, Deserialize)]
pub struct ScraperSettings {
    /// 商品列表页的基础URL
    pub base_url: String,
    /// 要加载的列表页数
    pub page_count: u32,
}

/// 存储配置设置
#[derive(Debug, Deserialize)]
pub struct StorageSettings {
    /// CSV结果文件的存放目录
    pub data_dir: String,
}

/// 日志配置设置
#[derive(Debug, Deserialize)]
pub struct LoggingSettings {
    /// 每次运行的日志文件存放目录
    pub dir: String,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从环境变量加载配置，支持默认值
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Start with default settings
            .set_default("scraper.base_url", "https://goldapple.ru/parfjumerija")?
            .set_default("scraper.page_count", 3)?
            // Default Storage settings
            .set_default("storage.data_dir", "scraped_data")?
            // Default Logging settings
            .set_default("logging.dir", "logs")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("SCRAPRS").separator("__"));

        builder.build()?.try_deserialize()
    }
}
