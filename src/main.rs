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

use std::path::Path;
use std::sync::Arc;
use tracing::info;

use scraprs::config::settings::Settings;
use scraprs::domain::services::scraper_service::GoldAppleScraper;
use scraprs::engines::browser_engine::ChromiumEngine;
use scraprs::infrastructure::storage::CsvStorage;
use scraprs::presentation::console::ConsoleApp;
use scraprs::utils::telemetry;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动控制台会话
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load configuration
    let settings = Settings::new()?;

    // 2. Initialize logging
    let log_path = telemetry::init_telemetry(Path::new(&settings.logging.dir))?;
    info!("Starting scraprs...");
    info!("Logging to {}", log_path.display());

    // 3. Initialize Components
    let engine = Arc::new(ChromiumEngine::new());
    let scraper = GoldAppleScraper::new(
        &settings.scraper.base_url,
        settings.scraper.page_count,
        engine,
    )?;
    let storage = CsvStorage::new(&settings.storage.data_dir)?;

    // 4. Run console session
    let mut app = ConsoleApp::new(scraper, storage);
    app.run().await?;

    Ok(())
}
