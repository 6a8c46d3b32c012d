// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 该模块包含系统的核心业务逻辑服务，这些服务封装了复杂的
/// 业务规则和领域逻辑，协调多个领域对象来完成业务操作。
///
/// 包含的服务：
/// - 提取服务（extraction_service）：从商品页HTML中提取各字段
/// - 抓取服务（scraper_service）：编排整个抓取流程
pub mod extraction_service;
pub mod scraper_service;
