// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use reqwest::StatusCode;
use thiserror::Error;

/// 响应检查错误类型
#[derive(Error, Debug)]
pub enum ResponseError {
    /// 目标站点拒绝访问
    #[error("403 Forbidden – Access denied! A VPN or network settings might be causing this issue")]
    AccessBlocked,
    /// 其他非成功状态码
    #[error("Request to '{url}' failed with status {status}")]
    HttpStatus { status: StatusCode, url: String },
    /// 传输层错误
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// 抓取前的可达性检查
///
/// 对目标URL发起一次普通GET请求并检查状态码，
/// 不做任何重试
pub async fn check(url: &str) -> Result<(), ResponseError> {
    let response = reqwest::get(url).await?;
    check_status(response.status(), url)
}

/// 将状态码映射为检查结果
///
/// 403直接判定为被站点封锁，重定向与成功状态放行
pub fn check_status(status: StatusCode, url: &str) -> Result<(), ResponseError> {
    if status == StatusCode::FORBIDDEN {
        return Err(ResponseError::AccessBlocked);
    }
    if !status.is_success() && !status.is_redirection() {
        return Err(ResponseError::HttpStatus {
            status,
            url: url.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_forbidden_maps_to_access_blocked() {
        let err = check_status(StatusCode::FORBIDDEN, "https://goldapple.ru").unwrap_err();
        assert!(matches!(err, ResponseError::AccessBlocked));
        assert!(err.to_string().contains("Forbidden"));
    }

    #[test]
    fn test_success_and_redirect_pass() {
        assert!(check_status(StatusCode::OK, "https://goldapple.ru").is_ok());
        assert!(check_status(StatusCode::FOUND, "https://goldapple.ru").is_ok());
    }

    #[test]
    fn test_server_error_reports_status() {
        let err = check_status(StatusCode::BAD_GATEWAY, "https://goldapple.ru").unwrap_err();
        assert!(matches!(
            err,
            ResponseError::HttpStatus { status, .. } if status == StatusCode::BAD_GATEWAY
        ));
    }

    #[tokio::test]
    async fn test_check_against_live_server() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/catalog"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        assert!(check(&format!("{}/catalog", server.uri())).await.is_ok());
    }

    #[tokio::test]
    async fn test_check_blocked_server() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let err = check(&server.uri()).await.unwrap_err();
        assert!(matches!(err, ResponseError::AccessBlocked));
    }
}
