//! 异步调用接口
//!
//! 单个剧本的解析是同步的；这里把解析放到阻塞线程池上，供异步调用方使用，
//! 并支持多个剧本并发解析。

use std::sync::Arc;
use thiserror::Error;
use crate::models::{ParserConf, Script};
use crate::parser::{ParseError, ScreenplayParser};

/// 批量解析中单个剧本的错误
#[derive(Error, Debug)]
pub enum BatchError {
    #[error("解析错误: {0}")]
    Parse(#[from] ParseError),

    #[error("解析任务失败: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// 解析剧本文本，返回 JSON 字符串
///
/// 失败时返回 `{"error": "..."}`。
pub async fn parse_screenplay_text(text: String, config: Option<ParserConf>) -> String {
    let parser = ScreenplayParser::with_conf(config.unwrap_or_default());
    let result = tokio::task::spawn_blocking(move || parser.parse(&text)).await;

    match result {
        Ok(Ok(script)) => serde_json::to_string(&script).unwrap_or_else(|_| "{}".to_string()),
        Ok(Err(e)) => serde_json::json!({ "error": e.to_string() }).to_string(),
        Err(e) => serde_json::json!({ "error": e.to_string() }).to_string(),
    }
}

/// 并发解析多个剧本
///
/// 所有任务共享同一个解析器(以及其中只读的句子切分服务)。结果顺序与输入一致，
/// 单个剧本失败不影响其他剧本。
pub async fn parse_batch(
    parser: Arc<ScreenplayParser>,
    texts: Vec<String>,
) -> Vec<Result<Script, BatchError>> {
    let handles: Vec<_> = texts
        .into_iter()
        .map(|text| {
            let parser = Arc::clone(&parser);
            tokio::task::spawn_blocking(move || parser.parse(&text))
        })
        .collect();

    let mut results = Vec::with_capacity(handles.len());
    for handle in handles {
        let result = match handle.await {
            Ok(parsed) => parsed.map_err(BatchError::from),
            Err(e) => Err(BatchError::from(e)),
        };
        results.push(result);
    }
    results
}
