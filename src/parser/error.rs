use thiserror::Error;

/// 解析错误
///
/// 缩进超出可识别范围说明源文本的排版不符合假设，当前剧本的解析随即中止。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("第{line}行缩进级别 {indent} 超出可识别范围(最大 {max}): {text}")]
    Classification {
        /// 从 1 开始的物理行号
        line: usize,
        indent: usize,
        max: usize,
        text: String,
    },
}

pub type ParseResult<T> = Result<T, ParseError>;
