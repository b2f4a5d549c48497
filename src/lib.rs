pub mod models;
pub mod utils;
pub mod parser;
pub mod api;

pub use models::{
    ElementType,
    ScriptElement,
    Script,
    ParserConf,
    ConfError
};

pub use parser::{
    ScreenplayParser,
    ParseError,
    ParseResult,
    SentenceSegmenter,
    UnicodeSentenceSegmenter
};

pub use api::{
    BatchError,
    parse_screenplay_text,
    parse_batch
};

/// 解析缩进格式的剧本文本
///
/// # Arguments
///
/// * `raw_text` - 已从网页中提取出来的剧本文本，保留原始的制表符和空格缩进
///
/// # Returns
///
/// 解析后的剧本；缩进超出可识别范围时返回错误
pub fn parse(raw_text: &str) -> ParseResult<Script> {
    ScreenplayParser::new().parse(raw_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() {
        let script = parse("TITLE\r\nINT. ROOM - DAY\r\n\r\nHello, world!").unwrap();
        assert_eq!(script.elements.len(), 2);
    }
}
