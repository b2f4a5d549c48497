use std::sync::Arc;
use log::info;
use crate::models::{ParserConf, Script};
use crate::parser::accumulator::{ElementAccumulator, ScanState};
use crate::parser::classifier::{LineClassifier, ScriptLine};
use crate::parser::error::ParseResult;
use crate::parser::indentation::analyze;
use crate::parser::segmenter::{SentenceSegmenter, UnicodeSentenceSegmenter};
use crate::parser::text_processor::normalize;

/// 缩进格式剧本解析器
///
/// 句子切分服务在构造时注入，可在多个解析器之间共享。解析器本身不保存扫描状态，
/// 同一个实例可以反复调用 `parse`。
pub struct ScreenplayParser {
    conf: ParserConf,
    segmenter: Arc<dyn SentenceSegmenter>,
}

impl ScreenplayParser {
    pub fn new() -> Self {
        Self::with_conf(ParserConf::default())
    }

    pub fn with_conf(conf: ParserConf) -> Self {
        Self::with_segmenter(conf, Arc::new(UnicodeSentenceSegmenter))
    }

    pub fn with_segmenter(conf: ParserConf, segmenter: Arc<dyn SentenceSegmenter>) -> Self {
        ScreenplayParser { conf, segmenter }
    }

    /// 解析整段剧本文本
    ///
    /// 空文本返回空剧本。缩进超出范围时返回错误，不返回部分结果。
    pub fn parse(&self, raw_text: &str) -> ParseResult<Script> {
        let script = self.assemble(raw_text.lines())?;
        info!(
            "parsed \"{}\": {} elements, {} characters",
            script.title,
            script.elements.len(),
            script.characters().len()
        );
        Ok(script)
    }

    /// 按源文本顺序逐行处理
    ///
    /// 第一行非空文本作为标题，不参与分类。
    pub fn assemble<'l, I>(&self, lines: I) -> ParseResult<Script>
    where
        I: IntoIterator<Item = &'l str>,
    {
        let classifier = LineClassifier::new(&self.conf);
        let accumulator = ElementAccumulator::new(&self.conf, self.segmenter.as_ref());

        let mut script = Script::default();
        let mut has_title = false;
        let mut state = ScanState::Idle;

        for (index, raw) in lines.into_iter().enumerate() {
            let (indent, residual) = analyze(raw, self.conf.spaces_per_tab);
            let text = normalize(residual);

            if !has_title {
                if !text.is_empty() {
                    script.title = text;
                    has_title = true;
                }
                continue;
            }

            let line = ScriptLine::new(index + 1, indent, text);
            let step = match classifier.classify(&line, state.in_dialogue())? {
                Some(element_type) => accumulator.step(state, element_type, &line),
                None => accumulator.blank(state),
            };

            for element in step.emitted {
                script.add_element(element);
            }
            state = step.state;
        }

        if let Some(element) = accumulator.finish(state) {
            script.add_element(element);
        }

        Ok(script)
    }
}

impl Default for ScreenplayParser {
    fn default() -> Self {
        Self::new()
    }
}
