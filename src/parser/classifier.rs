use crate::models::{ElementType, ParserConf};
use crate::parser::error::{ParseError, ParseResult};
use crate::utils::{is_upper_case, is_wrapped_in_parens, word_count, ScreenplayConstants};

/// 经过缩进分析和规范化的一行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLine {
    /// 从 1 开始的物理行号
    pub number: usize,
    pub indent: usize,
    pub text: String,
}

impl ScriptLine {
    pub fn new(number: usize, indent: usize, text: impl Into<String>) -> Self {
        ScriptLine {
            number,
            indent,
            text: text.into(),
        }
    }
}

/// 行分类器
///
/// 规则按固定优先级依次匹配，先匹配者胜出：
///
/// 1. 空文本：跳过(`None`)
/// 2. 缩进超过 `max_indent_level`：分类失败
/// 3. 低缩进、全大写、多于两个单词：场景标题(或地点)
/// 4. 高缩进、全大写、以冒号结尾，或缩进更高的全大写居中文本：转场
/// 5. 圆括号包裹：括号注释
/// 6. 缩进 ≥ 3 且不超过三个单词：角色名
/// 7. 正处于对白中且缩进 ≥ 2：对白续行
/// 8. 其余：动作
///
/// 括号注释排在角色名和对白之前，否则对白中的 `(quietly)` 会被并入对白或当作角色名。
pub struct LineClassifier<'a> {
    conf: &'a ParserConf,
}

impl<'a> LineClassifier<'a> {
    pub fn new(conf: &'a ParserConf) -> Self {
        LineClassifier { conf }
    }

    /// `in_dialogue` 表示当前有角色上下文(刚读到角色名或对白正在累积)
    pub fn classify(&self, line: &ScriptLine, in_dialogue: bool) -> ParseResult<Option<ElementType>> {
        let conf = self.conf;
        let text = line.text.as_str();

        if text.is_empty() {
            return Ok(None);
        }

        if line.indent > conf.max_indent_level {
            return Err(ParseError::Classification {
                line: line.number,
                indent: line.indent,
                max: conf.max_indent_level,
                text: line.text.clone(),
            });
        }

        let upper = is_upper_case(text);
        let words = word_count(text);

        if line.indent <= conf.heading_max_indent && upper && words >= conf.heading_min_words {
            if conf.derive_locations && !has_scene_prefix(text) {
                return Ok(Some(ElementType::Location));
            }
            return Ok(Some(ElementType::SceneHeading));
        }

        if upper
            && (line.indent >= conf.centered_min_indent
                || (line.indent >= conf.transition_min_indent && is_transition(text)))
        {
            return Ok(Some(ElementType::Transition));
        }

        if is_wrapped_in_parens(text) {
            return Ok(Some(ElementType::Parenthetical));
        }

        if line.indent >= conf.character_min_indent && words <= conf.character_max_words {
            return Ok(Some(ElementType::Character));
        }

        if in_dialogue && line.indent >= conf.dialogue_min_indent {
            return Ok(Some(ElementType::Dialogue));
        }

        Ok(Some(ElementType::Action))
    }
}

fn has_scene_prefix(text: &str) -> bool {
    ScreenplayConstants::scene_prefixes()
        .iter()
        .any(|prefix| text.starts_with(prefix))
}

fn is_transition(text: &str) -> bool {
    text.ends_with(':')
        || ScreenplayConstants::closing_transitions()
            .iter()
            .any(|transition| *transition == text)
}
