use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// 配置加载错误
#[derive(Error, Debug)]
pub enum ConfError {
    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON错误: {0}")]
    Json(#[from] serde_json::Error),

    #[error("无效的配置: {0}")]
    Invalid(String),
}

pub type ConfResult<T> = Result<T, ConfError>;

/// 解析配置
///
/// 默认值对应剧本库的排版惯例：0-1 级为场景标题/动作，2 级为对白，3 级为角色名。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConf {
    /// 多少个空格折算为一级缩进
    pub spaces_per_tab: usize,
    /// 可识别的最高缩进级别，超出即为分类失败
    pub max_indent_level: usize,
    /// 场景标题的最高缩进
    pub heading_max_indent: usize,
    /// 场景标题至少包含的单词数
    pub heading_min_words: usize,
    /// 角色名的最低缩进
    pub character_min_indent: usize,
    /// 角色名最多包含的单词数
    pub character_max_words: usize,
    /// 对白续行的最低缩进
    pub dialogue_min_indent: usize,
    /// 转场的最低缩进
    pub transition_min_indent: usize,
    /// 从该缩进起，全大写的居中文本(如 THE END)一律作为转场
    pub centered_min_indent: usize,
    /// 对白收尾时是否切分句子
    pub segment_dialogue: bool,
    /// 是否去掉角色名后的 (CONT'D)
    pub strip_character_extensions: bool,
    /// 空行是否结束当前元素
    pub blank_line_closes_block: bool,
    /// 没有 INT./EXT. 前缀的场景级大写行是否输出为地点
    pub derive_locations: bool,
}

impl Default for ParserConf {
    fn default() -> Self {
        ParserConf {
            spaces_per_tab: 4,
            max_indent_level: 6,
            heading_max_indent: 1,
            heading_min_words: 3,
            character_min_indent: 3,
            character_max_words: 3,
            dialogue_min_indent: 2,
            transition_min_indent: 4,
            centered_min_indent: 5,
            segment_dialogue: true,
            strip_character_extensions: true,
            blank_line_closes_block: true,
            derive_locations: false,
        }
    }
}

impl ParserConf {
    pub fn from_json_str(json: &str) -> ConfResult<Self> {
        let conf: ParserConf = serde_json::from_str(json)?;
        conf.validate()?;
        Ok(conf)
    }

    /// 从 JSON 文件读取配置，缺失的字段取默认值
    pub fn load<P: AsRef<Path>>(path: P) -> ConfResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn validate(&self) -> ConfResult<()> {
        if self.spaces_per_tab == 0 {
            return Err(ConfError::Invalid("spaces_per_tab 不能为 0".to_string()));
        }

        let thresholds = [
            ("heading_max_indent", self.heading_max_indent),
            ("character_min_indent", self.character_min_indent),
            ("dialogue_min_indent", self.dialogue_min_indent),
            ("transition_min_indent", self.transition_min_indent),
            ("centered_min_indent", self.centered_min_indent),
        ];
        for (name, value) in thresholds {
            if value > self.max_indent_level {
                return Err(ConfError::Invalid(format!(
                    "{} ({}) 超过 max_indent_level ({})",
                    name, value, self.max_indent_level
                )));
            }
        }

        Ok(())
    }
}
