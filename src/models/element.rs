use serde::{Deserialize, Serialize};
use std::fmt;

/// 剧本元素类型
///
/// `Character` 只是扫描过程中的过渡类型：角色名会并入随后对白的 `character` 元数据，
/// 不会作为独立元素输出。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ElementType {
    SceneHeading,
    Character,
    Action,
    Dialogue,
    Parenthetical,
    Transition,
    Location,
}

impl ElementType {
    pub fn name(&self) -> &'static str {
        match self {
            ElementType::SceneHeading => "SCENE_HEADING",
            ElementType::Character => "CHARACTER",
            ElementType::Action => "ACTION",
            ElementType::Dialogue => "DIALOGUE",
            ElementType::Parenthetical => "PARENTHETICAL",
            ElementType::Transition => "TRANSITION",
            ElementType::Location => "LOCATION",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 剧本中的一个结构单元
///
/// 不同类型的内容形状不同：对白在收尾时被切分为句子序列，其余元素只有一段合并后的文本。
/// `indentation` 记录元素第一行的缩进级别，仅用于诊断。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptElement {
    SceneHeading { text: String, indentation: usize },
    Location { text: String, indentation: usize },
    Action { text: String, indentation: usize },
    Transition { text: String, indentation: usize },
    Parenthetical {
        text: String,
        character: Option<String>,
        indentation: usize,
    },
    Dialogue {
        character: String,
        sentences: Vec<String>,
        indentation: usize,
    },
}

impl ScriptElement {
    pub fn element_type(&self) -> ElementType {
        match self {
            ScriptElement::SceneHeading { .. } => ElementType::SceneHeading,
            ScriptElement::Location { .. } => ElementType::Location,
            ScriptElement::Action { .. } => ElementType::Action,
            ScriptElement::Transition { .. } => ElementType::Transition,
            ScriptElement::Parenthetical { .. } => ElementType::Parenthetical,
            ScriptElement::Dialogue { .. } => ElementType::Dialogue,
        }
    }

    /// 说话的角色(只有对白和括号注释才有)
    pub fn character(&self) -> Option<&str> {
        match self {
            ScriptElement::Dialogue { character, .. } => Some(character.as_str()),
            ScriptElement::Parenthetical { character, .. } => character.as_deref(),
            _ => None,
        }
    }

    pub fn indentation(&self) -> usize {
        match self {
            ScriptElement::SceneHeading { indentation, .. }
            | ScriptElement::Location { indentation, .. }
            | ScriptElement::Action { indentation, .. }
            | ScriptElement::Transition { indentation, .. }
            | ScriptElement::Parenthetical { indentation, .. }
            | ScriptElement::Dialogue { indentation, .. } => *indentation,
        }
    }

    /// 按顺序返回内容片段，单文本元素只有一段
    pub fn content(&self) -> Vec<&str> {
        match self {
            ScriptElement::Dialogue { sentences, .. } => {
                sentences.iter().map(String::as_str).collect()
            }
            ScriptElement::SceneHeading { text, .. }
            | ScriptElement::Location { text, .. }
            | ScriptElement::Action { text, .. }
            | ScriptElement::Transition { text, .. }
            | ScriptElement::Parenthetical { text, .. } => vec![text.as_str()],
        }
    }

    /// 内容合并成一行文本
    pub fn text(&self) -> String {
        self.content().join(" ")
    }
}

#[derive(Serialize)]
#[serde(untagged)]
enum ContentRecord<'a> {
    Text(&'a str),
    Sentences(&'a [String]),
}

#[derive(Serialize)]
struct MetadataRecord<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    character: Option<&'a str>,
    indentation: usize,
}

#[derive(Serialize)]
struct ElementRecord<'a> {
    element_type: ElementType,
    content: ContentRecord<'a>,
    metadata: MetadataRecord<'a>,
}

impl Serialize for ScriptElement {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let content = match self {
            ScriptElement::Dialogue { sentences, .. } => ContentRecord::Sentences(sentences),
            ScriptElement::SceneHeading { text, .. }
            | ScriptElement::Location { text, .. }
            | ScriptElement::Action { text, .. }
            | ScriptElement::Transition { text, .. }
            | ScriptElement::Parenthetical { text, .. } => ContentRecord::Text(text),
        };

        ElementRecord {
            element_type: self.element_type(),
            content,
            metadata: MetadataRecord {
                character: self.character(),
                indentation: self.indentation(),
            },
        }
        .serialize(serializer)
    }
}
