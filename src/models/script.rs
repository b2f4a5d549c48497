use serde::Serialize;
use crate::models::element::{ElementType, ScriptElement};

/// 解析完成的剧本
///
/// 标题取自第一行非空文本，元素按源文本顺序排列。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Script {
    pub title: String,
    pub elements: Vec<ScriptElement>,
}

impl Script {
    pub(crate) fn add_element(&mut self, element: ScriptElement) {
        self.elements.push(element);
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScriptElement> {
        self.elements.iter()
    }

    /// 某种类型的元素数量
    pub fn count(&self, element_type: ElementType) -> usize {
        self.elements
            .iter()
            .filter(|e| e.element_type() == element_type)
            .count()
    }

    /// 有对白的角色，按首次出现的顺序
    pub fn characters(&self) -> Vec<&str> {
        let mut characters: Vec<&str> = Vec::new();
        for element in &self.elements {
            if let ScriptElement::Dialogue { character, .. } = element {
                if !characters.contains(&character.as_str()) {
                    characters.push(character);
                }
            }
        }
        characters
    }
}

impl<'a> IntoIterator for &'a Script {
    type Item = &'a ScriptElement;
    type IntoIter = std::slice::Iter<'a, ScriptElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
