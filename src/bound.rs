//! 语句上已绑定参数的记录：名字（不带 `:`）→ 已格式化的字面量。

use crate::substitute::strip_marker;

/// 按首次绑定顺序保存的参数表；重复绑定同名参数时原位覆盖。
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BoundParameters {
    entries: Vec<(String, String)>,
}

impl BoundParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录一个参数，返回被覆盖的旧字面量（如有）。
    pub fn insert(&mut self, name: &str, literal: impl Into<String>) -> Option<String> {
        let name = strip_marker(name);
        let literal = literal.into();
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some((_, old)) => Some(std::mem::replace(old, literal)),
            None => {
                self.entries.push((name.to_string(), literal));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        let name = strip_marker(name);
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, l)| l.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, l)| (n.as_str(), l.as_str()))
    }

    pub fn as_slice(&self) -> &[(String, String)] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::BoundParameters;
    use pretty_assertions::assert_eq;

    #[test]
    fn insert_strips_marker_and_overwrites_in_place() {
        let mut b = BoundParameters::new();
        assert_eq!(b.insert(":a", "1"), None);
        assert_eq!(b.insert("b", "2"), None);
        assert_eq!(b.insert("a", "3"), Some("1".to_string()));

        assert_eq!(b.len(), 2);
        assert_eq!(b.get(":a"), Some("3"));
        assert_eq!(b.iter().collect::<Vec<_>>(), vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn clear_empties_record() {
        let mut b = BoundParameters::new();
        b.insert("a", "1");
        b.clear();
        assert!(b.is_empty());
        assert_eq!(b.get("a"), None);
    }
}
