/*
 * @Author       : 老董
 * @Date         : 2026-10-18
 * @Description  : 按插入顺序保存的“参数名 -> 张量”映射
 */

use crate::tensor::Tensor;

/// 参数名到张量的有序映射，层的参数与梯度都用它保存。
///
/// 遍历顺序即插入顺序。Adam 的共享时间步按参数遍历顺序递增，
/// 所以这里不用 `HashMap`。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParamStore {
    entries: Vec<(String, Tensor)>,
}

impl ParamStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入或覆盖同名条目，返回被覆盖的旧值。覆盖时保留原有位置。
    pub fn insert(&mut self, name: impl Into<String>, value: Tensor) -> Option<Tensor> {
        let name = name.into();
        match self.get_mut(&name) {
            Some(slot) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Tensor> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Tensor> {
        self.entries
            .iter_mut()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    pub fn remove(&mut self, name: &str) -> Option<Tensor> {
        let index = self.entries.iter().position(|(key, _)| key == name)?;
        Some(self.entries.remove(index).1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Tensor)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut Tensor)> {
        self.entries
            .iter_mut()
            .map(|(key, value)| (key.as_str(), value))
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
}

impl<S: Into<String>> FromIterator<(S, Tensor)> for ParamStore {
    fn from_iter<I: IntoIterator<Item = (S, Tensor)>>(iter: I) -> Self {
        let mut store = Self::new();
        for (name, value) in iter {
            store.insert(name, value);
        }
        store
    }
}
