/*
 * @Author       : 老董
 * @Date         : 2026-10-18
 * @Description  : 按顺序排列若干层的模型
 */

use super::{Layer, ParamLayer};
use crate::nn::Model;

/// 按加入顺序保存各层的模型，优化器也按此顺序更新。
///
/// 各层类型不同时可用 `Sequential<Box<dyn Layer>>`。
#[derive(Debug, Clone)]
pub struct Sequential<L = ParamLayer> {
    layers: Vec<L>,
}

impl<L> Default for Sequential<L> {
    fn default() -> Self {
        Self { layers: Vec::new() }
    }
}

impl<L: Layer> Sequential<L> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, layer: L) {
        self.layers.push(layer);
    }

    /// 链式版本的`push`
    pub fn with_layer(mut self, layer: L) -> Self {
        self.push(layer);
        self
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn layer(&self, index: usize) -> Option<&L> {
        self.layers.get(index)
    }

    /// 用于在两次`step`之间由外部写入梯度
    pub fn layer_mut(&mut self, index: usize) -> Option<&mut L> {
        self.layers.get_mut(index)
    }
}

impl<L: Layer> FromIterator<L> for Sequential<L> {
    fn from_iter<I: IntoIterator<Item = L>>(iter: I) -> Self {
        Self {
            layers: iter.into_iter().collect(),
        }
    }
}

impl<L: Layer> Model for Sequential<L> {
    fn layers(&self) -> Vec<&dyn Layer> {
        self.layers
            .iter()
            .map(|layer| layer as &dyn Layer)
            .collect()
    }

    fn layers_mut(&mut self) -> Vec<&mut dyn Layer> {
        self.layers
            .iter_mut()
            .map(|layer| layer as &mut dyn Layer)
            .collect()
    }
}
