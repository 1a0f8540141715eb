/*
 * @Author       : 老董
 * @Date         : 2026-10-18
 * @Description  : 只持有参数与梯度的最简层，供手写前向/反向的训练循环使用
 */

use super::{Layer, ParamStore};
use crate::tensor::Tensor;

/// 最简单的 [`Layer`] 实现：一张参数表加一张梯度表。
///
/// # 使用示例
/// ```ignore
/// let mut fc = ParamLayer::new()
///     .with_param("w", Tensor::new(&[0.5, -0.5], &[1, 2]))
///     .with_param("b", Tensor::zeros(&[1, 1]));
/// // ...外部的反向传播算出梯度后：
/// fc.set_grad("w", dw);
/// fc.set_grad("b", db);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ParamLayer {
    params: ParamStore,
    grads: ParamStore,
}

impl ParamLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一个参数（梯度表不变）
    pub fn with_param(mut self, name: &str, value: Tensor) -> Self {
        self.params.insert(name, value);
        self
    }

    pub fn param(&self, name: &str) -> Option<&Tensor> {
        self.params.get(name)
    }

    pub fn grad(&self, name: &str) -> Option<&Tensor> {
        self.grads.get(name)
    }

    pub fn set_param(&mut self, name: &str, value: Tensor) -> Option<Tensor> {
        self.params.insert(name, value)
    }

    pub fn set_grad(&mut self, name: &str, grad: Tensor) -> Option<Tensor> {
        self.grads.insert(name, grad)
    }

    /// 为每个参数写入形状相同的零梯度
    pub fn zero_grad(&mut self) {
        self.grads = self
            .params
            .iter()
            .map(|(name, value)| (name, value.zeros_like()))
            .collect();
    }
}

impl Layer for ParamLayer {
    fn params(&self) -> &ParamStore {
        &self.params
    }

    fn grads(&self) -> &ParamStore {
        &self.grads
    }

    fn params_and_grads(&mut self) -> (&mut ParamStore, &ParamStore) {
        (&mut self.params, &self.grads)
    }
}
