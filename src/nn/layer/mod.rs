/*
 * @Author       : 老董
 * @Date         : 2025-12-22
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-18
 * @Description  : Layer 模块 - 优化器与层之间的约定
 *
 * 优化器只关心两件事：层里有哪些具名参数、每个参数对应的梯度是什么。
 * 前向/反向传播如何计算不在本模块的范围内。
 */

mod param_layer;
mod param_store;
mod sequential;

pub use param_layer::ParamLayer;
pub use param_store::ParamStore;
pub use sequential::Sequential;

/// 层 trait
///
/// # 约定
/// - `params()` 中的参数名在本层内唯一，遍历顺序即插入顺序
/// - `grads()` 由外部的反向传播填充，对优化器而言只读
/// - 对于优化器要更新的每个参数名，`grads()` 中须有形状相同的同名条目
pub trait Layer {
    /// 当前参数值
    fn params(&self) -> &ParamStore;

    /// 当前梯度
    fn grads(&self) -> &ParamStore;

    /// 同时取得可写的参数表与只读的梯度表（供优化器原地更新参数）
    fn params_and_grads(&mut self) -> (&mut ParamStore, &ParamStore);
}

impl<L: Layer + ?Sized> Layer for Box<L> {
    fn params(&self) -> &ParamStore {
        (**self).params()
    }

    fn grads(&self) -> &ParamStore {
        (**self).grads()
    }

    fn params_and_grads(&mut self) -> (&mut ParamStore, &ParamStore) {
        (**self).params_and_grads()
    }
}
