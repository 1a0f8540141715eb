/*
 * @Author       : 老董
 * @Date         : 2026-01-09
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-18
 * @Description  : Model trait 定义
 */

use std::cell::RefCell;
use std::rc::Rc;

use super::Layer;

/// 优化器持有的模型句柄。
///
/// 优化器与训练循环各持有一份 `Rc`：训练循环借用它做前向/反向传播，
/// 优化器在 `step()` 中借用它更新参数，二者不会同时借用。
pub type ModelHandle = Rc<RefCell<dyn Model>>;

/// 模型 trait
///
/// # 设计原则
/// - 模型只需按顺序给出它的各层，层的内部结构对优化器不可见
/// - `forward()` **不是** trait 方法（签名各异）
///
/// # 使用示例
///
/// ```ignore
/// use only_optim::nn::{Model, ParamLayer, Sequential};
///
/// let model = Rc::new(RefCell::new(
///     Sequential::new()
///         .with_layer(ParamLayer::new().with_param("w", w))
///         .with_layer(ParamLayer::new().with_param("w", w2)),
/// ));
/// let mut optimizer = Adam::new(&model, 1e-3);
/// ```
pub trait Model {
    /// 按顺序返回所有层
    fn layers(&self) -> Vec<&dyn Layer>;

    /// 按顺序返回所有层（可写）
    fn layers_mut(&mut self) -> Vec<&mut dyn Layer>;

    /// 获取参数数量（各层参数表条目数之和）
    fn num_params(&self) -> usize {
        self.layers().iter().map(|layer| layer.params().len()).sum()
    }
}
