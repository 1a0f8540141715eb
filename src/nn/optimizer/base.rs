/*
 * @Author       : 老董
 * @Date         : 2025-07-24 16:00:00
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-18
 * @Description  : 优化器基础trait和各优化器共用的参数遍历逻辑
 */

use std::collections::HashMap;

use enum_dispatch::enum_dispatch;
use log::trace;

use crate::errors::OptimizerError;
use crate::nn::ModelHandle;
use crate::tensor::Tensor;

/// 优化器核心 trait
///
/// 训练循环：
/// ```ignore
/// model.borrow_mut().forward_backward(&batch); // 外部填充各层的梯度
/// optimizer.step()?;                           // ← 只更新参数，不做 forward/backward
/// ```
///
/// `step()` 没有默认实现，每种优化器都必须给出自己的更新规则。
#[enum_dispatch]
pub trait Optimizer {
    /// 用各层当前的梯度原地更新模型的所有参数。
    ///
    /// 某个参数缺少梯度或梯度形状不符时立即返回错误；
    /// 此前已更新的参数不会回滚。
    fn step(&mut self) -> Result<(), OptimizerError>;

    /// 获取学习率
    fn learning_rate(&self) -> f32;

    /// 优化器名称（用于日志）
    fn name(&self) -> &'static str;
}

/// 按“层顺序 -> 层内参数插入顺序”遍历模型，对每个参数调用`update(层序号, 参数名, 参数, 梯度)`。
///
/// 梯度缺失或形状不符时立即返回，不会跳过该参数。返回本次更新的参数个数。
pub(super) fn update_params(
    model: &ModelHandle,
    mut update: impl FnMut(usize, &str, &mut Tensor, &Tensor) -> Result<(), OptimizerError>,
) -> Result<usize, OptimizerError> {
    let mut model = model
        .try_borrow_mut()
        .map_err(|_| OptimizerError::ModelBorrowed)?;

    let mut updated = 0;
    for (layer_index, layer) in model.layers_mut().into_iter().enumerate() {
        let (params, grads) = layer.params_and_grads();
        for (name, param) in params.iter_mut() {
            let grad = grads
                .get(name)
                .ok_or_else(|| OptimizerError::MissingGradient {
                    layer: layer_index,
                    name: name.to_string(),
                })?;
            if !param.is_same_shape(grad) {
                return Err(OptimizerError::ShapeMismatch {
                    layer: layer_index,
                    name: name.to_string(),
                    param_shape: param.shape().to_vec(),
                    grad_shape: grad.shape().to_vec(),
                });
            }

            trace!("更新第{layer_index}层参数`{name}`，形状为{:?}", param.shape());
            update(layer_index, name, param, grad)?;
            updated += 1;
        }
    }
    Ok(updated)
}

/// 取出参数名对应的累积状态，首次遇到时以与参数同形的零张量初始化。
///
/// 状态只按参数名索引，不同层的同名参数共用同一份状态；
/// 若二者形状不同则无法共用，返回`StateShapeMismatch`。
pub(super) fn lazy_state<'m>(
    states: &'m mut HashMap<String, Tensor>,
    layer: usize,
    name: &str,
    param: &Tensor,
) -> Result<&'m mut Tensor, OptimizerError> {
    let state = states
        .entry(name.to_string())
        .or_insert_with(|| param.zeros_like());
    if !state.is_same_shape(param) {
        return Err(OptimizerError::StateShapeMismatch {
            layer,
            name: name.to_string(),
            param_shape: param.shape().to_vec(),
            state_shape: state.shape().to_vec(),
        });
    }
    Ok(state)
}
