/*
 * @Author       : 老董
 * @Date         : 2025-07-24 16:00:00
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-18
 * @Description  : 梯度下降优化器实现
 */

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use serde::{Deserialize, Serialize};

use super::base::{Optimizer, update_params};
use super::config::check_hyperparameter;
use crate::errors::OptimizerError;
use crate::nn::{Model, ModelHandle};
use crate::tensor::Tensor;

/// [`SGD`] 的超参数
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SgdConfig {
    /// 学习率，默认`1e-4`
    pub lr: f32,
}

impl Default for SgdConfig {
    fn default() -> Self {
        Self { lr: 1e-4 }
    }
}

impl SgdConfig {
    pub fn validate(&self) -> Result<(), OptimizerError> {
        check_hyperparameter("lr", self.lr, self.lr.is_finite(), "为有限值")
    }
}

/// SGD (随机梯度下降) 优化器
///
/// θ = θ - α * ∇θ
///
/// # 使用示例
/// ```ignore
/// let mut optimizer = SGD::new(&model, 0.01);
/// // 外部反向传播填充梯度后：
/// optimizer.step()?;
/// ```
pub struct SGD {
    model: ModelHandle,
    config: SgdConfig,
}

impl SGD {
    /// 创建新的SGD优化器
    pub fn new<M: Model + 'static>(model: &Rc<RefCell<M>>, learning_rate: f32) -> Self {
        Self::with_config(model, SgdConfig { lr: learning_rate })
    }

    /// 使用默认学习率创建SGD优化器
    pub fn new_default<M: Model + 'static>(model: &Rc<RefCell<M>>) -> Self {
        Self::with_config(model, SgdConfig::default())
    }

    pub fn with_config<M: Model + 'static>(model: &Rc<RefCell<M>>, config: SgdConfig) -> Self {
        Self::from_handle(model.clone(), config)
    }

    /// 由已擦除类型的模型句柄创建
    pub fn from_handle(model: ModelHandle, config: SgdConfig) -> Self {
        Self { model, config }
    }

    pub const fn config(&self) -> &SgdConfig {
        &self.config
    }
}

impl Optimizer for SGD {
    fn step(&mut self) -> Result<(), OptimizerError> {
        let lr = self.config.lr;
        let updated = update_params(&self.model, |_, _, param, grad| {
            descend(param, grad, lr);
            Ok(())
        })?;
        debug!("{}：更新了{updated}个参数", self.name());
        Ok(())
    }

    fn learning_rate(&self) -> f32 {
        self.config.lr
    }

    fn name(&self) -> &'static str {
        "SGD"
    }
}

/// 梯度下降更新：θ = θ - α * ∇θ
pub(super) fn descend(param: &mut Tensor, grad: &Tensor, lr: f32) {
    *param -= &(grad * lr);
}
