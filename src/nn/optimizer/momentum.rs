/*
 * @Author       : 老董
 * @Date         : 2026-10-18
 * @Description  : 带动量的梯度下降优化器实现
 */

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use log::debug;
use serde::{Deserialize, Serialize};

use super::base::{Optimizer, lazy_state, update_params};
use super::config::check_hyperparameter;
use super::sgd::descend;
use crate::errors::OptimizerError;
use crate::nn::{Model, ModelHandle};
use crate::tensor::Tensor;

/// [`SGDMomentum`] 的超参数
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MomentumConfig {
    /// 学习率，默认`1e-4`
    pub lr: f32,
    /// 动量系数，默认`0.0`（此时退化为普通梯度下降）
    pub momentum: f32,
}

impl Default for MomentumConfig {
    fn default() -> Self {
        Self {
            lr: 1e-4,
            momentum: 0.0,
        }
    }
}

impl MomentumConfig {
    pub fn validate(&self) -> Result<(), OptimizerError> {
        check_hyperparameter("lr", self.lr, self.lr.is_finite(), "为有限值")?;
        check_hyperparameter(
            "momentum",
            self.momentum,
            (0.0..1.0).contains(&self.momentum),
            "位于[0, 1)",
        )
    }
}

/// 带动量的SGD优化器
///
/// - 动量系数 m > 0 时：v = m * v - α * ∇θ，θ = θ + v
/// - m == 0 时：与 [`SGD`](super::SGD) 完全相同，且不创建速度状态
pub struct SGDMomentum {
    model: ModelHandle,
    config: MomentumConfig,
    /// 速度（按参数名索引）
    velocity: HashMap<String, Tensor>,
}

impl SGDMomentum {
    pub fn new<M: Model + 'static>(
        model: &Rc<RefCell<M>>,
        learning_rate: f32,
        momentum: f32,
    ) -> Self {
        Self::with_config(
            model,
            MomentumConfig {
                lr: learning_rate,
                momentum,
            },
        )
    }

    pub fn with_config<M: Model + 'static>(
        model: &Rc<RefCell<M>>,
        config: MomentumConfig,
    ) -> Self {
        Self::from_handle(model.clone(), config)
    }

    pub fn from_handle(model: ModelHandle, config: MomentumConfig) -> Self {
        Self {
            model,
            config,
            velocity: HashMap::new(),
        }
    }

    pub const fn config(&self) -> &MomentumConfig {
        &self.config
    }

    /// 获取指定参数名的速度状态
    ///
    /// 用于调试和可视化优化过程
    pub fn velocity(&self, name: &str) -> Option<&Tensor> {
        self.velocity.get(name)
    }
}

impl Optimizer for SGDMomentum {
    fn step(&mut self) -> Result<(), OptimizerError> {
        let MomentumConfig { lr, momentum } = self.config;
        let velocity = &mut self.velocity;

        let updated = update_params(&self.model, |layer, name, param, grad| {
            if momentum > 0.0 {
                let v = lazy_state(velocity, layer, name, param)?;
                *v *= momentum;
                *v -= &(grad * lr);
                *param += &*v;
            } else {
                descend(param, grad, lr);
            }
            Ok(())
        })?;
        debug!("{}：更新了{updated}个参数", self.name());
        Ok(())
    }

    fn learning_rate(&self) -> f32 {
        self.config.lr
    }

    fn name(&self) -> &'static str {
        "SGDMomentum"
    }
}
