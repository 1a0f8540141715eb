/*
 * @Author       : 老董
 * @Date         : 2025-07-24 16:30:00
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-18
 * @Description  : Adam优化器实现
 */

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use log::debug;
use serde::{Deserialize, Serialize};

use super::base::{Optimizer, lazy_state, update_params};
use super::config::check_hyperparameter;
use crate::errors::OptimizerError;
use crate::nn::{Model, ModelHandle};
use crate::tensor::Tensor;

/// [`Adam`] 的超参数
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AdamConfig {
    /// 学习率，默认`1e-3`
    pub lr: f32,
    /// 一阶矩衰减，默认`0.9`
    pub beta1: f32,
    /// 二阶矩衰减，默认`0.999`
    pub beta2: f32,
    /// 数值稳定项，默认`1e-8`
    pub eps: f32,
    /// 时间步的初值，默认`0`
    pub initial_step: usize,
}

impl Default for AdamConfig {
    fn default() -> Self {
        Self {
            lr: 1e-3,
            beta1: 0.9,
            beta2: 0.999,
            eps: 1e-8,
            initial_step: 0,
        }
    }
}

impl AdamConfig {
    pub fn validate(&self) -> Result<(), OptimizerError> {
        check_hyperparameter("lr", self.lr, self.lr.is_finite(), "为有限值")?;
        check_hyperparameter(
            "beta1",
            self.beta1,
            (0.0..1.0).contains(&self.beta1),
            "位于[0, 1)",
        )?;
        check_hyperparameter(
            "beta2",
            self.beta2,
            (0.0..1.0).contains(&self.beta2),
            "位于[0, 1)",
        )?;
        check_hyperparameter(
            "eps",
            self.eps,
            self.eps.is_finite() && self.eps >= 0.0,
            "为非负有限值",
        )
    }
}

/// Adam优化器
///
/// Adam: Adaptive Moment Estimation
/// - m = β1 * m + (1 - β1) * g
/// - v = β2 * v + (1 - β2) * g²
/// - t = t + 1
/// - α_t = α * √(1 - β2^t) / (1 - β1^t)
/// - θ = θ - α_t * m / (√v + ε)
///
/// 注意：时间步`t`由整个优化器共享，**每更新一个参数**就加1，
/// 而不是每次`step()`加1、也不是每个参数各自计数。
/// 因此一次`step()`之后`t`增加的量等于模型的参数个数。
///
/// # 使用示例
/// ```ignore
/// let mut optimizer = Adam::new(&model, 0.001);
/// optimizer.step()?;
/// ```
pub struct Adam {
    model: ModelHandle,
    config: AdamConfig,
    /// 一阶矩估计（按参数名索引）
    m: HashMap<String, Tensor>,
    /// 二阶矩估计（按参数名索引）
    v: HashMap<String, Tensor>,
    /// 时间步
    t: usize,
}

impl Adam {
    /// 使用给定学习率、其余超参数取默认值创建
    pub fn new<M: Model + 'static>(model: &Rc<RefCell<M>>, learning_rate: f32) -> Self {
        Self::with_config(
            model,
            AdamConfig {
                lr: learning_rate,
                ..Default::default()
            },
        )
    }

    /// 创建带完整配置的Adam优化器
    pub fn with_config<M: Model + 'static>(model: &Rc<RefCell<M>>, config: AdamConfig) -> Self {
        Self::from_handle(model.clone(), config)
    }

    pub fn from_handle(model: ModelHandle, config: AdamConfig) -> Self {
        Self {
            model,
            config,
            m: HashMap::new(),
            v: HashMap::new(),
            t: config.initial_step,
        }
    }

    pub const fn config(&self) -> &AdamConfig {
        &self.config
    }

    /// 获取指定参数名的一阶矩
    ///
    /// 用于调试和可视化优化过程
    pub fn first_moment(&self, name: &str) -> Option<&Tensor> {
        self.m.get(name)
    }

    /// 获取指定参数名的二阶矩
    pub fn second_moment(&self, name: &str) -> Option<&Tensor> {
        self.v.get(name)
    }

    /// 获取当前时间步
    pub const fn timestep(&self) -> usize {
        self.t
    }
}

impl Optimizer for Adam {
    fn step(&mut self) -> Result<(), OptimizerError> {
        let AdamConfig {
            lr,
            beta1,
            beta2,
            eps,
            ..
        } = self.config;
        let (m, v, t) = (&mut self.m, &mut self.v, &mut self.t);

        let updated = update_params(&self.model, |layer, name, param, grad| {
            // 更新一阶矩
            let mt = lazy_state(m, layer, name, param)?;
            *mt *= beta1;
            *mt += &(grad * (1.0 - beta1));

            // 更新二阶矩
            let vt = lazy_state(v, layer, name, param)?;
            *vt *= beta2;
            *vt += &(&(grad * grad) * (1.0 - beta2));

            // 偏差修正并入步长
            *t += 1;
            let power = i32::try_from(*t).unwrap_or(i32::MAX);
            let step_size = lr * (1.0 - beta2.powi(power)).sqrt() / (1.0 - beta1.powi(power));

            // 更新参数
            let update = &(&*mt * step_size) / &(vt.sqrt() + eps);
            *param -= &update;
            Ok(())
        })?;
        debug!(
            "{}：更新了{updated}个参数，当前时间步为{}",
            self.name(),
            self.t
        );
        Ok(())
    }

    fn learning_rate(&self) -> f32 {
        self.config.lr
    }

    fn name(&self) -> &'static str {
        "Adam"
    }
}
