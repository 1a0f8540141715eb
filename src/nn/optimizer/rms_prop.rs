/*
 * @Author       : 老董
 * @Date         : 2026-10-18
 * @Description  : RMSProp优化器实现
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

/// [`RMSProp`] 的超参数
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RmsPropConfig {
    /// 学习率，默认`1e-2`
    pub lr: f32,
    /// 平方梯度滑动平均的衰减率，默认`0.99`
    pub decay: f32,
    /// 数值稳定项，默认`1e-8`。注意它加在开方**之内**
    pub eps: f32,
}

impl Default for RmsPropConfig {
    fn default() -> Self {
        Self {
            lr: 1e-2,
            decay: 0.99,
            eps: 1e-8,
        }
    }
}

impl RmsPropConfig {
    pub fn validate(&self) -> Result<(), OptimizerError> {
        check_hyperparameter("lr", self.lr, self.lr.is_finite(), "为有限值")?;
        check_hyperparameter(
            "decay",
            self.decay,
            (0.0..=1.0).contains(&self.decay),
            "位于[0, 1]",
        )?;
        check_hyperparameter(
            "eps",
            self.eps,
            self.eps.is_finite() && self.eps >= 0.0,
            "为非负有限值",
        )
    }
}

/// RMSProp优化器
///
/// - c = decay * c + (1 - decay) * g²
/// - θ = θ - α * g / √(c + ε)
pub struct RMSProp {
    model: ModelHandle,
    config: RmsPropConfig,
    /// 平方梯度的滑动平均（按参数名索引）
    cache: HashMap<String, Tensor>,
}

impl RMSProp {
    /// 使用给定学习率、其余超参数取默认值创建
    pub fn new<M: Model + 'static>(model: &Rc<RefCell<M>>, learning_rate: f32) -> Self {
        Self::with_config(
            model,
            RmsPropConfig {
                lr: learning_rate,
                ..Default::default()
            },
        )
    }

    pub fn with_config<M: Model + 'static>(
        model: &Rc<RefCell<M>>,
        config: RmsPropConfig,
    ) -> Self {
        Self::from_handle(model.clone(), config)
    }

    pub fn from_handle(model: ModelHandle, config: RmsPropConfig) -> Self {
        Self {
            model,
            config,
            cache: HashMap::new(),
        }
    }

    pub const fn config(&self) -> &RmsPropConfig {
        &self.config
    }

    /// 获取指定参数名的平方梯度滑动平均
    pub fn cache(&self, name: &str) -> Option<&Tensor> {
        self.cache.get(name)
    }
}

impl Optimizer for RMSProp {
    fn step(&mut self) -> Result<(), OptimizerError> {
        let RmsPropConfig { lr, decay, eps } = self.config;
        let cache = &mut self.cache;

        let updated = update_params(&self.model, |layer, name, param, grad| {
            let c = lazy_state(cache, layer, name, param)?;
            *c *= decay;
            *c += &(&(grad * grad) * (1.0 - decay));

            let update = &(grad * -lr) / &(&*c + eps).sqrt();
            *param += &update;
            Ok(())
        })?;
        debug!("{}：更新了{updated}个参数", self.name());
        Ok(())
    }

    fn learning_rate(&self) -> f32 {
        self.config.lr
    }

    fn name(&self) -> &'static str {
        "RMSProp"
    }
}
