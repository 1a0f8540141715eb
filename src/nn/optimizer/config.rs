/*
 * @Author       : 老董
 * @Date         : 2026-10-18
 * @Description  : 优化器的超参数配置：可从JSON读取，校验后构建出对应的优化器
 */

use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use serde::{Deserialize, Serialize};

use super::{
    Adam, AdamConfig, AnyOptimizer, MomentumConfig, RMSProp, RmsPropConfig, SGD, SGDMomentum,
    SgdConfig,
};
use crate::errors::OptimizerError;
use crate::nn::Model;

/// 选择哪种优化器及其超参数
///
/// JSON 形如 `{"kind": "adam", "lr": 0.001, "beta1": 0.9}`，未给出的字段取默认值。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OptimizerConfig {
    Sgd(SgdConfig),
    Momentum(MomentumConfig),
    #[serde(rename = "rmsprop")]
    RmsProp(RmsPropConfig),
    Adam(AdamConfig),
}

impl OptimizerConfig {
    pub fn from_json(json: &str) -> Result<Self, OptimizerError> {
        serde_json::from_str(json).map_err(|e| OptimizerError::InvalidConfig(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, OptimizerError> {
        serde_json::to_string(self).map_err(|e| OptimizerError::InvalidConfig(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), OptimizerError> {
        match self {
            Self::Sgd(config) => config.validate(),
            Self::Momentum(config) => config.validate(),
            Self::RmsProp(config) => config.validate(),
            Self::Adam(config) => config.validate(),
        }
    }

    /// 校验超参数后为`model`构建优化器
    pub fn build<M: Model + 'static>(
        &self,
        model: &Rc<RefCell<M>>,
    ) -> Result<AnyOptimizer, OptimizerError> {
        self.validate()
            .inspect_err(|e| warn!("优化器配置{self:?}未通过校验：{e}"))?;

        Ok(match *self {
            Self::Sgd(config) => AnyOptimizer::from(SGD::with_config(model, config)),
            Self::Momentum(config) => AnyOptimizer::from(SGDMomentum::with_config(model, config)),
            Self::RmsProp(config) => AnyOptimizer::from(RMSProp::with_config(model, config)),
            Self::Adam(config) => AnyOptimizer::from(Adam::with_config(model, config)),
        })
    }
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self::Sgd(SgdConfig::default())
    }
}

/// 超参数校验：`valid`为假时返回`InvalidHyperparameter`
pub(super) fn check_hyperparameter(
    name: &'static str,
    value: f32,
    valid: bool,
    requirement: &'static str,
) -> Result<(), OptimizerError> {
    if valid {
        Ok(())
    } else {
        Err(OptimizerError::InvalidHyperparameter {
            name,
            value,
            requirement,
        })
    }
}
