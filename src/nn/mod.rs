/*
 * @Author       : 老董
 * @Date         : 2024-01-31 20:23:53
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-18
 * @Description  : 神经网络（neural network）中与参数更新相关的部分：层/模型约定与优化器
 */

pub mod layer;
mod module;
pub mod optimizer;

pub use layer::{Layer, ParamLayer, ParamStore, Sequential};
pub use module::{Model, ModelHandle};
pub use optimizer::{
    Adam, AdamConfig, AnyOptimizer, MomentumConfig, Optimizer, OptimizerConfig, RMSProp,
    RmsPropConfig, SGD, SGDMomentum, SgdConfig,
};
