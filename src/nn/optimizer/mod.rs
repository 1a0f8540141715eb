/*
 * @Author       : 老董
 * @Date         : 2025-07-24 16:00:00
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-18
 * @Description  : 优化器模块，实现 PyTorch 风格的梯度优化算法
 */

mod base;

mod adam;
mod any;
mod config;
mod momentum;
mod rms_prop;
mod sgd;

pub use adam::{Adam, AdamConfig};
pub use any::AnyOptimizer;
pub use base::Optimizer;
pub use config::OptimizerConfig;
pub use momentum::{MomentumConfig, SGDMomentum};
pub use rms_prop::{RMSProp, RmsPropConfig};
pub use sgd::{SGD, SgdConfig};
