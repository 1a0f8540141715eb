/*
 * @Author       : 老董
 * @Date         : 2026-10-18
 * @Description  : 运行时选择优化器（无需装箱）
 */

use enum_dispatch::enum_dispatch;

use super::{Adam, Optimizer, RMSProp, SGD, SGDMomentum};
use crate::errors::OptimizerError;

/// 任一优化器。由 [`OptimizerConfig::build`](super::OptimizerConfig::build) 构建，
/// 也可由各优化器经`From`/`into()`转换得到。
#[enum_dispatch(Optimizer)]
pub enum AnyOptimizer {
    SGD,
    SGDMomentum,
    RMSProp,
    Adam,
}
