//! # 常用接口模块
//!
//! 本模块提供一些单元测试常用的断言宏
