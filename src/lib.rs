//! # Only Optim
//!
//! `only_optim`是[only_torch](https://github.com/dbsxdbsx/only_torch)这类玩具AI框架中负责参数更新的部分：
//! 给定一个由若干层组成、每层带有具名参数及同名梯度的模型，按选定的规则（SGD、Momentum、RMSProp、Adam）
//! 原地更新所有参数。前向/反向传播由外部完成，本库只负责`step()`。
//!
//! ```ignore
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use only_optim::nn::{Adam, Optimizer, ParamLayer, Sequential};
//! use only_optim::tensor::Tensor;
//!
//! let model = Rc::new(RefCell::new(
//!     Sequential::new().with_layer(ParamLayer::new().with_param("w", Tensor::zeros(&[2, 2]))),
//! ));
//! let mut optimizer = Adam::new(&model, 1e-3);
//! // ...外部反向传播写入梯度后
//! optimizer.step()?;
//! ```

pub mod errors;
pub mod nn;
pub mod tensor;
pub mod utils;
