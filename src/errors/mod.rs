use thiserror::Error;
mod ops;
pub use self::ops::*;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TensorError {
    // 张量二元运算
    #[error(
        "形状不一致，故无法{operator}：第一个张量的形状为{tensor1_shape:?}，第二个张量的形状为{tensor2_shape:?}"
    )]
    OperatorError {
        operator: Operator,
        tensor1_shape: Vec<usize>,
        tensor2_shape: Vec<usize>,
    },
    // 构造张量
    #[error("数据长度为{data_len}，与形状{shape:?}不兼容")]
    IncompatibleShape { data_len: usize, shape: Vec<usize> },
}

/// 优化器在构造（校验）或`step`时可能返回的错误
#[derive(Error, Debug, PartialEq)]
pub enum OptimizerError {
    #[error("第{layer}层的参数`{name}`没有对应的梯度（是否忘了先执行反向传播？）")]
    MissingGradient { layer: usize, name: String },

    #[error(
        "第{layer}层的参数`{name}`形状为{param_shape:?}，但其梯度形状为{grad_shape:?}，无法逐元素更新"
    )]
    ShapeMismatch {
        layer: usize,
        name: String,
        param_shape: Vec<usize>,
        grad_shape: Vec<usize>,
    },

    #[error(
        "参数名`{name}`的累积状态形状为{state_shape:?}，与第{layer}层同名参数的形状{param_shape:?}不一致（不同层的同名参数共用状态）"
    )]
    StateShapeMismatch {
        layer: usize,
        name: String,
        param_shape: Vec<usize>,
        state_shape: Vec<usize>,
    },

    #[error("超参数`{name}`的值{value}不合法：须{requirement}")]
    InvalidHyperparameter {
        name: &'static str,
        value: f32,
        requirement: &'static str,
    },

    #[error("模型正被其他地方借用，无法更新参数")]
    ModelBorrowed,

    #[error("优化器配置解析失败：{0}")]
    InvalidConfig(String),
}
