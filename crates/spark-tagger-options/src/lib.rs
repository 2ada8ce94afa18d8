#![warn(missing_docs)]

//! # spark-tagger-options
//!
//! ## 定位（Why）
//! - 序列标注器（词性/形态标注与词形还原）的训练与解码共享一组超参数，本 crate 负责这组参数的
//!   唯一表示：人工编辑的 `key=value` 文本文件，以及嵌入模型文件的二进制区块；
//! - 两种格式都从同一份默认值出发，字段表 [`OptionField::ALL`] 同时决定文本分派优先级与二进制写出顺序。
//!
//! ## 使用方式（How）
//! - 文本：[`TaggerOptions::from_text`]、[`TaggerOptions::from_reader`] 或 `str::parse`；
//!   [`TaggerOptions::to_text`] 渲染出可再次解析的规范文本；
//! - 二进制：[`TaggerOptions::write_binary`] / [`TaggerOptions::encode_binary`] /
//!   [`TaggerOptions::store`] 写出，[`TaggerOptions::read_binary`] 读取，未知字段经 [`DiagnosticSink`] 报告；
//! - 程序化构造：[`TaggerOptions::builder`]。
//!
//! ## 注意事项（Trade-offs）
//! - 数值解析沿用宽松语义：读取最长合法前缀，非数值文本得到 `0`，不会报错；
//! - 记录相等对四个浮点字段使用 [`FLOAT_TOLERANCE`] 容差，不满足传递性。

mod binary;
mod coerce;
mod error;
mod field;
mod kind;
mod options;
mod sink;
mod text;

pub use crate::{
    error::OptionsError,
    field::OptionField,
    kind::{Estimator, Inference, Regularization},
    options::{FLOAT_TOLERANCE, TaggerOptions, TaggerOptionsBuilder, UNSET},
    sink::{DiagnosticSink, TracingSink, WriterSink},
};
pub use spark_codec_vector::VectorError;
