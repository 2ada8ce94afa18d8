//! # error 模块说明
//!
//! ## 角色定位（Why）
//! - 集中定义选项记录在文本解析与二进制加载中的失败语义；
//! - 文本错误携带 1 起始的行号，调用方无需再维护行计数器即可向用户报告“文件第几行出错”。
//!
//! ## 设计要求（What）
//! - 所有错误均不可恢复：解析在首个错误处中止，部分更新的记录不会返回给调用方；
//! - 二进制加载中遇到未知字段名**不是**错误，而是通过 [`DiagnosticSink`](crate::DiagnosticSink) 报告。

use std::io;

use spark_codec_vector::VectorError;
use thiserror::Error;

use crate::field::OptionField;

/// 选项记录的错误域。
///
/// # 教案式说明
/// - **契约 (What)**：
///   - `Syntax` / `NumericalRange` / `Io` 来自文本解析，均可通过 [`OptionsError::line`] 取得行号；
///   - `ReadFailed` / `BadBinary` / `InvalidTag` 来自二进制加载；
/// - **执行 (How)**：派生 [`thiserror::Error`]，`ReadFailed` 与 `Io` 通过 `source()` 暴露底层错误链。
#[derive(Debug, Error)]
pub enum OptionsError {
    /// 行内找不到任何已知的 `key=` 片段，或枚举值不匹配任何字面量。
    #[error("line {line}: `{text}` is not a valid option line")]
    Syntax {
        /// 出错行号（从 1 开始，空行与注释行同样计数）。
        line: usize,
        /// 去除空白后的行内容。
        text: String,
    },

    /// 要求非负的字段被赋予了负数。
    #[error("line {line}: `{field}` does not accept the negative value `{value}`")]
    NumericalRange {
        /// 出错行号。
        line: usize,
        /// 被赋值的字段。
        field: OptionField,
        /// 原始值文本。
        value: String,
    },

    /// 读取文本输入时底层 I/O 失败（包括非 UTF-8 内容）。
    #[error("line {line}: failed to read options text")]
    Io {
        /// 读取失败的行号。
        line: usize,
        /// 底层 I/O 错误。
        #[source]
        source: io::Error,
    },

    /// 二进制输入无法提供完整的字段名与字段值两个向量。
    #[error("failed to read the options block from binary input")]
    ReadFailed {
        /// 向量编解码层报告的原因。
        #[source]
        source: VectorError,
    },

    /// 字段名向量与字段值向量长度不一致。
    #[error("malformed options block: {names} field names but {values} values")]
    BadBinary {
        /// 字段名个数。
        names: usize,
        /// 字段值个数。
        values: usize,
    },

    /// 枚举字段的数值标签不在其闭集内。
    #[error("binary field `{field}` carries tag {value}, which is outside its closed set")]
    InvalidTag {
        /// 出错的枚举字段。
        field: OptionField,
        /// 原始数值。
        value: f32,
    },
}

impl OptionsError {
    /// 文本解析错误对应的行号；二进制错误返回 `None`。
    pub fn line(&self) -> Option<usize> {
        match self {
            OptionsError::Syntax { line, .. }
            | OptionsError::NumericalRange { line, .. }
            | OptionsError::Io { line, .. } => Some(*line),
            OptionsError::ReadFailed { .. }
            | OptionsError::BadBinary { .. }
            | OptionsError::InvalidTag { .. } => None,
        }
    }
}
