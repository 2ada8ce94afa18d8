//! 向量编解码错误类型。
//!
//! # 使用契约（What）
//! - 读取端只会产生 `Truncated` 与 `InvalidUtf8`，写入端只会产生 `TooLong`；
//! - 所有变体均实现 `Clone`/`PartialEq`，测试可直接断言具体分支。

use thiserror::Error;

/// 长度前缀向量在读写过程中可能出现的错误。
///
/// ## 契约定义（What）
/// - 任何错误都表示当前向量不可用，调用方不得继续使用部分结果；
/// - 读取失败后缓冲游标位置未定义，调用方若需要诊断应自行保留原始字节。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VectorError {
    /// 剩余字节不足以读出下一个长度前缀或元素。
    #[error("vector payload truncated: {needed} bytes required but only {remaining} remain")]
    Truncated {
        /// 读取下一个单元所需的字节数。
        needed: usize,
        /// 缓冲中实际剩余的字节数。
        remaining: usize,
    },
    /// 字符串元素不是合法的 UTF-8。
    #[error("string element {index} is not valid UTF-8")]
    InvalidUtf8 {
        /// 出错元素在向量中的下标（从 0 开始）。
        index: usize,
    },
    /// 元素个数或字符串字节数超出 32 位长度前缀的表示范围。
    #[error("length {len} does not fit into a 32-bit length prefix")]
    TooLong {
        /// 试图写出的长度。
        len: usize,
    },
}
