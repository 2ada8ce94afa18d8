//! 向量读取端。
//!
//! # 实现策略（How）
//! - 每读取一个标量前先检查剩余字节，避免 `bytes::Buf` 的 `get_*` 在越界时 panic；
//! - `reverse_bytes` 只影响多字节标量（长度前缀与 `f32`），字符串内容按字节原样读取。

use alloc::{string::String, vec, vec::Vec};

use bytes::Buf;

use crate::{SCALAR_BYTES, error::VectorError};

/// 读取字符串向量。
///
/// # 契约说明（What）
/// - **输入**：`src` 游标位于向量起始处；`reverse_bytes` 指示文件是否由相反字节序的平台写出；
/// - **返回值**：按写入顺序排列的字符串；
/// - **错误**：字节不足返回 [`VectorError::Truncated`]，元素不是 UTF-8 返回 [`VectorError::InvalidUtf8`]。
pub fn read_strings(src: &mut impl Buf, reverse_bytes: bool) -> Result<Vec<String>, VectorError> {
    let count = take_u32(src, reverse_bytes)? as usize;
    // 每个元素至少包含一个长度前缀，以此约束预分配规模。
    let mut items = Vec::with_capacity(count.min(src.remaining() / SCALAR_BYTES));
    for index in 0..count {
        let len = take_u32(src, reverse_bytes)? as usize;
        ensure(src, len)?;
        let mut raw = vec![0u8; len];
        src.copy_to_slice(&mut raw);
        let text = String::from_utf8(raw).map_err(|_| VectorError::InvalidUtf8 { index })?;
        items.push(text);
    }
    Ok(items)
}

/// 读取 `f32` 向量。
///
/// 在解码任何元素之前先校验整段数据是否齐全，截断的向量不会消费元素字节。
pub fn read_floats(src: &mut impl Buf, reverse_bytes: bool) -> Result<Vec<f32>, VectorError> {
    let count = take_u32(src, reverse_bytes)? as usize;
    ensure(src, count.saturating_mul(SCALAR_BYTES))?;
    let mut items = Vec::with_capacity(count);
    for _ in 0..count {
        items.push(f32::from_bits(take_u32(src, reverse_bytes)?));
    }
    Ok(items)
}

fn take_u32(src: &mut impl Buf, reverse_bytes: bool) -> Result<u32, VectorError> {
    ensure(src, SCALAR_BYTES)?;
    let raw = src.get_u32_ne();
    Ok(if reverse_bytes { raw.swap_bytes() } else { raw })
}

fn ensure(src: &mut impl Buf, needed: usize) -> Result<(), VectorError> {
    let remaining = src.remaining();
    if remaining < needed {
        return Err(VectorError::Truncated { needed, remaining });
    }
    Ok(())
}
