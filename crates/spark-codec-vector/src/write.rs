//! 向量写入端。

use bytes::BufMut;

use crate::error::VectorError;

/// 写出字符串向量：`u32` 元素个数，随后每个元素为 `u32` 字节长度 + UTF-8 字节。
///
/// # 契约说明（What）
/// - **输入**：任意可增长的 [`BufMut`]；固定容量的缓冲（如 `&mut [u8]`）容量不足时由 `bytes` 触发 panic，
///   调用方需自行保证容量；
/// - **后置条件**：成功时恰好写入一个完整向量；返回 `TooLong` 时可能已经写出部分字节。
pub fn write_strings<S>(dst: &mut impl BufMut, items: &[S]) -> Result<(), VectorError>
where
    S: AsRef<str>,
{
    put_len(dst, items.len())?;
    for item in items {
        let bytes = item.as_ref().as_bytes();
        put_len(dst, bytes.len())?;
        dst.put_slice(bytes);
    }
    Ok(())
}

/// 写出浮点向量：`u32` 元素个数，随后是各元素的 `f32` 位模式。
pub fn write_floats(dst: &mut impl BufMut, items: &[f32]) -> Result<(), VectorError> {
    put_len(dst, items.len())?;
    for value in items {
        dst.put_f32_ne(*value);
    }
    Ok(())
}

fn put_len(dst: &mut impl BufMut, len: usize) -> Result<(), VectorError> {
    let prefix = u32::try_from(len).map_err(|_| VectorError::TooLong { len })?;
    dst.put_u32_ne(prefix);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn empty_vectors_are_a_bare_zero_prefix() {
        let mut out = Vec::new();
        write_strings::<&str>(&mut out, &[]).expect("write empty strings");
        write_floats(&mut out, &[]).expect("write empty floats");
        assert_eq!(out, [0u32.to_ne_bytes(), 0u32.to_ne_bytes()].concat());
    }

    #[test]
    fn string_elements_carry_their_own_byte_length() {
        let mut out = Vec::new();
        write_strings(&mut out, &["ab", "ü"]).expect("write strings");

        let mut expected = Vec::new();
        expected.extend_from_slice(&2u32.to_ne_bytes());
        expected.extend_from_slice(&2u32.to_ne_bytes());
        expected.extend_from_slice(b"ab");
        // `ü` 在 UTF-8 中占两个字节。
        expected.extend_from_slice(&2u32.to_ne_bytes());
        expected.extend_from_slice("ü".as_bytes());
        assert_eq!(out, expected);
    }

    #[test]
    fn floats_are_written_as_native_bit_patterns() {
        let mut out = Vec::new();
        write_floats(&mut out, &[-1.0, 0.5]).expect("write floats");

        let mut expected = Vec::new();
        expected.extend_from_slice(&2u32.to_ne_bytes());
        expected.extend_from_slice(&(-1.0f32).to_ne_bytes());
        expected.extend_from_slice(&0.5f32.to_ne_bytes());
        assert_eq!(out, expected);
    }
}
