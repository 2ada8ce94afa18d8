#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

//! # spark-codec-vector
//!
//! ## 定位（Why）
//! - 模型文件中的多个区块（标注器选项、特征表等）都以“长度前缀向量”存储，
//!   本 crate 把这一底层帧格式独立出来，供上层记录类型复用；
//! - 上层只关心“写入一组字符串 / 一组浮点数”，帧布局与字节序细节集中在此处维护。
//!
//! ## 帧布局（What）
//! - 每个向量以 `u32` 元素个数开头，随后依次写入元素；
//! - 字符串元素为 `u32` 字节长度 + UTF-8 字节；浮点元素为 IEEE-754 `f32` 位模式；
//! - 所有标量均按**本机字节序**写出；读取时若 `reverse_bytes = true`，
//!   会对每个多字节标量做字节翻转，用于加载异构平台产出的文件。
//!
//! ## 使用方式（How）
//! - 写入端接受任意 [`bytes::BufMut`]（`BytesMut`、`Vec<u8>` 等）；
//! - 读取端接受任意 [`bytes::Buf`]，成功时恰好消费一个向量的字节，缓冲游标停在其后，
//!   调用方可以继续解析紧随其后的区块。
//!
//! ## 注意事项（Trade-offs）
//! - 长度前缀固定 32 位，单个向量超过 `u32::MAX` 个元素或单个字符串超过 `u32::MAX`
//!   字节时写入会返回 [`VectorError::TooLong`]；
//! - 读取端不会信任长度前缀做整块预分配，预留容量以剩余字节数为上限。

extern crate alloc;

mod error;
mod read;
mod write;

pub use crate::{
    error::VectorError,
    read::{read_floats, read_strings},
    write::{write_floats, write_strings},
};

/// 长度前缀与单个 `f32` 元素各自占用的字节数。
pub const SCALAR_BYTES: usize = 4;
