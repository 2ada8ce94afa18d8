//! `byte_order` 集成测试：以外部调用方视角验证字节序翻转与游标定位契约。
//!
//! # 测试目标（Why）
//! - 模型文件可能在相反字节序的平台上产出，`reverse_bytes` 必须把长度前缀与浮点一起翻转；
//! - 向量读取完成后游标必须恰好停在下一区块起点，上层才能顺序解析多个区块。

use bytes::{Buf, BufMut, BytesMut};
use spark_codec_vector::{VectorError, read_floats, read_strings, write_floats, write_strings};

/// 以“相反字节序”写出一个 `u32`，模拟异构平台产出的文件。
fn put_foreign_u32(dst: &mut BytesMut, value: u32) {
    dst.put_slice(&value.swap_bytes().to_ne_bytes());
}

#[test]
fn reversed_input_is_decoded_when_flag_is_set() {
    let mut foreign = BytesMut::new();
    put_foreign_u32(&mut foreign, 1);
    put_foreign_u32(&mut foreign, 4);
    foreign.put_slice(b"beam");
    put_foreign_u32(&mut foreign, 2);
    put_foreign_u32(&mut foreign, 0.25f32.to_bits());
    put_foreign_u32(&mut foreign, (-1.0f32).to_bits());

    let mut src = foreign.freeze();
    let names = read_strings(&mut src, true).expect("names decode with byte swap");
    let values = read_floats(&mut src, true).expect("values decode with byte swap");

    assert_eq!(names, ["beam"]);
    assert_eq!(values, [0.25, -1.0]);
    assert_eq!(src.remaining(), 0);
}

#[test]
fn reading_stops_exactly_after_one_vector() {
    let mut buf = BytesMut::new();
    write_strings(&mut buf, &["degree"]).expect("write names");
    write_floats(&mut buf, &[7.0]).expect("write values");
    buf.put_slice(b"next-block");

    let mut src = buf.freeze();
    read_strings(&mut src, false).expect("names");
    read_floats(&mut src, false).expect("values");
    assert_eq!(src.chunk(), b"next-block");
}

#[test]
fn truncated_string_body_is_reported() {
    let mut buf = BytesMut::new();
    buf.put_u32_ne(1);
    buf.put_u32_ne(10);
    buf.put_slice(b"short");

    let mut src = buf.freeze();
    let err = read_strings(&mut src, false).expect_err("body shorter than declared");
    assert_eq!(
        err,
        VectorError::Truncated {
            needed: 10,
            remaining: 5
        }
    );
}
