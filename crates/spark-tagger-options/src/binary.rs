//! 选项记录的二进制形式：一个字段名向量紧跟一个等长的 `f32` 值向量。
//!
//! # 合约说明（What）
//! - 写出顺序固定为 [`OptionField::ALL`]，每个字段都会写出，未配置的哨兵字段写为 `-1`；
//! - 枚举写为其数值标签，布尔写为 `0`/`1`，整数经 `f32` 表示；
//! - 读取时字段按名称匹配，记录中缺失的字段保持默认值，未知字段交由 [`DiagnosticSink`] 报告后跳过。
//!
//! # 风险提示（Trade-offs）
//! - `f32` 只能精确表示 `2^24` 以内的整数，超出范围的计数在往返后会被舍入；
//! - 数值到整数的收窄使用饱和转换，`NaN` 收窄为 `0`。

use std::io::{self, Write};

use bytes::{Buf, BufMut, Bytes, BytesMut};
use spark_codec_vector::{VectorError, read_floats, read_strings, write_floats, write_strings};
use tracing::debug;

use crate::{
    error::OptionsError,
    field::OptionField,
    kind::{Estimator, Inference, Regularization},
    options::{TaggerOptions, float_from_wire, int_from_wire, wire_float, wire_int},
    sink::DiagnosticSink,
};

impl TaggerOptions {
    /// 按写出顺序列出每个字段的线上数值。
    fn wire_fields(&self) -> [(OptionField, f32); 14] {
        OptionField::ALL.map(|field| {
            let value = match field {
                OptionField::Estimator => self.estimator.tag() as f32,
                OptionField::Inference => self.inference.tag() as f32,
                OptionField::SuffixLength => self.suffix_length as f32,
                OptionField::Degree => self.degree as f32,
                OptionField::MaxTrainPasses => self.max_train_passes as f32,
                OptionField::MaxLemmatizerPasses => self.max_lemmatizer_passes as f32,
                OptionField::MaxUselessPasses => self.max_useless_passes as f32,
                OptionField::GuessMass => self.guess_mass,
                OptionField::Beam => wire_int(self.beam) as f32,
                OptionField::BeamMass => wire_float(self.beam_mass),
                OptionField::Regularization => self.regularization.tag() as f32,
                OptionField::Delta => wire_float(self.delta),
                OptionField::Sigma => wire_float(self.sigma),
                OptionField::UseLabelDictionary => f32::from(u8::from(self.use_label_dictionary)),
            };
            (field, value)
        })
    }

    /// 把记录追加写入缓冲区。
    pub fn write_binary(&self, dst: &mut impl BufMut) -> Result<(), VectorError> {
        let fields = self.wire_fields();
        let names = fields.map(|(field, _)| field.name());
        let values = fields.map(|(_, value)| value);
        write_strings(dst, &names)?;
        write_floats(dst, &values)
    }

    /// 编码为独立的字节块。
    pub fn encode_binary(&self) -> Result<Bytes, VectorError> {
        let mut dst = BytesMut::new();
        self.write_binary(&mut dst)?;
        Ok(dst.freeze())
    }

    /// 把记录写入任意 [`Write`] 目标。
    ///
    /// 编码错误以 [`io::ErrorKind::Other`] 的形式返回，底层写入错误原样透传。
    pub fn store<W: Write>(&self, mut writer: W) -> io::Result<()> {
        let encoded = self.encode_binary().map_err(io::Error::other)?;
        writer.write_all(&encoded)
    }

    /// 从缓冲区读取一条记录，游标停在该记录之后。
    ///
    /// # 契约说明（What）
    /// - **输入**：`src` 位于字段名向量起始处；`reverse_bytes` 为真时按相反字节序解读标量；
    ///   `sink` 接收未知字段的报告；
    /// - **返回值**：从默认值出发、按名称覆盖后的记录；
    /// - **错误**：
    ///   - 任一向量读取失败返回 [`OptionsError::ReadFailed`]；
    ///   - 两个向量长度不一致返回 [`OptionsError::BadBinary`]；
    ///   - 枚举字段的标签越界返回 [`OptionsError::InvalidTag`]。
    pub fn read_binary(
        src: &mut impl Buf,
        reverse_bytes: bool,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<Self, OptionsError> {
        let names = read_strings(src, reverse_bytes)
            .map_err(|source| OptionsError::ReadFailed { source })?;
        let values = read_floats(src, reverse_bytes)
            .map_err(|source| OptionsError::ReadFailed { source })?;
        if names.len() != values.len() {
            return Err(OptionsError::BadBinary {
                names: names.len(),
                values: values.len(),
            });
        }

        let mut options = TaggerOptions::default();
        let mut unknown = 0usize;
        for (name, &value) in names.iter().zip(&values) {
            match OptionField::from_name(name) {
                Some(field) => options.assign_wire(field, value)?,
                None => {
                    unknown += 1;
                    sink.unknown_field(name);
                }
            }
        }

        debug!(fields = names.len(), unknown, reverse_bytes, "decoded tagger options block");
        Ok(options)
    }

    fn assign_wire(&mut self, field: OptionField, value: f32) -> Result<(), OptionsError> {
        match field {
            OptionField::Estimator => {
                self.estimator = enum_from_wire(field, value, Estimator::from_tag)?;
            }
            OptionField::Inference => {
                self.inference = enum_from_wire(field, value, Inference::from_tag)?;
            }
            OptionField::Regularization => {
                self.regularization = enum_from_wire(field, value, Regularization::from_tag)?;
            }
            OptionField::SuffixLength => self.suffix_length = value as u32,
            OptionField::Degree => self.degree = value as u32,
            OptionField::MaxTrainPasses => self.max_train_passes = value as u32,
            OptionField::MaxLemmatizerPasses => self.max_lemmatizer_passes = value as u32,
            OptionField::MaxUselessPasses => self.max_useless_passes = value as u32,
            OptionField::GuessMass => self.guess_mass = value,
            OptionField::Beam => self.beam = int_from_wire(value as i32),
            OptionField::BeamMass => self.beam_mass = float_from_wire(value),
            OptionField::Delta => self.delta = float_from_wire(value),
            OptionField::Sigma => self.sigma = float_from_wire(value),
            OptionField::UseLabelDictionary => self.use_label_dictionary = value != 0.0,
        }
        Ok(())
    }
}

fn enum_from_wire<T>(
    field: OptionField,
    value: f32,
    from_tag: fn(u32) -> Option<T>,
) -> Result<T, OptionsError> {
    let tag = value as i64;
    if tag as f32 != value {
        return Err(OptionsError::InvalidTag { field, value });
    }
    u32::try_from(tag)
        .ok()
        .and_then(from_tag)
        .ok_or(OptionsError::InvalidTag { field, value })
}
