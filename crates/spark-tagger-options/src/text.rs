//! `key=value` 文本配置的解析与渲染。
//!
//! # 合约说明（What）
//! - 每行先删除全部空格、制表符与回车，再计数；空行与 `#` 开头的注释行同样计入行号；
//! - 非空非注释行按 [`OptionField::ALL`] 的优先级做子串查找，命中的字段交给对应的强制转换；
//! - 首个错误即中止解析，错误中携带出错行号；部分更新的记录随之丢弃。
//!
//! # 风险提示（Trade-offs）
//! - 浮点字段拒绝负数，`beam_mass`/`delta`/`sigma` 因此只能通过省略该行保持“未配置”，
//!   显式写 `delta=-1` 会得到 `NumericalRange` 错误；`beam` 使用不做范围检查的整数转换，`beam=-1` 合法；
//! - 同理，经二进制加载得到的负数 `beam_mass`/`delta`/`sigma` 无法写成文本，渲染时按“未配置”省略；
//! - 读取器按字节切分行，非 UTF-8 字节以替换字符保留，Latin-1 注释不会中断解析。

use std::fmt;
use std::io::BufRead;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::{
    coerce,
    error::OptionsError,
    field::OptionField,
    kind::{Estimator, Inference, Regularization},
    options::{TaggerOptions, int_from_wire},
};

/// 逐行驱动的文本加载器，持有正在构建的记录与行计数。
struct TextLoader {
    options: TaggerOptions,
    line: usize,
}

impl TextLoader {
    fn new() -> Self {
        Self {
            options: TaggerOptions::default(),
            line: 0,
        }
    }

    fn feed(&mut self, raw: &str) -> Result<(), OptionsError> {
        let line = coerce::despace(raw);
        self.line += 1;

        if line.is_empty() || line.starts_with('#') {
            return Ok(());
        }

        let Some((field, value)) = OptionField::locate(&line) else {
            return Err(OptionsError::Syntax {
                line: self.line,
                text: line,
            });
        };
        trace!(line = self.line, field = field.name(), value, "applying option line");
        self.apply(field, value, &line)
    }

    fn apply(&mut self, field: OptionField, value: &str, line: &str) -> Result<(), OptionsError> {
        match field {
            OptionField::Estimator => {
                self.options.estimator = self.literal(Estimator::decode, value, line)?;
            }
            OptionField::Inference => {
                self.options.inference = self.literal(Inference::decode, value, line)?;
            }
            OptionField::Regularization => {
                self.options.regularization = self.literal(Regularization::decode, value, line)?;
            }
            OptionField::SuffixLength => self.options.suffix_length = self.uint(field, value)?,
            OptionField::Degree => self.options.degree = self.uint(field, value)?,
            OptionField::MaxTrainPasses => self.options.max_train_passes = self.uint(field, value)?,
            OptionField::MaxLemmatizerPasses => {
                self.options.max_lemmatizer_passes = self.uint(field, value)?;
            }
            OptionField::MaxUselessPasses => {
                self.options.max_useless_passes = self.uint(field, value)?;
            }
            OptionField::UseLabelDictionary => {
                self.options.use_label_dictionary = self.uint(field, value)? != 0;
            }
            OptionField::GuessMass => self.options.guess_mass = self.float(field, value)?,
            OptionField::BeamMass => self.options.beam_mass = Some(self.float(field, value)?),
            OptionField::Delta => self.options.delta = Some(self.float(field, value)?),
            OptionField::Sigma => self.options.sigma = Some(self.float(field, value)?),
            OptionField::Beam => self.options.beam = int_from_wire(coerce::int(value)),
        }
        Ok(())
    }

    fn literal<T>(
        &self,
        decode: fn(&str) -> Option<T>,
        value: &str,
        line: &str,
    ) -> Result<T, OptionsError> {
        decode(value).ok_or_else(|| OptionsError::Syntax {
            line: self.line,
            text: line.to_owned(),
        })
    }

    fn uint(&self, field: OptionField, value: &str) -> Result<u32, OptionsError> {
        coerce::uint(value).ok_or_else(|| self.range_error(field, value))
    }

    fn float(&self, field: OptionField, value: &str) -> Result<f32, OptionsError> {
        coerce::non_negative_float(value).ok_or_else(|| self.range_error(field, value))
    }

    fn range_error(&self, field: OptionField, value: &str) -> OptionsError {
        OptionsError::NumericalRange {
            line: self.line,
            field,
            value: value.to_owned(),
        }
    }

    fn finish(self) -> TaggerOptions {
        debug!(lines = self.line, "parsed tagger options from text");
        self.options
    }
}

impl TaggerOptions {
    /// 解析完整的配置文本。
    ///
    /// # 契约说明（What）
    /// - **输入**：任意换行风格（`\n` 或 `\r\n`）的文本；空文本得到默认记录；
    /// - **返回值**：从默认值出发、逐行覆盖后的记录；
    /// - **错误**：未知键与非法枚举值返回 [`OptionsError::Syntax`]，负数返回
    ///   [`OptionsError::NumericalRange`]，二者都携带 1 起始的行号。
    pub fn from_text(text: &str) -> Result<Self, OptionsError> {
        let mut loader = TextLoader::new();
        for raw in text.lines() {
            loader.feed(raw)?;
        }
        Ok(loader.finish())
    }

    /// 从带缓冲的读取器逐行解析配置。
    ///
    /// 行按 `\n` 字节切分；非 UTF-8 字节替换为 `U+FFFD` 后照常解析，因此注释中的 Latin-1 文本不会报错。
    /// 底层读取失败时返回 [`OptionsError::Io`]，行号指向未能读出的那一行。
    pub fn from_reader<R: BufRead>(mut reader: R) -> Result<Self, OptionsError> {
        let mut loader = TextLoader::new();
        let mut raw = Vec::new();
        loop {
            raw.clear();
            let read = reader
                .read_until(b'\n', &mut raw)
                .map_err(|source| OptionsError::Io {
                    line: loader.line + 1,
                    source,
                })?;
            if read == 0 {
                break;
            }
            if raw.last() == Some(&b'\n') {
                raw.pop();
            }
            loader.feed(&String::from_utf8_lossy(&raw))?;
        }
        Ok(loader.finish())
    }

    /// 渲染为规范的配置文本，再次解析可得到相等的记录。
    ///
    /// 字段按 [`OptionField::ALL`] 的顺序各占一行；未配置的哨兵字段整行省略。
    /// 文本格式无法表达负数的 `beam_mass`/`delta`/`sigma`，这类取值同样省略，重新解析后为未配置。
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl FromStr for TaggerOptions {
    type Err = OptionsError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::from_text(text)
    }
}

impl fmt::Display for TaggerOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for field in OptionField::ALL {
            let id = field.id();
            match field {
                OptionField::Estimator => writeln!(f, "{id}{}", self.estimator)?,
                OptionField::Inference => writeln!(f, "{id}{}", self.inference)?,
                OptionField::SuffixLength => writeln!(f, "{id}{}", self.suffix_length)?,
                OptionField::Degree => writeln!(f, "{id}{}", self.degree)?,
                OptionField::MaxTrainPasses => writeln!(f, "{id}{}", self.max_train_passes)?,
                OptionField::MaxLemmatizerPasses => {
                    writeln!(f, "{id}{}", self.max_lemmatizer_passes)?;
                }
                OptionField::MaxUselessPasses => writeln!(f, "{id}{}", self.max_useless_passes)?,
                OptionField::GuessMass => writeln!(f, "{id}{}", self.guess_mass)?,
                OptionField::Regularization => writeln!(f, "{id}{}", self.regularization)?,
                OptionField::UseLabelDictionary => {
                    writeln!(f, "{id}{}", u8::from(self.use_label_dictionary))?;
                }
                OptionField::Beam => {
                    if let Some(beam) = self.beam {
                        writeln!(f, "{id}{beam}")?;
                    }
                }
                OptionField::BeamMass => write_sentinel_float(f, id, self.beam_mass)?,
                OptionField::Delta => write_sentinel_float(f, id, self.delta)?,
                OptionField::Sigma => write_sentinel_float(f, id, self.sigma)?,
            }
        }
        Ok(())
    }
}

/// 只写出文本解析能够接受的取值：已配置且不为负。
fn write_sentinel_float(f: &mut fmt::Formatter<'_>, id: &str, value: Option<f32>) -> fmt::Result {
    match value {
        Some(value) if value >= 0.0 || value.is_nan() => writeln!(f, "{id}{value}"),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spark_codec_vector::{write_floats, write_strings};

    #[test]
    fn blank_and_comment_lines_still_advance_the_counter() {
        let text = "# header\n\n   \n\t# indented comment\nbogus\n";
        let err = TaggerOptions::from_text(text).expect_err("fifth line is unknown");
        assert!(matches!(err, OptionsError::Syntax { line: 5, ref text } if text == "bogus"));
    }

    #[test]
    fn later_lines_override_earlier_ones() {
        let options = TaggerOptions::from_text("degree=3\ndegree=4\n").expect("parse");
        assert_eq!(options.degree(), 4);
    }

    #[test]
    fn whitespace_inside_tokens_is_ignored() {
        let options = TaggerOptions::from_text("max_ train _passes = 1 2\r\n").expect("parse");
        assert_eq!(options.max_train_passes(), 12);
    }

    #[test]
    fn enum_values_are_prefix_matched() {
        let options =
            TaggerOptions::from_text("estimator=MLE\nregularization=L2norm").expect("parse");
        assert_eq!(options.estimator(), Estimator::MaximumLikelihood);
        assert_eq!(options.regularization(), Regularization::L2);
    }

    #[test]
    fn unknown_enum_literal_is_a_syntax_error() {
        let err =
            TaggerOptions::from_text("degree=2\ninference=VITERBI").expect_err("bad literal");
        assert!(matches!(err, OptionsError::Syntax { line: 2, .. }));
    }

    #[test]
    fn label_dictionary_flag_treats_any_non_zero_as_on() {
        let off = TaggerOptions::from_text("use_label_dictionary=0").expect("parse");
        let on = TaggerOptions::from_text("use_label_dictionary=2").expect("parse");
        assert!(!off.use_label_dictionary());
        assert!(on.use_label_dictionary());
    }

    #[test]
    fn beam_accepts_any_sign() {
        let unset = TaggerOptions::from_text("beam=-1").expect("sentinel");
        assert_eq!(unset.beam(), None);
        let negative = TaggerOptions::from_text("beam=-5").expect("plain int");
        assert_eq!(negative.beam(), Some(-5));
    }

    #[test]
    fn rendering_omits_unset_sentinels() {
        let text = TaggerOptions::default().to_text();
        assert!(text.starts_with("estimator=AVG_PERC\ninference=MAP\n"));
        assert!(text.contains("use_label_dictionary=1\n"));
        for absent in ["beam=", "beam_mass=", "delta=", "sigma="] {
            assert!(!text.contains(absent), "{absent} should be omitted");
        }
    }

    #[test]
    fn negative_sentinel_floats_are_rendered_as_unset() {
        let explicit = TaggerOptions::builder().beam_mass(-1.0).build();
        let reparsed = TaggerOptions::from_text(&explicit.to_text()).expect("reparse");
        assert_eq!(reparsed, explicit);

        let mut block = Vec::new();
        write_strings(&mut block, &["delta", "sigma"]).expect("names");
        write_floats(&mut block, &[-0.5, 0.5]).expect("values");
        let mut src = block.as_slice();
        let loaded = TaggerOptions::read_binary(&mut src, false, &mut Vec::<String>::new())
            .expect("decode");
        assert_eq!(loaded.delta(), Some(-0.5));

        let text = loaded.to_text();
        assert!(!text.contains("delta="));
        let reparsed = TaggerOptions::from_text(&text).expect("reparse");
        assert_eq!(reparsed.delta(), None);
        assert_eq!(reparsed.sigma(), Some(0.5));
    }
}
