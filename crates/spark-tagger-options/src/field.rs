//! 选项字段名表：文本分派顺序与二进制写出顺序共用同一张表。

use std::fmt;

use serde::{Deserialize, Serialize};

/// 标注器选项的 14 个字段。
///
/// # 契约说明（What）
/// - [`OptionField::ALL`] 的顺序既是文本行的分派优先级，也是二进制记录的写出顺序，修改顺序会改变文件格式；
/// - [`OptionField::name`] 为二进制记录中的字段名，[`OptionField::id`] 为文本行中查找的 `name=` 片段。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionField {
    /// `estimator`
    Estimator,
    /// `inference`
    Inference,
    /// `suffix_length`
    SuffixLength,
    /// `degree`
    Degree,
    /// `max_train_passes`
    MaxTrainPasses,
    /// `max_lemmatizer_passes`
    MaxLemmatizerPasses,
    /// `max_useless_passes`
    MaxUselessPasses,
    /// `guess_mass`
    GuessMass,
    /// `beam`
    Beam,
    /// `beam_mass`
    BeamMass,
    /// `regularization`
    Regularization,
    /// `delta`
    Delta,
    /// `sigma`
    Sigma,
    /// `use_label_dictionary`
    UseLabelDictionary,
}

impl OptionField {
    /// 固定顺序的全部字段。
    pub const ALL: [OptionField; 14] = [
        OptionField::Estimator,
        OptionField::Inference,
        OptionField::SuffixLength,
        OptionField::Degree,
        OptionField::MaxTrainPasses,
        OptionField::MaxLemmatizerPasses,
        OptionField::MaxUselessPasses,
        OptionField::GuessMass,
        OptionField::Beam,
        OptionField::BeamMass,
        OptionField::Regularization,
        OptionField::Delta,
        OptionField::Sigma,
        OptionField::UseLabelDictionary,
    ];

    /// 字段名。
    pub const fn name(self) -> &'static str {
        match self {
            OptionField::Estimator => "estimator",
            OptionField::Inference => "inference",
            OptionField::SuffixLength => "suffix_length",
            OptionField::Degree => "degree",
            OptionField::MaxTrainPasses => "max_train_passes",
            OptionField::MaxLemmatizerPasses => "max_lemmatizer_passes",
            OptionField::MaxUselessPasses => "max_useless_passes",
            OptionField::GuessMass => "guess_mass",
            OptionField::Beam => "beam",
            OptionField::BeamMass => "beam_mass",
            OptionField::Regularization => "regularization",
            OptionField::Delta => "delta",
            OptionField::Sigma => "sigma",
            OptionField::UseLabelDictionary => "use_label_dictionary",
        }
    }

    /// 文本行中标识该字段的 `name=` 片段。
    pub const fn id(self) -> &'static str {
        match self {
            OptionField::Estimator => "estimator=",
            OptionField::Inference => "inference=",
            OptionField::SuffixLength => "suffix_length=",
            OptionField::Degree => "degree=",
            OptionField::MaxTrainPasses => "max_train_passes=",
            OptionField::MaxLemmatizerPasses => "max_lemmatizer_passes=",
            OptionField::MaxUselessPasses => "max_useless_passes=",
            OptionField::GuessMass => "guess_mass=",
            OptionField::Beam => "beam=",
            OptionField::BeamMass => "beam_mass=",
            OptionField::Regularization => "regularization=",
            OptionField::Delta => "delta=",
            OptionField::Sigma => "sigma=",
            OptionField::UseLabelDictionary => "use_label_dictionary=",
        }
    }

    /// 按二进制记录中的字段名精确查找。
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }

    /// 在已去空白的文本行中定位字段，返回字段与其 `name=` 片段之后的值文本。
    ///
    /// # 逻辑解析（How）
    /// - 按 [`OptionField::ALL`] 顺序做**子串**查找而非行首匹配，`xdegree=3` 同样命中 `degree`；
    /// - 值文本取自该片段首次出现位置之后，直到行尾。
    pub fn locate(line: &str) -> Option<(Self, &str)> {
        Self::ALL.into_iter().find_map(|field| {
            line.find(field.id())
                .map(|start| (field, &line[start + field.id().len()..]))
        })
    }
}

impl fmt::Display for OptionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
