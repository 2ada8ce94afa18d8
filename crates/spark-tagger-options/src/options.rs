//! 标注器选项记录本体：字段、默认值、构造器与容差相等。
//!
//! # 契约说明（What）
//! - 记录在任何时刻都持有完整的 14 个字段；所有构造路径都从默认值出发再覆盖；
//! - `beam`、`beam_mass`、`delta`、`sigma` 在内存中以 `Option` 表达“未配置”，
//!   在文本与二进制格式中仍以哨兵值 `-1` 表示；
//! - 构造完成后记录只读，除文本/二进制加载器外不提供原地修改接口。

use serde::{Deserialize, Serialize};

use crate::kind::{Estimator, Inference, Regularization};

/// 浮点字段比较时使用的绝对容差。
pub const FLOAT_TOLERANCE: f32 = 0.001;

/// 哨兵字段在文件格式中表示“未配置”的取值。
pub const UNSET: i32 = -1;

/// 序列标注器的超参数记录。
///
/// # 教案式说明
/// - **契约 (What)**：字段含义与默认值见各访问器；相等比较对 `guess_mass`、`beam_mass`、
///   `delta`、`sigma` 使用 [`FLOAT_TOLERANCE`]，其余字段精确比较；
/// - **构造 (How)**：[`TaggerOptions::default`] 给出默认记录，[`TaggerOptions::builder`] 按需覆盖字段，
///   [`TaggerOptions::from_text`] 与 [`TaggerOptions::read_binary`] 分别从两种文件格式加载；
/// - **权衡 (Trade-offs)**：容差相等不满足传递性，因此只实现 `PartialEq`，不实现 `Eq`/`Hash`。
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct TaggerOptions {
    pub(crate) estimator: Estimator,
    pub(crate) inference: Inference,
    pub(crate) suffix_length: u32,
    pub(crate) degree: u32,
    pub(crate) max_train_passes: u32,
    pub(crate) max_lemmatizer_passes: u32,
    pub(crate) max_useless_passes: u32,
    pub(crate) guess_mass: f32,
    pub(crate) beam: Option<i32>,
    pub(crate) beam_mass: Option<f32>,
    pub(crate) regularization: Regularization,
    pub(crate) delta: Option<f32>,
    pub(crate) sigma: Option<f32>,
    pub(crate) use_label_dictionary: bool,
}

impl Default for TaggerOptions {
    fn default() -> Self {
        Self {
            estimator: Estimator::AveragedPerceptron,
            inference: Inference::Map,
            suffix_length: 10,
            degree: 2,
            max_train_passes: 50,
            max_lemmatizer_passes: 50,
            max_useless_passes: 3,
            guess_mass: 0.99,
            beam: None,
            beam_mass: None,
            regularization: Regularization::None,
            delta: None,
            sigma: None,
            use_label_dictionary: true,
        }
    }
}

impl TaggerOptions {
    /// 从默认值出发构造记录。
    pub fn builder() -> TaggerOptionsBuilder {
        TaggerOptionsBuilder::default()
    }

    /// 参数估计方式，默认 `AVG_PERC`。
    pub fn estimator(&self) -> Estimator {
        self.estimator
    }

    /// 推断方式，默认 `MAP`。
    pub fn inference(&self) -> Inference {
        self.inference
    }

    /// 词形猜测器使用的最长后缀，默认 10。
    pub fn suffix_length(&self) -> u32 {
        self.suffix_length
    }

    /// 标签序列模型的阶数，默认 2。
    pub fn degree(&self) -> u32 {
        self.degree
    }

    /// 标注器训练的最大轮数，默认 50。
    pub fn max_train_passes(&self) -> u32 {
        self.max_train_passes
    }

    /// 词元化器训练的最大轮数，默认 50。
    pub fn max_lemmatizer_passes(&self) -> u32 {
        self.max_lemmatizer_passes
    }

    /// 开发集精度未提升时允许继续训练的轮数，默认 3。
    pub fn max_useless_passes(&self) -> u32 {
        self.max_useless_passes
    }

    /// 未登录词候选标签需覆盖的概率质量，默认 0.99。
    pub fn guess_mass(&self) -> f32 {
        self.guess_mass
    }

    /// 束搜索宽度；`None` 表示不限制。
    pub fn beam(&self) -> Option<i32> {
        self.beam
    }

    /// 束搜索保留的概率质量；`None` 表示未配置。
    pub fn beam_mass(&self) -> Option<f32> {
        self.beam_mass
    }

    /// 正则化方式，默认 `NONE`。
    pub fn regularization(&self) -> Regularization {
        self.regularization
    }

    /// L1 正则化强度；`None` 表示未配置。
    pub fn delta(&self) -> Option<f32> {
        self.delta
    }

    /// L2 正则化强度；`None` 表示未配置。
    pub fn sigma(&self) -> Option<f32> {
        self.sigma
    }

    /// 是否用训练数据中的词-标签字典约束候选标签，默认开启。
    pub fn use_label_dictionary(&self) -> bool {
        self.use_label_dictionary
    }
}

/// [`TaggerOptions`] 构造器，未设置的字段保持默认值。
///
/// 哨兵字段的设置方法接受 `impl Into<Option<_>>`，`builder.beam(4)` 与 `builder.beam(None)` 均可。
#[derive(Clone, Copy, Debug, Default)]
pub struct TaggerOptionsBuilder {
    options: TaggerOptions,
}

impl TaggerOptionsBuilder {
    /// 设置参数估计方式。
    pub fn estimator(mut self, estimator: Estimator) -> Self {
        self.options.estimator = estimator;
        self
    }

    /// 设置推断方式。
    pub fn inference(mut self, inference: Inference) -> Self {
        self.options.inference = inference;
        self
    }

    /// 设置最长后缀。
    pub fn suffix_length(mut self, suffix_length: u32) -> Self {
        self.options.suffix_length = suffix_length;
        self
    }

    /// 设置模型阶数。
    pub fn degree(mut self, degree: u32) -> Self {
        self.options.degree = degree;
        self
    }

    /// 设置标注器最大训练轮数。
    pub fn max_train_passes(mut self, passes: u32) -> Self {
        self.options.max_train_passes = passes;
        self
    }

    /// 设置词元化器最大训练轮数。
    pub fn max_lemmatizer_passes(mut self, passes: u32) -> Self {
        self.options.max_lemmatizer_passes = passes;
        self
    }

    /// 设置无提升容忍轮数。
    pub fn max_useless_passes(mut self, passes: u32) -> Self {
        self.options.max_useless_passes = passes;
        self
    }

    /// 设置候选标签概率质量。
    pub fn guess_mass(mut self, mass: f32) -> Self {
        self.options.guess_mass = mass;
        self
    }

    /// 设置束宽度；传入 `-1` 等同于 `None`。
    pub fn beam(mut self, beam: impl Into<Option<i32>>) -> Self {
        self.options.beam = beam.into().and_then(int_from_wire);
        self
    }

    /// 设置束概率质量；传入 `-1.0` 等同于 `None`。
    pub fn beam_mass(mut self, mass: impl Into<Option<f32>>) -> Self {
        self.options.beam_mass = mass.into().and_then(float_from_wire);
        self
    }

    /// 设置正则化方式。
    pub fn regularization(mut self, regularization: Regularization) -> Self {
        self.options.regularization = regularization;
        self
    }

    /// 设置 L1 强度。
    pub fn delta(mut self, delta: impl Into<Option<f32>>) -> Self {
        self.options.delta = delta.into().and_then(float_from_wire);
        self
    }

    /// 设置 L2 强度。
    pub fn sigma(mut self, sigma: impl Into<Option<f32>>) -> Self {
        self.options.sigma = sigma.into().and_then(float_from_wire);
        self
    }

    /// 设置是否启用词-标签字典。
    pub fn use_label_dictionary(mut self, enabled: bool) -> Self {
        self.options.use_label_dictionary = enabled;
        self
    }

    /// 产出最终记录。
    pub fn build(self) -> TaggerOptions {
        self.options
    }
}

impl PartialEq for TaggerOptions {
    fn eq(&self, other: &Self) -> bool {
        if core::ptr::eq(self, other) {
            return true;
        }

        self.estimator == other.estimator
            && self.inference == other.inference
            && self.suffix_length == other.suffix_length
            && self.degree == other.degree
            && self.max_train_passes == other.max_train_passes
            && self.max_lemmatizer_passes == other.max_lemmatizer_passes
            && self.max_useless_passes == other.max_useless_passes
            && float_eq(self.guess_mass, other.guess_mass)
            && wire_int(self.beam) == wire_int(other.beam)
            && float_eq(wire_float(self.beam_mass), wire_float(other.beam_mass))
            && self.regularization == other.regularization
            && float_eq(wire_float(self.delta), wire_float(other.delta))
            && float_eq(wire_float(self.sigma), wire_float(other.sigma))
            && self.use_label_dictionary == other.use_label_dictionary
    }
}

/// 绝对容差比较，任一侧为 `NaN` 时不相等。
pub(crate) fn float_eq(left: f32, right: f32) -> bool {
    (left - right).abs() < FLOAT_TOLERANCE
}

/// 哨兵浮点字段的文件格式取值。
pub(crate) fn wire_float(value: Option<f32>) -> f32 {
    value.unwrap_or(UNSET as f32)
}

/// 哨兵整数字段的文件格式取值。
pub(crate) fn wire_int(value: Option<i32>) -> i32 {
    value.unwrap_or(UNSET)
}

/// 由文件格式取值还原哨兵浮点字段，恰为 `-1` 时视为未配置。
pub(crate) fn float_from_wire(value: f32) -> Option<f32> {
    if value == UNSET as f32 { None } else { Some(value) }
}

/// 由文件格式取值还原哨兵整数字段。
pub(crate) fn int_from_wire(value: i32) -> Option<i32> {
    if value == UNSET { None } else { Some(value) }
}
