//! 闭集枚举字段：估计器、推断方式与正则化。
//!
//! # 契约说明（What）
//! - 每个取值同时拥有**文本字面量**（配置文件使用）与**数值标签**（二进制格式使用）；
//! - 文本解码采用“前缀匹配 + 固定优先级”：按声明顺序检查值文本是否以字面量开头，首个命中者获胜，
//!   因此 `MLE` 会解码为 `ML`，`L1x` 会解码为 `L1`；
//! - `serde` 序列化同样使用文本字面量，导出的 JSON 与配置文件写法一致。

use std::fmt;

use serde::{Deserialize, Serialize};

/// 生成闭集枚举及其字面量/标签映射。
///
/// 变体按解码优先级书写；`#[default]` 标注默认取值。
macro_rules! closed_set {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = ($literal:literal, $tag:literal),
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $literal)]
                $variant,
            )+
        }

        impl $name {
            /// 按解码优先级排列的全部取值。
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// 配置文件中的字面量。
            pub const fn literal(self) -> &'static str {
                match self {
                    $($name::$variant => $literal,)+
                }
            }

            /// 二进制格式中的数值标签。
            pub const fn tag(self) -> u32 {
                match self {
                    $($name::$variant => $tag,)+
                }
            }

            /// 由数值标签还原取值，标签不在闭集内时返回 `None`。
            pub const fn from_tag(tag: u32) -> Option<Self> {
                match tag {
                    $($tag => Some($name::$variant),)+
                    _ => None,
                }
            }

            /// 以前缀匹配规则解码配置文本，未命中任何字面量时返回 `None`。
            pub fn decode(text: &str) -> Option<Self> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|candidate| text.starts_with(candidate.literal()))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.literal())
            }
        }
    };
}

closed_set! {
    /// 参数估计方式。
    pub enum Estimator {
        /// 平均感知机（`AVG_PERC`），默认取值。
        #[default]
        AveragedPerceptron = ("AVG_PERC", 0),
        /// 最大似然估计（`ML`），配合随机梯度训练 CRF。
        MaximumLikelihood = ("ML", 1),
    }
}

closed_set! {
    /// 标注推断方式。
    pub enum Inference {
        /// 最大后验路径（Viterbi），默认取值。
        #[default]
        Map = ("MAP", 0),
        /// 逐位置边缘概率（前向后向）。
        Marginal = ("MARGINAL", 1),
    }
}

closed_set! {
    /// 训练时的正则化方式。
    pub enum Regularization {
        /// 不做正则化，默认取值。
        #[default]
        None = ("NONE", 0),
        /// L1 正则化，强度由 `delta` 控制。
        L1 = ("L1", 1),
        /// L2 正则化，强度由 `sigma` 控制。
        L2 = ("L2", 2),
    }
}
