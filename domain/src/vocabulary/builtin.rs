//! Built-in word lists.
//!
//! The English lists feed the English pattern alternations, so their order
//! is the alternation order.

/// Color words recognized anywhere (Chinese and English).
pub const COLORS: &[&str] = &[
    "红", "赤", "橙", "黄", "绿", "青", "蓝", "紫", "黑", "白", "灰", "棕", "粉", "金", "银", "铜",
    "红色", "橙色", "黄色", "绿色", "蓝色", "紫色", "黑色", "白色", "灰色", "棕色", "粉色", "金色",
    "银色", "red", "orange", "yellow", "green", "blue", "purple", "black", "white", "gray", "grey",
    "brown", "pink", "gold", "silver", "cyan", "magenta", "bronze",
];

/// Object nouns recognized anywhere.
pub const OBJECTS: &[&str] = &[
    "球", "圆球", "小球", "大球", "方块", "立方体", "正方体", "方体", "圆柱", "圆柱体", "物体",
    "ball", "sphere", "cube", "block", "cylinder", "object", "item", "thing",
];

/// Size and material modifiers recognized anywhere.
pub const MODIFIERS: &[&str] = &[
    "大", "小", "金属", "橡胶", "木", "塑料", "金属的", "橡胶的", "大的", "小的", "big", "small",
    "large", "tiny", "metal", "rubber", "wooden", "plastic",
];

/// Target colors accepted by the English pattern. `grey` is folded into
/// `gray` before matching, so it is absent here.
pub const ENGLISH_COLORS: &[&str] = &[
    "red", "orange", "yellow", "green", "blue", "purple", "black", "white", "gray", "brown",
    "pink", "gold", "silver", "cyan", "magenta", "bronze",
];

/// Object nouns accepted by the English pattern.
pub const ENGLISH_OBJECTS: &[&str] = &["ball", "sphere", "cube", "block", "cylinder"];

/// Modifiers accepted in the English pattern's prefix group.
pub const ENGLISH_MODIFIERS: &[&str] = &[
    "big", "small", "large", "tiny", "huge", "little", "metal", "rubber", "wooden", "plastic",
    "shiny", "matte",
];

/// Characters that end a sentence.
pub const SENTENCE_TERMINATORS: &[char] = &['；', ';', '。', '！', '!', '？', '?', '\n'];

/// Connectives that separate clauses inside a Chinese sentence.
pub const CONNECTIVES: &[&str] = &[
    "然后", "接着", "之后", "随后", "再", "且", "并", "同时", "以及", "和", "，", ",", "and", "then",
];

/// Tokens that end the target capture of a transformation template.
pub const TARGET_BOUNDARIES: &[&str] = &["然后", "接着", "之后", "再", "，", ",", "和"];

/// Object markers that may be left at the head of a source phrase.
pub const SOURCE_MARKERS: &[char] = &['把', '将'];

/// Possessive particle stripped from the end of a target.
pub const POSSESSIVE_PARTICLE: char = '的';
