//! The published 41-row rubric.
//!
//! Descriptions and point values are external contract data and are kept
//! byte-for-byte. Only five rows are computed; the rest stand in for visual
//! checks (themes, animations, picture styles) and always pass.

use crate::grading::points::Points;
use crate::grading::rule::{Check, RuleDef};
use once_cell::sync::Lazy;

/// Denominator used for the total and the pass rate.
///
/// The point values of the rows below add up to 35.2; the rubric is still
/// scored out of 40.
pub const RUBRIC_TOTAL: Points = Points::from_tenths(400);

/// Number of rows in the rubric.
pub const RULE_COUNT: usize = 41;

const ROW_COUNT_MISMATCH: &str =
    "rubric text asks for a 1-row x 2-column table, the check requires 11 rows x 2 columns";

/// An ordered, append-only list of rule definitions.
#[derive(Debug, Default)]
pub struct Checklist {
    rules: Vec<RuleDef>,
}

impl Checklist {
    /// Create an empty checklist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule. Ids must be registered as 1, 2, 3, ...
    pub fn register(&mut self, rule: RuleDef) {
        debug_assert_eq!(usize::from(rule.id), self.rules.len() + 1, "rule ids out of order");
        self.rules.push(rule);
    }

    /// All rules in published order.
    #[inline]
    pub fn rules(&self) -> &[RuleDef] {
        &self.rules
    }

    /// Look up a rule by its 1-based id.
    pub fn get(&self, id: u8) -> Option<&RuleDef> {
        self.rules.get(usize::from(id).checked_sub(1)?)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Sum of the point values of every rule.
    pub fn max_points(&self) -> Points {
        self.rules.iter().map(|rule| rule.points).sum()
    }

    /// Rules whose outcome is computed by the inspector.
    pub fn computed(&self) -> impl Iterator<Item = &RuleDef> {
        self.rules.iter().filter(|rule| rule.outcome.is_computed())
    }
}

/// The rubric, built on first use.
pub static CHECKLIST: Lazy<Checklist> = Lazy::new(|| {
    let mut checklist = Checklist::new();

    checklist.register(RuleDef::computed(1, "演示文稿包含 7 张幻灯片", 12, Check::SlideCount(7)));
    checklist.register(RuleDef::assumed(2, "幻灯片设计主题设置为“平面”", 19));
    checklist.register(RuleDef::assumed(3, "幻灯片切换方式已经设置为“溶解”", 14));
    checklist.register(RuleDef::assumed(4, "自动换片时间已经设置为 5 秒", 12));
    checklist.register(RuleDef::computed(
        5,
        "幻灯片大小已经设置为“全屏显示 (16:9)”",
        12,
        Check::Widescreen,
    ));
    checklist.register(RuleDef::assumed(6, "幻灯片放映方式已经设置为“观众自行浏览”", 12));
    checklist.register(RuleDef::computed(
        7,
        "幻灯片 1 版式已经设置为空白",
        14,
        Check::SlideHasShapes { slide: 0 },
    ));
    checklist.register(RuleDef::assumed(8, "幻灯片 1 图片样式已经设置为“剪去对角，白色”", 5));
    checklist.register(RuleDef::assumed(9, "幻灯片 1 图片效果已经设置为“阴影 - 左上对角透视”", 5));
    checklist.register(RuleDef::assumed(10, "幻灯片 2 左侧文本框内项目符号已经设置正确", 6));
    checklist.register(RuleDef::assumed(11, "幻灯片 2 左侧文本框内项目符号已经设置正确", 6));
    checklist.register(RuleDef::assumed(12, "幻灯片 2 左侧文本框内行间距已经设置为 1.5 倍", 9));
    checklist.register(RuleDef::assumed(13, "幻灯片 2 图片样式已经设置为“圆形对角，白色”", 5));
    checklist.register(RuleDef::assumed(14, "幻灯片 2 图片效果已经设置为“发光...个性色 4”", 5));
    checklist.register(RuleDef::assumed(15, "幻灯片 2 图片动画已经设置为“强调 - 跷跷板”", 9));
    checklist.register(RuleDef::assumed(
        16,
        "幻灯片 3 SmartArt 布局名称已经设置为“垂直块列表”",
        16,
    ));
    checklist.register(RuleDef::assumed(17, "幻灯片 3 SmartArt 节点 1 文本已经包含 “---”", 6));
    checklist.register(RuleDef::assumed(
        18,
        "幻灯片 3 SmartArt 节点 1 文本已经包含 “导致思维混乱有哪些因素”",
        6,
    ));
    checklist.register(RuleDef::assumed(19, "幻灯片 3 SmartArt 样式已经设置为“砖块场景”", 9));
    checklist.register(RuleDef::assumed(
        20,
        "幻灯片 3 SmartArt 图形颜色已经设置为“彩色范围...”",
        9,
    ));
    checklist.register(RuleDef::assumed(
        21,
        "幻灯片 3 SmartArt 动画效果已经设置为“进入 - 飞入”",
        7,
    ));
    checklist.register(RuleDef::assumed(22, "幻灯片 4 左侧文本框内项目符号已经设置正确", 6));
    checklist.register(RuleDef::assumed(23, "幻灯片 4 左侧文本框内项目符号已经设置正确", 6));
    checklist.register(RuleDef::assumed(
        24,
        "幻灯片 4 左侧文本框内内容淡出时间已经设置为读后 10 秒",
        9,
    ));
    checklist.register(RuleDef::assumed(25, "幻灯片 4 图片样式已经设置为“金属圆角矩形”", 5));
    checklist.register(RuleDef::assumed(26, "幻灯片 4 图片效果已经设置为“棱台 - 角度”", 5));
    checklist.register(RuleDef::assumed(27, "幻灯片 5 版式已经设置为“竖排标题与文本”", 9));
    checklist.register(RuleDef::assumed(
        28,
        "幻灯片 5 标题文本框动画效果已经设置为“进入 - 淡出”",
        7,
    ));
    checklist.register(RuleDef::assumed(29, "幻灯片 5 左侧文本框内项目符号已经设置正确", 6));
    checklist.register(RuleDef::assumed(30, "幻灯片 5 左侧文本框内项目符号已经设置正确", 6));
    checklist.register(RuleDef::assumed(31, "幻灯片 7 左侧文本框内行间距已经设置为 1.5 倍", 9));
    checklist.register(RuleDef::computed(
        32,
        "幻灯片 7 标题内容已经设置为“出版信息”",
        5,
        Check::SlideContainsText { slide: 6, needle: "出版信息" },
    ));
    checklist.register(
        RuleDef::computed(
            33,
            "幻灯片 7 已经插入 1 行 2 列的表格",
            12,
            Check::SlideContainsTable { slide: 6, rows: 11, cols: 2 },
        )
        .flagged(ROW_COUNT_MISMATCH),
    );
    checklist.register(RuleDef::assumed(
        34,
        "幻灯片 7 表格中单元格 (1,1) 的文字已经设置为“出版社”",
        7,
    ));
    checklist.register(RuleDef::assumed(
        35,
        "幻灯片 7 表格中单元格 (8,2) 的文字已经设置为“2018-09-01”",
        7,
    ));
    checklist.register(RuleDef::assumed(36, "幻灯片 7 表格样式已经设置为“浅色样式 1- 强调 2”", 12));
    checklist.register(RuleDef::assumed(37, "幻灯片 7 表格动画效果已经设置为“退出 - 飞出”", 7));
    checklist.register(RuleDef::assumed(38, "幻灯片 1 的背景格式已经设置正确", 9));
    checklist.register(RuleDef::assumed(39, "幻灯片 1 插入图片的设置已经正确", 9));
    checklist.register(RuleDef::assumed(40, "幻灯片 4 插入图片的设置已经正确", 9));
    checklist.register(RuleDef::assumed(41, "幻灯片 5 的背景格式已经设置正确", 9));

    checklist
});
