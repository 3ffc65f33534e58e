/// Titles of the strategic planning deck, in slide order.
pub const STRATEGIC_PLANNING_TITLES: [&str; 8] = [
    "封面",
    "为什么（政策）",
    "成熟度模型",
    "竞争对手对比",
    "我们去哪",
    "怎么做",
    "投入产出",
    "总结",
];
