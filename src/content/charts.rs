use crate::charts::{
    AnimationConfig, Annotation, AnnotationLabel, AxisConfig, ChartBinding, ChartConfig,
    ChartKind, DashPattern, Dataset, Fill, GridStyle, IndexAxis, LabelPosition, LegendConfig,
    LegendPosition, PointShape, PointStyle, TickFormat,
};
use crate::render::Color;

pub const POLICY_TIMELINE_SURFACE: &str = "policyTimelineChart";
pub const SUBSIDY_ROI_SURFACE: &str = "subsidyROIChart";
pub const MATURITY_RADAR_SURFACE: &str = "radarChart";
pub const COMPETITOR_SURFACE: &str = "competitorChart";
pub const MATURITY_TIMELINE_SURFACE: &str = "timelineChart";
pub const SUCCESS_FACTORS_SURFACE: &str = "factorsChart";
pub const INVESTMENT_SPLIT_SURFACE: &str = "pieChart";
pub const CUMULATIVE_ROI_SURFACE: &str = "roiChart";

const RED: u32 = 0xe74c3c;
const ORANGE: u32 = 0xf39c12;
const PURPLE: u32 = 0x9b59b6;
const BLUE: u32 = 0x3498db;
const GREEN: u32 = 0x27ae60;
const GOLD: u32 = 0xc9a227;
const NAVY: u32 = 0x0f2744;

fn rgb(hex: u32) -> Color {
    Color::from_rgb24(hex)
}

fn palette(hexes: &[u32]) -> Fill {
    Fill::PerPoint(hexes.iter().copied().map(rgb).collect())
}

fn faint_grid() -> GridStyle {
    GridStyle::colored(Color::rgba(0.0, 0.0, 0.0, 0.05))
}

/// Chart bindings of the strategic planning deck.
#[must_use]
pub fn strategic_planning_bindings() -> Vec<ChartBinding> {
    vec![
        ChartBinding::new(2, POLICY_TIMELINE_SURFACE, policy_timeline_chart),
        ChartBinding::new(2, SUBSIDY_ROI_SURFACE, subsidy_roi_chart),
        ChartBinding::new(3, MATURITY_RADAR_SURFACE, maturity_radar_chart),
        ChartBinding::new(4, COMPETITOR_SURFACE, competitor_chart),
        ChartBinding::new(5, MATURITY_TIMELINE_SURFACE, maturity_timeline_chart),
        ChartBinding::new(6, SUCCESS_FACTORS_SURFACE, success_factors_chart),
        ChartBinding::new(7, INVESTMENT_SPLIT_SURFACE, investment_split_chart),
        ChartBinding::new(8, CUMULATIVE_ROI_SURFACE, cumulative_roi_chart),
    ]
}

/// AI-related policy count per year.
#[must_use]
pub fn policy_timeline_chart() -> ChartConfig {
    let gold = rgb(GOLD);
    ChartConfig::new(ChartKind::Bar, ["2022", "2023", "2024", "2025"])
        .with_dataset(
            Dataset::new(
                vec![45.0, 78.0, 125.0, 180.0],
                Fill::PerPoint(
                    [0.6, 0.7, 0.8, 0.9]
                        .into_iter()
                        .map(|alpha| gold.with_alpha(alpha))
                        .collect(),
                ),
            )
            .with_label("AI相关政策数量")
            .with_border(gold, 1.0)
            .with_border_radius(4.0),
        )
        .with_animation(AnimationConfig::ease_out_quart(1_000))
        .with_scale("y", AxisConfig::new(10.0, faint_grid()).begin_at_zero())
        .with_scale("x", AxisConfig::new(10.0, GridStyle::hidden()))
}

/// Split of subsidy categories.
#[must_use]
pub fn subsidy_roi_chart() -> ChartConfig {
    ChartConfig::new(ChartKind::Doughnut, ["设备补贴", "研发补助", "算力补贴", "人才奖励"])
        .with_dataset(Dataset::new(
            vec![25.0, 20.0, 10.0, 5.0],
            palette(&[BLUE, GREEN, PURPLE, ORANGE]),
        ))
        .with_animation(AnimationConfig::ease_out_quart(1_000))
        .with_cutout_percent(60.0)
        .with_legend(LegendConfig::at(LegendPosition::Bottom, 10.0, 10.0).with_point_style(None))
}

fn radar_point(color: Color) -> PointStyle {
    PointStyle {
        background_color: Some(color),
        border_color: Some(Color::rgb(1.0, 1.0, 1.0)),
        hover_background_color: Some(Color::rgb(1.0, 1.0, 1.0)),
        hover_border_color: Some(color),
        ..PointStyle::default()
    }
}

/// Current, target and leading maturity across six capability dimensions.
#[must_use]
pub fn maturity_radar_chart() -> ChartConfig {
    let red = rgb(RED);
    let blue = rgb(BLUE);
    let gold = rgb(GOLD);
    ChartConfig::new(
        ChartKind::Radar,
        ["战略规划", "组织能力", "数据基础", "技术应用", "流程融合", "治理体系"],
    )
    .with_dataset(
        Dataset::new(
            vec![20.0, 25.0, 20.0, 30.0, 15.0, 15.0],
            Fill::Solid(red.with_alpha(0.2)),
        )
        .with_label("当前状态（L1 探索试验级）")
        .with_border(red, 3.0)
        .with_point(radar_point(red)),
    )
    .with_dataset(
        Dataset::new(
            vec![70.0, 75.0, 70.0, 80.0, 65.0, 75.0],
            Fill::Solid(blue.with_alpha(0.2)),
        )
        .with_label("目标状态（L3 体系优化级）")
        .with_border(blue, 3.0)
        .with_point(radar_point(blue)),
    )
    .with_dataset(
        Dataset::new(
            vec![95.0, 95.0, 90.0, 95.0, 90.0, 95.0],
            Fill::Solid(gold.with_alpha(0.05)),
        )
        .with_label("L5 认知引领级")
        .with_border(gold.with_alpha(0.3), 3.0)
        .with_border_dash(&[5.0, 5.0])
        .with_point(PointStyle {
            radius: Some(0.0),
            ..PointStyle::default()
        }),
    )
    .with_animation(AnimationConfig::ease_out_quart(1_500))
    .with_scale(
        "r",
        AxisConfig::new(10.0, GridStyle::colored(Color::rgba(0.0, 0.0, 0.0, 0.08)))
            .begin_at_zero()
            .with_max(100.0)
            .with_step_size(20.0)
            .with_point_label_font_size(11.0),
    )
    .with_legend(LegendConfig::at(LegendPosition::Bottom, 15.0, 11.0))
}

/// AI maturity level of peers, as horizontal bars.
#[must_use]
pub fn competitor_chart() -> ChartConfig {
    ChartConfig::new(
        ChartKind::Bar,
        ["我们", "行业平均", "恒瑞医药", "复星医药", "阿斯利康", "罗氏"],
    )
    .with_dataset(
        Dataset::new(
            vec![1.0, 2.2, 2.5, 3.2, 4.0, 4.2],
            palette(&[RED, ORANGE, PURPLE, BLUE, GREEN, 0x1a1a2e]),
        )
        .with_label("AI成熟度等级")
        .with_border_radius(8.0),
    )
    .with_index_axis(IndexAxis::Y)
    .with_animation(AnimationConfig::ease_out_quart(1_500))
    .with_scale(
        "x",
        AxisConfig::new(11.0, faint_grid())
            .with_range(0.0, 5.0)
            .with_tick_format(TickFormat::Prefix("L".to_owned())),
    )
    .with_scale("y", AxisConfig::new(11.0, GridStyle::hidden()))
}

/// Planned maturity progression with the AI boundary marker.
#[must_use]
pub fn maturity_timeline_chart() -> ChartConfig {
    let gold = rgb(GOLD);
    ChartConfig::new(
        ChartKind::Line,
        ["现在", "6个月", "12个月", "18个月", "2年", "3年", "5年"],
    )
    .with_dataset(
        Dataset::new(
            vec![1.0, 1.3, 1.8, 2.3, 2.8, 3.3, 4.2],
            Fill::Solid(gold.with_alpha(0.1)),
        )
        .with_label("成熟度等级")
        .with_border(gold, 3.0)
        .with_area_fill(0.4)
        .with_point(PointStyle {
            radius: Some(6.0),
            hover_radius: Some(8.0),
            border_width: Some(2.0),
            background_color: Some(rgb(NAVY)),
            border_color: Some(Color::rgb(1.0, 1.0, 1.0)),
            ..PointStyle::default()
        }),
    )
    .with_animation(AnimationConfig::ease_out_quart(1_500))
    .with_scale(
        "y",
        AxisConfig::new(11.0, faint_grid())
            .with_range(0.0, 5.5)
            .with_tick_format(TickFormat::Prefix("L".to_owned())),
    )
    .with_scale("x", AxisConfig::new(11.0, GridStyle::hidden()))
    .with_annotation(Annotation::VerticalLine {
        category: 2.0,
        color: rgb(GREEN).with_alpha(0.5),
        width: 2.0,
        dash: DashPattern::from_slice(&[5.0, 5.0]),
        label: Some(AnnotationLabel {
            content: "+AI边界".to_owned(),
            position: LabelPosition::Start,
        }),
    })
}

/// Weight of success factors.
#[must_use]
pub fn success_factors_chart() -> ChartConfig {
    ChartConfig::new(
        ChartKind::Doughnut,
        ["高层支持", "业务场景", "数据质量", "技术平台", "组织变革", "持续运营"],
    )
    .with_dataset(Dataset::new(
        vec![25.0, 20.0, 15.0, 15.0, 15.0, 10.0],
        palette(&[NAVY, GOLD, GREEN, BLUE, PURPLE, 0xe67e22]),
    ))
    .with_animation(AnimationConfig::ease_out_quart(1_500))
    .with_cutout_percent(60.0)
    .with_legend(
        LegendConfig::at(LegendPosition::Right, 12.0, 11.0)
            .with_point_style(Some(PointShape::Circle)),
    )
}

/// Budget split across investment areas.
#[must_use]
pub fn investment_split_chart() -> ChartConfig {
    ChartConfig::new(
        ChartKind::Doughnut,
        ["数据治理", "AIDD研发", "AI平台", "大模型算力", "办公入口+API"],
    )
    .with_dataset(Dataset::new(
        vec![80.0, 80.0, 60.0, 50.0, 28.0],
        palette(&[BLUE, RED, ORANGE, GREEN, PURPLE]),
    ))
    .with_animation(AnimationConfig::ease_out_quart(1_500))
    .with_cutout_percent(55.0)
}

/// Cumulative investment against cumulative return over five years.
#[must_use]
pub fn cumulative_roi_chart() -> ChartConfig {
    ChartConfig::new(ChartKind::Bar, ["第1年", "第2年", "第3年", "第4年", "第5年"])
        .with_dataset(
            Dataset::new(
                vec![350.0, 600.0, 850.0, 1_100.0, 1_350.0],
                Fill::Solid(rgb(RED)),
            )
            .with_label("累计投入")
            .with_border_radius(6.0),
        )
        .with_dataset(
            Dataset::new(
                vec![420.0, 920.0, 1_550.0, 2_350.0, 3_300.0],
                Fill::Solid(rgb(GREEN)),
            )
            .with_label("累计收益")
            .with_border_radius(6.0),
        )
        .with_animation(AnimationConfig::ease_out_quart(1_500))
        .with_scale(
            "y",
            AxisConfig::new(11.0, faint_grid())
                .begin_at_zero()
                .with_tick_format(TickFormat::Suffix("万".to_owned())),
        )
        .with_scale("x", AxisConfig::new(11.0, GridStyle::hidden()))
        .with_legend(LegendConfig::at(LegendPosition::Bottom, 15.0, 11.0))
}
