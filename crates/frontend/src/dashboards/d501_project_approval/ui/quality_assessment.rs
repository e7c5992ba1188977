use crate::shared::charts::{BarChart, DoughnutChart};
use crate::shared::components::ui::Badge;
use crate::shared::components::{CardAnimated, PageHeader, ProgressRow, StatCard, StatTone};
use crate::shared::notice::use_notice;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::dashboards::d501_project_approval::quality_assessment::*;
use contracts::navigation::{ProjectApprovalView, SectionView};
use contracts::shared::format::format_percent;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn QualityAssessment() -> impl IntoView {
    let notice = use_notice();
    let auditors = StoredValue::new(auditors());
    let summary = quality_summary();
    let grades = grade_distribution();

    // Local only: the fixtures do not change with the period
    let period = RwSignal::new(AssessmentPeriod::default().code().to_string());
    Effect::new(move |_| {
        let code = period.get();
        match AssessmentPeriod::from_code(&code) {
            Some(p) => log::debug!("assessment period: {}", p.label()),
            None => log::warn!("unknown assessment period '{}'", code),
        }
    });

    let detail_open = RwSignal::new(false);
    let detail = RwSignal::new(None::<Auditor>);

    view! {
        <PageFrame page=ProjectApprovalView::QualityAssessment category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <PageHeader title=ProjectApprovalView::QualityAssessment.title()>
                    <Select value=period size=SelectSize::Small>
                        {AssessmentPeriod::ALL
                            .iter()
                            .map(|p| view! { <option value=p.code()>{p.label()}</option> })
                            .collect_view()}
                    </Select>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| notice.run_action("导出报告", "审核质量评估")
                    >
                        "导出报告"
                    </Button>
                </PageHeader>
            </div>

            <div class="page__content">
                <div class="card-grid card-grid--2">
                    <CardAnimated title="整体审核质量评分">
                        <div class="score-panel">
                            <div class="score-panel__value">{summary.score}</div>
                            <div class="score-panel__caption">"综合评分"</div>
                        </div>
                        <div class="stat-grid stat-grid--2">
                            <StatCard label="审核准确率" value=format_percent(summary.accuracy) tone=StatTone::Success />
                            <StatCard label="平均审核时长" value=format!("{}小时", summary.avg_hours) />
                        </div>
                        <DoughnutChart
                            labels=grades.labels.clone()
                            values=grades.series[0].values.clone()
                            colors=GRADE_COLORS.to_vec()
                            center_label="评分分布"
                        />
                    </CardAnimated>
                    <CardAnimated title="审核人员绩效对比" delay_ms=80>
                        <BarChart
                            data=auditors.with_value(|a| auditor_performance(a))
                            y_max=100.0
                            suffix="%"
                        />
                    </CardAnimated>
                </div>

                <CardAnimated title="审核人员评估详情" delay_ms=160>
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"审核人员"</TableHeaderCell>
                                <TableHeaderCell>"部门"</TableHeaderCell>
                                <TableHeaderCell>"审核项目数"</TableHeaderCell>
                                <TableHeaderCell min_width=160.0>"审核准确性"</TableHeaderCell>
                                <TableHeaderCell min_width=160.0>"审核效率"</TableHeaderCell>
                                <TableHeaderCell>"操作"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {auditors.get_value().into_iter().map(|a| {
                                let for_dialog = a.clone();
                                view! {
                                    <TableRow>
                                        <TableCell><TableCellLayout>{a.name}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{a.department}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{a.project_count}</TableCellLayout></TableCell>
                                        <TableCell><ProgressRow label="" percent=a.accuracy as f64 /></TableCell>
                                        <TableCell><ProgressRow label="" percent=a.efficiency as f64 color="#4ade80" /></TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    size=ButtonSize::Small
                                                    on_click=move |_| {
                                                        detail.set(Some(for_dialog.clone()));
                                                        detail_open.set(true);
                                                    }
                                                >
                                                    "详细分析"
                                                </Button>
                                            </TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                            }).collect_view()}
                        </TableBody>
                    </Table>
                </CardAnimated>
            </div>

            <Dialog open=detail_open>
                <DialogSurface>
                    <DialogBody>
                        <DialogTitle>
                            {move || detail.with(|d| {
                                d.as_ref()
                                    .map(|a| format!("{} - 审核质量详细分析", a.name))
                                    .unwrap_or_default()
                            })}
                        </DialogTitle>
                        <DialogContent>
                            {move || detail.get().map(|a| view! {
                                <div class="stat-grid stat-grid--3">
                                    <StatCard label="审核项目数" value=a.project_count.to_string() />
                                    <StatCard label="审核正确率" value=format_percent(a.correct_rate()) tone=StatTone::Success />
                                    <StatCard label="平均审核时长" value=a.avg_duration_label() />
                                </div>
                                <h4 class="section-title">"最近审核案例"</h4>
                                {recent_cases().into_iter().map(|c| view! {
                                    <div class="case-row">
                                        <div>
                                            <div class="case-row__title">{c.project}</div>
                                            <div class="muted">{format!("审核结果：{} · 用时 {} 小时", c.result, c.hours)}</div>
                                        </div>
                                        <Badge variant=if c.correct { "success" } else { "error" }>
                                            {if c.correct { "正确" } else { "有误" }}
                                        </Badge>
                                    </div>
                                }).collect_view()}
                            })}
                        </DialogContent>
                        <DialogActions>
                            <Button appearance=ButtonAppearance::Secondary on_click=move |_| detail_open.set(false)>
                                "关闭"
                            </Button>
                        </DialogActions>
                    </DialogBody>
                </DialogSurface>
            </Dialog>
        </PageFrame>
    }
}
