use crate::shared::charts::{BarChart, DoughnutChart};
use crate::shared::components::ui::Badge;
use crate::shared::components::{CardAnimated, DateInput, PageHeader, StatCard, StatTone};
use crate::shared::icons::icon;
use crate::shared::notice::use_notice;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::dashboards::d504_quality_effectiveness::goal_achievement::*;
use contracts::navigation::{QualityEffectivenessView, SectionView};
use contracts::shared::format::format_percent;
use contracts::shared::search::filter_by_query;
use leptos::prelude::*;
use thaw::*;

fn stars(rating: &ProjectRating) -> String {
    let filled = rating.stars();
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

#[component]
pub fn GoalAchievement() -> impl IntoView {
    let notice = use_notice();
    let goals = StoredValue::new(quality_goals());
    let summary = goals.with_value(|g| AchievementSummary::from_goals(g));
    let query = RwSignal::new(String::new());
    let visible = Memo::new(move |_| goals.with_value(|g| filter_by_query(g, &query.get())));

    let detail_open = RwSignal::new(false);
    let detail = RwSignal::new(None::<QualityGoal>);

    // Improvement plan for missed goals
    let defaults = ImprovementForm::default();
    let measures = RwSignal::new(defaults.measures);
    let owner = RwSignal::new(defaults.owner);
    let due_date = RwSignal::new(defaults.due_date);

    let submit_plan = move |_| {
        if let Some(goal) = detail.get_untracked() {
            log::debug!(
                "improvement plan for {}: owner={}, due={}",
                goal.indicator,
                owner.get_untracked(),
                due_date.get_untracked()
            );
            notice.run_action("提交改进计划", goal.indicator);
        }
        detail_open.set(false);
    };

    view! {
        <PageFrame page=QualityEffectivenessView::GoalAchievement category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <PageHeader title=QualityEffectivenessView::GoalAchievement.title()>
                    <div class="search-box">
                        {icon("search")}
                        <Input value=query placeholder="搜索指标或项目..." />
                    </div>
                </PageHeader>
            </div>

            <div class="page__content">
                <div class="stat-grid stat-grid--4">
                    <StatCard label="质量目标总数" value=summary.total.to_string() icon_name="award" />
                    <StatCard label="已达成" value=summary.achieved.to_string() tone=StatTone::Success icon_name="check-circle" />
                    <StatCard label="未达成" value=summary.missed().to_string() tone=StatTone::Error icon_name="alert-triangle" />
                    <StatCard label="达成率" value=format_percent(summary.rate()) tone=StatTone::Warning icon_name="bar-chart" />
                </div>

                <div class="card-grid card-grid--2">
                    <CardAnimated title="目标值与实际值对比">
                        <BarChart data=goals.with_value(|g| goal_comparison(g)) />
                    </CardAnimated>
                    <CardAnimated title="目标达成比例" delay_ms=80>
                        <DoughnutChart
                            labels=vec!["已达成", "未达成"]
                            values=vec![summary.achieved as f64, summary.missed() as f64]
                            colors=vec!["#10b981", "#ef4444"]
                            center_label=format_percent(summary.rate())
                        />
                    </CardAnimated>
                </div>

                <Card>
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=true min_width=160.0>"质量指标"</TableHeaderCell>
                                <TableHeaderCell min_width=200.0>"所属项目"</TableHeaderCell>
                                <TableHeaderCell>"目标值"</TableHeaderCell>
                                <TableHeaderCell>"实际值"</TableHeaderCell>
                                <TableHeaderCell>"达成状态"</TableHeaderCell>
                                <TableHeaderCell>"操作"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || visible.get().into_iter().map(|g| view! {
                                <TableRow>
                                    <TableCell><TableCellLayout>{g.indicator}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{g.project}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{g.target}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{g.actual}</TableCellLayout></TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <Badge variant=if g.achieved { "success" } else { "error" }>{g.state_label()}</Badge>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <Button
                                                appearance=ButtonAppearance::Subtle
                                                size=ButtonSize::Small
                                                on_click=move |_| {
                                                    detail.set(Some(g));
                                                    detail_open.set(true);
                                                }
                                            >
                                                "查看详情"
                                            </Button>
                                        </TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            }).collect_view()}
                        </TableBody>
                    </Table>
                </Card>

                <CardAnimated title="项目质量评级" delay_ms=160>
                    <div class="card-grid card-grid--3">
                        {project_ratings().into_iter().map(|r| view! {
                            <div class="rating">
                                <div class="rating__project">{r.project}</div>
                                <div class="rating__stars">{stars(&r)}</div>
                                <div class="muted">{format!("{:.1} 分 · {}", r.score, r.grade())}</div>
                            </div>
                        }).collect_view()}
                    </div>
                </CardAnimated>
            </div>

            <Dialog open=detail_open>
                <DialogSurface>
                    <DialogBody>
                        <DialogTitle>"质量目标详情"</DialogTitle>
                        <DialogContent>
                            {move || detail.get().map(|g| view! {
                                <div class="detail-grid">
                                    <div><span class="detail-grid__label">"质量指标"</span>{g.indicator}</div>
                                    <div><span class="detail-grid__label">"所属项目"</span>{g.project}</div>
                                    <div><span class="detail-grid__label">"目标值"</span>{g.target}</div>
                                    <div><span class="detail-grid__label">"实际值"</span>{g.actual}</div>
                                </div>
                                <p>{g.explanation()}</p>
                                <h4 class="section-title">"评估信息"</h4>
                                <div class="detail-grid">
                                    <div><span class="detail-grid__label">"评估人"</span>{EVALUATOR}</div>
                                    <div><span class="detail-grid__label">"评估日期"</span>{EVALUATION_DATE}</div>
                                    <div><span class="detail-grid__label">"评估方法"</span>{EVALUATION_METHOD}</div>
                                    <div><span class="detail-grid__label">"数据来源"</span>{EVALUATION_SOURCE}</div>
                                </div>
                                {(!g.achieved).then(|| view! {
                                    <div class="alert-banner alert-banner--error">{icon("alert-triangle")}<span>{MISS_ANALYSIS}</span></div>
                                    <h4 class="section-title">"改进措施"</h4>
                                    <Flex vertical=true gap=FlexGap::Small>
                                        <Textarea value=measures attr:rows=4 />
                                        <label class="filter-panel__field">
                                            <span>"负责人"</span>
                                            <Input value=owner />
                                        </label>
                                        <DateInput value=due_date title="完成期限" />
                                    </Flex>
                                })}
                            })}
                        </DialogContent>
                        <DialogActions>
                            <Button appearance=ButtonAppearance::Secondary on_click=move |_| detail_open.set(false)>
                                "关闭"
                            </Button>
                            {move || detail.get().filter(|g| !g.achieved).map(|_| view! {
                                <Button appearance=ButtonAppearance::Primary on_click=submit_plan>
                                    "提交改进计划"
                                </Button>
                            })}
                        </DialogActions>
                    </DialogBody>
                </DialogSurface>
            </Dialog>
        </PageFrame>
    }
}
