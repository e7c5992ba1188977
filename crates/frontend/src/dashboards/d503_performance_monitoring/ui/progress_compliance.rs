use crate::shared::charts::{BarChart, LineChart};
use crate::shared::components::ui::Badge;
use crate::shared::components::{CardAnimated, DateInput, PageHeader};
use crate::shared::icons::icon;
use crate::shared::notice::use_notice;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::dashboards::d503_performance_monitoring::progress_compliance::*;
use contracts::navigation::{PerformanceMonitoringView, SectionView};
use contracts::shared::search::filter_by_query;
use leptos::prelude::*;
use thaw::*;

fn status_variant(status: ProgressStatus) -> &'static str {
    match status {
        ProgressStatus::Normal => "success",
        ProgressStatus::Warning => "warning",
        ProgressStatus::Danger => "error",
    }
}

#[component]
pub fn ProgressCompliance() -> impl IntoView {
    let notice = use_notice();
    let projects = StoredValue::new(scheduled_projects());
    let query = RwSignal::new(String::new());
    let selected = RwSignal::new(1u32);

    let visible = Memo::new(move |_| projects.with_value(|p| filter_by_query(p, &query.get())));
    let current = Memo::new(move |_| {
        projects.with_value(|p| p.iter().find(|p| p.id == selected.get()).cloned())
    });

    // Deviation handling dialog
    let form_open = RwSignal::new(false);
    let defaults = DeviationForm::default();
    let measure = RwSignal::new(defaults.measure);
    let owner = RwSignal::new(defaults.owner);
    let due_date = RwSignal::new(defaults.due_date);

    view! {
        <PageFrame page=PerformanceMonitoringView::ProgressCompliance category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <PageHeader title=PerformanceMonitoringView::ProgressCompliance.title()>
                    <div class="search-box">
                        {icon("search")}
                        <Input value=query placeholder="搜索项目..." />
                    </div>
                </PageHeader>
            </div>

            <div class="page__content">
                <div class="split-layout">
                    <CardAnimated title="项目列表" style="flex: 1;">
                        <div class="select-list">
                            {move || visible.get().into_iter().map(|p| {
                                let id = p.id;
                                view! {
                                    <div
                                        class="select-list__item"
                                        class:select-list__item--active=move || selected.get() == id
                                        on:click=move |_| selected.set(id)
                                    >
                                        <div class="select-list__head">
                                            <span class="select-list__title">{p.name}</span>
                                            <Badge variant=status_variant(p.status)>{p.status.label()}</Badge>
                                        </div>
                                        <div class="muted">
                                            {format!("{} · {} 至 {}", p.organization, p.start_date, p.end_date)}
                                        </div>
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                    </CardAnimated>

                    <CardAnimated title="进度对比" delay_ms=80 style="flex: 2;">
                        {move || current.get().map(|p| {
                            let worst = p.worst_task().copied();
                            view! {
                                <div class="task-list">
                                    {p.tasks.iter().map(|t| {
                                        let lag = t.lag();
                                        view! {
                                            <div class="task-row" class:task-row--lagging=lag.is_some()>
                                                <div class="task-row__head">
                                                    <span class="task-row__name">{t.name}</span>
                                                    <span class="muted">{format!("{} 至 {}", t.start, t.end)}</span>
                                                </div>
                                                <div class="task-row__bars">
                                                    <div class="task-row__bar task-row__bar--plan" style=format!("width: {}%;", t.plan_progress)>
                                                        {format!("计划 {}%", t.plan_progress)}
                                                    </div>
                                                    <div class="task-row__bar task-row__bar--actual" style=format!("width: {}%;", t.actual_progress)>
                                                        {format!("实际 {}%", t.actual_progress)}
                                                    </div>
                                                </div>
                                                {lag.map(|l| view! {
                                                    <div class="task-row__lag">{format!("落后 {}%", l)}</div>
                                                })}
                                            </div>
                                        }
                                    }).collect_view()}
                                </div>
                                {worst.map(|t| view! {
                                    <div class="alert-banner alert-banner--warning">
                                        {icon("alert-triangle")}
                                        <div>
                                            <div class="alert-banner__title">
                                                {format!("进度偏差：{} 落后计划 {}%", t.name, t.lag().unwrap_or_default())}
                                            </div>
                                            <ul class="checklist">
                                                {lag_reasons().into_iter().map(|r| view! { <li>{r}</li> }).collect_view()}
                                            </ul>
                                        </div>
                                        <Button appearance=ButtonAppearance::Primary on_click=move |_| form_open.set(true)>
                                            "处理偏差"
                                        </Button>
                                    </div>
                                })}
                            }
                        })}
                    </CardAnimated>
                </div>

                <div class="card-grid card-grid--2">
                    <CardAnimated title="项目进度统计" delay_ms=160>
                        <BarChart data=progress_statistics() y_max=100.0 suffix="%" />
                    </CardAnimated>
                    <CardAnimated title="进度偏差趋势" delay_ms=240>
                        <LineChart data=deviation_trend() area=true suffix="%" />
                    </CardAnimated>
                </div>

                <CardAnimated title="进度异常项目" delay_ms=320>
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=true min_width=200.0>"项目名称"</TableHeaderCell>
                                <TableHeaderCell>"承建单位"</TableHeaderCell>
                                <TableHeaderCell>"计划进度"</TableHeaderCell>
                                <TableHeaderCell>"实际进度"</TableHeaderCell>
                                <TableHeaderCell>"偏差"</TableHeaderCell>
                                <TableHeaderCell>"原因"</TableHeaderCell>
                                <TableHeaderCell>"状态"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {progress_anomalies().into_iter().map(|a| view! {
                                <TableRow>
                                    <TableCell><TableCellLayout>{a.project}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{a.organization}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{format!("{}%", a.plan)}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{format!("{}%", a.actual)}</TableCellLayout></TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <span class="text-danger">{format!("{}%", a.deviation())}</span>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell><TableCellLayout>{a.reason}</TableCellLayout></TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <Badge variant=if a.handled { "success" } else { "warning" }>{a.state_label()}</Badge>
                                        </TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            }).collect_view()}
                        </TableBody>
                    </Table>
                </CardAnimated>
            </div>

            <Dialog open=form_open>
                <DialogSurface>
                    <DialogBody>
                        <DialogTitle>"进度偏差处理"</DialogTitle>
                        <DialogContent>
                            <Flex vertical=true gap=FlexGap::Small>
                                <label class="form-field">
                                    <span>"处理措施"</span>
                                    <Textarea value=measure attr:rows=3 />
                                </label>
                                <label class="form-field">
                                    <span>"责任人"</span>
                                    <Input value=owner />
                                </label>
                                <label class="form-field">
                                    <span>"完成期限"</span>
                                    <DateInput value=due_date />
                                </label>
                            </Flex>
                        </DialogContent>
                        <DialogActions>
                            <Button appearance=ButtonAppearance::Secondary on_click=move |_| form_open.set(false)>
                                "取消"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| {
                                    let target = current.with(|p| p.as_ref().map(|p| p.name).unwrap_or_default());
                                    notice.run_action("提交偏差处理", target);
                                    form_open.set(false);
                                }
                            >
                                "提交"
                            </Button>
                        </DialogActions>
                    </DialogBody>
                </DialogSurface>
            </Dialog>
        </PageFrame>
    }
}
