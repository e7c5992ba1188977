use crate::shared::charts::{BarChart, DoughnutChart};
use crate::shared::components::ui::Badge;
use crate::shared::components::{
    use_table_pager, CardAnimated, PageHeader, ProgressRow, StatCard, StatTone, TablePagination,
};
use crate::shared::icons::icon;
use crate::shared::notice::use_notice;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::dashboards::d503_performance_monitoring::quality_compliance::*;
use contracts::navigation::{PerformanceMonitoringView, SectionView};
use contracts::shared::format::format_percent;
use contracts::shared::search::Searchable;
use contracts::shared::status_filter::{filter_by_tab, tab_caption, StatusTab};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn QualityCompliance() -> impl IntoView {
    let notice = use_notice();
    let checks = StoredValue::new(quality_checks());
    let selected_tab = RwSignal::new(CheckTab::All.id().to_string());
    let active_tab = Memo::new(move |_| CheckTab::parse(&selected_tab.get()).unwrap_or(CheckTab::All));
    let query = RwSignal::new(String::new());

    let rows = Memo::new(move |_| {
        let query = query.get();
        checks.with_value(|c| {
            filter_by_tab(c, active_tab.get())
                .into_iter()
                .filter(|c| c.matches_query(&query))
                .collect::<Vec<_>>()
        })
    });

    let pager = use_table_pager();
    let total = Signal::derive(move || rows.with(|r| r.len()));
    Effect::new(move |_| {
        rows.track();
        pager.reset();
    });

    let detail_open = RwSignal::new(false);
    let detail = RwSignal::new(None::<QualityCheck>);

    let monthly = monthly_quality();
    let rect = rectification();

    view! {
        <PageFrame page=PerformanceMonitoringView::QualityCompliance category=PAGE_CAT_LIST>
            <div class="page__header">
                <PageHeader title=PerformanceMonitoringView::QualityCompliance.title()>
                    <div class="search-box">
                        {icon("search")}
                        <Input value=query placeholder="搜索检查记录..." />
                    </div>
                </PageHeader>
            </div>

            <div class="page__content">
                <div class="stat-grid stat-grid--4">
                    <StatCard label="本月质量检查" value=monthly.checks.to_string() icon_name="clipboard-check" />
                    <StatCard label="不合格次数" value=monthly.failures.to_string() tone=StatTone::Error icon_name="alert-triangle" />
                    <StatCard label="检查合格率" value=format_percent((monthly.pass_rate() * 10.0).round() / 10.0) tone=StatTone::Success icon_name="check-circle" />
                    <StatCard label="待整改问题" value=monthly.pending_rectification.to_string() tone=StatTone::Warning icon_name="clock" />
                </div>

                <CardAnimated title="质量检查统计">
                    <BarChart data=check_statistics() />
                </CardAnimated>

                <TabList selected_value=selected_tab>
                    {CheckTab::ALL
                        .iter()
                        .map(|&tab| {
                            let caption = checks.with_value(|c| tab_caption(c, tab));
                            view! { <Tab value=tab.id()>{caption}</Tab> }
                        })
                        .collect_view()}
                </TabList>

                <Card>
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=true min_width=200.0>"项目名称"</TableHeaderCell>
                                <TableHeaderCell>"检查时间"</TableHeaderCell>
                                <TableHeaderCell>"检查人"</TableHeaderCell>
                                <TableHeaderCell min_width=220.0>"检查标准"</TableHeaderCell>
                                <TableHeaderCell>"检查结果"</TableHeaderCell>
                                <TableHeaderCell>"操作"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                let rectifying = active_tab.get() == CheckTab::Rectification;
                                let page = rows.with(|r| pager.paginator(r.len()).slice(r).to_vec());
                                page.into_iter().map(|c| {
                                    let for_dialog = c.clone();
                                    let project = c.project;
                                    view! {
                                        <TableRow>
                                            <TableCell><TableCellLayout>{c.project}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{c.check_time}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{c.inspector}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{c.standard}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <Badge variant=if c.qualified { "success" } else { "error" }>{c.result_label()}</Badge>
                                                </TableCellLayout>
                                            </TableCell>
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
                                                        "查看详情"
                                                    </Button>
                                                    {rectifying.then(|| view! {
                                                        <Button
                                                            appearance=ButtonAppearance::Subtle
                                                            size=ButtonSize::Small
                                                            on_click=move |_| notice.run_action("督促整改", project)
                                                        >
                                                            "督促整改"
                                                        </Button>
                                                    })}
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }).collect_view()
                            }}
                        </TableBody>
                    </Table>
                    <TablePagination pager=pager total=total />
                </Card>

                <div class="card-grid card-grid--2">
                    <CardAnimated title="常见质量问题分布" delay_ms=80>
                        {common_problems()
                            .into_iter()
                            .map(|s| view! { <ProgressRow label=s.label percent=s.percent /> })
                            .collect_view()}
                    </CardAnimated>
                    <CardAnimated title="整改完成情况" delay_ms=160>
                        <DoughnutChart
                            labels=vec!["已整改", "待整改"]
                            values=vec![rect.done as f64, rect.pending as f64]
                            colors=vec!["#10b981", "#f59e0b"]
                            center_label=format_percent(rect.completion_rate())
                        />
                    </CardAnimated>
                </div>
            </div>

            <Dialog open=detail_open>
                <DialogSurface>
                    <DialogBody>
                        <DialogTitle>"质量检查详情"</DialogTitle>
                        <DialogContent>
                            {move || detail.get().map(|c| {
                                let qualified = c.qualified;
                                view! {
                                    <div class="detail-grid">
                                        <div><span class="detail-grid__label">"项目名称"</span>{c.project}</div>
                                        <div><span class="detail-grid__label">"检查时间"</span>{c.check_time}</div>
                                        <div><span class="detail-grid__label">"检查人"</span>{c.inspector}</div>
                                        <div><span class="detail-grid__label">"检查标准"</span>{c.standard}</div>
                                    </div>
                                    <h4 class="section-title">"检查项目"</h4>
                                    <ul class="checklist">
                                        {CHECK_ITEMS.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
                                    </ul>
                                    {(!qualified).then(|| view! {
                                        <h4 class="section-title">"发现问题"</h4>
                                        <ul class="issue-list">
                                            {c.issues.iter().map(|i| view! { <li>{*i}</li> }).collect_view()}
                                        </ul>
                                        <h4 class="section-title">"整改要求"</h4>
                                        <ul class="checklist">
                                            {RECTIFICATION_REQUIREMENTS.iter().map(|r| view! { <li>{*r}</li> }).collect_view()}
                                        </ul>
                                    })}
                                }
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
