use crate::shared::components::ui::Badge;
use crate::shared::components::{
    use_table_pager, CardAnimated, PageHeader, ProgressRow, TablePagination,
};
use crate::shared::icons::icon;
use crate::shared::notice::use_notice;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::dashboards::d504_quality_effectiveness::indicator_assessment::*;
use contracts::navigation::{QualityEffectivenessView, SectionView};
use contracts::shared::search::Searchable;
use contracts::shared::status_filter::{filter_by_tab, tab_caption, StatusTab};
use leptos::prelude::*;
use thaw::*;

fn state_variant(state: ReviewState) -> &'static str {
    match state {
        ReviewState::Reviewed => "success",
        ReviewState::Reviewing => "primary",
        ReviewState::Abnormal => "error",
    }
}

#[component]
pub fn IndicatorAssessment() -> impl IntoView {
    let notice = use_notice();
    let items = StoredValue::new(indicators());
    let stats = items.with_value(|i| ReviewStatistics::from_indicators(i));

    let selected_tab = RwSignal::new(IndicatorTab::All.id().to_string());
    let active_tab =
        Memo::new(move |_| IndicatorTab::parse(&selected_tab.get()).unwrap_or(IndicatorTab::All));
    let query = RwSignal::new(String::new());

    let rows = Memo::new(move |_| {
        let query = query.get();
        items.with_value(|i| {
            filter_by_tab(i, active_tab.get())
                .into_iter()
                .filter(|i| i.matches_query(&query))
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
    let detail = RwSignal::new(None::<Indicator>);

    view! {
        <PageFrame page=QualityEffectivenessView::IndicatorAssessment category=PAGE_CAT_LIST>
            <div class="page__header">
                <PageHeader title=QualityEffectivenessView::IndicatorAssessment.title()>
                    <div class="search-box">
                        {icon("search")}
                        <Input value=query placeholder="搜索指标、项目或数据来源..." />
                    </div>
                </PageHeader>
            </div>

            <div class="page__content">
                <TabList selected_value=selected_tab>
                    {IndicatorTab::ALL
                        .iter()
                        .map(|&tab| {
                            let caption = items.with_value(|i| tab_caption(i, tab));
                            view! { <Tab value=tab.id()>{caption}</Tab> }
                        })
                        .collect_view()}
                </TabList>

                <Card>
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=true min_width=160.0>"指标名称"</TableHeaderCell>
                                <TableHeaderCell min_width=200.0>"所属项目"</TableHeaderCell>
                                <TableHeaderCell>"数据来源"</TableHeaderCell>
                                <TableHeaderCell>"采集时间"</TableHeaderCell>
                                <TableHeaderCell>"指标值"</TableHeaderCell>
                                <TableHeaderCell>"状态"</TableHeaderCell>
                                <TableHeaderCell>"操作"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                let page = rows.with(|r| pager.paginator(r.len()).slice(r).to_vec());
                                page.into_iter().map(|i| view! {
                                    <TableRow>
                                        <TableCell><TableCellLayout>{i.name}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{i.project}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{i.source.label()}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{i.collect_time}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{i.value}</TableCellLayout></TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <Badge variant=state_variant(i.status)>{i.status.label()}</Badge>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    size=ButtonSize::Small
                                                    on_click=move |_| {
                                                        detail.set(Some(i));
                                                        detail_open.set(true);
                                                    }
                                                >
                                                    "查看详情"
                                                </Button>
                                                {(i.status == ReviewState::Reviewing).then(|| view! {
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        size=ButtonSize::Small
                                                        on_click=move |_| notice.run_action("审核", i.name)
                                                    >
                                                        "审核"
                                                    </Button>
                                                })}
                                            </TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }).collect_view()
                            }}
                        </TableBody>
                    </Table>
                    <TablePagination pager=pager total=total />
                </Card>

                <div class="card-grid card-grid--2">
                    <CardAnimated title="数据异常提醒" delay_ms=80>
                        {data_anomalies().into_iter().map(|a| {
                            let class = if a.critical { "finding finding--error" } else { "finding finding--warning" };
                            view! {
                                <div class=class>
                                    <div class="finding__head">
                                        {icon("alert-triangle")}
                                        <span class="finding__title">{a.title}</span>
                                        <span class="muted">{a.date}</span>
                                    </div>
                                    <div class="finding__detail">{a.detail}</div>
                                </div>
                            }
                        }).collect_view()}
                    </CardAnimated>
                    <CardAnimated title="审核统计" delay_ms=160>
                        <div class="metric-row">
                            <span class="metric-row__label">"指标总数"</span>
                            <span class="metric-row__value">{stats.total}</span>
                        </div>
                        <div class="metric-row">
                            <span class="metric-row__label">"已审核"</span>
                            <span class="metric-row__value">{stats.reviewed}</span>
                        </div>
                        <div class="metric-row">
                            <span class="metric-row__label">"审核中"</span>
                            <span class="metric-row__value">{stats.reviewing}</span>
                        </div>
                        <div class="metric-row">
                            <span class="metric-row__label">"异常"</span>
                            <span class="metric-row__value">{stats.abnormal}</span>
                        </div>
                        <ProgressRow label="审核进度" percent=stats.progress() />
                    </CardAnimated>
                </div>
            </div>

            <Dialog open=detail_open>
                <DialogSurface>
                    <DialogBody>
                        <DialogTitle>"指标详情"</DialogTitle>
                        <DialogContent>
                            {move || detail.get().map(|i| view! {
                                <div class="detail-grid">
                                    <div><span class="detail-grid__label">"指标名称"</span>{i.name}</div>
                                    <div><span class="detail-grid__label">"所属项目"</span>{i.project}</div>
                                    <div><span class="detail-grid__label">"指标值"</span>{i.value}</div>
                                    <div><span class="detail-grid__label">"历史均值"</span>{i.historical_average}</div>
                                    <div><span class="detail-grid__label">"采集时间"</span>{i.collect_time}</div>
                                    <div><span class="detail-grid__label">"采集人"</span>{COLLECTOR}</div>
                                </div>
                                <h4 class="section-title">"数据来源"</h4>
                                <div class="detail-grid">
                                    <div><span class="detail-grid__label">"来源"</span>{i.source.label()}</div>
                                    <div><span class="detail-grid__label">"采集方式"</span>{i.source.method()}</div>
                                </div>
                                <p>{i.source.process()}</p>
                                {i.abnormal_reason.map(|reason| view! {
                                    <div class="alert-banner alert-banner--error">
                                        {icon("alert-triangle")}
                                        <span>{format!("{}：{}", reason, ANOMALY_NOTICE)}</span>
                                    </div>
                                })}
                            })}
                        </DialogContent>
                        <DialogActions>
                            <Button appearance=ButtonAppearance::Secondary on_click=move |_| detail_open.set(false)>
                                "关闭"
                            </Button>
                            {move || detail.get().filter(|i| i.status != ReviewState::Reviewed).map(|i| view! {
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    on_click=move |_| {
                                        notice.run_action("审核通过", i.name);
                                        detail_open.set(false);
                                    }
                                >
                                    "审核通过"
                                </Button>
                            })}
                        </DialogActions>
                    </DialogBody>
                </DialogSurface>
            </Dialog>
        </PageFrame>
    }
}
