use crate::shared::charts::LineChart;
use crate::shared::components::ui::{severity_variant, Badge};
use crate::shared::components::{
    use_table_pager, CardAnimated, PageHeader, ProgressRow, StatCard, StatTone, TablePagination,
};
use crate::shared::icons::icon;
use crate::shared::notice::use_notice;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::dashboards::d503_performance_monitoring::fund_usage::*;
use contracts::navigation::{PerformanceMonitoringView, SectionView};
use contracts::shared::format::{format_percent, format_wan, format_yuan};
use contracts::shared::status_filter::{filter_by_tab, tab_caption, StatusTab};
use leptos::prelude::*;
use thaw::*;

fn status_variant(status: ApprovalStatus) -> &'static str {
    match status {
        ApprovalStatus::Approved => "success",
        ApprovalStatus::Pending => "warning",
    }
}

#[component]
pub fn FundUsage() -> impl IntoView {
    let notice = use_notice();
    let records = StoredValue::new(fund_records());
    let lines = budget_lines();
    let totals = BudgetTotals::from_lines(&lines);

    let selected_tab = RwSignal::new(FundTab::All.id().to_string());
    let active_tab = Memo::new(move |_| FundTab::parse(&selected_tab.get()).unwrap_or(FundTab::All));

    let query = RwSignal::new(String::new());
    let project = RwSignal::new("all".to_string());
    let min_amount = RwSignal::new(String::new());
    let max_amount = RwSignal::new(String::new());

    let filter = Memo::new(move |_| FundFilter {
        query: query.get(),
        project: Some(project.get()).filter(|p| p != "all"),
        min_amount: parse_amount_input(&min_amount.get()),
        max_amount: parse_amount_input(&max_amount.get()),
    });

    let rows = Memo::new(move |_| {
        let tab = active_tab.get();
        records.with_value(|r| filter.with(|f| f.apply(&filter_by_tab(r, tab))))
    });

    let pager = use_table_pager();
    let total = Signal::derive(move || rows.with(|r| r.len()));
    Effect::new(move |_| {
        rows.track();
        pager.reset();
    });

    let reset_filter = move |_| {
        query.set(String::new());
        project.set("all".to_string());
        min_amount.set(String::new());
        max_amount.set(String::new());
    };

    let detail_open = RwSignal::new(false);
    let detail = RwSignal::new(None::<FundRecord>);

    view! {
        <PageFrame page=PerformanceMonitoringView::FundUsage category=PAGE_CAT_LIST>
            <div class="page__header">
                <PageHeader title=PerformanceMonitoringView::FundUsage.title() />
            </div>

            <div class="page__content">
                <div class="stat-grid stat-grid--4">
                    <StatCard label="预算总额" value=format_yuan(totals.budget) icon_name="dollar-sign" />
                    <StatCard label="已使用资金" value=format_yuan(totals.used) tone=StatTone::Success icon_name="check-circle" />
                    <StatCard label="剩余资金" value=format_yuan(totals.remaining()) icon_name="clock" />
                    <StatCard
                        label="资金使用率"
                        value=format_percent((totals.usage_rate() * 100.0).round() / 100.0)
                        tone=StatTone::Warning
                        icon_name="bar-chart"
                    />
                </div>

                <div class="card-grid card-grid--2">
                    <CardAnimated title="预算执行趋势">
                        <LineChart data=execution_trend() y_max=100.0 area=true suffix="%" />
                    </CardAnimated>
                    <CardAnimated title="预算科目执行情况" delay_ms=80>
                        {lines
                            .iter()
                            .map(|l| {
                                let caption = format!(
                                    "{} / {} ({})",
                                    format_wan(l.actual),
                                    format_wan(l.budget),
                                    format_percent(l.execution_rate().round()),
                                );
                                view! { <ProgressRow label=l.category percent=l.execution_rate() caption=caption /> }
                            })
                            .collect_view()}
                    </CardAnimated>
                </div>

                <Card>
                    <div class="filter-panel">
                        <label class="filter-panel__field">
                            <span>"关键词"</span>
                            <Input value=query placeholder="项目、用途或经办人" />
                        </label>
                        <label class="filter-panel__field">
                            <span>"项目"</span>
                            <Select value=project>
                                <option value="all">"全部项目"</option>
                                {record_projects()
                                    .into_iter()
                                    .map(|p| view! { <option value=p>{p}</option> })
                                    .collect_view()}
                            </Select>
                        </label>
                        <div class="filter-panel__field">
                            <span>"金额范围"</span>
                            <div class="filter-panel__range">
                                <Input value=min_amount placeholder="最小金额" />
                                <span>"至"</span>
                                <Input value=max_amount placeholder="最大金额" />
                            </div>
                        </div>
                        <Button appearance=ButtonAppearance::Secondary on_click=reset_filter>
                            "重置"
                        </Button>
                    </div>

                    <TabList selected_value=selected_tab>
                        {FundTab::ALL
                            .iter()
                            .map(|&tab| {
                                let caption = records.with_value(|r| tab_caption(r, tab));
                                view! { <Tab value=tab.id()>{caption}</Tab> }
                            })
                            .collect_view()}
                    </TabList>

                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=true min_width=200.0>"项目名称"</TableHeaderCell>
                                <TableHeaderCell>"日期"</TableHeaderCell>
                                <TableHeaderCell>"类型"</TableHeaderCell>
                                <TableHeaderCell>"金额"</TableHeaderCell>
                                <TableHeaderCell>"用途"</TableHeaderCell>
                                <TableHeaderCell>"经办人"</TableHeaderCell>
                                <TableHeaderCell>"状态"</TableHeaderCell>
                                <TableHeaderCell>"操作"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                let page = rows.with(|r| pager.paginator(r.len()).slice(r).to_vec());
                                if page.is_empty() {
                                    return view! {
                                        <TableRow>
                                            <TableCell><div class="empty-state">"没有符合条件的记录"</div></TableCell>
                                        </TableRow>
                                    }.into_any();
                                }
                                page.into_iter().map(|r| {
                                    let amount_class = match r.kind {
                                        FlowKind::Income => "amount amount--income",
                                        FlowKind::Expense => "amount amount--expense",
                                    };
                                    view! {
                                        <TableRow>
                                            <TableCell><TableCellLayout>{r.project}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{r.date}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{r.kind.label()}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class=amount_class>{format_yuan(r.amount)}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell><TableCellLayout>{r.purpose}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{r.operator}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <Badge variant=status_variant(r.status)>{r.status.label()}</Badge>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        size=ButtonSize::Small
                                                        on_click=move |_| {
                                                            detail.set(Some(r));
                                                            detail_open.set(true);
                                                        }
                                                    >
                                                        "查看详情"
                                                    </Button>
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }).collect_view().into_any()
                            }}
                        </TableBody>
                    </Table>
                    <TablePagination pager=pager total=total />
                </Card>

                <div class="card-grid card-grid--2">
                    <CardAnimated title="资金预警" delay_ms=120>
                        {fund_alerts()
                            .into_iter()
                            .map(|a| view! {
                                <div class="finding">
                                    <div class="finding__head">
                                        {icon("alert-triangle")}
                                        <span class="finding__title">{a.project}</span>
                                        <Badge variant=severity_variant(a.severity)>{a.severity.risk_label()}</Badge>
                                    </div>
                                    <div class="finding__detail">{a.message}</div>
                                </div>
                            })
                            .collect_view()}
                    </CardAnimated>
                    <CardAnimated title="资金使用效率" delay_ms=200>
                        {efficiency_metrics()
                            .into_iter()
                            .map(|m| view! {
                                <div class="metric-row">
                                    <span class="metric-row__label">{m.label}</span>
                                    <span class="metric-row__value">{m.value}</span>
                                </div>
                            })
                            .collect_view()}
                    </CardAnimated>
                </div>
            </div>

            <Dialog open=detail_open>
                <DialogSurface>
                    <DialogBody>
                        <DialogTitle>"资金记录详情"</DialogTitle>
                        <DialogContent>
                            {move || detail.get().map(|r| view! {
                                <div class="detail-grid">
                                    <div><span class="detail-grid__label">"项目名称"</span>{r.project}</div>
                                    <div><span class="detail-grid__label">"日期"</span>{r.date}</div>
                                    <div><span class="detail-grid__label">"类型"</span>{r.kind.label()}</div>
                                    <div><span class="detail-grid__label">"金额"</span>{format_yuan(r.amount)}</div>
                                    <div><span class="detail-grid__label">"用途"</span>{r.purpose}</div>
                                    <div><span class="detail-grid__label">"经办人"</span>{r.operator}</div>
                                </div>
                                <h4 class="section-title">"详细说明"</h4>
                                <p>{r.description()}</p>
                                <h4 class="section-title">"审批信息"</h4>
                                <div class="detail-grid">
                                    <div><span class="detail-grid__label">"申请人"</span>{DETAIL_APPLICANT}</div>
                                    <div><span class="detail-grid__label">"申请时间"</span>{DETAIL_APPLY_TIME}</div>
                                    <div><span class="detail-grid__label">"审批状态"</span>{r.status.label()}</div>
                                    <div>
                                        <span class="detail-grid__label">"审批时间"</span>
                                        {if r.awaits_approval() { "-" } else { DETAIL_APPROVE_TIME }}
                                    </div>
                                </div>
                                <h4 class="section-title">"附件"</h4>
                                <div class="attachment">{icon("file-contract")}<span>{DETAIL_ATTACHMENT}</span></div>
                            })}
                        </DialogContent>
                        <DialogActions>
                            <Button appearance=ButtonAppearance::Secondary on_click=move |_| detail_open.set(false)>
                                "关闭"
                            </Button>
                            {move || detail.get().filter(|r| r.awaits_approval()).map(|r| view! {
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    on_click=move |_| {
                                        notice.run_action("审批通过", r.project);
                                        detail_open.set(false);
                                    }
                                >
                                    "审批通过"
                                </Button>
                            })}
                        </DialogActions>
                    </DialogBody>
                </DialogSurface>
            </Dialog>
        </PageFrame>
    }
}
