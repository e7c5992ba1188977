use crate::shared::charts::{BarChart, DoughnutChart, LineChart};
use crate::shared::components::ui::Badge;
use crate::shared::components::{
    use_table_pager, CardAnimated, DateInput, LogList, PageHeader, ProgressRow, StatCard,
    StatTone, TablePagination, Timeline,
};
use crate::shared::icons::icon;
use crate::shared::notice::use_notice;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::dashboards::d501_project_approval::audit_monitoring::*;
use contracts::navigation::{ProjectApprovalView, SectionView};
use contracts::shared::format::format_percent;
use contracts::shared::search::filter_by_query;
use contracts::shared::status_filter::{count_for, filter_by_tab, tab_caption, StatusTab};
use leptos::prelude::*;
use thaw::*;

fn status_variant(status: AuditStatus) -> &'static str {
    match status {
        AuditStatus::Normal => "success",
        AuditStatus::Warning => "warning",
        AuditStatus::Danger => "error",
    }
}

#[component]
pub fn AuditMonitoring() -> impl IntoView {
    let projects = StoredValue::new(audit_projects());
    let selected_tab = RwSignal::new(AuditTab::All.id().to_string());
    let active_tab = Memo::new(move |_| AuditTab::parse(&selected_tab.get()).unwrap_or(AuditTab::All));

    // Filter panel
    let query = RwSignal::new(String::new());
    let organization = RwSignal::new("all".to_string());
    let node = RwSignal::new("all".to_string());
    let date_from = RwSignal::new(String::new());
    let date_to = RwSignal::new(String::new());

    let filter = Memo::new(move |_| AuditFilter {
        query: query.get(),
        organization: select_value(&organization.get()),
        node: select_value(&node.get()),
        from: parse_date_input(&date_from.get()),
        to: parse_date_input(&date_to.get()),
    });

    let reset_filter = move |_| {
        query.set(String::new());
        organization.set("all".to_string());
        node.set("all".to_string());
        date_from.set(String::new());
        date_to.set(String::new());
    };

    let rows = Memo::new(move |_| {
        let tab = active_tab.get();
        projects.with_value(|all| filter.get().apply(&filter_by_tab(all, tab)))
    });

    // Detail dialog
    let detail_open = RwSignal::new(false);
    let detail = RwSignal::new(None::<AuditProject>);
    let open_detail = Callback::new(move |p: AuditProject| {
        detail.set(Some(p));
        detail_open.set(true);
    });

    let count = move |tab: AuditTab| projects.with_value(|all| count_for(all, tab)).to_string();

    view! {
        <PageFrame page=ProjectApprovalView::AuditMonitoring category=PAGE_CAT_LIST>
            <div class="page__header">
                <PageHeader title=ProjectApprovalView::AuditMonitoring.title()>
                    <div class="search-box">
                        {icon("search")}
                        <Input value=query placeholder="搜索项目..." />
                    </div>
                </PageHeader>
            </div>

            <div class="page__content">
                <TabList selected_value=selected_tab>
                    {AuditTab::ALL
                        .iter()
                        .map(|&tab| {
                            let caption = projects.with_value(|all| tab_caption(all, tab));
                            view! { <Tab value=tab.id()>{caption}</Tab> }
                        })
                        .collect_view()}
                </TabList>

                {move || match active_tab.get() {
                    AuditTab::All => view! {
                        <div class="stat-grid stat-grid--4">
                            <StatCard label="总项目数" value=count(AuditTab::All) icon_name="clipboard-check" />
                            <StatCard label="在审项目" value=count(AuditTab::InProgress) icon_name="clock" />
                            <StatCard label="已审项目" value=count(AuditTab::Completed) tone=StatTone::Success icon_name="check-circle" />
                            <StatCard label="异常项目" value=count(AuditTab::Abnormal) tone=StatTone::Error icon_name="alert-triangle" />
                        </div>
                        <div class="card-grid card-grid--2">
                            <CardAnimated title="最近1年立项申报项目总数量">
                                <LineChart data=monthly_applications() area=true />
                            </CardAnimated>
                            <CardAnimated title="审核时效分析" delay_ms=80>
                                <BarChart data=node_durations() suffix="天" />
                            </CardAnimated>
                        </div>
                        <div class="filter-panel">
                            <div class="filter-panel__grid">
                                <label class="filter-panel__field">
                                    <span>"项目名称"</span>
                                    <Input value=query placeholder="搜索项目名称..." />
                                </label>
                                <label class="filter-panel__field">
                                    <span>"申报单位"</span>
                                    <Select value=organization>
                                        <option value="all">"全部单位"</option>
                                        {projects.with_value(|all| organizations(all))
                                            .into_iter()
                                            .map(|org| view! { <option value=org>{org}</option> })
                                            .collect_view()}
                                    </Select>
                                </label>
                                <label class="filter-panel__field">
                                    <span>"审核节点"</span>
                                    <Select value=node>
                                        <option value="all">"全部节点"</option>
                                        {AUDIT_NODES
                                            .iter()
                                            .map(|n| view! { <option value=*n>{*n}</option> })
                                            .collect_view()}
                                    </Select>
                                </label>
                                <div class="filter-panel__field">
                                    <span>"提交时间"</span>
                                    <div class="filter-panel__range">
                                        <DateInput value=date_from title="开始日期" />
                                        <span>"至"</span>
                                        <DateInput value=date_to title="结束日期" />
                                    </div>
                                </div>
                            </div>
                            <div class="filter-panel__actions">
                                <Button appearance=ButtonAppearance::Secondary on_click=reset_filter>
                                    "重置"
                                </Button>
                            </div>
                        </div>
                        <AuditTable rows=rows on_detail=open_detail />
                    }.into_any(),
                    AuditTab::InProgress => view! {
                        <AuditTable rows=rows on_detail=open_detail />
                    }.into_any(),
                    AuditTab::Completed => view! { <CompletedAudits query=query /> }.into_any(),
                    AuditTab::Abnormal => view! { <AbnormalAudits query=query /> }.into_any(),
                }}
            </div>

            <AuditDetailDialog open=detail_open project=detail />
        </PageFrame>
    }
}

#[component]
fn AuditTable(
    #[prop(into)] rows: Signal<Vec<AuditProject>>,
    on_detail: Callback<AuditProject>,
) -> impl IntoView {
    let notice = use_notice();
    let pager = use_table_pager();
    let total = Signal::derive(move || rows.with(|r| r.len()));

    Effect::new(move |_| {
        rows.track();
        pager.reset();
    });

    let page_rows = move || {
        rows.with(|r| pager.paginator(r.len()).slice(r).to_vec())
    };

    view! {
        <Card>
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell resizable=true min_width=200.0>"项目名称"</TableHeaderCell>
                        <TableHeaderCell>"申报单位"</TableHeaderCell>
                        <TableHeaderCell>"提交时间"</TableHeaderCell>
                        <TableHeaderCell>"当前审核节点"</TableHeaderCell>
                        <TableHeaderCell min_width=160.0>"审核进度"</TableHeaderCell>
                        <TableHeaderCell>"操作"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        page_rows()
                            .into_iter()
                            .map(|p| {
                                let for_detail = p.clone();
                                let name = p.name;
                                view! {
                                    <TableRow>
                                        <TableCell><TableCellLayout>{p.name}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{p.organization}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{p.submit_time}</TableCellLayout></TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <Badge variant=status_variant(p.status)>{p.current_node}</Badge>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <ProgressRow label=p.status.label() percent=p.progress as f64 />
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    size=ButtonSize::Small
                                                    on_click=move |_| on_detail.run(for_detail.clone())
                                                >
                                                    "查看详情"
                                                </Button>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    size=ButtonSize::Small
                                                    on_click=move |_| notice.run_action("催办", name)
                                                >
                                                    "催办"
                                                </Button>
                                            </TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                            })
                            .collect_view()
                    }}
                </TableBody>
            </Table>
            <Show when=move || total.get() == 0>
                <div class="empty-state">"没有符合条件的项目"</div>
            </Show>
            <TablePagination pager=pager total=total />
        </Card>
    }
}

#[component]
fn AuditDetailDialog(open: RwSignal<bool>, project: RwSignal<Option<AuditProject>>) -> impl IntoView {
    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>
                        {move || project.with(|p| p.as_ref().map(|p| p.name).unwrap_or_default())}
                    </DialogTitle>
                    <DialogContent>
                        {move || project.get().map(|p| view! {
                            <div class="detail-grid">
                                <div><span class="detail-grid__label">"申报单位"</span>{p.organization}</div>
                                <div><span class="detail-grid__label">"提交时间"</span>{p.submit_time}</div>
                                <div><span class="detail-grid__label">"当前节点"</span>{p.current_node}</div>
                                <div>
                                    <span class="detail-grid__label">"审核状态"</span>
                                    <Badge variant=status_variant(p.status)>{p.status.label()}</Badge>
                                </div>
                            </div>
                            <h4 class="section-title">"审核进度"</h4>
                            <Timeline steps=p.timeline() />
                            <h4 class="section-title">"审核意见"</h4>
                            <LogList entries=review_opinions() />
                        })}
                    </DialogContent>
                    <DialogActions>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| open.set(false)>
                            "关闭"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}

#[component]
fn CompletedAudits(query: RwSignal<String>) -> impl IntoView {
    let audits = StoredValue::new(completed_audits());
    let rows = Memo::new(move |_| audits.with_value(|all| filter_by_query(all, &query.get())));
    let opinions_open = RwSignal::new(false);

    view! {
        <Card>
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell resizable=true min_width=200.0>"项目名称"</TableHeaderCell>
                        <TableHeaderCell>"申报单位"</TableHeaderCell>
                        <TableHeaderCell>"提交时间"</TableHeaderCell>
                        <TableHeaderCell>"完成时间"</TableHeaderCell>
                        <TableHeaderCell>"审核时长"</TableHeaderCell>
                        <TableHeaderCell>"审核结果"</TableHeaderCell>
                        <TableHeaderCell>"操作"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || rows.get().into_iter().map(|a| view! {
                        <TableRow>
                            <TableCell><TableCellLayout>{a.name}</TableCellLayout></TableCell>
                            <TableCell><TableCellLayout>{a.organization}</TableCellLayout></TableCell>
                            <TableCell><TableCellLayout>{a.submit_time}</TableCellLayout></TableCell>
                            <TableCell><TableCellLayout>{a.finish_time}</TableCellLayout></TableCell>
                            <TableCell><TableCellLayout>{format!("{}天", a.duration_days)}</TableCellLayout></TableCell>
                            <TableCell>
                                <TableCellLayout>
                                    <Badge variant=if a.passed { "success" } else { "error" }>{a.result_label()}</Badge>
                                </TableCellLayout>
                            </TableCell>
                            <TableCell>
                                <TableCellLayout>
                                    <Button
                                        appearance=ButtonAppearance::Subtle
                                        size=ButtonSize::Small
                                        on_click=move |_| opinions_open.set(true)
                                    >
                                        "审核意见"
                                    </Button>
                                </TableCellLayout>
                            </TableCell>
                        </TableRow>
                    }).collect_view()}
                </TableBody>
            </Table>
        </Card>

        <Dialog open=opinions_open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"审核意见汇总"</DialogTitle>
                    <DialogContent>
                        <LogList entries=completed_opinions() />
                    </DialogContent>
                    <DialogActions>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| opinions_open.set(false)>
                            "关闭"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}

#[component]
fn AbnormalAudits(query: RwSignal<String>) -> impl IntoView {
    let notice = use_notice();
    let audits = StoredValue::new(abnormal_audits());
    let rows = Memo::new(move |_| audits.with_value(|all| filter_by_query(all, &query.get())));

    let handle_open = RwSignal::new(false);
    let handling = RwSignal::new(None::<AbnormalAudit>);
    let measure = RwSignal::new(DEFAULT_HANDLING_MEASURE.to_string());

    let status = handling_status();

    view! {
        <Card>
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell resizable=true min_width=200.0>"项目名称"</TableHeaderCell>
                        <TableHeaderCell>"申报单位"</TableHeaderCell>
                        <TableHeaderCell>"异常类型"</TableHeaderCell>
                        <TableHeaderCell>"发现时间"</TableHeaderCell>
                        <TableHeaderCell>"当前状态"</TableHeaderCell>
                        <TableHeaderCell>"处理人"</TableHeaderCell>
                        <TableHeaderCell>"操作"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || rows.get().into_iter().map(|a| {
                        let for_dialog = a.clone();
                        view! {
                            <TableRow>
                                <TableCell><TableCellLayout>{a.name}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{a.organization}</TableCellLayout></TableCell>
                                <TableCell>
                                    <TableCellLayout>
                                        <Badge variant=if a.severe { "error" } else { "warning" }>{a.kind}</Badge>
                                    </TableCellLayout>
                                </TableCell>
                                <TableCell><TableCellLayout>{a.found_at}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{a.state}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{a.handler}</TableCellLayout></TableCell>
                                <TableCell>
                                    <TableCellLayout>
                                        <Button
                                            appearance=ButtonAppearance::Subtle
                                            size=ButtonSize::Small
                                            on_click=move |_| {
                                                handling.set(Some(for_dialog.clone()));
                                                handle_open.set(true);
                                            }
                                        >
                                            "处理"
                                        </Button>
                                    </TableCellLayout>
                                </TableCell>
                            </TableRow>
                        }
                    }).collect_view()}
                </TableBody>
            </Table>
        </Card>

        <div class="card-grid card-grid--3">
            <CardAnimated title="异常类型分布">
                {abnormal_distribution()
                    .into_iter()
                    .map(|s| view! { <ProgressRow label=s.label percent=s.percent /> })
                    .collect_view()}
            </CardAnimated>
            <CardAnimated title="异常处理状态" delay_ms=80>
                <DoughnutChart
                    labels=vec!["已处理", "待处理"]
                    values=vec![status.handled as f64, status.pending as f64]
                    colors=vec!["#10b981", "#f59e0b"]
                    center_label=format_percent(status.rate())
                />
                <div class="muted">{format!("待处理 {} 项 · 已处理 {} 项", status.pending, status.handled)}</div>
            </CardAnimated>
            <CardAnimated title="异常处理时效" delay_ms=160>
                {handling_timeliness()
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

        <Dialog open=handle_open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"异常处理"</DialogTitle>
                    <DialogContent>
                        {move || handling.get().map(|a| view! {
                            <div class="detail-grid">
                                <div><span class="detail-grid__label">"项目名称"</span>{a.name}</div>
                                <div><span class="detail-grid__label">"异常类型"</span>{a.kind}</div>
                                <div><span class="detail-grid__label">"当前状态"</span>{a.state}</div>
                                <div><span class="detail-grid__label">"处理人"</span>{a.handler}</div>
                            </div>
                        })}
                        <h4 class="section-title">"处理记录"</h4>
                        <LogList entries=abnormal_handling_log() />
                        <h4 class="section-title">"处理措施"</h4>
                        <Textarea value=measure attr:rows=3 />
                    </DialogContent>
                    <DialogActions>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| handle_open.set(false)>
                            "取消"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| {
                                let target = handling.with(|a| a.as_ref().map(|a| a.name).unwrap_or_default());
                                notice.run_action("提交处理", target);
                                handle_open.set(false);
                            }
                        >
                            "提交处理"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
