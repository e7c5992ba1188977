use crate::shared::charts::{DoughnutChart, LineChart};
use crate::shared::components::ui::Badge;
use crate::shared::components::{
    use_table_pager, CardAnimated, PageHeader, StatCard, TablePagination,
};
use crate::shared::icons::icon;
use crate::shared::notice::use_notice;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::dashboards::d505_fund_supervision::expenditure_compliance::*;
use contracts::navigation::{FundSupervisionView, SectionView};
use contracts::shared::format::format_yuan;
use contracts::shared::search::Searchable;
use contracts::shared::status_filter::{filter_by_tab, StatusTab};
use leptos::prelude::*;
use thaw::*;

fn status_variant(status: ComplianceStatus) -> &'static str {
    match status {
        ComplianceStatus::Compliant => "success",
        ComplianceStatus::Pending => "warning",
        ComplianceStatus::NonCompliant => "error",
    }
}

fn tone_class(tone: Tone) -> &'static str {
    match tone {
        Tone::Success => "finding finding--success",
        Tone::Warning => "finding finding--warning",
        Tone::Info => "finding finding--info",
    }
}

#[component]
fn TransactionRecords() -> impl IntoView {
    let notice = use_notice();
    let records = StoredValue::new(transactions());
    let query = RwSignal::new(String::new());
    let status = RwSignal::new(ComplianceFilter::All.id().to_string());

    let rows = Memo::new(move |_| {
        let filter = ComplianceFilter::parse(&status.get()).unwrap_or(ComplianceFilter::All);
        let query = query.get();
        records.with_value(|r| {
            filter_by_tab(r, filter)
                .into_iter()
                .filter(|t| t.matches_query(&query))
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
    let detail = RwSignal::new(None::<Transaction>);

    view! {
        <Card>
            <div class="filter-panel">
                <div class="search-box">
                    {icon("search")}
                    <Input value=query placeholder="搜索项目、类型或审批人..." />
                </div>
                <Select value=status size=SelectSize::Small>
                    {ComplianceFilter::ALL
                        .iter()
                        .map(|f| view! { <option value=f.id()>{f.label()}</option> })
                        .collect_view()}
                </Select>
            </div>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell resizable=true min_width=200.0>"项目名称"</TableHeaderCell>
                        <TableHeaderCell>"交易日期"</TableHeaderCell>
                        <TableHeaderCell>"交易类型"</TableHeaderCell>
                        <TableHeaderCell>"金额"</TableHeaderCell>
                        <TableHeaderCell>"审批人"</TableHeaderCell>
                        <TableHeaderCell>"合规状态"</TableHeaderCell>
                        <TableHeaderCell>"操作"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let page = rows.with(|r| pager.paginator(r.len()).slice(r).to_vec());
                        page.into_iter().map(|t| view! {
                            <TableRow>
                                <TableCell><TableCellLayout>{t.project}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{t.date}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{t.kind}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{format_yuan(t.amount)}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{t.approver}</TableCellLayout></TableCell>
                                <TableCell>
                                    <TableCellLayout>
                                        <Badge variant=status_variant(t.status)>{t.status.label()}</Badge>
                                        {t.issue.map(|issue| view! { <span class="muted">{issue}</span> })}
                                    </TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout>
                                        <Button
                                            appearance=ButtonAppearance::Subtle
                                            size=ButtonSize::Small
                                            on_click=move |_| {
                                                detail.set(Some(t));
                                                detail_open.set(true);
                                            }
                                        >
                                            "查看详情"
                                        </Button>
                                    </TableCellLayout>
                                </TableCell>
                            </TableRow>
                        }).collect_view()
                    }}
                </TableBody>
            </Table>
            <TablePagination pager=pager total=total />
        </Card>

        <Dialog open=detail_open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"交易详情"</DialogTitle>
                    <DialogContent>
                        {move || detail.get().map(|t| view! {
                            <div class="detail-grid">
                                <div><span class="detail-grid__label">"项目名称"</span>{t.project}</div>
                                <div><span class="detail-grid__label">"交易日期"</span>{t.date}</div>
                                <div><span class="detail-grid__label">"交易类型"</span>{t.kind}</div>
                                <div><span class="detail-grid__label">"金额"</span>{format_yuan(t.amount)}</div>
                                <div><span class="detail-grid__label">"审批人"</span>{t.approver}</div>
                                <div>
                                    <span class="detail-grid__label">"合规状态"</span>
                                    <Badge variant=status_variant(t.status)>{t.status.label()}</Badge>
                                </div>
                            </div>
                            <h4 class="section-title">"合规检查"</h4>
                            <div class="detail-grid">
                                <div><span class="detail-grid__label">"检查时间"</span>{t.check_time()}</div>
                                <div><span class="detail-grid__label">"检查人"</span>{CHECKED_BY}</div>
                            </div>
                            <ul class="checklist">
                                <li>{t.budget_check()}</li>
                                <li>{APPROVAL_CHECK}</li>
                                <li>{INVOICE_CHECK}</li>
                            </ul>
                            {t.issue.map(|issue| view! {
                                <div class="alert-banner alert-banner--error">{icon("alert-triangle")}<span>{issue}</span></div>
                            })}
                            <div class="attachment">{icon("file-contract")}<span>{ATTACHMENT}</span></div>
                        })}
                    </DialogContent>
                    <DialogActions>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| detail_open.set(false)>
                            "关闭"
                        </Button>
                        {move || detail.get().map(|t| {
                            t.review_actions()
                                .iter()
                                .map(|&action| view! {
                                    <Button
                                        appearance=ButtonAppearance::Primary
                                        on_click=move |_| {
                                            notice.run_action(action, t.project);
                                            detail_open.set(false);
                                        }
                                    >
                                        {action}
                                    </Button>
                                })
                                .collect_view()
                        })}
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}

#[component]
fn ComplianceRules() -> impl IntoView {
    let notice = use_notice();
    view! {
        <Card>
            <Flex justify=FlexJustify::End>
                <Button
                    appearance=ButtonAppearance::Primary
                    size=ButtonSize::Small
                    on_click=move |_| notice.run_action("新增规则", "合规规则")
                >
                    "新增规则"
                </Button>
            </Flex>
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell min_width=160.0>"规则名称"</TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=320.0>"规则描述"</TableHeaderCell>
                        <TableHeaderCell>"规则类别"</TableHeaderCell>
                        <TableHeaderCell>"状态"</TableHeaderCell>
                        <TableHeaderCell>"操作"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {compliance_rules().into_iter().map(|rule| view! {
                        <TableRow>
                            <TableCell><TableCellLayout>{rule.name}</TableCellLayout></TableCell>
                            <TableCell><TableCellLayout>{rule.description}</TableCellLayout></TableCell>
                            <TableCell><TableCellLayout>{rule.category}</TableCellLayout></TableCell>
                            <TableCell>
                                <TableCellLayout>
                                    <Badge variant=if rule.active { "success" } else { "secondary" }>{rule.status_label()}</Badge>
                                </TableCellLayout>
                            </TableCell>
                            <TableCell>
                                <TableCellLayout>
                                    <Button
                                        appearance=ButtonAppearance::Subtle
                                        size=ButtonSize::Small
                                        on_click=move |_| notice.run_action("编辑规则", rule.name)
                                    >
                                        "编辑"
                                    </Button>
                                </TableCellLayout>
                            </TableCell>
                        </TableRow>
                    }).collect_view()}
                </TableBody>
            </Table>
        </Card>
    }
}

#[component]
fn ComplianceAnalysis() -> impl IntoView {
    let issues = issue_distribution();
    let labels: Vec<&'static str> = issues.iter().map(|s| s.label).collect();
    let values: Vec<f64> = issues.iter().map(|s| s.percent).collect();

    view! {
        <div class="card-grid card-grid--2">
            <CardAnimated title="不合规问题分布">
                <DoughnutChart labels=labels values=values />
            </CardAnimated>
            <CardAnimated title="合规趋势" delay_ms=80>
                <LineChart data=compliance_trend() />
            </CardAnimated>
        </div>
        <CardAnimated title="合规风险评估" delay_ms=160>
            {risk_notes().into_iter().map(|note| view! {
                <div class=tone_class(note.tone)>
                    <div class="finding__head">
                        <span class="finding__title">{note.title}</span>
                    </div>
                    <div class="finding__detail finding__detail--pre">{note.body}</div>
                </div>
            }).collect_view()}
        </CardAnimated>
    }
}

#[component]
pub fn ExpenditureCompliance() -> impl IntoView {
    let selected_tab = RwSignal::new(ComplianceTab::default().id().to_string());
    let active_tab =
        Memo::new(move |_| ComplianceTab::parse(&selected_tab.get()).unwrap_or_default());

    view! {
        <PageFrame page=FundSupervisionView::ExpenditureCompliance category=PAGE_CAT_LIST>
            <div class="page__header">
                <PageHeader title=FundSupervisionView::ExpenditureCompliance.title() />
            </div>

            <div class="page__content">
                <div class="stat-grid stat-grid--4">
                    {summary_cards()
                        .into_iter()
                        .map(|m| view! { <StatCard label=m.label value=m.value.to_string() /> })
                        .collect_view()}
                </div>

                <TabList selected_value=selected_tab>
                    {ComplianceTab::ALL
                        .into_iter()
                        .map(|tab| view! { <Tab value=tab.id()>{tab.label()}</Tab> })
                        .collect_view()}
                </TabList>

                {move || match active_tab.get() {
                    ComplianceTab::Records => view! { <TransactionRecords /> }.into_any(),
                    ComplianceTab::Rules => view! { <ComplianceRules /> }.into_any(),
                    ComplianceTab::Analysis => view! { <ComplianceAnalysis /> }.into_any(),
                }}
            </div>
        </PageFrame>
    }
}
