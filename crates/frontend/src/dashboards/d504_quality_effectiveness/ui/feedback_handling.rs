use crate::shared::charts::DoughnutChart;
use crate::shared::components::ui::Badge;
use crate::shared::components::{
    use_table_pager, CardAnimated, LogList, PageHeader, StatCard, TablePagination,
};
use crate::shared::icons::icon;
use crate::shared::notice::use_notice;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::dashboards::d504_quality_effectiveness::feedback_handling::*;
use contracts::navigation::{QualityEffectivenessView, SectionView};
use contracts::shared::search::Searchable;
use contracts::shared::status_filter::{filter_by_tab, tab_caption, StatusTab};
use leptos::prelude::*;
use thaw::*;

fn priority_variant(priority: FeedbackPriority) -> &'static str {
    match priority {
        FeedbackPriority::High => "error",
        FeedbackPriority::Medium => "warning",
        FeedbackPriority::Low => "primary",
    }
}

fn status_variant(status: FeedbackStatus) -> &'static str {
    match status {
        FeedbackStatus::Open => "error",
        FeedbackStatus::Processing => "warning",
        FeedbackStatus::Done => "success",
    }
}

#[component]
pub fn FeedbackHandling() -> impl IntoView {
    let notice = use_notice();
    let items = StoredValue::new(feedbacks());

    let selected_tab = RwSignal::new(FeedbackTab::All.id().to_string());
    let active_tab =
        Memo::new(move |_| FeedbackTab::parse(&selected_tab.get()).unwrap_or(FeedbackTab::All));
    let query = RwSignal::new(String::new());

    let rows = Memo::new(move |_| {
        let query = query.get();
        items.with_value(|i| {
            filter_by_tab(i, active_tab.get())
                .into_iter()
                .filter(|f| f.matches_query(&query))
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
    let detail = RwSignal::new(None::<Feedback>);
    let reply = RwSignal::new(String::new());

    let open_detail = move |feedback: Feedback| {
        reply.set(String::new());
        detail.set(Some(feedback));
        detail_open.set(true);
    };

    let send_reply = move |_| {
        let text = reply.get_untracked();
        if text.trim().is_empty() {
            notice.show("请输入回复内容".to_string());
            return;
        }
        if let Some(f) = detail.get_untracked() {
            notice.run_action("回复", f.content);
        }
        reply.set(String::new());
    };

    let types = feedback_types();
    let type_labels: Vec<&'static str> = types.iter().map(|s| s.label).collect();
    let type_values: Vec<f64> = types.iter().map(|s| s.percent).collect();
    let satisfaction_stars = {
        let filled = SATISFACTION_SCORE.round() as usize;
        format!("{}{}", "★".repeat(filled), "☆".repeat(5usize.saturating_sub(filled)))
    };

    view! {
        <PageFrame page=QualityEffectivenessView::FeedbackHandling category=PAGE_CAT_LIST>
            <div class="page__header">
                <PageHeader title=QualityEffectivenessView::FeedbackHandling.title()>
                    <div class="search-box">
                        {icon("search")}
                        <Input value=query placeholder="搜索反馈内容、项目或提交人..." />
                    </div>
                </PageHeader>
            </div>

            <div class="page__content">
                <div class="stat-grid stat-grid--4">
                    {summary_cards()
                        .into_iter()
                        .map(|m| view! { <StatCard label=m.label value=m.value.to_string() /> })
                        .collect_view()}
                </div>

                <TabList selected_value=selected_tab>
                    {FeedbackTab::ALL
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
                                <TableHeaderCell resizable=true min_width=240.0>"反馈内容"</TableHeaderCell>
                                <TableHeaderCell min_width=180.0>"所属项目"</TableHeaderCell>
                                <TableHeaderCell>"提交人"</TableHeaderCell>
                                <TableHeaderCell>"提交时间"</TableHeaderCell>
                                <TableHeaderCell>"优先级"</TableHeaderCell>
                                <TableHeaderCell>"状态"</TableHeaderCell>
                                <TableHeaderCell>"操作"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                let page = rows.with(|r| pager.paginator(r.len()).slice(r).to_vec());
                                page.into_iter().map(|f| view! {
                                    <TableRow>
                                        <TableCell><TableCellLayout truncate=true>{f.content}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{f.project}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{f.submitter}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{f.submit_time}</TableCellLayout></TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <Badge variant=priority_variant(f.priority)>{f.priority.label()}</Badge>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <Badge variant=status_variant(f.status)>{f.status.label()}</Badge>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    size=ButtonSize::Small
                                                    on_click=move |_| open_detail(f)
                                                >
                                                    "查看详情"
                                                </Button>
                                                {f.quick_action().map(|action| view! {
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        size=ButtonSize::Small
                                                        on_click=move |_| notice.run_action(action, f.content)
                                                    >
                                                        {action}
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

                <div class="card-grid card-grid--3">
                    <CardAnimated title="反馈类型分布" delay_ms=80>
                        <DoughnutChart labels=type_labels values=type_values />
                    </CardAnimated>
                    <CardAnimated title="处理效率" delay_ms=160>
                        {handling_efficiency()
                            .into_iter()
                            .map(|m| view! {
                                <div class="metric-row">
                                    <span class="metric-row__label">{m.label}</span>
                                    <span class="metric-row__value">{m.value}</span>
                                </div>
                            })
                            .collect_view()}
                    </CardAnimated>
                    <CardAnimated title="满意度评价" delay_ms=240>
                        <div class="rating">
                            <div class="rating__stars">{satisfaction_stars}</div>
                            <div class="rating__score">{format!("{:.1} / 5", SATISFACTION_SCORE)}</div>
                        </div>
                    </CardAnimated>
                </div>
            </div>

            <Dialog open=detail_open>
                <DialogSurface>
                    <DialogBody>
                        <DialogTitle>"反馈详情"</DialogTitle>
                        <DialogContent>
                            {move || detail.get().map(|f| view! {
                                <div class="detail-grid">
                                    <div><span class="detail-grid__label">"所属项目"</span>{f.project}</div>
                                    <div><span class="detail-grid__label">"提交人"</span>{f.submitter}</div>
                                    <div><span class="detail-grid__label">"提交时间"</span>{f.submit_time}</div>
                                    <div>
                                        <span class="detail-grid__label">"优先级"</span>
                                        <Badge variant=priority_variant(f.priority)>{f.priority.label()}</Badge>
                                    </div>
                                    <div><span class="detail-grid__label">"处理人"</span>{f.handler()}</div>
                                    <div><span class="detail-grid__label">"处理时限"</span>{f.priority.time_limit()}</div>
                                    <div><span class="detail-grid__label">"剩余时间"</span>{f.remaining_time()}</div>
                                </div>
                                <h4 class="section-title">"反馈内容"</h4>
                                <p>{f.content}</p>
                                <p class="muted">{FEEDBACK_LOCATION}</p>
                                <h4 class="section-title">"处理进展"</h4>
                                {
                                    let log = f.progress_log();
                                    if log.is_empty() {
                                        view! { <div class="empty-state">"暂无处理记录"</div> }.into_any()
                                    } else {
                                        view! { <LogList entries=log /> }.into_any()
                                    }
                                }
                                {f.can_reply().then(|| view! {
                                    <h4 class="section-title">"回复"</h4>
                                    <Flex vertical=true gap=FlexGap::Small>
                                        <Textarea value=reply placeholder="输入回复内容..." attr:rows=3 />
                                        <Flex justify=FlexJustify::End>
                                            <Button size=ButtonSize::Small on_click=send_reply>"发送回复"</Button>
                                        </Flex>
                                    </Flex>
                                })}
                            })}
                        </DialogContent>
                        <DialogActions>
                            <Button appearance=ButtonAppearance::Secondary on_click=move |_| detail_open.set(false)>
                                "关闭"
                            </Button>
                            {move || detail.get().and_then(|f| f.dialog_action().map(|action| (f, action))).map(|(f, action)| view! {
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    on_click=move |_| {
                                        notice.run_action(action, f.content);
                                        detail_open.set(false);
                                    }
                                >
                                    {action}
                                </Button>
                            })}
                        </DialogActions>
                    </DialogBody>
                </DialogSurface>
            </Dialog>
        </PageFrame>
    }
}
