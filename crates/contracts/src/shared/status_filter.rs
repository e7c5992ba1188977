/// Tab bar over a list of records.
///
/// The first entry of `ALL` is expected to be the catch-all tab that keeps
/// every record.
pub trait StatusTab: Copy + Eq + 'static {
    type Record;

    const ALL: &'static [Self];

    fn id(&self) -> &'static str;
    fn label(&self) -> &'static str;
    fn matches(&self, record: &Self::Record) -> bool;

    fn parse(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.id() == id)
    }
}

/// Records shown under `tab`, source order preserved
pub fn filter_by_tab<T>(records: &[T::Record], tab: T) -> Vec<T::Record>
where
    T: StatusTab,
    T::Record: Clone,
{
    records.iter().filter(|r| tab.matches(r)).cloned().collect()
}

pub fn count_for<T: StatusTab>(records: &[T::Record], tab: T) -> usize {
    records.iter().filter(|r| tab.matches(r)).count()
}

/// Count per tab, in tab order
pub fn tab_counts<T: StatusTab>(records: &[T::Record]) -> Vec<(T, usize)> {
    T::ALL
        .iter()
        .map(|&tab| (tab, count_for(records, tab)))
        .collect()
}

/// Tab caption with count, e.g. `审核中 (2)`
pub fn tab_caption<T: StatusTab>(records: &[T::Record], tab: T) -> String {
    format!("{} ({})", tab.label(), count_for(records, tab))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        name: &'static str,
        done: bool,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Tab {
        All,
        Open,
        Done,
    }

    impl StatusTab for Tab {
        type Record = Item;
        const ALL: &'static [Self] = &[Tab::All, Tab::Open, Tab::Done];

        fn id(&self) -> &'static str {
            match self {
                Tab::All => "all",
                Tab::Open => "open",
                Tab::Done => "done",
            }
        }

        fn label(&self) -> &'static str {
            match self {
                Tab::All => "全部",
                Tab::Open => "进行中",
                Tab::Done => "已完成",
            }
        }

        fn matches(&self, record: &Item) -> bool {
            match self {
                Tab::All => true,
                Tab::Open => !record.done,
                Tab::Done => record.done,
            }
        }
    }

    fn items() -> Vec<Item> {
        vec![
            Item { name: "a", done: false },
            Item { name: "b", done: true },
            Item { name: "c", done: false },
        ]
    }

    #[test]
    fn all_tab_returns_everything_unchanged() {
        assert_eq!(filter_by_tab(&items(), Tab::All), items());
    }

    #[test]
    fn filter_keeps_source_order() {
        let open: Vec<&str> = filter_by_tab(&items(), Tab::Open).iter().map(|i| i.name).collect();
        assert_eq!(open, vec!["a", "c"]);
    }

    #[test]
    fn counts_partition_the_total() {
        let counts = tab_counts::<Tab>(&items());
        assert_eq!(counts, vec![(Tab::All, 3), (Tab::Open, 2), (Tab::Done, 1)]);
        let partial: usize = counts.iter().skip(1).map(|(_, c)| c).sum();
        assert_eq!(partial, items().len());
    }

    #[test]
    fn parse_and_caption() {
        assert_eq!(Tab::parse("done"), Some(Tab::Done));
        assert_eq!(Tab::parse("x"), None);
        assert_eq!(tab_caption(&items(), Tab::Open), "进行中 (2)");
    }
}
