/// Records that can be matched against a free-text query
pub trait Searchable {
    /// Display fields the query is matched against
    fn search_fields(&self) -> Vec<&str>;

    /// Case-insensitive substring match over `search_fields`.
    /// A blank query matches everything.
    fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&query))
    }
}

/// Items matching `query`, source order preserved
pub fn filter_by_query<T: Searchable + Clone>(items: &[T], query: &str) -> Vec<T> {
    items
        .iter()
        .filter(|item| item.matches_query(query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        name: &'static str,
        org: &'static str,
    }

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.name, self.org]
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "城市道路改造工程", org: "市交通局" },
            Row { name: "Smart Campus", org: "市教育局" },
        ]
    }

    #[test]
    fn blank_query_keeps_all() {
        assert_eq!(filter_by_query(&rows(), "   ").len(), 2);
    }

    #[test]
    fn matches_any_field() {
        assert_eq!(filter_by_query(&rows(), "交通"), vec![rows()[0].clone()]);
        assert_eq!(filter_by_query(&rows(), "教育").len(), 1);
    }

    #[test]
    fn match_is_case_insensitive() {
        assert_eq!(filter_by_query(&rows(), "smart").len(), 1);
        assert_eq!(filter_by_query(&rows(), "CAMPUS").len(), 1);
    }
}
