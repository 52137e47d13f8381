//! Picking the most recent items of a collection

use crate::content::ContentItem;
use crate::error::Result;

/// Return the `limit` most recent items, newest first
///
/// Items sharing a date keep their input order. Every date is parsed, even
/// for items that end up past the limit, and the first unparseable one is
/// returned as an error.
pub fn select<T: ContentItem>(items: &[T], limit: usize) -> Result<Vec<&T>> {
    let mut keyed = Vec::with_capacity(items.len());
    for item in items {
        keyed.push((item.parsed_date()?, item));
    }

    // sort_by is stable
    keyed.sort_by(|a, b| b.0.cmp(&a.0));
    keyed.truncate(limit);

    Ok(keyed.into_iter().map(|(_, item)| item).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Article;
    use crate::error::Error;

    fn article(id: &str, date: &str) -> Article {
        Article::new(id, date, id)
    }

    fn dates(items: &[&Article]) -> Vec<String> {
        items.iter().map(|a| a.date.clone()).collect()
    }

    #[test]
    fn test_newest_first_and_truncated() {
        let items = vec![
            article("a", "2023-01-01"),
            article("b", "2023-06-01"),
            article("c", "2023-03-01"),
        ];

        let selected = select(&items, 2).unwrap();
        assert_eq!(dates(&selected), vec!["2023-06-01", "2023-03-01"]);
    }

    #[test]
    fn test_empty_input() {
        let items: Vec<Article> = Vec::new();
        assert!(select(&items, 3).unwrap().is_empty());
    }

    #[test]
    fn test_limit_larger_than_input() {
        let items = vec![article("a", "2022-01-01"), article("b", "2023-01-01")];

        let selected = select(&items, 8).unwrap();
        assert_eq!(selected.len(), 2);
        assert_eq!(dates(&selected), vec!["2023-01-01", "2022-01-01"]);
    }

    #[test]
    fn test_zero_limit() {
        let items = vec![article("a", "2022-01-01")];
        assert!(select(&items, 0).unwrap().is_empty());
    }

    #[test]
    fn test_length_is_min_of_len_and_limit() {
        let items: Vec<Article> = (1..=5)
            .map(|d| article(&format!("p{}", d), &format!("2023-01-0{}", d)))
            .collect();

        for limit in 0..8 {
            assert_eq!(select(&items, limit).unwrap().len(), limit.min(items.len()));
        }
    }

    #[test]
    fn test_output_non_increasing() {
        let items = vec![
            article("a", "2021-05-04"),
            article("b", "2023-02-01T10:00:00Z"),
            article("c", "2022-12-31"),
            article("d", "2023-02-01"),
            article("e", "2020-07-07"),
        ];

        let selected = select(&items, items.len()).unwrap();
        let parsed: Vec<_> = selected.iter().map(|a| a.parsed_date().unwrap()).collect();
        assert!(parsed.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(selected[0].identifier, "b");
    }

    #[test]
    fn test_equal_dates_keep_input_order() {
        let items = vec![
            article("first", "2023-01-01"),
            article("older", "2022-01-01"),
            article("second", "2023-01-01"),
            article("third", "2023-01-01"),
        ];

        let selected = select(&items, 4).unwrap();
        let ids: Vec<_> = selected.iter().map(|a| a.identifier.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third", "older"]);
    }

    #[test]
    fn test_idempotent_when_limit_covers_input() {
        let items = vec![
            article("a", "2023-01-01"),
            article("b", "2023-06-01"),
            article("c", "2023-06-01"),
        ];

        let once = select(&items, 5).unwrap();
        let twice = select(&once, 5).unwrap();
        let once_ids: Vec<_> = once.iter().map(|a| a.identifier.as_str()).collect();
        let twice_ids: Vec<_> = twice.iter().map(|a| a.identifier.as_str()).collect();
        assert_eq!(once_ids, twice_ids);
    }

    #[test]
    fn test_bad_date_propagates() {
        let items = vec![
            article("fine", "2023-01-01"),
            article("broken", "not a date"),
        ];

        // Even a limit that would exclude the broken item fails
        match select(&items, 1) {
            Err(Error::DateParse { identifier, .. }) => assert_eq!(identifier, "broken"),
            other => panic!("expected DateParse, got {:?}", other),
        }
    }
}
