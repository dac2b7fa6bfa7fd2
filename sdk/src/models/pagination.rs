use serde::{Deserialize, Serialize};

/// Standard paginated envelope used by every list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<T>,
}

/// The participants listing is served either paginated or as a bare array,
/// depending on the server version. Both shapes normalize to [`Paginated`].
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum MaybePaginated<T> {
    Paginated(Paginated<T>),
    Bare(Vec<T>),
}

impl<T> MaybePaginated<T> {
    pub(crate) fn into_paginated(self) -> Paginated<T> {
        match self {
            MaybePaginated::Paginated(page) => page,
            MaybePaginated::Bare(results) => Paginated {
                count: results.len() as u64,
                next: None,
                previous: None,
                results,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_normalize_bare_array() {
        let page: MaybePaginated<u32> = serde_json::from_str("[1, 2, 3]").unwrap();
        let page = page.into_paginated();
        assert_eq!(page.count, 3);
        assert_eq!(page.results, vec![1, 2, 3]);
        assert!(page.next.is_none());
    }

    #[test]
    fn should_keep_paginated_envelope() {
        let payload = r#"{"count": 12, "next": "?page=2", "previous": null, "results": [1]}"#;
        let page: MaybePaginated<u32> = serde_json::from_str(payload).unwrap();
        let page = page.into_paginated();
        assert_eq!(page.count, 12);
        assert_eq!(page.next.as_deref(), Some("?page=2"));
        assert_eq!(page.results, vec![1]);
    }
}
