//! Row sources that feed model choice fields

use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::Result;

/// A row that can be offered as a choice.
///
/// The label is the row's `Display` output.
pub trait ChoiceRow: fmt::Display {
    fn id(&self) -> i64;
}

/// Trait for deferred, ordered row sources
///
/// Every call to `fetch` runs the query again; implementations must not
/// cache rows between calls.
#[async_trait]
pub trait Queryset: Send + Sync {
    type Row: ChoiceRow + Send;

    /// Execute the query and return rows in query order
    async fn fetch(&self) -> Result<Vec<Self::Row>>;
}

/// Fixed rows, returned in the order given
#[async_trait]
impl<T> Queryset for Vec<T>
where
    T: ChoiceRow + Clone + Send + Sync,
{
    type Row = T;

    async fn fetch(&self) -> Result<Vec<T>> {
        Ok(self.clone())
    }
}

/// Shared in-memory rows; reads whatever the vector holds at fetch time
#[async_trait]
impl<T> Queryset for Arc<RwLock<Vec<T>>>
where
    T: ChoiceRow + Clone + Send + Sync,
{
    type Row = T;

    async fn fetch(&self) -> Result<Vec<T>> {
        Ok(self.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct Plan {
        id: i64,
        name: &'static str,
    }

    impl fmt::Display for Plan {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.name)
        }
    }

    impl ChoiceRow for Plan {
        fn id(&self) -> i64 {
            self.id
        }
    }

    #[tokio::test]
    async fn test_vec_keeps_order() {
        let rows = vec![Plan { id: 2, name: "Pro" }, Plan { id: 1, name: "Free" }];
        let fetched = rows.fetch().await.unwrap();
        let ids: Vec<i64> = fetched.iter().map(ChoiceRow::id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[tokio::test]
    async fn test_shared_rows_are_read_live() {
        let rows = Arc::new(RwLock::new(vec![Plan { id: 1, name: "Free" }]));
        assert_eq!(rows.fetch().await.unwrap().len(), 1);

        rows.write().await.push(Plan { id: 2, name: "Pro" });
        let fetched = rows.fetch().await.unwrap();
        assert_eq!(fetched.len(), 2);
        assert_eq!(fetched[1].to_string(), "Pro");
    }
}
