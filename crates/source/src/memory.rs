use crate::{PermitSource, SourceError, check_number, validated};
use async_trait::async_trait;
use permit_types::{Permit, PermitNumber};

/// Serves permits from memory, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPermitSource {
    permits: Vec<Permit>,
}

impl InMemoryPermitSource {
    pub fn new(permits: impl IntoIterator<Item = Permit>) -> Self {
        let mut source = Self::default();
        for permit in permits {
            source.insert(permit);
        }
        source
    }

    /// Adds a permit, replacing any permit with the same number.
    pub fn insert(&mut self, permit: Permit) {
        match self.permits.iter_mut().find(|p| p.number == permit.number) {
            Some(existing) => *existing = permit,
            None => self.permits.push(permit),
        }
    }

    pub fn len(&self) -> usize {
        self.permits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.permits.is_empty()
    }
}

#[async_trait]
impl PermitSource for InMemoryPermitSource {
    async fn fetch_permit(&self, number: &PermitNumber) -> Result<Permit, SourceError> {
        check_number(number)?;
        let permit = self
            .permits
            .iter()
            .find(|p| &p.number == number)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(number.clone()))?;
        validated(permit)
    }

    async fn list_permit_numbers(&self) -> Result<Vec<PermitNumber>, SourceError> {
        Ok(self.permits.iter().map(|p| p.number.clone()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use permit_types::Item;

    fn permit(number: &str, name: &str) -> Permit {
        Permit {
            number: PermitNumber::from(number),
            name: name.into(),
            items: vec![Item::new("EPI", "Luvas", Some("Sim"))],
        }
    }

    #[tokio::test]
    async fn lists_in_insertion_order_and_replaces_duplicates() {
        let mut source = InMemoryPermitSource::new([permit("2", "b"), permit("1", "a")]);
        source.insert(permit("2", "b2"));
        assert_eq!(source.len(), 2);

        let numbers = source.list_permit_numbers().await.unwrap();
        assert_eq!(numbers, vec![PermitNumber::from("2"), PermitNumber::from("1")]);
        let fetched = source.fetch_permit(&PermitNumber::from("2")).await.unwrap();
        assert_eq!(fetched.name, "b2");
    }

    #[tokio::test]
    async fn unknown_and_blank_numbers_fail() {
        let source = InMemoryPermitSource::new([permit("1", "a")]);
        assert!(matches!(
            source.fetch_permit(&PermitNumber::from("9")).await,
            Err(SourceError::NotFound(_))
        ));
        assert!(matches!(
            source.fetch_permit(&PermitNumber::from("  ")).await,
            Err(SourceError::InvalidNumber)
        ));
    }

    #[tokio::test]
    async fn malformed_permits_are_rejected_on_fetch() {
        let mut bad = permit("3", "c");
        bad.items.push(Item::new("", "Sem categoria", None));
        let source = InMemoryPermitSource::new([bad]);
        assert!(matches!(
            source.fetch_permit(&PermitNumber::from("3")).await,
            Err(SourceError::Invalid { .. })
        ));
    }
}
