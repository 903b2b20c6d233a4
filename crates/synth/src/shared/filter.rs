//! Filter engine shared by every dashboard.
//!
//! A filter set maps dimensions to allowed value lists. An empty list means
//! "no constraint"; non-empty lists in different dimensions are ANDed and the
//! values inside one list are ORed.

/// Whether `value` passes one dimension's allowed list.
pub fn allows<V: PartialEq>(allowed: &[V], value: &V) -> bool {
    allowed.is_empty() || allowed.contains(value)
}

/// A typed filter set that can judge one entity.
pub trait Criteria<T> {
    fn accepts(&self, item: &T) -> bool;
}

/// Entities accepted by `criteria`, in their original order.
pub fn filter<T: Clone, C: Criteria<T>>(population: &[T], criteria: &C) -> Vec<T> {
    population
        .iter()
        .filter(|item| criteria.accepts(item))
        .cloned()
        .collect()
}

/// Restricts a fixed catalogue (plans, regions, channels) to the allowed
/// values, keeping catalogue order.
pub fn select<V: Copy + PartialEq>(catalogue: &[V], allowed: &[V]) -> Vec<V> {
    catalogue
        .iter()
        .copied()
        .filter(|value| allows(allowed, value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_order::generate_orders;
    use crate::test_support::seeded;
    use contracts::dashboards::d402_sales::SalesFilters;
    use contracts::domain::a002_order::{OrderStatus, ProductCategory};
    use contracts::enums::Categorical;

    #[test]
    fn test_allows_empty_list_accepts_everything() {
        assert!(allows::<u8>(&[], &3));
        assert!(allows(&[1, 3], &3));
        assert!(!allows(&[1, 2], &3));
    }

    #[test]
    fn test_empty_filters_keep_population() {
        let orders = generate_orders(&mut seeded(21), 100);
        let kept = filter(&orders, &SalesFilters::default());
        assert_eq!(kept, orders);
    }

    #[test]
    fn test_filter_is_idempotent_and_ordered() {
        let orders = generate_orders(&mut seeded(22), 100);
        let filters = SalesFilters {
            category: vec![ProductCategory::Electronics, ProductCategory::Books],
            status: vec![OrderStatus::Completed],
        };
        let once = filter(&orders, &filters);
        assert_eq!(filter(&once, &filters), once);
        assert!(once.iter().all(|o| o.status == OrderStatus::Completed));
        assert!(once
            .iter()
            .all(|o| matches!(o.category, ProductCategory::Electronics | ProductCategory::Books)));

        let positions: Vec<usize> = once
            .iter()
            .filter_map(|o| orders.iter().position(|p| p.id == o.id))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_select_keeps_catalogue_order() {
        let picked = select(
            ProductCategory::ALL,
            &[ProductCategory::Books, ProductCategory::Electronics],
        );
        assert_eq!(picked, vec![ProductCategory::Electronics, ProductCategory::Books]);
        assert_eq!(select(ProductCategory::ALL, &[]).len(), ProductCategory::ALL.len());
    }
}
