pub mod business;
pub mod dashboard_kind;

pub use business::*;
pub use dashboard_kind::DashboardKind;

/// A fixed lookup table of category values.
///
/// Generators draw from [`Categorical::ALL`] and filters validate against it,
/// so an entity can never carry a value outside its table.
pub trait Categorical: Sized + Copy + PartialEq + 'static {
    /// Every value of the table in declaration order (never empty).
    const ALL: &'static [Self];

    /// Display label, identical to the serialized form.
    fn label(&self) -> &'static str;

    /// Reverse lookup by label.
    fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.label() == label)
    }
}
