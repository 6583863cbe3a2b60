use crate::{
    db::cursor::{Destinations, Slot},
    model::ModelDescriptor,
    traits::Record,
};
use std::marker::PhantomData;

///
/// ScanPlan
///
/// Column -> destination binding for one result set. The column list is fixed
/// for the lifetime of a cursor, so this is resolved once per query rather
/// than once per row.
///

#[derive(Clone, Debug)]
pub struct ScanPlan {
    columns: Vec<String>,
    slots: Vec<Slot>,
}

impl ScanPlan {
    #[must_use]
    pub fn new(descriptor: &ModelDescriptor, columns: Vec<String>) -> Self {
        let slots = columns
            .iter()
            .map(|column| {
                descriptor
                    .lookup(column)
                    .map_or(Slot::Discard, |path| Slot::Field(path.clone()))
            })
            .collect();

        Self { columns, slots }
    }

    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Number of columns bound to a field.
    #[must_use]
    pub fn mapped(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| matches!(slot, Slot::Field(_)))
            .count()
    }
}

///
/// RowMaterializer
///
/// Allocates one fresh `R` per row and exposes it as scan destinations.
/// Never touches the registry.
///

pub struct RowMaterializer<R: Record> {
    plan: ScanPlan,
    nullable: usize,
    _marker: PhantomData<fn() -> R>,
}

impl<R: Record> RowMaterializer<R> {
    #[must_use]
    pub fn new(descriptor: &ModelDescriptor, columns: Vec<String>) -> Self {
        let plan = ScanPlan::new(descriptor, columns);

        let mut template = R::default();
        let nullable = plan
            .slots
            .iter()
            .filter(|slot| match slot {
                Slot::Field(path) => template
                    .field_mut(path)
                    .is_some_and(|target| target.is_nullable()),
                Slot::Discard => false,
            })
            .count();

        Self {
            plan,
            nullable,
            _marker: PhantomData,
        }
    }

    #[must_use]
    pub const fn plan(&self) -> &ScanPlan {
        &self.plan
    }

    /// Number of selected columns whose destination accepts `Null` and is
    /// pre-allocated for every row.
    #[must_use]
    pub const fn nullable(&self) -> usize {
        self.nullable
    }

    /// Allocate a zero-valued instance with every nullable destination
    /// pre-allocated.
    #[must_use]
    pub fn row(&self) -> PendingRow<'_, R> {
        let mut record = R::default();

        for slot in &self.plan.slots {
            let Slot::Field(path) = slot else {
                continue;
            };

            match record.field_mut(path) {
                Some(target) => target.prepare(),
                None => panic!(
                    "internal invariant violated: field path {path} does not resolve on {}",
                    std::any::type_name::<R>()
                ),
            }
        }

        PendingRow {
            record,
            plan: &self.plan,
        }
    }
}

///
/// PendingRow
///
/// A freshly allocated instance waiting for one row to be scanned into it.
///

pub struct PendingRow<'p, R: Record> {
    record: R,
    plan: &'p ScanPlan,
}

impl<R: Record> PendingRow<'_, R> {
    /// Destinations aligned with the plan's column list.
    pub fn destinations(&mut self) -> Destinations<'_> {
        Destinations::new(&mut self.record, &self.plan.columns, &self.plan.slots)
    }

    #[must_use]
    pub fn finish(self) -> R {
        self.record
    }
}

///
/// TESTS
///
