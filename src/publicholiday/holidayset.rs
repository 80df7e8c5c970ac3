use std::collections::BTreeMap;
use std::collections::btree_map::{Entry, Iter};

use chrono::NaiveDate;
use tracing::debug;

use super::holidaykind::HolidayKind;

/// Holidays keyed by date, iterated in ascending date order.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct HolidaySet {
    holidays: BTreeMap<NaiveDate, HolidayKind>
}

impl HolidaySet {
    pub fn new() -> HolidaySet {
        HolidaySet { holidays: BTreeMap::new() }
    }

    /// Adds `kind` on `date` unless the date is already taken. Returns
    /// whether the entry was added; the earlier holiday always stays.
    pub fn insert(&mut self, date: NaiveDate, kind: HolidayKind) -> bool {
        match self.holidays.entry(date) {
            Entry::Vacant(entry) => {
                entry.insert(kind);
                true
            },
            Entry::Occupied(entry) => {
                debug!(%date, kept = %entry.get(), dropped = %kind, "holiday date collision");
                false
            }
        }
    }

    pub fn get(&self, date: &NaiveDate) -> Option<HolidayKind> {
        self.holidays.get(date).copied()
    }

    pub fn name(&self, date: &NaiveDate) -> Option<&'static str> {
        self.get(date).map(|kind| kind.name())
    }

    pub fn contains(&self, date: &NaiveDate) -> bool {
        self.holidays.contains_key(date)
    }

    pub fn contains_kind(&self, kind: HolidayKind) -> bool {
        self.holidays.values().any(|k| *k == kind)
    }

    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, NaiveDate, HolidayKind> {
        self.holidays.iter()
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.holidays.keys().copied().collect()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.holidays.values().map(|kind| kind.name()).collect()
    }

    /// Entries of `self` satisfying `predicate`, as a new set.
    pub fn filtered<F>(&self, mut predicate: F) -> HolidaySet
        where F: FnMut(&NaiveDate, &HolidayKind) -> bool {
        HolidaySet {
            holidays: self.holidays
                .iter()
                .filter(|(date, kind)| predicate(*date, *kind))
                .map(|(date, kind)| (*date, *kind))
                .collect()
        }
    }

    /// Moves every entry of `other` into `self`, keeping existing entries
    /// on collision.
    pub fn merge(&mut self, other: HolidaySet) {
        for (date, kind) in other.holidays {
            self.insert(date, kind);
        }
    }

    pub fn is_subset(&self, other: &HolidaySet) -> bool {
        self.holidays.iter().all(|(date, kind)| other.get(date) == Some(*kind))
    }
}

impl<'a> IntoIterator for &'a HolidaySet {
    type Item = (&'a NaiveDate, &'a HolidayKind);
    type IntoIter = Iter<'a, NaiveDate, HolidayKind>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<(NaiveDate, HolidayKind)> for HolidaySet {
    fn extend<T: IntoIterator<Item = (NaiveDate, HolidayKind)>>(&mut self, iter: T) {
        for (date, kind) in iter {
            self.insert(date, kind);
        }
    }
}

impl FromIterator<(NaiveDate, HolidayKind)> for HolidaySet {
    fn from_iter<T: IntoIterator<Item = (NaiveDate, HolidayKind)>>(iter: T) -> HolidaySet {
        let mut set = HolidaySet::new();
        set.extend(iter);
        set
    }
}
