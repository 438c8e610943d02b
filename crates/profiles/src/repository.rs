use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use innoclinic_core::{AccountId, DoctorId};

use crate::doctor::{Doctor, DoctorDetails};

/// Storage abstraction for doctor profiles.
pub trait DoctorRepository: Send + Sync {
    fn get(&self, id: DoctorId) -> Option<Doctor>;
    /// Store a new profile under the next free id, unless the account already
    /// has one; the existing profile comes back as `Err`.
    ///
    /// The check and the insert are one atomic step.
    fn insert_unique(&self, account_id: AccountId, details: DoctorDetails) -> Result<Doctor, Doctor>;
    /// Replace details; `None` when the id is unknown.
    fn update(&self, id: DoctorId, details: DoctorDetails) -> Option<Doctor>;
    fn remove(&self, id: DoctorId) -> bool;
    /// All profiles ordered by id.
    fn list(&self) -> Vec<Doctor>;
}

impl<S> DoctorRepository for Arc<S>
where
    S: DoctorRepository + ?Sized,
{
    fn get(&self, id: DoctorId) -> Option<Doctor> {
        (**self).get(id)
    }

    fn insert_unique(&self, account_id: AccountId, details: DoctorDetails) -> Result<Doctor, Doctor> {
        (**self).insert_unique(account_id, details)
    }

    fn update(&self, id: DoctorId, details: DoctorDetails) -> Option<Doctor> {
        (**self).update(id, details)
    }

    fn remove(&self, id: DoctorId) -> bool {
        (**self).remove(id)
    }

    fn list(&self) -> Vec<Doctor> {
        (**self).list()
    }
}

#[derive(Debug, Default)]
struct Inner {
    next_id: i32,
    doctors: BTreeMap<DoctorId, Doctor>,
}

/// In-memory store for dev/tests.
///
/// A panic while a guard is held poisons the lock; every operation recovers
/// the guard and keeps serving the data as it was left.
#[derive(Debug, Default)]
pub struct InMemoryDoctorRepository {
    inner: RwLock<Inner>,
}

impl InMemoryDoctorRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl DoctorRepository for InMemoryDoctorRepository {
    fn get(&self, id: DoctorId) -> Option<Doctor> {
        self.read().doctors.get(&id).cloned()
    }

    fn insert_unique(&self, account_id: AccountId, details: DoctorDetails) -> Result<Doctor, Doctor> {
        let mut inner = self.write();
        if let Some(existing) = inner.doctors.values().find(|d| d.account_id == account_id) {
            return Err(existing.clone());
        }

        inner.next_id += 1;
        let doctor = Doctor {
            id: DoctorId::new(inner.next_id),
            account_id,
            details,
        };
        inner.doctors.insert(doctor.id, doctor.clone());
        Ok(doctor)
    }

    fn update(&self, id: DoctorId, details: DoctorDetails) -> Option<Doctor> {
        let mut inner = self.write();
        let doctor = inner.doctors.get_mut(&id)?;
        doctor.details = details;
        Some(doctor.clone())
    }

    fn remove(&self, id: DoctorId) -> bool {
        self.write().doctors.remove(&id).is_some()
    }

    fn list(&self) -> Vec<Doctor> {
        self.read().doctors.values().cloned().collect()
    }
}
