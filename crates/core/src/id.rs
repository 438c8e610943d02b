//! Strongly-typed identifiers used across the services.
//!
//! Identifiers are the integer keys used on the wire (`/api/doctors/42`).

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::Error;

/// Identifier of a doctor profile.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct DoctorId(i32);

/// Identifier of an account (owned by the identity service).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct AccountId(i32);

/// Identifier of a clinic office.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct OfficeId(i32);

/// Identifier of a medical specialization.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct SpecializationId(i32);

macro_rules! impl_int_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            pub const fn new(value: i32) -> Self {
                Self(value)
            }

            pub const fn get(&self) -> i32 {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<i32> for $t {
            fn from(value: i32) -> Self {
                Self(value)
            }
        }

        impl From<$t> for i32 {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let value = s.trim().parse::<i32>().map_err(|e| {
                    Error::validation(
                        concat!($name, ".invalid"),
                        format!("{}: {}", $name, e),
                    )
                })?;
                Ok(Self(value))
            }
        }
    };
}

impl_int_newtype!(DoctorId, "DoctorId");
impl_int_newtype!(AccountId, "AccountId");
impl_int_newtype!(OfficeId, "OfficeId");
impl_int_newtype!(SpecializationId, "SpecializationId");
