//! Staff compensation profiles.
//!
//! Unrelated staff roles expose the same position/salary/address fields
//! through the [`HasCompensationProfile`] capability rather than through a
//! shared base type.

/// The fields every staff role carries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompensationProfile {
    pub position: String,
    pub salary: f64,
    pub address: String,
}

/// Uniform access to a role's [`CompensationProfile`].
///
/// Implementors only supply the two accessors; the getters and setters are
/// provided.
pub trait HasCompensationProfile {
    fn profile(&self) -> &CompensationProfile;
    fn profile_mut(&mut self) -> &mut CompensationProfile;

    fn position(&self) -> &str {
        &self.profile().position
    }

    fn set_position(&mut self, position: &str) {
        self.profile_mut().position = position.to_string();
    }

    fn salary(&self) -> f64 {
        self.profile().salary
    }

    fn set_salary(&mut self, salary: f64) {
        self.profile_mut().salary = salary;
    }

    fn address(&self) -> &str {
        &self.profile().address
    }

    fn set_address(&mut self, address: &str) {
        self.profile_mut().address = address.to_string();
    }
}

macro_rules! staff_role {
    ($($(#[$meta:meta])* $name:ident),+ $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Default, PartialEq)]
            pub struct $name {
                profile: CompensationProfile,
            }

            impl HasCompensationProfile for $name {
                fn profile(&self) -> &CompensationProfile {
                    &self.profile
                }

                fn profile_mut(&mut self) -> &mut CompensationProfile {
                    &mut self.profile
                }
            }
        )+
    };
}

staff_role!(Manager, Developer, Designer);

/// Render a profile as `Position/Salary/Address` lines.
pub fn describe_profile(staff: &dyn HasCompensationProfile) -> String {
    format!(
        "Position: {}\nSalary: {:.2}\nAddress: {}",
        staff.position(),
        staff.salary(),
        staff.address()
    )
}
