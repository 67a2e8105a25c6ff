//! Customer Models

use std::fmt::{Debug, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use crate::ids::TypedId;

/// Customer Id
pub type CustomerId = TypedId<Customer>;

/// Address Id
pub type AddressId = TypedId<Address>;

/// Authenticated account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Customer id.
    pub id: CustomerId,
    /// Given name.
    pub firstname: String,
    /// Family name.
    pub lastname: String,
    /// Account email.
    pub email: String,

    /// `YYYY-MM-DD`, absent when never provided.
    #[serde(default, deserialize_with = "empty_date_as_none")]
    pub birthday: Option<String>,

    /// Newsletter opt-in.
    #[serde(default)]
    pub newsletter: bool,
}

impl Customer {
    /// First and last name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }
}

/// Postal address owned by a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Address id.
    pub id: AddressId,

    /// Customer label, e.g. "Maison".
    #[serde(default)]
    pub alias: String,

    /// Recipient given name.
    pub firstname: String,
    /// Recipient family name.
    pub lastname: String,
    /// Company name.
    pub company: Option<String>,
    /// Street line.
    pub address1: String,
    /// Extra street line.
    pub address2: Option<String>,
    /// Postal code.
    pub postcode: String,
    /// City.
    pub city: String,
    /// Backend country id.
    pub id_country: u64,

    /// Country display name.
    pub country: Option<String>,
    /// Contact phone.
    pub phone: Option<String>,
}

impl Address {
    /// Street, postcode and city on one line.
    pub fn one_line(&self) -> String {
        let mut line = self.address1.clone();

        if let Some(extra) = self.address2.as_deref().filter(|extra| !extra.is_empty()) {
            line.push_str(", ");
            line.push_str(extra);
        }

        format!("{line}, {} {}", self.postcode, self.city)
    }
}

/// Fields accepted when creating or updating an address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AddressInput {
    /// Customer label.
    pub alias: String,
    /// Recipient given name.
    pub firstname: String,
    /// Recipient family name.
    pub lastname: String,

    /// Company name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    /// Street line.
    pub address1: String,

    /// Extra street line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,

    /// Postal code.
    pub postcode: String,
    /// City.
    pub city: String,
    /// Backend country id.
    pub id_country: u64,

    /// Contact phone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl From<&Address> for AddressInput {
    fn from(address: &Address) -> Self {
        Self {
            alias: address.alias.clone(),
            firstname: address.firstname.clone(),
            lastname: address.lastname.clone(),
            company: address.company.clone(),
            address1: address.address1.clone(),
            address2: address.address2.clone(),
            postcode: address.postcode.clone(),
            city: address.city.clone(),
            id_country: address.id_country,
            phone: address.phone.clone(),
        }
    }
}

/// Profile edit. The backend requires the current password to confirm it.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct ProfileUpdate {
    /// Given name.
    pub firstname: String,
    /// Family name.
    pub lastname: String,
    /// Account email.
    pub email: String,

    /// `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,

    /// Newsletter opt-in.
    pub newsletter: bool,
    /// Current password, redacted from `Debug`.
    pub password: String,
}

impl Debug for ProfileUpdate {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("ProfileUpdate")
            .field("firstname", &self.firstname)
            .field("lastname", &self.lastname)
            .field("email", &self.email)
            .field("birthday", &self.birthday)
            .field("newsletter", &self.newsletter)
            .finish_non_exhaustive()
    }
}

/// Password change form. Both values are redacted from `Debug`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct PasswordChange {
    /// Password in use.
    pub current_password: String,
    /// Replacement password.
    pub new_password: String,
}

impl Debug for PasswordChange {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("PasswordChange").finish_non_exhaustive()
    }
}

// PrestaShop stores unset birthdays as "0000-00-00".
fn empty_date_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;

    Ok(value.filter(|date| !date.is_empty() && date != "0000-00-00"))
}
