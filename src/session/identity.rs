//! Authenticated farmer identity and its persisted form.

use serde::{Deserialize, Serialize};

use crate::Result;

/// Profile of the signed-in farmer.
///
/// The serialized form is the session record: a flat JSON object with
/// camelCase field names and no version tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Registry identifier of the farmer.
    pub farmer_id: String,
    /// Phone number.
    pub phone: String,
    /// Free-form location.
    pub location: String,
    /// Years of farming experience.
    pub experience: u32,
    /// Farming specialization.
    pub specialization: String,
    /// Avatar image URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Identity {
    /// Merge `update` into this identity. Fields left unset in the update
    /// are retained.
    pub fn apply(&mut self, update: IdentityUpdate) {
        let IdentityUpdate {
            id,
            name,
            email,
            farmer_id,
            phone,
            location,
            experience,
            specialization,
            avatar,
        } = update;

        if let Some(id) = id {
            self.id = id;
        }
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(email) = email {
            self.email = email;
        }
        if let Some(farmer_id) = farmer_id {
            self.farmer_id = farmer_id;
        }
        if let Some(phone) = phone {
            self.phone = phone;
        }
        if let Some(location) = location {
            self.location = location;
        }
        if let Some(experience) = experience {
            self.experience = experience;
        }
        if let Some(specialization) = specialization {
            self.specialization = specialization;
        }
        if avatar.is_some() {
            self.avatar = avatar;
        }
    }

    /// Encode as a session record.
    pub fn to_record(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode a session record.
    pub fn from_record(record: &str) -> Result<Self> {
        Ok(serde_json::from_str(record)?)
    }
}

/// Partial identity used for profile edits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IdentityUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub farmer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl IdentityUpdate {
    /// Create an empty update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the email.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the phone number.
    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Set the location.
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Set years of experience.
    pub fn experience(mut self, years: u32) -> Self {
        self.experience = Some(years);
        self
    }

    /// Set the specialization.
    pub fn specialization(mut self, specialization: impl Into<String>) -> Self {
        self.specialization = Some(specialization.into());
        self
    }

    /// Set the avatar URI.
    pub fn avatar(mut self, uri: impl Into<String>) -> Self {
        self.avatar = Some(uri.into());
        self
    }

    /// Check if the update would change nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
