//! Entities: the legal owners of accounts.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{Address, AddressParams};
use crate::error::{IncreaseError, Result};
use crate::query::{CreatedAtFilter, InFilter, QueryWriter, ToQuery};
use crate::Extras;

string_enum! {
    /// Legal structure of an entity.
    pub enum EntityStructure {
        /// A corporation.
        Corporation => "corporation",
        /// An individual.
        NaturalPerson => "natural_person",
        /// Multiple individuals sharing ownership.
        Joint => "joint",
        /// A trust.
        Trust => "trust",
        /// A government authority.
        GovernmentAuthority => "government_authority",
    }
}

string_enum! {
    /// Lifecycle status of an entity.
    pub enum EntityStatus {
        /// Can own open accounts.
        Active => "active",
        /// Archived; cannot open new accounts.
        Archived => "archived",
        /// Disabled by Increase.
        Disabled => "disabled",
    }
}

string_enum! {
    /// Kind of identification document.
    pub enum IdentificationMethod {
        /// US social security number.
        SocialSecurityNumber => "social_security_number",
        /// US individual taxpayer identification number.
        IndividualTaxpayerIdentificationNumber => "individual_taxpayer_identification_number",
        /// Passport.
        Passport => "passport",
        /// Driver's license.
        DriversLicense => "drivers_license",
        /// Another document.
        Other => "other",
    }
}

string_enum! {
    /// Kind of trust.
    pub enum TrustCategory {
        /// The grantor can amend the trust.
        Revocable => "revocable",
        /// The trust cannot be amended.
        Irrevocable => "irrevocable",
    }
}

string_enum! {
    /// Object discriminator for entities.
    pub enum EntityType {
        /// Always `entity`.
        Entity => "entity",
    }
}

impl_query_value!(EntityStatus);

/// Identification of a natural person, as returned (number masked).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identification {
    /// Kind of document.
    pub method: IdentificationMethod,
    /// Last four digits of the document number.
    pub number_last4: String,
    /// Unrecognized members.
    #[serde(flatten, default, skip_serializing_if = "Extras::is_empty")]
    pub extra: Extras,
}

/// An individual, standalone or as part of a larger entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NaturalPerson {
    /// Residential address.
    pub address: Address,
    /// Date of birth.
    pub date_of_birth: NaiveDate,
    /// Identification document.
    pub identification: Option<Identification>,
    /// Legal name.
    pub name: String,
    /// Unrecognized members.
    #[serde(flatten, default, skip_serializing_if = "Extras::is_empty")]
    pub extra: Extras,
}

/// A person with significant ownership or control of a corporation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeneficialOwner {
    /// The person.
    pub individual: NaturalPerson,
    /// Company title of the person.
    pub company_title: Option<String>,
    /// Whether the person owns at least 25% or has control.
    pub prong: String,
    /// Unrecognized members.
    #[serde(flatten, default, skip_serializing_if = "Extras::is_empty")]
    pub extra: Extras,
}

/// Corporation details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Corporation {
    /// Registered address.
    pub address: Address,
    /// Beneficial owners.
    #[serde(default)]
    pub beneficial_owners: Vec<BeneficialOwner>,
    /// State of incorporation.
    pub incorporation_state: Option<String>,
    /// Legal name.
    pub name: String,
    /// Employer identification number.
    pub tax_identifier: Option<String>,
    /// Website.
    pub website: Option<String>,
    /// Unrecognized members.
    #[serde(flatten, default, skip_serializing_if = "Extras::is_empty")]
    pub extra: Extras,
}

/// Joint ownership details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Joint {
    /// The owners.
    pub individuals: Vec<NaturalPerson>,
    /// Display name.
    pub name: String,
    /// Unrecognized members.
    #[serde(flatten, default, skip_serializing_if = "Extras::is_empty")]
    pub extra: Extras,
}

/// Trust details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trust {
    /// Trust address.
    pub address: Address,
    /// Revocable or irrevocable.
    pub category: TrustCategory,
    /// State the trust was formed in.
    pub formation_state: Option<String>,
    /// Legal name.
    pub name: String,
    /// Employer identification number.
    pub tax_identifier: Option<String>,
    /// Unrecognized members.
    #[serde(flatten, default, skip_serializing_if = "Extras::is_empty")]
    pub extra: Extras,
}

/// A legal entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Entity identifier.
    pub id: String,
    /// Set when `structure` is `corporation`.
    pub corporation: Option<Corporation>,
    /// When the entity was created.
    pub created_at: DateTime<Utc>,
    /// Free-form description.
    pub description: Option<String>,
    /// Idempotency key used at creation.
    pub idempotency_key: Option<String>,
    /// Set when `structure` is `joint`.
    pub joint: Option<Joint>,
    /// Set when `structure` is `natural_person`.
    pub natural_person: Option<NaturalPerson>,
    /// Lifecycle status.
    pub status: EntityStatus,
    /// Legal structure.
    pub structure: EntityStructure,
    /// Set when `structure` is `trust`.
    pub trust: Option<Trust>,
    /// Object discriminator.
    #[serde(rename = "type")]
    pub kind: EntityType,
    /// Unrecognized members.
    #[serde(flatten, default, skip_serializing_if = "Extras::is_empty")]
    pub extra: Extras,
}

impl Entity {
    /// Display name regardless of structure.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.corporation
            .as_ref()
            .map(|c| c.name.as_str())
            .or_else(|| self.natural_person.as_ref().map(|p| p.name.as_str()))
            .or_else(|| self.joint.as_ref().map(|j| j.name.as_str()))
            .or_else(|| self.trust.as_ref().map(|t| t.name.as_str()))
    }
}

/// Identification document sent at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentificationParams {
    /// Kind of document.
    pub method: IdentificationMethod,
    /// Full document number.
    pub number: String,
}

/// An individual sent at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NaturalPersonParams {
    /// Residential address.
    pub address: AddressParams,
    /// Date of birth.
    pub date_of_birth: NaiveDate,
    /// Identification document.
    pub identification: IdentificationParams,
    /// Legal name.
    pub name: String,
}

/// A beneficial owner sent at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeneficialOwnerParams {
    /// The person.
    pub individual: NaturalPersonParams,
    /// Company title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_title: Option<String>,
    /// `ownership`, `control`, or both.
    pub prongs: Vec<String>,
}

/// Corporation details sent at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorporationParams {
    /// Registered address.
    pub address: AddressParams,
    /// Beneficial owners.
    pub beneficial_owners: Vec<BeneficialOwnerParams>,
    /// State of incorporation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incorporation_state: Option<String>,
    /// Legal name.
    pub name: String,
    /// Employer identification number.
    pub tax_identifier: String,
    /// Website.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// Joint ownership details sent at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JointParams {
    /// The owners.
    pub individuals: Vec<NaturalPersonParams>,
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Trust details sent at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustParams {
    /// Trust address.
    pub address: AddressParams,
    /// Revocable or irrevocable.
    pub category: TrustCategory,
    /// State the trust was formed in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formation_state: Option<String>,
    /// Legal name.
    pub name: String,
    /// Employer identification number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_identifier: Option<String>,
}

/// Body of `POST /entities`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityCreateParams {
    /// Legal structure; selects which detail member must be present.
    pub structure: EntityStructure,
    /// Corporation details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corporation: Option<CorporationParams>,
    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Joint details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub joint: Option<JointParams>,
    /// Natural person details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub natural_person: Option<NaturalPersonParams>,
    /// Trust details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trust: Option<TrustParams>,
}

impl EntityCreateParams {
    /// Params for an individual.
    #[must_use]
    pub const fn natural_person(person: NaturalPersonParams) -> Self {
        Self {
            structure: EntityStructure::NaturalPerson,
            corporation: None,
            description: None,
            joint: None,
            natural_person: Some(person),
            trust: None,
        }
    }

    /// Params for a corporation.
    #[must_use]
    pub const fn corporation(corporation: CorporationParams) -> Self {
        Self {
            structure: EntityStructure::Corporation,
            corporation: Some(corporation),
            description: None,
            joint: None,
            natural_person: None,
            trust: None,
        }
    }

    /// Check that the detail member matching `structure` is present.
    ///
    /// # Errors
    /// Returns `InvalidArg` naming the missing member.
    pub fn validate(&self) -> Result<()> {
        let present = match self.structure {
            EntityStructure::Corporation => self.corporation.is_some(),
            EntityStructure::NaturalPerson => self.natural_person.is_some(),
            EntityStructure::Joint => self.joint.as_ref().is_some_and(|j| !j.individuals.is_empty()),
            EntityStructure::Trust => self.trust.is_some(),
            EntityStructure::GovernmentAuthority => true,
            EntityStructure::Unknown => {
                return Err(IncreaseError::invalid_arg("entity structure must be set"));
            }
        };
        if present {
            Ok(())
        } else {
            Err(IncreaseError::invalid_arg(format!(
                "structure `{}` requires the `{}` member",
                self.structure, self.structure
            )))
        }
    }
}

/// Query of `GET /entities`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityListParams {
    /// Creation time range.
    pub created_at: Option<CreatedAtFilter>,
    /// Pagination cursor.
    pub cursor: Option<String>,
    /// Filter by idempotency key.
    pub idempotency_key: Option<String>,
    /// Page size, 1 to 100.
    pub limit: Option<u32>,
    /// Filter by status.
    pub status: Option<InFilter<EntityStatus>>,
}

impl ToQuery for EntityListParams {
    fn write_query(&self, w: &mut QueryWriter) {
        w.nested("created_at", self.created_at.as_ref())
            .push_opt("cursor", self.cursor.as_ref())
            .push_opt("idempotency_key", self.idempotency_key.as_ref())
            .push_opt("limit", self.limit.as_ref())
            .nested("status", self.status.as_ref());
    }
}

impl_cursor_params!(EntityListParams);
