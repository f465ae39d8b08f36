use chrono::NaiveDate;
use increase::types::entity::{
    EntityCreateParams, EntityListParams, EntityStatus, EntityStructure, IdentificationMethod,
    IdentificationParams, NaturalPersonParams,
};
use increase::{AddressParams, ApiErrorType, IncreaseError, InFilter, RequestOptions};

use crate::helpers::*;

fn person(name: &str) -> EntityCreateParams {
    EntityCreateParams::natural_person(NaturalPersonParams {
        address: AddressParams {
            line1: "33 Liberty Street".into(),
            line2: None,
            city: "New York".into(),
            state: "NY".into(),
            zip: "10045".into(),
            country: None,
        },
        date_of_birth: NaiveDate::from_ymd_opt(1970, 1, 31).unwrap(),
        identification: IdentificationParams {
            method: IdentificationMethod::SocialSecurityNumber,
            number: "078051120".into(),
        },
        name: name.into(),
    })
}

#[tokio::test]
async fn create_natural_person_and_fetch_it() {
    let (client, _mock) = mock_client();

    let entity = client.entities().create(&person("Grace Hopper")).await.unwrap();
    assert_eq!(entity.structure, EntityStructure::NaturalPerson);
    assert_eq!(entity.status, EntityStatus::Active);
    assert_eq!(entity.name(), Some("Grace Hopper"));
    let identification = entity
        .natural_person
        .as_ref()
        .and_then(|p| p.identification.as_ref())
        .unwrap();
    assert_eq!(identification.number_last4, "1120");

    let fetched = client.entities().get(&entity.id).await.unwrap();
    assert_eq!(fetched.id, entity.id);
}

#[tokio::test]
async fn missing_structure_details_are_rejected_locally() {
    let (client, mock) = mock_client();

    let params = EntityCreateParams {
        natural_person: None,
        ..person("Nobody")
    };
    let err = client.entities().create(&params).await.unwrap_err();
    assert!(matches!(err, IncreaseError::InvalidArg(_)));
    assert_eq!(mock.request_count().await, 0);
}

#[tokio::test]
async fn idempotency_key_is_recorded_and_replayed() {
    let (client, _mock) = mock_client();
    let entities = client
        .entities()
        .with_options(RequestOptions::new().idempotency_key("onboarding-42"));

    let first = entities.create(&person("Ada Lovelace")).await.unwrap();
    assert_eq!(first.idempotency_key.as_deref(), Some("onboarding-42"));
    let second = entities.create(&person("Ada Lovelace")).await.unwrap();
    assert_eq!(second.id, first.id);

    let listed = client
        .entities()
        .list(&EntityListParams {
            idempotency_key: Some("onboarding-42".into()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(listed.data.len(), 1);
}

#[tokio::test]
async fn archive_requires_no_open_accounts() {
    let (client, _mock) = mock_client();

    let err = client.entities().archive(seed::ENTITY_ID).await.unwrap_err();
    assert_eq!(
        err.api_error().map(|e| e.kind),
        Some(ApiErrorType::InvalidOperation)
    );

    let entity = client.entities().create(&person("Temp")).await.unwrap();
    let archived = client.entities().archive(&entity.id).await.unwrap();
    assert_eq!(archived.status, EntityStatus::Archived);

    let active = client
        .entities()
        .list(&EntityListParams {
            status: Some(InFilter::new([EntityStatus::Active])),
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(active.data.iter().all(|e| e.id != entity.id));
}
