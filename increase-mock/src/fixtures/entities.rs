use increase_types::entity::{
    BeneficialOwnerParams, CorporationParams, EntityCreateParams, JointParams,
    NaturalPersonParams, TrustParams,
};
use serde_json::{Value, json};

use super::address;

fn last4(number: &str) -> &str {
    let cut = number
        .char_indices()
        .rev()
        .nth(3)
        .map_or(0, |(i, _)| i);
    &number[cut..]
}

pub fn natural_person(p: &NaturalPersonParams) -> Value {
    json!({
        "address": address(&p.address),
        "date_of_birth": p.date_of_birth,
        "identification": {
            "method": p.identification.method,
            "number_last4": last4(&p.identification.number),
        },
        "name": p.name,
    })
}

fn beneficial_owner(p: &BeneficialOwnerParams) -> Value {
    json!({
        "individual": natural_person(&p.individual),
        "company_title": p.company_title,
        "prong": p.prongs.first().map_or("ownership", String::as_str),
    })
}

pub fn corporation(p: &CorporationParams) -> Value {
    json!({
        "address": address(&p.address),
        "beneficial_owners": p.beneficial_owners.iter().map(beneficial_owner).collect::<Vec<_>>(),
        "incorporation_state": p.incorporation_state,
        "name": p.name,
        "tax_identifier": p.tax_identifier,
        "website": p.website,
    })
}

pub fn joint(p: &JointParams) -> Value {
    let name = p.name.clone().unwrap_or_else(|| {
        p.individuals
            .iter()
            .map(|i| i.name.as_str())
            .collect::<Vec<_>>()
            .join(" and ")
    });
    json!({
        "individuals": p.individuals.iter().map(natural_person).collect::<Vec<_>>(),
        "name": name,
    })
}

pub fn trust(p: &TrustParams) -> Value {
    json!({
        "address": address(&p.address),
        "category": p.category,
        "formation_state": p.formation_state,
        "name": p.name,
        "tax_identifier": p.tax_identifier,
    })
}

pub fn entity(
    id: &str,
    created_at: &str,
    params: &EntityCreateParams,
    idempotency_key: Option<&str>,
) -> Value {
    json!({
        "id": id,
        "corporation": params.corporation.as_ref().map(corporation),
        "created_at": created_at,
        "description": params.description,
        "idempotency_key": idempotency_key,
        "joint": params.joint.as_ref().map(joint),
        "natural_person": params.natural_person.as_ref().map(natural_person),
        "status": "active",
        "structure": params.structure,
        "trust": params.trust.as_ref().map(trust),
        "type": "entity",
    })
}
