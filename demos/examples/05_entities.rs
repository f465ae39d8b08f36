use chrono::NaiveDate;
use increase::types::account::AccountCreateParams;
use increase::types::entity::{
    EntityCreateParams, IdentificationMethod, IdentificationParams, NaturalPersonParams,
};
use increase::AddressParams;
use increase_demos::common::get_client;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = get_client()?;

    // 1. Register the account holder.
    let entity = client
        .entities()
        .create(&EntityCreateParams::natural_person(NaturalPersonParams {
            address: AddressParams {
                line1: "33 Liberty Street".into(),
                line2: None,
                city: "New York".into(),
                state: "NY".into(),
                zip: "10045".into(),
                country: None,
            },
            date_of_birth: NaiveDate::from_ymd_opt(1970, 1, 31).ok_or("invalid date")?,
            identification: IdentificationParams {
                method: IdentificationMethod::SocialSecurityNumber,
                number: "078051120".into(),
            },
            name: "Ian Crease".into(),
        }))
        .await?;
    println!(
        "{} {:?} is {} ({})",
        entity.id,
        entity.name(),
        entity.status,
        entity.structure
    );

    // 2. Open an account owned by the entity.
    let account = client
        .accounts()
        .create(&AccountCreateParams {
            entity_id: Some(entity.id.clone()),
            ..AccountCreateParams::new("Personal checking")
        })
        .await?;
    println!("opened {} for {}", account.id, entity.id);

    // 3. Archiving fails while the account is open.
    if let Err(e) = client.entities().archive(&entity.id).await {
        println!("archive refused: {e}");
    }

    // 4. Close the account, then archive.
    client.accounts().close(&account.id).await?;
    let archived = client.entities().archive(&entity.id).await?;
    println!("{} is {}", archived.id, archived.status);

    Ok(())
}
