use chrono::NaiveDate;
use increase_types::Resource;
use increase_types::account::AccountCreateParams;
use increase_types::account_number::AccountNumberCreateParams;
use increase_types::card::CardCreateParams;
use increase_types::entity::{
    EntityCreateParams, IdentificationMethod, IdentificationParams, NaturalPersonParams,
};
use serde_json::json;

use super::Sandbox;
use crate::fixtures::transactions::Posting;
use crate::fixtures::{self, accounts, cards, entities, transactions};
use crate::seed;

impl Sandbox {
    pub(super) fn seed(&mut self) {
        let now = self.tick();
        let person = NaturalPersonParams {
            address: fixtures::sandbox_address(),
            date_of_birth: NaiveDate::from_ymd_opt(1970, 1, 31).unwrap_or_default(),
            identification: IdentificationParams {
                method: IdentificationMethod::SocialSecurityNumber,
                number: "078051120".into(),
            },
            name: "Ian Crease".into(),
        };
        self.insert(
            Resource::Entity,
            entities::entity(
                seed::ENTITY_ID,
                &now,
                &EntityCreateParams::natural_person(person),
                None,
            ),
        );

        for (id, name) in [
            (seed::CHECKING_ACCOUNT_ID, "Checking"),
            (seed::SAVINGS_ACCOUNT_ID, "Savings"),
        ] {
            let now = self.tick();
            let params = AccountCreateParams {
                entity_id: Some(seed::ENTITY_ID.into()),
                ..AccountCreateParams::new(name)
            };
            self.insert(Resource::Account, accounts::account(id, &now, &params, None));
        }

        let now = self.tick();
        let params = AccountNumberCreateParams {
            account_id: seed::CHECKING_ACCOUNT_ID.into(),
            name: "Payroll deposits".into(),
            ..AccountNumberCreateParams::default()
        };
        self.insert(
            Resource::AccountNumber,
            accounts::account_number(seed::ACCOUNT_NUMBER_ID, &now, &params, "9876543210", None),
        );

        let now = self.tick();
        let params = CardCreateParams {
            account_id: seed::CHECKING_ACCOUNT_ID.into(),
            description: Some("Office supplies".into()),
            ..CardCreateParams::default()
        };
        self.insert(
            Resource::Card,
            cards::card(seed::CARD_ID, &now, &params, "4242", (1, 2027), None),
        );

        for (id, amount) in [
            (seed::FIRST_TRANSACTION_ID, 600_000),
            (seed::SECOND_TRANSACTION_ID, seed::CHECKING_BALANCE - 600_000),
        ] {
            let now = self.tick();
            let transfer_id = self.next_id("inbound_ach_transfer");
            let source = json!({
                "amount": amount,
                "originator_company_name": "BIG BANK",
                "originator_company_entry_description": "PAYROLL",
                "transfer_id": transfer_id,
            });
            let posting = Posting {
                id,
                account_id: seed::CHECKING_ACCOUNT_ID,
                amount,
                created_at: &now,
                description: "INVOICE 2468",
                route: Some((seed::ACCOUNT_NUMBER_ID, "account_number")),
            };
            self.insert(
                Resource::Transaction,
                transactions::transaction(&posting, "inbound_ach_transfer", &source),
            );
        }
    }
}
