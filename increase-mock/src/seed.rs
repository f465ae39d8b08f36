//! Identifiers of the objects every seeded [`MockTransport`](crate::MockTransport) starts with.
//!
//! The seeded sandbox holds one active natural-person entity owning two open
//! accounts. The checking account has an account number, an active card, and
//! two inbound ACH credits totalling [`CHECKING_BALANCE`]. The savings account
//! is empty, so it can be closed.

/// Natural-person entity owning both accounts.
pub const ENTITY_ID: &str = "entity_n8y8tnk2p9339ti393yi";
/// Funded checking account.
pub const CHECKING_ACCOUNT_ID: &str = "account_in71c4amph0vgo2qllky";
/// Empty savings account.
pub const SAVINGS_ACCOUNT_ID: &str = "account_8ks9pzgoaj5syd7tbf6p";
/// Account number on the checking account.
pub const ACCOUNT_NUMBER_ID: &str = "account_number_v18nkfqm6afpsrvy82b2";
/// Active card on the checking account.
pub const CARD_ID: &str = "card_oubs0hwk5rn6knuecxg2";
/// The first inbound ACH credit.
pub const FIRST_TRANSACTION_ID: &str = "transaction_uyrp7fld2ium70oa7oi";
/// The second inbound ACH credit.
pub const SECOND_TRANSACTION_ID: &str = "transaction_4kmdv3bwdfjdm3hpsvao";
/// Balance of the checking account, in cents.
pub const CHECKING_BALANCE: i64 = 1_000_000;
