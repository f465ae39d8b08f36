//! Outbound and inbound ACH transfers.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::common::Currency;
use crate::error::{IncreaseError, Result};
use crate::query::{CreatedAtFilter, InFilter, QueryWriter, ToQuery};
use crate::Extras;

string_enum! {
    /// Lifecycle status of an outbound ACH transfer.
    pub enum AchTransferStatus {
        /// Waiting for approval.
        PendingApproval => "pending_approval",
        /// Canceled before submission.
        Canceled => "canceled",
        /// Held for manual review.
        PendingReviewing => "pending_reviewing",
        /// Approved and queued for the next submission window.
        PendingSubmission => "pending_submission",
        /// Sent to the Federal Reserve.
        Submitted => "submitted",
        /// Returned by the receiving bank.
        Returned => "returned",
        /// Rejected by Increase.
        Rejected => "rejected",
        /// Needs attention.
        RequiresAttention => "requires_attention",
    }
}

string_enum! {
    /// NACHA standard entry class code.
    pub enum StandardEntryClassCode {
        /// Corporate credit or debit.
        CorporateCreditOrDebit => "corporate_credit_or_debit",
        /// Corporate trade exchange.
        CorporateTradeExchange => "corporate_trade_exchange",
        /// Prearranged payment and deposit.
        PrearrangedPaymentsAndDeposit => "prearranged_payments_and_deposit",
        /// Internet-initiated entry.
        InternetInitiated => "internet_initiated",
    }
}

string_enum! {
    /// Whether the external account is checking or savings.
    pub enum AchFunding {
        /// Checking account.
        Checking => "checking",
        /// Savings account.
        Savings => "savings",
    }
}

string_enum! {
    /// Direction of an inbound ACH transfer.
    pub enum InboundAchDirection {
        /// Money enters the account.
        Credit => "credit",
        /// Money leaves the account.
        Debit => "debit",
    }
}

string_enum! {
    /// Lifecycle status of an inbound ACH transfer.
    pub enum InboundAchTransferStatus {
        /// Waiting to be accepted or declined.
        Pending => "pending",
        /// Declined.
        Declined => "declined",
        /// Accepted and posted.
        Accepted => "accepted",
        /// Returned to the originator.
        Returned => "returned",
    }
}

string_enum! {
    /// Object discriminator for outbound ACH transfers.
    pub enum AchTransferType {
        /// Always `ach_transfer`.
        AchTransfer => "ach_transfer",
    }
}

string_enum! {
    /// Object discriminator for inbound ACH transfers.
    pub enum InboundAchTransferType {
        /// Always `inbound_ach_transfer`.
        InboundAchTransfer => "inbound_ach_transfer",
    }
}

impl_query_value!(AchTransferStatus, InboundAchTransferStatus);

/// Who approved a transfer and when.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchTransferApproval {
    /// When the transfer was approved.
    pub approved_at: DateTime<Utc>,
    /// Approving user or API key.
    pub approved_by: Option<String>,
    /// Unrecognized members.
    #[serde(flatten, default, skip_serializing_if = "Extras::is_empty")]
    pub extra: Extras,
}

/// Who canceled a transfer and when.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchTransferCancellation {
    /// When the transfer was canceled.
    pub canceled_at: DateTime<Utc>,
    /// Canceling user or API key.
    pub canceled_by: Option<String>,
    /// Unrecognized members.
    #[serde(flatten, default, skip_serializing_if = "Extras::is_empty")]
    pub extra: Extras,
}

/// Federal Reserve submission details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchTransferSubmission {
    /// Date the funds are expected to settle.
    pub expected_settlement_schedule: Option<String>,
    /// When the transfer was submitted.
    pub submitted_at: DateTime<Utc>,
    /// Trace number assigned at submission.
    pub trace_number: String,
    /// Effective date requested in the batch header.
    pub effective_date: Option<NaiveDate>,
    /// Unrecognized members.
    #[serde(flatten, default, skip_serializing_if = "Extras::is_empty")]
    pub extra: Extras,
}

/// Return details of a returned transfer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchTransferReturnDetails {
    /// When the return arrived.
    pub created_at: DateTime<Utc>,
    /// NACHA return reason code.
    pub return_reason_code: String,
    /// Transaction that credited the funds back.
    pub transaction_id: String,
    /// The returned transfer.
    pub transfer_id: String,
    /// Unrecognized members.
    #[serde(flatten, default, skip_serializing_if = "Extras::is_empty")]
    pub extra: Extras,
}

/// An outbound ACH transfer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchTransfer {
    /// Transfer identifier.
    pub id: String,
    /// Account the funds leave from.
    pub account_id: String,
    /// Destination account number.
    pub account_number: String,
    /// Transfer amount; negative to debit the destination.
    pub amount: i64,
    /// Approval details once approved.
    pub approval: Option<AchTransferApproval>,
    /// Cancellation details once canceled.
    pub cancellation: Option<AchTransferCancellation>,
    /// Company name sent in the batch header.
    pub company_name: Option<String>,
    /// When the transfer was created.
    pub created_at: DateTime<Utc>,
    /// Currency of `amount`; always USD.
    pub currency: Currency,
    /// External account the transfer targets, if any.
    pub external_account_id: Option<String>,
    /// Checking or savings.
    pub funding: AchFunding,
    /// Idempotency key used at creation.
    pub idempotency_key: Option<String>,
    /// Receiver name.
    pub individual_name: Option<String>,
    /// Pending transaction holding the funds.
    pub pending_transaction_id: Option<String>,
    /// Return details once returned.
    #[serde(rename = "return")]
    pub return_details: Option<AchTransferReturnDetails>,
    /// Destination routing number.
    pub routing_number: String,
    /// NACHA standard entry class code.
    pub standard_entry_class_code: StandardEntryClassCode,
    /// Statement descriptor shown to the receiver.
    pub statement_descriptor: String,
    /// Lifecycle status.
    pub status: AchTransferStatus,
    /// Submission details once submitted.
    pub submission: Option<AchTransferSubmission>,
    /// Transaction that moved the funds.
    pub transaction_id: Option<String>,
    /// Object discriminator.
    #[serde(rename = "type")]
    pub kind: AchTransferType,
    /// Unrecognized members.
    #[serde(flatten, default, skip_serializing_if = "Extras::is_empty")]
    pub extra: Extras,
}

/// An inbound ACH transfer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InboundAchTransfer {
    /// Transfer identifier.
    pub id: String,
    /// Receiving account.
    pub account_id: String,
    /// Receiving account number.
    pub account_number_id: String,
    /// Transfer amount, always positive.
    pub amount: i64,
    /// When the transfer arrived.
    pub created_at: DateTime<Utc>,
    /// Credit or debit.
    pub direction: InboundAchDirection,
    /// Originator company name.
    pub originator_company_name: String,
    /// Originator company description.
    pub originator_company_entry_description: String,
    /// Lifecycle status.
    pub status: InboundAchTransferStatus,
    /// Trace number.
    pub trace_number: String,
    /// Transaction that moved the funds, once accepted.
    pub transaction_id: Option<String>,
    /// Declined transaction, if declined.
    pub declined_transaction_id: Option<String>,
    /// Object discriminator.
    #[serde(rename = "type")]
    pub kind: InboundAchTransferType,
    /// Unrecognized members.
    #[serde(flatten, default, skip_serializing_if = "Extras::is_empty")]
    pub extra: Extras,
}

/// Body of `POST /ach_transfers`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchTransferCreateParams {
    /// Account the funds leave from.
    pub account_id: String,
    /// Transfer amount in cents; negative to debit the destination.
    pub amount: i64,
    /// Statement descriptor shown to the receiver.
    pub statement_descriptor: String,
    /// Destination account number; requires `routing_number`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    /// Destination routing number; requires `account_number`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing_number: Option<String>,
    /// Saved external account, instead of account and routing number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_account_id: Option<String>,
    /// Company name sent in the batch header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    /// Checking or savings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub funding: Option<AchFunding>,
    /// Receiver name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub individual_name: Option<String>,
    /// Hold the transfer until approved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_approval: Option<bool>,
    /// NACHA standard entry class code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard_entry_class_code: Option<StandardEntryClassCode>,
}

impl AchTransferCreateParams {
    /// Check the constraints the API enforces before money moves.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the amount is zero, the statement descriptor
    /// is empty, or no destination is given.
    pub fn validate(&self) -> Result<()> {
        if self.account_id.trim().is_empty() {
            return Err(IncreaseError::invalid_arg("account_id must not be empty"));
        }
        if self.amount == 0 {
            return Err(IncreaseError::invalid_arg("amount must not be zero"));
        }
        if self.statement_descriptor.trim().is_empty() {
            return Err(IncreaseError::invalid_arg(
                "statement_descriptor must not be empty",
            ));
        }
        let routed = self.account_number.is_some() && self.routing_number.is_some();
        if self.external_account_id.is_none() && !routed {
            return Err(IncreaseError::invalid_arg(
                "a destination is required: external_account_id, or account_number with routing_number",
            ));
        }
        Ok(())
    }
}

/// Query of `GET /ach_transfers`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AchTransferListParams {
    /// Filter to one account.
    pub account_id: Option<String>,
    /// Creation time range.
    pub created_at: Option<CreatedAtFilter>,
    /// Pagination cursor.
    pub cursor: Option<String>,
    /// Filter to one external account.
    pub external_account_id: Option<String>,
    /// Filter by idempotency key.
    pub idempotency_key: Option<String>,
    /// Page size, 1 to 100.
    pub limit: Option<u32>,
    /// Filter by status.
    pub status: Option<InFilter<AchTransferStatus>>,
}

impl ToQuery for AchTransferListParams {
    fn write_query(&self, w: &mut QueryWriter) {
        w.push_opt("account_id", self.account_id.as_ref())
            .nested("created_at", self.created_at.as_ref())
            .push_opt("cursor", self.cursor.as_ref())
            .push_opt("external_account_id", self.external_account_id.as_ref())
            .push_opt("idempotency_key", self.idempotency_key.as_ref())
            .push_opt("limit", self.limit.as_ref())
            .nested("status", self.status.as_ref());
    }
}

impl_cursor_params!(AchTransferListParams);
