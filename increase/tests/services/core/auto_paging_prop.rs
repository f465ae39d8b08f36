use futures::TryStreamExt;
use increase::types::account::AccountCreateParams;
use increase::types::simulation::InterestPaymentSimulateParams;
use increase::types::transaction::TransactionListParams;
use proptest::prelude::*;

use crate::helpers::*;

proptest! {
    #![proptest_config(ProptestConfig { cases: 24, .. ProptestConfig::default() })]
    #[test]
    fn auto_paging_yields_every_item_once_newest_first(count in 0usize..=12, limit in 1u32..=5) {
        tokio_test::block_on(async move {
            let (client, mock) = mock_client();
            let account = client
                .accounts()
                .create(&AccountCreateParams::new("Paged"))
                .await
                .unwrap();
            let mut created = Vec::new();
            for i in 0..count {
                let tx = client
                    .simulations()
                    .interest_payments()
                    .create(&InterestPaymentSimulateParams {
                        account_id: account.id.clone(),
                        amount: i64::try_from(i).unwrap() + 1,
                        ..Default::default()
                    })
                    .await
                    .unwrap();
                created.push(tx.id);
            }
            mock.clear_requests().await;

            let ids: Vec<String> = client
                .transactions()
                .list_auto_paging(TransactionListParams {
                    account_id: Some(account.id.clone()),
                    limit: Some(limit),
                    ..Default::default()
                })
                .map_ok(|tx| tx.id)
                .try_collect()
                .await
                .unwrap();

            created.reverse();
            assert_eq!(ids, created);

            let pages = count.div_ceil(limit as usize).max(1);
            assert_eq!(mock.request_count().await, pages);
        });
    }
}
