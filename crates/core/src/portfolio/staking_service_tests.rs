//! Tests for the staking rank aggregation pipeline.

#[cfg(test)]
mod tests {
    use crate::listing::{Listing, ListingStatus, TokenDescriptor, TokenId};
    use crate::portfolio::{
        aggregate_stake_ranking, pin_featured_first, sort_by_apr_desc, AprTable, StakeRecord,
    };
    use crate::quotes::QuoteSnapshot;
    use chrono::Utc;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    const FEATURED: &str = "BETA";

    fn descriptor(token: &str, symbol: &str) -> TokenDescriptor {
        TokenDescriptor {
            token: TokenId::from(token),
            symbol: symbol.to_string(),
            name: format!("{} Token", symbol),
            status: ListingStatus::Listed,
        }
    }

    fn three_token_listing() -> Listing {
        Listing::new(vec![
            descriptor("token0001", "ALPHA"),
            descriptor("token0002", "BETA"),
            descriptor("token0003", "GAMMA"),
        ])
        .unwrap()
    }

    fn empty() -> QuoteSnapshot {
        QuoteSnapshot::new(Utc::now())
    }

    fn apr_table(entries: &[(&str, Decimal)]) -> AprTable {
        entries
            .iter()
            .map(|(token, apr)| (TokenId::from(*token), *apr))
            .collect()
    }

    fn record(token: &str, symbol: &str, apr: Decimal, featured: bool) -> StakeRecord {
        StakeRecord {
            token: TokenId::from(token),
            symbol: symbol.to_string(),
            name: format!("{} Token", symbol),
            status: ListingStatus::Listed,
            staked: false,
            stakable: false,
            apr,
            total_staked: Decimal::ZERO,
            featured,
        }
    }

    #[test]
    fn test_featured_token_leads_then_apr_descending() {
        let listing = three_token_listing();
        let apr = apr_table(&[
            ("token0001", dec!(0.20)),
            ("token0002", dec!(0.50)),
            ("token0003", dec!(0.10)),
        ]);

        let records =
            aggregate_stake_ranking(&listing, &empty(), &empty(), &empty(), &apr, FEATURED);

        let symbols: Vec<&str> = records.iter().map(|r| r.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["BETA", "ALPHA", "GAMMA"]);
        assert!(records[0].featured);
    }

    #[test]
    fn test_featured_token_pinned_ahead_of_higher_apr() {
        let listing = three_token_listing();
        // Featured BETA has the lowest yield; it still leads.
        let apr = apr_table(&[
            ("token0001", dec!(0.20)),
            ("token0002", dec!(0.01)),
            ("token0003", dec!(0.10)),
        ]);

        let records =
            aggregate_stake_ranking(&listing, &empty(), &empty(), &empty(), &apr, FEATURED);

        let symbols: Vec<&str> = records.iter().map(|r| r.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["BETA", "ALPHA", "GAMMA"]);
    }

    #[test]
    fn test_no_row_is_ever_excluded() {
        let listing = three_token_listing();
        // No balances, no APR, no featured match: all rows still present.
        let records = aggregate_stake_ranking(
            &listing,
            &empty(),
            &empty(),
            &empty(),
            &AprTable::new(),
            "NONEXISTENT",
        );

        assert_eq!(records.len(), listing.len());
        for record in &records {
            assert_eq!(record.apr, Decimal::ZERO);
            assert!(!record.featured);
        }
    }

    #[test]
    fn test_empty_listing_yields_empty_ranking() {
        let listing = Listing::new(vec![]).unwrap();
        let records = aggregate_stake_ranking(
            &listing,
            &empty(),
            &empty(),
            &empty(),
            &AprTable::new(),
            FEATURED,
        );
        assert!(records.is_empty());
    }

    #[test]
    fn test_flags_are_strict_greater_than_zero() {
        let listing = three_token_listing();
        let staked = empty()
            .with_quote("token0001", dec!(5))
            .with_quote("token0002", Decimal::ZERO);
        let stakable = empty()
            .with_quote("token0002", dec!(0.000001))
            .with_quote("token0003", dec!(-1));

        let records = aggregate_stake_ranking(
            &listing,
            &staked,
            &stakable,
            &empty(),
            &AprTable::new(),
            "NONEXISTENT",
        );

        // APR ties keep listing order, so rows line up with the listing.
        assert!(records[0].staked && !records[0].stakable); // ALPHA: 5 / missing
        assert!(!records[1].staked && records[1].stakable); // BETA: 0 / tiny
        assert!(!records[2].staked && !records[2].stakable); // GAMMA: missing / negative
    }

    #[test]
    fn test_total_staked_defaults_to_zero() {
        let listing = three_token_listing();
        let totals = empty().with_quote("token0001", dec!(123456));

        let records = aggregate_stake_ranking(
            &listing,
            &empty(),
            &empty(),
            &totals,
            &AprTable::new(),
            "NONEXISTENT",
        );

        assert_eq!(records[0].total_staked, dec!(123456));
        assert_eq!(records[1].total_staked, Decimal::ZERO);
        assert_eq!(records[2].total_staked, Decimal::ZERO);
    }

    #[test]
    fn test_apr_sort_is_stable_on_ties() {
        let mut records = vec![
            record("token0001", "ALPHA", dec!(0.10), false),
            record("token0002", "BETA", dec!(0.30), false),
            record("token0003", "GAMMA", dec!(0.10), false),
            record("token0004", "DELTA", dec!(0.30), false),
        ];

        sort_by_apr_desc(&mut records);

        let symbols: Vec<&str> = records.iter().map(|r| r.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["BETA", "DELTA", "ALPHA", "GAMMA"]);
    }

    #[test]
    fn test_pin_pass_keeps_relative_order_of_the_rest() {
        let mut records = vec![
            record("token0001", "ALPHA", dec!(0.50), false),
            record("token0002", "BETA", dec!(0.40), false),
            record("token0003", "GAMMA", dec!(0.30), true),
            record("token0004", "DELTA", dec!(0.20), false),
        ];

        pin_featured_first(&mut records);

        let symbols: Vec<&str> = records.iter().map(|r| r.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["GAMMA", "ALPHA", "BETA", "DELTA"]);
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let json = serde_json::to_value(record("token0001", "ALPHA", dec!(0.25), false)).unwrap();

        assert_eq!(json["totalStaked"], "0");
        assert_eq!(json["apr"], "0.25");
        assert_eq!(json["staked"], false);
        assert_eq!(json["featured"], false);
    }
}
